pub mod catalog;
pub mod classifier;
pub mod commands;
pub mod completions;
pub mod config;
pub mod logging;
pub mod models;
pub mod records;
pub mod validation;
