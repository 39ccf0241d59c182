pub mod catalog;
pub mod check;
pub mod display;
pub mod indicators;
pub mod stage;
pub mod status;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{Config, OutputFormat};
use crate::records::{load_records_file, FileRecordsSource, RecordsSource, StudentRecords};

/// Settings shared by every command, after config and flags are merged.
#[derive(Debug, Clone)]
pub struct Settings {
    pub records_dir: PathBuf,
    pub format: OutputFormat,
}

impl Settings {
    pub fn new(
        config: &Config,
        records_dir: Option<PathBuf>,
        format: Option<OutputFormat>,
    ) -> Self {
        Self {
            records_dir: records_dir.unwrap_or_else(|| config.records_dir.clone()),
            format: format.unwrap_or(config.format),
        }
    }

    /// Load a student's records, from `file` when given, otherwise from the
    /// records directory.
    pub fn load_student(&self, student_id: &str, file: Option<&Path>) -> Result<StudentRecords> {
        let context = || format!("Failed to load records for {student_id}");
        match file {
            Some(path) => {
                let mut records = load_records_file(path).with_context(context)?;
                records.ensure_student(student_id).with_context(context)?;
                Ok(records)
            }
            None => {
                let source = FileRecordsSource::new(&self.records_dir);
                source.load(student_id).with_context(|| {
                    format!("{} in {}", context(), source.dir().display())
                })
            }
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
