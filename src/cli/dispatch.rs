use anyhow::Result;
use clap::CommandFactory;
use pgr_progress::commands::{catalog, check, stage, status, Settings};
use pgr_progress::completions::{generate_completions, Shell};
use std::str::FromStr;

use super::types::{Cli, Commands};

pub fn dispatch(command: Commands, settings: &Settings) -> Result<()> {
    match command {
        Commands::Status { student_id, file } => {
            status::execute(settings, &student_id, file.as_deref())
        }
        Commands::Stage {
            student_id,
            stage,
            file,
        } => stage::execute(settings, &student_id, stage, file.as_deref()),
        Commands::Catalog => catalog::execute(settings.format),
        Commands::Check { path } => check::execute(&path, settings.format),
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell, &mut std::io::stdout());
            Ok(())
        }
    }
}
