use clap::{ArgAction, Parser, Subcommand};
use pgr_progress::config::OutputFormat;
use pgr_progress::models::StageKey;
use pgr_progress::validation::{clap_stage_validator, clap_student_id_validator};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pgr-progress")]
#[command(
    about = "Derive PGR student stage progress from viva-team and submission records",
    long_about = None
)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Path to a config file (defaults to PGR_PROGRESS_CONFIG or the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding <student-id>.json|yaml|yml records files
    #[arg(long, global = true)]
    pub records_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the progress dashboard for a student
    Status {
        /// Student ID (alphanumeric, dash, underscore only; max 64 characters)
        #[arg(value_parser = clap_student_id_validator)]
        student_id: String,

        /// Read records from this file instead of the records directory
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show one stage of a student's progress in detail
    Stage {
        /// Student ID (alphanumeric, dash, underscore only; max 64 characters)
        #[arg(value_parser = clap_student_id_validator)]
        student_id: String,

        /// Stage: registration, progression or final
        #[arg(value_parser = clap_stage_validator)]
        stage: StageKey,

        /// Read records from this file instead of the records directory
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// List the stages, their submission types and deadlines
    Catalog,

    /// Validate a records file and report coerced fields
    Check {
        /// Path to a .json, .yaml or .yml records file
        path: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}
