mod cli;

use anyhow::Result;
use clap::Parser;
use pgr_progress::commands::Settings;
use pgr_progress::config::Config;
use pgr_progress::logging;

use cli::{dispatch, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    logging::init(cli.verbose, &config.log_level)?;

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let settings = Settings::new(&config, cli.records_dir, cli.format);
    tracing::debug!(?settings, "resolved settings");

    dispatch(cli.command, &settings)
}
