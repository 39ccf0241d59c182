use anyhow::Result;

use crate::catalog::StageCatalog;
use crate::config::OutputFormat;

use super::display::write_catalog;
use super::print_json;

/// List the stage catalog
pub fn execute(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&StageCatalog::all()),
        OutputFormat::Text => {
            let mut out = String::new();
            write_catalog(&mut out)?;
            print!("{out}");
            Ok(())
        }
    }
}
