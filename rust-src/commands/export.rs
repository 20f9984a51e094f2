//! Export command - write a JSON backup of the dashboard.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, Utc};

use crate::data::{backup_file_name, ExportDocument};
use crate::visualization::text::{BOLD, CYAN, GREEN, RESET};

use super::Context;


/// Run the export command.
///
/// Without `output` the file goes to the current directory under a dated
/// default name.
pub fn run(ctx: &Context, output: Option<PathBuf>) -> Result<()> {
    let dashboard = ctx.open()?;

    let output_path = output.unwrap_or_else(|| PathBuf::from(backup_file_name(Local::now().date_naive())));

    println!("{BOLD}{CYAN}Exporting dashboard{RESET}\n");

    let document = ExportDocument::new(dashboard.widgets(), dashboard.settings(), Utc::now());
    document.write_to(&output_path)?;

    println!("{GREEN}+ Exported {} widgets and settings{RESET}", document.widgets.len());
    println!("File: {}", output_path.display());

    Ok(())
}
