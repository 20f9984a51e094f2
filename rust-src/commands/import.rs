//! Import command - replace the dashboard from a JSON backup.

use std::path::Path;

use anyhow::Result;

use crate::data::read_import;
use crate::models::SettingsDraft;
use crate::visualization::text::{BOLD, CYAN, DIM, GREEN, RESET, YELLOW};

use super::Context;


/// Run the import command.
///
/// The whole file is validated before anything changes. Imported settings
/// are only committed with `with_settings`.
pub fn run(ctx: &Context, file: &Path, with_settings: bool) -> Result<()> {
    let imported = read_import(file)?;
    let mut dashboard = ctx.open()?;

    println!("{BOLD}{CYAN}Importing dashboard{RESET}\n");
    println!("File: {}", file.display());
    if let Some(date) = &imported.export_date {
        println!("Exported: {date}");
    }

    let mut draft = SettingsDraft::new(dashboard.settings());
    if let Some(settings) = imported.settings {
        draft.replace(settings);
    }

    dashboard.replace_all(imported.widgets)?;
    let count = dashboard.widgets().len();
    println!("\n{GREEN}+ Imported {count} widgets{RESET}");

    if draft.is_dirty() {
        if with_settings {
            dashboard.update_settings(draft.into_settings())?;
            println!("{GREEN}+ Imported settings{RESET}");
        } else {
            println!("{YELLOW}The file also carries settings; they were not applied.{RESET}");
            println!("{DIM}Re-run with --with-settings to apply them.{RESET}");
        }
    }

    ctx.finish(&mut dashboard)
}
