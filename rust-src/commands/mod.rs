//! CLI command implementations.

pub mod add;
pub mod data;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod reorder;
pub mod remove;
pub mod settings;
pub mod show;
pub mod stats;
pub mod task;
pub mod templates;

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::config::{ensure_data_dir, get_db_path};
use crate::storage::SqliteStore;
use crate::store::Dashboard;
use crate::visualization::text::{DIM, RESET, YELLOW};


/// Options shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub data_dir: PathBuf,
    /// Write widget changes even when autosave is off.
    pub save: bool,
}


impl Context {
    /// Open the dashboard stored in the data directory.
    pub fn open(&self) -> Result<Dashboard<SqliteStore>> {
        ensure_data_dir(&self.data_dir)?;
        let store = SqliteStore::open(&get_db_path(&self.data_dir))?;
        Ok(Dashboard::open(store))
    }

    /// Settle widget changes that autosave did not write.
    pub fn finish(&self, dashboard: &mut Dashboard<SqliteStore>) -> Result<()> {
        if !dashboard.has_unsaved_changes() {
            return Ok(());
        }

        if self.save {
            dashboard.save()?;
            println!("{DIM}Saved {} widgets{RESET}", dashboard.widgets().len());
        } else {
            println!("{YELLOW}Autosave is off: changes were not saved. Re-run with --save to keep them.{RESET}");
        }
        Ok(())
    }
}


/// Trimmed title, rejecting blank ones.
pub fn require_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        bail!("Widget title must not be empty");
    }
    Ok(title.to_string())
}


pub fn print_not_found(id: &str) {
    println!("{YELLOW}No widget with id {id} (nothing changed){RESET}");
}
