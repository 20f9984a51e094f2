//! Remove and clear commands.

use std::io::{self, Write};

use anyhow::Result;

use crate::visualization::text::{BOLD, GREEN, RED, RESET, YELLOW};

use super::{print_not_found, Context};


/// Delete one widget.
pub fn widget(ctx: &Context, id: &str) -> Result<()> {
    let mut dashboard = ctx.open()?;
    let title = dashboard.store().get(id).map(|w| w.title.clone());

    if !dashboard.delete_widget(id)? {
        print_not_found(id);
        return Ok(());
    }

    println!("{GREEN}+ Removed \"{}\"{RESET}", title.unwrap_or_default());
    ctx.finish(&mut dashboard)
}


/// Delete every widget, after confirmation unless `force`.
pub fn all(ctx: &Context, force: bool) -> Result<()> {
    let mut dashboard = ctx.open()?;
    let count = dashboard.widgets().len();

    if count == 0 {
        println!("{YELLOW}The dashboard has no widgets{RESET}");
        return Ok(());
    }

    if !force {
        println!("{BOLD}{RED}WARNING: This will delete all {count} widgets!{RESET}");
        println!("{YELLOW}Export a backup first with 'wdash export' if you may want them back.{RESET}\n");

        print!("Type 'delete' to confirm: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if input.trim().to_lowercase() != "delete" {
            println!("{YELLOW}Cancelled{RESET}");
            return Ok(());
        }
    }

    dashboard.clear_all()?;
    println!("{GREEN}+ Removed {count} widgets{RESET}");
    ctx.finish(&mut dashboard)
}
