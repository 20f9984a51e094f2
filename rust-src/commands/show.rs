//! Show command - the interactive dashboard.

use anyhow::Result;

use crate::tui;

use super::Context;


/// Run the interactive dashboard.
pub fn run(ctx: &Context) -> Result<()> {
    let dashboard = ctx.open()?;
    let mut dashboard = tui::run(dashboard)?;
    ctx.finish(&mut dashboard)
}
