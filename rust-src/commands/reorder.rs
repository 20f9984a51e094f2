//! Move command - relocate a widget in the display order.

use anyhow::{bail, Result};

use crate::store::DragGesture;
use crate::visualization::text::{DIM, GREEN, RESET};

use super::{print_not_found, Context};


/// Move widget `id` to the 1-based `position`.
///
/// Positions past the end move the widget to the end.
pub fn run(ctx: &Context, id: &str, position: usize) -> Result<()> {
    if position == 0 {
        bail!("Positions start at 1");
    }

    let mut dashboard = ctx.open()?;
    let Some(current) = dashboard.store().index_of(id) else {
        print_not_found(id);
        return Ok(());
    };

    let mut gesture = DragGesture::new();
    gesture.begin(id);
    gesture.hover(position - 1);

    if !dashboard.drop_dragged(&mut gesture, position - 1)? {
        println!("{DIM}Widget {id} is already at position {}{RESET}", current + 1);
        return Ok(());
    }

    let now = dashboard.store().index_of(id).map(|i| i + 1).unwrap_or(position);
    println!("{GREEN}+ Moved widget {id} to position {now}{RESET}");
    ctx.finish(&mut dashboard)
}
