//! Task subcommands for todo and lifestyle widgets.

use anyhow::{bail, Result};

use crate::store::DataEdit;
use crate::visualization::text::{DIM, GREEN, RESET};

use super::{print_not_found, Context};


/// Append a task to widget `widget_id`.
pub fn add(ctx: &Context, widget_id: &str, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        bail!("Task text must not be empty");
    }

    let mut dashboard = ctx.open()?;
    let task_id = dashboard.issue_id();
    let edit = DataEdit::AddTask { id: task_id.clone(), text: text.to_string() };

    if !dashboard.edit_data(widget_id, &edit)? {
        print_not_found(widget_id);
        return Ok(());
    }

    println!("{GREEN}+ Added task \"{text}\"{RESET}");
    println!("{DIM}task id: {task_id}{RESET}");
    ctx.finish(&mut dashboard)
}


/// Flip a task between done and not done.
pub fn toggle(ctx: &Context, widget_id: &str, task_id: &str) -> Result<()> {
    let mut dashboard = ctx.open()?;
    let edit = DataEdit::ToggleTask { task_id: task_id.to_string() };

    if !dashboard.edit_data(widget_id, &edit)? {
        print_not_found(widget_id);
        return Ok(());
    }

    let task = dashboard
        .store()
        .get(widget_id)
        .and_then(|w| w.data.tasks())
        .and_then(|tasks| tasks.iter().find(|t| t.id == task_id));
    if let Some(task) = task {
        let state = if task.completed { "done" } else { "not done" };
        println!("{GREEN}+ \"{}\" is now {state}{RESET}", task.text);
    }
    ctx.finish(&mut dashboard)
}


/// Remove a task.
pub fn remove(ctx: &Context, widget_id: &str, task_id: &str) -> Result<()> {
    let mut dashboard = ctx.open()?;
    let edit = DataEdit::RemoveTask { task_id: task_id.to_string() };

    if !dashboard.edit_data(widget_id, &edit)? {
        print_not_found(widget_id);
        return Ok(());
    }

    println!("{GREEN}+ Removed task {task_id}{RESET}");
    ctx.finish(&mut dashboard)
}
