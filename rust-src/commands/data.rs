//! Data subcommands for charted and metric widgets.

use anyhow::{bail, Result};

use crate::models::{WidgetData, WidgetKind};
use crate::store::{DataEdit, EditError};
use crate::visualization::text::{GREEN, RESET};

use super::{print_not_found, Context};


/// Translate `data set` arguments into the edit for a widget's kind.
///
/// Health days take `value` as steps and keep their calories unless
/// `calories` is given.
pub fn set_edit(data: &WidgetData, name: &str, value: f64, calories: Option<u64>) -> Result<DataEdit> {
    let name = name.trim().to_string();
    if name.is_empty() {
        bail!("Entry name must not be empty");
    }
    if !value.is_finite() {
        bail!("Value must be a finite number");
    }

    let edit = match data {
        WidgetData::Finance(_) => DataEdit::SetCategory { name, value },
        WidgetData::Investment(_) => DataEdit::SetMonth { month: name, value },
        WidgetData::Metric(_) => DataEdit::SetField { field: name, value },
        WidgetData::Health(samples) => {
            if value < 0.0 || value.fract() != 0.0 {
                bail!("Steps must be a whole, non-negative number");
            }
            let kept = samples.iter().find(|s| s.day == name).map(|s| s.calories).unwrap_or(0);
            DataEdit::SetDay { day: name, steps: value as u64, calories: calories.unwrap_or(kept) }
        }
        WidgetData::Todo(_) | WidgetData::Lifestyle(_) => {
            bail!("{} widgets hold tasks; use 'wdash task' instead", data.kind_tag())
        }
        WidgetData::Mismatched { kind, .. } => return Err(EditError::MismatchedData(*kind).into()),
        WidgetData::Unrecognized { kind, .. } => bail!("Cannot edit data of unsupported widget type \"{kind}\""),
    };

    if calories.is_some() && data.kind() != Some(WidgetKind::Health) {
        bail!("--calories only applies to health widgets");
    }
    Ok(edit)
}


/// Set a named entry.
pub fn set(ctx: &Context, widget_id: &str, name: &str, value: f64, calories: Option<u64>) -> Result<()> {
    let mut dashboard = ctx.open()?;
    let Some(widget) = dashboard.store().get(widget_id) else {
        print_not_found(widget_id);
        return Ok(());
    };

    let edit = set_edit(&widget.data, name, value, calories)?;
    dashboard.edit_data(widget_id, &edit)?;

    println!("{GREEN}+ Set {} = {value}{RESET}", name.trim());
    ctx.finish(&mut dashboard)
}


/// Remove a named entry.
pub fn remove(ctx: &Context, widget_id: &str, name: &str) -> Result<()> {
    let mut dashboard = ctx.open()?;
    let edit = DataEdit::RemoveEntry { name: name.to_string() };

    if !dashboard.edit_data(widget_id, &edit)? {
        print_not_found(widget_id);
        return Ok(());
    }

    println!("{GREEN}+ Removed {name}{RESET}");
    ctx.finish(&mut dashboard)
}
