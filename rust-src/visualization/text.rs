//! Plain-terminal output helpers for one-shot commands.

use crate::models::{Widget, WidgetData};


pub const ORANGE: &str = "\x1b[38;5;208m";
pub const CYAN: &str = "\x1b[36m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const RED: &str = "\x1b[31m";
pub const DIM: &str = "\x1b[2m";
pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";
pub const BAR_WIDTH: usize = 20;


/// Compact number with a K/M/bn suffix.
pub fn format_number(num: f64) -> String {
    let magnitude = num.abs();
    if magnitude >= 1_000_000_000.0 {
        format!("{:.1}bn", num / 1_000_000_000.0)
    } else if magnitude >= 1_000_000.0 {
        format!("{:.1}M", num / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.1}K", num / 1_000.0)
    } else if num.fract() == 0.0 {
        format!("{num:.0}")
    } else {
        format!("{num:.1}")
    }
}


/// Whole number with thousands separators, e.g. `25,000`.
pub fn format_thousands(num: f64) -> String {
    let rounded = num.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let chars: Vec<char> = digits.chars().collect();

    let mut result = String::new();
    if rounded < 0 {
        result.push('-');
    }
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }
    result
}


/// Text bar of `width` cells filled in proportion to `value / max_value`.
pub fn create_bar(value: f64, max_value: f64, width: usize, color: &str) -> String {
    if max_value <= 0.0 {
        return format!("{DIM}{}{RESET}", "░".repeat(width));
    }

    let filled = ((value.max(0.0) / max_value) * width as f64) as usize;
    let filled = filled.min(width);

    format!(
        "{color}{}{RESET}{DIM}{}{RESET}",
        "█".repeat(filled),
        "░".repeat(width - filled),
    )
}


/// One-line description of a widget's contents.
pub fn summarize(widget: &Widget) -> String {
    match &widget.data {
        WidgetData::Finance(points) => {
            let total: f64 = points.iter().map(|p| p.value).sum();
            format!("{} categories, total {}", points.len(), format_number(total))
        }
        WidgetData::Todo(tasks) | WidgetData::Lifestyle(tasks) => {
            let done = tasks.iter().filter(|t| t.completed).count();
            format!("{done}/{} done", tasks.len())
        }
        WidgetData::Health(samples) => {
            if samples.is_empty() {
                return "no days".to_string();
            }
            let steps: u64 = samples.iter().map(|s| s.steps).sum();
            let avg = steps as f64 / samples.len() as f64;
            format!("{} days, avg {} steps", samples.len(), format_number(avg))
        }
        WidgetData::Investment(months) => match months.last() {
            Some(last) => format!("{} months, latest {}", months.len(), format_number(last.value)),
            None => "no months".to_string(),
        },
        WidgetData::Metric(summary) => format!("{} fields", summary.0.len()),
        WidgetData::Mismatched { kind, .. } => format!("{kind} data in another shape, kept as is"),
        WidgetData::Unrecognized { kind, .. } => format!("unsupported type \"{kind}\""),
    }
}
