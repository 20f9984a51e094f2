//! Dashboard-wide widget statistics.

use std::collections::BTreeMap;

use crate::models::{Widget, WidgetData, WidgetKind};


/// Counts across the whole widget collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetStats {
    pub total_widgets: usize,
    /// Widgets per kind; unrecognized kinds are counted under their tag.
    pub by_kind: BTreeMap<String, usize>,
    pub total_tasks: usize,
    pub completed_tasks: usize,
}


impl WidgetStats {
    /// Count for one of the known kinds.
    pub fn count(&self, kind: WidgetKind) -> usize {
        self.by_kind.get(kind.as_str()).copied().unwrap_or(0)
    }

    pub fn pending_tasks(&self) -> usize {
        self.total_tasks - self.completed_tasks
    }

    /// Completed share of all tasks, 0-100.
    pub fn completion_rate(&self) -> f64 {
        if self.total_tasks == 0 {
            return 0.0;
        }
        self.completed_tasks as f64 / self.total_tasks as f64 * 100.0
    }
}


/// Calculate statistics over `widgets`.
pub fn calculate_widget_stats(widgets: &[Widget]) -> WidgetStats {
    let mut stats = WidgetStats {
        total_widgets: widgets.len(),
        ..Default::default()
    };

    for widget in widgets {
        *stats.by_kind.entry(widget.data.kind_tag().to_string()).or_default() += 1;

        if let WidgetData::Todo(tasks) | WidgetData::Lifestyle(tasks) = &widget.data {
            stats.total_tasks += tasks.len();
            stats.completed_tasks += tasks.iter().filter(|t| t.completed).count();
        }
    }

    stats
}
