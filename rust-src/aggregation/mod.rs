//! Aggregation layer for dashboard statistics.

mod widget_stats;

pub use widget_stats::{calculate_widget_stats, WidgetStats};
