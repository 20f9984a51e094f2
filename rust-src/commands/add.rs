//! Add command - a new widget with starter data.

use anyhow::Result;

use crate::data::default_data;
use crate::models::{ChartType, NewWidget, WidgetKind};
use crate::visualization::text::{DIM, GREEN, RESET, YELLOW};

use super::{require_title, Context};


/// Chart type to store for a new widget of `kind`.
///
/// Kinds without a chart never store one; charted kinds fall back to the
/// dashboard's default chart type.
pub fn resolve_chart(kind: WidgetKind, requested: Option<ChartType>, default: ChartType) -> Option<ChartType> {
    if !kind.supports_chart() {
        return None;
    }
    Some(requested.unwrap_or(default))
}


/// Run the add command.
pub fn run(ctx: &Context, kind: WidgetKind, title: Option<String>, chart: Option<ChartType>) -> Result<()> {
    let title = match title {
        Some(title) => require_title(&title)?,
        None => default_title(kind).to_string(),
    };

    let mut dashboard = ctx.open()?;
    if chart.is_some() && !kind.supports_chart() {
        println!("{YELLOW}{kind} widgets have no chart; --chart ignored{RESET}");
    }
    let chart_type = resolve_chart(kind, chart, dashboard.settings().default_chart_type);

    let widget = dashboard.add_widget(NewWidget::new(title, default_data(kind)).with_chart(chart_type))?;

    println!("{GREEN}+ Added {} widget \"{}\"{RESET}", kind, widget.title);
    println!("{DIM}id: {}{RESET}", widget.id);

    ctx.finish(&mut dashboard)
}


fn default_title(kind: WidgetKind) -> &'static str {
    match kind {
        WidgetKind::Finance => "Finance",
        WidgetKind::Todo => "Tasks",
        WidgetKind::Health => "Health",
        WidgetKind::Investment => "Investments",
        WidgetKind::Metric => "Key Metrics",
        WidgetKind::Lifestyle => "Habits",
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_chart() {
        assert_eq!(resolve_chart(WidgetKind::Finance, None, ChartType::Line), Some(ChartType::Line));
        assert_eq!(
            resolve_chart(WidgetKind::Health, Some(ChartType::Pie), ChartType::Bar),
            Some(ChartType::Pie)
        );
        assert_eq!(resolve_chart(WidgetKind::Todo, Some(ChartType::Pie), ChartType::Bar), None);
        assert_eq!(resolve_chart(WidgetKind::Metric, None, ChartType::Bar), None);
    }

    #[test]
    fn test_default_titles_are_not_blank() {
        for kind in WidgetKind::ALL {
            assert!(require_title(default_title(kind)).is_ok());
        }
    }
}
