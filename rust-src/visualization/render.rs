//! Drawing a single widget into a terminal area.
//!
//! Which view a widget gets depends only on its kind (and, for finance, its
//! chart type). Every kind has a view; unknown kinds get a placeholder.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType, List, ListItem,
        Paragraph,
    },
    Frame,
};

use crate::models::{
    CategoryPoint, ChartType, DashboardSettings, HealthSample, MetricSummary, MonthValue, Task, Widget, WidgetData,
};

use super::palette::Palette;
use super::text::{format_number, format_thousands};


/// The view a widget is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    /// Share of total per category.
    ShareChart,
    CategoryBars,
    Checklist,
    /// Steps and calories side by side per day.
    GroupedBars,
    LineChart,
    MetricTiles,
    Placeholder,
}


impl Renderer {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ShareChart => "pie share",
            Self::CategoryBars => "bar chart",
            Self::Checklist => "checklist",
            Self::GroupedBars => "grouped bars",
            Self::LineChart => "line chart",
            Self::MetricTiles => "metric tiles",
            Self::Placeholder => "placeholder",
        }
    }
}


/// Pick the view for `widget`.
pub fn renderer_for(widget: &Widget) -> Renderer {
    match widget.data.shown().as_ref() {
        WidgetData::Finance(_) if widget.chart_type == Some(ChartType::Pie) => Renderer::ShareChart,
        WidgetData::Finance(_) => Renderer::CategoryBars,
        WidgetData::Todo(_) | WidgetData::Lifestyle(_) => Renderer::Checklist,
        WidgetData::Health(_) => Renderer::GroupedBars,
        WidgetData::Investment(_) => Renderer::LineChart,
        WidgetData::Metric(_) => Renderer::MetricTiles,
        WidgetData::Mismatched { .. } | WidgetData::Unrecognized { .. } => Renderer::Placeholder,
    }
}


/// How a tile is highlighted in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    #[default]
    Normal,
    Selected,
    /// The widget being dragged.
    Dragged,
    /// Where the dragged widget would land.
    DropTarget,
}


/// The four headline numbers of a metric widget: label, field, currency.
pub const METRIC_TILES: [(&str, &str, bool); 4] = [
    ("Total Savings", "totalSavings", true),
    ("Monthly Income", "monthlyIncome", true),
    ("Tasks Completed", "completedTasks", false),
    ("Avg Daily Steps", "avgSteps", false),
];


/// Draw `widget` with its frame into `area`.
pub fn render_widget(
    frame: &mut Frame,
    area: Rect,
    widget: &Widget,
    state: TileState,
    palette: &Palette,
    settings: &DashboardSettings,
) {
    let (border_style, border_type) = match state {
        TileState::Normal => (Style::default().fg(palette.border), BorderType::Rounded),
        TileState::Selected => (
            Style::default().fg(palette.selected).add_modifier(Modifier::BOLD),
            BorderType::Thick,
        ),
        TileState::Dragged => (
            Style::default().fg(palette.selected).add_modifier(Modifier::DIM),
            BorderType::Double,
        ),
        TileState::DropTarget => (
            Style::default().fg(palette.drop_target).add_modifier(Modifier::BOLD),
            BorderType::Double,
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", widget.title),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    match widget.data.shown().as_ref() {
        WidgetData::Finance(points) => match widget.chart_type {
            Some(ChartType::Pie) => draw_shares(frame, inner, points, palette),
            _ => draw_category_bars(frame, inner, points, palette),
        },
        WidgetData::Todo(tasks) | WidgetData::Lifestyle(tasks) => draw_checklist(frame, inner, tasks, palette),
        WidgetData::Health(samples) => draw_health(frame, inner, samples, palette),
        WidgetData::Investment(months) => draw_line(frame, inner, months, palette, settings.show_grid_lines),
        WidgetData::Metric(summary) => draw_metric_tiles(frame, inner, summary, palette),
        WidgetData::Mismatched { kind, .. } => draw_placeholder(frame, inner, kind.as_str(), palette),
        WidgetData::Unrecognized { kind, .. } => draw_placeholder(frame, inner, kind, palette),
    }
}


fn draw_empty(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let text = Paragraph::new(message.to_string())
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(text, area);
}


fn draw_shares(frame: &mut Frame, area: Rect, points: &[CategoryPoint], palette: &Palette) {
    if points.is_empty() {
        return draw_empty(frame, area, "No categories", palette);
    }

    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    let name_width = points.iter().map(|p| p.name.chars().count()).max().unwrap_or(0).min(16);
    // name, space, bar, space, "100.0%"
    let bar_width = (area.width as usize).saturating_sub(name_width + 8).max(1);

    let lines: Vec<Line> = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let share = if total > 0.0 { point.value.max(0.0) / total } else { 0.0 };
            let filled = ((share * bar_width as f64).round() as usize).min(bar_width);
            let color = palette.series[i % palette.series.len()];
            let name: String = point.name.chars().take(name_width).collect();

            Line::from(vec![
                Span::styled(format!("{name:<name_width$} "), Style::default().fg(palette.text)),
                Span::styled("█".repeat(filled), Style::default().fg(color)),
                Span::styled("░".repeat(bar_width - filled), Style::default().fg(palette.muted)),
                Span::styled(format!(" {:>5.1}%", share * 100.0), Style::default().fg(palette.accent)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}


fn draw_category_bars(frame: &mut Frame, area: Rect, points: &[CategoryPoint], palette: &Palette) {
    if points.is_empty() {
        return draw_empty(frame, area, "No categories", palette);
    }

    let bars: Vec<Bar> = points
        .iter()
        .map(|point| {
            Bar::default()
                .value(point.value.max(0.0).round() as u64)
                .text_value(format_number(point.value))
                .label(Line::from(point.name.clone()))
        })
        .collect();

    let slot = area.width / u16::try_from(points.len()).unwrap_or(u16::MAX);
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(slot.saturating_sub(1).clamp(1, 9))
        .bar_gap(1)
        .bar_style(Style::default().fg(palette.series[0]))
        .value_style(Style::default().fg(palette.text).add_modifier(Modifier::REVERSED))
        .label_style(Style::default().fg(palette.muted));
    frame.render_widget(chart, area);
}


fn draw_checklist(frame: &mut Frame, area: Rect, tasks: &[Task], palette: &Palette) {
    if tasks.is_empty() {
        return draw_empty(frame, area, "No tasks", palette);
    }

    let done = tasks.iter().filter(|t| t.completed).count();
    let [summary_area, list_area] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let summary = Paragraph::new(format!("{done}/{} completed", tasks.len()))
        .style(Style::default().fg(palette.muted));
    frame.render_widget(summary, summary_area);

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            let (mark, style) = if task.completed {
                (
                    "[x] ",
                    Style::default().fg(palette.muted).add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                ("[ ] ", Style::default().fg(palette.text))
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(palette.accent)),
                Span::styled(task.text.clone(), style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), list_area);
}


fn draw_health(frame: &mut Frame, area: Rect, samples: &[HealthSample], palette: &Palette) {
    if samples.is_empty() {
        return draw_empty(frame, area, "No activity", palette);
    }

    let [chart_area, legend_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let steps_style = Style::default().fg(palette.series[0]);
    let calories_style = Style::default().fg(palette.series[1]);

    // Each day is a pair of bars plus the gap between days
    let slot = chart_area.width / u16::try_from(samples.len()).unwrap_or(u16::MAX);
    let bar_width = (slot.saturating_sub(2) / 2).clamp(1, 6);

    let mut chart = BarChart::default()
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(1)
        .label_style(Style::default().fg(palette.muted))
        .value_style(Style::default().fg(palette.text).add_modifier(Modifier::REVERSED));

    for sample in samples {
        let bars = [
            Bar::default()
                .value(sample.steps)
                .text_value(format_number(sample.steps as f64))
                .style(steps_style),
            Bar::default()
                .value(sample.calories)
                .text_value(format_number(sample.calories as f64))
                .style(calories_style),
        ];
        chart = chart.data(BarGroup::default().label(Line::from(sample.day.clone())).bars(&bars));
    }
    frame.render_widget(chart, chart_area);

    let legend = Line::from(vec![
        Span::styled("■ steps  ", steps_style),
        Span::styled("■ calories", calories_style),
    ]);
    frame.render_widget(Paragraph::new(legend), legend_area);
}


fn draw_line(frame: &mut Frame, area: Rect, months: &[MonthValue], palette: &Palette, show_grid_lines: bool) {
    if months.is_empty() {
        return draw_empty(frame, area, "No values", palette);
    }

    let points: Vec<(f64, f64)> = months
        .iter()
        .enumerate()
        .map(|(i, m)| (i as f64, m.value))
        .collect();

    let (low, high) = points
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), &(_, v)| (lo.min(v), hi.max(v)));
    let padding = ((high - low) * 0.1).max(1.0);
    let y_bounds = [low - padding, high + padding];
    let x_bounds = [0.0, (points.len() as f64 - 1.0).max(1.0)];

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(palette.series[0]))
        .data(&points);

    let mut x_axis = Axis::default().bounds(x_bounds).style(Style::default().fg(palette.muted));
    let mut y_axis = Axis::default().bounds(y_bounds).style(Style::default().fg(palette.muted));

    if show_grid_lines {
        let first = months.first().map(|m| m.month.clone()).unwrap_or_default();
        let last = months.last().map(|m| m.month.clone()).unwrap_or_default();
        x_axis = x_axis.labels(vec![Span::raw(first), Span::raw(last)]);
        y_axis = y_axis.labels(vec![Span::raw(format_number(low)), Span::raw(format_number(high))]);
    }

    let chart = Chart::new(vec![dataset]).x_axis(x_axis).y_axis(y_axis);
    frame.render_widget(chart, area);
}


fn draw_metric_tiles(frame: &mut Frame, area: Rect, summary: &MetricSummary, palette: &Palette) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for ((label, field, currency), column) in METRIC_TILES.iter().zip(columns.iter()) {
        let value = summary.get(field);
        let shown = if *currency {
            format!("${}", format_thousands(value))
        } else {
            format_thousands(value)
        };

        let tile = Paragraph::new(vec![
            Line::from(Span::styled(
                shown,
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*label, Style::default().fg(palette.muted))),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(tile, *column);
    }
}


fn draw_placeholder(frame: &mut Frame, area: Rect, kind: &str, palette: &Palette) {
    draw_empty(frame, area, &format!("Unsupported widget type \"{kind}\""), palette);
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{default_data, sample_dashboard};
    use crate::models::{NewWidget, Theme, WidgetKind};
    use crate::visualization::test_utils::{buffer_text, find_row_with_text, test_terminal};

    fn draw(widget: &Widget, settings: &DashboardSettings) -> ratatui::buffer::Buffer {
        let mut terminal = test_terminal(80, 14);
        let palette = Palette::for_theme(Theme::Dark);
        terminal
            .draw(|frame| render_widget(frame, frame.area(), widget, TileState::Normal, &palette, settings))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_renderer_mapping() {
        let widgets = sample_dashboard();
        let renderers: Vec<Renderer> = widgets.iter().map(renderer_for).collect();
        assert_eq!(
            renderers,
            vec![
                Renderer::ShareChart,
                Renderer::Checklist,
                Renderer::GroupedBars,
                Renderer::LineChart,
                Renderer::MetricTiles,
            ]
        );

        let bars = NewWidget::new("Spend", default_data(WidgetKind::Finance))
            .with_chart(Some(ChartType::Bar))
            .into_widget("x".to_string());
        assert_eq!(renderer_for(&bars), Renderer::CategoryBars);

        let life = NewWidget::new("Habits", default_data(WidgetKind::Lifestyle)).into_widget("y".to_string());
        assert_eq!(renderer_for(&life), Renderer::Checklist);
    }

    #[test]
    fn test_every_kind_draws_its_title() {
        let settings = DashboardSettings::default();
        for kind in WidgetKind::ALL {
            let widget = NewWidget::new(format!("{kind} tile"), default_data(kind)).into_widget("1".to_string());
            let buffer = draw(&widget, &settings);
            assert!(find_row_with_text(&buffer, &format!("{kind} tile")).is_some(), "{kind}");
        }
    }

    #[test]
    fn test_checklist_shows_tasks_and_progress() {
        let widgets = sample_dashboard();
        let text = buffer_text(&draw(&widgets[1], &DashboardSettings::default()));
        assert!(text.contains("2/4 completed"));
        assert!(text.contains("[x] Review dashboard designs"));
        assert!(text.contains("[ ] Call insurance company"));
    }

    #[test]
    fn test_share_chart_shows_percentages() {
        let widgets = sample_dashboard();
        let text = buffer_text(&draw(&widgets[0], &DashboardSettings::default()));
        // Rent is 1200 of 2500
        assert!(text.contains("48.0%"));
        assert!(text.contains("Food"));
    }

    #[test]
    fn test_metric_tiles_fill_missing_with_zero() {
        let widget = NewWidget::new("Numbers", WidgetData::Metric(MetricSummary::from([("totalSavings", 25000.0)])))
            .into_widget("m".to_string());
        let text = buffer_text(&draw(&widget, &DashboardSettings::default()));
        assert!(text.contains("$25,000"));
        assert!(text.contains("$0"));
        assert!(text.contains("Avg Daily Steps"));
    }

    #[test]
    fn test_health_legend() {
        let widgets = sample_dashboard();
        let text = buffer_text(&draw(&widgets[2], &DashboardSettings::default()));
        assert!(text.contains("steps"));
        assert!(text.contains("calories"));
    }

    #[test]
    fn test_line_chart_labels_follow_grid_setting() {
        let widgets = sample_dashboard();
        let plain = buffer_text(&draw(&widgets[3], &DashboardSettings::default()));
        assert!(!plain.contains("Jan"));

        let settings = DashboardSettings { show_grid_lines: true, ..DashboardSettings::default() };
        let labelled = buffer_text(&draw(&widgets[3], &settings));
        assert!(labelled.contains("Jan"));
        assert!(labelled.contains("Jun"));
    }

    #[test]
    fn test_unrecognized_kind_draws_placeholder() {
        let widget: Widget = serde_json::from_str(r#"{"id":"w","type":"weather","title":"Sky","data":{}}"#).unwrap();
        assert_eq!(renderer_for(&widget), Renderer::Placeholder);
        let text = buffer_text(&draw(&widget, &DashboardSettings::default()));
        assert!(text.contains("Unsupported widget type \"weather\""));
    }

    #[test]
    fn test_mismatched_data_draws_empty_view() {
        let widget: Widget = serde_json::from_str(
            r#"{"id":"w","type":"health","title":"Workout Log","data":[{"id":"1","text":"Legs","completed":false}]}"#,
        )
        .unwrap();
        assert_eq!(renderer_for(&widget), Renderer::GroupedBars);
        let text = buffer_text(&draw(&widget, &DashboardSettings::default()));
        assert!(text.contains("Workout Log"));
        assert!(text.contains("No activity"));
    }

    #[test]
    fn test_huge_category_list_draws() {
        let points: Vec<CategoryPoint> = (0..70_000)
            .map(|i| CategoryPoint { name: format!("c{i}"), value: 1.0 })
            .collect();
        let widget = NewWidget::new("Many", WidgetData::Finance(points)).into_widget("h".to_string());
        let text = buffer_text(&draw(&widget, &DashboardSettings::default()));
        assert!(text.contains("Many"));
    }

    #[test]
    fn test_empty_payloads_draw_messages() {
        let settings = DashboardSettings::default();
        let empty = NewWidget::new("Nothing", WidgetData::Todo(Vec::new())).into_widget("e".to_string());
        assert!(buffer_text(&draw(&empty, &settings)).contains("No tasks"));

        let empty = NewWidget::new("Nothing", WidgetData::Investment(Vec::new())).into_widget("e".to_string());
        assert!(buffer_text(&draw(&empty, &settings)).contains("No values"));
    }
}
