//! Full dashboard layout: header, widget grid and footer.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{DashboardSettings, Widget, WidgetKind};
use crate::store::DragGesture;

use super::palette::Palette;
use super::render::{render_widget, TileState};


const FOOTER_KEYS: &str = "[j/k] Select  [m] Move  [d] Delete  [x] Complete task  [s] Save  [q] Quit";
const FOOTER_DRAG: &str = "[j/k] Choose position  [Enter] Drop  [Esc] Cancel";
const VERSION_TEXT: &str = concat!("v", env!("CARGO_PKG_VERSION"));


/// Everything the dashboard view needs for one frame.
pub struct DashboardView<'a> {
    pub widgets: &'a [Widget],
    pub settings: &'a DashboardSettings,
    pub selected: Option<usize>,
    pub drag: &'a DragGesture,
    pub unsaved: bool,
    pub status: Option<&'a str>,
}


/// Group widget indices into grid rows.
///
/// Metric widgets and widgets spanning the full 12-column width get a row of
/// their own; the rest are laid out two per row in collection order.
pub fn grid_rows(widgets: &[Widget]) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut pending: Option<usize> = None;

    for (index, widget) in widgets.iter().enumerate() {
        let full_width = widget.kind() == Some(WidgetKind::Metric) || widget.position.w >= 12;
        if full_width {
            if let Some(left) = pending.take() {
                rows.push(vec![left]);
            }
            rows.push(vec![index]);
        } else if let Some(left) = pending.take() {
            rows.push(vec![left, index]);
        } else {
            pending = Some(index);
        }
    }
    if let Some(left) = pending {
        rows.push(vec![left]);
    }
    rows
}


fn row_height(widgets: &[Widget], row: &[usize], compact: bool) -> u16 {
    let metric_only = row.iter().all(|&i| widgets[i].kind() == Some(WidgetKind::Metric));
    match (metric_only, compact) {
        (true, true) => 4,
        (true, false) => 5,
        (false, true) => 9,
        (false, false) => 12,
    }
}


fn total_height(heights: &[u16]) -> u16 {
    heights.iter().fold(0u16, |total, &h| total.saturating_add(h))
}


fn tile_state(view: &DashboardView, index: usize) -> TileState {
    let widget = &view.widgets[index];
    if view.drag.source_id() == Some(widget.id.as_str()) {
        return TileState::Dragged;
    }
    if view.drag.hover_index() == Some(index) {
        return TileState::DropTarget;
    }
    if view.selected == Some(index) {
        return TileState::Selected;
    }
    TileState::Normal
}


/// Render the whole dashboard into the frame.
pub fn render_dashboard(frame: &mut Frame, view: &DashboardView) {
    let palette = Palette::for_theme(view.settings.theme);
    let [header_area, grid_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header_area, view, &palette);
    render_grid(frame, grid_area, view, &palette);
    render_footer(frame, footer_area, view, &palette);
}


fn render_header(frame: &mut Frame, area: Rect, view: &DashboardView, palette: &Palette) {
    let name = &view.settings.dashboard_name;
    let count = format!("  {} widgets", view.widgets.len());
    let unsaved = if view.unsaved { "  ● unsaved" } else { "" };

    let used = name.chars().count() + count.chars().count() + unsaved.chars().count();
    let padding = (area.width as usize).saturating_sub(used + VERSION_TEXT.len());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(name.clone(), Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
        Span::styled(count, Style::default().fg(palette.muted)),
        Span::styled(unsaved, Style::default().fg(palette.selected)),
        Span::raw(" ".repeat(padding)),
        Span::styled(VERSION_TEXT, Style::default().fg(palette.muted)),
    ]));
    frame.render_widget(header, area);
}


fn render_grid(frame: &mut Frame, area: Rect, view: &DashboardView, palette: &Palette) {
    if view.widgets.is_empty() {
        let empty = Paragraph::new("No widgets yet. Add one with `wdash add` or `wdash templates --add`.")
            .style(Style::default().fg(palette.muted));
        frame.render_widget(empty, area);
        return;
    }

    let compact = view.settings.compact_mode;
    let rows = grid_rows(view.widgets);
    let heights: Vec<u16> = rows.iter().map(|row| row_height(view.widgets, row, compact)).collect();

    // Scroll so the focused row (drop target while dragging) is visible
    let focus = view.drag.hover_index().or(view.selected).unwrap_or(0);
    let focus_row = rows.iter().position(|row| row.contains(&focus)).unwrap_or(0);
    let mut first_row = 0;
    while first_row < focus_row && total_height(&heights[first_row..=focus_row]) > area.height {
        first_row += 1;
    }

    let mut y = area.y;
    let gap = if compact { 0 } else { 1 };
    for (row, &height) in rows.iter().zip(heights.iter()).skip(first_row) {
        if y >= area.bottom() {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, height.min(area.bottom() - y));

        let columns: Vec<Rect> = if row.len() == 1 {
            vec![row_area]
        } else {
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .spacing(gap)
                .split(row_area)
                .to_vec()
        };

        for (&index, column) in row.iter().zip(columns) {
            let state = tile_state(view, index);
            render_widget(frame, column, &view.widgets[index], state, palette, view.settings);
        }
        y = y.saturating_add(height);
    }
}


fn render_footer(frame: &mut Frame, area: Rect, view: &DashboardView, palette: &Palette) {
    let line = match view.status {
        Some(status) => Line::from(Span::styled(status.to_string(), Style::default().fg(palette.selected))),
        None if view.drag.is_active() => Line::from(Span::styled(FOOTER_DRAG, Style::default().fg(palette.drop_target))),
        None => Line::from(Span::styled(FOOTER_KEYS, Style::default().fg(palette.muted))),
    };
    frame.render_widget(Paragraph::new(line), area);
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_dashboard;
    use crate::visualization::test_utils::{buffer_text, find_row_with_text, test_terminal};

    fn draw(view: &DashboardView, width: u16, height: u16) -> ratatui::buffer::Buffer {
        let mut terminal = test_terminal(width, height);
        terminal.draw(|frame| render_dashboard(frame, view)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_grid_rows_pairs_and_full_width() {
        let widgets = sample_dashboard();
        // finance + todo, health + investment, metric alone
        assert_eq!(grid_rows(&widgets), vec![vec![0, 1], vec![2, 3], vec![4]]);
    }

    #[test]
    fn test_grid_rows_flushes_pending_before_full_width() {
        let widgets = sample_dashboard();
        let reordered = vec![widgets[0].clone(), widgets[4].clone(), widgets[1].clone()];
        assert_eq!(grid_rows(&reordered), vec![vec![0], vec![1], vec![2]]);
        assert!(grid_rows(&[]).is_empty());
    }

    #[test]
    fn test_total_height_saturates() {
        assert_eq!(total_height(&[12, 5, 9]), 26);
        assert_eq!(total_height(&vec![12; 10_000]), u16::MAX);
    }

    #[test]
    fn test_header_and_tiles() {
        let widgets = sample_dashboard();
        let settings = DashboardSettings::default();
        let gesture = DragGesture::new();
        let view = DashboardView {
            widgets: &widgets,
            settings: &settings,
            selected: Some(0),
            drag: &gesture,
            unsaved: false,
            status: None,
        };

        let buffer = draw(&view, 100, 40);
        assert_eq!(find_row_with_text(&buffer, "Dashboard Pro"), Some(0));
        let text = buffer_text(&buffer);
        for widget in widgets.iter() {
            assert!(text.contains(&widget.title), "missing {}", widget.title);
        }
        assert!(text.contains("[q] Quit"));
        assert!(!text.contains("unsaved"));
    }

    #[test]
    fn test_drag_footer_and_unsaved_marker() {
        let widgets = sample_dashboard();
        let settings = DashboardSettings::default();
        let mut gesture = DragGesture::new();
        gesture.begin(widgets[0].id.clone());
        gesture.hover(2);
        let view = DashboardView {
            widgets: &widgets,
            settings: &settings,
            selected: Some(0),
            drag: &gesture,
            unsaved: true,
            status: None,
        };

        let text = buffer_text(&draw(&view, 100, 40));
        assert!(text.contains("[Enter] Drop"));
        assert!(text.contains("unsaved"));
    }

    #[test]
    fn test_status_replaces_footer() {
        let widgets = sample_dashboard();
        let settings = DashboardSettings::default();
        let gesture = DragGesture::new();
        let view = DashboardView {
            widgets: &widgets,
            settings: &settings,
            selected: None,
            drag: &gesture,
            unsaved: false,
            status: Some("Saved 5 widgets"),
        };

        let buffer = draw(&view, 100, 40);
        assert_eq!(find_row_with_text(&buffer, "Saved 5 widgets"), Some(39));
    }

    #[test]
    fn test_scrolls_to_selected_row() {
        let widgets = sample_dashboard();
        let settings = DashboardSettings::default();
        let gesture = DragGesture::new();
        let view = DashboardView {
            widgets: &widgets,
            settings: &settings,
            selected: Some(4),
            drag: &gesture,
            unsaved: false,
            status: None,
        };

        // Room for one full row only
        let text = buffer_text(&draw(&view, 100, 16));
        assert!(text.contains("Key Metrics"));
        assert!(!text.contains("Monthly Expenses"));
    }

    #[test]
    fn test_empty_dashboard_hint() {
        let settings = DashboardSettings { dashboard_name: "Empty".to_string(), ..DashboardSettings::default() };
        let gesture = DragGesture::new();
        let view = DashboardView {
            widgets: &[],
            settings: &settings,
            selected: None,
            drag: &gesture,
            unsaved: false,
            status: None,
        };

        let text = buffer_text(&draw(&view, 100, 10));
        assert!(text.contains("No widgets yet"));
        assert!(text.contains("0 widgets"));
    }
}
