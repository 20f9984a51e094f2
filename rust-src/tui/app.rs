//! Interactive dashboard state and its event loop.

use std::io::{self, stdout};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};

use crate::storage::KeyValueStore;
use crate::store::{next_pending_task, Dashboard, DataEdit, DragGesture};
use crate::visualization::{render_dashboard, DashboardView};


/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
}


/// State of the interactive dashboard.
pub struct App<S: KeyValueStore> {
    dashboard: Dashboard<S>,
    gesture: DragGesture,
    selected: Option<usize>,
    status: Option<String>,
    /// Set after a first quit with unsaved changes.
    confirm_quit: bool,
}


impl<S: KeyValueStore> App<S> {
    pub fn new(dashboard: Dashboard<S>) -> Self {
        let selected = if dashboard.widgets().is_empty() { None } else { Some(0) };
        Self {
            dashboard,
            gesture: DragGesture::new(),
            selected,
            status: None,
            confirm_quit: false,
        }
    }

    pub fn dashboard(&self) -> &Dashboard<S> {
        &self.dashboard
    }

    pub fn into_dashboard(self) -> Dashboard<S> {
        self.dashboard
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn view(&self) -> DashboardView<'_> {
        DashboardView {
            widgets: self.dashboard.widgets(),
            settings: self.dashboard.settings(),
            selected: self.selected,
            drag: &self.gesture,
            unsaved: self.dashboard.has_unsaved_changes(),
            status: self.status.as_deref(),
        }
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Action::Quit);
        }

        self.status = None;
        if key.code != KeyCode::Char('q') {
            self.confirm_quit = false;
        }

        if self.gesture.is_active() {
            self.handle_drag_key(key)?;
            return Ok(Action::None);
        }

        match key.code {
            KeyCode::Char('q') => return Ok(self.request_quit()),
            KeyCode::Char('j') | KeyCode::Char('l') | KeyCode::Down | KeyCode::Right => self.select_next(),
            KeyCode::Char('k') | KeyCode::Char('h') | KeyCode::Up | KeyCode::Left => self.select_previous(),
            KeyCode::Char('m') | KeyCode::Char(' ') => self.begin_move(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected()?,
            KeyCode::Char('x') => self.complete_next_task()?,
            KeyCode::Char('s') => {
                self.dashboard.save()?;
                self.status = Some(format!("Saved {} widgets", self.dashboard.widgets().len()));
            }
            _ => {}
        }
        Ok(Action::None)
    }

    fn handle_drag_key(&mut self, key: KeyEvent) -> Result<()> {
        let last = self.dashboard.widgets().len().saturating_sub(1);
        let current = self
            .gesture
            .hover_index()
            .or(self.selected)
            .unwrap_or(0);

        match key.code {
            KeyCode::Char('j') | KeyCode::Char('l') | KeyCode::Down | KeyCode::Right => {
                self.gesture.hover((current + 1).min(last));
            }
            KeyCode::Char('k') | KeyCode::Char('h') | KeyCode::Up | KeyCode::Left => {
                self.gesture.hover(current.saturating_sub(1));
            }
            KeyCode::Enter | KeyCode::Char('m') | KeyCode::Char(' ') => {
                let source_id = self.gesture.source_id().map(String::from);
                if self.dashboard.drop_dragged(&mut self.gesture, current)? {
                    self.selected = source_id.and_then(|id| self.dashboard.store().index_of(&id));
                    self.status = Some(format!("Moved to position {}", current + 1));
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.gesture.cancel();
                self.status = Some("Move cancelled".to_string());
            }
            _ => {}
        }
        Ok(())
    }

    fn request_quit(&mut self) -> Action {
        if self.dashboard.has_unsaved_changes() && !self.confirm_quit {
            self.confirm_quit = true;
            self.status = Some("Unsaved changes: press s to save, or q again to quit".to_string());
            return Action::None;
        }
        Action::Quit
    }

    fn select_next(&mut self) {
        let count = self.dashboard.widgets().len();
        if count == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(count - 1)));
    }

    fn select_previous(&mut self) {
        if self.dashboard.widgets().is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    fn selected_id(&self) -> Option<String> {
        self.selected
            .and_then(|i| self.dashboard.widgets().get(i))
            .map(|w| w.id.clone())
    }

    fn begin_move(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        self.gesture.begin(id);
        if let Some(index) = self.selected {
            self.gesture.hover(index);
        }
    }

    fn delete_selected(&mut self) -> Result<()> {
        let Some(id) = self.selected_id() else {
            return Ok(());
        };
        let title = self.dashboard.store().get(&id).map(|w| w.title.clone()).unwrap_or_default();
        self.dashboard.delete_widget(&id)?;

        let count = self.dashboard.widgets().len();
        self.selected = match self.selected {
            _ if count == 0 => None,
            Some(i) => Some(i.min(count - 1)),
            None => None,
        };
        self.status = Some(format!("Deleted \"{title}\""));
        Ok(())
    }

    fn complete_next_task(&mut self) -> Result<()> {
        let Some(id) = self.selected_id() else {
            return Ok(());
        };
        let Some(widget) = self.dashboard.store().get(&id) else {
            return Ok(());
        };
        if widget.data.tasks().is_none() {
            self.status = Some("Selected widget has no tasks".to_string());
            return Ok(());
        }
        let Some(task_id) = next_pending_task(&widget.data).map(String::from) else {
            self.status = Some("All tasks completed".to_string());
            return Ok(());
        };

        self.dashboard.edit_data(&id, &DataEdit::ToggleTask { task_id })?;
        Ok(())
    }
}


/// Run the interactive dashboard until the user quits.
///
/// Returns the dashboard so the caller can report what is left unsaved.
pub fn run<S: KeyValueStore>(dashboard: Dashboard<S>) -> Result<Dashboard<S>> {
    let mut app = App::new(dashboard);

    setup_terminal()?;
    let result = event_loop(&mut app);
    restore_terminal()?;

    result.map(|()| app.into_dashboard())
}


fn event_loop<S: KeyValueStore>(app: &mut App<S>) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    loop {
        terminal.draw(|frame| render_dashboard(frame, &app.view()))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key)? == Action::Quit {
                return Ok(());
            }
        }
    }
}


fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    Ok(())
}


fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DashboardSettings;
    use crate::storage::MemoryStore;

    fn app() -> App<MemoryStore> {
        App::new(Dashboard::open(MemoryStore::new()))
    }

    fn press(app: &mut App<MemoryStore>, code: KeyCode) -> Action {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn ids(app: &App<MemoryStore>) -> Vec<&str> {
        app.dashboard().widgets().iter().map(|w| w.id.as_str()).collect()
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut app = app();
        assert_eq!(app.selected(), Some(0));

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected(), Some(0));

        for _ in 0..10 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.selected(), Some(4));
    }

    #[test]
    fn test_move_with_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        assert!(app.gesture().is_active());
        assert_eq!(app.gesture().hover_index(), Some(0));

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.gesture().hover_index(), Some(2));

        press(&mut app, KeyCode::Enter);
        assert!(!app.gesture().is_active());
        assert_eq!(ids(&app), vec!["2", "3", "1", "4", "5"]);
        assert_eq!(app.selected(), Some(2));
        assert_eq!(app.status(), Some("Moved to position 3"));
    }

    #[test]
    fn test_escape_cancels_move() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Esc);

        assert!(!app.gesture().is_active());
        assert_eq!(ids(&app), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_delete_selected() {
        let mut app = app();
        for _ in 0..4 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(ids(&app), vec!["1", "2", "3", "4"]);
        assert_eq!(app.selected(), Some(3));
        assert_eq!(app.status(), Some("Deleted \"Key Metrics\""));
    }

    #[test]
    fn test_complete_next_task() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('x'));

        let tasks = app.dashboard().store().get("2").unwrap().data.tasks().unwrap().to_vec();
        assert!(tasks.iter().take(2).all(|t| t.completed));

        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.status(), Some("Selected widget has no tasks"));
    }

    #[test]
    fn test_quit_asks_again_with_unsaved_changes() {
        let mut dashboard = Dashboard::open(MemoryStore::new());
        dashboard
            .update_settings(DashboardSettings { auto_save: false, ..DashboardSettings::default() })
            .unwrap();
        let mut app = App::new(dashboard);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::None);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit);
    }

    #[test]
    fn test_save_clears_unsaved() {
        let mut dashboard = Dashboard::open(MemoryStore::new());
        dashboard
            .update_settings(DashboardSettings { auto_save: false, ..DashboardSettings::default() })
            .unwrap();
        let mut app = App::new(dashboard);

        press(&mut app, KeyCode::Char('d'));
        assert!(app.view().unsaved);
        press(&mut app, KeyCode::Char('s'));
        assert!(!app.view().unsaved);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit);
    }

    #[test]
    fn test_ctrl_c_quits_immediately() {
        let mut app = app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(key).unwrap(), Action::Quit);
    }
}
