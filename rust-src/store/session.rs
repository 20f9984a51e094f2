//! A dashboard session: the widget store bound to its persistence.

use anyhow::Result;

use crate::data::sample_dashboard;
use crate::models::{DashboardSettings, NewWidget, Widget, WidgetPatch};
use crate::storage::{load_settings, load_widgets, save_settings, save_widgets, KeyValueStore};

use super::{apply_edit, DataEdit, DragGesture, DropOutcome, WidgetStore};


/// Widget store plus the key-value store it is loaded from and saved to.
///
/// Settings are written on every settings change. Widgets are written on
/// every change while `autoSave` is on; otherwise they wait for [`save`].
///
/// [`save`]: Dashboard::save
pub struct Dashboard<S: KeyValueStore> {
    store: WidgetStore,
    gateway: S,
    unsaved: bool,
}


impl<S: KeyValueStore> Dashboard<S> {
    /// Load the dashboard from `gateway`.
    ///
    /// Missing or unreadable widgets start from the sample dashboard;
    /// missing or unreadable settings start from the defaults.
    pub fn open(gateway: S) -> Self {
        let settings = load_settings(&gateway);
        let widgets = load_widgets(&gateway).unwrap_or_else(|| {
            tracing::info!("no stored widgets, starting from the sample dashboard");
            sample_dashboard()
        });

        Self {
            store: WidgetStore::new(widgets, settings),
            gateway,
            unsaved: false,
        }
    }

    pub fn store(&self) -> &WidgetStore {
        &self.store
    }

    pub fn widgets(&self) -> &[Widget] {
        self.store.widgets()
    }

    pub fn settings(&self) -> &DashboardSettings {
        self.store.settings()
    }

    pub fn gateway(&self) -> &S {
        &self.gateway
    }

    /// Widget changes not yet written because autosave is off.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn issue_id(&mut self) -> String {
        self.store.issue_id()
    }

    pub fn add_widget(&mut self, widget: NewWidget) -> Result<Widget> {
        let widget = self.store.add(widget);
        self.widgets_changed()?;
        Ok(widget)
    }

    /// Returns `false` when no widget has `id`.
    pub fn update_widget(&mut self, id: &str, patch: &WidgetPatch) -> Result<bool> {
        let found = self.store.update(id, patch);
        if found {
            self.widgets_changed()?;
        }
        Ok(found)
    }

    /// Returns `false` when no widget has `id`.
    pub fn delete_widget(&mut self, id: &str) -> Result<bool> {
        let found = self.store.delete(id);
        if found {
            self.widgets_changed()?;
        }
        Ok(found)
    }

    /// Apply `edit` to the data of widget `id`.
    ///
    /// Returns `false` when no widget has `id`; an edit that does not fit the
    /// widget is an error and changes nothing.
    pub fn edit_data(&mut self, id: &str, edit: &DataEdit) -> Result<bool> {
        let Some(widget) = self.store.get(id) else {
            return Ok(false);
        };
        let data = apply_edit(&widget.data, edit)?;
        self.update_widget(id, &WidgetPatch::data(data))
    }

    pub fn reorder(&mut self, widgets: Vec<Widget>) -> Result<()> {
        self.store.reorder(widgets);
        self.widgets_changed()
    }

    /// Finish `gesture` over `target_index`, committing the move if any.
    ///
    /// Returns whether the order changed.
    pub fn drop_dragged(&mut self, gesture: &mut DragGesture, target_index: usize) -> Result<bool> {
        match gesture.drop_at(target_index, self.store.widgets()) {
            DropOutcome::Moved(order) => {
                self.reorder(order)?;
                Ok(true)
            }
            outcome => {
                tracing::debug!("drop at {target_index} left order unchanged: {outcome:?}");
                Ok(false)
            }
        }
    }

    pub fn clear_all(&mut self) -> Result<()> {
        self.store.clear_all();
        self.widgets_changed()
    }

    pub fn replace_all(&mut self, widgets: Vec<Widget>) -> Result<()> {
        self.store.replace_all(widgets);
        self.widgets_changed()
    }

    /// Replace and persist the settings record.
    pub fn update_settings(&mut self, settings: DashboardSettings) -> Result<()> {
        self.store.replace_settings(settings);
        save_settings(&mut self.gateway, self.store.settings())?;

        if self.unsaved && self.store.settings().auto_save {
            self.save()?;
        }
        Ok(())
    }

    /// Go back to the default settings, writing the full default record.
    pub fn reset_settings(&mut self) -> Result<()> {
        self.update_settings(DashboardSettings::default())
    }

    /// Write the widget collection now.
    pub fn save(&mut self) -> Result<()> {
        save_widgets(&mut self.gateway, self.store.widgets())?;
        self.unsaved = false;
        tracing::debug!("saved {} widgets", self.store.len());
        Ok(())
    }

    fn widgets_changed(&mut self) -> Result<()> {
        if self.store.settings().auto_save {
            self.save()
        } else {
            self.unsaved = true;
            Ok(())
        }
    }
}
