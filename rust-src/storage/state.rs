//! Loading and saving dashboard state through a [`KeyValueStore`].
//!
//! Reads never fail: a missing or unreadable value falls back to the
//! default and the problem is only logged.

use anyhow::{Context, Result};

use crate::config::{SETTINGS_KEY, WIDGETS_KEY};
use crate::models::{DashboardSettings, Widget};

use super::KeyValueStore;


/// Load the settings record, falling back to defaults.
pub fn load_settings(store: &dyn KeyValueStore) -> DashboardSettings {
    let raw = match store.get(SETTINGS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return DashboardSettings::default(),
        Err(e) => {
            tracing::warn!("failed to read stored settings, using defaults: {e:#}");
            return DashboardSettings::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("discarding malformed stored settings: {e}");
            DashboardSettings::default()
        }
    }
}


/// Persist the full settings record.
pub fn save_settings(store: &mut dyn KeyValueStore, settings: &DashboardSettings) -> Result<()> {
    let raw = serde_json::to_string(settings).context("Failed to serialize settings")?;
    store.set(SETTINGS_KEY, &raw)
}


/// Load the widget collection.
///
/// Returns `None` when nothing usable is stored.
pub fn load_widgets(store: &dyn KeyValueStore) -> Option<Vec<Widget>> {
    let raw = match store.get(WIDGETS_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!("failed to read stored widgets: {e:#}");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(widgets) => Some(widgets),
        Err(e) => {
            tracing::warn!("discarding malformed stored widgets: {e}");
            None
        }
    }
}


/// Persist the widget collection.
pub fn save_widgets(store: &mut dyn KeyValueStore, widgets: &[Widget]) -> Result<()> {
    let raw = serde_json::to_string(widgets).context("Failed to serialize widgets")?;
    store.set(WIDGETS_KEY, &raw)
}
