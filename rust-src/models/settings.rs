//! Global dashboard settings.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_REFRESH_INTERVAL;
use crate::models::ChartType;


/// Current settings schema version.
pub const SETTINGS_VERSION: u32 = 1;


/// Colour theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}


/// The single global settings record.
///
/// Fields missing from stored or imported JSON take their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSettings {
    pub version: u32,
    pub dashboard_name: String,
    pub theme: Theme,
    pub auto_save: bool,
    pub show_grid_lines: bool,
    pub compact_mode: bool,
    pub animations_enabled: bool,
    pub default_chart_type: ChartType,
    /// Seconds. Stored and shown, not acted on.
    pub refresh_interval: u64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            dashboard_name: "Dashboard Pro".to_string(),
            theme: Theme::System,
            auto_save: true,
            show_grid_lines: false,
            compact_mode: false,
            animations_enabled: true,
            default_chart_type: ChartType::Bar,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}


/// Local, uncommitted copy of the settings.
///
/// Edits and imported settings land here first and only reach the store
/// when the caller commits the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDraft {
    settings: DashboardSettings,
    dirty: bool,
}

impl SettingsDraft {
    pub fn new(current: &DashboardSettings) -> Self {
        Self { settings: current.clone(), dirty: false }
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn edit(&mut self) -> &mut DashboardSettings {
        self.dirty = true;
        &mut self.settings
    }

    pub fn replace(&mut self, settings: DashboardSettings) {
        self.settings = settings;
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn into_settings(self) -> DashboardSettings {
        self.settings
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.dashboard_name, "Dashboard Pro");
        assert_eq!(settings.theme, Theme::System);
        assert!(settings.auto_save);
        assert!(!settings.show_grid_lines);
        assert!(!settings.compact_mode);
        assert!(settings.animations_enabled);
        assert_eq!(settings.default_chart_type, ChartType::Bar);
        assert_eq!(settings.refresh_interval, 300);
    }

    #[test]
    fn test_json_field_names() {
        let value = serde_json::to_value(DashboardSettings::default()).unwrap();
        assert_eq!(value["dashboardName"], "Dashboard Pro");
        assert_eq!(value["autoSave"], true);
        assert_eq!(value["defaultChartType"], "bar");
        assert_eq!(value["refreshInterval"], 300);
        assert_eq!(value["theme"], "system");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        // Records written before the version field existed
        let settings: DashboardSettings =
            serde_json::from_str(r#"{"dashboardName": "Home", "compactMode": true}"#).unwrap();
        assert_eq!(settings.dashboard_name, "Home");
        assert!(settings.compact_mode);
        assert_eq!(settings.version, SETTINGS_VERSION);
        assert!(settings.auto_save);
    }

    #[test]
    fn test_draft_tracks_edits() {
        let current = DashboardSettings::default();
        let mut draft = SettingsDraft::new(&current);
        assert!(!draft.is_dirty());

        draft.edit().compact_mode = true;
        assert!(draft.is_dirty());
        assert!(!current.compact_mode);
        assert!(draft.into_settings().compact_mode);
    }
}
