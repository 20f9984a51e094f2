//! Backup files: export of the whole dashboard and import back into it.
//!
//! The file is a JSON object `{widgets, settings, exportDate}`. Imports are
//! parsed completely before anything is handed back, so a rejected file never
//! leaves the dashboard half-replaced.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::{DashboardSettings, Widget};


/// Contents of an export file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub widgets: Vec<Widget>,
    pub settings: DashboardSettings,
    pub export_date: DateTime<Utc>,
}


impl ExportDocument {
    pub fn new(widgets: &[Widget], settings: &DashboardSettings, export_date: DateTime<Utc>) -> Self {
        Self {
            widgets: widgets.to_vec(),
            settings: settings.clone(),
            export_date,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize backup")
    }

    /// Write the document to `path` as pretty-printed JSON.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write backup to {}", path.display()))
    }
}


/// Default file name for a backup taken on `date`.
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("dashboard-backup-{}.json", date.format("%Y-%m-%d"))
}


/// Why an import file was rejected.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file could not be read.
    #[error("Failed to read import file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not JSON at all.
    #[error("Import file is not valid JSON")]
    InvalidJson(#[source] serde_json::Error),

    /// Top-level value is not an object.
    #[error("Import file must contain a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Import file has no \"widgets\" list")]
    MissingWidgets,

    #[error("\"widgets\" must be a list, found {found}")]
    WidgetsNotAList { found: &'static str },

    /// One widget record could not be read.
    #[error("Widget #{} in the import file is malformed", index + 1)]
    InvalidWidget {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("\"settings\" in the import file are malformed")]
    InvalidSettings(#[source] serde_json::Error),
}


/// A successfully parsed import file.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedBackup {
    pub widgets: Vec<Widget>,
    /// Present only when the file carried settings.
    pub settings: Option<DashboardSettings>,
    pub export_date: Option<String>,
}


/// Read and parse an import file.
pub fn read_import(path: &Path) -> Result<ImportedBackup, ImportError> {
    let text = std::fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_import(&text)
}


/// Parse the text of an import file.
pub fn parse_import(text: &str) -> Result<ImportedBackup, ImportError> {
    let root: Value = serde_json::from_str(text).map_err(ImportError::InvalidJson)?;
    let Value::Object(mut root) = root else {
        return Err(ImportError::NotAnObject { found: json_type(&root) });
    };

    let widgets = match root.remove("widgets") {
        None | Some(Value::Null) => return Err(ImportError::MissingWidgets),
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item).map_err(|source| ImportError::InvalidWidget { index, source })
            })
            .collect::<Result<Vec<Widget>, _>>()?,
        Some(other) => return Err(ImportError::WidgetsNotAList { found: json_type(&other) }),
    };

    let settings = match root.remove("settings") {
        None | Some(Value::Null) => None,
        Some(value) => Some(serde_json::from_value(value).map_err(ImportError::InvalidSettings)?),
    };

    let export_date = root
        .get("exportDate")
        .and_then(|v| v.as_str())
        .map(String::from);

    Ok(ImportedBackup { widgets, settings, export_date })
}


fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_dashboard;
    use crate::models::Theme;
    use tempfile::TempDir;

    #[test]
    fn test_export_then_import_round_trip() {
        let widgets = sample_dashboard();
        let settings = DashboardSettings {
            dashboard_name: "Family".to_string(),
            theme: Theme::Dark,
            ..DashboardSettings::default()
        };

        let doc = ExportDocument::new(&widgets, &settings, Utc::now());
        let imported = parse_import(&doc.to_json().unwrap()).unwrap();

        assert_eq!(imported.widgets, widgets);
        assert_eq!(imported.settings, Some(settings));
        assert!(imported.export_date.is_some());
    }

    #[test]
    fn test_mismatched_widget_data_is_exported_unchanged() {
        let text = r#"{"widgets": [{
            "id": "w", "type": "health", "title": "Workout Log",
            "data": [{"id": "1", "text": "Monday - Chest & Triceps", "completed": true}],
            "position": {"x": 0, "y": 0, "w": 6, "h": 4}
        }]}"#;
        let imported = parse_import(text).unwrap();

        let doc = ExportDocument::new(&imported.widgets, &DashboardSettings::default(), Utc::now());
        let value: Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        let data = &value["widgets"][0]["data"];
        assert_eq!(value["widgets"][0]["type"], "health");
        assert_eq!(data[0]["text"], "Monday - Chest & Triceps");
        assert_eq!(data[0]["completed"], true);
    }

    #[test]
    fn test_export_json_keys() {
        let doc = ExportDocument::new(&[], &DashboardSettings::default(), Utc::now());
        let value: Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert!(value["widgets"].is_array());
        assert!(value["settings"].is_object());
        assert!(value["exportDate"].is_string());
    }

    #[test]
    fn test_widgets_must_be_a_list() {
        let err = parse_import(r#"{"widgets": "not-an-array"}"#).unwrap_err();
        assert!(matches!(err, ImportError::WidgetsNotAList { found: "a string" }));
    }

    #[test]
    fn test_missing_widgets_rejected() {
        let err = parse_import(r#"{"settings": {}}"#).unwrap_err();
        assert!(matches!(err, ImportError::MissingWidgets));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = parse_import("{bad").unwrap_err();
        assert!(matches!(err, ImportError::InvalidJson(_)));
    }

    #[test]
    fn test_top_level_array_rejected() {
        let err = parse_import("[]").unwrap_err();
        assert!(matches!(err, ImportError::NotAnObject { found: "a list" }));
    }

    #[test]
    fn test_malformed_widget_reports_position() {
        let err = parse_import(r#"{"widgets": [{"id": "1", "type": "todo"}, {"title": "no id"}]}"#).unwrap_err();
        assert!(matches!(err, ImportError::InvalidWidget { index: 1, .. }));
        assert!(err.to_string().contains("#2"));
    }

    #[test]
    fn test_malformed_settings_rejected() {
        let err = parse_import(r#"{"widgets": [], "settings": {"theme": "neon"}}"#).unwrap_err();
        assert!(matches!(err, ImportError::InvalidSettings(_)));
    }

    #[test]
    fn test_settings_are_optional() {
        let imported = parse_import(r#"{"widgets": []}"#).unwrap();
        assert!(imported.widgets.is_empty());
        assert!(imported.settings.is_none());
    }

    #[test]
    fn test_backup_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(backup_file_name(date), "dashboard-backup-2026-03-07.json");
    }

    #[test]
    fn test_write_and_read_file() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("backup.json");

        let doc = ExportDocument::new(&sample_dashboard(), &DashboardSettings::default(), Utc::now());
        doc.write_to(&path).unwrap();

        let imported = read_import(&path).unwrap();
        assert_eq!(imported.widgets.len(), 5);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_import(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ImportError::Read { .. }));
    }
}
