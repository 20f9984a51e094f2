//! Edits to the payload of a single widget.
//!
//! Each edit produces a new payload which is then committed through
//! [`WidgetStore::update`](super::WidgetStore::update) as a data patch.

use thiserror::Error;

use crate::models::{CategoryPoint, HealthSample, MonthValue, Task, WidgetData, WidgetKind};


/// A change to one widget's data.
#[derive(Debug, Clone, PartialEq)]
pub enum DataEdit {
    AddTask { id: String, text: String },
    ToggleTask { task_id: String },
    RemoveTask { task_id: String },
    /// Finance category, added or overwritten.
    SetCategory { name: String, value: f64 },
    /// Investment month, added or overwritten.
    SetMonth { month: String, value: f64 },
    /// Health day, added or overwritten.
    SetDay { day: String, steps: u64, calories: u64 },
    /// Metric field, added or overwritten.
    SetField { field: String, value: f64 },
    /// Category, month, day or metric field by name.
    RemoveEntry { name: String },
}


impl DataEdit {
    fn describe(&self) -> &'static str {
        match self {
            Self::AddTask { .. } | Self::ToggleTask { .. } | Self::RemoveTask { .. } => "tasks",
            Self::SetCategory { .. } => "categories",
            Self::SetMonth { .. } => "monthly values",
            Self::SetDay { .. } => "daily activity",
            Self::SetField { .. } => "metric fields",
            Self::RemoveEntry { .. } => "named entries",
        }
    }
}


#[derive(Error, Debug, PartialEq)]
pub enum EditError {
    #[error("{kind} widgets have no {what}")]
    WrongKind { kind: String, what: &'static str },

    #[error("No task with id {0}")]
    TaskNotFound(String),

    #[error("No entry named \"{0}\"")]
    EntryNotFound(String),

    #[error("This {0} widget holds data of another shape and cannot be edited")]
    MismatchedData(WidgetKind),
}


/// Apply `edit` to `data`, returning the new payload.
pub fn apply_edit(data: &WidgetData, edit: &DataEdit) -> Result<WidgetData, EditError> {
    if let WidgetData::Mismatched { kind, .. } = data {
        return Err(EditError::MismatchedData(*kind));
    }

    let mut next = data.clone();
    let wrong_kind = || EditError::WrongKind {
        kind: data.kind_tag().to_string(),
        what: edit.describe(),
    };

    match edit {
        DataEdit::AddTask { id, text } => {
            let tasks = next.tasks_mut().ok_or_else(wrong_kind)?;
            tasks.push(Task { id: id.clone(), text: text.clone(), completed: false });
        }
        DataEdit::ToggleTask { task_id } => {
            let tasks = next.tasks_mut().ok_or_else(wrong_kind)?;
            let task = tasks
                .iter_mut()
                .find(|t| &t.id == task_id)
                .ok_or_else(|| EditError::TaskNotFound(task_id.clone()))?;
            task.completed = !task.completed;
        }
        DataEdit::RemoveTask { task_id } => {
            let tasks = next.tasks_mut().ok_or_else(wrong_kind)?;
            let before = tasks.len();
            tasks.retain(|t| &t.id != task_id);
            if tasks.len() == before {
                return Err(EditError::TaskNotFound(task_id.clone()));
            }
        }
        DataEdit::SetCategory { name, value } => {
            let WidgetData::Finance(points) = &mut next else {
                return Err(wrong_kind());
            };
            match points.iter_mut().find(|p| &p.name == name) {
                Some(point) => point.value = *value,
                None => points.push(CategoryPoint { name: name.clone(), value: *value }),
            }
        }
        DataEdit::SetMonth { month, value } => {
            let WidgetData::Investment(months) = &mut next else {
                return Err(wrong_kind());
            };
            match months.iter_mut().find(|m| &m.month == month) {
                Some(entry) => entry.value = *value,
                None => months.push(MonthValue { month: month.clone(), value: *value }),
            }
        }
        DataEdit::SetDay { day, steps, calories } => {
            let WidgetData::Health(samples) = &mut next else {
                return Err(wrong_kind());
            };
            match samples.iter_mut().find(|s| &s.day == day) {
                Some(sample) => {
                    sample.steps = *steps;
                    sample.calories = *calories;
                }
                None => samples.push(HealthSample { day: day.clone(), steps: *steps, calories: *calories }),
            }
        }
        DataEdit::SetField { field, value } => {
            let WidgetData::Metric(summary) = &mut next else {
                return Err(wrong_kind());
            };
            summary.set(field.clone(), *value);
        }
        DataEdit::RemoveEntry { name } => {
            let removed = match &mut next {
                WidgetData::Finance(points) => remove_where(points, |p| &p.name == name),
                WidgetData::Investment(months) => remove_where(months, |m| &m.month == name),
                WidgetData::Health(samples) => remove_where(samples, |s| &s.day == name),
                WidgetData::Metric(summary) => summary.0.remove(name).is_some(),
                WidgetData::Todo(_)
                | WidgetData::Lifestyle(_)
                | WidgetData::Mismatched { .. }
                | WidgetData::Unrecognized { .. } => {
                    return Err(wrong_kind());
                }
            };
            if !removed {
                return Err(EditError::EntryNotFound(name.clone()));
            }
        }
    }

    Ok(next)
}


fn remove_where<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> bool {
    let before = items.len();
    items.retain(|item| !matches(item));
    items.len() != before
}


/// Id of the first task not yet completed.
pub fn next_pending_task(data: &WidgetData) -> Option<&str> {
    data.tasks()?
        .iter()
        .find(|t| !t.completed)
        .map(|t| t.id.as_str())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_dashboard;
    use crate::models::MetricSummary;

    fn todo() -> WidgetData {
        sample_dashboard()[1].data.clone()
    }

    #[test]
    fn test_mismatched_data_is_not_edited() {
        let data = WidgetData::from_json("health", serde_json::json!([{"id": "1", "text": "Legs", "completed": false}]));
        let edit = DataEdit::SetDay { day: "Mon".to_string(), steps: 10, calories: 0 };
        assert_eq!(apply_edit(&data, &edit), Err(EditError::MismatchedData(WidgetKind::Health)));

        let edit = DataEdit::ToggleTask { task_id: "1".to_string() };
        assert_eq!(apply_edit(&data, &edit), Err(EditError::MismatchedData(WidgetKind::Health)));
    }

    #[test]
    fn test_add_task_appends_incomplete() {
        let edit = DataEdit::AddTask { id: "99".to_string(), text: "Water plants".to_string() };
        let data = apply_edit(&todo(), &edit).unwrap();
        let tasks = data.tasks().unwrap();
        assert_eq!(tasks.len(), 5);
        assert_eq!(tasks[4].text, "Water plants");
        assert!(!tasks[4].completed);
    }

    #[test]
    fn test_toggle_task_flips_completion() {
        let data = todo();
        let first = data.tasks().unwrap()[0].clone();
        assert!(first.completed);

        let toggled = apply_edit(&data, &DataEdit::ToggleTask { task_id: first.id.clone() }).unwrap();
        assert!(!toggled.tasks().unwrap()[0].completed);

        let back = apply_edit(&toggled, &DataEdit::ToggleTask { task_id: first.id }).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_remove_task() {
        let data = todo();
        let id = data.tasks().unwrap()[1].id.clone();
        let removed = apply_edit(&data, &DataEdit::RemoveTask { task_id: id.clone() }).unwrap();
        assert_eq!(removed.len(), 3);

        let err = apply_edit(&removed, &DataEdit::RemoveTask { task_id: id.clone() }).unwrap_err();
        assert_eq!(err, EditError::TaskNotFound(id));
    }

    #[test]
    fn test_task_edit_on_chart_widget_rejected() {
        let finance = sample_dashboard()[0].data.clone();
        let err = apply_edit(&finance, &DataEdit::ToggleTask { task_id: "1".to_string() }).unwrap_err();
        assert!(matches!(err, EditError::WrongKind { what: "tasks", .. }));
        assert_eq!(err.to_string(), "finance widgets have no tasks");
    }

    #[test]
    fn test_set_category_upserts() {
        let finance = sample_dashboard()[0].data.clone();
        let updated = apply_edit(&finance, &DataEdit::SetCategory { name: "Food".to_string(), value: 950.0 }).unwrap();
        let added = apply_edit(&updated, &DataEdit::SetCategory { name: "Gifts".to_string(), value: 50.0 }).unwrap();

        let WidgetData::Finance(points) = added else { panic!("kind changed") };
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].value, 950.0);
        assert_eq!(points[4].name, "Gifts");
    }

    #[test]
    fn test_set_day_and_month() {
        let health = sample_dashboard()[2].data.clone();
        let edit = DataEdit::SetDay { day: "Mon".to_string(), steps: 1, calories: 2 };
        let WidgetData::Health(samples) = apply_edit(&health, &edit).unwrap() else { panic!() };
        assert_eq!((samples[0].steps, samples[0].calories), (1, 2));

        let investment = sample_dashboard()[3].data.clone();
        let edit = DataEdit::SetMonth { month: "Jul".to_string(), value: 12500.0 };
        let WidgetData::Investment(months) = apply_edit(&investment, &edit).unwrap() else { panic!() };
        assert_eq!(months.last().unwrap().month, "Jul");
    }

    #[test]
    fn test_set_and_remove_metric_field() {
        let metric = WidgetData::Metric(MetricSummary::default());
        let set = apply_edit(&metric, &DataEdit::SetField { field: "avgSteps".to_string(), value: 9000.0 }).unwrap();
        let WidgetData::Metric(summary) = &set else { panic!() };
        assert_eq!(summary.get("avgSteps"), 9000.0);

        let removed = apply_edit(&set, &DataEdit::RemoveEntry { name: "avgSteps".to_string() }).unwrap();
        assert!(removed.is_empty());
    }

    #[test]
    fn test_remove_missing_entry() {
        let finance = sample_dashboard()[0].data.clone();
        let err = apply_edit(&finance, &DataEdit::RemoveEntry { name: "Yachts".to_string() }).unwrap_err();
        assert_eq!(err, EditError::EntryNotFound("Yachts".to_string()));
    }

    #[test]
    fn test_next_pending_task() {
        let data = todo();
        assert_eq!(next_pending_task(&data), Some(data.tasks().unwrap()[1].id.as_str()));
        assert_eq!(next_pending_task(&sample_dashboard()[0].data), None);
    }
}
