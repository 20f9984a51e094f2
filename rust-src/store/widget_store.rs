//! The ordered widget collection and the settings record.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;

use crate::models::{DashboardSettings, NewWidget, Widget, WidgetPatch};


/// Exclusive owner of the widget collection and the settings record.
///
/// The collection is copy-on-write: every mutation builds a new vector and
/// bumps the revision, so a [`snapshot`](Self::snapshot) taken earlier is
/// never changed underneath its holder. No operation here can fail.
#[derive(Debug, Clone)]
pub struct WidgetStore {
    widgets: Arc<Vec<Widget>>,
    settings: DashboardSettings,
    revision: u64,
    last_issued: i64,
}


impl Default for WidgetStore {
    fn default() -> Self {
        Self::new(Vec::new(), DashboardSettings::default())
    }
}


impl WidgetStore {
    pub fn new(widgets: Vec<Widget>, settings: DashboardSettings) -> Self {
        Self {
            widgets: Arc::new(dedupe_ids(widgets)),
            settings,
            revision: 0,
            last_issued: 0,
        }
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Shared handle to the current revision of the collection.
    pub fn snapshot(&self) -> Arc<Vec<Widget>> {
        Arc::clone(&self.widgets)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.widgets.iter().position(|w| w.id == id)
    }

    /// Issue a fresh id.
    ///
    /// Millisecond timestamps, bumped past the last issued id and past any id
    /// already in the collection.
    pub fn issue_id(&mut self) -> String {
        let mut candidate = Utc::now().timestamp_millis().max(self.last_issued + 1);
        while self.widgets.iter().any(|w| w.id == candidate.to_string()) {
            candidate += 1;
        }
        self.last_issued = candidate;
        candidate.to_string()
    }

    /// Append a widget with a fresh id and return the stored record.
    pub fn add(&mut self, widget: NewWidget) -> Widget {
        let id = self.issue_id();
        let widget = widget.into_widget(id);

        let mut next = self.widgets.as_ref().clone();
        next.push(widget.clone());
        self.commit(next);

        tracing::debug!("added widget {} ({})", widget.id, widget.data.kind_tag());
        widget
    }

    /// Merge `patch` into the widget with `id`.
    ///
    /// Returns `false`, changing nothing, when no widget has that id.
    pub fn update(&mut self, id: &str, patch: &WidgetPatch) -> bool {
        let Some(index) = self.index_of(id) else {
            tracing::debug!("update of missing widget {id} ignored");
            return false;
        };

        let mut next = self.widgets.as_ref().clone();
        next[index] = patch.apply(&self.widgets[index]);
        self.commit(next);
        true
    }

    /// Remove the widget with `id`. Returns whether one was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }

        let next = self.widgets.iter().filter(|w| w.id != id).cloned().collect();
        self.commit(next);
        true
    }

    /// Replace the collection with a new ordering.
    ///
    /// Any sequence is accepted; one that is not a permutation of the current
    /// widgets is only logged.
    pub fn reorder(&mut self, widgets: Vec<Widget>) {
        if !is_permutation(&self.widgets, &widgets) {
            tracing::warn!(
                "reorder with {} widgets is not a permutation of the current {}",
                widgets.len(),
                self.widgets.len()
            );
        }
        self.commit(widgets);
    }

    pub fn clear_all(&mut self) {
        self.commit(Vec::new());
    }

    /// Replace the whole collection, e.g. from an import.
    ///
    /// Later records reusing an earlier id are dropped.
    pub fn replace_all(&mut self, widgets: Vec<Widget>) {
        self.commit(dedupe_ids(widgets));
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn replace_settings(&mut self, settings: DashboardSettings) {
        self.settings = settings;
    }

    fn commit(&mut self, next: Vec<Widget>) {
        self.widgets = Arc::new(next);
        self.revision += 1;
    }
}


fn dedupe_ids(widgets: Vec<Widget>) -> Vec<Widget> {
    let mut seen = HashSet::new();
    widgets
        .into_iter()
        .filter(|w| {
            let fresh = seen.insert(w.id.clone());
            if !fresh {
                tracing::warn!("dropping widget with duplicate id {}", w.id);
            }
            fresh
        })
        .collect()
}


fn is_permutation(current: &[Widget], proposed: &[Widget]) -> bool {
    if current.len() != proposed.len() {
        return false;
    }
    let mut ids: Vec<&str> = current.iter().map(|w| w.id.as_str()).collect();
    let mut proposed_ids: Vec<&str> = proposed.iter().map(|w| w.id.as_str()).collect();
    ids.sort_unstable();
    proposed_ids.sort_unstable();
    ids == proposed_ids
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChartType, Task, WidgetData};

    fn todo(title: &str) -> NewWidget {
        NewWidget::new(title, WidgetData::Todo(Vec::new()))
    }

    fn store_with(titles: &[&str]) -> (WidgetStore, Vec<String>) {
        let mut store = WidgetStore::default();
        let ids = titles.iter().map(|t| store.add(todo(t)).id).collect();
        (store, ids)
    }

    fn titles(store: &WidgetStore) -> Vec<&str> {
        store.widgets().iter().map(|w| w.title.as_str()).collect()
    }

    #[test]
    fn test_add_appends_with_distinct_ids() {
        let mut store = WidgetStore::default();
        let mut ids = HashSet::new();
        for i in 0..200 {
            let widget = store.add(todo(&format!("w{i}")));
            assert!(ids.insert(widget.id.clone()), "duplicate id {}", widget.id);
        }
        assert_eq!(store.len(), 200);
        assert_eq!(store.widgets().last().unwrap().title, "w199");
    }

    #[test]
    fn test_issued_id_skips_existing() {
        let future = (Utc::now().timestamp_millis() + 10_000).to_string();
        let existing = todo("x").into_widget(future.clone());
        let mut store = WidgetStore::new(vec![existing], DashboardSettings::default());

        // Force the generator onto the taken id
        store.last_issued = future.parse::<i64>().unwrap() - 1;
        let id = store.issue_id();
        assert_ne!(id, future);
    }

    #[test]
    fn test_update_changes_only_given_field() {
        let (mut store, ids) = store_with(&["A", "B"]);
        let before = store.widgets().to_vec();

        assert!(store.update(&ids[0], &WidgetPatch::title("A2")));

        let after = store.widgets();
        assert_eq!(after[0].title, "A2");
        assert_eq!(after[0].id, before[0].id);
        assert_eq!(after[0].data, before[0].data);
        assert_eq!(after[0].chart_type, before[0].chart_type);
        assert_eq!(after[0].position, before[0].position);
        assert_eq!(after[1], before[1]);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let (mut store, _) = store_with(&["A", "B"]);
        let before = store.widgets().to_vec();
        let revision = store.revision();

        assert!(!store.update("missing-id", &WidgetPatch::title("x")));
        assert_eq!(store.widgets(), before.as_slice());
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_update_chart_and_data() {
        let (mut store, ids) = store_with(&["A"]);
        let tasks = vec![Task { id: "1".to_string(), text: "milk".to_string(), completed: false }];
        let patch = WidgetPatch::data(WidgetData::Todo(tasks.clone())).with_chart_type(Some(ChartType::Line));

        store.update(&ids[0], &patch);
        let widget = store.get(&ids[0]).unwrap();
        assert_eq!(widget.data.tasks(), Some(tasks.as_slice()));
        assert_eq!(widget.chart_type, Some(ChartType::Line));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (mut store, ids) = store_with(&["A", "B"]);
        assert!(store.delete(&ids[0]));
        assert!(!store.delete(&ids[0]));
        assert_eq!(titles(&store), vec!["B"]);
    }

    #[test]
    fn test_reorder_replaces_sequence() {
        let (mut store, _) = store_with(&["A", "B", "C"]);
        let mut reversed = store.widgets().to_vec();
        reversed.reverse();
        store.reorder(reversed);
        assert_eq!(titles(&store), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_reorder_accepts_non_permutation() {
        let (mut store, _) = store_with(&["A", "B", "C"]);
        let first = store.widgets()[..1].to_vec();
        store.reorder(first);
        assert_eq!(titles(&store), vec!["A"]);
    }

    #[test]
    fn test_clear_all() {
        let (mut store, _) = store_with(&["A", "B"]);
        store.clear_all();
        assert!(store.is_empty());
    }

    #[test]
    fn test_replace_all_drops_duplicate_ids() {
        let mut store = WidgetStore::default();
        store.replace_all(vec![
            todo("first").into_widget("1".to_string()),
            todo("second").into_widget("2".to_string()),
            todo("again").into_widget("1".to_string()),
        ]);
        assert_eq!(titles(&store), vec!["first", "second"]);
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_mutation() {
        let (mut store, ids) = store_with(&["A", "B"]);
        let snapshot = store.snapshot();

        store.update(&ids[0], &WidgetPatch::title("changed"));
        store.delete(&ids[1]);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].title, "A");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_replace_settings() {
        let mut store = WidgetStore::default();
        let settings = DashboardSettings { compact_mode: true, ..DashboardSettings::default() };
        store.replace_settings(settings.clone());
        assert_eq!(store.settings(), &settings);
    }
}
