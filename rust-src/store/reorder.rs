//! Drag-and-drop reordering of the widget collection.
//!
//! A gesture moves through `Idle -> Dragging -> HoverTarget` and ends with a
//! drop or a cancel, both of which return it to `Idle`. Only a drop onto a
//! different position produces a new ordering; hovering is a display hint.

use crate::models::Widget;


/// Where a drag gesture currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { source_id: String },
    HoverTarget { source_id: String, target_index: usize },
}


/// Result of releasing a drag.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// New ordering to commit with `reorder`.
    Moved(Vec<Widget>),
    /// Dropped onto its own position.
    Unchanged,
    /// The dragged widget is gone from the collection.
    SourceMissing,
    /// No drag was in progress.
    NotDragging,
}


/// State machine for a single drag gesture.
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    state: DragState,
}


impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != DragState::Idle
    }

    /// Id of the widget being dragged.
    pub fn source_id(&self) -> Option<&str> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging { source_id } | DragState::HoverTarget { source_id, .. } => Some(source_id),
        }
    }

    /// Index currently hovered, if any.
    pub fn hover_index(&self) -> Option<usize> {
        match self.state {
            DragState::HoverTarget { target_index, .. } => Some(target_index),
            _ => None,
        }
    }

    /// Start dragging `source_id`, abandoning any gesture in progress.
    pub fn begin(&mut self, source_id: impl Into<String>) {
        self.state = DragState::Dragging { source_id: source_id.into() };
    }

    /// Move the hover hint. Ignored while idle.
    pub fn hover(&mut self, target_index: usize) {
        if let Some(source_id) = self.source_id() {
            self.state = DragState::HoverTarget { source_id: source_id.to_string(), target_index };
        }
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Release over `target_index` of `widgets`.
    ///
    /// The source is resolved by id against `widgets`, not by the index it
    /// had when the drag started. Targets past the end clamp to the last
    /// position.
    pub fn drop_at(&mut self, target_index: usize, widgets: &[Widget]) -> DropOutcome {
        let state = std::mem::take(&mut self.state);
        let source_id = match state {
            DragState::Idle => return DropOutcome::NotDragging,
            DragState::Dragging { source_id } | DragState::HoverTarget { source_id, .. } => source_id,
        };

        let Some(source_index) = widgets.iter().position(|w| w.id == source_id) else {
            return DropOutcome::SourceMissing;
        };

        let target_index = target_index.min(widgets.len() - 1);
        if source_index == target_index {
            return DropOutcome::Unchanged;
        }

        DropOutcome::Moved(move_item(widgets, source_index, target_index))
    }
}


/// Remove the item at `from` and insert it at `to`.
///
/// Items between the two positions shift by one; this is a move, not a swap.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut next = items.to_vec();
    let item = next.remove(from);
    next.insert(to.min(next.len()), item);
    next
}
