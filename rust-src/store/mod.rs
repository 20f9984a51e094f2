//! In-memory dashboard state and its mutation rules.

mod edits;
mod reorder;
mod session;
mod widget_store;

#[allow(unused_imports)]
pub use edits::{apply_edit, next_pending_task, DataEdit, EditError};
#[allow(unused_imports)]
pub use reorder::{move_item, DragGesture, DragState, DropOutcome};
pub use session::Dashboard;
pub use widget_store::WidgetStore;
