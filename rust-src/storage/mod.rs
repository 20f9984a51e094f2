//! Persistence layer for dashboard state.

mod database;
#[cfg(test)]
mod memory;
mod state;

#[allow(unused_imports)]
pub use database::{KeyValueStore, SqliteStore};
#[cfg(test)]
pub use memory::MemoryStore;
#[allow(unused_imports)]
pub use state::{load_settings, load_widgets, save_settings, save_widgets};
