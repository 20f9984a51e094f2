//! Visualization layer: terminal views of widgets and the dashboard.

mod dashboard;
mod palette;
mod render;
mod test_utils;
pub mod text;

pub use dashboard::{render_dashboard, DashboardView};
pub use render::{renderer_for, Renderer};
