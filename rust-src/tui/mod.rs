//! Interactive terminal dashboard.

mod app;

pub use app::run;
