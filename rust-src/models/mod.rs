//! Data models for widgets and dashboard settings.

mod settings;
mod widget;

#[allow(unused_imports)]
pub use settings::{DashboardSettings, SettingsDraft, Theme, SETTINGS_VERSION};
#[allow(unused_imports)]
pub use widget::{
    CategoryPoint,
    ChartType,
    HealthSample,
    MetricSummary,
    MonthValue,
    NewWidget,
    Position,
    Task,
    Widget,
    WidgetData,
    WidgetKind,
    WidgetPatch,
};
