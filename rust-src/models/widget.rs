//! Widget records shown on the dashboard.
//!
//! On disk and in backup files a widget keeps the flat JSON shape
//! `{id, type, title, data, chartType?, position}`. In memory the `type` tag
//! and the `data` payload are folded into a single [`WidgetData`] value so the
//! payload shape always follows the kind.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;


/// The six kinds of dashboard widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Finance,
    Todo,
    Health,
    Investment,
    Metric,
    Lifestyle,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 6] = [
        Self::Finance,
        Self::Todo,
        Self::Health,
        Self::Investment,
        Self::Metric,
        Self::Lifestyle,
    ];

    /// Tag used for this kind in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Todo => "todo",
            Self::Health => "health",
            Self::Investment => "investment",
            Self::Metric => "metric",
            Self::Lifestyle => "lifestyle",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// Whether a chart type preference means anything for this kind.
    pub fn supports_chart(&self) -> bool {
        !matches!(self, Self::Todo | Self::Metric)
    }
}

impl std::fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}


/// Preferred chart style for charted widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
}

impl ChartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
        }
    }
}


/// Layout rectangle. Carried on the record; ordering never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self { x: 0, y: 0, w: 6, h: 4 }
    }
}


/// A named amount, used by finance widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPoint {
    pub name: String,
    pub value: f64,
}

/// A checklist entry, used by todo and lifestyle widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// One day of activity, used by health widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSample {
    pub day: String,
    #[serde(default)]
    pub steps: u64,
    #[serde(default)]
    pub calories: u64,
}

/// Portfolio value for a month, used by investment widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthValue {
    pub month: String,
    pub value: f64,
}

/// Named numeric fields shown by metric widgets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricSummary(pub BTreeMap<String, f64>);

impl MetricSummary {
    pub fn get(&self, field: &str) -> f64 {
        self.0.get(field).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, field: impl Into<String>, value: f64) {
        self.0.insert(field.into(), value);
    }
}

impl<const N: usize> From<[(&str, f64); N]> for MetricSummary {
    fn from(fields: [(&str, f64); N]) -> Self {
        Self(fields.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}


/// Kind tag and payload of a widget.
///
/// `Unrecognized` keeps widgets whose `type` is none of the six kinds, so
/// they survive an import/export cycle and render as a placeholder.
/// `Mismatched` does the same for a known kind whose `data` has another
/// shape (a health widget holding tasks, say): it shows as the kind's empty
/// view and is written back untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetData {
    Finance(Vec<CategoryPoint>),
    Todo(Vec<Task>),
    Health(Vec<HealthSample>),
    Investment(Vec<MonthValue>),
    Metric(MetricSummary),
    Lifestyle(Vec<Task>),
    Mismatched { kind: WidgetKind, raw: Value },
    Unrecognized { kind: String, raw: Value },
}

impl WidgetData {
    /// Empty payload of the given kind.
    pub fn empty(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::Finance => Self::Finance(Vec::new()),
            WidgetKind::Todo => Self::Todo(Vec::new()),
            WidgetKind::Health => Self::Health(Vec::new()),
            WidgetKind::Investment => Self::Investment(Vec::new()),
            WidgetKind::Metric => Self::Metric(MetricSummary::default()),
            WidgetKind::Lifestyle => Self::Lifestyle(Vec::new()),
        }
    }

    pub fn kind(&self) -> Option<WidgetKind> {
        match self {
            Self::Finance(_) => Some(WidgetKind::Finance),
            Self::Todo(_) => Some(WidgetKind::Todo),
            Self::Health(_) => Some(WidgetKind::Health),
            Self::Investment(_) => Some(WidgetKind::Investment),
            Self::Metric(_) => Some(WidgetKind::Metric),
            Self::Lifestyle(_) => Some(WidgetKind::Lifestyle),
            Self::Mismatched { kind, .. } => Some(*kind),
            Self::Unrecognized { .. } => None,
        }
    }

    /// The JSON `type` tag, including unrecognized ones.
    pub fn kind_tag(&self) -> &str {
        match self {
            Self::Unrecognized { kind, .. } => kind,
            other => other.kind().map(|k| k.as_str()).unwrap_or_default(),
        }
    }

    pub fn same_kind(&self, other: &WidgetData) -> bool {
        self.kind_tag() == other.kind_tag()
    }

    /// Tasks of a checklist widget.
    pub fn tasks(&self) -> Option<&[Task]> {
        match self {
            Self::Todo(tasks) | Self::Lifestyle(tasks) => Some(tasks),
            _ => None,
        }
    }

    pub fn tasks_mut(&mut self) -> Option<&mut Vec<Task>> {
        match self {
            Self::Todo(tasks) | Self::Lifestyle(tasks) => Some(tasks),
            _ => None,
        }
    }

    /// Number of entries, or fields for metric widgets.
    pub fn len(&self) -> usize {
        match self {
            Self::Finance(items) => items.len(),
            Self::Todo(items) | Self::Lifestyle(items) => items.len(),
            Self::Health(items) => items.len(),
            Self::Investment(items) => items.len(),
            Self::Metric(summary) => summary.0.len(),
            Self::Mismatched { .. } | Self::Unrecognized { .. } => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Payload as the dashboard shows it. Mismatched data shows as empty.
    pub fn shown(&self) -> Cow<'_, WidgetData> {
        match self {
            Self::Mismatched { kind, .. } => Cow::Owned(Self::empty(*kind)),
            other => Cow::Borrowed(other),
        }
    }

    /// Build a payload from its JSON form.
    ///
    /// Missing data loads as the empty payload of the kind. Data that does
    /// not fit the shape of `tag` is kept as `Mismatched`.
    pub fn from_json(tag: &str, raw: Value) -> Self {
        let Some(kind) = WidgetKind::from_tag(tag) else {
            return Self::Unrecognized { kind: tag.to_string(), raw };
        };
        if raw.is_null() {
            return Self::empty(kind);
        }

        let decoded = match kind {
            WidgetKind::Finance => Vec::deserialize(&raw).map(Self::Finance),
            WidgetKind::Todo => Vec::deserialize(&raw).map(Self::Todo),
            WidgetKind::Health => Vec::deserialize(&raw).map(Self::Health),
            WidgetKind::Investment => Vec::deserialize(&raw).map(Self::Investment),
            WidgetKind::Metric => MetricSummary::deserialize(&raw).map(Self::Metric),
            WidgetKind::Lifestyle => Vec::deserialize(&raw).map(Self::Lifestyle),
        };

        decoded.unwrap_or_else(|e| {
            tracing::debug!("{} widget data has another shape, keeping it as is: {}", kind, e);
            Self::Mismatched { kind, raw }
        })
    }

    pub fn to_json(&self) -> Value {
        let value = match self {
            Self::Finance(items) => serde_json::to_value(items),
            Self::Todo(items) | Self::Lifestyle(items) => serde_json::to_value(items),
            Self::Health(items) => serde_json::to_value(items),
            Self::Investment(items) => serde_json::to_value(items),
            Self::Metric(summary) => serde_json::to_value(summary),
            Self::Mismatched { raw, .. } | Self::Unrecognized { raw, .. } => Ok(raw.clone()),
        };
        value.unwrap_or_default()
    }
}


/// A single dashboard tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WidgetRecord", into = "WidgetRecord")]
pub struct Widget {
    pub id: String,
    pub title: String,
    pub chart_type: Option<ChartType>,
    pub data: WidgetData,
    pub position: Position,
}

impl Widget {
    pub fn kind(&self) -> Option<WidgetKind> {
        self.data.kind()
    }
}


/// Flat JSON form of [`Widget`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WidgetRecord {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    chart_type: Option<ChartType>,
    #[serde(default)]
    position: Position,
}

impl From<WidgetRecord> for Widget {
    fn from(record: WidgetRecord) -> Self {
        Self {
            data: WidgetData::from_json(&record.kind, record.data),
            id: record.id,
            title: record.title,
            chart_type: record.chart_type,
            position: record.position,
        }
    }
}

impl From<Widget> for WidgetRecord {
    fn from(widget: Widget) -> Self {
        Self {
            kind: widget.data.kind_tag().to_string(),
            data: widget.data.to_json(),
            id: widget.id,
            title: widget.title,
            chart_type: widget.chart_type,
            position: widget.position,
        }
    }
}


/// A widget that has not been given an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWidget {
    pub title: String,
    pub chart_type: Option<ChartType>,
    pub data: WidgetData,
    pub position: Position,
}

impl NewWidget {
    pub fn new(title: impl Into<String>, data: WidgetData) -> Self {
        Self {
            title: title.into(),
            chart_type: None,
            data,
            position: Position::default(),
        }
    }

    pub fn with_chart(mut self, chart_type: Option<ChartType>) -> Self {
        self.chart_type = chart_type;
        self
    }

    pub fn into_widget(self, id: String) -> Widget {
        Widget {
            id,
            title: self.title,
            chart_type: self.chart_type,
            data: self.data,
            position: self.position,
        }
    }
}


/// Fields to merge into an existing widget. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetPatch {
    pub title: Option<String>,
    pub chart_type: Option<Option<ChartType>>,
    pub data: Option<WidgetData>,
    pub position: Option<Position>,
}

impl WidgetPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Self::default() }
    }

    pub fn data(data: WidgetData) -> Self {
        Self { data: Some(data), ..Self::default() }
    }

    pub fn with_chart_type(mut self, chart_type: Option<ChartType>) -> Self {
        self.chart_type = Some(chart_type);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.chart_type.is_none() && self.data.is_none() && self.position.is_none()
    }

    /// Merge the patch into `widget`.
    ///
    /// Data of a different kind is ignored: a widget never changes kind.
    pub fn apply(&self, widget: &Widget) -> Widget {
        let mut updated = widget.clone();

        if let Some(title) = &self.title {
            updated.title = title.clone();
        }
        if let Some(chart_type) = self.chart_type {
            updated.chart_type = chart_type;
        }
        if let Some(data) = &self.data {
            if data.same_kind(&widget.data) {
                updated.data = data.clone();
            } else {
                tracing::warn!(
                    "ignoring {} data for {} widget {}",
                    data.kind_tag(),
                    widget.data.kind_tag(),
                    widget.id
                );
            }
        }
        if let Some(position) = self.position {
            updated.position = position;
        }

        updated
    }
}
