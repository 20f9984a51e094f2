//! Built-in widget library and starter data.

use serde_json::{json, Value};

use crate::models::{
    CategoryPoint, ChartType, HealthSample, MetricSummary, MonthValue, NewWidget, Position, Task, Widget,
    WidgetData, WidgetKind,
};


/// A ready-made widget offered by the library.
#[derive(Debug, Clone)]
pub struct WidgetTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: TemplateCategory,
    pub chart_type: Option<ChartType>,
    data: fn() -> WidgetData,
}

impl WidgetTemplate {
    pub fn kind(&self) -> Option<WidgetKind> {
        (self.data)().kind()
    }

    pub fn to_new_widget(&self) -> NewWidget {
        NewWidget::new(self.name, (self.data)()).with_chart(self.chart_type)
    }
}


/// Library grouping shown by `wdash templates`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TemplateCategory {
    Finance,
    Productivity,
    Health,
    Investment,
    Lifestyle,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 5] = [
        Self::Finance,
        Self::Productivity,
        Self::Health,
        Self::Investment,
        Self::Lifestyle,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Finance => "Finance",
            Self::Productivity => "Tasks",
            Self::Health => "Health",
            Self::Investment => "Invest",
            Self::Lifestyle => "Life",
        }
    }
}


/// Starter data for a custom widget of `kind`.
pub fn default_data(kind: WidgetKind) -> WidgetData {
    match kind {
        WidgetKind::Finance => WidgetData::Finance(categories(&[("Category 1", 100.0), ("Category 2", 200.0)])),
        WidgetKind::Todo => WidgetData::Todo(tasks(&[("Sample task", false)])),
        WidgetKind::Health => WidgetData::Health(samples(&[("Mon", 5000, 2000), ("Tue", 7000, 2200)])),
        WidgetKind::Investment => WidgetData::Investment(months(&[("Jan", 1000.0), ("Feb", 1100.0)])),
        WidgetKind::Metric => WidgetData::Metric(MetricSummary::from([
            ("value1", 100.0),
            ("value2", 200.0),
            ("value3", 300.0),
            ("value4", 400.0),
        ])),
        WidgetKind::Lifestyle => WidgetData::Lifestyle(tasks(&[("Sample habit", false)])),
    }
}


/// All library templates, in display order.
pub fn templates() -> &'static [WidgetTemplate] {
    &TEMPLATES
}


pub fn find_template(id: &str) -> Option<&'static WidgetTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}


/// The dashboard shown on first run.
pub fn sample_dashboard() -> Vec<Widget> {
    let place = |x, y, w, h| Position { x, y, w, h };

    vec![
        Widget {
            id: "1".to_string(),
            title: "Monthly Expenses".to_string(),
            chart_type: Some(ChartType::Pie),
            data: WidgetData::Finance(categories(&[
                ("Food", 800.0),
                ("Rent", 1200.0),
                ("Transport", 300.0),
                ("Entertainment", 200.0),
            ])),
            position: place(0, 0, 6, 4),
        },
        Widget {
            id: "2".to_string(),
            title: "Today's Tasks".to_string(),
            chart_type: None,
            data: WidgetData::Todo(tasks(&[
                ("Review dashboard designs", true),
                ("Update financial records", false),
                ("Call insurance company", false),
                ("Grocery shopping", true),
            ])),
            position: place(6, 0, 6, 4),
        },
        Widget {
            id: "3".to_string(),
            title: "Weekly Activity".to_string(),
            chart_type: Some(ChartType::Bar),
            data: WidgetData::Health(week_of_activity()),
            position: place(0, 4, 8, 4),
        },
        Widget {
            id: "4".to_string(),
            title: "Portfolio Performance".to_string(),
            chart_type: Some(ChartType::Line),
            data: WidgetData::Investment(half_year_portfolio()),
            position: place(8, 4, 4, 4),
        },
        Widget {
            id: "5".to_string(),
            title: "Key Metrics".to_string(),
            chart_type: None,
            data: WidgetData::Metric(MetricSummary::from([
                ("totalSavings", 25000.0),
                ("monthlyIncome", 5500.0),
                ("completedTasks", 28.0),
                ("avgSteps", 10500.0),
            ])),
            position: place(0, 8, 12, 2),
        },
    ]
}


static TEMPLATES: [WidgetTemplate; 13] = [
    WidgetTemplate {
        id: "monthly-budget",
        name: "Monthly Budget",
        description: "Track your monthly spending by category",
        category: TemplateCategory::Finance,
        chart_type: Some(ChartType::Pie),
        data: || {
            WidgetData::Finance(categories(&[
                ("Housing", 1200.0),
                ("Food", 600.0),
                ("Transportation", 400.0),
                ("Entertainment", 200.0),
                ("Utilities", 300.0),
            ]))
        },
    },
    WidgetTemplate {
        id: "expense-tracker",
        name: "Expense Tracker",
        description: "Monitor daily expenses with bar chart",
        category: TemplateCategory::Finance,
        chart_type: Some(ChartType::Bar),
        data: || {
            WidgetData::Finance(categories(&[
                ("Week 1", 450.0),
                ("Week 2", 380.0),
                ("Week 3", 520.0),
                ("Week 4", 410.0),
            ]))
        },
    },
    WidgetTemplate {
        id: "savings-goal",
        name: "Savings Goal",
        description: "Track progress towards savings goals",
        category: TemplateCategory::Finance,
        chart_type: None,
        data: || {
            WidgetData::Metric(MetricSummary::from([
                ("currentSavings", 5000.0),
                ("savingsGoal", 10000.0),
                ("monthlyContribution", 500.0),
                ("progressPercent", 50.0),
            ]))
        },
    },
    WidgetTemplate {
        id: "daily-tasks",
        name: "Daily Tasks",
        description: "Manage your daily to-do list",
        category: TemplateCategory::Productivity,
        chart_type: None,
        data: || {
            WidgetData::Todo(tasks(&[
                ("Review morning emails", false),
                ("Team standup meeting", true),
                ("Complete project proposal", false),
                ("Grocery shopping", false),
            ]))
        },
    },
    WidgetTemplate {
        id: "project-tracker",
        name: "Project Tracker",
        description: "Track project milestones and deadlines",
        category: TemplateCategory::Productivity,
        chart_type: None,
        data: || {
            WidgetData::Todo(tasks(&[
                ("Design mockups", true),
                ("Frontend development", false),
                ("Backend API", false),
                ("Testing & QA", false),
            ]))
        },
    },
    WidgetTemplate {
        id: "time-tracker",
        name: "Time Tracker",
        description: "Monitor time spent on different activities",
        category: TemplateCategory::Productivity,
        chart_type: Some(ChartType::Pie),
        data: || {
            WidgetData::Finance(categories(&[
                ("Work", 8.0),
                ("Exercise", 1.0),
                ("Learning", 2.0),
                ("Leisure", 3.0),
            ]))
        },
    },
    WidgetTemplate {
        id: "fitness-tracker",
        name: "Fitness Tracker",
        description: "Track daily steps and calories",
        category: TemplateCategory::Health,
        chart_type: Some(ChartType::Bar),
        data: || {
            WidgetData::Health(samples(&[
                ("Mon", 8500, 2200),
                ("Tue", 12000, 2400),
                ("Wed", 6800, 2100),
                ("Thu", 15000, 2600),
                ("Fri", 9200, 2300),
            ]))
        },
    },
    WidgetTemplate {
        id: "workout-log",
        name: "Workout Log",
        description: "Log your weekly workouts",
        category: TemplateCategory::Health,
        chart_type: None,
        data: || {
            payload(
                WidgetKind::Health,
                json!([
                    {"id": "1", "text": "Monday - Chest & Triceps", "completed": true},
                    {"id": "2", "text": "Wednesday - Back & Biceps", "completed": false},
                    {"id": "3", "text": "Friday - Legs & Shoulders", "completed": false},
                    {"id": "4", "text": "Sunday - Cardio", "completed": false},
                ]),
            )
        },
    },
    WidgetTemplate {
        id: "health-metrics",
        name: "Health Metrics",
        description: "Monitor key health indicators",
        category: TemplateCategory::Health,
        chart_type: None,
        data: || {
            WidgetData::Metric(MetricSummary::from([
                ("weight", 70.0),
                ("bodyFat", 15.0),
                ("avgHeartRate", 72.0),
                ("sleepHours", 7.5),
            ]))
        },
    },
    WidgetTemplate {
        id: "portfolio-performance",
        name: "Portfolio Performance",
        description: "Track investment portfolio over time",
        category: TemplateCategory::Investment,
        chart_type: Some(ChartType::Line),
        data: || WidgetData::Investment(half_year_portfolio()),
    },
    WidgetTemplate {
        id: "stock-allocation",
        name: "Stock Allocation",
        description: "View portfolio allocation by asset type",
        category: TemplateCategory::Investment,
        chart_type: Some(ChartType::Pie),
        data: || {
            WidgetData::Finance(categories(&[
                ("Stocks", 60.0),
                ("Bonds", 25.0),
                ("Real Estate", 10.0),
                ("Cash", 5.0),
            ]))
        },
    },
    WidgetTemplate {
        id: "habit-tracker",
        name: "Habit Tracker",
        description: "Track daily habits and routines",
        category: TemplateCategory::Lifestyle,
        chart_type: None,
        data: || {
            WidgetData::Lifestyle(tasks(&[
                ("Drink 8 glasses of water", true),
                ("Read for 30 minutes", false),
                ("Meditate for 10 minutes", true),
                ("No social media before noon", false),
            ]))
        },
    },
    WidgetTemplate {
        id: "mood-tracker",
        name: "Mood Tracker",
        description: "Monitor your daily mood patterns",
        category: TemplateCategory::Lifestyle,
        chart_type: Some(ChartType::Line),
        data: || {
            payload(
                WidgetKind::Lifestyle,
                json!([
                    {"day": "Mon", "steps": 7, "calories": 8},
                    {"day": "Tue", "steps": 8, "calories": 7},
                    {"day": "Wed", "steps": 6, "calories": 6},
                    {"day": "Thu", "steps": 9, "calories": 8},
                    {"day": "Fri", "steps": 8, "calories": 9},
                ]),
            )
        },
    },
];


/// Payload for `kind` from raw JSON, kept as is when its shape belongs to
/// another kind.
fn payload(kind: WidgetKind, raw: Value) -> WidgetData {
    WidgetData::from_json(kind.as_str(), raw)
}


fn categories(items: &[(&str, f64)]) -> Vec<CategoryPoint> {
    items
        .iter()
        .map(|(name, value)| CategoryPoint { name: name.to_string(), value: *value })
        .collect()
}


fn tasks(items: &[(&str, bool)]) -> Vec<Task> {
    items
        .iter()
        .enumerate()
        .map(|(i, (text, completed))| Task {
            id: (i + 1).to_string(),
            text: text.to_string(),
            completed: *completed,
        })
        .collect()
}


fn samples(items: &[(&str, u64, u64)]) -> Vec<HealthSample> {
    items
        .iter()
        .map(|(day, steps, calories)| HealthSample {
            day: day.to_string(),
            steps: *steps,
            calories: *calories,
        })
        .collect()
}


fn months(items: &[(&str, f64)]) -> Vec<MonthValue> {
    items
        .iter()
        .map(|(month, value)| MonthValue { month: month.to_string(), value: *value })
        .collect()
}


fn week_of_activity() -> Vec<HealthSample> {
    samples(&[
        ("Mon", 8500, 2200),
        ("Tue", 12000, 2400),
        ("Wed", 6800, 2100),
        ("Thu", 15000, 2600),
        ("Fri", 9200, 2300),
        ("Sat", 18000, 2800),
        ("Sun", 5000, 2000),
    ])
}


fn half_year_portfolio() -> Vec<MonthValue> {
    months(&[
        ("Jan", 10000.0),
        ("Feb", 10500.0),
        ("Mar", 9800.0),
        ("Apr", 11200.0),
        ("May", 12100.0),
        ("Jun", 11800.0),
    ])
}
