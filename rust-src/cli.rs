//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{self, settings::SettingKey, Context};
use crate::config::{default_data_dir, DATA_DIR_ENV};
use crate::data::TemplateCategory;
use crate::models::{ChartType, WidgetKind};


/// wdash - personal dashboard of finance, task, health and investment widgets
#[derive(Parser)]
#[command(name = "wdash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the dashboard database
    #[arg(long, global = true, env = DATA_DIR_ENV, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Save widget changes even when autosave is off
    #[arg(long, global = true)]
    save: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard
    Show,

    /// List widgets in display order
    List,

    /// Add a widget with starter data
    Add {
        /// Widget type
        #[arg(value_enum)]
        kind: WidgetKind,

        /// Widget title (default: named after the type)
        #[arg(short, long)]
        title: Option<String>,

        /// Chart type (default: the dashboard's default chart type)
        #[arg(short, long, value_enum)]
        chart: Option<ChartType>,
    },

    /// Browse the widget library, or add a widget from it
    Templates {
        /// Template id to add to the dashboard
        #[arg(long, value_name = "TEMPLATE")]
        add: Option<String>,

        /// Title for the added widget (default: the template name)
        #[arg(short, long, requires = "add")]
        title: Option<String>,

        /// Only list one category
        #[arg(short, long, value_enum, conflicts_with = "add")]
        category: Option<TemplateCategory>,
    },

    /// Change a widget's title or chart type
    Edit {
        /// Widget id
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New chart type
        #[arg(short, long, value_enum)]
        chart: Option<ChartType>,

        /// Clear the chart type
        #[arg(long, conflicts_with = "chart")]
        no_chart: bool,
    },

    /// Delete a widget
    Remove {
        /// Widget id
        id: String,
    },

    /// Delete every widget
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Move a widget to another position in the display order
    Move {
        /// Widget id
        id: String,

        /// New position, starting at 1
        position: usize,
    },

    /// Edit the tasks of a todo or lifestyle widget
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },

    /// Edit entries of a finance, investment, health or metric widget
    Data {
        #[command(subcommand)]
        command: DataCommands,
    },

    /// Show or change dashboard settings
    Settings {
        #[command(subcommand)]
        command: Option<SettingsCommands>,
    },

    /// Export widgets and settings to a JSON backup file
    Export {
        /// Output file path (default: dashboard-backup-<date>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the widgets from a JSON backup file
    Import {
        /// Backup file to read
        file: PathBuf,

        /// Also apply the settings stored in the file
        #[arg(long)]
        with_settings: bool,
    },

    /// Show widget and task statistics
    Stats,
}


#[derive(Subcommand)]
enum TaskCommands {
    /// Add a task
    Add {
        /// Widget id
        widget_id: String,

        /// Task text
        text: String,
    },

    /// Mark a task done, or not done again
    Toggle {
        /// Widget id
        widget_id: String,

        /// Task id
        task_id: String,
    },

    /// Remove a task
    Remove {
        /// Widget id
        widget_id: String,

        /// Task id
        task_id: String,
    },
}


#[derive(Subcommand)]
enum DataCommands {
    /// Set a category, month, day or metric field
    Set {
        /// Widget id
        widget_id: String,

        /// Category, month, day or field name
        name: String,

        /// Amount, value, steps or field value
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Calories for a health day
        #[arg(long)]
        calories: Option<u64>,
    },

    /// Remove a category, month, day or metric field
    Remove {
        /// Widget id
        widget_id: String,

        /// Category, month, day or field name
        name: String,
    },
}


#[derive(Subcommand)]
enum SettingsCommands {
    /// Show the current settings
    Show,

    /// Change one setting
    Set {
        /// Setting to change
        #[arg(value_enum)]
        key: SettingKey,

        /// New value
        value: String,
    },

    /// Restore the default settings
    Reset,
}


/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let ctx = Context {
        data_dir: cli.data_dir.unwrap_or_else(default_data_dir),
        save: cli.save,
    };
    tracing::debug!("using data directory {}", ctx.data_dir.display());

    match cli.command {
        Some(Commands::Show) => commands::show::run(&ctx)?,
        Some(Commands::List) => commands::list::run(&ctx)?,
        Some(Commands::Add { kind, title, chart }) => commands::add::run(&ctx, kind, title, chart)?,
        Some(Commands::Templates { add, title, category }) => match add {
            Some(id) => commands::templates::add(&ctx, &id, title)?,
            None => commands::templates::list(category)?,
        },
        Some(Commands::Edit { id, title, chart, no_chart }) => {
            commands::edit::run(&ctx, &id, title, chart, no_chart)?
        }
        Some(Commands::Remove { id }) => commands::remove::widget(&ctx, &id)?,
        Some(Commands::Clear { force }) => commands::remove::all(&ctx, force)?,
        Some(Commands::Move { id, position }) => commands::reorder::run(&ctx, &id, position)?,
        Some(Commands::Task { command }) => match command {
            TaskCommands::Add { widget_id, text } => commands::task::add(&ctx, &widget_id, &text)?,
            TaskCommands::Toggle { widget_id, task_id } => commands::task::toggle(&ctx, &widget_id, &task_id)?,
            TaskCommands::Remove { widget_id, task_id } => commands::task::remove(&ctx, &widget_id, &task_id)?,
        },
        Some(Commands::Data { command }) => match command {
            DataCommands::Set { widget_id, name, value, calories } => {
                commands::data::set(&ctx, &widget_id, &name, value, calories)?
            }
            DataCommands::Remove { widget_id, name } => commands::data::remove(&ctx, &widget_id, &name)?,
        },
        Some(Commands::Settings { command }) => match command {
            None | Some(SettingsCommands::Show) => commands::settings::show(&ctx)?,
            Some(SettingsCommands::Set { key, value }) => commands::settings::set(&ctx, key, &value)?,
            Some(SettingsCommands::Reset) => commands::settings::reset(&ctx)?,
        },
        Some(Commands::Export { output }) => commands::export::run(&ctx, output)?,
        Some(Commands::Import { file, with_settings }) => commands::import::run(&ctx, &file, with_settings)?,
        Some(Commands::Stats) => commands::stats::run(&ctx)?,
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
