//! Settings subcommands.

use anyhow::{anyhow, bail, Result};
use clap::ValueEnum;

use crate::models::{ChartType, DashboardSettings, SettingsDraft, Theme};
use crate::visualization::text::{BOLD, CYAN, DIM, GREEN, RESET};

use super::Context;


/// Settings that can be changed from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SettingKey {
    Name,
    Theme,
    AutoSave,
    GridLines,
    Compact,
    Animations,
    DefaultChart,
    RefreshInterval,
}


/// Parse `value` for `key` and write it into `settings`.
pub fn apply_setting(settings: &mut DashboardSettings, key: SettingKey, value: &str) -> Result<()> {
    let value = value.trim();
    match key {
        SettingKey::Name => {
            if value.is_empty() {
                bail!("Dashboard name must not be empty");
            }
            settings.dashboard_name = value.to_string();
        }
        SettingKey::Theme => {
            settings.theme = Theme::from_str(value, true).map_err(|e| anyhow!("Invalid theme: {e}"))?;
        }
        SettingKey::DefaultChart => {
            settings.default_chart_type =
                ChartType::from_str(value, true).map_err(|e| anyhow!("Invalid chart type: {e}"))?;
        }
        SettingKey::AutoSave => settings.auto_save = parse_switch(value)?,
        SettingKey::GridLines => settings.show_grid_lines = parse_switch(value)?,
        SettingKey::Compact => settings.compact_mode = parse_switch(value)?,
        SettingKey::Animations => settings.animations_enabled = parse_switch(value)?,
        SettingKey::RefreshInterval => {
            settings.refresh_interval = value
                .parse()
                .map_err(|_| anyhow!("Refresh interval must be a whole number of seconds, got '{value}'"))?;
        }
    }
    Ok(())
}


fn parse_switch(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => bail!("Expected on/off, got '{value}'"),
    }
}


fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}


/// Print the settings record.
pub fn print_settings(settings: &DashboardSettings) {
    println!("{BOLD}{CYAN}Dashboard settings{RESET}\n");
    println!("  name:             {}", settings.dashboard_name);
    println!("  theme:            {}", settings.theme.as_str());
    println!("  auto-save:        {}", on_off(settings.auto_save));
    println!("  grid-lines:       {}", on_off(settings.show_grid_lines));
    println!("  compact:          {}", on_off(settings.compact_mode));
    println!("  animations:       {}", on_off(settings.animations_enabled));
    println!("  default-chart:    {}", settings.default_chart_type.as_str());
    println!("  refresh-interval: {}s", settings.refresh_interval);
    println!("\n{DIM}Settings schema version {}{RESET}", settings.version);
}


/// Show the current settings.
pub fn show(ctx: &Context) -> Result<()> {
    let dashboard = ctx.open()?;
    print_settings(dashboard.settings());
    Ok(())
}


/// Change one setting.
pub fn set(ctx: &Context, key: SettingKey, value: &str) -> Result<()> {
    let mut dashboard = ctx.open()?;

    let mut draft = SettingsDraft::new(dashboard.settings());
    apply_setting(draft.edit(), key, value)?;
    dashboard.update_settings(draft.into_settings())?;

    let name = key.to_possible_value().map(|v| v.get_name().to_string()).unwrap_or_default();
    println!("{GREEN}+ {name} set to {}{RESET}", value.trim());
    ctx.finish(&mut dashboard)
}


/// Put every setting back to its default.
pub fn reset(ctx: &Context) -> Result<()> {
    let mut dashboard = ctx.open()?;
    dashboard.reset_settings()?;
    println!("{GREEN}+ Settings reset to defaults{RESET}");
    ctx.finish(&mut dashboard)
}
