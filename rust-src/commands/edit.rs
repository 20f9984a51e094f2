//! Edit command - title and chart type of a widget.

use anyhow::{bail, Result};

use crate::models::{ChartType, WidgetPatch};
use crate::visualization::text::{GREEN, RESET, YELLOW};

use super::{print_not_found, require_title, Context};


/// Build the patch for the given edit flags.
pub fn build_patch(title: Option<String>, chart: Option<ChartType>, no_chart: bool) -> Result<WidgetPatch> {
    let mut patch = WidgetPatch::default();
    if let Some(title) = title {
        patch.title = Some(require_title(&title)?);
    }
    if no_chart {
        patch.chart_type = Some(None);
    } else if let Some(chart) = chart {
        patch.chart_type = Some(Some(chart));
    }

    if patch.is_empty() {
        bail!("Nothing to change: pass --title, --chart or --no-chart");
    }
    Ok(patch)
}


/// Run the edit command.
pub fn run(ctx: &Context, id: &str, title: Option<String>, chart: Option<ChartType>, no_chart: bool) -> Result<()> {
    let patch = build_patch(title, chart, no_chart)?;
    let mut dashboard = ctx.open()?;

    if let (Some(Some(_)), Some(widget)) = (patch.chart_type, dashboard.store().get(id)) {
        if !widget.kind().is_some_and(|k| k.supports_chart()) {
            println!("{YELLOW}{} widgets do not draw charts; the chart type is only stored{RESET}", widget.data.kind_tag());
        }
    }

    if !dashboard.update_widget(id, &patch)? {
        print_not_found(id);
        return Ok(());
    }

    if let Some(widget) = dashboard.store().get(id) {
        let chart = widget.chart_type.map(|c| c.as_str()).unwrap_or("none");
        println!("{GREEN}+ Updated \"{}\" (chart: {chart}){RESET}", widget.title);
    }

    ctx.finish(&mut dashboard)
}
