//! Templates command - browse the widget library or add from it.

use anyhow::{bail, Result};

use crate::data::{find_template, templates, TemplateCategory};
use crate::visualization::text::{BOLD, CYAN, DIM, GREEN, RESET};

use super::{require_title, Context};


/// List templates, optionally only one category.
pub fn list(category: Option<TemplateCategory>) -> Result<()> {
    println!("{BOLD}{CYAN}Widget library{RESET}\n");

    for group in TemplateCategory::ALL {
        if category.is_some_and(|c| c != group) {
            continue;
        }

        println!("{BOLD}{}{RESET}", group.label());
        for template in templates().iter().filter(|t| t.category == group) {
            let kind = template.kind().map(|k| k.as_str()).unwrap_or("?");
            let chart = template.chart_type.map(|c| format!(", {}", c.as_str())).unwrap_or_default();
            println!("  {:<22} {:<24} {DIM}{kind}{chart}{RESET}", template.id, template.name);
            println!("  {:<22} {DIM}{}{RESET}", "", template.description);
        }
        println!();
    }

    println!("{DIM}Add one with: wdash templates --add <id>{RESET}");
    Ok(())
}


/// Add the template `id` to the dashboard.
pub fn add(ctx: &Context, id: &str, title: Option<String>) -> Result<()> {
    let Some(template) = find_template(id) else {
        bail!("Unknown template '{id}'. Run 'wdash templates' to see the library.");
    };

    let mut new_widget = template.to_new_widget();
    if let Some(title) = title {
        new_widget.title = require_title(&title)?;
    }

    let mut dashboard = ctx.open()?;
    let widget = dashboard.add_widget(new_widget)?;

    println!("{GREEN}+ Added \"{}\" from the {} library{RESET}", widget.title, template.category.label());
    println!("{DIM}id: {}{RESET}", widget.id);

    ctx.finish(&mut dashboard)
}
