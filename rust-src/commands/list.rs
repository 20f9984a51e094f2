//! List command - widgets in display order.

use anyhow::Result;

use crate::visualization::renderer_for;
use crate::visualization::text::{summarize, BOLD, CYAN, DIM, RESET};

use super::Context;


/// Run the list command.
pub fn run(ctx: &Context) -> Result<()> {
    let dashboard = ctx.open()?;
    let widgets = dashboard.widgets();

    println!("{BOLD}{CYAN}{}{RESET} {DIM}({} widgets){RESET}\n", dashboard.settings().dashboard_name, widgets.len());

    if widgets.is_empty() {
        println!("{DIM}No widgets. Add one with 'wdash add <kind>' or 'wdash templates --add <id>'.{RESET}");
        return Ok(());
    }

    println!(
        "{BOLD}{:>3}  {:<15} {:<11} {:<26} {:<13} {}{RESET}",
        "#", "ID", "TYPE", "TITLE", "VIEW", "CONTENTS"
    );
    println!("{}", "-".repeat(90));

    for (index, widget) in widgets.iter().enumerate() {
        println!(
            "{:>3}  {:<15} {:<11} {:<26} {:<13} {DIM}{}{RESET}",
            index + 1,
            widget.id,
            widget.data.kind_tag(),
            truncate(&widget.title, 26),
            renderer_for(widget).label(),
            summarize(widget),
        );
    }

    Ok(())
}


fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width - 1).collect();
    short.push('…');
    short
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Budget", 26), "Budget");
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abcd", 4), "abcd");
    }
}
