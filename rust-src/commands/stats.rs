//! Stats command - widget and task statistics.

use anyhow::Result;

use crate::aggregation::calculate_widget_stats;
use crate::config::get_db_path;
use crate::visualization::text::{create_bar, BAR_WIDTH, BOLD, CYAN, DIM, GREEN, ORANGE, RESET};

use super::Context;


/// Run the stats command.
pub fn run(ctx: &Context) -> Result<()> {
    let dashboard = ctx.open()?;
    let stats = calculate_widget_stats(dashboard.widgets());

    println!("\n{}", "=".repeat(60));
    println!("{:^60}", format!("{} Statistics", dashboard.settings().dashboard_name));
    println!("{}\n", "=".repeat(60));

    if stats.total_widgets == 0 {
        println!("No widgets yet. Add one with 'wdash add <kind>'.");
        return Ok(());
    }

    // Summary
    println!("{BOLD}SUMMARY{RESET}");
    println!("{}", "-".repeat(40));
    println!("  Total Widgets:       {:>15}", stats.total_widgets);
    println!("  Total Tasks:         {:>15}", stats.total_tasks);
    println!("  Completed Tasks:     {:>15}", stats.completed_tasks);
    println!("  Pending Tasks:       {:>15}", stats.pending_tasks());

    if stats.total_tasks > 0 {
        println!(
            "  Completion:          {} {GREEN}{:>5.1}%{RESET}",
            create_bar(stats.completed_tasks as f64, stats.total_tasks as f64, BAR_WIDTH, GREEN),
            stats.completion_rate()
        );
    }

    // Widgets by type
    println!("\n{BOLD}WIDGETS BY TYPE{RESET}");
    println!("{}", "-".repeat(60));

    let mut kinds: Vec<_> = stats.by_kind.iter().collect();
    kinds.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    let max = kinds.first().map(|(_, count)| **count).unwrap_or(0);

    for (kind, count) in kinds {
        let percentage = *count as f64 / stats.total_widgets as f64 * 100.0;
        println!(
            "  {:12} {} {ORANGE}{:>4}{RESET} {CYAN}({:5.1}%){RESET}",
            kind,
            create_bar(*count as f64, max as f64, BAR_WIDTH, ORANGE),
            count,
            percentage
        );
    }

    println!("\n{}", "-".repeat(60));
    println!("{DIM}Database: {}{RESET}", get_db_path(&ctx.data_dir).display());

    Ok(())
}
