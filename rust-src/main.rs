//! wdash - terminal personal dashboard
//!
//! Finance, task, health and investment widgets kept in a local SQLite
//! store, shown as an interactive dashboard or managed from the command line.

mod aggregation;
mod cli;
mod commands;
mod config;
mod data;
mod logging;
mod models;
mod storage;
mod store;
mod tui;
mod visualization;


fn main() {
    logging::init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
