mod alerts;
mod charts_cmd;
mod config_cmd;
mod entries;
mod overview;
mod report;

pub use alerts::AlertsCommand;
pub use charts_cmd::ChartsCommand;
pub use config_cmd::ConfigCommand;
pub use entries::EntriesCommand;
pub use overview::OverviewCommand;
pub use report::ReportCommand;

use clap::ValueEnum;
use std::io::{self, Write};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Asks on stdin; anything but `y` declines.
fn prompt_yes_no(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    input.trim().eq_ignore_ascii_case("y")
}
