use clap::Args;
use serde::Serialize;

use super::OutputFormat;
use crate::storage::KeyValueStorage;
use crate::view::{AlertList, Dashboard, EntryTable};

#[derive(Args)]
pub struct OverviewCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct Overview {
    alerts: AlertList,
    entries: EntryTable,
}

impl OverviewCommand {
    pub fn run<S: KeyValueStorage>(
        &self,
        dashboard: &Dashboard<'_, S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let overview = Overview {
            alerts: dashboard.alert_list(),
            entries: dashboard.entry_table(),
        };

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&overview)?),
            OutputFormat::Text => {
                println!("Alerts");
                println!("{}", "=".repeat(30));
                println!("{}", overview.alerts);
                println!();
                println!("Reports");
                println!("{}", "=".repeat(30));
                println!("{}", overview.entries);
            }
        }
        Ok(())
    }
}
