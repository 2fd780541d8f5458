use clap::Args;

use super::OutputFormat;
use crate::storage::KeyValueStorage;
use crate::view::{Dashboard, ReportForm};

#[derive(Args)]
pub struct ReportCommand {
    /// Name of the person reporting
    #[arg(long, default_value = "")]
    pub name: String,

    /// Observed symptoms
    #[arg(long, default_value = "")]
    pub symptoms: String,

    /// Water condition (Clean, Dirty, Unknown or free text)
    #[arg(long, default_value = "")]
    pub water: String,

    /// Search query applied to the refreshed entry table
    #[arg(long, short, default_value = "")]
    pub search: String,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ReportCommand {
    pub fn run<S: KeyValueStorage>(
        &self,
        dashboard: &mut Dashboard<'_, S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        dashboard.search(self.search.as_str());

        let mut form = ReportForm::new(&self.name, &self.symptoms, &self.water);
        let submission = dashboard.submit_report(&mut form)?;

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&submission)?);
            }
            OutputFormat::Text => {
                println!("{}", submission.status);
                println!();
                println!("{}", submission.table);
                if let Some(alerts) = &submission.alerts {
                    println!();
                    println!("Alerts");
                    println!("{}", "=".repeat(30));
                    println!("{}", alerts);
                }
            }
        }
        Ok(())
    }
}
