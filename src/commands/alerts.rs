use clap::{Args, Subcommand};

use super::OutputFormat;
use crate::storage::KeyValueStorage;
use crate::view::{Dashboard, Target};

#[derive(Args)]
pub struct AlertsCommand {
    #[command(subcommand)]
    pub command: AlertsSubcommand,
}

#[derive(Subcommand)]
pub enum AlertsSubcommand {
    /// List alerts, newest first
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Dismiss an alert
    Dismiss {
        /// Alert position (number in brackets) or alert ID
        target: Target,
    },

    /// Add a sample alert
    Demo,
}

impl AlertsCommand {
    pub fn run<S: KeyValueStorage>(
        &self,
        dashboard: &Dashboard<'_, S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            AlertsSubcommand::List { format } => {
                let list = dashboard.alert_list();
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&list)?),
                    OutputFormat::Text => println!("{}", list),
                }
                Ok(())
            }

            AlertsSubcommand::Dismiss { target } => {
                let (removed, list) = dashboard.dismiss_alert(*target)?;
                println!("Dismissed: {}", removed.title);
                println!();
                println!("{}", list);
                Ok(())
            }

            AlertsSubcommand::Demo => {
                let list = dashboard.inject_demo_alert()?;
                println!("{}", list);
                Ok(())
            }
        }
    }
}
