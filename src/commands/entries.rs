use clap::{Args, Subcommand};

use super::{prompt_yes_no, OutputFormat};
use crate::storage::KeyValueStorage;
use crate::view::{Dashboard, Target};

#[derive(Args)]
pub struct EntriesCommand {
    #[command(subcommand)]
    pub command: EntriesSubcommand,
}

#[derive(Subcommand)]
pub enum EntriesSubcommand {
    /// List stored reports, newest first
    List {
        /// Only show reports whose name, symptoms or water condition contain this text
        #[arg(long, short, default_value = "")]
        search: String,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Delete a report
    Delete {
        /// Row position (POS column, same --search as the listing) or report ID
        target: Target,

        /// Search query the position refers to
        #[arg(long, short, default_value = "")]
        search: String,
    },

    /// Delete every stored report
    Clear {
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

impl EntriesCommand {
    pub fn run<S: KeyValueStorage>(
        &self,
        dashboard: &mut Dashboard<'_, S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            EntriesSubcommand::List { search, format } => {
                let table = dashboard.search(search.as_str());
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
                    OutputFormat::Text => println!("{}", table),
                }
                Ok(())
            }

            EntriesSubcommand::Delete { target, search } => {
                dashboard.search(search.as_str());
                let (removed, table) = dashboard.delete_entry(*target)?;
                println!("Deleted report from {} ({})", removed.name, removed.date);
                println!();
                println!("{}", table);
                Ok(())
            }

            EntriesSubcommand::Clear { force } => {
                let cleared = if *force {
                    dashboard.clear_entries(&|_: &str| true)?
                } else {
                    dashboard.clear_entries(&prompt_yes_no)?
                };

                match cleared {
                    Some(table) => {
                        println!("Cleared all reports.");
                        println!();
                        println!("{}", table);
                    }
                    None => println!("Clear cancelled."),
                }
                Ok(())
            }
        }
    }
}
