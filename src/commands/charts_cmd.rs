use chrono::Local;
use clap::Args;

use super::OutputFormat;
use crate::charts;

#[derive(Args)]
pub struct ChartsCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ChartsCommand {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let data = charts::sample(&mut rand::rng(), Local::now());

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
            OutputFormat::Text => println!("{}", data),
        }
        Ok(())
    }
}
