use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod charts;
mod commands;
mod config;
mod models;
mod storage;
mod view;

use commands::{
    AlertsCommand, ChartsCommand, ConfigCommand, EntriesCommand, OverviewCommand, ReportCommand,
};
use config::Config;
use models::{Alert, Entry};
use storage::{FileStorage, ListKey, ListStore};
use view::Dashboard;

#[derive(Parser)]
#[command(name = "shm")]
#[command(version)]
#[command(about = "Safe-water health monitor: field reports, alerts and water-quality charts", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a health report
    Report(ReportCommand),

    /// Browse, search and delete reports
    Entries(EntriesCommand),

    /// Manage alerts
    Alerts(AlertsCommand),

    /// Show alerts and reports together
    Overview(OverviewCommand),

    /// Show demo water-quality chart data
    Charts(ChartsCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter.value));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(cli.config)?;
    init_tracing(&config);
    tracing::debug!("Data directory: {}", config.data_dir.value.display());

    let storage = FileStorage::new(config.data_dir.value.clone());
    let entries: ListStore<Entry, _> = ListStore::new(ListKey::Entries, storage.clone());
    let alerts: ListStore<Alert, _> = ListStore::new(ListKey::Alerts, storage);
    let mut dashboard = Dashboard::with_default_observers(&entries, &alerts);

    match cli.command {
        Some(Commands::Report(cmd)) => cmd.run(&mut dashboard)?,
        Some(Commands::Entries(cmd)) => cmd.run(&mut dashboard)?,
        Some(Commands::Alerts(cmd)) => cmd.run(&dashboard)?,
        Some(Commands::Overview(cmd)) => cmd.run(&dashboard)?,
        Some(Commands::Charts(cmd)) => cmd.run()?,
        Some(Commands::Config(cmd)) => cmd.run(&config)?,
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
