mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventcal_core::config::EventcalConfig;
use eventcal_core::store::EventStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eventcal")]
#[command(about = "Manage single and recurring calendar events")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an event (one per occurrence if it repeats)
    New(commands::new::NewArgs),
    /// Edit a single stored event
    Edit(commands::edit::EditArgs),
    /// Delete a single stored event (other occurrences are kept)
    Delete {
        id: String,
    },
    /// Show the events of a week or month
    Events {
        /// Any date inside the period to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Show the whole month instead of the week
        #[arg(short, long)]
        month: bool,
    },
    /// Search titles, descriptions and locations within a week or month
    Search {
        term: String,

        /// Any date inside the period to search (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Search the whole month instead of the week
        #[arg(short, long)]
        month: bool,
    },
    /// Print reminders for events that are about to start
    Notify {
        /// Reference time (e.g. "2024-10-15T09:50", defaults to now)
        #[arg(long)]
        now: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EventcalConfig::load()?;
    let store = EventStore::open(&config.data_path());
    tracing::debug!(path = %store.path().display(), "Opened event store");

    match cli.command {
        Commands::New(args) => commands::new::run(&config, &store, args),
        Commands::Edit(args) => commands::edit::run(&store, args),
        Commands::Delete { id } => commands::delete::run(&store, &id),
        Commands::Events { date, month } => {
            let range = commands::view_range(date.as_deref(), month)?;
            commands::events::run(&store, range)
        }
        Commands::Search { term, date, month } => {
            let range = commands::view_range(date.as_deref(), month)?;
            commands::search::run(&store, &term, range)
        }
        Commands::Notify { now } => commands::notify::run(&store, now.as_deref()),
    }
}
