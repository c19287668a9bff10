mod client;
mod commands;
mod config;
mod render;
mod store;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::client::Client;
use crate::config::Config;
use crate::store::TripStore;

#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Plan trips, invite guests and track activities from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a trip: destination, dates and guests
    New,
    /// Show the active trip with participants and links
    Show,
    /// Update the active trip's destination and dates
    Update,
    /// Add an activity to a day of the active trip
    Activity,
    /// List the active trip's activities grouped by day
    Activities,
    /// Register an important link for the active trip
    Link,
    /// Confirm a participant of the active trip
    Confirm,
    /// Forget the trip stored on this device
    Forget,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let client = Client::new(&config);
    let store = TripStore::open()?;

    match cli.command {
        Commands::New => commands::new::run(&client, &store).await,
        Commands::Show => {
            let trip_id = require_trip(&store)?;
            commands::show::run(&client, &trip_id).await
        }
        Commands::Update => {
            let trip_id = require_trip(&store)?;
            commands::update::run(&client, &trip_id).await
        }
        Commands::Activity => {
            let trip_id = require_trip(&store)?;
            commands::activity::run(&client, &trip_id).await
        }
        Commands::Activities => {
            let trip_id = require_trip(&store)?;
            commands::activities::run(&client, &trip_id).await
        }
        Commands::Link => {
            let trip_id = require_trip(&store)?;
            commands::link::run(&client, &trip_id).await
        }
        Commands::Confirm => {
            let trip_id = require_trip(&store)?;
            commands::confirm::run(&client, &trip_id).await
        }
        Commands::Forget => commands::forget::run(&store),
    }
}

fn require_trip(store: &TripStore) -> Result<String> {
    store.get().ok_or_else(|| {
        anyhow::anyhow!(
            "No trip on this device yet.\n\n\
            Create one with:\n  \
            planner new"
        )
    })
}
