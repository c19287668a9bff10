//! List the active trip's activities grouped by day.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::render::Render;

pub async fn run(client: &Client, trip_id: &str) -> Result<()> {
    let days = client.list_activities(trip_id).await?;

    if days.is_empty() {
        println!("{}", "Nenhuma atividade cadastrada.".dimmed());
        return Ok(());
    }

    for day in &days {
        println!("{}", day.render());
        println!();
    }

    Ok(())
}
