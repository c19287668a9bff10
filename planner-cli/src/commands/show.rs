//! Overview of the active trip: details, participants and links.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::render::Render;

pub async fn run(client: &Client, trip_id: &str) -> Result<()> {
    let trip = client.get_trip(trip_id).await?;
    println!("{}", trip.render());

    let participants = client.list_participants(trip_id).await?;
    println!();
    println!("{}", "Convidados".bold());
    if participants.is_empty() {
        println!("{}", "Nenhum convidado adicionado.".dimmed());
    } else {
        for participant in &participants {
            println!("  {}", participant.render());
        }
    }

    let links = client.list_links(trip_id).await?;
    println!();
    println!("{}", "Links importantes".bold());
    if links.is_empty() {
        println!("{}", "Nenhum link adicionado.".dimmed());
    } else {
        for link in &links {
            println!("  {}", link.render());
        }
    }

    Ok(())
}
