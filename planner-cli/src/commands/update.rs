//! Update the destination/dates of the active trip.

use anyhow::Result;
use chrono::Local;
use dialoguer::Input;
use owo_colors::OwoColorize;

use planner_core::CalendarDay;
use planner_core::forms::UpdateTripDraft;

use crate::client::Client;
use crate::commands::pick_range;

pub async fn run(client: &Client, trip_id: &str) -> Result<()> {
    let trip = client.get_trip(trip_id).await?;

    let mut draft = UpdateTripDraft {
        destination: trip.destination.clone(),
        range: trip.period(),
    };

    loop {
        let destination: String = Input::new()
            .with_prompt("Onde?")
            .with_initial_text(&draft.destination)
            .allow_empty(true)
            .interact_text()?;
        draft.destination = destination;

        let today = CalendarDay::new(Local::now().date_naive());
        draft.range = pick_range(draft.range, Some(today))?;

        match draft.validate() {
            Ok(payload) => {
                client.update_trip(trip_id, &payload).await?;
                println!("{}", "Viagem atualizada com sucesso!".green());
                return Ok(());
            }
            Err(err) => eprintln!("{}", err.yellow()),
        }
    }
}
