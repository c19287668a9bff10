//! Add an activity to one day of the active trip.

use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

use planner_core::DateRange;
use planner_core::format;
use planner_core::forms::ActivityDraft;

use crate::client::Client;
use crate::commands::pick_day_within;

pub async fn run(client: &Client, trip_id: &str) -> Result<()> {
    let trip = client.get_trip(trip_id).await?;
    let period = trip.period();
    println!(
        "{} | {}",
        trip.destination.bold(),
        format::range_label(&period)
    );

    let mut draft = ActivityDraft::default();

    loop {
        let title: String = Input::new()
            .with_prompt("Qual atividade?")
            .with_initial_text(&draft.title)
            .allow_empty(true)
            .interact_text()?;
        draft.title = title;

        // Single-date mode: the activity day is one collapsed range
        let day = pick_day_within(&period)?;
        draft.date = DateRange::single(day);

        let hour: String = Input::new()
            .with_prompt("Horário? (0-23)")
            .with_initial_text(&draft.hour)
            .allow_empty(true)
            .interact_text()?;
        draft.hour = hour;

        match draft.validate() {
            Ok(payload) => {
                client.create_activity(trip_id, &payload).await?;
                println!("{}", "Atividade cadastrada com sucesso!".green());
                return Ok(());
            }
            Err(err) => eprintln!("{}", err.yellow()),
        }
    }
}
