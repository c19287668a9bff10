//! Confirm a participant of the active trip.

use anyhow::Result;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use planner_core::forms::ConfirmParticipationDraft;

use crate::client::Client;

pub async fn run(client: &Client, trip_id: &str) -> Result<()> {
    let participants = client.list_participants(trip_id).await?;

    if participants.is_empty() {
        anyhow::bail!("Nenhum convidado para confirmar nessa viagem.");
    }

    let labels: Vec<String> = participants
        .iter()
        .map(|p| match &p.name {
            Some(name) => format!("{} <{}>", name, p.email),
            None => p.email.clone(),
        })
        .collect();
    let index = Select::new()
        .with_prompt("Confirmar qual convidado?")
        .items(&labels)
        .default(0)
        .interact()?;
    let participant = &participants[index];

    let mut draft = ConfirmParticipationDraft {
        name: participant.name.clone().unwrap_or_default(),
        email: participant.email.clone(),
    };

    loop {
        let name: String = Input::new()
            .with_prompt("Nome completo")
            .with_initial_text(&draft.name)
            .allow_empty(true)
            .interact_text()?;
        draft.name = name;

        let email: String = Input::new()
            .with_prompt("E-mail")
            .with_initial_text(&draft.email)
            .allow_empty(true)
            .interact_text()?;
        draft.email = email;

        match draft.validate() {
            Ok(payload) => {
                client
                    .confirm_participation(&participant.id, &payload)
                    .await?;
                println!("{}", "Participação confirmada!".green());
                return Ok(());
            }
            Err(err) => eprintln!("{}", err.yellow()),
        }
    }
}
