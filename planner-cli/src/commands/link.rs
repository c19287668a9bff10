//! Register an important link for the active trip.

use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

use planner_core::forms::LinkDraft;

use crate::client::Client;

pub async fn run(client: &Client, trip_id: &str) -> Result<()> {
    let mut draft = LinkDraft::default();

    loop {
        let title: String = Input::new()
            .with_prompt("Título")
            .with_initial_text(&draft.title)
            .allow_empty(true)
            .interact_text()?;
        draft.title = title;

        let url: String = Input::new()
            .with_prompt("URL")
            .with_initial_text(&draft.url)
            .allow_empty(true)
            .interact_text()?;
        draft.url = url;

        match draft.validate() {
            Ok(payload) => {
                client.create_link(trip_id, &payload).await?;
                println!("{}", "Link cadastrado com sucesso!".green());
                return Ok(());
            }
            Err(err) => eprintln!("{}", err.yellow()),
        }
    }
}
