//! Forget the trip stored on this device.

use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::store::TripStore;

pub fn run(store: &TripStore) -> Result<()> {
    if store.get().is_none() {
        println!("{}", "Nenhuma viagem salva nesse dispositivo.".dimmed());
        return Ok(());
    }

    let confirmed = Confirm::new()
        .with_prompt("Tem certeza que deseja remover a viagem do dispositivo?")
        .default(false)
        .interact()?;

    if confirmed {
        store.remove()?;
        println!("{}", "Viagem removida do dispositivo.".green());
    }

    Ok(())
}
