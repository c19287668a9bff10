//! Interactive trip creation: details, dates, guests, submit.

use anyhow::Result;
use chrono::Local;
use dialoguer::{Input, Select};
use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use std::time::Duration;

use planner_core::format;
use planner_core::{ActiveModal, CalendarDay, SubmissionStatus, TripDraft, WizardStep};

use crate::client::Client;
use crate::render;
use crate::store::TripStore;

pub async fn run(client: &Client, store: &TripStore) -> Result<()> {
    println!(
        "{}",
        "Convide seus amigos e agende sua próxima viagem".bold()
    );

    let mut draft = TripDraft::new();
    let mut status = SubmissionStatus::Idle;

    loop {
        match draft.step() {
            WizardStep::TripDetails => {
                let destination: String = Input::new()
                    .with_prompt("Para onde?")
                    .with_initial_text(draft.destination())
                    .allow_empty(true)
                    .interact_text()?;
                draft.set_destination(&destination);

                pick_dates(&mut draft)?;

                if let Err(err) = draft.advance() {
                    eprintln!("{}", err.yellow());
                }
            }
            WizardStep::AddEmail => {
                if status == SubmissionStatus::Failed {
                    eprintln!("{}", "A criação falhou, você pode tentar novamente.".red());
                    status = SubmissionStatus::Idle;
                }

                println!();
                println!(
                    "{} | {}",
                    draft.destination().bold(),
                    format::range_label(&draft.range())
                );
                render_guests(&draft);

                let actions = [
                    "Adicionar convidado",
                    "Remover convidado",
                    "Alterar local/data",
                    "Confirmar viagem",
                ];
                let action = Select::new()
                    .with_prompt("Com quem?")
                    .items(&actions)
                    .default(0)
                    .interact()?;

                match action {
                    0 => add_guest(&mut draft)?,
                    1 => remove_guest(&mut draft)?,
                    2 => draft.retreat(),
                    _ => match submit(&draft, client).await {
                        Some(trip_id) => {
                            store.save(&trip_id)?;
                            println!(
                                "{} id: {}",
                                "Viagem criada com sucesso!".green().bold(),
                                trip_id
                            );
                            return Ok(());
                        }
                        None => status = SubmissionStatus::Failed,
                    },
                }
            }
        }
    }
}

/// The date picker "modal": one tap per line, empty input closes it.
fn pick_dates(draft: &mut TripDraft) -> Result<()> {
    draft.modal = ActiveModal::DateRangePicker;
    let today = CalendarDay::new(Local::now().date_naive());

    while draft.modal == ActiveModal::DateRangePicker {
        print!("{}", render::render_selection(&draft.range()));

        let input: String = Input::new()
            .with_prompt("Quando? (dia AAAA-MM-DD, vazio para confirmar)")
            .allow_empty(true)
            .interact_text()?;

        if input.trim().is_empty() {
            draft.modal = ActiveModal::None;
            continue;
        }

        match input.trim().parse::<CalendarDay>() {
            Ok(day) if day < today => {
                eprintln!("{}", "Escolha uma data a partir de hoje.".yellow());
            }
            Ok(day) => draft.tap_day(day),
            Err(_) => {
                eprintln!("{}", "Data inválida, use o formato AAAA-MM-DD.".yellow());
            }
        }
    }

    Ok(())
}

fn render_guests(draft: &TripDraft) {
    if draft.guests.is_empty() {
        println!("{}", "Nenhum convidado adicionado.".dimmed());
    } else {
        for email in draft.guests.emails() {
            println!("  {}", email);
        }
    }
}

fn add_guest(draft: &mut TripDraft) -> Result<()> {
    draft.modal = ActiveModal::GuestPicker;

    let email: String = Input::new()
        .with_prompt("E-mail do convidado")
        .allow_empty(true)
        .interact_text()?;
    draft.pending_guest_input = email;

    if let Err(err) = draft.add_guest() {
        eprintln!("{}", err.yellow());
    }

    draft.modal = ActiveModal::None;
    Ok(())
}

fn remove_guest(draft: &mut TripDraft) -> Result<()> {
    if draft.guests.is_empty() {
        println!("{}", "Nenhum convidado adicionado.".dimmed());
        return Ok(());
    }

    let emails = draft.guests.emails().to_vec();
    let index = Select::new()
        .with_prompt("Remover qual convidado?")
        .items(&emails)
        .default(0)
        .interact()?;
    draft.remove_guest(&emails[index]);
    Ok(())
}

/// Run the submission, reporting progress; `None` means it failed and
/// the draft may be retried as-is.
async fn submit(draft: &TripDraft, client: &Client) -> Option<String> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Criando viagem...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = draft.submit(client).await;
    spinner.finish_and_clear();

    match result {
        Ok(trip_id) => Some(trip_id),
        Err(err) => {
            eprintln!("{}", err.red());
            None
        }
    }
}
