pub mod activities;
pub mod activity;
pub mod confirm;
pub mod forget;
pub mod link;
pub mod new;
pub mod show;
pub mod update;

use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

use planner_core::CalendarDay;
use planner_core::DateRange;

use crate::render;

const DAY_PROMPT_HINT: &str = "dia AAAA-MM-DD, vazio para confirmar";

/// Prompt day taps until the user confirms, folding each into the
/// range. `min_day` is the picker's lower bound; days before it are
/// filtered here, before they ever reach the selector.
pub(crate) fn pick_range(mut range: DateRange, min_day: Option<CalendarDay>) -> Result<DateRange> {
    loop {
        print!("{}", render::render_selection(&range));

        let input: String = Input::new()
            .with_prompt(format!("Quando? ({})", DAY_PROMPT_HINT))
            .allow_empty(true)
            .interact_text()?;

        if input.trim().is_empty() {
            return Ok(range);
        }

        match input.trim().parse::<CalendarDay>() {
            Ok(day) => match min_day {
                Some(min) if day < min => {
                    eprintln!("{}", "Escolha uma data a partir de hoje.".yellow());
                }
                _ => range = range.select_day(day),
            },
            Err(_) => {
                eprintln!("{}", "Data inválida, use o formato AAAA-MM-DD.".yellow());
            }
        }
    }
}

/// Prompt for a single day inside the trip period, retrying until one
/// fits. An empty period (malformed trip instants) accepts any day.
pub(crate) fn pick_day_within(period: &DateRange) -> Result<CalendarDay> {
    loop {
        let input: String = Input::new()
            .with_prompt("Em qual dia? (AAAA-MM-DD)")
            .interact_text()?;

        let day = match input.trim().parse::<CalendarDay>() {
            Ok(day) => day,
            Err(_) => {
                eprintln!("{}", "Data inválida, use o formato AAAA-MM-DD.".yellow());
                continue;
            }
        };

        match (period.start, period.end) {
            (Some(start), Some(end)) if day < start || day > end => {
                eprintln!("{}", "Escolha um dia dentro do período da viagem.".yellow());
            }
            _ => return Ok(day),
        }
    }
}
