//! Terminal rendering for planner types.
//!
//! Extension trait plus a small month-grid renderer for the date
//! picker, colored with owo_colors.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate};
use owo_colors::OwoColorize;

use planner_core::calendar_day::MONTH_NAMES;
use planner_core::date_range::{DateRange, DayMark};
use planner_core::format;
use planner_core::trip::{Activity, DayActivities, Link, Participant, TripData};
use planner_core::CalendarDay;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for TripData {
    fn render(&self) -> String {
        let badge = if self.is_confirmed {
            "confirmada".green().to_string()
        } else {
            "pendente".yellow().to_string()
        };

        format!(
            "{} ({})\n{}",
            format::trip_description(self).bold(),
            badge,
            format::range_label(&self.period()).dimmed()
        )
    }
}

impl Render for Participant {
    fn render(&self) -> String {
        let name = self.name.as_deref().unwrap_or("(sem nome)");

        if self.is_confirmed {
            format!("{} {} {}", "✓".green(), name, self.email.dimmed())
        } else {
            format!("{} {} {}", "•".yellow(), name, self.email.dimmed())
        }
    }
}

impl Render for Link {
    fn render(&self) -> String {
        format!("{} {}", self.title, self.url.dimmed())
    }
}

impl Render for Activity {
    fn render(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.occurs_at) {
            Ok(at) => format!("{} {}", at.format("%H:%M").dimmed(), self.title),
            Err(_) => format!("{} {}", self.occurs_at.dimmed(), self.title),
        }
    }
}

impl Render for DayActivities {
    fn render(&self) -> String {
        let header = match self.date.parse::<CalendarDay>() {
            Ok(day) => format!(
                "Dia {} ({})",
                format::full_date_short_month(day),
                day.weekday_name()
            ),
            Err(_) => self.date.clone(),
        };

        let mut lines = vec![header.bold().to_string()];
        if self.activities.is_empty() {
            lines.push("   Nenhuma atividade cadastrada nessa data.".dimmed().to_string());
        } else {
            for activity in &self.activities {
                lines.push(format!("   {}", activity.render()));
            }
        }
        lines.join("\n")
    }
}

/// The current selection as the picker shows it: month grids with the
/// selected days highlighted, then the range label.
pub fn render_selection(range: &DateRange) -> String {
    let marks = range.marks();
    let mut out = String::new();

    if let Some(start) = range.start {
        let until = range.end.unwrap_or(start);
        for (year, month) in months_between(start, until) {
            out.push_str(&render_month(year, month, &marks));
            out.push('\n');
        }
    }

    let label = format::range_label(range);
    if !label.is_empty() {
        out.push_str(&format!(
            "{} {}\n",
            label.bold(),
            format!("({})", format::range_label_short(range)).dimmed()
        ));
    }

    out
}

/// One month as a 7-column grid, Sunday first.
fn render_month(year: i32, month: u32, marks: &BTreeMap<String, DayMark>) -> String {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return String::new();
    };

    let mut out = format!("   {} {}\n", MONTH_NAMES[month as usize - 1], year);
    out.push_str(" D  S  T  Q  Q  S  S\n");

    let mut column = first.weekday().num_days_from_sunday();
    out.push_str(&"   ".repeat(column as usize));

    for date in first.iter_days().take_while(|d| d.month() == month) {
        let cell = format!("{:>2}", date.day());
        let painted = match marks.get(&date.format("%Y-%m-%d").to_string()) {
            Some(DayMark::Start) | Some(DayMark::End) | Some(DayMark::Single) => {
                cell.green().bold().to_string()
            }
            Some(DayMark::Middle) => cell.green().to_string(),
            None => cell,
        };

        out.push_str(&painted);
        column += 1;
        if column % 7 == 0 {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }

    if column % 7 != 0 {
        out.push('\n');
    }

    out
}

fn months_between(start: CalendarDay, end: CalendarDay) -> Vec<(i32, u32)> {
    let mut months = Vec::new();
    let (mut year, mut month) = (start.year(), start.month());

    loop {
        months.push((year, month));
        if year == end.year() && month == end.month() {
            break;
        }
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }

    months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> CalendarDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_months_between_spans_year_boundary() {
        let months = months_between(day("2024-11-20"), day("2025-01-03"));
        assert_eq!(months, [(2024, 11), (2024, 12), (2025, 1)]);
    }

    #[test]
    fn test_render_month_contains_every_day() {
        let range = DateRange::new();
        let grid = render_month(2024, 7, &range.marks());
        assert!(grid.contains("Julho 2024"));
        assert!(grid.contains("31"));
    }

    #[test]
    fn test_render_selection_shows_label() {
        let range = DateRange::new()
            .select_day(day("2024-07-16"))
            .select_day(day("2024-07-19"));
        let out = render_selection(&range);
        assert!(out.contains("16 à 19 de Julho"));
    }
}
