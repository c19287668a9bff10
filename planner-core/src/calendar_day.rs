//! A single calendar day as the user taps it in the date picker.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, SecondsFormat, Weekday};
use serde::{Deserialize, Serialize};

/// Month names as rendered in range labels ("16 à 19 de Julho").
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Weekday names, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "domingo",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
];

/// A calendar date at day granularity.
///
/// Its identity is the ISO `YYYY-MM-DD` form, which is also how it
/// serializes. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    pub fn new(date: NaiveDate) -> Self {
        CalendarDay(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The `YYYY-MM-DD` identity string.
    pub fn iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Day of month (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Full month name ("Julho").
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.0.month0() as usize]
    }

    /// Weekday name ("terça-feira").
    pub fn weekday_name(&self) -> &'static str {
        let index = match self.0.weekday() {
            Weekday::Sun => 0,
            Weekday::Mon => 1,
            Weekday::Tue => 2,
            Weekday::Wed => 3,
            Weekday::Thu => 4,
            Weekday::Fri => 5,
            Weekday::Sat => 6,
        };
        WEEKDAY_NAMES[index]
    }

    /// The day as an ISO-8601 instant at midnight UTC, the form the
    /// remote service expects for `starts_at`/`ends_at`.
    pub fn to_utc_instant(&self) -> String {
        self.0
            .and_time(NaiveTime::MIN)
            .and_utc()
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        CalendarDay(date)
    }
}

impl FromStr for CalendarDay {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(CalendarDay)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
