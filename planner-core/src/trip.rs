//! Wire types for the remote trip service.
//!
//! Field names follow the service's JSON (snake_case instants as
//! ISO-8601 strings). Clients work exclusively with these types.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::calendar_day::CalendarDay;
use crate::date_range::DateRange;

/// Body for `POST /trips`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTripPayload {
    pub destination: String,
    pub starts_at: String,
    pub ends_at: String,
    pub emails_to_invite: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
}

/// Body for `PUT /trips/:id` (the id travels in the path).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTripPayload {
    pub destination: String,
    pub starts_at: String,
    pub ends_at: String,
}

/// Body for `POST /trips/:id/activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateActivityPayload {
    pub occurs_at: String,
    pub title: String,
}

/// Body for `POST /trips/:id/links`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLinkPayload {
    pub title: String,
    pub url: String,
}

/// Body for `PATCH /participants/:id/confirm`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmParticipationPayload {
    pub name: String,
    pub email: String,
}

/// A trip as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripData {
    pub id: String,
    pub destination: String,
    pub starts_at: String,
    pub ends_at: String,
    pub is_confirmed: bool,
}

impl TripData {
    /// The trip's date range at calendar-day granularity. Empty when
    /// either instant fails to parse.
    pub fn period(&self) -> DateRange {
        match (parse_instant_day(&self.starts_at), parse_instant_day(&self.ends_at)) {
            (Some(start), Some(end)) => DateRange {
                start: Some(start),
                end: Some(end),
            },
            _ => DateRange::new(),
        }
    }
}

fn parse_instant_day(instant: &str) -> Option<CalendarDay> {
    DateTime::parse_from_rfc3339(instant)
        .ok()
        .map(|dt| CalendarDay::new(dt.date_naive()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub occurs_at: String,
    pub title: String,
}

/// Activities grouped by trip day, as the service returns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayActivities {
    pub date: String,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub is_confirmed: bool,
}
