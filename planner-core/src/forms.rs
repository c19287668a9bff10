//! One-step form flows around an existing trip.
//!
//! Trip update, activity creation, link creation and participation
//! confirmation are degenerate single-step wizards: one draft, one
//! validation gate that doubles as the forward transition, one payload.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::date_range::DateRange;
use crate::error::ValidationError;
use crate::guest_list::is_valid_email;
use crate::trip::{
    ConfirmParticipationPayload, CreateActivityPayload, CreateLinkPayload, UpdateTripPayload,
};

const MIN_LINK_TITLE_LEN: usize = 6;
const MAX_HOUR: u32 = 23;

/// Editing the destination/dates of an existing trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTripDraft {
    pub destination: String,
    pub range: DateRange,
}

impl UpdateTripDraft {
    pub fn validate(&self) -> Result<UpdateTripPayload, ValidationError> {
        let destination = self.destination.trim();

        if destination.is_empty() {
            return Err(ValidationError::MissingDestination);
        }

        let (Some(start), Some(end)) = (self.range.start, self.range.end) else {
            return Err(ValidationError::MissingDateRange);
        };

        Ok(UpdateTripPayload {
            destination: destination.to_string(),
            starts_at: start.to_utc_instant(),
            ends_at: end.to_utc_instant(),
        })
    }
}

/// A new activity on one trip day. The date uses the single-day mode
/// of the range selector, so both endpoints always coincide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityDraft {
    pub title: String,
    pub date: DateRange,
    pub hour: String,
}

impl ActivityDraft {
    pub fn validate(&self) -> Result<CreateActivityPayload, ValidationError> {
        let title = self.title.trim();

        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let Some(day) = self.date.start else {
            return Err(ValidationError::MissingDate);
        };

        let hour = self.hour.trim();
        if hour.is_empty() {
            return Err(ValidationError::MissingHour);
        }

        let hour: u32 = hour
            .parse()
            .map_err(|_| ValidationError::InvalidHour)?;
        if hour > MAX_HOUR {
            return Err(ValidationError::InvalidHour);
        }

        let occurs_at = day
            .date()
            .and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN))
            .and_utc()
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

        Ok(CreateActivityPayload {
            occurs_at,
            title: title.to_string(),
        })
    }
}

/// A new shared link for the trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
}

impl LinkDraft {
    pub fn validate(&self) -> Result<CreateLinkPayload, ValidationError> {
        let title = self.title.trim();

        if title.chars().count() < MIN_LINK_TITLE_LEN {
            return Err(ValidationError::TitleTooShort);
        }

        let url = url::Url::parse(self.url.trim()).map_err(|_| ValidationError::InvalidUrl)?;

        Ok(CreateLinkPayload {
            title: title.to_string(),
            url: url.to_string(),
        })
    }
}

/// Confirming one's own participation in a trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfirmParticipationDraft {
    pub name: String,
    pub email: String,
}

impl ConfirmParticipationDraft {
    pub fn validate(&self) -> Result<ConfirmParticipationPayload, ValidationError> {
        let name = self.name.trim();

        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let email = self.email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(ConfirmParticipationPayload {
            name: name.to_string(),
            email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_day(s: &str) -> DateRange {
        DateRange::single(s.parse().unwrap())
    }

    #[test]
    fn test_update_trip_requires_destination_and_range() {
        let mut draft = UpdateTripDraft::default();
        assert_eq!(draft.validate(), Err(ValidationError::MissingDestination));

        draft.destination = "Floripa".into();
        assert_eq!(draft.validate(), Err(ValidationError::MissingDateRange));

        draft.range = DateRange::new().select_day("2024-07-16".parse().unwrap());
        assert_eq!(draft.validate(), Err(ValidationError::MissingDateRange));

        draft.range = draft.range.select_day("2024-07-19".parse().unwrap());
        let payload = draft.validate().unwrap();
        assert_eq!(payload.starts_at, "2024-07-16T00:00:00Z");
        assert_eq!(payload.ends_at, "2024-07-19T00:00:00Z");
    }

    #[test]
    fn test_activity_builds_occurs_at_from_day_and_hour() {
        let draft = ActivityDraft {
            title: "Trilha na praia".into(),
            date: single_day("2024-07-17"),
            hour: "14".into(),
        };

        let payload = draft.validate().unwrap();
        assert_eq!(payload.occurs_at, "2024-07-17T14:00:00Z");
        assert_eq!(payload.title, "Trilha na praia");
    }

    #[test]
    fn test_activity_validation_gates() {
        let mut draft = ActivityDraft::default();
        assert_eq!(draft.validate(), Err(ValidationError::MissingTitle));

        draft.title = "Trilha".into();
        assert_eq!(draft.validate(), Err(ValidationError::MissingDate));

        draft.date = single_day("2024-07-17");
        assert_eq!(draft.validate(), Err(ValidationError::MissingHour));

        draft.hour = "25".into();
        assert_eq!(draft.validate(), Err(ValidationError::InvalidHour));

        draft.hour = "quatro".into();
        assert_eq!(draft.validate(), Err(ValidationError::InvalidHour));
    }

    #[test]
    fn test_link_title_minimum_length() {
        let draft = LinkDraft {
            title: "Airbnb".into(),
            url: "https://example.com/casa".into(),
        };
        assert!(draft.validate().is_ok());

        let short = LinkDraft {
            title: "Casa".into(),
            url: "https://example.com/casa".into(),
        };
        assert_eq!(short.validate(), Err(ValidationError::TitleTooShort));
    }

    #[test]
    fn test_link_rejects_invalid_url() {
        let draft = LinkDraft {
            title: "Reserva da casa".into(),
            url: "not a url".into(),
        };
        assert_eq!(draft.validate(), Err(ValidationError::InvalidUrl));
    }

    #[test]
    fn test_confirm_participation_normalizes_email() {
        let draft = ConfirmParticipationDraft {
            name: "Ana".into(),
            email: " Ana@Example.com ".into(),
        };
        let payload = draft.validate().unwrap();
        assert_eq!(payload.email, "ana@example.com");

        let invalid = ConfirmParticipationDraft {
            name: "Ana".into(),
            email: "ana@example".into(),
        };
        assert_eq!(invalid.validate(), Err(ValidationError::InvalidEmail));
    }
}
