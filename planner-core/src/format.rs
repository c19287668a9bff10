//! Human-readable renderings of dates and ranges.
//!
//! Labels are recomputed from the range on every change, never stored.

use crate::calendar_day::CalendarDay;
use crate::date_range::DateRange;
use crate::trip::TripData;

const MAX_DESCRIPTION_DESTINATION: usize = 30;

/// Label for the "Quando?" field.
///
/// - empty range: empty string
/// - start only: `"16 de Julho..."` (ellipsis marks the incomplete
///   selection)
/// - same month: `"16 à 19 de Julho"`
/// - cross month: `"28 de Junho à 02 de Julho"`
pub fn range_label(range: &DateRange) -> String {
    label_with(range, |day| day.month_name().to_string())
}

/// Same as [`range_label`] with every month token truncated to three
/// letters, for width-constrained contexts: `"16 à 19 de Jul"`.
pub fn range_label_short(range: &DateRange) -> String {
    label_with(range, short_month)
}

/// `"15 de Jul."` for a single date.
pub fn full_date_short_month(day: CalendarDay) -> String {
    format!("{:02} de {}.", day.day(), short_month(day))
}

/// One-line trip summary: destination truncated to 30 characters plus
/// the short-month range label.
pub fn trip_description(trip: &TripData) -> String {
    let destination: String = if trip.destination.chars().count() > MAX_DESCRIPTION_DESTINATION {
        let truncated: String = trip
            .destination
            .chars()
            .take(MAX_DESCRIPTION_DESTINATION)
            .collect();
        format!("{truncated}...")
    } else {
        trip.destination.clone()
    };

    let label = range_label_short(&trip.period());
    if label.is_empty() {
        destination
    } else {
        format!("{destination} de {label}.")
    }
}

fn label_with(range: &DateRange, month: impl Fn(CalendarDay) -> String) -> String {
    let Some(start) = range.start else {
        return String::new();
    };

    let Some(end) = range.end else {
        return format!("{:02} de {}...", start.day(), month(start));
    };

    if start.year() == end.year() && start.month() == end.month() {
        format!("{:02} à {:02} de {}", start.day(), end.day(), month(start))
    } else {
        format!(
            "{:02} de {} à {:02} de {}",
            start.day(),
            month(start),
            end.day(),
            month(end)
        )
    }
}

// Month names are already capitalized, so the first three letters keep
// the capital.
fn short_month(day: CalendarDay) -> String {
    day.month_name().chars().take(3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: &str, end: &str) -> DateRange {
        DateRange {
            start: Some(start.parse().unwrap()),
            end: Some(end.parse().unwrap()),
        }
    }

    #[test]
    fn test_label_empty_range() {
        assert_eq!(range_label(&DateRange::new()), "");
    }

    #[test]
    fn test_label_start_only_has_ellipsis() {
        let range = DateRange::new().select_day("2024-07-16".parse().unwrap());
        assert_eq!(range_label(&range), "16 de Julho...");
    }

    #[test]
    fn test_label_same_month() {
        assert_eq!(
            range_label(&range("2024-07-16", "2024-07-19")),
            "16 à 19 de Julho"
        );
    }

    #[test]
    fn test_label_cross_month_pads_days() {
        assert_eq!(
            range_label(&range("2024-06-28", "2024-07-02")),
            "28 de Junho à 02 de Julho"
        );
    }

    #[test]
    fn test_short_label_truncates_both_forms_uniformly() {
        assert_eq!(
            range_label_short(&range("2024-07-16", "2024-07-19")),
            "16 à 19 de Jul"
        );
        assert_eq!(
            range_label_short(&range("2024-06-28", "2024-07-02")),
            "28 de Jun à 02 de Jul"
        );
    }

    #[test]
    fn test_short_label_handles_accented_month() {
        assert_eq!(
            range_label_short(&range("2024-03-01", "2024-03-05")),
            "01 à 05 de Mar"
        );
    }

    #[test]
    fn test_full_date_short_month() {
        assert_eq!(
            full_date_short_month("2024-07-15".parse().unwrap()),
            "15 de Jul."
        );
    }

    fn make_trip(destination: &str) -> TripData {
        TripData {
            id: "t1".into(),
            destination: destination.into(),
            starts_at: "2024-07-16T00:00:00Z".into(),
            ends_at: "2024-07-19T00:00:00Z".into(),
            is_confirmed: true,
        }
    }

    #[test]
    fn test_description_appends_short_range() {
        assert_eq!(
            trip_description(&make_trip("Floripa")),
            "Floripa de 16 à 19 de Jul."
        );
    }

    #[test]
    fn test_description_truncates_long_destination() {
        let long = "Florianópolis, Santa Catarina, Brasil";
        let description = trip_description(&make_trip(long));
        assert!(description.starts_with("Florianópolis, Santa Catarina,..."));
    }
}
