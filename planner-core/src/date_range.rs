//! Date range selection for the trip calendar picker.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calendar_day::CalendarDay;

/// The date range being assembled from single-day taps.
///
/// Invariants: `end` is never set while `start` is unset, and when both
/// are set `start <= end`. Every tap replaces the pair wholesale via
/// [`DateRange::select_day`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<CalendarDay>,
    pub end: Option<CalendarDay>,
}

/// Rendering tag for a day inside a selected range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMark {
    Start,
    Middle,
    End,
    Single,
}

impl DateRange {
    pub fn new() -> Self {
        DateRange::default()
    }

    /// Range collapsed onto one day, for single-date pickers
    /// (activity dates). Only the start-only branch of the selector
    /// is exercised there; `end` is forced equal to `start`.
    pub fn single(day: CalendarDay) -> Self {
        DateRange {
            start: Some(day),
            end: Some(day),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// Both endpoints are set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Fold one tap into the selection.
    ///
    /// - no selection yet: the tap starts one
    /// - a complete range exists: the tap discards it and starts over
    /// - only `start` set: the tap completes the range, swapping
    ///   endpoints when it lands before `start`
    ///
    /// Out-of-bound days are the caller's responsibility to filter;
    /// this never fails.
    pub fn select_day(self, tapped: CalendarDay) -> DateRange {
        let start = match self.start {
            Some(start) if self.end.is_none() => start,
            _ => {
                return DateRange {
                    start: Some(tapped),
                    end: None,
                };
            }
        };

        if tapped >= start {
            DateRange {
                start: Some(start),
                end: Some(tapped),
            }
        } else {
            DateRange {
                start: Some(tapped),
                end: Some(start),
            }
        }
    }

    /// Every day of the range, inclusive. Empty unless complete.
    pub fn days(&self) -> Vec<CalendarDay> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start
                .date()
                .iter_days()
                .take_while(|d| *d <= end.date())
                .map(CalendarDay::new)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Projection for the calendar widget, keyed by ISO date string.
    ///
    /// Empty range yields no marks; a lone `start` (or a collapsed
    /// range) yields a single mark; otherwise the endpoints are tagged
    /// and every day strictly between is `Middle`.
    pub fn marks(&self) -> BTreeMap<String, DayMark> {
        let mut marks = BTreeMap::new();

        let Some(start) = self.start else {
            return marks;
        };

        match self.end {
            None => {
                marks.insert(start.iso(), DayMark::Single);
            }
            Some(end) if end == start => {
                marks.insert(start.iso(), DayMark::Single);
            }
            Some(end) => {
                for day in self.days() {
                    let mark = if day == start {
                        DayMark::Start
                    } else if day == end {
                        DayMark::End
                    } else {
                        DayMark::Middle
                    };
                    marks.insert(day.iso(), mark);
                }
            }
        }

        marks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> CalendarDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_first_tap_starts_selection() {
        let range = DateRange::new().select_day(day("2024-07-16"));
        assert_eq!(range.start, Some(day("2024-07-16")));
        assert_eq!(range.end, None);
    }

    #[test]
    fn test_second_tap_completes_range() {
        let range = DateRange::new()
            .select_day(day("2024-07-16"))
            .select_day(day("2024-07-19"));
        assert_eq!(range.start, Some(day("2024-07-16")));
        assert_eq!(range.end, Some(day("2024-07-19")));
    }

    #[test]
    fn test_earlier_tap_swaps_endpoints() {
        let range = DateRange::new()
            .select_day(day("2024-07-19"))
            .select_day(day("2024-07-16"));
        assert_eq!(range.start, Some(day("2024-07-16")));
        assert_eq!(range.end, Some(day("2024-07-19")));
    }

    #[test]
    fn test_tap_after_complete_range_starts_over() {
        let complete = DateRange::new()
            .select_day(day("2024-07-16"))
            .select_day(day("2024-07-19"));

        // Regardless of where the third tap lands relative to the
        // existing endpoints.
        for tapped in ["2024-07-01", "2024-07-17", "2024-08-02"] {
            let range = complete.select_day(day(tapped));
            assert_eq!(range.start, Some(day(tapped)));
            assert_eq!(range.end, None);
        }
    }

    #[test]
    fn test_same_day_collapses_to_single_day_range() {
        let range = DateRange::new()
            .select_day(day("2024-07-16"))
            .select_day(day("2024-07-16"));
        assert_eq!(range.start, range.end);
        assert!(range.is_complete());
    }

    #[test]
    fn test_start_never_after_end() {
        let taps = ["2024-07-19", "2024-07-01", "2024-06-28", "2024-07-16"];
        let mut range = DateRange::new();
        for tap in taps {
            range = range.select_day(day(tap));
            if let (Some(start), Some(end)) = (range.start, range.end) {
                assert!(start <= end);
            }
        }
    }

    #[test]
    fn test_single_mode_forces_equal_endpoints() {
        let range = DateRange::single(day("2024-07-16"));
        assert_eq!(range.start, range.end);
    }

    #[test]
    fn test_marks_empty_range() {
        assert!(DateRange::new().marks().is_empty());
    }

    #[test]
    fn test_marks_incomplete_range_is_single() {
        let range = DateRange::new().select_day(day("2024-07-16"));
        let marks = range.marks();
        assert_eq!(marks.len(), 1);
        assert_eq!(marks.get("2024-07-16"), Some(&DayMark::Single));
    }

    #[test]
    fn test_marks_tag_endpoints_and_middle_days() {
        let range = DateRange::new()
            .select_day(day("2024-07-16"))
            .select_day(day("2024-07-19"));
        let marks = range.marks();
        assert_eq!(marks.get("2024-07-16"), Some(&DayMark::Start));
        assert_eq!(marks.get("2024-07-17"), Some(&DayMark::Middle));
        assert_eq!(marks.get("2024-07-18"), Some(&DayMark::Middle));
        assert_eq!(marks.get("2024-07-19"), Some(&DayMark::End));
        assert_eq!(marks.len(), 4);
    }

    #[test]
    fn test_marks_cross_month_enumeration() {
        let range = DateRange::new()
            .select_day(day("2024-06-28"))
            .select_day(day("2024-07-02"));
        let marks = range.marks();
        assert_eq!(marks.len(), 5);
        assert_eq!(marks.get("2024-06-30"), Some(&DayMark::Middle));
        assert_eq!(marks.get("2024-07-01"), Some(&DayMark::Middle));
    }
}
