//! Calendar features and the special-date registry.
//!
//! Dates are handled at day granularity. Weekdays follow the fixed
//! convention 0 = Monday through 6 = Sunday, and weekday names are the
//! English names used in the historical dataset's `day` column.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};

use super::error::DomainError;

/// Date-only formats accepted by [`parse_date`], tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y%m%d",
    "%m/%d/%Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%b %d, %Y",
    "%b %d %Y",
];

/// Date-time formats whose time component is discarded.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const DEFAULT_VEG_SPECIAL: [(i32, u32, u32); 20] = [
    (2024, 1, 14),
    (2024, 1, 26),
    (2024, 2, 14),
    (2024, 3, 8),
    (2024, 3, 25),
    (2024, 4, 14),
    (2024, 5, 1),
    (2024, 6, 21),
    (2024, 7, 10),
    (2024, 8, 15),
    (2024, 8, 28),
    (2024, 9, 2),
    (2024, 9, 17),
    (2024, 10, 2),
    (2024, 10, 24),
    (2024, 11, 1),
    (2024, 11, 12),
    (2024, 11, 15),
    (2024, 12, 25),
    (2024, 12, 31),
];

const DEFAULT_NONVEG_SPECIAL: [(i32, u32, u32); 10] = [
    (2024, 1, 10),
    (2024, 2, 20),
    (2024, 3, 11),
    (2024, 4, 10),
    (2024, 5, 18),
    (2024, 6, 16),
    (2024, 7, 14),
    (2024, 8, 12),
    (2024, 9, 20),
    (2024, 11, 20),
];

/// Parse a calendar date from free-form input.
///
/// Accepts ISO dates, a handful of common numeric and long-form layouts, and
/// timestamps (RFC 3339 or `YYYY-MM-DD HH:MM[:SS]`). Any time component is
/// dropped.
///
/// # Errors
///
/// Returns [`DomainError::InvalidDate`] when no known layout matches.
pub fn parse_date(input: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = input.trim();
    let invalid = || DomainError::InvalidDate {
        input: input.to_string(),
    };
    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
    {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|timestamp| timestamp.date())
        .ok_or_else(invalid)
}

/// Day of week with Monday = 0 and Sunday = 6.
#[must_use]
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// English weekday name, as written in the dataset's `day` column.
#[must_use]
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Special-day membership for a single date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecialFlags {
    pub veg: bool,
    pub nonveg: bool,
}

impl SpecialFlags {
    /// True when either flag is set.
    #[must_use]
    pub const fn any(self) -> bool {
        self.veg || self.nonveg
    }
}

/// The two fixed sets of demand-boosting dates.
///
/// The sets are not required to be disjoint; a date may be flagged as both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialDates {
    veg: BTreeSet<NaiveDate>,
    nonveg: BTreeSet<NaiveDate>,
}

impl SpecialDates {
    /// Create a registry from explicit date sets.
    pub fn new(
        veg: impl IntoIterator<Item = NaiveDate>,
        nonveg: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        Self {
            veg: veg.into_iter().collect(),
            nonveg: nonveg.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn is_veg_special(&self, date: NaiveDate) -> bool {
        self.veg.contains(&date)
    }

    #[must_use]
    pub fn is_nonveg_special(&self, date: NaiveDate) -> bool {
        self.nonveg.contains(&date)
    }

    #[must_use]
    pub fn is_special(&self, date: NaiveDate) -> bool {
        self.flags(date).any()
    }

    /// Both membership checks at once.
    #[must_use]
    pub fn flags(&self, date: NaiveDate) -> SpecialFlags {
        SpecialFlags {
            veg: self.is_veg_special(date),
            nonveg: self.is_nonveg_special(date),
        }
    }

    pub fn veg_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.veg.iter().copied()
    }

    pub fn nonveg_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.nonveg.iter().copied()
    }
}

impl Default for SpecialDates {
    fn default() -> Self {
        let to_dates = |dates: &[(i32, u32, u32)]| {
            dates
                .iter()
                .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
                .collect::<Vec<_>>()
        };
        Self::new(
            to_dates(&DEFAULT_VEG_SPECIAL),
            to_dates(&DEFAULT_NONVEG_SPECIAL),
        )
    }
}

/// Calendar-derived predictors for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFeatures {
    pub date: NaiveDate,
    pub day_of_week: u32,
    pub special: SpecialFlags,
}

impl CalendarFeatures {
    /// Derive the calendar features of `date` against a special-date registry.
    #[must_use]
    pub fn for_date(date: NaiveDate, special_dates: &SpecialDates) -> Self {
        Self {
            date,
            day_of_week: day_of_week(date),
            special: special_dates.flags(date),
        }
    }

    #[must_use]
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_and_common_layouts() {
        let expected = ymd(2024, 12, 25);
        for input in [
            "2024-12-25",
            " 2024-12-25 ",
            "2024/12/25",
            "12/25/2024",
            "December 25, 2024",
            "25 December 2024",
            "Dec 25, 2024",
            "2024-12-25T18:30:00",
            "2024-12-25 18:30",
            "2024-12-25T18:30:00+05:30",
        ] {
            assert_eq!(parse_date(input), Ok(expected), "input {input:?}");
        }
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        for input in ["not-a-date", "", "   ", "2024-02-30", "2024-13-01"] {
            assert!(
                matches!(parse_date(input), Err(DomainError::InvalidDate { .. })),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn day_of_week_starts_on_monday() {
        assert_eq!(day_of_week(ymd(2024, 12, 23)), 0);
        assert_eq!(day_of_week(ymd(2024, 12, 25)), 2);
        assert_eq!(day_of_week(ymd(2024, 12, 29)), 6);
        assert_eq!(weekday_name(ymd(2024, 12, 25)), "Wednesday");
    }

    #[test]
    fn default_registry_flags_known_dates() {
        let registry = SpecialDates::default();
        assert!(registry.is_veg_special(ymd(2024, 12, 25)));
        assert!(!registry.is_nonveg_special(ymd(2024, 12, 25)));
        assert!(registry.is_nonveg_special(ymd(2024, 11, 20)));
        assert!(!registry.is_special(ymd(2024, 12, 24)));
        assert_eq!(registry.veg_dates().count(), 20);
        assert_eq!(registry.nonveg_dates().count(), 10);
    }

    #[test]
    fn overlapping_sets_report_both_flags() {
        let day = ymd(2025, 1, 1);
        let registry = SpecialDates::new([day], [day]);
        let flags = registry.flags(day);
        assert!(flags.veg && flags.nonveg);
        assert!(flags.any());
    }

    #[test]
    fn calendar_features_for_special_date() {
        let features = CalendarFeatures::for_date(ymd(2024, 12, 25), &SpecialDates::default());
        assert_eq!(features.day_of_week, 2);
        assert!(features.special.veg);
        assert!(!features.special.nonveg);
        assert_eq!(features.weekday_name(), "Wednesday");
    }
}
