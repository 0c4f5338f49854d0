//! Special-date configuration.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::calendar::SpecialDates;
use crate::error::{ConfigError, Error, Result};

/// Special-day sets as ISO `YYYY-MM-DD` strings.
///
/// Either list may be omitted, in which case the built-in 2024 dates for that
/// list are used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub veg_special: Option<Vec<String>>,
    #[serde(default)]
    pub nonveg_special: Option<Vec<String>>,
}

impl CalendarConfig {
    /// Build the special-date registry.
    ///
    /// # Errors
    ///
    /// Returns a config error naming the first date that is not ISO formatted.
    pub fn special_dates(&self) -> Result<SpecialDates> {
        let defaults = SpecialDates::default();
        let veg = match &self.veg_special {
            Some(dates) => parse_all("calendar.veg_special", dates)?,
            None => defaults.veg_dates().collect(),
        };
        let nonveg = match &self.nonveg_special {
            Some(dates) => parse_all("calendar.nonveg_special", dates)?,
            None => defaults.nonveg_dates().collect(),
        };
        Ok(SpecialDates::new(veg, nonveg))
    }
}

fn parse_all(field: &'static str, dates: &[String]) -> Result<Vec<NaiveDate>> {
    dates
        .iter()
        .map(|raw| {
            NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
                Error::from(ConfigError::InvalidValue {
                    field,
                    reason: format!("'{raw}' is not a YYYY-MM-DD date: {e}"),
                })
            })
        })
        .collect()
}
