use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    MAX_DAY, MAX_MONTH, MIN_CALENDAR_YEAR, MIN_DAY, MIN_MONTH, MIN_YEAR, MONTH_DAY_WIDTH, YEAR_WIDTH,
};
use crate::format::normalize_month_input;
use crate::month::is_numeric;
use crate::parts::DateParts;

/// Why a canonical string is not a real calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Not `YYYY-MM-DD` with every part numeric.
    #[error("Invalid date format: {0:?} (expected YYYY-MM-DD)")]
    InvalidFormat(String),

    #[error("Invalid year: {0} (must be 100 or later)")]
    YearOutOfRange(i32),

    #[error("Invalid month: {0} (must be 1-12)")]
    MonthOutOfRange(u32),

    #[error("Invalid day: {0} (must be 1-31)")]
    DayOutOfRange(u32),

    /// Each part is in range but the day does not exist in that month.
    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    NoSuchDate { year: i32, month: u32, day: u32 },
}

/// Year limits for an adult's date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthDateBounds {
    pub min_year: i32,
    /// `None` means the current year.
    pub max_year: Option<i32>,
}

impl Default for BirthDateBounds {
    fn default() -> Self {
        Self {
            min_year: MIN_YEAR,
            max_year: None,
        }
    }
}

/// Today's date in UTC, the reference for every "not in the future" check
/// that is not given an explicit date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parses a strict, fully numeric `YYYY-MM-DD` string into a calendar date.
///
/// Text months are rejected; normalize them first with
/// [`normalize_month_input`]. Day overflow (February 30, April 31) and
/// February 29 outside leap years are reported as [`CalendarError::NoSuchDate`].
///
/// # Errors
/// Returns a [`CalendarError`] describing the first problem found.
pub fn parse_calendar_date(s: &str) -> Result<NaiveDate, CalendarError> {
    let parts = DateParts::parse(s);
    let well_formed = parts.year.len() == YEAR_WIDTH
        && parts.month.len() == MONTH_DAY_WIDTH
        && parts.day.len() == MONTH_DAY_WIDTH
        && [&parts.year, &parts.month, &parts.day]
            .into_iter()
            .all(|part| is_numeric(part));
    if !well_formed {
        return Err(CalendarError::InvalidFormat(s.to_owned()));
    }

    let invalid = |_| CalendarError::InvalidFormat(s.to_owned());
    let year = parts.year.parse::<i32>().map_err(invalid)?;
    let month = parts.month.parse::<u32>().map_err(invalid)?;
    let day = parts.day.parse::<u32>().map_err(invalid)?;

    if year < MIN_CALENDAR_YEAR {
        return Err(CalendarError::YearOutOfRange(year));
    }
    if !(MIN_MONTH..=MAX_MONTH).contains(&month) {
        return Err(CalendarError::MonthOutOfRange(month));
    }
    if !(MIN_DAY..=MAX_DAY).contains(&day) {
        return Err(CalendarError::DayOutOfRange(day));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::NoSuchDate { year, month, day })
}

/// True when `s` is a strict `YYYY-MM-DD` string naming a real date
pub fn is_semantically_valid(s: &str) -> bool {
    parse_calendar_date(s).is_ok()
}

/// Date-of-birth check for an adult applicant, against the real clock and
/// the default bounds (1900 to the current year).
pub fn is_valid_birth_date(s: &str) -> bool {
    is_valid_birth_date_on(s, today(), BirthDateBounds::default())
}

/// Date-of-birth check: a real date, inside `bounds`, and not after `today`.
pub fn is_valid_birth_date_on(s: &str, today: NaiveDate, bounds: BirthDateBounds) -> bool {
    let Ok(date) = parse_calendar_date(s) else {
        return false;
    };

    let max_year = bounds.max_year.unwrap_or_else(|| today.year());
    (bounds.min_year..=max_year).contains(&date.year()) && date <= today
}

/// Date-of-birth check for a dependent, against the real clock.
pub fn is_valid_child_birth_date(s: &str) -> bool {
    is_valid_child_birth_date_on(s, today())
}

/// Date-of-birth check for a dependent: a real date from 1900 up to `today`.
pub fn is_valid_child_birth_date_on(s: &str, today: NaiveDate) -> bool {
    parse_calendar_date(s).is_ok_and(|date| date <= today && date.year() >= MIN_YEAR)
}

/// Whole years from the date in `s` until today.
pub fn calculate_age(s: &str) -> u32 {
    calculate_age_on(s, today())
}

/// Whole years from the date in `s` until `today`.
///
/// Text months are accepted. Invalid and future dates give `0`.
pub fn calculate_age_on(s: &str, today: NaiveDate) -> u32 {
    parse_calendar_date(&normalize_month_input(s))
        .ok()
        .and_then(|birth| today.years_since(birth))
        .unwrap_or(0)
}
