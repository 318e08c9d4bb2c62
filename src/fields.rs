use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

use crate::calendar::{parse_calendar_date, today};
use crate::consts::{
    DAY_SENTINEL, MAX_DAY, MIN_CALENDAR_YEAR, MIN_DAY, MIN_YEAR, MONTH_DAY_WIDTH, YEAR_WIDTH,
};
use crate::month::{is_numeric, resolve_month, resolve_month_number};
use crate::parts::{DateParts, Field, combine};

/// A message shown next to one input of a date field.
///
/// `Display` gives the exact text rendered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    #[error("Enter a day")]
    MissingDay,
    #[error("Enter a month")]
    MissingMonth,
    #[error("Enter a year")]
    MissingYear,
    #[error("Year must be 4 digits")]
    YearNotFourDigits,
    #[error("Year must be {min_year} or later")]
    YearTooEarly { min_year: i32 },
    #[error("Month must be between 1 and 12")]
    MonthOutOfRange,
    #[error("Day must be between 1 and 31")]
    DayOutOfRange,
    /// Text month that is unknown or matches more than one month
    #[error("Enter a valid month")]
    UnknownMonth,
    #[error("Enter a valid day for this month")]
    DayNotInMonth,
    #[error("Date cannot be in the future")]
    InFuture,
}

impl FieldError {
    pub const fn missing(field: Field) -> Self {
        match field {
            Field::Day => Self::MissingDay,
            Field::Month => Self::MissingMonth,
            Field::Year => Self::MissingYear,
        }
    }
}

impl Serialize for FieldError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// At most one error per input. The first one recorded for a field wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day:   Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year:  Option<FieldError>,
}

impl FieldErrors {
    pub const fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Day => self.day,
            Field::Month => self.month,
            Field::Year => self.year,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<FieldError> {
        match field {
            Field::Day => &mut self.day,
            Field::Month => &mut self.month,
            Field::Year => &mut self.year,
        }
    }

    /// Records `error` unless `field` already has one
    pub fn record(&mut self, field: Field, error: FieldError) {
        self.slot_mut(field).get_or_insert(error);
    }

    pub const fn is_empty(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none()
    }

    /// Flagged fields in day, month, year order
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|error| (field, error)))
    }

    /// Distinct messages in field order, for a single summary above the inputs
    pub fn messages(&self) -> Vec<String> {
        let mut messages: Vec<String> = Vec::new();
        for (_, error) in self.iter() {
            let message = error.to_string();
            if !messages.contains(&message) {
                messages.push(message);
            }
        }
        messages
    }
}

/// Rules for [`validate_fields_with_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Earliest accepted year
    pub min_year:     i32,
    /// Accept dates after today
    pub allow_future: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_year:     MIN_YEAR,
            allow_future: false,
        }
    }
}

/// Checks a canonical date string against the real clock and default rules.
///
/// Returns `None` when the date is complete, real, and not in the future.
///
/// ```
/// use form_date::{validate_fields, FieldError};
///
/// assert_eq!(validate_fields("1977-july-30"), None);
///
/// let errors = validate_fields("2011-ju-01").unwrap();
/// assert_eq!(errors.month, Some(FieldError::UnknownMonth));
/// ```
pub fn validate_fields(s: &str) -> Option<FieldErrors> {
    validate_fields_on(s, today())
}

/// Checks a canonical date string with `today` as the reference date.
pub fn validate_fields_on(s: &str, today: NaiveDate) -> Option<FieldErrors> {
    validate_fields_with_config(s, today, &ValidationConfig::default())
}

/// Checks a canonical date string and reports problems per input.
///
/// The checks run in stages and stop at the first stage that finds anything:
/// blank inputs, then digit counts and ranges, then text month resolution,
/// then whether the day exists in that month, and finally the future-date
/// rule, which is reported on the year.
pub fn validate_fields_with_config(
    s: &str,
    today: NaiveDate,
    config: &ValidationConfig,
) -> Option<FieldErrors> {
    let parts = DateParts::parse(s);
    let mut errors = FieldErrors::default();

    for field in Field::ALL {
        if parts.is_missing(field) {
            errors.record(field, FieldError::missing(field));
        }
    }
    if !errors.is_empty() {
        return reject(s, "presence", errors);
    }

    let checked = (
        check_year(&parts.year, config.min_year),
        check_month_range(&parts.month),
        check_day(&parts.day),
    );
    let (year, day) = match checked {
        (Ok(year), Ok(()), Ok(day)) => (year, day),
        (year, month, day) => {
            let found = [
                (Field::Day, day.err()),
                (Field::Month, month.err()),
                (Field::Year, year.err()),
            ];
            for (field, error) in found {
                if let Some(error) = error {
                    errors.record(field, error);
                }
            }
            return reject(s, "range", errors);
        }
    };

    let Some(month) = resolve_month_number(&parts.month) else {
        errors.record(Field::Month, FieldError::UnknownMonth);
        return reject(s, "month", errors);
    };

    debug_assert_ne!(parts.day, DAY_SENTINEL, "zero day passed the presence check");
    let canonical = combine(&year.to_string(), &month.to_string(), &day.to_string());
    let Ok(date) = parse_calendar_date(&canonical) else {
        errors.record(Field::Day, FieldError::DayNotInMonth);
        return reject(s, "calendar", errors);
    };

    if !config.allow_future && date > today {
        errors.record(Field::Year, FieldError::InFuture);
        return reject(s, "future", errors);
    }

    None
}

fn reject(input: &str, stage: &'static str, errors: FieldErrors) -> Option<FieldErrors> {
    debug!(input, stage, ?errors, "date field rejected");
    Some(errors)
}

fn check_year(year: &str, min_year: i32) -> Result<i32, FieldError> {
    if year.len() != YEAR_WIDTH || !is_numeric(year) {
        return Err(FieldError::YearNotFourDigits);
    }
    let value = year
        .parse::<i32>()
        .map_err(|_| FieldError::YearNotFourDigits)?;
    let min_year = min_year.max(MIN_CALENDAR_YEAR);
    if value < min_year {
        return Err(FieldError::YearTooEarly { min_year });
    }
    Ok(value)
}

/// Only numeric months are range-checked here; text is resolved later.
/// Like the day, a numeric month is at most two digits.
fn check_month_range(month: &str) -> Result<(), FieldError> {
    if is_numeric(month) && (month.len() > MONTH_DAY_WIDTH || resolve_month(month).is_none()) {
        return Err(FieldError::MonthOutOfRange);
    }
    Ok(())
}

fn check_day(day: &str) -> Result<u32, FieldError> {
    if day.len() > MONTH_DAY_WIDTH || !is_numeric(day) {
        return Err(FieldError::DayOutOfRange);
    }
    day.parse::<u32>()
        .ok()
        .filter(|value| (MIN_DAY..=MAX_DAY).contains(value))
        .ok_or(FieldError::DayOutOfRange)
}
