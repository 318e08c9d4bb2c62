use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DATE_SEPARATOR, DAY_SENTINEL, MONTH_DAY_WIDTH, MONTH_SENTINEL, YEAR_SENTINEL, YEAR_WIDTH,
};
use crate::month::is_numeric;
use crate::prelude::*;

/// One of the three inputs of a date field
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

impl Field {
    /// All fields, in the order they are reported
    pub const ALL: [Self; 3] = [Self::Day, Self::Month, Self::Year];

    /// Placeholder written by [`combine`] when the field was left blank
    pub const fn sentinel(self) -> &'static str {
        match self {
            Self::Day => DAY_SENTINEL,
            Self::Month => MONTH_SENTINEL,
            Self::Year => YEAR_SENTINEL,
        }
    }
}

/// Day, month and year exactly as typed, each possibly empty.
///
/// No validation happens here, so a value can be built on every keystroke.
/// The month may still be a text token such as `"jul"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateParts {
    pub day:   String,
    pub month: String,
    pub year:  String,
}

impl DateParts {
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            day:   day.into(),
            month: month.into(),
            year:  year.into(),
        }
    }

    /// Splits a canonical `YEAR-MONTH-DAY` string positionally.
    ///
    /// Blank input, or input that does not split into exactly three parts,
    /// gives empty components rather than an error.
    pub fn parse(s: &str) -> Self {
        if s.trim().is_empty() {
            return Self::default();
        }

        let mut parts = s.split(DATE_SEPARATOR);
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(year), Some(month), Some(day), None) => Self::new(year, month, day),
            _ => Self::default(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Day => &self.day,
            Field::Month => &self.month,
            Field::Year => &self.year,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Day => &mut self.day,
            Field::Month => &mut self.month,
            Field::Year => &mut self.year,
        }
    }

    /// True when all three components are empty
    pub fn is_empty(&self) -> bool {
        self.day.is_empty() && self.month.is_empty() && self.year.is_empty()
    }

    /// True when the field is blank or still holds its zero placeholder
    pub fn is_missing(&self, field: Field) -> bool {
        let value = self.get(field);
        value.is_empty() || value == field.sentinel()
    }

    /// Canonical string for these components, see [`combine`]
    pub fn combine(&self) -> String {
        combine(&self.year, &self.month, &self.day)
    }

    /// Replaces one field with the sanitized keystroke value and returns the
    /// re-combined canonical string.
    pub fn edit(&self, field: Field, raw: &str) -> String {
        let mut updated = self.clone();
        *updated.get_mut(field) = sanitize_field(field, raw);
        updated.combine()
    }

    /// Value to show in the input box for `field`.
    ///
    /// Placeholders show as blank and numbers lose their padding, so that
    /// "03" displays as "3" and the user can keep typing "30".
    pub fn display_value(&self, field: Field) -> String {
        if self.is_missing(field) {
            return String::new();
        }

        let value = self.get(field);
        if !is_numeric(value) {
            return value.to_owned();
        }

        match value.trim_start_matches('0') {
            "" => "0".to_owned(),
            trimmed => trimmed.to_owned(),
        }
    }
}

impl FromStr for DateParts {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.combine())
    }
}

/// Splits a canonical string into its components, see [`DateParts::parse`]
pub fn parse(s: &str) -> DateParts {
    DateParts::parse(s)
}

/// Joins components into a canonical `YEAR-MONTH-DAY` string.
///
/// Returns an empty string only when all three inputs are empty. Blank
/// components become their zero placeholder, numbers are zero-padded, and a
/// text month is kept verbatim so it can be resolved later.
pub fn combine(year: &str, month: &str, day: &str) -> String {
    if year.is_empty() && month.is_empty() && day.is_empty() {
        return String::new();
    }

    let year = pad(year, YEAR_WIDTH, YEAR_SENTINEL);
    let day = pad(day, MONTH_DAY_WIDTH, DAY_SENTINEL);
    let month = if month.is_empty() || is_numeric(month) {
        pad(month, MONTH_DAY_WIDTH, MONTH_SENTINEL)
    } else {
        month.to_owned()
    };

    format!("{year}{DATE_SEPARATOR}{month}{DATE_SEPARATOR}{day}")
}

fn pad(value: &str, width: usize, sentinel: &str) -> String {
    if value.is_empty() {
        sentinel.to_owned()
    } else {
        format!("{value:0>width$}")
    }
}

/// Strips characters a field cannot hold: digits only for day and year,
/// ASCII letters and digits for the month.
pub fn sanitize_field(field: Field, raw: &str) -> String {
    match field {
        Field::Day | Field::Year => raw.chars().filter(char::is_ascii_digit).collect(),
        Field::Month => raw.chars().filter(char::is_ascii_alphanumeric).collect(),
    }
}
