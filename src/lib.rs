//! Parsing, normalization and validation for date fields entered as three
//! separate inputs (day, month, year).
//!
//! Values travel between the inputs and the checks as a canonical
//! `YEAR-MONTH-DAY` string. While the user is typing the string may be
//! partial (`"2024-00-15"`) or carry a text month (`"1977-july-30"`);
//! [`parse`] and [`combine`] accept both without complaint, and
//! [`validate_fields`] turns the finished value into per-input messages.
//!
//! ```
//! use form_date::{combine, format_for_display, validate_fields};
//!
//! let value = combine("1977", "july", "30");
//! assert_eq!(value, "1977-july-30");
//! assert_eq!(validate_fields(&value), None);
//! assert_eq!(format_for_display(&value), "Jul 30, 1977");
//! ```

mod calendar;
mod consts;
mod fields;
mod format;
mod month;
mod parts;
mod prelude;

pub use calendar::{
    BirthDateBounds, CalendarError, calculate_age, calculate_age_on, is_semantically_valid,
    is_valid_birth_date, is_valid_birth_date_on, is_valid_child_birth_date,
    is_valid_child_birth_date_on, parse_calendar_date, today,
};
pub use consts::*;
pub use fields::{
    FieldError, FieldErrors, ValidationConfig, validate_fields, validate_fields_on,
    validate_fields_with_config,
};
pub use format::{format_for_display, normalize_month_input, to_iso8601};
pub use month::{resolve_month, resolve_month_number};
pub use parts::{DateParts, Field, combine, parse, sanitize_field};
