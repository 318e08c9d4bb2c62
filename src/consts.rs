/// Date component separator in the canonical `YEAR-MONTH-DAY` string
pub const DATE_SEPARATOR: char = '-';

/// Width of a fully typed year
pub const YEAR_WIDTH: usize = 4;
/// Width of a padded month or day
pub const MONTH_DAY_WIDTH: usize = 2;

/// Day placeholder meaning "not entered yet"
pub const DAY_SENTINEL: &str = "00";
/// Month placeholder meaning "not entered yet"
pub const MONTH_SENTINEL: &str = "00";
/// Year placeholder meaning "not entered yet"
pub const YEAR_SENTINEL: &str = "0000";

/// Earliest year accepted by default for dates of birth
pub const MIN_YEAR: i32 = 1900;
/// Earliest year a calendar date may carry. Years below it, including the
/// `"0000"` placeholder, never name a real date.
pub const MIN_CALENDAR_YEAR: i32 = 100;

/// Month number for January
pub const MIN_MONTH: u32 = 1;
/// Month number for December
pub const MAX_MONTH: u32 = 12;

/// First day of any month
pub const MIN_DAY: u32 = 1;
/// Largest day of any month, before the month-specific check
pub const MAX_DAY: u32 = 31;

/// Full month names in calendar order, lowercase.
/// Prefix lookups run against this table.
pub static MONTH_NAMES: [(&str, &str); 12] = [
    ("january", "01"),
    ("february", "02"),
    ("march", "03"),
    ("april", "04"),
    ("may", "05"),
    ("june", "06"),
    ("july", "07"),
    ("august", "08"),
    ("september", "09"),
    ("october", "10"),
    ("november", "11"),
    ("december", "12"),
];
