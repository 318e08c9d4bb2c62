//! Conversions between canonical strings and what the forms show or submit.

use crate::calendar::parse_calendar_date;
use crate::month::resolve_month;
use crate::parts::{DateParts, combine};

const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Replaces a text month with its two-digit number and re-pads day and year.
///
/// A month that does not resolve (unknown or ambiguous) is kept as typed, and
/// input that is not three separated parts is returned unchanged.
///
/// ```
/// use form_date::normalize_month_input;
///
/// assert_eq!(normalize_month_input("2024-Jan-5"), "2024-01-05");
/// assert_eq!(normalize_month_input("2024-Ju-15"), "2024-Ju-15");
/// ```
pub fn normalize_month_input(s: &str) -> String {
    let parts = DateParts::parse(s);
    if parts.is_empty() {
        return s.to_owned();
    }

    let month = resolve_month(&parts.month).unwrap_or(parts.month.as_str());
    combine(&parts.year, month, &parts.day)
}

/// Returns the input when it is already a strict `YYYY-MM-DD` real date.
pub fn to_iso8601(s: &str) -> Option<String> {
    parse_calendar_date(s).ok().map(|_| s.to_owned())
}

/// Renders a date for people, e.g. `"Jul 30, 2011"`.
///
/// Text months are resolved first. Empty, malformed or impossible dates give
/// an empty string.
pub fn format_for_display(s: &str) -> String {
    if s.trim().is_empty() {
        return String::new();
    }

    parse_calendar_date(&normalize_month_input(s))
        .map(|date| date.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text_months() {
        assert_eq!(normalize_month_input("2024-Jan-15"), "2024-01-15");
        assert_eq!(normalize_month_input("2024-December-25"), "2024-12-25");
        assert_eq!(normalize_month_input("2024-jan-15"), "2024-01-15");
        assert_eq!(normalize_month_input("2024-DECEMBER-25"), "2024-12-25");
        assert_eq!(normalize_month_input("1977-july-30"), "1977-07-30");
    }

    #[test]
    fn test_normalize_numeric_months() {
        assert_eq!(normalize_month_input("2024-7-15"), "2024-07-15");
        assert_eq!(normalize_month_input("2024-12-25"), "2024-12-25");
        assert_eq!(normalize_month_input("2024-01-15"), "2024-01-15");
    }

    #[test]
    fn test_normalize_keeps_unresolved_months() {
        assert_eq!(normalize_month_input("2024-Ju-15"), "2024-Ju-15");
        assert_eq!(normalize_month_input("2024-Foo-15"), "2024-Foo-15");
        assert_eq!(normalize_month_input("2024-13-15"), "2024-13-15");
    }

    #[test]
    fn test_normalize_partial_and_empty() {
        assert_eq!(normalize_month_input(""), "");
        assert_eq!(normalize_month_input("0000-Jan-00"), "0000-01-00");
        assert_eq!(normalize_month_input("2024-Jan-5"), "2024-01-05");
        assert_eq!(normalize_month_input("invalid"), "invalid");
    }

    #[test]
    fn test_to_iso8601() {
        assert_eq!(to_iso8601("1986-07-30").as_deref(), Some("1986-07-30"));
        assert_eq!(to_iso8601("2024-02-29").as_deref(), Some("2024-02-29"));
        assert_eq!(to_iso8601("2024-01-31").as_deref(), Some("2024-01-31"));

        for input in [
            "", "   ", "invalid", "07-30-1986", "1986/07/30", "1986-7-30", "1986-07-3", "86-07-30",
            "2024-02-30", "2024-02-31", "2024-04-31", "2024-13-01", "2024-00-15", "2024-01-00",
            "9999-99-99", "2023-02-29", "0000-01-15", "0050-06-01",
        ] {
            assert_eq!(to_iso8601(input), None, "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_format_for_display_numeric_months() {
        struct TestCase {
            input:    &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase { input: "2011-07-30", expected: "Jul 30, 2011" },
            TestCase { input: "2020-01-15", expected: "Jan 15, 2020" },
            TestCase { input: "2019-02-28", expected: "Feb 28, 2019" },
            TestCase { input: "2018-03-10", expected: "Mar 10, 2018" },
            TestCase { input: "2017-04-05", expected: "Apr 5, 2017" },
            TestCase { input: "2016-05-25", expected: "May 25, 2016" },
            TestCase { input: "2015-06-30", expected: "Jun 30, 2015" },
            TestCase { input: "2014-07-04", expected: "Jul 4, 2014" },
            TestCase { input: "2013-08-15", expected: "Aug 15, 2013" },
            TestCase { input: "2012-09-11", expected: "Sep 11, 2012" },
            TestCase { input: "2011-10-31", expected: "Oct 31, 2011" },
            TestCase { input: "2010-11-20", expected: "Nov 20, 2010" },
            TestCase { input: "2009-12-25", expected: "Dec 25, 2009" },
            TestCase { input: "2020-02-29", expected: "Feb 29, 2020" },
            TestCase { input: "2000-01-01", expected: "Jan 1, 2000" },
            TestCase { input: "1999-12-31", expected: "Dec 31, 1999" },
        ];

        for case in &cases {
            assert_eq!(format_for_display(case.input), case.expected, "{}", case.input);
        }
    }

    #[test]
    fn test_format_for_display_text_months() {
        assert_eq!(format_for_display("2001-Sep-11"), "Sep 11, 2001");
        assert_eq!(format_for_display("2001-September-11"), "Sep 11, 2001");
        assert_eq!(format_for_display("2020-jan-15"), "Jan 15, 2020");
        assert_eq!(format_for_display("2018-MARCH-10"), "Mar 10, 2018");
        assert_eq!(format_for_display("2020-Jan-1"), "Jan 1, 2020");
        assert_eq!(format_for_display("1977-july-30"), "Jul 30, 1977");
    }

    #[test]
    fn test_format_for_display_invalid() {
        for input in [
            "", "   ", "07302011", "07-30-2011", "2011-30-15", "2011-13-01", "2011-00-15",
            "2011-01-32", "2011-01-00", "not a date", "07/30", "2011-02-30", "2011-02-31",
            "2019-02-29", "2011-04-31", "2011-06-31", "2011-09-31", "2011-11-31", "2011-ju-01",
            "0000-01-15", "0000-jan-15", "0000-00-00",
        ] {
            assert_eq!(format_for_display(input), "", "{input:?} should not format");
        }
    }
}
