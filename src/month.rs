use tracing::trace;

use crate::consts::{MAX_MONTH, MIN_MONTH, MONTH_NAMES};

/// True for a non-empty run of ASCII digits
pub(crate) fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Resolves a month token to its two-digit form ("01".."12").
///
/// Digits are range-checked and zero-padded. Anything else is treated as a
/// case-insensitive prefix of a month name and resolves only when exactly one
/// month starts with it, so `"s"` is September but `"ju"` is refused.
///
/// Returns `None` for empty, out-of-range, unknown, or ambiguous tokens.
pub fn resolve_month(token: &str) -> Option<&'static str> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }

    if is_numeric(trimmed) {
        // Overflowing digit runs fail the parse and are out of range anyway
        let number = trimmed.parse::<u32>().ok()?;
        if !(MIN_MONTH..=MAX_MONTH).contains(&number) {
            trace!(token = trimmed, "numeric month out of range");
            return None;
        }
        let index = usize::try_from(number - MIN_MONTH).ok()?;
        return MONTH_NAMES.get(index).map(|&(_, padded)| padded);
    }

    let lower = trimmed.to_lowercase();
    let mut matches = MONTH_NAMES
        .iter()
        .filter(|(name, _)| name.starts_with(lower.as_str()));

    match (matches.next(), matches.next()) {
        (Some(&(_, padded)), None) => Some(padded),
        (first, _) => {
            trace!(
                token = trimmed,
                ambiguous = first.is_some(),
                "month name did not resolve"
            );
            None
        }
    }
}

/// Same as [`resolve_month`], as a number in `1..=12`
pub fn resolve_month_number(token: &str) -> Option<u32> {
    resolve_month(token).and_then(|padded| padded.parse().ok())
}
