//! Best-effort string to number/date conversion.
//!
//! Failures are represented as `None` rather than errors so CSV row
//! decoding can decide per field what a missing value means, and so the
//! shell's prompts can retry until input parses.

use chrono::{DateTime, Local, Utc};

/// Parse a base-10 integer.
///
/// Returns `None` on any malformed input, including the empty string and
/// float-looking text such as "1.5".
pub fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Parse a decimal number, accepting standard float literals including
/// scientific notation per `f64::from_str`.
pub fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// Interpret `text` as a Unix epoch timestamp (seconds, fractional
/// allowed) and convert to local calendar time.
///
/// Returns `None` when the text is not numeric, not finite, or outside
/// the representable date range.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Local>> {
    let epoch = parse_float(text)?;
    if !epoch.is_finite() {
        return None;
    }

    let secs = epoch.floor();
    if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return None;
    }
    // floor keeps the fractional part non-negative, so nanos stays in range
    let nanos = ((epoch - secs) * 1e9).round();
    let (secs, nanos) = if nanos >= 1e9 {
        (secs as i64 + 1, 0u32)
    } else {
        (secs as i64, nanos as u32)
    };

    DateTime::<Utc>::from_timestamp(secs, nanos).map(|utc| utc.with_timezone(&Local))
}
