//! Timestamp string parsing.
//!
//! Accepts a narrow profile of ISO-8601-like timestamps:
//!
//! ```text
//! 2011-10-06
//! 2011/10/06 14:22
//! 2011-10-06T14:22:05Z
//! 2011-10-06T14:22:05.123456-04:00
//! 2011-10-06 14:22:05 +0200
//! 2011-10-06 14:22:05 UTC
//! ```
//!
//! Fractional seconds are discarded. A timestamp with no zone is read as UTC.
//! Anything outside the profile is handed to chrono's RFC 3339 and RFC 2822
//! parsers before giving up.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use timeago_types::{bail, Result, TimeagoError};

static PROFILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^
        (?P<year>\d{4}) [-/] (?P<month>\d{1,2}) [-/] (?P<day>\d{1,2})
        (?:
            (?:T|\s+)
            (?P<hour>\d{1,2}) : (?P<minute>\d{2})
            (?: : (?P<second>\d{2}) )?
            (?: \.\d+ )?
        )?
        \s*
        (?:
            (?P<utc>Z|UTC|GMT)
          | (?P<sign>[+-]) (?P<off_hour>\d{2}) :? (?P<off_minute>\d{2})
        )?
        $",
    )
    .expect("timestamp profile regex is valid")
});

/// Parse a timestamp string into an instant.
///
/// # Errors
///
/// - [`TimeagoError::EmptyInput`] for empty or whitespace-only input
/// - [`TimeagoError::UnparseableTimestamp`] when no valid instant can be derived
///
/// # Example
///
/// ```
/// use timeago_core::parse::parse_timestamp;
///
/// let at = parse_timestamp("2011-10-06T14:22:05-04:00").unwrap();
/// assert_eq!(at.to_rfc3339(), "2011-10-06T18:22:05+00:00");
/// ```
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        bail!(EmptyInput);
    }

    if let Some(caps) = PROFILE.captures(text) {
        let instant = from_profile(text, &caps)?;
        tracing::trace!(input = text, %instant, "parsed timestamp profile");
        return Ok(instant);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        tracing::trace!(input = text, "parsed timestamp as RFC 3339");
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(text) {
        tracing::trace!(input = text, "parsed timestamp as RFC 2822");
        return Ok(instant.with_timezone(&Utc));
    }

    tracing::debug!(input = text, "timestamp matches no known format");
    Err(TimeagoError::UnparseableTimestamp(format!(
        "'{}' is not a recognized timestamp",
        text
    )))
}

fn from_profile(text: &str, caps: &Captures<'_>) -> Result<DateTime<Utc>> {
    let field = |name: &str| -> Result<u32> {
        match caps.name(name) {
            Some(m) => m.as_str().parse::<u32>().map_err(|e| {
                TimeagoError::UnparseableTimestamp(format!("bad {} in '{}': {}", name, text, e))
            }),
            None => Ok(0),
        }
    };

    let year = field("year")? as i32;
    let date = NaiveDate::from_ymd_opt(year, field("month")?, field("day")?).ok_or_else(|| {
        TimeagoError::UnparseableTimestamp(format!("'{}' has an invalid date", text))
    })?;
    let time = NaiveTime::from_hms_opt(field("hour")?, field("minute")?, field("second")?)
        .ok_or_else(|| {
            TimeagoError::UnparseableTimestamp(format!("'{}' has an invalid time of day", text))
        })?;
    let naive = NaiveDateTime::new(date, time);

    if caps.name("sign").is_none() {
        return Ok(Utc.from_utc_datetime(&naive));
    }

    let seconds = (field("off_hour")? * 3600 + field("off_minute")? * 60) as i32;
    let seconds = if &caps["sign"] == "-" { -seconds } else { seconds };
    let offset = FixedOffset::east_opt(seconds).ok_or_else(|| {
        TimeagoError::UnparseableTimestamp(format!("'{}' has an invalid UTC offset", text))
    })?;
    let local = offset.from_local_datetime(&naive).single().ok_or_else(|| {
        TimeagoError::UnparseableTimestamp(format!("'{}' is ambiguous in its offset", text))
    })?;

    Ok(local.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_parse_iso_utc() {
        assert_eq!(
            parse_timestamp("2011-10-06T14:22:05Z").unwrap(),
            utc(2011, 10, 6, 14, 22, 5)
        );
    }

    #[test]
    fn test_parse_strips_fraction() {
        assert_eq!(
            parse_timestamp("2011-10-06T14:22:05.123Z").unwrap(),
            utc(2011, 10, 6, 14, 22, 5)
        );
        assert_eq!(
            parse_timestamp("2011-10-06T14:22:05.123456789Z").unwrap(),
            utc(2011, 10, 6, 14, 22, 5)
        );
    }

    #[test]
    fn test_parse_offsets() {
        let expected = utc(2011, 10, 6, 18, 22, 5);
        assert_eq!(parse_timestamp("2011-10-06T14:22:05-04:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2011-10-06T14:22:05-0400").unwrap(), expected);
        assert_eq!(parse_timestamp("2011-10-06 20:22:05 +02:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_zone_names() {
        let expected = utc(2011, 10, 6, 14, 22, 0);
        assert_eq!(parse_timestamp("2011-10-06 14:22 UTC").unwrap(), expected);
        assert_eq!(parse_timestamp("2011/10/06 14:22 GMT").unwrap(), expected);
    }

    #[test]
    fn test_parse_without_zone_is_utc() {
        assert_eq!(
            parse_timestamp("2011/10/06 14:22:05").unwrap(),
            utc(2011, 10, 6, 14, 22, 5)
        );
        assert_eq!(parse_timestamp("2011-10-06").unwrap(), utc(2011, 10, 6, 0, 0, 0));
        assert_eq!(parse_timestamp("2011-1-6").unwrap(), utc(2011, 1, 6, 0, 0, 0));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            parse_timestamp("  2011-10-06T14:22:05Z\n").unwrap(),
            utc(2011, 10, 6, 14, 22, 5)
        );
    }

    #[test]
    fn test_parse_rfc2822_fallback() {
        assert_eq!(
            parse_timestamp("Thu, 06 Oct 2011 14:22:05 +0000").unwrap(),
            utc(2011, 10, 6, 14, 22, 5)
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(parse_timestamp(""), Err(TimeagoError::EmptyInput)));
        assert!(matches!(parse_timestamp("   "), Err(TimeagoError::EmptyInput)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["yesterday", "2011-10", "10/06/2011", "2011-10-06T", "2011-10-06 14"] {
            assert!(
                matches!(parse_timestamp(text), Err(TimeagoError::UnparseableTimestamp(_))),
                "{} should not parse",
                text
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_fields() {
        for text in [
            "2011-13-06",
            "2011-02-30",
            "2011-10-06 25:00",
            "2011-10-06 12:61",
            "2011-10-06 12:00 +24:00",
        ] {
            assert!(
                matches!(parse_timestamp(text), Err(TimeagoError::UnparseableTimestamp(_))),
                "{} should not parse",
                text
            );
        }
    }
}
