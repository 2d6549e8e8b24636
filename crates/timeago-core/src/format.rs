//! Distance-to-phrase formatting.
//!
//! A signed distance in milliseconds is bucketed into a [`Tier`] by a fixed
//! list of thresholds, checked in order, first match wins:
//!
//! | condition        | tier    | number           |
//! |------------------|---------|------------------|
//! | seconds < 45     | seconds | round(seconds)   |
//! | seconds < 90     | minute  | 1                |
//! | minutes < 45     | minutes | round(minutes)   |
//! | minutes < 90     | hour    | 1                |
//! | hours < 24       | hours   | round(hours)     |
//! | hours < 48       | day     | 1                |
//! | days < 30        | days    | floor(days)      |
//! | days < 60        | month   | 1                |
//! | days < 365       | months  | floor(days / 30) |
//! | years < 2        | year    | 1                |
//! | otherwise        | years   | floor(years)     |
//!
//! Years are a flat 365 days. The tier's template is resolved, its first
//! `%d` replaced by the number (or its entry in the numeral table), and the
//! result framed by the prefix/suffix pair for the phrase's direction.

use std::borrow::Cow;
use timeago_types::{Direction, Settings, Tier};

/// Tier and number chosen for a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Granularity of the phrase
    pub tier: Tier,
    /// Number substituted for `%d`
    pub number: u64,
}

impl Selection {
    fn new(tier: Tier, number: f64) -> Self {
        Self { tier, number: number as u64 }
    }
}

/// Pick the tier and number for a signed distance. Only the magnitude matters.
pub fn select_tier(distance_millis: i64) -> Selection {
    let seconds = distance_millis.unsigned_abs() as f64 / 1000.0;
    let minutes = seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;
    let years = days / 365.0;

    if seconds < 45.0 {
        Selection::new(Tier::Seconds, seconds.round())
    } else if seconds < 90.0 {
        Selection::new(Tier::Minute, 1.0)
    } else if minutes < 45.0 {
        Selection::new(Tier::Minutes, minutes.round())
    } else if minutes < 90.0 {
        Selection::new(Tier::Hour, 1.0)
    } else if hours < 24.0 {
        Selection::new(Tier::Hours, hours.round())
    } else if hours < 48.0 {
        Selection::new(Tier::Day, 1.0)
    } else if days < 30.0 {
        Selection::new(Tier::Days, days.floor())
    } else if days < 60.0 {
        Selection::new(Tier::Month, 1.0)
    } else if days < 365.0 {
        Selection::new(Tier::Months, (days / 30.0).floor())
    } else if years < 2.0 {
        Selection::new(Tier::Year, 1.0)
    } else {
        Selection::new(Tier::Years, years.floor())
    }
}

/// Direction of a phrase. Future distances read as "ago" unless
/// `allow_future` is set.
pub fn direction(distance_millis: i64, settings: &Settings) -> Direction {
    if settings.allow_future && distance_millis < 0 {
        Direction::FromNow
    } else {
        Direction::Ago
    }
}

/// Replace the first `%d` (either case) in `template` with `numeral`.
///
/// Later placeholders are left in place.
pub fn substitute(template: &str, numeral: &str) -> String {
    let found = template
        .as_bytes()
        .windows(2)
        .position(|pair| pair[0] == b'%' && (pair[1] == b'd' || pair[1] == b'D'));

    match found {
        Some(at) => {
            let mut out = String::with_capacity(template.len() + numeral.len());
            out.push_str(&template[..at]);
            out.push_str(numeral);
            out.push_str(&template[at + 2..]);
            out
        }
        None => template.to_string(),
    }
}

/// Phrase for a signed distance under `settings`.
///
/// # Example
///
/// ```
/// use timeago_core::format::in_words;
/// use timeago_types::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(in_words(30_000, &settings), "less than a minute ago");
/// assert_eq!(in_words(5 * 3_600_000, &settings), "about 5 hours ago");
///
/// let settings = settings.with_allow_future(true);
/// assert_eq!(in_words(-120_000, &settings), "2 minutes from now");
/// ```
pub fn in_words(distance_millis: i64, settings: &Settings) -> String {
    let strings = &settings.strings;
    let direction = direction(distance_millis, settings);
    let (prefix, suffix) = match direction {
        Direction::Ago => (&strings.prefix_ago, &strings.suffix_ago),
        Direction::FromNow => (&strings.prefix_from_now, &strings.suffix_from_now),
    };

    let Selection { tier, number } = select_tier(distance_millis);
    let template = strings.template(tier).resolve(number, distance_millis);
    let numeral = match strings.numeral(number) {
        Some(numeral) => Cow::Borrowed(numeral),
        None => Cow::Owned(number.to_string()),
    };
    let words = substitute(&template, &numeral);

    tracing::trace!(distance_millis, %tier, number, %direction, "selected phrase tier");

    [
        prefix.as_deref().unwrap_or_default(),
        words.as_str(),
        suffix.as_deref().unwrap_or_default(),
    ]
    .join(" ")
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use timeago_types::{Strings, Template};

    const SECOND: i64 = 1000;
    const MINUTE: i64 = 60 * SECOND;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    fn future_settings() -> Settings {
        Settings::default().with_allow_future(true)
    }

    #[test]
    fn test_default_phrases() {
        let settings = Settings::default();
        assert_eq!(in_words(30 * SECOND, &settings), "less than a minute ago");
        assert_eq!(in_words(5 * HOUR, &settings), "about 5 hours ago");
        assert_eq!(in_words(40 * DAY, &settings), "about a month ago");
        assert_eq!(in_words(60 * SECOND, &settings), "about a minute ago");
        assert_eq!(in_words(10 * MINUTE, &settings), "10 minutes ago");
        assert_eq!(in_words(HOUR, &settings), "about an hour ago");
        assert_eq!(in_words(30 * HOUR, &settings), "a day ago");
        assert_eq!(in_words(3 * DAY, &settings), "3 days ago");
        assert_eq!(in_words(100 * DAY, &settings), "3 months ago");
        assert_eq!(in_words(400 * DAY, &settings), "about a year ago");
        assert_eq!(in_words(3 * 365 * DAY, &settings), "3 years ago");
    }

    #[test]
    fn test_future_phrase() {
        assert_eq!(in_words(-2 * MINUTE, &future_settings()), "2 minutes from now");
    }

    #[test]
    fn test_future_without_allow_future_reads_ago() {
        let settings = Settings::default();
        assert_eq!(direction(-2 * MINUTE, &settings), Direction::Ago);
        assert_eq!(in_words(-2 * MINUTE, &settings), "2 minutes ago");
    }

    #[test]
    fn test_seconds_minute_boundary() {
        assert_eq!(select_tier(44_999), Selection { tier: Tier::Seconds, number: 45 });
        assert_eq!(select_tier(45_000), Selection { tier: Tier::Minute, number: 1 });
        assert_eq!(select_tier(89_999).tier, Tier::Minute);
        assert_eq!(select_tier(90_000), Selection { tier: Tier::Minutes, number: 2 });
    }

    #[test]
    fn test_upper_boundaries() {
        assert_eq!(select_tier(45 * MINUTE - 1).tier, Tier::Minutes);
        assert_eq!(select_tier(45 * MINUTE).tier, Tier::Hour);
        assert_eq!(select_tier(90 * MINUTE), Selection { tier: Tier::Hours, number: 2 });
        assert_eq!(select_tier(24 * HOUR - 1), Selection { tier: Tier::Hours, number: 24 });
        assert_eq!(select_tier(24 * HOUR).tier, Tier::Day);
        assert_eq!(select_tier(48 * HOUR), Selection { tier: Tier::Days, number: 2 });
        assert_eq!(select_tier(30 * DAY - 1), Selection { tier: Tier::Days, number: 29 });
        assert_eq!(select_tier(30 * DAY).tier, Tier::Month);
        assert_eq!(select_tier(60 * DAY), Selection { tier: Tier::Months, number: 2 });
        assert_eq!(select_tier(365 * DAY - 1), Selection { tier: Tier::Months, number: 12 });
        assert_eq!(select_tier(365 * DAY).tier, Tier::Year);
        assert_eq!(select_tier(730 * DAY), Selection { tier: Tier::Years, number: 2 });
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(select_tier(2_500).number, 3);
        assert_eq!(select_tier(2_499).number, 2);
        assert_eq!(select_tier(-2_500).number, 3);
    }

    #[test]
    fn test_extreme_distances() {
        assert_eq!(select_tier(i64::MIN).tier, Tier::Years);
        assert_eq!(select_tier(i64::MAX).tier, Tier::Years);
    }

    #[test]
    fn test_numeral_substitution() {
        let mut settings = Settings::default();
        settings.strings.numbers =
            vec![Some("zero".into()), Some("one".into()), Some("two".into())];
        settings.strings.prefix_ago = None;
        settings.strings.suffix_ago = None;

        settings.strings.hours = Template::literal("%d hours");
        assert_eq!(in_words(2 * HOUR, &settings), "two hours");

        settings.strings.hours = Template::literal("%D hours");
        assert_eq!(in_words(2 * HOUR, &settings), "two hours");

        assert_eq!(in_words(3 * HOUR, &settings), "3 hours");
    }

    #[test]
    fn test_numeral_table_skips_empty_slots() {
        let mut settings = Settings::default();
        settings.strings.numbers = vec![None, None, Some(String::new())];
        assert_eq!(in_words(2 * DAY, &settings), "2 days ago");
    }

    #[test]
    fn test_substitute_first_only() {
        assert_eq!(substitute("%d of %d", "7"), "7 of %d");
        assert_eq!(substitute("%D then %d", "7"), "7 then %d");
        assert_eq!(substitute("no placeholder", "7"), "no placeholder");
        assert_eq!(substitute("100%", "7"), "100%");
        assert_eq!(substitute("vor %d Tagen", "drei"), "vor drei Tagen");
    }

    #[test]
    fn test_computed_template() {
        let mut settings = future_settings();
        settings.strings.days = Template::computed(|n, distance| {
            let when = if distance < 0 { "ahead" } else { "behind" };
            format!("%d day{} {}", if n == 1 { "" } else { "s" }, when)
        });
        settings.strings.suffix_ago = None;
        settings.strings.suffix_from_now = None;

        assert_eq!(in_words(3 * DAY, &settings), "3 days behind");
        assert_eq!(in_words(-3 * DAY, &settings), "3 days ahead");
    }

    #[test]
    fn test_prefix_and_suffix_framing() {
        let strings = Strings {
            prefix_ago: Some("hace".into()),
            suffix_ago: None,
            prefix_from_now: Some("dentro de".into()),
            suffix_from_now: None,
            ..Strings::default()
        };
        let settings = future_settings().with_strings(strings);
        assert_eq!(in_words(5 * DAY, &settings), "hace 5 days");
        assert_eq!(in_words(-5 * DAY, &settings), "dentro de 5 days");
    }

    #[test]
    fn test_empty_words_keep_internal_spacing() {
        let mut settings = Settings::default();
        settings.strings.prefix_ago = Some("in".into());
        settings.strings.seconds = Template::literal("");
        assert_eq!(in_words(0, &settings), "in  ago");

        settings.strings.prefix_ago = None;
        assert_eq!(in_words(0, &settings), "ago");
    }

    #[test]
    fn test_empty_string_prefix_trims_at_boundary() {
        let mut settings = Settings::default();
        settings.strings.prefix_ago = Some(String::new());
        assert_eq!(in_words(3 * DAY, &settings), "3 days ago");
    }

    #[test]
    fn test_idempotent() {
        let settings = future_settings();
        for distance in [0, 44_999, 45_000, -7 * DAY, 3 * 365 * DAY] {
            assert_eq!(in_words(distance, &settings), in_words(distance, &settings));
        }
    }

    proptest! {
        #[test]
        fn prop_seconds_tier(d in 0i64..45_000) {
            let selection = select_tier(d);
            prop_assert_eq!(selection.tier, Tier::Seconds);
            prop_assert_eq!(selection.number, (d as f64 / 1000.0).round() as u64);
        }

        #[test]
        fn prop_minute_tier(d in 45_000i64..90_000) {
            prop_assert_eq!(select_tier(d), Selection { tier: Tier::Minute, number: 1 });
        }

        #[test]
        fn prop_monotonic_rank(a in 0i64..100 * 365 * DAY, b in 0i64..100 * 365 * DAY) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(select_tier(low).tier.rank() <= select_tier(high).tier.rank());
        }

        #[test]
        fn prop_future_symmetry(d in 1i64..100 * 365 * DAY) {
            let settings = future_settings();
            prop_assert_eq!(select_tier(d), select_tier(-d));
            prop_assert_eq!(direction(d, &settings), Direction::Ago);
            prop_assert_eq!(direction(-d, &settings), Direction::FromNow);

            let past = in_words(d, &settings);
            let future = in_words(-d, &settings);
            prop_assert_eq!(
                past.trim_end_matches(" ago"),
                future.trim_end_matches(" from now")
            );
        }
    }
}
