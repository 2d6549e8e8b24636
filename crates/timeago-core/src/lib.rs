//! # timeago Core
//!
//! Turns a point in time into a relative phrase such as "about an hour ago"
//! or "3 days from now".
//!
//! A call runs three steps:
//!
//! - **Resolve**: the input (instant, epoch milliseconds, or timestamp text)
//!   becomes a `DateTime<Utc>` ([`instant`], [`parse`])
//! - **Measure**: the signed distance to now in milliseconds ([`distance`])
//! - **Phrase**: the distance is bucketed into a tier and rendered from the
//!   settings' templates ([`format`])
//!
//! Settings are either passed explicitly ([`timeago_with`]) or read from the
//! process-wide value in [`settings`].
//!
//! ## Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use timeago_core::{timeago, timeago_with};
//! use timeago_types::{FixedClock, Settings};
//!
//! let phrase = timeago(Utc::now() - Duration::hours(5))?;
//! assert_eq!(phrase, "about 5 hours ago");
//!
//! let clock = FixedClock::new("2011-10-06T12:00:00Z".parse().unwrap());
//! let settings = Settings::default().with_allow_future(true);
//! assert_eq!(
//!     timeago_with("2011-10-06T12:02:00Z", &settings, &clock)?,
//!     "2 minutes from now"
//! );
//! # Ok::<(), timeago_types::TimeagoError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod distance;
pub mod format;
pub mod instant;
pub mod log;
pub mod parse;
pub mod settings;

use chrono::{DateTime, Utc};
use timeago_types::{Clock, Settings, SystemClock};

pub use instant::Timestamp;
pub use timeago_types::{Result, TimeagoError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Relative phrase for `timestamp`, using the global settings and the
/// system clock.
///
/// # Errors
///
/// Fails when the timestamp cannot be resolved to an instant: empty or
/// unparseable text, or an epoch outside the representable range.
pub fn timeago(timestamp: impl Into<Timestamp>) -> Result<String> {
    timeago_with(timestamp, &settings::current(), &SystemClock)
}

/// Relative phrase for `timestamp` with explicit settings and clock.
pub fn timeago_with(
    timestamp: impl Into<Timestamp>,
    settings: &Settings,
    clock: &dyn Clock,
) -> Result<String> {
    let timestamp = timestamp.into();
    let instant = timestamp.resolve().map_err(|e| {
        tracing::debug!(?timestamp, error = %e, "could not resolve timestamp");
        e
    })?;
    Ok(in_words_with(instant, settings, clock))
}

/// Relative phrase for an instant, using the global settings and the
/// system clock.
pub fn in_words(instant: DateTime<Utc>) -> String {
    in_words_with(instant, &settings::current(), &SystemClock)
}

/// Relative phrase for an instant with explicit settings and clock.
pub fn in_words_with(instant: DateTime<Utc>, settings: &Settings, clock: &dyn Clock) -> String {
    format::in_words(distance::distance_millis(instant, clock), settings)
}
