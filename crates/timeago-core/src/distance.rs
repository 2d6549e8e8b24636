//! Signed distance between an instant and now.

use chrono::{DateTime, Utc};
use timeago_types::Clock;

/// Milliseconds from `instant` to `clock.now()`.
///
/// Positive when `instant` is in the past, negative when it is in the future.
pub fn distance_millis(instant: DateTime<Utc>, clock: &dyn Clock) -> i64 {
    clock.now().signed_duration_since(instant).num_milliseconds()
}
