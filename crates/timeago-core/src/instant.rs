//! Instant resolution.
//!
//! Everything the formatter accepts is first turned into a
//! [`DateTime<Utc>`]: instants pass through, epoch milliseconds are
//! converted directly, and strings go through [`parse_timestamp`].

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use std::time::SystemTime;
use timeago_types::{Result, TimeagoError};

use crate::parse::parse_timestamp;

/// A point in time in one of the accepted input shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    /// Already an absolute instant
    Instant(DateTime<Utc>),
    /// Milliseconds since the Unix epoch
    EpochMillis(i64),
    /// Timestamp text, see [`crate::parse`]
    Text(String),
}

impl Timestamp {
    /// Resolve to an absolute instant.
    ///
    /// # Errors
    ///
    /// - [`TimeagoError::OutOfRange`] for epochs chrono cannot represent
    /// - [`TimeagoError::EmptyInput`] / [`TimeagoError::UnparseableTimestamp`]
    ///   for text that does not parse
    pub fn resolve(&self) -> Result<DateTime<Utc>> {
        match self {
            Timestamp::Instant(instant) => Ok(*instant),
            Timestamp::EpochMillis(millis) => DateTime::from_timestamp_millis(*millis)
                .ok_or_else(|| {
                    TimeagoError::OutOfRange(format!("{} ms since epoch", millis))
                }),
            Timestamp::Text(text) => parse_timestamp(text),
        }
    }

    /// Build from fractional epoch milliseconds, truncating toward zero.
    ///
    /// # Errors
    ///
    /// [`TimeagoError::InvalidInputKind`] for NaN or infinite values,
    /// [`TimeagoError::OutOfRange`] for values beyond `i64` milliseconds.
    pub fn from_epoch_f64(millis: f64) -> Result<Self> {
        if !millis.is_finite() {
            return Err(TimeagoError::InvalidInputKind(format!(
                "non-finite epoch value {}",
                millis
            )));
        }
        let truncated = millis.trunc();
        if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
            return Err(TimeagoError::OutOfRange(format!("{} ms since epoch", millis)));
        }
        Ok(Timestamp::EpochMillis(truncated as i64))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(instant: DateTime<Tz>) -> Self {
        Timestamp::Instant(instant.with_timezone(&Utc))
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        Timestamp::Instant(DateTime::<Utc>::from(time))
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp::EpochMillis(millis)
    }
}

impl From<&str> for Timestamp {
    fn from(text: &str) -> Self {
        Timestamp::Text(text.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(text: String) -> Self {
        Timestamp::Text(text)
    }
}

impl From<&String> for Timestamp {
    fn from(text: &String) -> Self {
        Timestamp::Text(text.clone())
    }
}

impl TryFrom<f64> for Timestamp {
    type Error = TimeagoError;

    fn try_from(millis: f64) -> Result<Self> {
        Self::from_epoch_f64(millis)
    }
}

/// Dynamic input, e.g. a field from a JSON document: numbers are epoch
/// milliseconds, strings are timestamp text, everything else is rejected.
impl TryFrom<&Value> for Timestamp {
    type Error = TimeagoError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(millis) => Ok(Timestamp::EpochMillis(millis)),
                None => match n.as_f64() {
                    Some(millis) => Self::from_epoch_f64(millis),
                    None => Err(TimeagoError::InvalidInputKind(format!(
                        "unrepresentable number {}",
                        n
                    ))),
                },
            },
            Value::String(text) => Ok(Timestamp::Text(text.clone())),
            Value::Null => Err(TimeagoError::InvalidInputKind("null".to_string())),
            Value::Bool(_) => Err(TimeagoError::InvalidInputKind("boolean".to_string())),
            Value::Array(_) => Err(TimeagoError::InvalidInputKind("array".to_string())),
            Value::Object(_) => Err(TimeagoError::InvalidInputKind("object".to_string())),
        }
    }
}

impl TryFrom<Value> for Timestamp {
    type Error = TimeagoError;

    fn try_from(value: Value) -> Result<Self> {
        Timestamp::try_from(&value)
    }
}
