//! Common enumerations used throughout timeago.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{TimeagoError, Result};

/// Elapsed-time granularity a phrase is rendered at.
///
/// Variants are declared from finest to coarsest; the derived ordering and
/// [`Tier::rank`] follow that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Under 45 seconds
    Seconds,
    /// 45 to 90 seconds
    Minute,
    /// Under 45 minutes
    Minutes,
    /// 45 to 90 minutes
    Hour,
    /// Under 24 hours
    Hours,
    /// 24 to 48 hours
    Day,
    /// Under 30 days
    Days,
    /// 30 to 60 days
    Month,
    /// Under 365 days
    Months,
    /// Under two years
    Year,
    /// Two years and beyond
    Years,
}

impl Tier {
    /// Every tier, finest first.
    pub const ALL: [Tier; 11] = [
        Tier::Seconds,
        Tier::Minute,
        Tier::Minutes,
        Tier::Hour,
        Tier::Hours,
        Tier::Day,
        Tier::Days,
        Tier::Month,
        Tier::Months,
        Tier::Year,
        Tier::Years,
    ];

    /// Position in [`Tier::ALL`].
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Template key for this tier.
    pub fn name(self) -> &'static str {
        match self {
            Tier::Seconds => "seconds",
            Tier::Minute => "minute",
            Tier::Minutes => "minutes",
            Tier::Hour => "hour",
            Tier::Hours => "hours",
            Tier::Day => "day",
            Tier::Days => "days",
            Tier::Month => "month",
            Tier::Months => "months",
            Tier::Year => "year",
            Tier::Years => "years",
        }
    }
}

impl FromStr for Tier {
    type Err = TimeagoError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Tier::ALL
            .into_iter()
            .find(|tier| tier.name() == wanted)
            .ok_or_else(|| TimeagoError::Config(format!("Unknown tier: {}", s)))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which prefix/suffix pair frames a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Instant is in the past, or future phrasing is disabled
    Ago,
    /// Instant is in the future and future phrasing is enabled
    FromNow,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ago => write!(f, "ago"),
            Direction::FromNow => write!(f, "from-now"),
        }
    }
}
