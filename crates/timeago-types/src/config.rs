//! Settings and template bundle types.
//!
//! Field names serialize in camelCase (`allowFuture`, `prefixAgo`,
//! `suffixFromNow`, ...) so settings files read naturally next to the
//! defaults they override. Every field is optional on input.

use serde::de::Deserializer;
use serde::ser::{Error as _, Serializer};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::enums::Tier;

/// Callback signature for computed templates: `(number, signed_distance_millis)`.
pub type TemplateFn = dyn Fn(u64, i64) -> String + Send + Sync;

/// Phrase template for one tier.
///
/// The resolved text may contain a `%d` placeholder which the formatter
/// replaces with the tier's number.
#[derive(Clone)]
pub enum Template {
    /// Fixed text such as `"about %d hours"`
    Literal(String),
    /// Text computed from the number and the signed distance
    Computed(Arc<TemplateFn>),
}

impl Template {
    /// Create a literal template.
    pub fn literal(text: impl Into<String>) -> Self {
        Template::Literal(text.into())
    }

    /// Create a computed template.
    ///
    /// # Example
    ///
    /// ```
    /// use timeago_types::Template;
    ///
    /// let hours = Template::computed(|n, _| {
    ///     if n == 1 { "an hour".into() } else { "%d hours".into() }
    /// });
    /// assert_eq!(hours.resolve(1, 3_600_000), "an hour");
    /// ```
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(u64, i64) -> String + Send + Sync + 'static,
    {
        Template::Computed(Arc::new(f))
    }

    /// Produce the template text for a number and signed distance.
    pub fn resolve(&self, number: u64, distance_millis: i64) -> Cow<'_, str> {
        match self {
            Template::Literal(text) => Cow::Borrowed(text),
            Template::Computed(f) => Cow::Owned(f(number, distance_millis)),
        }
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Template::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Template::literal(text)
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Template::Literal(text)
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Template::Literal(text) => serializer.serialize_str(text),
            Template::Computed(_) => Err(S::Error::custom("computed templates cannot be serialized")),
        }
    }
}

impl<'de> Deserialize<'de> for Template {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer).map(Template::Literal)
    }
}

/// Template bundle: one template per tier, the framing words, and the
/// numeral substitution table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Strings {
    /// Prefix for past phrases
    pub prefix_ago: Option<String>,
    /// Prefix for future phrases
    pub prefix_from_now: Option<String>,
    /// Suffix for past phrases
    pub suffix_ago: Option<String>,
    /// Suffix for future phrases
    pub suffix_from_now: Option<String>,
    /// Under 45 seconds
    pub seconds: Template,
    /// 45 to 90 seconds
    pub minute: Template,
    /// Under 45 minutes
    pub minutes: Template,
    /// 45 to 90 minutes
    pub hour: Template,
    /// Under 24 hours
    pub hours: Template,
    /// 24 to 48 hours
    pub day: Template,
    /// Under 30 days
    pub days: Template,
    /// 30 to 60 days
    pub month: Template,
    /// Under 365 days
    pub months: Template,
    /// Under two years
    pub year: Template,
    /// Two years and beyond
    pub years: Template,
    /// Display forms for small numbers, indexed by the number itself
    pub numbers: Vec<Option<String>>,
}

impl Strings {
    /// Template for a tier.
    pub fn template(&self, tier: Tier) -> &Template {
        match tier {
            Tier::Seconds => &self.seconds,
            Tier::Minute => &self.minute,
            Tier::Minutes => &self.minutes,
            Tier::Hour => &self.hour,
            Tier::Hours => &self.hours,
            Tier::Day => &self.day,
            Tier::Days => &self.days,
            Tier::Month => &self.month,
            Tier::Months => &self.months,
            Tier::Year => &self.year,
            Tier::Years => &self.years,
        }
    }

    /// Replace the template for a tier.
    pub fn set_template(&mut self, tier: Tier, template: impl Into<Template>) {
        let slot = match tier {
            Tier::Seconds => &mut self.seconds,
            Tier::Minute => &mut self.minute,
            Tier::Minutes => &mut self.minutes,
            Tier::Hour => &mut self.hour,
            Tier::Hours => &mut self.hours,
            Tier::Day => &mut self.day,
            Tier::Days => &mut self.days,
            Tier::Month => &mut self.month,
            Tier::Months => &mut self.months,
            Tier::Year => &mut self.year,
            Tier::Years => &mut self.years,
        };
        *slot = template.into();
    }

    /// Display form for `number`, if the table has a non-empty entry for it.
    pub fn numeral(&self, number: u64) -> Option<&str> {
        let index = usize::try_from(number).ok()?;
        self.numbers
            .get(index)?
            .as_deref()
            .filter(|numeral| !numeral.is_empty())
    }
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            prefix_ago: None,
            prefix_from_now: None,
            suffix_ago: Some("ago".to_string()),
            suffix_from_now: Some("from now".to_string()),
            seconds: "less than a minute".into(),
            minute: "about a minute".into(),
            minutes: "%d minutes".into(),
            hour: "about an hour".into(),
            hours: "about %d hours".into(),
            day: "a day".into(),
            days: "%d days".into(),
            month: "about a month".into(),
            months: "%d months".into(),
            year: "about a year".into(),
            years: "%d years".into(),
            numbers: Vec::new(),
        }
    }
}

/// Formatter settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Phrase future instants with the "from now" pair. When off, future
    /// instants are phrased exactly like past ones.
    pub allow_future: bool,

    /// Template bundle
    pub strings: Strings,
}

impl Settings {
    /// Enable or disable future phrasing.
    pub fn with_allow_future(mut self, allow_future: bool) -> Self {
        self.allow_future = allow_future;
        self
    }

    /// Replace the template bundle.
    pub fn with_strings(mut self, strings: Strings) -> Self {
        self.strings = strings;
        self
    }
}
