//! # timeago Types
//!
//! Types shared across the timeago crates.
//!
//! This crate provides:
//!
//! - [`Settings`], [`Strings`] and [`Template`]: the phrase configuration
//! - [`Tier`] and [`Direction`]: what a phrase is rendered as
//! - [`Clock`]: the source of "now", with system and fixed implementations
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use timeago_types::{Settings, Template, Tier};
//!
//! let mut settings = Settings::default().with_allow_future(true);
//! settings.strings.set_template(Tier::Day, "yesterday");
//! settings.strings.numbers = vec![None, Some("one".into()), Some("two".into())];
//!
//! assert_eq!(settings.strings.numeral(2), Some("two"));
//! assert!(matches!(settings.strings.day, Template::Literal(ref s) if s == "yesterday"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod enums;
pub mod traits;
pub mod config;

// Re-export common types for convenience
pub use errors::{TimeagoError, Result};
pub use enums::{Tier, Direction};
pub use traits::{Clock, SystemClock, FixedClock};
pub use config::{Settings, Strings, Template, TemplateFn};
