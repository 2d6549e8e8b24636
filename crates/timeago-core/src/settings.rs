//! Process-wide settings.
//!
//! [`crate::timeago`] and [`crate::in_words`] read the settings stored here.
//! The value is swapped as a whole on every change, so a reader always sees
//! a complete template bundle even while another thread updates it.
//!
//! ## Example
//!
//! ```rust
//! use timeago_core::settings;
//!
//! settings::update(|s| {
//!     s.allow_future = true;
//!     s.strings.suffix_ago = Some("back".to_string());
//! });
//! assert!(settings::current().allow_future);
//!
//! settings::reset();
//! ```

use std::sync::Arc;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use timeago_types::Settings;

static GLOBAL: Lazy<RwLock<Arc<Settings>>> =
    Lazy::new(|| RwLock::new(Arc::new(Settings::default())));

/// The settings in effect right now.
pub fn current() -> Arc<Settings> {
    GLOBAL.read().clone()
}

/// Install new settings, returning the ones they replace.
pub fn replace(settings: Settings) -> Arc<Settings> {
    let previous = std::mem::replace(&mut *GLOBAL.write(), Arc::new(settings));
    tracing::debug!(allow_future = previous.allow_future, "replaced global settings");
    previous
}

/// Edit a copy of the current settings and install it.
///
/// The write lock is held for the duration of `edit`, so concurrent updates
/// apply one after another.
pub fn update<F>(edit: F)
where
    F: FnOnce(&mut Settings),
{
    let mut guard = GLOBAL.write();
    let mut next = Settings::clone(&guard);
    edit(&mut next);
    *guard = Arc::new(next);
    tracing::debug!(allow_future = guard.allow_future, "updated global settings");
}

/// Restore the default settings.
pub fn reset() {
    replace(Settings::default());
}

#[cfg(test)]
pub(crate) static TEST_LOCK: Lazy<parking_lot::Mutex<()>> =
    Lazy::new(|| parking_lot::Mutex::new(()));
