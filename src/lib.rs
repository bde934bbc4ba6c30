// SPDX-License-Identifier: MPL-2.0
//! Localized copy and locale-preference management for the zup marketing
//! site.
//!
//! The site ships complete copy documents for Japanese, English, and Chinese.
//! This crate stores those documents, resolves the active display locale from
//! an explicit user choice or the platform's language tags, and persists the
//! choice across sessions.

#![doc(html_root_url = "https://docs.rs/zup-site-locale/0.1.0")]

pub mod copy;
pub mod error;
pub mod href;
pub mod locale;
pub mod platform;
pub mod store;

pub use copy::{copy_for, SiteCopy};
pub use href::localized_href;
pub use locale::{
    detect_preferred_locale, normalize_locale_preference, LocalePreference, SupportedLocale,
    FALLBACK_LOCALE, SUPPORTED_LOCALES,
};
pub use store::{LocaleStore, SubscriptionId};
