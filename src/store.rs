// SPDX-License-Identifier: MPL-2.0
//! The locale preference store: two source cells, two pure derivations, and
//! synchronous change notification for rendering collaborators.
//!
//! The cells are the user's preference (default `Auto`) and the locale
//! detected from the platform's language tags (default the fallback). The
//! active locale and its copy document are derived on every read and pushed
//! to subscribers after every cell mutation. Everything runs on the single
//! UI thread; mutation only happens through [`LocaleStore::initialize`] and
//! [`LocaleStore::set_preference`].

use crate::copy::{copy_for, SiteCopy};
use crate::href;
use crate::locale::{
    detect_preferred_locale, normalize_locale_preference, LocalePreference, SupportedLocale,
    FALLBACK_LOCALE,
};
use crate::platform::{Desktop, Platform};

/// Handle returned by [`LocaleStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(SupportedLocale, &'static SiteCopy)>;

pub struct LocaleStore {
    preference: LocalePreference,
    auto_locale: SupportedLocale,
    platform: Box<dyn Platform>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl LocaleStore {
    /// Store backed by the real desktop platform.
    pub fn new() -> Self {
        Self::with_platform(Box::new(Desktop::new()))
    }

    pub fn with_platform(platform: Box<dyn Platform>) -> Self {
        Self {
            preference: LocalePreference::Auto,
            auto_locale: FALLBACK_LOCALE,
            platform,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn preference(&self) -> LocalePreference {
        self.preference
    }

    pub fn auto_locale(&self) -> SupportedLocale {
        self.auto_locale
    }

    /// The concretely resolved display locale: the preference itself, or the
    /// auto-detected locale when the preference is `Auto`.
    pub fn active_locale(&self) -> SupportedLocale {
        match self.preference {
            LocalePreference::Auto => self.auto_locale,
            LocalePreference::Locale(locale) => locale,
        }
    }

    /// The copy document for the active locale.
    pub fn copy(&self) -> &'static SiteCopy {
        copy_for(self.active_locale())
    }

    /// Registers a callback invoked synchronously after every cell mutation
    /// with the freshly derived active locale and copy document.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(SupportedLocale, &'static SiteCopy) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription. Returns whether it was still registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Applies an explicit preference choice and persists it.
    ///
    /// Choosing `Auto` re-detects the locale from the platform's current
    /// language tags first, so switching back to `Auto` picks up tags that
    /// changed since initialization. Persistence failures are logged and
    /// swallowed; a preference that outlives the session is a convenience,
    /// not a requirement.
    pub fn set_preference(&mut self, preference: LocalePreference) {
        if preference == LocalePreference::Auto {
            if let Some(languages) = self.platform.languages() {
                self.auto_locale =
                    detect_preferred_locale(languages.iter().map(String::as_str));
                self.notify();
            }
        }
        self.preference = preference;
        self.notify();
        if let Err(err) = self.platform.store_preference(preference.as_str()) {
            log::warn!("failed to persist locale preference: {}", err);
        }
    }

    /// Reconciles query parameter, persisted value, and platform detection
    /// into the initial state. Run once at page load.
    ///
    /// `query` is the page URL's raw query string, if any. A valid `lang`
    /// parameter wins and is persisted through [`Self::set_preference`],
    /// overwriting any stored value. Otherwise a valid persisted value is
    /// restored directly, without re-detection or re-persisting. Invalid or
    /// missing input at either step falls through silently.
    pub fn initialize(&mut self, query: Option<&str>) {
        if let Some(languages) = self.platform.languages() {
            self.auto_locale = detect_preferred_locale(languages.iter().map(String::as_str));
            log::debug!("auto-detected locale: {}", self.auto_locale);
            self.notify();
        }

        let query_preference = query
            .and_then(|query| href::query_param(query, "lang"))
            .and_then(|raw| normalize_locale_preference(&raw));
        if let Some(preference) = query_preference {
            log::debug!("locale preference from query parameter: {}", preference);
            self.set_preference(preference);
            return;
        }

        let stored_preference = self
            .platform
            .load_preference()
            .and_then(|raw| normalize_locale_preference(&raw));
        if let Some(preference) = stored_preference {
            log::debug!("locale preference restored from settings: {}", preference);
            self.preference = preference;
            self.notify();
        }
    }

    /// [`href::localized_href`] defaulting to the current preference cell.
    pub fn localized_href(&self, pathname: &str) -> String {
        href::localized_href(pathname, self.preference)
    }

    fn notify(&mut self) {
        let active = match self.preference {
            LocalePreference::Auto => self.auto_locale,
            LocalePreference::Locale(locale) => locale,
        };
        let copy = copy_for(active);
        for (_, subscriber) in &mut self.subscribers {
            subscriber(active, copy);
        }
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new()
    }
}
