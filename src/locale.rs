// SPDX-License-Identifier: MPL-2.0
//! The closed set of display locales for the zup site, plus the pure helpers
//! that map untrusted input onto it.
//!
//! Two kinds of input arrive here: ordered browser/OS language tags (for the
//! "auto" mode) and raw preference strings from the `lang` query parameter or
//! persisted settings. Both are matched against the closed set; anything else
//! falls through silently.

use std::fmt;
use unic_langid::LanguageIdentifier;

/// Every locale the site ships copy for, in picker order.
pub const SUPPORTED_LOCALES: [SupportedLocale; 3] = [
    SupportedLocale::Ja,
    SupportedLocale::En,
    SupportedLocale::Zh,
];

/// Locale used when detection finds nothing usable.
pub const FALLBACK_LOCALE: SupportedLocale = SupportedLocale::En;

/// A locale the site has a complete copy document for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedLocale {
    Ja,
    En,
    Zh,
}

impl SupportedLocale {
    /// The two-letter code used in URLs, storage, and asset filenames.
    pub fn as_str(self) -> &'static str {
        match self {
            SupportedLocale::Ja => "ja",
            SupportedLocale::En => "en",
            SupportedLocale::Zh => "zh",
        }
    }

    /// Parses an exact lowercase code. Use [`normalize_locale_preference`]
    /// for untrusted input.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ja" => Some(SupportedLocale::Ja),
            "en" => Some(SupportedLocale::En),
            "zh" => Some(SupportedLocale::Zh),
            _ => None,
        }
    }

    /// Typed language identifier for rendering collaborators, e.g. the
    /// `<html lang>` attribute.
    pub fn language_identifier(self) -> LanguageIdentifier {
        self.as_str()
            .parse()
            .expect("Supported locale codes are valid language identifiers.")
    }
}

impl fmt::Display for SupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-facing language choice: a concrete locale, or `Auto` meaning
/// "infer from the browser/OS".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LocalePreference {
    #[default]
    Auto,
    Locale(SupportedLocale),
}

impl LocalePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            LocalePreference::Auto => "auto",
            LocalePreference::Locale(locale) => locale.as_str(),
        }
    }
}

impl From<SupportedLocale> for LocalePreference {
    fn from(locale: SupportedLocale) -> Self {
        LocalePreference::Locale(locale)
    }
}

impl fmt::Display for LocalePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the first supported locale from an ordered list of language tags,
/// most-preferred first.
///
/// Matching is a case-insensitive prefix check on each tag, so `ja-JP`,
/// `zh-Hans-CN`, and `en_US` all resolve. An empty list, or a list with no
/// recognizable tag, yields [`FALLBACK_LOCALE`].
pub fn detect_preferred_locale<'a, I>(languages: I) -> SupportedLocale
where
    I: IntoIterator<Item = &'a str>,
{
    for tag in languages {
        let tag = tag.to_ascii_lowercase();
        if tag.starts_with("ja") {
            return SupportedLocale::Ja;
        }
        if tag.starts_with("zh") {
            return SupportedLocale::Zh;
        }
        if tag.starts_with("en") {
            return SupportedLocale::En;
        }
    }
    FALLBACK_LOCALE
}

/// Validates an untrusted preference string from the `lang` query parameter
/// or persisted settings.
///
/// Trims and lowercases, then requires an exact match against `auto` or a
/// supported locale code. Anything else is `None`, which callers treat as
/// "ignore and fall through" rather than an error.
pub fn normalize_locale_preference(value: &str) -> Option<LocalePreference> {
    match value.trim().to_ascii_lowercase().as_str() {
        "auto" => Some(LocalePreference::Auto),
        code => SupportedLocale::from_code(code).map(LocalePreference::Locale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_honors_tag_order() {
        let locale = detect_preferred_locale(["ja-JP", "en-US"]);
        assert_eq!(locale, SupportedLocale::Ja);
    }

    #[test]
    fn detect_skips_unsupported_tags() {
        let locale = detect_preferred_locale(["fr-FR", "zh-Hans-CN"]);
        assert_eq!(locale, SupportedLocale::Zh);
    }

    #[test]
    fn detect_falls_back_on_no_match() {
        assert_eq!(detect_preferred_locale(["fr-FR"]), SupportedLocale::En);
    }

    #[test]
    fn detect_falls_back_on_empty_list() {
        assert_eq!(
            detect_preferred_locale(std::iter::empty::<&str>()),
            FALLBACK_LOCALE
        );
    }

    #[test]
    fn detect_is_case_insensitive() {
        assert_eq!(detect_preferred_locale(["JA-jp"]), SupportedLocale::Ja);
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(
            normalize_locale_preference(" ZH "),
            Some(LocalePreference::Locale(SupportedLocale::Zh))
        );
    }

    #[test]
    fn normalize_accepts_auto() {
        assert_eq!(
            normalize_locale_preference("AUTO"),
            Some(LocalePreference::Auto)
        );
    }

    #[test]
    fn normalize_rejects_unsupported_codes() {
        assert_eq!(normalize_locale_preference("fr"), None);
        assert_eq!(normalize_locale_preference(""), None);
        assert_eq!(normalize_locale_preference("ja-JP"), None);
    }

    #[test]
    fn preference_round_trips_through_as_str() {
        for locale in SUPPORTED_LOCALES {
            let preference = LocalePreference::from(locale);
            assert_eq!(
                normalize_locale_preference(preference.as_str()),
                Some(preference)
            );
        }
    }

    #[test]
    fn language_identifier_matches_code() {
        for locale in SUPPORTED_LOCALES {
            assert_eq!(locale.language_identifier().language.as_str(), locale.as_str());
        }
    }
}
