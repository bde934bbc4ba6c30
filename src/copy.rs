// SPDX-License-Identifier: MPL-2.0
//! The translation table: one complete [`SiteCopy`] document per supported
//! locale, embedded as TOML assets and parsed once on first access.
//!
//! Every field of [`SiteCopy`] is required, so a document missing a
//! translation fails to deserialize. That makes shape parity across locales
//! a build-data invariant rather than a runtime concern.

use crate::locale::{LocalePreference, SupportedLocale, SUPPORTED_LOCALES};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(RustEmbed)]
#[folder = "assets/copy/"]
struct Asset;

/// The full set of translated strings and lists for one locale.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteCopy {
    pub brand: Brand,
    pub features: Features,
    pub footer: Footer,
    pub gallery: Gallery,
    pub hero: Hero,
    pub language: LanguageCopy,
    pub metrics: Vec<Metric>,
    pub nav: Nav,
    pub privacy: Privacy,
    pub seo: Seo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    pub title: String,
    pub lead: String,
    pub cards: Vec<FeatureCard>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Footer {
    pub note: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Gallery {
    pub title: String,
    pub lead: String,
    pub items: Vec<GalleryItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryItem {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub chips: Vec<String>,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub description: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageCopy {
    pub label: String,
    pub options: LanguageOptionLabels,
}

/// Picker labels for every selectable preference, in this locale's language.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageOptionLabels {
    pub auto: String,
    pub ja: String,
    pub en: String,
    pub zh: String,
}

impl LanguageOptionLabels {
    pub fn label(&self, preference: LocalePreference) -> &str {
        match preference {
            LocalePreference::Auto => &self.auto,
            LocalePreference::Locale(SupportedLocale::Ja) => &self.ja,
            LocalePreference::Locale(SupportedLocale::En) => &self.en,
            LocalePreference::Locale(SupportedLocale::Zh) => &self.zh,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Nav {
    pub github: String,
    pub privacy: String,
    pub top: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Privacy {
    pub title: String,
    pub lead: String,
    pub bullets: Vec<String>,
    pub effective_date: String,
    pub repo_cta: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Seo {
    pub home_title: String,
    pub home_description: String,
    pub privacy_title: String,
    pub privacy_description: String,
}

static TRANSLATIONS: LazyLock<HashMap<SupportedLocale, SiteCopy>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for locale in SUPPORTED_LOCALES {
        let filename = format!("{}.toml", locale.as_str());
        let content = Asset::get(&filename).expect("Missing embedded copy document.");
        let text = std::str::from_utf8(content.data.as_ref())
            .expect("Copy document is not valid UTF-8.");
        let copy: SiteCopy = toml::from_str(text).expect("Failed to parse copy document.");
        table.insert(locale, copy);
    }
    table
});

/// Looks up the copy document for a locale. Total: the closed
/// [`SupportedLocale`] set guarantees every locale has a document.
pub fn copy_for(locale: SupportedLocale) -> &'static SiteCopy {
    &TRANSLATIONS[&locale]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_has_a_document() {
        for locale in SUPPORTED_LOCALES {
            let copy = copy_for(locale);
            assert_eq!(copy.brand.name, "zup");
            assert!(!copy.hero.title.is_empty());
        }
    }

    #[test]
    fn documents_share_list_shapes() {
        let reference = copy_for(SupportedLocale::En);
        for locale in SUPPORTED_LOCALES {
            let copy = copy_for(locale);
            assert_eq!(copy.features.cards.len(), reference.features.cards.len());
            assert_eq!(copy.gallery.items.len(), reference.gallery.items.len());
            assert_eq!(copy.metrics.len(), reference.metrics.len());
            assert_eq!(copy.hero.chips.len(), reference.hero.chips.len());
            assert_eq!(copy.privacy.bullets.len(), reference.privacy.bullets.len());
        }
    }

    #[test]
    fn gallery_sources_are_locale_independent() {
        let reference = copy_for(SupportedLocale::En);
        for locale in SUPPORTED_LOCALES {
            let items = &copy_for(locale).gallery.items;
            for (item, expected) in items.iter().zip(&reference.gallery.items) {
                assert_eq!(item.src, expected.src);
            }
        }
    }

    #[test]
    fn option_labels_cover_every_preference() {
        let labels = &copy_for(SupportedLocale::En).language.options;
        assert_eq!(labels.label(LocalePreference::Auto), "Auto");
        assert_eq!(
            labels.label(LocalePreference::Locale(SupportedLocale::Ja)),
            "Japanese"
        );
    }
}
