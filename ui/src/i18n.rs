//! Internationalization (i18n) support for `spendwise-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language negotiation + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/spendwise_ui.ftl   (fallback/reference)
//!   es/spendwise_ui.ftl
//!   fr/spendwise_ui.ftl
//! ```
//!
//! Every embedded locale is resolved once into a typed [`TranslationBundle`]
//! and kept in an immutable [`TranslationTable`]. Views never format Fluent
//! messages themselves; they read fields off a bundle.
//!
//! To add a new locale:
//! 1. Copy `en/spendwise_ui.ftl` to `i18n/<code>/spendwise_ui.ftl`.
//! 2. Translate each message value (keep IDs identical).
//! 3. Run tests to ensure completeness.
use std::collections::BTreeMap;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::bundle::{
    DashboardText, FeatureText, FeaturesText, HeroText, NavText, TranslationBundle,
};

pub use i18n_embed_fl::fl;

/// Fluent "domain": the normalized crate name `fl!` derives, which is also
/// the FTL filename inside every locale folder.
const DOMAIN: &str = "spendwise_ui";

/// Code of the bundle used when a requested code is not in the table.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("unsupported language `{0}`")]
    UnsupportedLanguage(String),
    #[error("locale folder `{0}` is not a valid language identifier")]
    InvalidLanguageTag(String),
    #[error("no bundle for fallback language `{0}`")]
    MissingFallback(String),
    #[error(transparent)]
    Load(#[from] i18n_embed::I18nEmbedError),
}

/// Global table built from the embedded locales on first access.
pub static TRANSLATIONS: Lazy<TranslationTable> = Lazy::new(|| {
    TranslationTable::load().unwrap_or_else(|err| {
        tracing::error!(%err, "embedded translations failed to load");
        panic!("embedded translations are invalid: {err}")
    })
});

/// Shorthand for the global table.
pub fn translations() -> &'static TranslationTable {
    &TRANSLATIONS
}

/// Immutable mapping from language code to bundle.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    bundles: BTreeMap<String, TranslationBundle>,
    fallback_code: String,
    fallback: TranslationBundle,
}

impl TranslationTable {
    /// Build a table from already resolved bundles. `fallback_code` must be
    /// one of the keys.
    pub fn new(
        bundles: BTreeMap<String, TranslationBundle>,
        fallback_code: &str,
    ) -> Result<Self, TranslationError> {
        let fallback = bundles
            .get(fallback_code)
            .cloned()
            .ok_or_else(|| TranslationError::MissingFallback(fallback_code.to_owned()))?;
        Ok(Self {
            bundles,
            fallback_code: fallback_code.to_owned(),
            fallback,
        })
    }

    /// Resolve every embedded locale.
    pub fn load() -> Result<Self, TranslationError> {
        let fallback_id = parse_code(DEFAULT_LANGUAGE)?;
        let mut bundles = BTreeMap::new();

        for code in available_languages() {
            let lang = parse_code(&code)?;
            let loader = FluentLanguageLoader::new(DOMAIN, fallback_id.clone());
            i18n_embed::select(&loader, &Localizations, &[lang])?;
            bundles.insert(code, bundle_from_loader(&loader));
        }

        tracing::debug!(languages = bundles.len(), "translation table loaded");
        Self::new(bundles, DEFAULT_LANGUAGE)
    }

    /// Exact-match lookup. No normalization is applied to `code`.
    pub fn lookup(&self, code: &str) -> Option<&TranslationBundle> {
        self.bundles.get(code)
    }

    /// Lookup that fails fast on an unknown code.
    pub fn require(&self, code: &str) -> Result<&TranslationBundle, TranslationError> {
        self.lookup(code)
            .ok_or_else(|| TranslationError::UnsupportedLanguage(code.to_owned()))
    }

    /// Lookup that substitutes the fallback bundle, whole, for an unknown code.
    pub fn resolve(&self, code: &str) -> &TranslationBundle {
        match self.lookup(code) {
            Some(bundle) => bundle,
            None => {
                tracing::warn!(
                    requested = code,
                    fallback = %self.fallback_code,
                    "unsupported language, rendering fallback bundle"
                );
                &self.fallback
            }
        }
    }

    pub fn fallback_code(&self) -> &str {
        &self.fallback_code
    }

    /// Supported codes, sorted.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.bundles.contains_key(code)
    }
}

fn parse_code(code: &str) -> Result<LanguageIdentifier, TranslationError> {
    code.parse()
        .map_err(|_| TranslationError::InvalidLanguageTag(code.to_owned()))
}

fn bundle_from_loader(loader: &FluentLanguageLoader) -> TranslationBundle {
    TranslationBundle {
        hero: HeroText {
            title: fl!(loader, "hero-title"),
            subtitle: fl!(loader, "hero-subtitle"),
            description: fl!(loader, "hero-description"),
            cta: fl!(loader, "hero-cta"),
        },
        features: FeaturesText {
            title: fl!(loader, "features-title"),
            subtitle: fl!(loader, "features-subtitle"),
            ai_powered: FeatureText {
                title: fl!(loader, "feature-ai-powered"),
                description: fl!(loader, "feature-ai-powered-description"),
            },
            real_time: FeatureText {
                title: fl!(loader, "feature-real-time"),
                description: fl!(loader, "feature-real-time-description"),
            },
            privacy: FeatureText {
                title: fl!(loader, "feature-privacy"),
                description: fl!(loader, "feature-privacy-description"),
            },
            user_friendly: FeatureText {
                title: fl!(loader, "feature-user-friendly"),
                description: fl!(loader, "feature-user-friendly-description"),
            },
        },
        nav: NavText {
            brand_tagline: fl!(loader, "brand-tagline"),
            language_label: fl!(loader, "nav-language-label"),
        },
        dashboard: DashboardText {
            title: fl!(loader, "dashboard-title"),
            body: fl!(loader, "dashboard-body"),
        },
    }
}

/// List available (embedded) language codes.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// First OS/browser preferred language whose primary subtag is in the
/// table, or [`DEFAULT_LANGUAGE`].
pub fn preferred_language() -> String {
    let table = translations();
    requested_languages()
        .iter()
        .map(|lang| lang.language.as_str().to_owned())
        .find(|code| table.contains(code))
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned())
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
