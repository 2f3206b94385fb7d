//! Locale type: Flexible, validated locale representation.
//!
//! This module provides the `Locale` type, a copyable handle over a registry
//! entry. Construction goes through the registry, so a `Locale` value is
//! always a member of the supported set.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};

/// A validated locale.
///
/// This type represents a locale that has been validated against the
/// registry. It ensures that only supported, enabled locales can be
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// BCP 47 language tag (e.g., "en", "zh-CN")
    tag: &'static str,
}

impl Locale {
    /// English.
    pub const ENGLISH: Locale = Locale { tag: "en" };

    /// Japanese.
    pub const JAPANESE: Locale = Locale { tag: "ja" };

    /// Simplified Chinese (the site default).
    pub const SIMPLIFIED_CHINESE: Locale = Locale { tag: "zh-CN" };

    /// Traditional Chinese.
    pub const TRADITIONAL_CHINESE: Locale = Locale { tag: "zh-TW" };

    /// Create a Locale from a language tag string.
    ///
    /// # Arguments
    /// * `tag` - The BCP 47 language tag (e.g., "en", "zh-TW")
    ///
    /// # Returns
    /// * `Ok(Locale)` if the tag is valid and the locale is enabled
    /// * `Err` if the tag is not found or the locale is disabled
    ///
    /// # Example
    /// ```ignore
    /// let japanese = Locale::from_tag("ja")?;
    /// ```
    pub fn from_tag(tag: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        match registry.get_by_tag(tag) {
            Some(config) if config.enabled => Ok(Locale {
                tag: config.tag, // Use the static str from the registry
            }),
            Some(_) => bail!("Locale '{}' is not enabled", tag),
            None => bail!("Unknown locale tag: '{}'", tag),
        }
    }

    /// Get the default locale.
    ///
    /// This is the locale used whenever a request carries no usable language
    /// preference, and the target of the single data-source fallback fetch.
    ///
    /// # Returns
    /// The default Locale (Simplified Chinese).
    pub fn default_locale() -> Locale {
        let config = LocaleRegistry::get().default_locale();
        Locale { tag: config.tag }
    }

    /// List all enabled locales.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Locale { tag: config.tag })
            .collect()
    }

    /// Get the BCP 47 language tag.
    ///
    /// # Returns
    /// The tag as a static string (e.g., "en", "zh-CN").
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the tag is not found in the registry. This should never
    /// happen if the Locale was constructed properly (via `from_tag` or the
    /// constants).
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_tag(self.tag)
            .expect("Locale tag should always be valid")
    }

    /// Get the English name of the locale.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the locale.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the default locale.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag)
    }
}
