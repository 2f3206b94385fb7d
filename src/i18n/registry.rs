//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of the locales served by the
//! site. It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access.

use std::sync::OnceLock;

/// Configuration for a supported locale.
///
/// Contains all metadata for a specific locale, including its BCP 47 tag,
/// names, enabled status, and whether it's the default locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// BCP 47 language tag (e.g., "en", "zh-CN")
    pub tag: &'static str,

    /// English name of the locale (e.g., "English", "Japanese")
    pub name: &'static str,

    /// Native name of the locale (e.g., "日本語", "简体中文")
    pub native_name: &'static str,

    /// Whether this is the default locale (only one should be true)
    pub is_default: bool,

    /// Whether this locale is enabled for use
    pub enabled: bool,
}

/// Global locale registry singleton.
///
/// This registry contains all supported locales and provides methods to query
/// and access them. It's initialized once on first access and remains
/// immutable thereafter.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    ///
    /// This method initializes the registry on first call and returns a
    /// reference to the singleton instance on subsequent calls.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its tag.
    ///
    /// # Arguments
    /// * `tag` - The BCP 47 language tag (e.g., "en", "zh-TW")
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_tag(&self, tag: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.tag == tag)
    }

    /// Get all enabled locales.
    ///
    /// # Returns
    /// A vector of references to all locale configurations where `enabled`
    /// is true.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get the default locale configuration.
    ///
    /// The default locale is used whenever a request carries no usable
    /// language preference. There should be exactly one default locale.
    ///
    /// # Returns
    /// A reference to the default locale configuration.
    ///
    /// # Panics
    /// Panics if no default locale is found or if multiple default locales
    /// are defined (this indicates a configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale tag is supported and enabled.
    ///
    /// # Arguments
    /// * `tag` - The BCP 47 language tag to check
    ///
    /// # Returns
    /// `true` if the locale exists and is enabled, `false` otherwise.
    pub fn is_enabled(&self, tag: &str) -> bool {
        self.get_by_tag(tag)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// Default locale configurations.
///
/// This function returns the set of locales served by the site. Simplified
/// Chinese is the default; the other three are translation targets.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            tag: "en",
            name: "English",
            native_name: "English",
            is_default: false,
            enabled: true,
        },
        LocaleConfig {
            tag: "ja",
            name: "Japanese",
            native_name: "日本語",
            is_default: false,
            enabled: true,
        },
        LocaleConfig {
            tag: "zh-CN",
            name: "Simplified Chinese",
            native_name: "简体中文",
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            tag: "zh-TW",
            name: "Traditional Chinese",
            native_name: "繁體中文",
            is_default: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_tag_english() {
        let registry = LocaleRegistry::get();
        let config = registry.get_by_tag("en");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.tag, "en");
        assert_eq!(config.name, "English");
        assert_eq!(config.native_name, "English");
        assert!(!config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_tag_simplified_chinese() {
        let registry = LocaleRegistry::get();
        let config = registry.get_by_tag("zh-CN");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.tag, "zh-CN");
        assert_eq!(config.native_name, "简体中文");
        assert!(config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_tag_nonexistent() {
        let registry = LocaleRegistry::get();
        let config = registry.get_by_tag("fr");
        assert!(config.is_none());
    }

    #[test]
    fn test_get_by_tag_is_case_sensitive() {
        let registry = LocaleRegistry::get();
        assert!(registry.get_by_tag("zh-cn").is_none());
        assert!(registry.get_by_tag("EN").is_none());
    }

    #[test]
    fn test_list_enabled_contains_all_four() {
        let registry = LocaleRegistry::get();
        let enabled = registry.list_enabled();

        assert_eq!(enabled.len(), 4);
        for tag in ["en", "ja", "zh-CN", "zh-TW"] {
            assert!(enabled.iter().any(|locale| locale.tag == tag));
        }
    }

    #[test]
    fn test_default_locale_is_simplified_chinese() {
        let registry = LocaleRegistry::get();
        let default = registry.default_locale();

        assert_eq!(default.tag, "zh-CN");
        assert!(default.is_default);
    }

    #[test]
    fn test_is_enabled_supported_tags() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_enabled("en"));
        assert!(registry.is_enabled("ja"));
        assert!(registry.is_enabled("zh-CN"));
        assert!(registry.is_enabled("zh-TW"));
    }

    #[test]
    fn test_is_enabled_nonexistent() {
        let registry = LocaleRegistry::get();
        assert!(!registry.is_enabled("fr"));
        assert!(!registry.is_enabled(""));
    }

    #[test]
    fn test_locale_config_clone() {
        let config = LocaleConfig {
            tag: "en",
            name: "English",
            native_name: "English",
            is_default: false,
            enabled: true,
        };

        let cloned = config.clone();
        assert_eq!(config.tag, cloned.tag);
        assert_eq!(config.name, cloned.name);
    }
}
