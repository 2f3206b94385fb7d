//! Locale resolution for inbound request paths.
//!
//! Given a request path and the `Accept-Language` header, the resolver
//! decides which locale governs the request and whether the request must be
//! redirected to a locale-prefixed path. It is a pure, single-pass function
//! with no side effects; malformed header values are skipped rather than
//! reported.

use crate::i18n::{Locale, LocaleRegistry};

/// What the routing guard should do with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    /// Forward the request unchanged.
    PassThrough,
    /// Redirect to the given locale-prefixed path.
    Redirect(String),
}

/// The outcome of resolving a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The locale governing the request. Always a member of the supported
    /// set, falling back to the default locale when nothing else matches.
    pub locale: Locale,
    /// Whether the guard should redirect or forward the request.
    pub action: RouteAction,
}

impl Resolution {
    /// Convenience accessor mirroring the guard's decision.
    pub fn redirect_needed(&self) -> bool {
        matches!(self.action, RouteAction::Redirect(_))
    }
}

/// A single header-matching rule: a base language tag plus optional
/// region/script hints that select a variant.
///
/// Rules are evaluated in table order against each header candidate. A rule
/// matches when the candidate's base tag equals `base` and, if `hints` is
/// non-empty, the candidate contains at least one of the hints.
struct VariantRule {
    base: &'static str,
    hints: &'static [&'static str],
    locale: Locale,
}

/// Ordered preference-matching table.
///
/// The Traditional Chinese rule must precede the unconditional `zh` rule:
/// a `zh-TW`/`zh-HK`/`zh-Hant` candidate resolves Traditional, any other
/// `zh` candidate resolves Simplified.
const VARIANT_RULES: &[VariantRule] = &[
    VariantRule {
        base: "zh",
        hints: &["TW", "HK", "Hant"],
        locale: Locale::TRADITIONAL_CHINESE,
    },
    VariantRule {
        base: "zh",
        hints: &[],
        locale: Locale::SIMPLIFIED_CHINESE,
    },
    VariantRule {
        base: "ja",
        hints: &[],
        locale: Locale::JAPANESE,
    },
    VariantRule {
        base: "en",
        hints: &[],
        locale: Locale::ENGLISH,
    },
];

/// Path prefixes the guard never touches (framework-internal and API routes).
const EXCLUDED_PREFIXES: &[&str] = &["/_next", "/api"];

/// Stateless per-request locale resolver.
///
/// Holds a reference to the immutable locale registry; all supported-set and
/// default-locale knowledge comes from there rather than from free-floating
/// constants.
pub struct LocaleResolver {
    registry: &'static LocaleRegistry,
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleResolver {
    /// Create a resolver backed by the global locale registry.
    pub fn new() -> Self {
        Self {
            registry: LocaleRegistry::get(),
        }
    }

    /// Resolve the effective locale for a request.
    ///
    /// # Arguments
    /// * `path` - The request path (e.g., "/platform", "/ja/contact")
    /// * `accept_language` - The raw `Accept-Language` header value, if any
    ///
    /// # Returns
    /// The governing locale and the action the guard should take. Never
    /// fails: unparseable header values are skipped and the default locale
    /// is used when no candidate matches.
    pub fn resolve(&self, path: &str, accept_language: Option<&str>) -> Resolution {
        // A locale already present in the path is authoritative.
        if let Some(locale) = self.path_locale(path) {
            return Resolution {
                locale,
                action: RouteAction::PassThrough,
            };
        }

        // Framework internals, API routes, and static files pass through
        // untouched regardless of language preference.
        if is_excluded(path) {
            return Resolution {
                locale: Locale::default_locale(),
                action: RouteAction::PassThrough,
            };
        }

        let locale = accept_language
            .and_then(|header| self.preferred_locale(header))
            .unwrap_or_else(Locale::default_locale);

        Resolution {
            action: RouteAction::Redirect(prefixed_path(locale, path)),
            locale,
        }
    }

    /// Extract the locale from a locale-prefixed path, if present.
    ///
    /// Matches `/<tag>` exactly or `/<tag>/...`; `/ja-something` is not a
    /// locale prefix.
    fn path_locale(&self, path: &str) -> Option<Locale> {
        self.registry
            .list_enabled()
            .into_iter()
            .find(|config| {
                let prefix = format!("/{}", config.tag);
                path == prefix || path.starts_with(&format!("{prefix}/"))
            })
            .and_then(|config| Locale::from_tag(config.tag).ok())
    }

    /// Pick the first header candidate that resolves to a supported locale.
    ///
    /// Candidates are taken in header order, quality values stripped. An
    /// exact supported tag wins outright; otherwise the variant rule table
    /// decides. Candidates matching neither are skipped.
    fn preferred_locale(&self, accept_language: &str) -> Option<Locale> {
        accept_language
            .split(',')
            .filter_map(|candidate| {
                let tag = candidate.split(';').next().unwrap_or("").trim();
                if tag.is_empty() {
                    return None;
                }
                self.match_candidate(tag)
            })
            .next()
    }

    /// Match one header candidate against the supported set and rule table.
    fn match_candidate(&self, tag: &str) -> Option<Locale> {
        if self.registry.is_enabled(tag) {
            return Locale::from_tag(tag).ok();
        }

        let base = tag.split('-').next().unwrap_or(tag);
        VARIANT_RULES
            .iter()
            .find(|rule| {
                rule.base == base
                    && (rule.hints.is_empty()
                        || rule.hints.iter().any(|hint| tag.contains(hint)))
            })
            .map(|rule| rule.locale)
    }
}

/// Check whether the guard must leave a path untouched.
///
/// Excluded: framework-internal routes, API routes, and paths whose final
/// segment contains a `.` (static files).
fn is_excluded(path: &str) -> bool {
    if EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
    {
        return true;
    }

    path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
}

/// Build the redirect target by prepending the locale as a new leading
/// segment. The root path becomes `/<locale>` with no trailing slash.
fn prefixed_path(locale: Locale, path: &str) -> String {
    if path == "/" {
        format!("/{}", locale.tag())
    } else {
        format!("/{}{}", locale.tag(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn resolve(path: &str, header: Option<&str>) -> Resolution {
        LocaleResolver::new().resolve(path, header)
    }

    // ==================== Path-Locale Tests ====================

    #[test]
    fn test_prefixed_path_is_authoritative() {
        for locale in Locale::all() {
            let path = format!("/{}", locale.tag());
            let resolution = resolve(&path, Some("fr-FR"));
            assert_eq!(resolution.locale, locale);
            assert_eq!(resolution.action, RouteAction::PassThrough);
        }
    }

    #[test]
    fn test_prefixed_subpath_is_authoritative() {
        let resolution = resolve("/ja/company/centers", Some("en-US"));
        assert_eq!(resolution.locale, Locale::JAPANESE);
        assert!(!resolution.redirect_needed());
    }

    #[test]
    fn test_prefix_requires_segment_boundary() {
        // "/japan" is not the "ja" locale prefix.
        let resolution = resolve("/japan", None);
        assert_eq!(
            resolution.action,
            RouteAction::Redirect("/zh-CN/japan".to_string())
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let first = resolve("/platform", Some("ja"));
        let RouteAction::Redirect(target) = first.action.clone() else {
            panic!("expected a redirect");
        };

        let second = resolve(&target, Some("ja"));
        assert_eq!(second.locale, first.locale);
        assert_eq!(second.action, RouteAction::PassThrough);
    }

    // ==================== Exclusion Tests ====================

    #[test]
    fn test_framework_internal_paths_never_redirect() {
        let resolution = resolve("/_next/static/x.js", Some("ja"));
        assert_eq!(resolution.action, RouteAction::PassThrough);
    }

    #[test]
    fn test_api_paths_never_redirect() {
        let resolution = resolve("/api/foo", Some("ja"));
        assert_eq!(resolution.action, RouteAction::PassThrough);
    }

    #[test]
    fn test_static_file_paths_never_redirect() {
        let resolution = resolve("/favicon.ico", Some("en"));
        assert_eq!(resolution.action, RouteAction::PassThrough);
    }

    #[test]
    fn test_dot_in_intermediate_segment_still_redirects() {
        // Only the final segment decides the static-file exclusion.
        let resolution = resolve("/v1.2/about", Some("en"));
        assert_eq!(
            resolution.action,
            RouteAction::Redirect("/en/v1.2/about".to_string())
        );
    }

    // ==================== Header Parsing Tests ====================

    #[test]
    fn test_quality_values_are_stripped() {
        let resolution = resolve("/platform", Some("ja;q=0.9"));
        assert_eq!(resolution.locale, Locale::JAPANESE);
        assert_eq!(
            resolution.action,
            RouteAction::Redirect("/ja/platform".to_string())
        );
    }

    #[test]
    fn test_exact_tag_match() {
        let resolution = resolve("/", Some("zh-TW,zh;q=0.8"));
        assert_eq!(resolution.locale, Locale::TRADITIONAL_CHINESE);
        assert_eq!(
            resolution.action,
            RouteAction::Redirect("/zh-TW".to_string())
        );
    }

    #[test]
    fn test_regioned_tag_maps_to_base() {
        let resolution = resolve("/contact", Some("ja-JP,en;q=0.5"));
        assert_eq!(resolution.locale, Locale::JAPANESE);
    }

    #[test]
    fn test_english_region_variants() {
        for header in ["en-US", "en-GB", "en-AU,fr;q=0.3"] {
            let resolution = resolve("/contact", Some(header));
            assert_eq!(resolution.locale, Locale::ENGLISH, "header: {header}");
        }
    }

    #[test]
    fn test_chinese_traditional_hints() {
        for header in ["zh-TW", "zh-HK", "zh-Hant", "zh-Hant-TW"] {
            let resolution = resolve("/", Some(header));
            assert_eq!(
                resolution.locale,
                Locale::TRADITIONAL_CHINESE,
                "header: {header}"
            );
        }
    }

    #[test]
    fn test_chinese_defaults_to_simplified() {
        for header in ["zh", "zh-SG", "zh-Hans"] {
            let resolution = resolve("/", Some(header));
            assert_eq!(
                resolution.locale,
                Locale::SIMPLIFIED_CHINESE,
                "header: {header}"
            );
        }
    }

    #[test]
    fn test_candidates_evaluated_in_header_order() {
        let resolution = resolve("/", Some("fr-FR,ja;q=0.8,en;q=0.5"));
        assert_eq!(resolution.locale, Locale::JAPANESE);
    }

    #[test]
    fn test_unsupported_header_falls_back_to_default() {
        let resolution = resolve("/contact", Some("fr-FR"));
        assert_eq!(resolution.locale, Locale::SIMPLIFIED_CHINESE);
        assert_eq!(
            resolution.action,
            RouteAction::Redirect("/zh-CN/contact".to_string())
        );
    }

    #[test]
    fn test_missing_header_falls_back_to_default() {
        let resolution = resolve("/platform", None);
        assert_eq!(resolution.locale, Locale::SIMPLIFIED_CHINESE);
        assert_eq!(
            resolution.action,
            RouteAction::Redirect("/zh-CN/platform".to_string())
        );
    }

    #[test]
    fn test_malformed_header_values_are_skipped() {
        for header in ["", " , ,", ";;;", ";q=0.9, ,ja"] {
            let resolution = resolve("/", Some(header));
            // The last case still finds "ja"; the rest fall back.
            if header.contains("ja") {
                assert_eq!(resolution.locale, Locale::JAPANESE);
            } else {
                assert_eq!(resolution.locale, Locale::SIMPLIFIED_CHINESE);
            }
            assert!(resolution.redirect_needed());
        }
    }

    // ==================== Redirect Target Tests ====================

    #[test]
    fn test_root_redirect_has_no_trailing_slash() {
        let resolution = resolve("/", Some("en"));
        assert_eq!(resolution.action, RouteAction::Redirect("/en".to_string()));
    }

    #[test]
    fn test_redirect_preserves_full_path() {
        let resolution = resolve("/company/centers", Some("zh-TW"));
        assert_eq!(
            resolution.action,
            RouteAction::Redirect("/zh-TW/company/centers".to_string())
        );
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_resolved_locale_is_always_supported(
            path in "/[a-z/]{0,20}",
            header in ".{0,40}",
        ) {
            let resolution = resolve(&path, Some(&header));
            prop_assert!(Locale::all().contains(&resolution.locale));
        }

        #[test]
        fn prop_redirect_target_passes_through_on_second_pass(
            path in "/[a-z][a-z/]{0,20}",
            header in "[a-zA-Z,;=.0-9 -]{0,40}",
        ) {
            let resolver = LocaleResolver::new();
            let first = resolver.resolve(&path, Some(&header));
            if let RouteAction::Redirect(target) = first.action {
                let second = resolver.resolve(&target, Some(&header));
                prop_assert_eq!(second.locale, first.locale);
                prop_assert_eq!(second.action, RouteAction::PassThrough);
            }
        }
    }
}
