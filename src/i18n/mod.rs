//! Internationalization (i18n) module for multi-locale routing.
//!
//! This module provides a centralized architecture for the locales the site
//! serves and for deciding, per request, which locale governs it.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Type-safe Locale handle validated against the registry
//! - `resolver`: Per-request locale resolution and redirect decision
//!
//! # Example
//!
//! ```rust,ignore
//! use caresite_gateway::i18n::{Locale, LocaleResolver};
//!
//! let resolver = LocaleResolver::new();
//! let resolution = resolver.resolve("/platform", Some("ja;q=0.9"));
//! assert_eq!(resolution.locale, Locale::JAPANESE);
//! ```

mod locale;
mod registry;
mod resolver;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use resolver::{LocaleResolver, Resolution, RouteAction};
