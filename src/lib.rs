//! Locale-resolving edge gateway and care-center locator API for the
//! multi-locale company site.
//!
//! Every inbound request passes through the routing guard, which resolves
//! the governing locale from the path and `Accept-Language` header and
//! either redirects to a locale-prefixed path or forwards the request. The
//! centers API loads per-locale datasets from a static data source (with a
//! single default-locale fallback) and serves filtered views of them.

pub mod centers;
pub mod config;
pub mod guard;
pub mod handlers;
pub mod i18n;
