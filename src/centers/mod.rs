//! Care-center locator: data model, filtering, and dataset client.
//!
//! - `model`: serde types mirroring the published `centers-<locale>.json` shape
//! - `filter`: pure conjunctive filtering (province / type / free text)
//! - `client`: dataset fetch with a single default-locale fallback

mod client;
mod filter;
mod model;

pub use client::{CentersClient, CentersError};
pub use filter::{distinct_provinces, CenterFilter, TypeSelection};
pub use model::{Center, CenterType, CentersData, Coordinates, TourismSpot};
