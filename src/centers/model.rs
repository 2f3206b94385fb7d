//! Care-center data model.
//!
//! Mirrors the JSON shape of the per-locale `centers-<locale>.json` datasets
//! published alongside the site (camelCase keys, optional media and tourism
//! fields).

use serde::{Deserialize, Serialize};

/// The two categories of care center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CenterType {
    /// Operated directly by the company.
    Direct,
    /// Operated by a partner organization.
    Partner,
}

/// WGS84 coordinates for map placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A nearby tourism spot listed on a center's detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourismSpot {
    pub name: String,
    #[serde(rename = "type")]
    pub spot_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single care-center entry used by the locator map and list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Center {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(rename = "type")]
    pub center_type: CenterType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    pub city: String,
    pub province: String,
    pub coordinates: Coordinates,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tourism: Option<Vec<TourismSpot>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tourism_intro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Top-level shape of a per-locale dataset.
///
/// A missing `centers` field deserializes as an empty list rather than an
/// error, matching the site's tolerant reading of the data files.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CentersData {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub centers: Vec<Center>,
}
