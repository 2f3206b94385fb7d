//! Client-style filtering over a loaded center list.
//!
//! Pure and deterministic: the same records and filter state always produce
//! the same subset, in input order. The three predicates (province, type,
//! free text) are conjunctive.

use crate::centers::model::{Center, CenterType};

/// Type selection: a specific category or no restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeSelection {
    #[default]
    All,
    Only(CenterType),
}

impl TypeSelection {
    /// Parse the wire form used by the filter UI ("all", "direct", "partner").
    pub fn parse(value: &str) -> Option<TypeSelection> {
        match value {
            "all" => Some(TypeSelection::All),
            "direct" => Some(TypeSelection::Only(CenterType::Direct)),
            "partner" => Some(TypeSelection::Only(CenterType::Partner)),
            _ => None,
        }
    }
}

/// User-selected filter state for the locator view.
///
/// An empty province set means "no restriction"; a blank query matches
/// everything.
#[derive(Debug, Clone, Default)]
pub struct CenterFilter {
    pub provinces: Vec<String>,
    pub center_type: TypeSelection,
    pub query: String,
}

impl CenterFilter {
    /// Apply the filter, keeping input order.
    ///
    /// # Arguments
    /// * `centers` - The full record list loaded for the current locale
    ///
    /// # Returns
    /// The subset of records satisfying all three predicates.
    pub fn apply(&self, centers: &[Center]) -> Vec<Center> {
        centers
            .iter()
            .filter(|center| self.matches(center))
            .cloned()
            .collect()
    }

    /// Whether a single record satisfies all three predicates.
    pub fn matches(&self, center: &Center) -> bool {
        // Filter by province
        if !self.provinces.is_empty() && !self.provinces.contains(&center.province) {
            return false;
        }

        // Filter by type
        if let TypeSelection::Only(center_type) = self.center_type {
            if center.center_type != center_type {
                return false;
            }
        }

        // Filter by search query (name, city, or short name)
        let query = self.query.trim();
        if !query.is_empty() {
            let query = query.to_lowercase();
            let matches_name = center.name.to_lowercase().contains(&query);
            let matches_city = center.city.to_lowercase().contains(&query);
            let matches_short_name = center
                .short_name
                .as_ref()
                .is_some_and(|short| short.to_lowercase().contains(&query));

            if !matches_name && !matches_city && !matches_short_name {
                return false;
            }
        }

        true
    }

    /// Whether any predicate restricts the result set.
    pub fn has_active_filters(&self) -> bool {
        !self.provinces.is_empty()
            || self.center_type != TypeSelection::All
            || !self.query.trim().is_empty()
    }
}

/// The sorted set of distinct provinces present in the full record list.
///
/// Recomputed from scratch whenever the record list changes; used to build
/// the province filter choices.
pub fn distinct_provinces(centers: &[Center]) -> Vec<String> {
    let mut provinces: Vec<String> = centers.iter().map(|c| c.province.clone()).collect();
    provinces.sort();
    provinces.dedup();
    provinces
}
