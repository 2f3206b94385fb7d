//! Client for the static per-locale center datasets.
//!
//! Datasets live at `<base>/data/centers-<locale>.json`. A failed primary
//! fetch triggers exactly one fallback read of the default-locale dataset;
//! there is no retry loop or caching beyond that.

use crate::centers::model::{Center, CentersData};
use crate::i18n::Locale;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors surfaced by the centers data source.
#[derive(Debug, Error)]
pub enum CentersError {
    #[error("centers request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("centers data source returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// Fetches per-locale center datasets from the static data source.
#[derive(Debug, Clone)]
pub struct CentersClient {
    http: reqwest::Client,
    base_url: String,
}

impl CentersClient {
    /// Create a client for the given data-source base URL.
    ///
    /// # Arguments
    /// * `base_url` - Root of the static asset host (trailing slash tolerated)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// URL of the dataset for a locale.
    fn data_url(&self, locale: Locale) -> String {
        format!(
            "{}/data/centers-{}.json",
            self.base_url.trim_end_matches('/'),
            locale.tag()
        )
    }

    /// Fetch the center list for a locale.
    ///
    /// On any primary failure (network error, non-success status, undecodable
    /// body) a single fallback read of the default-locale dataset is
    /// attempted. If that also fails, the fallback's error is returned and
    /// the caller treats the list as empty.
    ///
    /// # Arguments
    /// * `locale` - The locale whose dataset to load
    ///
    /// # Returns
    /// The center records, or a `CentersError` once both reads have failed.
    pub async fn fetch(&self, locale: Locale) -> Result<Vec<Center>, CentersError> {
        match self.fetch_one(locale).await {
            Ok(centers) => Ok(centers),
            Err(err) => {
                let fallback = Locale::default_locale();
                warn!(
                    "Centers fetch for '{}' failed ({}), falling back to '{}'",
                    locale, err, fallback
                );
                self.fetch_one(fallback).await
            }
        }
    }

    /// One dataset read with no fallback.
    async fn fetch_one(&self, locale: Locale) -> Result<Vec<Center>, CentersError> {
        let url = self.data_url(locale);
        debug!("Fetching centers dataset from {}", url);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CentersError::Status(response.status()));
        }

        let data: CentersData = response.json().await?;
        debug!(
            "Loaded {} centers for '{}' (dataset version '{}')",
            data.centers.len(),
            locale,
            data.version
        );
        Ok(data.centers)
    }
}
