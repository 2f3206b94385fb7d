use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Static data source hosting data/centers-<locale>.json
    pub centers_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Data source
            centers_base_url: std::env::var("CENTERS_BASE_URL")
                .context("CENTERS_BASE_URL not set")?,
        })
    }
}
