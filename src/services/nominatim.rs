use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when querying the place directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),
}

/// One raw hit from the place directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceHit {
    pub place_id: String,
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
}

impl PlaceHit {
    /// The area name is the text before the first comma of the display name.
    pub fn area_name(&self) -> &str {
        self.display_name
            .split(',')
            .next()
            .unwrap_or(&self.display_name)
            .trim()
    }
}

/// Raw row shape returned by the directory; lat/lon come back as strings.
#[derive(Debug, Deserialize)]
struct RawPlace {
    #[serde(default)]
    place_id: Option<u64>,
    display_name: String,
    lat: String,
    lon: String,
}

/// Nominatim-style place directory client
///
/// Best-effort collaborator: callers treat every error as an empty result
/// set, so nothing here is fatal to a search.
pub struct DirectoryClient {
    base_url: String,
    client: Client,
}

impl DirectoryClient {
    /// Create a new directory client
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("basera-algo/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Search the directory for areas matching a city name.
    ///
    /// Rows with unparseable coordinates are skipped; rows without a place
    /// id get a coordinate-derived one.
    pub async fn search(&self, city: &str, limit: usize) -> Result<Vec<PlaceHit>, DirectoryError> {
        let url = format!(
            "{}/search?q={}&format=json&limit={}&addressdetails=1&extratags=1",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(city),
            limit
        );

        tracing::debug!("Searching directory: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(DirectoryError::ApiError(format!(
                "Directory search failed: {}",
                response.status()
            )));
        }

        let rows: Vec<RawPlace> = response.json().await?;

        let hits: Vec<PlaceHit> = rows
            .into_iter()
            .filter_map(|row| {
                let lat: f64 = row.lat.parse().ok()?;
                let lon: f64 = row.lon.parse().ok()?;
                let place_id = row
                    .place_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| format!("{}_{}", lat, lon));
                Some(PlaceHit {
                    place_id,
                    display_name: row.display_name,
                    lat,
                    lon,
                })
            })
            .collect();

        tracing::debug!("Directory returned {} usable hits for {}", hits.len(), city);

        Ok(hits)
    }
}
