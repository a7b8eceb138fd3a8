use serde::{Deserialize, Serialize};

use crate::models::domain::NeighborhoodMatch;

/// One ranked match plus geometry derived at response-build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    #[serde(flatten)]
    pub result: NeighborhoodMatch,
    /// Straight-line distance from the city center in kilometers.
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    /// Commute estimate for the user's transport mode.
    #[serde(rename = "estimatedCommuteMinutes")]
    pub estimated_commute_minutes: u32,
}

/// Response for the neighborhood search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub city: String,
    pub matches: Vec<MatchEntry>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
