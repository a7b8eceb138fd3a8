use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::distance::{estimate_commute_minutes, haversine_distance};
use crate::core::{cities, Matcher};
use crate::models::{ErrorResponse, HealthResponse, MatchEntry, SearchRequest, SearchResponse};
use crate::services::CatalogBuilder;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogBuilder>,
    pub matcher: Matcher,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/neighborhoods/search", web::post().to(search_neighborhoods));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Search neighborhoods endpoint
///
/// POST /api/v1/neighborhoods/search
///
/// Request body:
/// ```json
/// {
///   "workLocation": "Bangalore",
///   "budget": 30000,
///   "familySize": 2,
///   "transportMode": "public_transport",
///   "amenityPreferences": { "restaurants": 7, ... },
///   "lifestyle": { "quietness": 6, ... },
///   "housingType": "apartment",
///   "commuteTolerance": 45
/// }
/// ```
async fn search_neighborhoods(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let preferences = req.into_inner().preferences;
    let city = preferences.work_location.clone();

    tracing::info!("Searching neighborhoods in {}", city);

    let neighborhoods = state.catalog.build(&city).await;
    let total_results = neighborhoods.len();

    tracing::debug!("Built catalog of {} candidates for {}", total_results, city);

    // Rank, then attach geometry relative to the work location.
    let center = cities::city_info(&city).center;
    let matches: Vec<MatchEntry> = state
        .matcher
        .rank_neighborhoods(&preferences, neighborhoods)
        .into_iter()
        .map(|result| {
            let coords = result.neighborhood.coordinates;
            MatchEntry {
                distance_km: haversine_distance(center.lat, center.lng, coords.lat, coords.lng),
                estimated_commute_minutes: estimate_commute_minutes(
                    center.lat,
                    center.lng,
                    coords.lat,
                    coords.lng,
                    preferences.transport_mode,
                ),
                result,
            }
        })
        .collect();

    tracing::info!(
        "Returning {} ranked matches for {} (from {} candidates)",
        matches.len(),
        city,
        total_results
    );

    HttpResponse::Ok().json(SearchResponse {
        city,
        matches,
        total_results,
    })
}
