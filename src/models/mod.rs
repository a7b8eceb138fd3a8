// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AmenityCounts, AmenityKind, AmenityWeights, Coordinates, Demographics, HousingType,
    LifestyleKind, LifestyleScores, LifestyleWeights, Neighborhood, NeighborhoodMatch,
    ScoringWeights, Transport, TransportMode, UserPreferences,
};
pub use requests::SearchRequest;
pub use responses::{ErrorResponse, HealthResponse, MatchEntry, SearchResponse};
