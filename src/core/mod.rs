// Core algorithm exports
pub mod cities;
pub mod distance;
pub mod generator;
pub mod matcher;
pub mod scoring;
pub mod tags;

pub use distance::{estimate_commute_minutes, haversine_distance};
pub use generator::synthesize_neighborhood;
pub use matcher::Matcher;
pub use scoring::calculate_match;
pub use tags::{area_tags, AreaTag, AreaTagSet};
