use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// How the user gets to work. Drives commute estimation speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Walking,
    Cycling,
    PublicTransport,
    Car,
}

impl TransportMode {
    /// Rough average speed used for straight-line commute estimates.
    pub fn speed_kmh(self) -> f64 {
        match self {
            TransportMode::Walking => 5.0,
            TransportMode::Cycling => 15.0,
            TransportMode::PublicTransport => 25.0,
            TransportMode::Car => 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HousingType {
    Apartment,
    House,
    Any,
}

/// The eight amenity categories tracked for every neighborhood.
///
/// `ALL` fixes the iteration order used for scoring, reasons and
/// strength/weakness generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmenityKind {
    Restaurants,
    Schools,
    Hospitals,
    Parks,
    Shopping,
    Entertainment,
    Gym,
    PublicTransport,
}

impl AmenityKind {
    pub const ALL: [AmenityKind; 8] = [
        AmenityKind::Restaurants,
        AmenityKind::Schools,
        AmenityKind::Hospitals,
        AmenityKind::Parks,
        AmenityKind::Shopping,
        AmenityKind::Entertainment,
        AmenityKind::Gym,
        AmenityKind::PublicTransport,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            AmenityKind::Restaurants => "restaurants",
            AmenityKind::Schools => "schools",
            AmenityKind::Hospitals => "hospitals",
            AmenityKind::Parks => "parks",
            AmenityKind::Shopping => "shopping",
            AmenityKind::Entertainment => "entertainment",
            AmenityKind::Gym => "gym",
            AmenityKind::PublicTransport => "public transport",
        }
    }
}

/// The six lifestyle aspects scored 0-10 for every neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifestyleKind {
    Quietness,
    Nightlife,
    Walkability,
    GreenSpaces,
    CulturalActivities,
    FamilyFriendly,
}

impl LifestyleKind {
    pub const ALL: [LifestyleKind; 6] = [
        LifestyleKind::Quietness,
        LifestyleKind::Nightlife,
        LifestyleKind::Walkability,
        LifestyleKind::GreenSpaces,
        LifestyleKind::CulturalActivities,
        LifestyleKind::FamilyFriendly,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            LifestyleKind::Quietness => "quietness",
            LifestyleKind::Nightlife => "nightlife",
            LifestyleKind::Walkability => "walkability",
            LifestyleKind::GreenSpaces => "green spaces",
            LifestyleKind::CulturalActivities => "cultural activities",
            LifestyleKind::FamilyFriendly => "family friendliness",
        }
    }
}

/// Per-category amenity counts for a neighborhood.
///
/// The key set is closed: every neighborhood carries all eight counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmenityCounts {
    pub restaurants: u32,
    pub schools: u32,
    pub hospitals: u32,
    pub parks: u32,
    pub shopping: u32,
    pub entertainment: u32,
    pub gym: u32,
    pub public_transport: u32,
}

impl AmenityCounts {
    pub fn get(&self, kind: AmenityKind) -> u32 {
        match kind {
            AmenityKind::Restaurants => self.restaurants,
            AmenityKind::Schools => self.schools,
            AmenityKind::Hospitals => self.hospitals,
            AmenityKind::Parks => self.parks,
            AmenityKind::Shopping => self.shopping,
            AmenityKind::Entertainment => self.entertainment,
            AmenityKind::Gym => self.gym,
            AmenityKind::PublicTransport => self.public_transport,
        }
    }
}

/// User-stated importance (1-10) for each amenity category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AmenityWeights {
    #[validate(range(min = 1, max = 10))]
    pub restaurants: u8,
    #[validate(range(min = 1, max = 10))]
    pub schools: u8,
    #[validate(range(min = 1, max = 10))]
    pub hospitals: u8,
    #[validate(range(min = 1, max = 10))]
    pub parks: u8,
    #[validate(range(min = 1, max = 10))]
    pub shopping: u8,
    #[validate(range(min = 1, max = 10))]
    pub entertainment: u8,
    #[validate(range(min = 1, max = 10))]
    pub gym: u8,
    #[validate(range(min = 1, max = 10))]
    pub public_transport: u8,
}

impl AmenityWeights {
    pub fn get(&self, kind: AmenityKind) -> u8 {
        match kind {
            AmenityKind::Restaurants => self.restaurants,
            AmenityKind::Schools => self.schools,
            AmenityKind::Hospitals => self.hospitals,
            AmenityKind::Parks => self.parks,
            AmenityKind::Shopping => self.shopping,
            AmenityKind::Entertainment => self.entertainment,
            AmenityKind::Gym => self.gym,
            AmenityKind::PublicTransport => self.public_transport,
        }
    }
}

/// Lifestyle scores (0-10) for a neighborhood.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleScores {
    pub quietness: u8,
    pub nightlife: u8,
    pub walkability: u8,
    pub green_spaces: u8,
    pub cultural_activities: u8,
    pub family_friendly: u8,
}

impl LifestyleScores {
    pub fn get(&self, kind: LifestyleKind) -> u8 {
        match kind {
            LifestyleKind::Quietness => self.quietness,
            LifestyleKind::Nightlife => self.nightlife,
            LifestyleKind::Walkability => self.walkability,
            LifestyleKind::GreenSpaces => self.green_spaces,
            LifestyleKind::CulturalActivities => self.cultural_activities,
            LifestyleKind::FamilyFriendly => self.family_friendly,
        }
    }
}

/// User-stated importance (1-10) for each lifestyle aspect.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleWeights {
    #[validate(range(min = 1, max = 10))]
    pub quietness: u8,
    #[validate(range(min = 1, max = 10))]
    pub nightlife: u8,
    #[validate(range(min = 1, max = 10))]
    pub walkability: u8,
    #[validate(range(min = 1, max = 10))]
    pub green_spaces: u8,
    #[validate(range(min = 1, max = 10))]
    pub cultural_activities: u8,
    #[validate(range(min = 1, max = 10))]
    pub family_friendly: u8,
}

impl LifestyleWeights {
    pub fn get(&self, kind: LifestyleKind) -> u8 {
        match kind {
            LifestyleKind::Quietness => self.quietness,
            LifestyleKind::Nightlife => self.nightlife,
            LifestyleKind::Walkability => self.walkability,
            LifestyleKind::GreenSpaces => self.green_spaces,
            LifestyleKind::CulturalActivities => self.cultural_activities,
            LifestyleKind::FamilyFriendly => self.family_friendly,
        }
    }
}

/// Geographic point in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub population: u32,
    pub average_age: u32,
    /// Share of family households, in [0, 1].
    pub family_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transport {
    /// Nearest metro line, or the literal "Not Available".
    pub nearest_metro: String,
    /// Distance to the nearest metro stop in meters; -1 means no metro.
    pub metro_distance: i32,
    pub bus_stops: u32,
    /// Average commute in minutes.
    pub average_commute: u32,
}

/// A candidate residential area, generated fresh per search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
    pub city: String,
    pub state: String,
    pub average_rent: u32,
    pub amenities: AmenityCounts,
    pub lifestyle: LifestyleScores,
    pub demographics: Demographics,
    pub transport: Transport,
}

/// Housing-search preferences as submitted by the form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[validate(custom(function = validate_work_location))]
    pub work_location: String,
    /// Monthly budget in rupees.
    #[validate(range(min = 5000, max = 200000))]
    pub budget: u32,
    #[validate(range(min = 1))]
    pub family_size: u32,
    pub transport_mode: TransportMode,
    #[validate(nested)]
    pub amenity_preferences: AmenityWeights,
    #[validate(nested)]
    pub lifestyle: LifestyleWeights,
    pub housing_type: HousingType,
    /// Acceptable one-way commute in minutes.
    #[validate(range(min = 10, max = 120))]
    pub commute_tolerance: u32,
}

fn validate_work_location(city: &str) -> Result<(), ValidationError> {
    if crate::core::cities::is_known_city(city) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_city"))
    }
}

/// Scored match result for one (preferences, neighborhood) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborhoodMatch {
    pub neighborhood: Neighborhood,
    /// Composite suitability score, integer in [0, 100].
    pub score: u8,
    pub reasons: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub amenities: f64,
    pub lifestyle: f64,
    pub budget: f64,
    pub commute: f64,
    pub demographics: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            amenities: 0.30,
            lifestyle: 0.25,
            budget: 0.20,
            commute: 0.15,
            demographics: 0.10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_mode_speeds() {
        assert_eq!(TransportMode::Walking.speed_kmh(), 5.0);
        assert_eq!(TransportMode::Cycling.speed_kmh(), 15.0);
        assert_eq!(TransportMode::PublicTransport.speed_kmh(), 25.0);
        assert_eq!(TransportMode::Car.speed_kmh(), 30.0);
    }

    #[test]
    fn test_transport_mode_wire_format() {
        let mode: TransportMode = serde_json::from_str("\"public_transport\"").unwrap();
        assert_eq!(mode, TransportMode::PublicTransport);
        assert_eq!(serde_json::to_string(&mode).unwrap(), "\"public_transport\"");
    }

    #[test]
    fn test_amenity_kind_order_is_closed() {
        // Every kind resolves to a distinct index within the eight slots.
        let mut seen = [false; 8];
        for kind in AmenityKind::ALL {
            assert!(!seen[kind.index()]);
            seen[kind.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoringWeights::default();
        let sum = weights.amenities + weights.lifestyle + weights.budget
            + weights.commute + weights.demographics;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_preferences_reject_unknown_city() {
        let prefs = UserPreferences {
            work_location: "Atlantis".to_string(),
            budget: 25000,
            family_size: 2,
            transport_mode: TransportMode::Car,
            amenity_preferences: AmenityWeights {
                restaurants: 5,
                schools: 5,
                hospitals: 5,
                parks: 5,
                shopping: 5,
                entertainment: 5,
                gym: 5,
                public_transport: 5,
            },
            lifestyle: LifestyleWeights {
                quietness: 5,
                nightlife: 5,
                walkability: 5,
                green_spaces: 5,
                cultural_activities: 5,
                family_friendly: 5,
            },
            housing_type: HousingType::Any,
            commute_tolerance: 45,
        };

        assert!(prefs.validate().is_err());

        let mut valid = prefs;
        valid.work_location = "Pune".to_string();
        assert!(valid.validate().is_ok());
    }
}
