//! Synthetic neighborhood generation.
//!
//! Stands in for real third-party data: every record is fabricated from
//! seeded ranges plus rule-based adjustments keyed on area-name tags and
//! city tier. Exact values are randomized; only the field set and the
//! documented value ranges are contractual. All entry points take a
//! caller-supplied RNG so tests can pin a seed.

use rand::Rng;

use crate::core::cities;
use crate::core::tags::{area_tags, AreaTag, AreaTagSet};
use crate::models::{
    AmenityCounts, AmenityKind, Coordinates, Demographics, LifestyleKind, LifestyleScores,
    Neighborhood, Transport,
};

/// Base draw ranges per amenity, aligned with `AmenityKind::ALL`.
const AMENITY_BASE: [(u32, u32); 8] = [
    (8, 20),  // restaurants
    (3, 9),   // schools
    (2, 6),   // hospitals
    (2, 7),   // parks
    (5, 13),  // shopping
    (3, 9),   // entertainment
    (2, 6),   // gym
    (5, 15),  // public transport
];

/// Multiplicative amenity boosts per tag; boosts compound when an area
/// carries several tags.
const AMENITY_BOOSTS: &[(AreaTag, &[(AmenityKind, f64)])] = &[
    (
        AreaTag::Business,
        &[
            (AmenityKind::Restaurants, 1.5),
            (AmenityKind::Shopping, 1.3),
            (AmenityKind::Entertainment, 1.4),
            (AmenityKind::PublicTransport, 1.2),
        ],
    ),
    (
        AreaTag::Residential,
        &[
            (AmenityKind::Schools, 1.4),
            (AmenityKind::Parks, 1.3),
            (AmenityKind::Hospitals, 1.2),
        ],
    ),
    (
        AreaTag::Upscale,
        &[
            (AmenityKind::Gym, 1.5),
            (AmenityKind::Parks, 1.4),
            (AmenityKind::Entertainment, 1.2),
        ],
    ),
];

/// Base draw ranges per lifestyle aspect, aligned with `LifestyleKind::ALL`.
const LIFESTYLE_BASE: [(u8, u8); 6] = [
    (5, 8), // quietness
    (4, 8), // nightlife
    (5, 8), // walkability
    (4, 8), // green spaces
    (4, 8), // cultural activities
    (6, 9), // family friendly
];

/// Additive lifestyle adjustments per tag, applied before the final
/// clamp to [0, 10].
const LIFESTYLE_ADJUSTMENTS: &[(AreaTag, &[(LifestyleKind, i32)])] = &[
    (
        AreaTag::Central,
        &[
            (LifestyleKind::Quietness, -2),
            (LifestyleKind::Nightlife, 3),
            (LifestyleKind::Walkability, 2),
        ],
    ),
    (
        AreaTag::Upscale,
        &[
            (LifestyleKind::Quietness, 2),
            (LifestyleKind::GreenSpaces, 3),
            (LifestyleKind::FamilyFriendly, 1),
        ],
    ),
    (
        AreaTag::Heritage,
        &[
            (LifestyleKind::CulturalActivities, 3),
            (LifestyleKind::Walkability, -1),
        ],
    ),
];

/// Rent uplift for areas tagged premium.
const PREMIUM_RENT_FACTOR: f64 = 1.3;

/// Produce a complete, internally consistent neighborhood record for a
/// (city, area name) pair.
pub fn synthesize_neighborhood(rng: &mut impl Rng, city: &str, name: &str) -> Neighborhood {
    let info = cities::city_info(city);
    let tags = area_tags(name);

    Neighborhood {
        id: synthetic_id(city, name),
        name: name.to_string(),
        coordinates: scatter_around(rng, info.center),
        city: city.to_string(),
        state: info.state.to_string(),
        average_rent: estimate_rent(rng, info.base_rent, tags),
        amenities: generate_amenities(rng, info.tier_multiplier, tags),
        lifestyle: generate_lifestyle(rng, info.has_metro, tags),
        demographics: generate_demographics(rng),
        transport: generate_transport(rng, city, info.has_metro, tags),
    }
}

/// Identifier for a generated record, unique per (city, name).
pub fn synthetic_id(city: &str, name: &str) -> String {
    let slug = name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("predefined_{}_{}", city, slug)
}

/// Scatter a point up to ±0.1 degrees around the city center.
fn scatter_around(rng: &mut impl Rng, center: Coordinates) -> Coordinates {
    Coordinates {
        lat: center.lat + (rng.gen::<f64>() - 0.5) * 0.2,
        lng: center.lng + (rng.gen::<f64>() - 0.5) * 0.2,
    }
}

fn generate_amenities(rng: &mut impl Rng, tier_multiplier: f64, tags: AreaTagSet) -> AmenityCounts {
    let mut counts = [0.0f64; 8];
    for (slot, (lo, hi)) in counts.iter_mut().zip(AMENITY_BASE) {
        *slot = rng.gen_range(lo..hi) as f64;
    }

    for (tag, boosts) in AMENITY_BOOSTS {
        if !tags.contains(*tag) {
            continue;
        }
        for &(kind, factor) in *boosts {
            counts[kind.index()] *= factor;
        }
    }

    let count = |kind: AmenityKind| (counts[kind.index()] * tier_multiplier).round() as u32;
    AmenityCounts {
        restaurants: count(AmenityKind::Restaurants),
        schools: count(AmenityKind::Schools),
        hospitals: count(AmenityKind::Hospitals),
        parks: count(AmenityKind::Parks),
        shopping: count(AmenityKind::Shopping),
        entertainment: count(AmenityKind::Entertainment),
        gym: count(AmenityKind::Gym),
        public_transport: count(AmenityKind::PublicTransport),
    }
}

fn generate_lifestyle(rng: &mut impl Rng, has_metro: bool, tags: AreaTagSet) -> LifestyleScores {
    let mut values = [0i32; 6];
    for (slot, (lo, hi)) in values.iter_mut().zip(LIFESTYLE_BASE) {
        *slot = rng.gen_range(lo..hi) as i32;
    }

    for (tag, adjustments) in LIFESTYLE_ADJUSTMENTS {
        if !tags.contains(*tag) {
            continue;
        }
        for &(kind, delta) in *adjustments {
            values[kind.index()] += delta;
        }
    }

    if has_metro {
        values[LifestyleKind::Nightlife.index()] += 1;
        values[LifestyleKind::CulturalActivities.index()] += 1;
    }

    let score = |kind: LifestyleKind| values[kind.index()].clamp(0, 10) as u8;
    LifestyleScores {
        quietness: score(LifestyleKind::Quietness),
        nightlife: score(LifestyleKind::Nightlife),
        walkability: score(LifestyleKind::Walkability),
        green_spaces: score(LifestyleKind::GreenSpaces),
        cultural_activities: score(LifestyleKind::CulturalActivities),
        family_friendly: score(LifestyleKind::FamilyFriendly),
    }
}

fn generate_demographics(rng: &mut impl Rng) -> Demographics {
    Demographics {
        population: rng.gen_range(30_000..110_000),
        average_age: rng.gen_range(25..45),
        family_ratio: rng.gen_range(0.3..0.8),
    }
}

fn generate_transport(
    rng: &mut impl Rng,
    city: &str,
    has_metro: bool,
    tags: AreaTagSet,
) -> Transport {
    let hub = tags.contains(AreaTag::TransitHub);

    let metro_distance = if !has_metro {
        -1
    } else if hub {
        rng.gen_range(100..900)
    } else {
        rng.gen_range(200..3200)
    };

    let bus_stops = if hub {
        rng.gen_range(8..16)
    } else {
        rng.gen_range(3..15)
    };

    let average_commute = if hub {
        rng.gen_range(10..35)
    } else {
        rng.gen_range(15..65)
    };

    let nearest_metro = if has_metro {
        format!("{} Metro Line {}", city, rng.gen_range(1..=6))
    } else {
        "Not Available".to_string()
    };

    Transport {
        nearest_metro,
        metro_distance,
        bus_stops,
        average_commute,
    }
}

fn estimate_rent(rng: &mut impl Rng, base_rent: u32, tags: AreaTagSet) -> u32 {
    let mut rent = base_rent as f64;
    if tags.contains(AreaTag::Premium) {
        rent *= PREMIUM_RENT_FACTOR;
    }
    rent *= rng.gen_range(0.6..1.4);
    rent.round() as u32
}
