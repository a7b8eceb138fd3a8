use crate::models::{
    AmenityCounts, AmenityKind, AmenityWeights, LifestyleKind, LifestyleScores, LifestyleWeights,
    Neighborhood, NeighborhoodMatch, ScoringWeights, UserPreferences,
};

/// Calculate a match (0-100) for a neighborhood against user preferences
///
/// Scoring formula:
/// score = (
///     amenity_score * 0.30 +        # Importance-weighted amenity coverage
///     lifestyle_score * 0.25 +      # Importance-weighted lifestyle fit
///     budget_score * 0.20 +         # Rent vs. budget
///     commute_score * 0.15 +        # Commute vs. tolerance
///     demographics_score * 0.10     # Family-household fit
/// ) * 100
pub fn calculate_match(
    preferences: &UserPreferences,
    neighborhood: Neighborhood,
    weights: &ScoringWeights,
) -> NeighborhoodMatch {
    let amenity = amenity_score(&preferences.amenity_preferences, &neighborhood.amenities);
    let lifestyle = lifestyle_score(&preferences.lifestyle, &neighborhood.lifestyle);
    let budget = budget_score(neighborhood.average_rent, preferences.budget);
    let commute = commute_score(
        neighborhood.transport.average_commute,
        preferences.commute_tolerance,
    );
    let demographics = demographics_score(
        preferences.family_size,
        neighborhood.demographics.family_ratio,
    );

    let total = amenity * weights.amenities
        + lifestyle * weights.lifestyle
        + budget * weights.budget
        + commute * weights.commute
        + demographics * weights.demographics;

    let score = (total * 100.0).round().clamp(0.0, 100.0) as u8;

    let reasons = build_reasons(preferences, &neighborhood, budget, commute);
    let (strengths, weaknesses) = analyze_strengths_weaknesses(&neighborhood);

    NeighborhoodMatch {
        neighborhood,
        score,
        reasons,
        strengths,
        weaknesses,
    }
}

/// Importance-weighted amenity coverage (0-1)
///
/// Each count saturates at 10; weights are the user's 1-10 importances.
#[inline]
pub fn amenity_score(weights: &AmenityWeights, counts: &AmenityCounts) -> f64 {
    let mut score = 0.0;
    let mut total_weight = 0.0;

    for kind in AmenityKind::ALL {
        let importance = weights.get(kind) as f64;
        let normalized = (counts.get(kind) as f64 / 10.0).min(1.0);
        score += normalized * importance;
        total_weight += importance;
    }

    if total_weight > 0.0 {
        score / total_weight
    } else {
        0.0
    }
}

/// Importance-weighted lifestyle fit (0-1)
#[inline]
pub fn lifestyle_score(weights: &LifestyleWeights, scores: &LifestyleScores) -> f64 {
    let mut score = 0.0;
    let mut total_weight = 0.0;

    for kind in LifestyleKind::ALL {
        let importance = weights.get(kind) as f64;
        let normalized = scores.get(kind) as f64 / 10.0;
        score += normalized * importance;
        total_weight += importance;
    }

    if total_weight > 0.0 {
        score / total_weight
    } else {
        0.0
    }
}

/// Stepped affordability score (0-1) from the rent/budget ratio
#[inline]
pub fn budget_score(average_rent: u32, budget: u32) -> f64 {
    let ratio = average_rent as f64 / budget as f64;

    if ratio <= 0.7 {
        1.0 // Very affordable
    } else if ratio <= 0.9 {
        0.8 // Affordable
    } else if ratio <= 1.1 {
        0.6 // Slightly over budget
    } else if ratio <= 1.3 {
        0.3 // Over budget
    } else {
        0.1 // Way over budget
    }
}

/// Stepped commute score (0-1) from the commute/tolerance ratio
#[inline]
pub fn commute_score(average_commute: u32, tolerance: u32) -> f64 {
    let ratio = average_commute as f64 / tolerance as f64;

    if ratio <= 0.5 {
        1.0 // Very short commute
    } else if ratio <= 0.8 {
        0.8 // Acceptable commute
    } else if ratio <= 1.0 {
        0.6 // At tolerance limit
    } else if ratio <= 1.5 {
        0.3 // Over tolerance
    } else {
        0.1 // Way over tolerance
    }
}

/// Family-household fit (0-1); 0.5 base, shifted by the family ratio for
/// households larger than one.
#[inline]
pub fn demographics_score(family_size: u32, family_ratio: f64) -> f64 {
    let mut score = 0.5;

    if family_size > 1 {
        score += (family_ratio - 0.5) * 0.5;
    }

    score.clamp(0.0, 1.0)
}

fn build_reasons(
    preferences: &UserPreferences,
    neighborhood: &Neighborhood,
    budget: f64,
    commute: f64,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if budget > 0.7 {
        reasons.push(format!(
            "Rent is within your budget (₹{})",
            neighborhood.average_rent
        ));
    }

    if commute > 0.7 {
        reasons.push(format!(
            "Short commute time ({} minutes)",
            neighborhood.transport.average_commute
        ));
    }

    // Call out high-priority amenities that are actually plentiful.
    for kind in AmenityKind::ALL {
        if preferences.amenity_preferences.get(kind) >= 8 {
            let count = neighborhood.amenities.get(kind);
            if count > 5 {
                reasons.push(format!(
                    "Great {} availability ({} nearby)",
                    kind.label(),
                    count
                ));
            }
        }
    }

    reasons
}

fn analyze_strengths_weaknesses(neighborhood: &Neighborhood) -> (Vec<String>, Vec<String>) {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    for kind in AmenityKind::ALL {
        let count = neighborhood.amenities.get(kind);
        if count > 8 {
            strengths.push(format!("Excellent {} availability", kind.label()));
        } else if count < 2 {
            weaknesses.push(format!("Limited {} options", kind.label()));
        }
    }

    for kind in LifestyleKind::ALL {
        let value = neighborhood.lifestyle.get(kind);
        if value > 8 {
            strengths.push(format!("High {} score", kind.label()));
        } else if value < 4 {
            weaknesses.push(format!("Low {} score", kind.label()));
        }
    }

    (strengths, weaknesses)
}
