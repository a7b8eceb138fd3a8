use crate::core::scoring::calculate_match;
use crate::models::{Neighborhood, NeighborhoodMatch, ScoringWeights, UserPreferences};

/// Ranking orchestrator - scores every catalog entry and orders the result
///
/// Scoring itself lives in [`crate::core::scoring`]; the matcher applies it
/// across a catalog and sorts descending. The sort is stable, so entries
/// with equal scores keep their catalog order.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Score and rank a catalog of neighborhoods against user preferences.
    ///
    /// Returns one match per input neighborhood, sorted by descending
    /// composite score. An empty catalog yields an empty ranking.
    pub fn rank_neighborhoods(
        &self,
        preferences: &UserPreferences,
        neighborhoods: Vec<Neighborhood>,
    ) -> Vec<NeighborhoodMatch> {
        let mut matches: Vec<NeighborhoodMatch> = neighborhoods
            .into_iter()
            .map(|neighborhood| calculate_match(preferences, neighborhood, &self.weights))
            .collect();

        matches.sort_by(|a, b| b.score.cmp(&a.score));

        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
