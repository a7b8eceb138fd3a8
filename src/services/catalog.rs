use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use thiserror::Error;

use crate::core::cities;
use crate::core::generator::synthesize_neighborhood;
use crate::models::{Coordinates, Neighborhood};
use crate::services::cache::{CacheKey, LookupCache};
use crate::services::nominatim::{DirectoryClient, PlaceHit};

/// Catalog floor: pad with synthetic entries below this.
pub const MIN_CATALOG_SIZE: usize = 20;
/// Catalog ceiling: truncate above this.
pub const MAX_CATALOG_SIZE: usize = 30;

/// At most this many directory hits are converted into catalog entries.
const DIRECTORY_CONVERT_LIMIT: usize = 15;

/// Name parts for padded synthetic entries.
const AREA_TYPES: [&str; 8] = [
    "Sector", "Phase", "Extension", "Colony", "Nagar", "Vihar", "Park", "Gardens",
];

/// Padding attempts before assembly gives up on reaching the floor.
const MAX_PAD_ATTEMPTS: usize = 400;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog for {city} stuck below floor: {have}/{min}")]
    FloorNotReached {
        city: String,
        have: usize,
        min: usize,
    },
}

/// Builds the neighborhood catalog considered for one search
///
/// Merges directory-derived records with predefined and padded synthetic
/// records, deduplicates, and bounds the result size. The external
/// contract is availability over fidelity: every failure degrades to
/// synthetic data and the caller always receives a non-empty list.
pub struct CatalogBuilder {
    directory: Arc<DirectoryClient>,
    cache: Arc<LookupCache>,
    search_limit: usize,
}

impl CatalogBuilder {
    pub fn new(directory: Arc<DirectoryClient>, cache: Arc<LookupCache>, search_limit: usize) -> Self {
        Self {
            directory,
            cache,
            search_limit,
        }
    }

    /// Build the neighborhood catalog for a city.
    ///
    /// Never fails and never returns an empty list for any city string:
    /// directory problems degrade to the synthetic side of the merge, and
    /// an assembly failure falls back to the generic area list.
    pub async fn build(&self, city: &str) -> Vec<Neighborhood> {
        let hits = self.directory_hits(city).await;

        let mut rng = rand::thread_rng();
        match assemble_catalog(&mut rng, city, &hits) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!("Catalog assembly failed for {}: {}, using fallback areas", city, e);
                fallback_catalog(&mut rng, city)
            }
        }
    }

    /// Fetch raw directory hits, consulting the lookup cache first.
    ///
    /// Failures are swallowed: the predefined and padded entries carry the
    /// catalog on their own. Only successful lookups are cached.
    async fn directory_hits(&self, city: &str) -> Vec<PlaceHit> {
        let key = CacheKey::neighborhoods(city, self.search_limit);
        if let Some(hits) = self.cache.get(&key).await {
            return hits;
        }

        match self.directory.search(city, self.search_limit).await {
            Ok(hits) => {
                self.cache.insert(key, hits.clone()).await;
                hits
            }
            Err(e) => {
                tracing::warn!("Directory lookup failed for {}: {}", city, e);
                Vec::new()
            }
        }
    }
}

/// Merge, dedup, pad and truncate one catalog.
///
/// Directory-derived entries are concatenated before the predefined list,
/// so first-seen-wins dedup gives them fixed precedence regardless of how
/// the sources were fetched.
pub fn assemble_catalog(
    rng: &mut impl Rng,
    city: &str,
    hits: &[PlaceHit],
) -> Result<Vec<Neighborhood>, CatalogError> {
    let mut catalog: Vec<Neighborhood> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for hit in hits.iter().take(DIRECTORY_CONVERT_LIMIT) {
        let name = hit.area_name().to_string();
        if name.is_empty() || !seen.insert(dedup_key(city, &name)) {
            continue;
        }
        let mut neighborhood = synthesize_neighborhood(rng, city, &name);
        // The hit carries real identity and geometry; the generator
        // fabricates everything else.
        neighborhood.id = hit.place_id.clone();
        neighborhood.coordinates = Coordinates {
            lat: hit.lat,
            lng: hit.lon,
        };
        catalog.push(neighborhood);
    }

    for name in cities::predefined_areas(city) {
        if !seen.insert(dedup_key(city, name)) {
            continue;
        }
        catalog.push(synthesize_neighborhood(rng, city, name));
    }

    // Pad to the floor with "<AreaType> <n>" names, skipping any name the
    // catalog already carries.
    let mut attempts = 0;
    while catalog.len() < MIN_CATALOG_SIZE {
        attempts += 1;
        if attempts > MAX_PAD_ATTEMPTS {
            return Err(CatalogError::FloorNotReached {
                city: city.to_string(),
                have: catalog.len(),
                min: MIN_CATALOG_SIZE,
            });
        }
        let area_type = AREA_TYPES[rng.gen_range(0..AREA_TYPES.len())];
        let name = format!("{} {}", area_type, rng.gen_range(1..=50));
        if !seen.insert(dedup_key(city, &name)) {
            continue;
        }
        catalog.push(synthesize_neighborhood(rng, city, &name));
    }

    catalog.truncate(MAX_CATALOG_SIZE);
    Ok(catalog)
}

/// Dedup key: city plus the lowercased name with whitespace runs
/// collapsed to underscores.
pub fn dedup_key(city: &str, name: &str) -> String {
    let slug = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("{}_{}", city, slug)
}

/// Last-resort catalog from the generic area list; cannot fail.
pub fn fallback_catalog(rng: &mut impl Rng, city: &str) -> Vec<Neighborhood> {
    cities::FALLBACK_AREAS
        .iter()
        .enumerate()
        .map(|(index, area)| {
            let mut neighborhood = synthesize_neighborhood(rng, city, area);
            neighborhood.id = format!("fallback_{}_{}", city, index);
            neighborhood
        })
        .collect()
}
