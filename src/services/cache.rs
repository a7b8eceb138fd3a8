use std::time::Duration;

use crate::services::nominatim::PlaceHit;

/// Time-bounded in-memory cache for directory lookups
///
/// Entries expire after the configured freshness window; expired or absent
/// keys force a refetch. The underlying cache is safe to share across
/// concurrent searches.
pub struct LookupCache {
    entries: moka::future::Cache<String, Vec<PlaceHit>>,
}

impl LookupCache {
    /// Create a new lookup cache
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { entries }
    }

    /// Get fresh hits for a key, if present
    pub async fn get(&self, key: &str) -> Option<Vec<PlaceHit>> {
        let hits = self.entries.get(key).await;
        if hits.is_some() {
            tracing::trace!("Lookup cache hit: {}", key);
        } else {
            tracing::trace!("Lookup cache miss: {}", key);
        }
        hits
    }

    /// Store hits for a key
    pub async fn insert(&self, key: String, hits: Vec<PlaceHit>) {
        self.entries.insert(key, hits).await;
    }

    /// Number of live entries (approximate)
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a directory neighborhood search
    pub fn neighborhoods(city: &str, limit: usize) -> String {
        format!("neighborhoods:{}:{}", city.to_lowercase(), limit)
    }
}
