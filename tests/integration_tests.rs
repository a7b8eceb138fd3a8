// Integration tests for Basera Algo

use std::collections::HashSet;
use std::sync::Arc;

use basera_algo::core::Matcher;
use basera_algo::models::{
    AmenityWeights, HousingType, LifestyleWeights, TransportMode, UserPreferences,
};
use basera_algo::services::{
    CatalogBuilder, DirectoryClient, LookupCache, MAX_CATALOG_SIZE, MIN_CATALOG_SIZE,
};

fn create_preferences(city: &str, budget: u32) -> UserPreferences {
    UserPreferences {
        work_location: city.to_string(),
        budget,
        family_size: 3,
        transport_mode: TransportMode::Car,
        amenity_preferences: AmenityWeights {
            restaurants: 8,
            schools: 9,
            hospitals: 6,
            parks: 7,
            shopping: 5,
            entertainment: 4,
            gym: 3,
            public_transport: 6,
        },
        lifestyle: LifestyleWeights {
            quietness: 7,
            nightlife: 3,
            walkability: 6,
            green_spaces: 7,
            cultural_activities: 4,
            family_friendly: 9,
        },
        housing_type: HousingType::House,
        commute_tolerance: 50,
    }
}

fn builder_with_mock(server: &mockito::ServerGuard) -> CatalogBuilder {
    let directory = Arc::new(DirectoryClient::new(server.url(), 5));
    let cache = Arc::new(LookupCache::new(100, 60));
    CatalogBuilder::new(directory, cache, 20)
}

fn directory_body(city: &str, count: usize) -> String {
    let rows: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "place_id": 1000 + i,
                "display_name": format!("Zone {}, {}, India", i, city),
                "lat": format!("{}", 19.0 + i as f64 * 0.01),
                "lon": "72.88"
            })
        })
        .collect();
    serde_json::Value::Array(rows).to_string()
}

#[tokio::test]
async fn test_end_to_end_search_and_rank() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(directory_body("Mumbai", 10))
        .create_async()
        .await;

    let builder = builder_with_mock(&server);
    let preferences = create_preferences("Mumbai", 40_000);

    let catalog = builder.build("Mumbai").await;
    assert!(catalog.len() >= MIN_CATALOG_SIZE && catalog.len() <= MAX_CATALOG_SIZE);

    let matcher = Matcher::with_default_weights();
    let ranked = matcher.rank_neighborhoods(&preferences, catalog.clone());

    // Ranking is a sorted permutation of the catalog.
    assert_eq!(ranked.len(), catalog.len());
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score, "matches not sorted by score");
    }
    let catalog_ids: HashSet<&str> = catalog.iter().map(|n| n.id.as_str()).collect();
    let ranked_ids: HashSet<&str> = ranked.iter().map(|m| m.neighborhood.id.as_str()).collect();
    assert_eq!(catalog_ids, ranked_ids);

    // Every score is a bounded integer and every record is complete.
    for m in &ranked {
        assert!(m.score <= 100);
        assert_eq!(m.neighborhood.city, "Mumbai");
        assert!(m.neighborhood.average_rent > 0);
    }
}

#[tokio::test]
async fn test_catalog_bounds_hold_for_any_city() {
    let mut server = mockito::Server::new_async().await;
    // Directory responds 404 for everything: the synthetic side carries it.
    let _mock = server
        .mock("GET", "/search")
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let builder = builder_with_mock(&server);

    for city in ["Delhi", "Mumbai", "Pune", "Jaipur", "Timbuktu", ""] {
        let catalog = builder.build(city).await;
        assert!(
            catalog.len() >= MIN_CATALOG_SIZE && catalog.len() <= MAX_CATALOG_SIZE,
            "catalog for {:?} has {} entries",
            city,
            catalog.len()
        );

        // No duplicate (city, normalized-name) pairs.
        let mut keys = HashSet::new();
        for n in &catalog {
            let slug = n.name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("_");
            assert!(
                keys.insert(format!("{}_{}", n.city, slug)),
                "duplicate entry {} in {:?} catalog",
                n.name,
                city
            );
        }
    }
}

#[tokio::test]
async fn test_directory_entries_rank_alongside_predefined() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(directory_body("Pune", 5))
        .create_async()
        .await;

    let builder = builder_with_mock(&server);
    let catalog = builder.build("Pune").await;

    // Both sources are present in the merged catalog.
    assert!(catalog.iter().any(|n| n.id.starts_with("1000")));
    assert!(catalog.iter().any(|n| n.name == "Koregaon Park"));

    let matcher = Matcher::with_default_weights();
    let ranked = matcher.rank_neighborhoods(&create_preferences("Pune", 30_000), catalog);
    assert!(!ranked.is_empty());
}

#[tokio::test]
async fn test_empty_ranking_for_empty_catalog() {
    let matcher = Matcher::with_default_weights();
    let ranked = matcher.rank_neighborhoods(&create_preferences("Pune", 30_000), Vec::new());
    assert!(ranked.is_empty());
}

#[tokio::test]
async fn test_reasons_and_analysis_are_populated() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let builder = builder_with_mock(&server);
    // Generous budget and tolerance: the top match should justify itself.
    let preferences = create_preferences("Delhi", 120_000);

    let catalog = builder.build("Delhi").await;
    let matcher = Matcher::with_default_weights();
    let ranked = matcher.rank_neighborhoods(&preferences, catalog);

    let top = &ranked[0];
    assert!(
        top.reasons.iter().any(|r| r.starts_with("Rent is within your budget")),
        "expected a budget reason, got {:?}",
        top.reasons
    );
    // Strength/weakness strings follow the fixed phrasing.
    for s in &top.strengths {
        assert!(s.starts_with("Excellent ") || s.starts_with("High "), "{}", s);
    }
    for w in &top.weaknesses {
        assert!(w.starts_with("Limited ") || w.starts_with("Low "), "{}", w);
    }
}
