// Criterion benchmarks for Basera Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use basera_algo::core::{
    distance::haversine_distance, generator::synthesize_neighborhood, scoring::calculate_match,
    Matcher,
};
use basera_algo::models::{
    AmenityWeights, HousingType, LifestyleWeights, Neighborhood, ScoringWeights, TransportMode,
    UserPreferences,
};
use basera_algo::services::catalog::assemble_catalog;

fn create_preferences() -> UserPreferences {
    UserPreferences {
        work_location: "Bangalore".to_string(),
        budget: 30_000,
        family_size: 2,
        transport_mode: TransportMode::PublicTransport,
        amenity_preferences: AmenityWeights {
            restaurants: 7,
            schools: 6,
            hospitals: 5,
            parks: 5,
            shopping: 5,
            entertainment: 4,
            gym: 3,
            public_transport: 6,
        },
        lifestyle: LifestyleWeights {
            quietness: 6,
            nightlife: 4,
            walkability: 7,
            green_spaces: 5,
            cultural_activities: 4,
            family_friendly: 8,
        },
        housing_type: HousingType::Apartment,
        commute_tolerance: 45,
    }
}

fn create_catalog(size: usize) -> Vec<Neighborhood> {
    let mut rng = StdRng::seed_from_u64(99);
    (0..size)
        .map(|i| synthesize_neighborhood(&mut rng, "Bangalore", &format!("Sector {}", i + 1)))
        .collect()
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(12.9716),
                black_box(77.5946),
                black_box(12.93),
                black_box(77.62),
            )
        });
    });
}

fn bench_synthesize_neighborhood(c: &mut Criterion) {
    c.bench_function("synthesize_neighborhood", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| synthesize_neighborhood(&mut rng, black_box("Bangalore"), black_box("Koramangala")));
    });
}

fn bench_calculate_match(c: &mut Criterion) {
    let preferences = create_preferences();
    let weights = ScoringWeights::default();
    let catalog = create_catalog(1);

    c.bench_function("calculate_match", |b| {
        b.iter(|| {
            calculate_match(
                black_box(&preferences),
                black_box(catalog[0].clone()),
                black_box(&weights),
            )
        });
    });
}

fn bench_rank_neighborhoods(c: &mut Criterion) {
    let preferences = create_preferences();
    let matcher = Matcher::with_default_weights();

    let mut group = c.benchmark_group("rank_neighborhoods");
    for size in [10, 30, 100] {
        let catalog = create_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| matcher.rank_neighborhoods(black_box(&preferences), catalog.clone()));
        });
    }
    group.finish();
}

fn bench_assemble_catalog(c: &mut Criterion) {
    c.bench_function("assemble_catalog", |b| {
        let mut rng = StdRng::seed_from_u64(5);
        b.iter(|| assemble_catalog(&mut rng, black_box("Delhi"), &[]).unwrap());
    });
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_synthesize_neighborhood,
    bench_calculate_match,
    bench_rank_neighborhoods,
    bench_assemble_catalog
);
criterion_main!(benches);
