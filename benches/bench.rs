// Criterion benchmarks for Partner Match

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use partner_match::core::{MatchingService, distance::distance_km, ranking::filter_and_rank};
use partner_match::models::{Coordinate, Material, Partner, SearchQuery};
use partner_match::services::InMemoryPartnerStore;
use std::sync::Arc;

const CUSTOMER: Coordinate = Coordinate { latitude: 48.3535, longitude: 11.7812 };

fn create_partner(id: usize, lat: f64, lon: f64) -> Partner {
    let materials: &[&str] = match id % 3 {
        0 => &["wood"],
        1 => &["wood", "carpet"],
        _ => &["tiles"],
    };

    Partner {
        id: id.to_string(),
        name: format!("Partner {}", id),
        materials: materials.iter().map(|m| m.to_string()).collect(),
        location: Coordinate::new(lat, lon),
        operating_radius_km: 10.0 + (id % 40) as f64,
        rating: (id % 5) as i32 + 1,
    }
}

fn create_partners(count: usize) -> Vec<Partner> {
    (0..count)
        .map(|i| {
            let lat_offset = (i as f64 * 0.001) % 0.5;
            let lon_offset = (i as f64 * 0.0007) % 0.5;
            create_partner(i, 48.1 + lat_offset, 11.5 + lon_offset)
        })
        .collect()
}

fn bench_distance(c: &mut Criterion) {
    let partner = Coordinate::new(48.4021, 11.7511);

    c.bench_function("distance_km", |b| {
        b.iter(|| distance_km(black_box(CUSTOMER), black_box(partner)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");

    for partner_count in [10, 50, 100, 500, 1000].iter() {
        let partners = create_partners(*partner_count);

        group.bench_with_input(
            BenchmarkId::new("filter_and_rank", partner_count),
            partner_count,
            |b, _| {
                b.iter(|| filter_and_rank(black_box(&partners), black_box(CUSTOMER)));
            },
        );
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let store = InMemoryPartnerStore::with_partners(create_partners(1000));
    let service = MatchingService::new(Arc::new(store));
    let query = SearchQuery {
        material: Material::Wood,
        customer_location: CUSTOMER,
    };

    c.bench_function("search_1000_partners", |b| {
        b.iter(|| service.search(black_box(&query)));
    });
}

criterion_group!(
    benches,
    bench_distance,
    bench_ranking,
    bench_search
);

criterion_main!(benches);
