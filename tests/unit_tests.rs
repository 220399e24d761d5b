// Unit tests for Partner Match

use geo::{HaversineDistance, Point};
use partner_match::core::{distance::distance_km, ranking::{filter_and_rank, rank_matches}};
use partner_match::models::{Coordinate, Partner, SearchPartnersParams};

fn create_partner(id: &str, lat: f64, lon: f64, radius: f64, rating: i32) -> Partner {
    Partner {
        id: id.to_string(),
        name: format!("Partner {}", id),
        materials: ["wood".to_string(), "tiles".to_string()].into_iter().collect(),
        location: Coordinate::new(lat, lon),
        operating_radius_km: radius,
        rating,
    }
}

#[test]
fn test_distance_zero() {
    let customer = Coordinate::new(48.3535, 11.7812);
    assert_eq!(distance_km(customer, customer), 0.0);
}

#[test]
fn test_distance_symmetric() {
    let points = [
        Coordinate::new(48.3535, 11.7812),
        Coordinate::new(48.4021, 11.7511),
        Coordinate::new(-33.8688, 151.2093),
        Coordinate::new(40.7128, -74.0060),
    ];

    for a in points {
        for b in points {
            assert_eq!(distance_km(a, b), distance_km(b, a));
        }
    }
}

#[test]
fn test_distance_agrees_with_haversine() {
    let pairs = [
        ((48.3535, 11.7812), (48.4021, 11.7511)),
        ((51.5074, -0.1278), (48.8566, 2.3522)),
        ((40.7128, -74.0060), (34.0522, -118.2437)),
    ];

    for ((lat1, lon1), (lat2, lon2)) in pairs {
        let ours = distance_km(Coordinate::new(lat1, lon1), Coordinate::new(lat2, lon2));
        let reference = Point::new(lon1, lat1).haversine_distance(&Point::new(lon2, lat2)) / 1000.0;

        let relative = (ours - reference).abs() / reference;
        assert!(relative < 0.001, "Expected ~{}km, got {}km", reference, ours);
    }
}

#[test]
fn test_inclusion_matches_radius() {
    let customer = Coordinate::new(48.3535, 11.7812);
    let partners: Vec<Partner> = (0..30)
        .map(|i| create_partner(&i.to_string(), 48.0 + i as f64 * 0.025, 11.7, 15.0, 3))
        .collect();

    let ranked = filter_and_rank(&partners, customer);

    for p in &partners {
        let expected = distance_km(customer, p.location) < p.operating_radius_km;
        assert_eq!(ranked.iter().any(|r| r.id == p.id), expected, "partner {}", p.id);
    }
}

#[test]
fn test_zero_radius_never_matches() {
    let customer = Coordinate::new(48.3535, 11.7812);
    let partners = vec![create_partner("1", 48.3535, 11.7812, 0.0, 5)];

    assert!(filter_and_rank(&partners, customer).is_empty());
}

#[test]
fn test_matches_carry_distance() {
    let customer = Coordinate::new(48.3535, 11.7812);
    let partners = vec![
        create_partner("near", 48.4021, 11.7511, 10.0, 4),
        create_partner("far", 48.2186, 11.6236, 20.0, 4),
    ];

    let matches = rank_matches(&partners, customer);
    assert_eq!(matches.len(), 2);
    assert!((matches[0].distance_km - 5.84).abs() < 0.01);
    assert!((matches[1].distance_km - 19.0).abs() < 0.01);
}

#[test]
fn test_query_params_to_search() {
    let params = SearchPartnersParams {
        material: Some("carpet".to_string()),
        lat: Some("48.3535".to_string()),
        long: Some("11.7812".to_string()),
    };

    let query = params.into_search_query().unwrap();
    assert_eq!(query.material.as_str(), "carpet");
    assert_eq!(query.customer_location, Coordinate::new(48.3535, 11.7812));
}
