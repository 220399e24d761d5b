use std::cmp::Ordering;
use crate::core::distance::distance_km;
use crate::models::{Coordinate, Partner};

/// A partner eligible for a search, annotated with its distance to the customer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    pub partner: &'a Partner,
    pub distance_km: f64,
}

/// Rating descending, then distance ascending
fn by_rating_and_distance(a: &Match<'_>, b: &Match<'_>) -> Ordering {
    b.partner
        .rating
        .cmp(&a.partner.rating)
        .then_with(|| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(Ordering::Equal)
        })
}

/// Keep partners operating around `point` and order them best first
///
/// A partner is kept only when its distance to `point` is strictly less than
/// its operating radius. The sort is stable, so partners with equal rating
/// and distance keep their input order. An out-of-range `point` yields no
/// matches.
pub fn rank_matches(partners: &[Partner], point: Coordinate) -> Vec<Match<'_>> {
    if !point.is_valid() {
        tracing::debug!("Ignoring search around out-of-range point {:?}", point);
        return Vec::new();
    }

    let mut matches: Vec<Match<'_>> = partners
        .iter()
        .filter_map(|partner| {
            let distance_km = distance_km(point, partner.location);
            (distance_km < partner.operating_radius_km).then_some(Match { partner, distance_km })
        })
        .collect();

    matches.sort_by(by_rating_and_distance);
    matches
}

/// Filter partners by operating radius and return them in ranked order
pub fn filter_and_rank(partners: &[Partner], point: Coordinate) -> Vec<Partner> {
    rank_matches(partners, point)
        .into_iter()
        .map(|m| m.partner.clone())
        .collect()
}
