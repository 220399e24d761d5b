use crate::models::Coordinate;

/// Statute miles per minute of arc
const MILES_PER_ARC_MINUTE: f64 = 1.1515;

/// Kilometers per statute mile
const KM_PER_MILE: f64 = 1.609344;

/// Calculate the great-circle distance between two points in kilometers
///
/// Uses the spherical law of cosines. The cosine of the central angle is
/// clamped to [-1, 1] so floating-point noise never reaches `acos` as NaN,
/// and identical points short-circuit to exactly zero.
///
/// The zero shortcut compares coordinate values, not places. A place with
/// several spellings, such as longitude 180 versus -180 or any longitude at
/// a pole, can still measure a few centimeters instead of exactly zero.
///
/// # Arguments
/// * `a` - First point
/// * `b` - Second point
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    if a == b {
        return 0.0;
    }

    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let theta_rad = (a.longitude - b.longitude).to_radians();

    let cos_central_angle = lat1_rad.sin() * lat2_rad.sin()
        + lat1_rad.cos() * lat2_rad.cos() * theta_rad.cos();

    let central_angle_deg = cos_central_angle.clamp(-1.0, 1.0).acos().to_degrees();

    central_angle_deg * 60.0 * MILES_PER_ARC_MINUTE * KM_PER_MILE
}
