//! Great-circle distance on a spherical Earth.
//!
//! # Formula
//!
//! ```text
//! a = sin²(Δφ/2) + cos φ₁ · cos φ₂ · sin²(Δλ/2)
//! c = 2 · atan2(√a, √(1−a))
//! d = R · c
//! ```
//!
//! with φ latitude, λ longitude (radians) and R the mean Earth radius.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two points given in degrees.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::haversine;
///
/// // London to Paris
/// let d = haversine(51.5074, -0.1278, 48.8566, 2.3522);
/// assert!((d - 344.0).abs() < 1.0);
/// ```
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(haversine(51.5074, -0.1278, 51.5074, -0.1278), 0.0);
        assert_eq!(haversine(-33.8688, 151.2093, -33.8688, 151.2093), 0.0);
    }

    #[test]
    fn test_london_paris() {
        let d = haversine(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((d - 344.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn test_symmetric() {
        let ab = haversine(40.7128, -74.0060, 34.0522, -118.2437);
        let ba = haversine(34.0522, -118.2437, 40.7128, -74.0060);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let d = haversine(0.0, 0.0, 0.0, 180.0);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = haversine(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }
}
