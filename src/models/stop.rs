//! Geographic stop type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distance::haversine;

/// A stop (delivery location) given by latitude and longitude in degrees.
///
/// The stop at position 0 of an input list is the depot: every tour
/// starts and ends there. The `id` is carried for the caller and plays no
/// role in the solvers, which work on positional indices.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Stop;
///
/// let london = Stop::new(0, 51.5074, -0.1278);
/// let paris = Stop::new(1, 48.8566, 2.3522);
/// assert_eq!(london.id(), 0);
/// assert!((london.distance_to(&paris) - 343.5).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    id: usize,
    latitude: f64,
    longitude: f64,
}

impl Stop {
    /// Creates a new stop.
    pub fn new(id: usize, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            latitude,
            longitude,
        }
    }

    /// Caller-assigned identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another stop, in kilometres.
    pub fn distance_to(&self, other: &Stop) -> f64 {
        haversine(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stop(id={}, lat={:.4}, lon={:.4})",
            self.id, self.latitude, self.longitude
        )
    }
}
