//! Best-found tour record.

use serde::Serialize;

use super::Route;

/// A route together with its closed tour length.
///
/// Both solvers return one; the genetic solver replaces its record only
/// when a strictly shorter tour appears.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    /// Visit order, depot first.
    pub route: Route,
    /// Closed tour length (kilometres for haversine matrices).
    pub distance: f64,
}

impl Tour {
    /// Creates a tour record.
    pub fn new(route: Route, distance: f64) -> Self {
        Self { route, distance }
    }

    /// Replaces this record if `distance` is strictly shorter.
    ///
    /// Returns `true` when the record changed.
    pub fn offer(&mut self, route: &Route, distance: f64) -> bool {
        if distance < self.distance {
            self.route = route.clone();
            self.distance = distance;
            true
        } else {
            false
        }
    }
}
