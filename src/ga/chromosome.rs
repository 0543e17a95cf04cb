//! Evaluated route chromosome.

use crate::distance::DistanceMatrix;
use crate::models::{tour_length, Route};

/// A route paired with its closed tour length.
///
/// Fitness is `1 / distance`, so shorter tours rank higher. The distance
/// is computed once when the candidate is created.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::ga::Candidate;
/// use u_tsp::models::Route;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 2.0,
///     1.0, 0.0, 1.0,
///     2.0, 1.0, 0.0,
/// ]).unwrap();
/// let c = Candidate::new(Route::identity(3), &dm);
/// assert_eq!(c.distance(), 4.0);
/// assert_eq!(c.fitness(), 0.25);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    route: Route,
    distance: f64,
}

impl Candidate {
    /// Evaluates `route` against `distances`.
    pub fn new(route: Route, distances: &DistanceMatrix) -> Self {
        let distance = tour_length(route.stops(), distances);
        Self { route, distance }
    }

    /// The evaluated route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Closed tour length.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Selection score; higher is better.
    pub fn fitness(&self) -> f64 {
        fitness(self.distance)
    }

    /// Consumes the candidate, returning its route.
    pub fn into_route(self) -> Route {
        self.route
    }
}

/// Fitness of a tour of the given length: `1 / distance`.
///
/// A zero-length tour (single stop, or all stops coincident) gets the
/// maximal fitness `f64::INFINITY`. A NaN or negative length ranks last
/// with fitness 0.
pub fn fitness(distance: f64) -> f64 {
    if distance == 0.0 {
        f64::INFINITY
    } else if distance > 0.0 {
        1.0 / distance
    } else {
        0.0
    }
}
