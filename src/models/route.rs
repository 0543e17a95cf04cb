//! Closed tours over matrix indices.

use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};

/// Matrix index of the depot. Every route starts here.
pub const DEPOT: usize = 0;

/// A closed tour: a permutation of `0..n` with the depot at position 0.
///
/// The return leg to the depot is implied and not stored. Public
/// constructors validate the permutation; the genetic operators build
/// routes that preserve it by construction.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Route;
///
/// let route = Route::new(vec![0, 2, 1, 3], 4).unwrap();
/// assert_eq!(route.stops(), &[0, 2, 1, 3]);
///
/// assert!(Route::new(vec![1, 0, 2, 3], 4).is_err()); // depot not first
/// assert!(Route::new(vec![0, 2, 2, 3], 4).is_err()); // repeated stop
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route {
    stops: Vec<usize>,
}

impl Route {
    /// Creates a route over `size` stops, validating the permutation.
    pub fn new(stops: Vec<usize>, size: usize) -> Result<Self> {
        validate_route(&stops, size)?;
        Ok(Self { stops })
    }

    /// The route visiting stops in index order: `[0, 1, ..., size - 1]`.
    pub fn identity(size: usize) -> Self {
        Self {
            stops: (0..size).collect(),
        }
    }

    /// Wraps a sequence the caller guarantees to be a valid route.
    pub(crate) fn from_vec_unchecked(stops: Vec<usize>) -> Self {
        Self { stops }
    }

    /// Stop indices in visit order, starting with the depot.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Mutable view for in-place swaps. The length cannot change.
    pub(crate) fn stops_mut(&mut self) -> &mut [usize] {
        &mut self.stops
    }

    /// Number of stops, depot included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the route visits no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Returns `true` if this is a permutation of `0..size` starting at the depot.
    pub fn is_valid(&self, size: usize) -> bool {
        validate_route(&self.stops, size).is_ok()
    }

    /// Closed tour length under `distances`.
    ///
    /// Fails if the route was built for a different number of stops.
    pub fn distance(&self, distances: &DistanceMatrix) -> Result<f64> {
        if self.stops.len() != distances.size() {
            return Err(Error::invalid_input(format!(
                "route has {} stops but matrix has {}",
                self.stops.len(),
                distances.size()
            )));
        }
        Ok(tour_length(&self.stops, distances))
    }
}

/// Checks that `stops` is a permutation of `0..size` with the depot first.
pub fn validate_route(stops: &[usize], size: usize) -> Result<()> {
    if stops.len() != size {
        return Err(Error::invalid_input(format!(
            "route has {} stops, expected {size}",
            stops.len()
        )));
    }
    if size > 0 && stops[0] != DEPOT {
        return Err(Error::invalid_input(format!(
            "route starts at {} instead of the depot",
            stops[0]
        )));
    }
    let mut seen = vec![false; size];
    for &s in stops {
        if s >= size {
            return Err(Error::invalid_input(format!(
                "stop index {s} out of range for {size} stops"
            )));
        }
        if seen[s] {
            return Err(Error::invalid_input(format!("stop index {s} visited twice")));
        }
        seen[s] = true;
    }
    Ok(())
}

/// Total length of a closed tour: every consecutive edge plus the return
/// from the last stop to the first.
///
/// The route must be a permutation of `0..n` starting at the depot, where
/// `n` is the matrix size.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::total_distance;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 2.0,
///     1.0, 0.0, 3.0,
///     2.0, 3.0, 0.0,
/// ]).unwrap();
/// assert_eq!(total_distance(&[0, 1, 2], &dm).unwrap(), 6.0);
/// assert!(total_distance(&[0, 1], &dm).is_err());
/// ```
pub fn total_distance(route: &[usize], distances: &DistanceMatrix) -> Result<f64> {
    validate_route(route, distances.size())?;
    Ok(tour_length(route, distances))
}

/// Closed tour length without validation.
pub(crate) fn tour_length(route: &[usize], distances: &DistanceMatrix) -> f64 {
    let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
        return 0.0;
    };
    let open: f64 = route
        .windows(2)
        .map(|w| distances.get(w[0], w[1]))
        .sum();
    open + distances.get(last, first)
}
