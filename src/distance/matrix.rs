//! Dense distance matrix.

use log::debug;

use crate::error::{Error, Result};
use crate::models::Stop;

/// A dense, symmetric n×n distance matrix stored in row-major order.
///
/// Row and column `i` correspond to the i-th stop of the input list, not
/// to [`Stop::id`]. Once built the matrix is read-only: the diagonal is
/// zero, `get(i, j) == get(j, i)`, and every entry is finite and
/// non-negative.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Stop;
/// use u_tsp::distance::DistanceMatrix;
///
/// let stops = vec![
///     Stop::new(0, 51.5074, -0.1278), // London
///     Stop::new(1, 48.8566, 2.3522),  // Paris
///     Stop::new(2, 52.5200, 13.4050), // Berlin
/// ];
/// let dm = DistanceMatrix::from_stops(&stops).unwrap();
/// assert_eq!(dm.size(), 3);
/// assert!((dm.get(0, 1) - 344.0).abs() < 1.0);
/// assert_eq!(dm.get(1, 0), dm.get(0, 1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    fn zeros(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes great-circle distances (km) between every pair of stops.
    ///
    /// Only the upper triangle is computed; it is mirrored into the lower
    /// one. Coincident stops get distance zero. Fails on an empty list or
    /// on a stop with a non-finite latitude or longitude.
    pub fn from_stops(stops: &[Stop]) -> Result<Self> {
        let n = stops.len();
        if n == 0 {
            return Err(Error::invalid_input("cannot build a distance matrix from zero stops"));
        }
        if let Some((pos, stop)) = stops
            .iter()
            .enumerate()
            .find(|(_, s)| !s.latitude().is_finite() || !s.longitude().is_finite())
        {
            return Err(Error::invalid_input(format!(
                "stop {} at position {pos} has non-finite coordinates ({}, {})",
                stop.id(),
                stop.latitude(),
                stop.longitude()
            )));
        }
        let mut dm = Self::zeros(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = stops[i].distance_to(&stops[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        debug!("built {n}x{n} haversine distance matrix");
        Ok(dm)
    }

    /// Creates a distance matrix from an explicit row-major n×n grid.
    ///
    /// Fails if the data length doesn't match `size * size`, the size is
    /// zero, or the grid breaks any matrix invariant (non-zero diagonal,
    /// asymmetry, negative or non-finite entries).
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if size == 0 {
            return Err(Error::invalid_input("distance matrix must have at least one stop"));
        }
        if data.len() != size * size {
            return Err(Error::invalid_input(format!(
                "expected {} entries for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        let dm = Self { data, size };
        for i in 0..size {
            if dm.get(i, i) != 0.0 {
                return Err(Error::invalid_input(format!(
                    "diagonal entry ({i}, {i}) is {}, expected 0",
                    dm.get(i, i)
                )));
            }
            for j in 0..size {
                let d = dm.get(i, j);
                if !d.is_finite() || d < 0.0 {
                    return Err(Error::invalid_input(format!(
                        "entry ({i}, {j}) = {d} is not a finite non-negative distance"
                    )));
                }
                if j > i && d != dm.get(j, i) {
                    return Err(Error::invalid_input(format!(
                        "matrix is asymmetric at ({i}, {j})"
                    )));
                }
            }
        }
        Ok(dm)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Distances from `from` to every location.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

/// Builds the haversine distance matrix for `stops`.
///
/// Shorthand for [`DistanceMatrix::from_stops`].
pub fn build_distance_matrix(stops: &[Stop]) -> Result<DistanceMatrix> {
    DistanceMatrix::from_stops(stops)
}
