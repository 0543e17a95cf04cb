//! Distance computation.
//!
//! Provides the haversine great-circle distance and a dense symmetric
//! distance matrix built from geographic stops.

mod haversine;
mod matrix;

pub use haversine::{haversine, EARTH_RADIUS_KM};
pub use matrix::{build_distance_matrix, DistanceMatrix};
