//! Domain model types for tour optimization.
//!
//! Stops carry geographic coordinates, routes are validated permutations of
//! matrix indices with the depot fixed at position 0, and a tour pairs a
//! route with its closed length.

mod route;
mod stop;
mod tour;

pub(crate) use route::tour_length;
pub use route::{total_distance, validate_route, Route, DEPOT};
pub use stop::Stop;
pub use tour::Tour;
