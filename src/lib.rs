//! # u-tsp
//!
//! Traveling salesman tours over geographic stops: a haversine distance
//! matrix, exhaustive search for small instances, and a genetic algorithm
//! with ordered crossover for larger ones.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Stop, Route, Tour) and tour length
//! - [`distance`] — Haversine distance and the symmetric distance matrix
//! - [`exact`] — Exhaustive search with the depot fixed
//! - [`ga`] — Genetic algorithm (selection, OX1 crossover, swap mutation)
//! - [`solver`] — Strategy selection between exact and genetic search
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use u_tsp::distance::build_distance_matrix;
//! use u_tsp::ga::{GeneticConfig, GeneticSolver};
//! use u_tsp::models::Stop;
//!
//! let stops: Vec<Stop> = (0..12)
//!     .map(|i| Stop::new(i, 19.0 + 0.05 * (i % 4) as f64, 73.0 + 0.05 * (i / 4) as f64))
//!     .collect();
//! let dm = build_distance_matrix(&stops).unwrap();
//!
//! let config = GeneticConfig::default().with_population_size(50).with_generations(100);
//! let solver = GeneticSolver::new(&dm, config).unwrap();
//! let result = solver.run(&mut rand::rngs::StdRng::seed_from_u64(42));
//! assert!(result.best.distance <= result.initial_distance);
//! ```

pub mod distance;
pub mod error;
pub mod exact;
pub mod ga;
pub mod models;
pub mod solver;

pub use error::{Error, Result};
pub use solver::{solve, Strategy};
