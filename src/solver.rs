//! Choosing between exact and genetic search.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::exact::{solve_exact_with_limit, MAX_EXACT_STOPS};
use crate::ga::{GeneticConfig, GeneticSolver};
use crate::models::Tour;

/// How [`solve`] searches for a tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Strategy {
    /// Exhaustive search; fails above [`MAX_EXACT_STOPS`].
    Exact,
    /// Genetic search with the given configuration.
    Genetic(GeneticConfig),
    /// Exhaustive search up to `exact_limit` stops, genetic above it.
    Auto {
        exact_limit: usize,
        genetic: GeneticConfig,
    },
}

impl Default for Strategy {
    fn default() -> Self {
        Self::Auto {
            exact_limit: MAX_EXACT_STOPS,
            genetic: GeneticConfig::default(),
        }
    }
}

/// Solves the tour problem on `distances` with the chosen strategy.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_tsp::distance::build_distance_matrix;
/// use u_tsp::models::Stop;
/// use u_tsp::{solve, Strategy};
///
/// let stops = vec![
///     Stop::new(0, 51.5074, -0.1278),
///     Stop::new(1, 48.8566, 2.3522),
///     Stop::new(2, 52.5200, 13.4050),
///     Stop::new(3, 41.9028, 12.4964),
/// ];
/// let dm = build_distance_matrix(&stops).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
///
/// // Four stops: Auto runs the exact search.
/// let tour = solve(&dm, &Strategy::default(), &mut rng).unwrap();
/// assert_eq!(tour.route.stops()[0], 0);
/// assert!(tour.route.is_valid(4));
/// ```
pub fn solve<R: Rng>(distances: &DistanceMatrix, strategy: &Strategy, rng: &mut R) -> Result<Tour> {
    let n = distances.size();
    match strategy {
        Strategy::Exact => solve_exact_with_limit(distances, MAX_EXACT_STOPS),
        Strategy::Genetic(config) => run_genetic(distances, config, rng),
        Strategy::Auto {
            exact_limit,
            genetic,
        } => {
            if n <= *exact_limit {
                debug!("{n} stops within exact limit {exact_limit}, using exhaustive search");
                solve_exact_with_limit(distances, *exact_limit)
            } else {
                debug!("{n} stops above exact limit {exact_limit}, using genetic search");
                run_genetic(distances, genetic, rng)
            }
        }
    }
}

fn run_genetic<R: Rng>(
    distances: &DistanceMatrix,
    config: &GeneticConfig,
    rng: &mut R,
) -> Result<Tour> {
    let solver = GeneticSolver::new(distances, config.clone())?;
    Ok(solver.run(rng).into_tour())
}
