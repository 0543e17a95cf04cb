//! Generational loop of the genetic solver.
//!
//! # Algorithm
//!
//! ```text
//! population ← random routes
//! repeat `generations` times:
//!     parents    ← best half of population        (truncation selection)
//!     population ← 2 elites + OX1 children        (breeding)
//!     mutate every route but the first            (swap mutation)
//!     record the best route if strictly shorter
//! ```
//!
//! The best parent is always carried into the next generation unmutated,
//! so the best distance in each generation never increases.

use log::info;
use rand::Rng;
use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::Tour;

use super::config::GeneticConfig;
use super::population::{breed, initial_population, mutate_population, rank, select_parents};

/// Outcome of a genetic run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaResult {
    /// Shortest tour found over the run.
    pub best: Tour,
    /// Best distance in the initial random population.
    pub initial_distance: f64,
    /// Best-found distance after each generation.
    pub history: Vec<f64>,
    /// Number of generations run.
    pub generations: usize,
}

impl GaResult {
    /// Consumes the result, returning the best tour.
    pub fn into_tour(self) -> Tour {
        self.best
    }
}

/// Genetic TSP solver over a shared distance matrix.
///
/// The solver holds no state between runs; each [`run`](Self::run) draws
/// all randomness from the generator it is given, so equal seeds give
/// equal tours.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::ga::{GeneticConfig, GeneticSolver};
///
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 10.0, 15.0, 20.0,
///     10.0, 0.0, 35.0, 25.0,
///     15.0, 35.0, 0.0, 30.0,
///     20.0, 25.0, 30.0, 0.0,
/// ]).unwrap();
///
/// let config = GeneticConfig::default()
///     .with_population_size(20)
///     .with_generations(50);
/// let solver = GeneticSolver::new(&dm, config).unwrap();
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let result = solver.run(&mut rng);
/// assert_eq!(result.best.distance, 80.0);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticSolver<'a> {
    distances: &'a DistanceMatrix,
    config: GeneticConfig,
}

impl<'a> GeneticSolver<'a> {
    /// Creates a solver, rejecting an invalid configuration.
    pub fn new(distances: &'a DistanceMatrix, config: GeneticConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { distances, config })
    }

    /// The configuration this solver runs with.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Evolves a population for the configured number of generations and
    /// returns the shortest tour seen.
    pub fn run<R: Rng>(&self, rng: &mut R) -> GaResult {
        let GeneticConfig {
            population_size,
            mutation_rate,
            generations,
            log_interval,
        } = self.config;
        let n = self.distances.size();

        let mut ranked = rank(initial_population(population_size, n, rng), self.distances);
        let initial_distance = ranked[0].distance();
        let mut best = Tour::new(ranked[0].route().clone(), initial_distance);
        let mut history = Vec::with_capacity(generations);

        for generation in 0..generations {
            let parents = select_parents(ranked, population_size);
            let mut next = breed(&parents, population_size, rng);
            mutate_population(&mut next, mutation_rate, rng);
            ranked = rank(next, self.distances);

            let leader = &ranked[0];
            best.offer(leader.route(), leader.distance());
            history.push(best.distance);

            if log_interval > 0 && generation % log_interval == 0 {
                info!("generation {generation}: best distance = {:.2} km", best.distance);
            }
        }

        info!(
            "genetic search over {n} stops finished after {generations} generations: {:.2} km (initial {:.2} km)",
            best.distance, initial_distance
        );

        GaResult {
            best,
            initial_distance,
            history,
            generations,
        }
    }
}
