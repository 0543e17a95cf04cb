//! Genetic algorithm for closed tours with a fixed depot.
//!
//! - [`GeneticSolver`] — Generational loop with elitism over a fixed budget
//! - [`GeneticConfig`] — Population size, mutation rate, generations
//! - [`Candidate`] — Route with cached distance and `1 / distance` fitness
//! - [`order_crossover`], [`swap_mutation`], [`random_route`] — Operators
//! - [`rank`], [`select_parents`], [`breed`], [`mutate_population`] — Generation steps

mod chromosome;
mod config;
mod operators;
mod population;
mod solver;

pub use chromosome::{fitness, Candidate};
pub use config::GeneticConfig;
pub use operators::{order_crossover, random_route, swap_mutation};
pub use population::{
    breed, initial_population, mutate_population, rank, select_parents, ELITE_COUNT,
};
pub use solver::{GaResult, GeneticSolver};
