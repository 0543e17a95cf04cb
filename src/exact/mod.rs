//! Exact solver for small instances.
//!
//! - [`solve_exact`] — Exhaustive search with the depot fixed, O(n·(n−1)!)
//! - [`search_space`] — Number of tours the search evaluates

mod brute_force;

pub use brute_force::{search_space, solve_exact, solve_exact_with_limit, MAX_EXACT_STOPS};
