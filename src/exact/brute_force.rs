//! Exhaustive tour enumeration.
//!
//! # Algorithm
//!
//! Fixes the depot at position 0 (removing the n rotations of each cycle)
//! and walks every permutation of the remaining n−1 stops in lexicographic
//! order, keeping the shortest closed tour. Reflections are not removed, so
//! each undirected cycle is evaluated twice.
//!
//! # Complexity
//!
//! (n−1)! tours, O(n) each: O(n·(n−1)!). At n = 11 that is 3.6 million
//! tours; every additional stop multiplies the work, so the solver refuses
//! instances above a size limit.

use std::time::Instant;

use log::debug;

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::{tour_length, Route, Tour};

/// Largest instance [`solve_exact`] accepts.
pub const MAX_EXACT_STOPS: usize = 11;

/// Finds the optimal tour by exhaustive search.
///
/// Returns [`Error::InstanceTooLarge`] when the matrix has more than
/// [`MAX_EXACT_STOPS`] stops. On exact ties the lexicographically first
/// route wins.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::exact::solve_exact;
///
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 10.0, 15.0, 20.0,
///     10.0, 0.0, 35.0, 25.0,
///     15.0, 35.0, 0.0, 30.0,
///     20.0, 25.0, 30.0, 0.0,
/// ]).unwrap();
///
/// let best = solve_exact(&dm).unwrap();
/// assert_eq!(best.route.stops(), &[0, 1, 3, 2]);
/// assert_eq!(best.distance, 80.0);
/// ```
pub fn solve_exact(distances: &DistanceMatrix) -> Result<Tour> {
    solve_exact_with_limit(distances, MAX_EXACT_STOPS)
}

/// Exhaustive search with a caller-chosen size limit.
///
/// Raising the limit beyond 12 or 13 stops trades the error for a run
/// that takes minutes to hours.
pub fn solve_exact_with_limit(distances: &DistanceMatrix, limit: usize) -> Result<Tour> {
    let n = distances.size();
    if n > limit {
        return Err(Error::InstanceTooLarge { size: n, limit });
    }

    let started = Instant::now();
    let (best, evaluated) = exhaustive_search(distances);
    debug!(
        "exact search over {n} stops evaluated {evaluated} tours in {:.3?}, best distance {:.2}",
        started.elapsed(),
        best.distance
    );
    Ok(best)
}

/// Walks every tour with the depot fixed; returns the best and the number
/// of tours evaluated.
fn exhaustive_search(distances: &DistanceMatrix) -> (Tour, u64) {
    let n = distances.size();
    let mut current: Vec<usize> = (0..n).collect();
    let mut best = Tour::new(
        Route::from_vec_unchecked(current.clone()),
        tour_length(&current, distances),
    );
    let mut evaluated: u64 = 1;

    if n > 1 {
        while next_permutation(&mut current[1..]) {
            evaluated += 1;
            let d = tour_length(&current, distances);
            if d < best.distance {
                best = Tour::new(Route::from_vec_unchecked(current.clone()), d);
            }
        }
    }
    (best, evaluated)
}

/// Number of tours exhaustive search evaluates for `n` stops: (n−1)!.
///
/// Returns `None` if the count overflows `u128`.
///
/// ```
/// use u_tsp::exact::search_space;
///
/// assert_eq!(search_space(4), Some(6));
/// assert_eq!(search_space(11), Some(3_628_800));
/// ```
pub fn search_space(n: usize) -> Option<u128> {
    (1..n.max(1)).try_fold(1u128, |acc, k| acc.checked_mul(k as u128))
}

/// Rearranges `items` into the next lexicographic permutation.
///
/// Returns `false` (leaving `items` sorted ascending) once the last
/// permutation has been passed.
fn next_permutation(items: &mut [usize]) -> bool {
    let n = items.len();
    if n < 2 {
        return false;
    }

    let mut i = n - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        items.reverse();
        return false;
    }

    let mut j = n - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn four_cities() -> DistanceMatrix {
        DistanceMatrix::from_data(
            4,
            vec![
                0.0, 10.0, 15.0, 20.0, //
                10.0, 0.0, 35.0, 25.0, //
                15.0, 35.0, 0.0, 30.0, //
                20.0, 25.0, 30.0, 0.0,
            ],
        )
        .expect("valid")
    }

    fn random_matrix(n: usize, seed: u64) -> DistanceMatrix {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = rng.random_range(10.0..100.0);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        DistanceMatrix::from_data(n, data).expect("valid")
    }

    /// Independent reference: depth-first enumeration of every tour.
    fn reference_minimum(dm: &DistanceMatrix) -> f64 {
        fn dfs(dm: &DistanceMatrix, route: &mut Vec<usize>, used: &mut [bool], best: &mut f64) {
            let n = dm.size();
            if route.len() == n {
                let mut total = 0.0;
                for k in 0..n {
                    total += dm.get(route[k], route[(k + 1) % n]);
                }
                if total < *best {
                    *best = total;
                }
                return;
            }
            for s in 1..n {
                if !used[s] {
                    used[s] = true;
                    route.push(s);
                    dfs(dm, route, used, best);
                    route.pop();
                    used[s] = false;
                }
            }
        }
        let mut used = vec![false; dm.size()];
        let mut best = f64::INFINITY;
        dfs(dm, &mut vec![0], &mut used, &mut best);
        best
    }

    #[test]
    fn test_four_city_optimum() {
        let best = solve_exact(&four_cities()).expect("small instance");
        assert_eq!(best.distance, 80.0);
        // 0→1→3→2→0 precedes its reflection 0→2→3→1→0
        assert_eq!(best.route.stops(), &[0, 1, 3, 2]);
    }

    #[test]
    fn test_matches_reference_minimum() {
        for (n, seed) in [(5, 1), (6, 2), (7, 3), (8, 4)] {
            let dm = random_matrix(n, seed);
            let best = solve_exact(&dm).expect("small instance");
            assert!(best.route.is_valid(n));
            assert!((best.distance - reference_minimum(&dm)).abs() < 1e-9);
            let recomputed = best.route.distance(&dm).expect("same size");
            assert!((best.distance - recomputed).abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_and_two_stops() {
        let one = DistanceMatrix::from_data(1, vec![0.0]).expect("valid");
        let best = solve_exact(&one).expect("small instance");
        assert_eq!(best.route.stops(), &[0]);
        assert_eq!(best.distance, 0.0);

        let two = DistanceMatrix::from_data(2, vec![0.0, 4.0, 4.0, 0.0]).expect("valid");
        let best = solve_exact(&two).expect("small instance");
        assert_eq!(best.route.stops(), &[0, 1]);
        assert_eq!(best.distance, 8.0);
    }

    #[test]
    fn test_size_guard() {
        let dm = random_matrix(MAX_EXACT_STOPS + 1, 9);
        assert_eq!(
            solve_exact(&dm),
            Err(Error::InstanceTooLarge {
                size: MAX_EXACT_STOPS + 1,
                limit: MAX_EXACT_STOPS
            })
        );
        let small = random_matrix(5, 9);
        assert!(solve_exact_with_limit(&small, 4).is_err());
        assert!(solve_exact_with_limit(&small, 5).is_ok());
    }

    #[test]
    fn test_next_permutation_visits_all_in_order() {
        let mut items = vec![1, 2, 3];
        let mut seen = vec![items.clone()];
        while next_permutation(&mut items) {
            seen.push(items.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_evaluates_whole_search_space() {
        for n in 1..=7 {
            let (_, evaluated) = exhaustive_search(&random_matrix(n, n as u64));
            assert_eq!(Some(evaluated as u128), search_space(n));
        }
    }

    #[test]
    fn test_search_space() {
        assert_eq!(search_space(0), Some(1));
        assert_eq!(search_space(1), Some(1));
        assert_eq!(search_space(2), Some(1));
        assert_eq!(search_space(10), Some(362_880));
        assert_eq!(search_space(100), None);
    }
}
