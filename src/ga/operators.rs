//! Permutation operators with the depot pinned at position 0.
//!
//! # Operators
//!
//! - [`random_route`]: depot followed by a uniform shuffle of `1..n`
//! - [`order_crossover`]: OX1, a parent-1 segment plus parent-2 order
//! - [`swap_mutation`]: per-position random swaps
//!
//! Every operator returns or leaves a valid route: a permutation of
//! `0..n` with the depot first. Debug builds assert this on exit.
//!
//! # Reference
//!
//! Davis, L. (1985). "Applying adaptive algorithms to epistatic domains",
//! *Proceedings of IJCAI* 85, 162-164.

use rand::Rng;

use crate::models::{Route, DEPOT};

/// Creates a random route over `n` stops with the depot first.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_tsp::ga::random_route;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let route = random_route(6, &mut rng);
/// assert_eq!(route.stops()[0], 0);
/// assert!(route.is_valid(6));
/// ```
pub fn random_route<R: Rng>(n: usize, rng: &mut R) -> Route {
    let mut stops: Vec<usize> = (0..n).collect();

    // Fisher-Yates over positions 1..n
    for i in (2..n).rev() {
        let j = rng.random_range(1..=i);
        stops.swap(i, j);
    }

    debug_assert!(n == 0 || stops[0] == DEPOT);
    Route::from_vec_unchecked(stops)
}

/// Ordered crossover (OX1) keeping position 0 fixed.
///
/// Picks `1 <= start < end <= n - 1` uniformly, copies
/// `parent1[start..end]` into the child at the same positions, then fills
/// the remaining positions left to right with parent2's stops in
/// parent2's order, skipping stops already placed. Routes shorter than 3
/// have a single valid ordering and are returned as a copy of `parent1`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_tsp::ga::order_crossover;
/// use u_tsp::models::Route;
///
/// let p1 = Route::new(vec![0, 1, 2, 3, 4, 5], 6).unwrap();
/// let p2 = Route::new(vec![0, 5, 4, 3, 2, 1], 6).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let child = order_crossover(&p1, &p2, &mut rng);
/// assert!(child.is_valid(6));
/// ```
pub fn order_crossover<R: Rng>(parent1: &Route, parent2: &Route, rng: &mut R) -> Route {
    let n = parent1.len();
    debug_assert_eq!(n, parent2.len(), "parents must cover the same stops");

    if n < 3 {
        return parent1.clone();
    }

    let start = rng.random_range(1..=n - 2);
    let end = rng.random_range(start + 1..=n - 1);
    let child = ox_fill(parent1.stops(), parent2.stops(), start, end);

    debug_assert!(child.is_valid(n), "crossover produced {:?}", child.stops());
    child
}

/// OX1 with an explicit segment `[start, end)` taken from `p1`.
fn ox_fill(p1: &[usize], p2: &[usize], start: usize, end: usize) -> Route {
    let n = p1.len();
    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut placed = vec![false; n];

    child[0] = Some(p1[0]);
    placed[p1[0]] = true;
    for i in start..end {
        child[i] = Some(p1[i]);
        placed[p1[i]] = true;
    }

    let mut pos = 1;
    for &stop in p2 {
        if placed[stop] {
            continue;
        }
        while child[pos].is_some() {
            pos += 1;
        }
        child[pos] = Some(stop);
        placed[stop] = true;
    }

    Route::from_vec_unchecked(child.into_iter().flatten().collect())
}

/// Swap mutation: each position in `1..n` is, with probability `rate`,
/// swapped with a uniformly chosen position in `1..n` (possibly itself).
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_tsp::ga::swap_mutation;
/// use u_tsp::models::Route;
///
/// let mut route = Route::identity(8);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(3);
/// swap_mutation(&mut route, 1.0, &mut rng);
/// assert_eq!(route.stops()[0], 0);
/// assert!(route.is_valid(8));
/// ```
pub fn swap_mutation<R: Rng>(route: &mut Route, rate: f64, rng: &mut R) {
    let stops = route.stops_mut();
    let n = stops.len();
    if n < 2 {
        return;
    }

    for i in 1..n {
        if rng.random::<f64>() < rate {
            let j = rng.random_range(1..n);
            stops.swap(i, j);
        }
    }

    debug_assert!(route.is_valid(n), "mutation produced {:?}", route.stops());
}
