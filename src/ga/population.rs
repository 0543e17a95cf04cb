//! Population-level steps of a generation.
//!
//! A generation runs [`rank`] → [`select_parents`] → [`breed`] →
//! [`mutate_population`]. Every route is an independently owned value;
//! elites are cloned forward, never shared.

use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::distance::DistanceMatrix;
use crate::models::Route;

use super::chromosome::Candidate;
use super::operators::{order_crossover, random_route, swap_mutation};

/// Number of top parents copied unchanged into the next generation.
pub const ELITE_COUNT: usize = 2;

/// Creates `size` independent random routes over `n` stops.
pub fn initial_population<R: Rng>(size: usize, n: usize, rng: &mut R) -> Vec<Route> {
    (0..size).map(|_| random_route(n, rng)).collect()
}

/// Evaluates every route and orders the candidates by descending fitness.
///
/// The sort is stable: equally fit routes keep their population order.
/// With the `parallel` feature, evaluation is spread across threads; the
/// result is identical.
pub fn rank(routes: Vec<Route>, distances: &DistanceMatrix) -> Vec<Candidate> {
    #[cfg(feature = "parallel")]
    let mut ranked: Vec<Candidate> = routes
        .into_par_iter()
        .map(|r| Candidate::new(r, distances))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let mut ranked: Vec<Candidate> = routes
        .into_iter()
        .map(|r| Candidate::new(r, distances))
        .collect();

    ranked.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
    ranked
}

/// Truncation selection: keeps the best `population_size / 2` routes.
pub fn select_parents(ranked: Vec<Candidate>, population_size: usize) -> Vec<Route> {
    ranked
        .into_iter()
        .take(population_size / 2)
        .map(Candidate::into_route)
        .collect()
}

/// Builds the next generation from `parents` (best first).
///
/// The first [`ELITE_COUNT`] parents are copied unchanged; the rest of the
/// population comes from ordered crossover of two parents drawn uniformly
/// with replacement.
pub fn breed<R: Rng>(parents: &[Route], population_size: usize, rng: &mut R) -> Vec<Route> {
    let mut children = Vec::with_capacity(population_size);
    children.extend(
        parents
            .iter()
            .take(ELITE_COUNT.min(population_size))
            .cloned(),
    );

    if parents.is_empty() {
        return children;
    }

    while children.len() < population_size {
        let p1 = &parents[rng.random_range(0..parents.len())];
        let p2 = &parents[rng.random_range(0..parents.len())];
        children.push(order_crossover(p1, p2, rng));
    }
    children
}

/// Applies swap mutation to every route except the first, which holds the
/// best parent and is carried over verbatim.
pub fn mutate_population<R: Rng>(population: &mut [Route], rate: f64, rng: &mut R) {
    for route in population.iter_mut().skip(1) {
        swap_mutation(route, rate, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line(n: usize) -> DistanceMatrix {
        // Stops on a line at x = 0, 1, ..., n-1
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                data[i * n + j] = (i as f64 - j as f64).abs();
            }
        }
        DistanceMatrix::from_data(n, data).expect("valid")
    }

    #[test]
    fn test_initial_population() {
        let mut rng = StdRng::seed_from_u64(42);
        let pop = initial_population(25, 9, &mut rng);
        assert_eq!(pop.len(), 25);
        assert!(pop.iter().all(|r| r.is_valid(9)));
    }

    #[test]
    fn test_rank_orders_by_distance() {
        let dm = line(6);
        let mut rng = StdRng::seed_from_u64(1);
        let ranked = rank(initial_population(30, 6, &mut rng), &dm);
        assert_eq!(ranked.len(), 30);
        for w in ranked.windows(2) {
            assert!(w[0].distance() <= w[1].distance());
            assert!(w[0].fitness() >= w[1].fitness());
        }
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let dm = line(4);
        // 0-1-2-3 and 0-3-2-1 are reflections with equal length
        let a = Route::new(vec![0, 1, 2, 3], 4).expect("valid");
        let b = Route::new(vec![0, 3, 2, 1], 4).expect("valid");
        let worse = Route::new(vec![0, 2, 1, 3], 4).expect("valid");

        let ranked = rank(vec![worse.clone(), b.clone(), a.clone()], &dm);
        assert_eq!(ranked[0].route(), &b);
        assert_eq!(ranked[1].route(), &a);
        assert_eq!(ranked[2].route(), &worse);
    }

    #[test]
    fn test_select_parents_truncates_to_half() {
        let dm = line(7);
        let mut rng = StdRng::seed_from_u64(3);
        let ranked = rank(initial_population(21, 7, &mut rng), &dm);
        let best = ranked[0].route().clone();
        let parents = select_parents(ranked, 21);
        assert_eq!(parents.len(), 10);
        assert_eq!(parents[0], best);
    }

    #[test]
    fn test_breed_fills_population_with_elites_first() {
        let dm = line(8);
        let mut rng = StdRng::seed_from_u64(8);
        let ranked = rank(initial_population(40, 8, &mut rng), &dm);
        let parents = select_parents(ranked, 40);
        let children = breed(&parents, 40, &mut rng);

        assert_eq!(children.len(), 40);
        assert_eq!(children[0], parents[0]);
        assert_eq!(children[1], parents[1]);
        assert!(children.iter().all(|r| r.is_valid(8)));
    }

    #[test]
    fn test_breed_minimal_population() {
        let mut rng = StdRng::seed_from_u64(8);
        let parents = vec![random_route(5, &mut rng)];
        let children = breed(&parents, 2, &mut rng);
        assert_eq!(children.len(), 2);
        assert_eq!(children[0], parents[0]);
    }

    #[test]
    fn test_elite_survives_breed_and_mutation() {
        let dm = line(12);
        let mut rng = StdRng::seed_from_u64(21);
        let ranked = rank(initial_population(50, 12, &mut rng), &dm);
        let elite = ranked[0].route().clone();

        let parents = select_parents(ranked, 50);
        let mut next = breed(&parents, 50, &mut rng);
        mutate_population(&mut next, 1.0, &mut rng);

        assert_eq!(next[0], elite);
        assert!(next.iter().all(|r| r.is_valid(12)));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_rank_matches_sequential() {
        let dm = line(9);
        let mut rng = StdRng::seed_from_u64(17);
        let routes = initial_population(64, 9, &mut rng);

        let mut expected: Vec<Candidate> = routes
            .iter()
            .cloned()
            .map(|r| Candidate::new(r, &dm))
            .collect();
        expected.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));

        assert_eq!(rank(routes, &dm), expected);
    }
}
