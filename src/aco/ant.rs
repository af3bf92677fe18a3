//! Single-ant tour construction.

use rand::Rng;

use super::pheromone::PheromoneMatrix;
use super::transition::TransitionRule;
use super::types::Tour;
use crate::matrix::DistanceMatrix;

/// A tour built by one ant.
#[derive(Debug, Clone)]
pub struct AntTour {
    /// The closed tour.
    pub tour: Tour,
    /// Sum of distances along the tour, closing edge included.
    pub length: f64,
    /// Number of transitions that used the uniform fallback.
    pub fallbacks: usize,
}

/// Builds complete tours against a read-only pheromone snapshot.
///
/// Construction never writes pheromone; updates happen at colony level
/// once every ant of an iteration has finished.
#[derive(Debug, Clone, Copy)]
pub struct AntPathBuilder<'a> {
    distances: &'a DistanceMatrix,
    pheromone: &'a PheromoneMatrix,
    rule: TransitionRule,
}

impl<'a> AntPathBuilder<'a> {
    /// Creates a builder over the given matrices.
    pub fn new(
        distances: &'a DistanceMatrix,
        pheromone: &'a PheromoneMatrix,
        rule: TransitionRule,
    ) -> Self {
        Self {
            distances,
            pheromone,
            rule,
        }
    }

    /// Builds a tour from a uniformly random start node.
    pub fn build<R: Rng>(&self, rng: &mut R) -> AntTour {
        let start = rng.random_range(0..self.distances.len());
        self.build_from(start, rng)
    }

    /// Builds a tour starting (and ending) at `start`.
    pub fn build_from<R: Rng>(&self, start: usize, rng: &mut R) -> AntTour {
        let n = self.distances.len();
        let mut path = Vec::with_capacity(n + 1);
        path.push(start);

        let mut unvisited: Vec<usize> = (0..n).filter(|&j| j != start).collect();
        let mut weights = Vec::with_capacity(n);
        let mut current = start;
        let mut length = 0.0;
        let mut fallbacks = 0;

        while let Some(choice) = self.rule.choose(
            current,
            &unvisited,
            self.pheromone,
            self.distances,
            &mut weights,
            rng,
        ) {
            if choice.fallback {
                fallbacks += 1;
            }
            if let Some(pos) = unvisited.iter().position(|&j| j == choice.node) {
                unvisited.remove(pos);
            }
            length += self.distances.get(current, choice.node);
            path.push(choice.node);
            current = choice.node;
        }

        length += self.distances.get(current, start);
        path.push(start);

        AntTour {
            tour: Tour::new(path),
            length,
            fallbacks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_numflow::random::create_rng;

    fn square() -> DistanceMatrix {
        // Unit square with diagonals of length 1.4.
        DistanceMatrix::new(vec![
            vec![0.0, 1.0, 1.4, 1.0],
            vec![1.0, 0.0, 1.0, 1.4],
            vec![1.4, 1.0, 0.0, 1.0],
            vec![1.0, 1.4, 1.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_tour_is_closed_permutation() {
        let d = square();
        let p = PheromoneMatrix::new(4, 1e-6);
        let builder = AntPathBuilder::new(&d, &p, TransitionRule::new(1.0, 5.0));
        let mut rng = create_rng(42);

        for _ in 0..50 {
            let ant = builder.build(&mut rng);
            assert!(ant.tour.is_valid_for(4), "invalid tour {:?}", ant.tour);
            assert!((ant.length - d.tour_length(ant.tour.nodes())).abs() < 1e-12);
        }
    }

    #[test]
    fn test_build_from_fixed_start() {
        let d = square();
        let p = PheromoneMatrix::new(4, 1.0);
        let builder = AntPathBuilder::new(&d, &p, TransitionRule::new(1.0, 1.0));
        let mut rng = create_rng(5);
        let ant = builder.build_from(2, &mut rng);
        assert_eq!(ant.tour.start(), Some(2));
        assert_eq!(ant.tour.nodes().last(), Some(&2));
        assert_eq!(ant.fallbacks, 0);
    }

    #[test]
    fn test_start_nodes_vary() {
        let d = square();
        let p = PheromoneMatrix::new(4, 1.0);
        let builder = AntPathBuilder::new(&d, &p, TransitionRule::new(1.0, 1.0));
        let mut rng = create_rng(11);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let ant = builder.build(&mut rng);
            seen[ant.tour.start().unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_two_nodes() {
        let d = DistanceMatrix::new(vec![vec![0.0, 3.0], vec![3.0, 0.0]]).unwrap();
        let p = PheromoneMatrix::new(2, 1e-6);
        let builder = AntPathBuilder::new(&d, &p, TransitionRule::new(1.0, 5.0));
        let mut rng = create_rng(0);
        let ant = builder.build(&mut rng);
        assert!(ant.tour.is_valid_for(2));
        assert!((ant.length - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_counts_fallbacks_on_empty_pheromone() {
        let d = square();
        let p = PheromoneMatrix::new(4, 0.0);
        let builder = AntPathBuilder::new(&d, &p, TransitionRule::new(1.0, 5.0));
        let mut rng = create_rng(9);
        let ant = builder.build(&mut rng);
        // Every one of the n - 1 transitions had zero total weight.
        assert_eq!(ant.fallbacks, 3);
        assert!(ant.tour.is_valid_for(4));
    }
}
