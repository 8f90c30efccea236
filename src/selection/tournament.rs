use crate::chromosome::Population;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{validate_inputs, SelectionStrategy};

/// Binary tournament selection.
///
/// Each parent slot is filled by drawing two indices uniformly and
/// independently (the same index may be drawn twice) and keeping the
/// chromosome with strictly greater fitness. On a tie the second draw wins.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TournamentSelection;

impl TournamentSelection {
    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let first = rng.gen_index(fitness.len());
        let second = rng.gen_index(fitness.len());

        if fitness[first] > fitness[second] {
            first
        } else {
            second
        }
    }
}

impl<G> SelectionStrategy<G> for TournamentSelection
where
    G: Clone,
{
    fn select(
        &self,
        population: &Population<G>,
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<G>> {
        validate_inputs(population, fitness)?;

        let mut parents = Population::with_capacity(population.len());
        while parents.len() < population.len() {
            let winner = self.run_tournament(fitness, rng);
            parents.push(population[winner].clone());
        }

        Ok(parents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::Chromosome;
    use crate::error::GeneticError;

    fn population(n: u8) -> Population<u8> {
        (0..n).map(|i| Chromosome::new(vec![i])).collect()
    }

    #[test]
    fn test_tournament_selection_size() {
        let population = population(6);
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1, 0.4];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selected = TournamentSelection
            .select(&population, &fitness, &mut rng)
            .unwrap();

        assert_eq!(selected.len(), 6);
        assert!(selected.iter().all(|c| population.iter().any(|p| p == c)));
    }

    #[test]
    fn test_tournament_winner_matches_manual_draws() {
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        let mut rng = RandomNumberGenerator::from_seed(7);
        let mut replay = rng.clone();

        for _ in 0..50 {
            let winner = TournamentSelection.run_tournament(&fitness, &mut rng);
            let first = replay.gen_index(fitness.len());
            let second = replay.gen_index(fitness.len());
            let expected = if fitness[first] > fitness[second] {
                first
            } else {
                second
            };
            assert_eq!(winner, expected);
        }
    }

    #[test]
    fn test_tournament_ties_favor_second_draw() {
        // All equal: the winner is always the second index drawn.
        let fitness = vec![1.0; 4];
        let mut rng = RandomNumberGenerator::from_seed(11);
        let mut replay = rng.clone();

        for _ in 0..50 {
            let winner = TournamentSelection.run_tournament(&fitness, &mut rng);
            let _first = replay.gen_index(4);
            let second = replay.gen_index(4);
            assert_eq!(winner, second);
        }
    }

    #[test]
    fn test_tournament_never_selects_strict_loser_of_both_draws() {
        // The worst individual can only win if it is drawn twice.
        let population = population(4);
        let fitness = vec![0.0, 1.0, 2.0, 3.0];
        let mut rng = RandomNumberGenerator::from_seed(5);

        let mut counts = [0usize; 4];
        for _ in 0..500 {
            let selected = TournamentSelection
                .select(&population, &fitness, &mut rng)
                .unwrap();
            for c in selected.iter() {
                counts[c[0] as usize] += 1;
            }
        }

        // Expected shares are 1/16, 3/16, 5/16, 7/16.
        assert!(counts[0] < counts[1]);
        assert!(counts[1] < counts[2]);
        assert!(counts[2] < counts[3]);
    }

    #[test]
    fn test_tournament_selection_empty_population() {
        let population: Population<u8> = Population::new();
        let mut rng = RandomNumberGenerator::from_seed(0);

        let result = TournamentSelection.select(&population, &[], &mut rng);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_tournament_selection_mismatched_lengths() {
        let population = population(2);
        let mut rng = RandomNumberGenerator::from_seed(0);

        let result = TournamentSelection.select(&population, &[0.5], &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }
}
