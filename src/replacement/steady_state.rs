use crate::chromosome::Population;
use crate::error::{GeneticError, Result};
use crate::evaluator::ScoredPopulation;
use crate::replacement::{Incumbent, ReplacementStrategy};

/// Steady-state replacement.
///
/// Concatenates the previous population and the offspring, sorts the pool by
/// descending fitness and keeps as many as there are offspring. The sort is
/// stable, so between equally fit chromosomes the previous generation wins,
/// then earlier offspring.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SteadyStateReplacement;

impl<G> ReplacementStrategy<G> for SteadyStateReplacement
where
    G: Clone,
{
    fn replace(
        &self,
        previous: ScoredPopulation<G>,
        _incumbent: &Incumbent<G>,
        offspring: ScoredPopulation<G>,
    ) -> Result<ScoredPopulation<G>> {
        previous.check_aligned()?;
        offspring.check_aligned()?;
        let size = offspring.len();
        if size == 0 {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut pool: Vec<_> = previous
            .population
            .into_vec()
            .into_iter()
            .zip(previous.fitness)
            .chain(
                offspring
                    .population
                    .into_vec()
                    .into_iter()
                    .zip(offspring.fitness),
            )
            .collect();

        pool.sort_by(|a, b| b.1.total_cmp(&a.1));
        pool.truncate(size);

        let (chromosomes, fitness): (Vec<_>, Vec<_>) = pool.into_iter().unzip();
        ScoredPopulation::new(Population::from(chromosomes), fitness)
    }
}
