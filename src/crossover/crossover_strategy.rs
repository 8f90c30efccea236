use std::fmt::Debug;

use crate::chromosome::{Chromosome, Population};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

use super::{TwoPointCrossover, UniformCrossover};

/// Trait for crossover strategies.
///
/// Implementors receive the whole parent population and return an offspring
/// population of the same size. Every offspring has the length of its parents.
pub trait CrossoverStrategy<G>: Debug + Send + Sync
where
    G: Clone,
{
    /// Recombines consecutive parent pairs into offspring pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent count is zero or odd, or if the two
    /// parents of a pair differ in length.
    fn crossover(
        &self,
        parents: &Population<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<G>>;
}

/// The crossover operator chosen for a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossoverMethod {
    /// Swap the genes between two random cut points.
    #[default]
    TwoPoint,
    /// Swap each gene independently on a fair coin.
    Uniform,
}

impl<G> CrossoverStrategy<G> for CrossoverMethod
where
    G: Clone,
{
    fn crossover(
        &self,
        parents: &Population<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<G>> {
        match self {
            CrossoverMethod::TwoPoint => TwoPointCrossover.crossover(parents, rng),
            CrossoverMethod::Uniform => UniformCrossover.crossover(parents, rng),
        }
    }
}

/// Splits the parents into consecutive pairs after checking the pairing preconditions.
pub(crate) fn parent_pairs<'a, G>(
    parents: &'a Population<G>,
) -> Result<impl Iterator<Item = (&'a Chromosome<G>, &'a Chromosome<G>)>> {
    if parents.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    if parents.len() % 2 != 0 {
        return Err(GeneticError::Configuration(format!(
            "Crossover requires an even number of parents, got {}",
            parents.len()
        )));
    }

    for pair in parents.as_slice().chunks_exact(2) {
        if pair[0].len() != pair[1].len() {
            return Err(GeneticError::ChromosomeLength {
                expected: pair[0].len(),
                actual: pair[1].len(),
            });
        }
    }

    Ok(parents
        .as_slice()
        .chunks_exact(2)
        .map(|pair| (&pair[0], &pair[1])))
}
