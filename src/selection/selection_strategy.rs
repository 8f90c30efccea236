use std::fmt::Debug;

use crate::chromosome::Population;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

use super::{StochasticUniversalSampling, TournamentSelection};

/// Trait for parent selection strategies.
///
/// A selection strategy builds a parent population of the same size as the
/// current population. Parents appear in selection order, not fitness order,
/// and a chromosome may be selected more than once.
///
/// # Examples
///
/// ```
/// use scqbf_ga::chromosome::{Chromosome, Population};
/// use scqbf_ga::rng::RandomNumberGenerator;
/// use scqbf_ga::selection::{SelectionStrategy, TournamentSelection};
///
/// let population: Population<u8> = vec![
///     Chromosome::new(vec![0, 0]),
///     Chromosome::new(vec![0, 1]),
///     Chromosome::new(vec![1, 0]),
///     Chromosome::new(vec![1, 1]),
/// ]
/// .into();
/// let fitness = vec![0.0, 1.0, 2.0, 3.0];
/// let mut rng = RandomNumberGenerator::from_seed(0);
///
/// let parents = TournamentSelection.select(&population, &fitness, &mut rng).unwrap();
/// assert_eq!(parents.len(), population.len());
/// ```
pub trait SelectionStrategy<G>: Debug + Send + Sync
where
    G: Clone,
{
    /// Selects `population.len()` parents.
    ///
    /// # Arguments
    ///
    /// * `population` - The current population.
    /// * `fitness` - The fitness of each chromosome, index-aligned with `population`.
    /// * `rng` - The run's random stream.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    /// - The strategy's own precondition on fitness values does not hold
    fn select(
        &self,
        population: &Population<G>,
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<G>>;
}

/// The selection operator chosen for a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMethod {
    /// Binary tournament.
    #[default]
    Tournament,
    /// Stochastic universal sampling. Requires non-negative fitness with a
    /// positive total.
    StochasticUniversalSampling,
}

impl<G> SelectionStrategy<G> for SelectionMethod
where
    G: Clone,
{
    fn select(
        &self,
        population: &Population<G>,
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<G>> {
        match self {
            SelectionMethod::Tournament => TournamentSelection.select(population, fitness, rng),
            SelectionMethod::StochasticUniversalSampling => {
                StochasticUniversalSampling.select(population, fitness, rng)
            }
        }
    }
}

/// Shared argument checks for every selection strategy.
pub(crate) fn validate_inputs<G>(population: &Population<G>, fitness: &[f64]) -> Result<()> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    if fitness.len() != population.len() {
        return Err(GeneticError::Configuration(format!(
            "Fitness vector length ({}) doesn't match population length ({})",
            fitness.len(),
            population.len()
        )));
    }

    Ok(())
}
