//! # Replacement
//!
//! Replacement strategies decide which chromosomes form the next generation
//! once the offspring have been mutated. Both strategies shipped here keep
//! the best fitness from regressing between generations.
pub mod elitist;
pub mod steady_state;

use std::fmt::Debug;

use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::evaluator::ScoredPopulation;

pub use elitist::ElitistReplacement;
pub use steady_state::SteadyStateReplacement;

/// The best chromosome of the previous population and its fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Incumbent<G> {
    pub chromosome: Chromosome<G>,
    pub fitness: f64,
}

/// Trait for replacement strategies.
pub trait ReplacementStrategy<G>: Debug + Send + Sync
where
    G: Clone,
{
    /// Builds the next generation from the previous one, its best
    /// chromosome and the mutated offspring. The result has exactly as many
    /// chromosomes as `offspring`.
    ///
    /// # Errors
    ///
    /// Returns an error if the offspring population is empty or if a
    /// population and its fitness vector differ in length.
    fn replace(
        &self,
        previous: ScoredPopulation<G>,
        incumbent: &Incumbent<G>,
        offspring: ScoredPopulation<G>,
    ) -> Result<ScoredPopulation<G>>;
}

/// The replacement policy chosen for a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplacementMethod {
    /// Offspring replace the population; the incumbent displaces the worst
    /// offspring when it is strictly better.
    #[default]
    Elitist,
    /// The fittest half of parents plus offspring survives.
    SteadyState,
}

impl<G> ReplacementStrategy<G> for ReplacementMethod
where
    G: Clone,
{
    fn replace(
        &self,
        previous: ScoredPopulation<G>,
        incumbent: &Incumbent<G>,
        offspring: ScoredPopulation<G>,
    ) -> Result<ScoredPopulation<G>> {
        match self {
            ReplacementMethod::Elitist => {
                ElitistReplacement.replace(previous, incumbent, offspring)
            }
            ReplacementMethod::SteadyState => {
                SteadyStateReplacement.replace(previous, incumbent, offspring)
            }
        }
    }
}
