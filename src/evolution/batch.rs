//! # Batch Runs
//!
//! Runs several independent configurations against the same problem in
//! parallel. Each run gets its own clone of the evaluator, its own random
//! stream seeded from its [`RunConfig`] and its own population, so the
//! results are exactly those of running the configurations one after another.
//!
//! ## Example
//!
//! ```rust
//! use scqbf_ga::evolution::batch::{run_batch, RunConfig};
//! use scqbf_ga::evolution::EvolutionOptions;
//! use scqbf_ga::problems::QbfEvaluator;
//!
//! let evaluator = QbfEvaluator::new(vec![
//!     vec![1.0, -2.0, 0.0],
//!     vec![0.0, 3.0, 1.0],
//!     vec![0.0, 0.0, -1.0],
//! ])
//! .unwrap();
//!
//! let base = EvolutionOptions::new(20, 10, 0.05).unwrap();
//! let configs = RunConfig::sweep(&base, 42).unwrap();
//! let results = run_batch(&evaluator, &configs);
//!
//! assert_eq!(results.len(), configs.len());
//! assert!(results.iter().all(|(_, result)| result.is_ok()));
//! ```

use rayon::prelude::*;
use tracing::info;

use super::launcher::{EvolutionLauncher, EvolutionResult};
use super::options::EvolutionOptions;
use crate::error::Result;
use crate::evaluator::Evaluator;

/// One labelled run: its options and the seed of its random stream.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub label: String,
    pub options: EvolutionOptions,
    pub seed: u64,
}

impl RunConfig {
    pub fn new(label: impl Into<String>, options: EvolutionOptions, seed: u64) -> Self {
        Self {
            label: label.into(),
            options,
            seed,
        }
    }

    /// The standard parameter sweep around `base`: the base run, doubled
    /// population, doubled mutation rate (capped at 1), doubled generations,
    /// and doubled population with doubled generations. All runs share `seed`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a derived variant does not validate.
    pub fn sweep(base: &EvolutionOptions, seed: u64) -> Result<Vec<RunConfig>> {
        let population = base.get_population_size();
        let generations = base.get_num_generations();
        let rate = base.get_mutation_rate();

        Ok(vec![
            RunConfig::new("base", base.clone(), seed),
            RunConfig::new(
                "x2 population",
                base.to_builder().population_size(population * 2).build()?,
                seed,
            ),
            RunConfig::new(
                "x2 mutation",
                base.to_builder().mutation_rate((rate * 2.0).min(1.0)).build()?,
                seed,
            ),
            RunConfig::new(
                "x2 generations",
                base.to_builder().num_generations(generations * 2).build()?,
                seed,
            ),
            RunConfig::new(
                "x2 population, x2 generations",
                base.to_builder()
                    .population_size(population * 2)
                    .num_generations(generations * 2)
                    .build()?,
                seed,
            ),
        ])
    }

    /// Runs this configuration alone.
    pub fn run<E>(&self, evaluator: E) -> Result<EvolutionResult<E::Gene, E::Element>>
    where
        E: Evaluator,
    {
        EvolutionLauncher::with_seed(evaluator, self.options.clone(), self.seed)?.evolve()
    }
}

/// Runs every configuration in parallel and returns the results in input
/// order, each paired with its label.
pub fn run_batch<E>(
    evaluator: &E,
    configs: &[RunConfig],
) -> Vec<(String, Result<EvolutionResult<E::Gene, E::Element>>)>
where
    E: Evaluator + Clone + Send + Sync,
    E::Gene: Send,
    E::Element: Send,
{
    configs
        .par_iter()
        .map(|config| {
            let result = config.run(evaluator.clone());
            if let Ok(result) = &result {
                info!(
                    label = %config.label,
                    seed = config.seed,
                    cost = result.best_cost(),
                    "run finished"
                );
            }
            (config.label.clone(), result)
        })
        .collect()
}
