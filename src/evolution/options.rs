//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct is the single configuration record of a run:
//! the generation budget, the population size, the base mutation rate, one
//! tagged choice per strategy axis and the logging level. It is validated once
//! when built and immutable afterwards.
//!
//! ## Example
//!
//! ```rust
//! use scqbf_ga::evolution::options::{EvolutionOptions, LogLevel};
//! use scqbf_ga::selection::SelectionMethod;
//! use scqbf_ga::replacement::ReplacementMethod;
//!
//! // Defaults: 1000 generations, 100 chromosomes, mutation rate 0.05,
//! // tournament selection, two-point crossover, fixed mutation, elitism.
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 100);
//!
//! let custom_options = EvolutionOptions::builder()
//!     .num_generations(200)
//!     .population_size(50)
//!     .mutation_rate(0.1)
//!     .selection(SelectionMethod::StochasticUniversalSampling)
//!     .replacement(ReplacementMethod::SteadyState)
//!     .log_level(LogLevel::Minimal)
//!     .build()
//!     .unwrap();
//! assert_eq!(custom_options.get_num_generations(), 200);
//!
//! // Odd population sizes cannot be paired for crossover.
//! assert!(EvolutionOptions::builder().population_size(5).build().is_err());
//! ```

use crate::crossover::CrossoverMethod;
use crate::error::{GeneticError, Result};
use crate::mutation::MutationMethod;
use crate::replacement::ReplacementMethod;
use crate::selection::SelectionMethod;

const DEFAULT_NUM_GENERATIONS: usize = 1000;
const DEFAULT_POPULATION_SIZE: usize = 100;
const DEFAULT_MUTATION_RATE: f64 = 0.05;

/// How much a run reports through `tracing`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every generation's best fitness, plus every improvement.
    Verbose,
    /// Improvements of the best-ever solution only.
    Minimal,
    /// Nothing beyond the run span.
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    population_size: usize,
    mutation_rate: f64,
    selection: SelectionMethod,
    crossover: CrossoverMethod,
    mutation: MutationMethod,
    replacement: ReplacementMethod,
    log_level: LogLevel,
}

impl EvolutionOptions {
    /// Creates validated options with the default strategies.
    ///
    /// # Errors
    ///
    /// See [`EvolutionOptions::validate`].
    pub fn new(num_generations: usize, population_size: usize, mutation_rate: f64) -> Result<Self> {
        Self::builder()
            .num_generations(num_generations)
            .population_size(population_size)
            .mutation_rate(mutation_rate)
            .build()
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }

    /// Returns a builder pre-filled with these options, for deriving variants.
    pub fn to_builder(&self) -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder {
            num_generations: Some(self.num_generations),
            population_size: Some(self.population_size),
            mutation_rate: Some(self.mutation_rate),
            selection: Some(self.selection),
            crossover: Some(self.crossover),
            mutation: Some(self.mutation),
            replacement: Some(self.replacement),
            log_level: Some(self.log_level),
        }
    }

    /// Checks the preconditions the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if:
    /// - The population size is zero or odd
    /// - The mutation rate is not a finite value in `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.population_size % 2 != 0 {
            return Err(GeneticError::Configuration(format!(
                "Population size must be even for pairwise crossover, got {}",
                self.population_size
            )));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }

        Ok(())
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_selection(&self) -> SelectionMethod {
        self.selection
    }

    pub fn get_crossover(&self) -> CrossoverMethod {
        self.crossover
    }

    pub fn get_mutation(&self) -> MutationMethod {
        self.mutation
    }

    pub fn get_replacement(&self) -> ReplacementMethod {
        self.replacement
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: DEFAULT_NUM_GENERATIONS,
            population_size: DEFAULT_POPULATION_SIZE,
            mutation_rate: DEFAULT_MUTATION_RATE,
            selection: SelectionMethod::default(),
            crossover: CrossoverMethod::default(),
            mutation: MutationMethod::default(),
            replacement: ReplacementMethod::default(),
            log_level: LogLevel::default(),
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset fields fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    population_size: Option<usize>,
    mutation_rate: Option<f64>,
    selection: Option<SelectionMethod>,
    crossover: Option<CrossoverMethod>,
    mutation: Option<MutationMethod>,
    replacement: Option<ReplacementMethod>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    /// Sets the generation budget.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the base mutation rate.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn selection(mut self, value: SelectionMethod) -> Self {
        self.selection = Some(value);
        self
    }

    pub fn crossover(mut self, value: CrossoverMethod) -> Self {
        self.crossover = Some(value);
        self
    }

    pub fn mutation(mut self, value: MutationMethod) -> Self {
        self.mutation = Some(value);
        self
    }

    pub fn replacement(mut self, value: ReplacementMethod) -> Self {
        self.replacement = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds and validates the `EvolutionOptions` instance.
    ///
    /// # Errors
    ///
    /// See [`EvolutionOptions::validate`].
    pub fn build(self) -> Result<EvolutionOptions> {
        let options = EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(DEFAULT_NUM_GENERATIONS),
            population_size: self.population_size.unwrap_or(DEFAULT_POPULATION_SIZE),
            mutation_rate: self.mutation_rate.unwrap_or(DEFAULT_MUTATION_RATE),
            selection: self.selection.unwrap_or_default(),
            crossover: self.crossover.unwrap_or_default(),
            mutation: self.mutation.unwrap_or_default(),
            replacement: self.replacement.unwrap_or_default(),
            log_level: self.log_level.unwrap_or_default(),
        };
        options.validate()?;
        Ok(options)
    }
}
