//! A deterministic genetic algorithm engine with pluggable selection,
//! crossover, mutation and replacement strategies, driven by an external
//! [`Evaluator`](evaluator::Evaluator) that decodes and scores chromosomes.
pub mod chromosome;
pub mod crossover;
pub mod error;
pub mod evaluator;
pub mod evolution;
pub mod mutation;
pub mod problems;
pub mod replacement;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use chromosome::{Chromosome, Population};
pub use error::{GeneticError, OptionExt, Result};
pub use evaluator::{Evaluator, Solution};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult};
