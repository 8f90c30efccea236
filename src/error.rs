//! # Error Types
//!
//! This module defines the error type shared by every part of the engine.
//! The core performs no I/O, so almost every variant describes either a
//! configuration problem caught before the first generation or a broken
//! contract reported by an evaluator hook.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use scqbf_ga::error::{GeneticError, Result};
//!
//! fn require_even(size: usize) -> Result<usize> {
//!     if size % 2 != 0 {
//!         return Err(GeneticError::Configuration(format!(
//!             "Population size must be even, got {}",
//!             size
//!         )));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(require_even(4).is_ok());
//! assert!(require_even(3).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use scqbf_ga::error::{GeneticError, OptionExt};
//!
//! fn find_best_candidate(candidates: &[i32]) -> scqbf_ga::error::Result<i32> {
//!     candidates.iter().max().cloned().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//!
//! assert_eq!(find_best_candidate(&[1, 5, 3]).unwrap(), 5);
//! assert!(find_best_candidate(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the engine.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a fitness calculation fails or yields a non-finite value.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when a selection operator's precondition does not hold.
    #[error("Selection error: {0}")]
    Selection(String),

    /// Error that occurs when a chromosome does not have the evaluator's domain size.
    #[error("Chromosome length error: expected {expected} genes, found {actual}")]
    ChromosomeLength { expected: usize, actual: usize },

    /// Error that occurs when a locus or decoded element lies outside the domain.
    #[error("Bounds error: {0}")]
    OutOfBounds(String),

    /// Error that occurs when an evolution process fails.
    #[error("Evolution error: {0}")]
    Evolution(String),
}

/// A specialized Result type for genetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GeneticError::ChromosomeLength {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Chromosome length error: expected 3 genes, found 2"
        );

        let err = GeneticError::Configuration("bad".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad");
    }

    #[test]
    fn test_option_ext() {
        let some: Option<u8> = Some(1);
        assert_eq!(some.ok_or_else_genetic(|| GeneticError::EmptyPopulation).unwrap(), 1);

        let none: Option<u8> = None;
        assert!(matches!(
            none.ok_or_else_genetic(|| GeneticError::EmptyPopulation),
            Err(GeneticError::EmptyPopulation)
        ));
    }
}
