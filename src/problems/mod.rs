//! Concrete evaluators.
pub mod qbf;

pub use qbf::QbfEvaluator;
