//! # Crossover
//!
//! Crossover operators consume a parent population in consecutive pairs
//! `(0, 1), (2, 3), ...` and emit two offspring per pair, so the offspring
//! population has exactly the size of the parent population. An odd parent
//! count is rejected rather than leaving the last parent unpaired.
pub mod crossover_strategy;
pub mod two_point;
pub mod uniform;

pub use crossover_strategy::{CrossoverMethod, CrossoverStrategy};
pub use two_point::{two_point_pair, TwoPointCrossover};
pub use uniform::UniformCrossover;
