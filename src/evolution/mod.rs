pub mod batch;
pub mod launcher;
pub mod options;

pub use batch::{run_batch, RunConfig};
pub use launcher::{EvolutionLauncher, EvolutionResult, GenerationReport};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
