pub mod selection_strategy;
pub mod sus;
pub mod tournament;

pub use selection_strategy::{SelectionMethod, SelectionStrategy};
pub use sus::StochasticUniversalSampling;
pub use tournament::TournamentSelection;
