pub mod genome;
pub mod gene_consumer;
pub mod decoder;
pub mod operators;
pub mod solutions;
pub mod evolution_engine;
pub mod progress;

pub use genome::Genome;
pub use decoder::ExpressionDecoder;
pub use solutions::SolutionSet;
pub use evolution_engine::{EvolutionEngine, ProgressCallback, SearchState};
pub use progress::{LogProgressCallback, SilentProgressCallback};
