pub mod traits;
pub mod evolution;
pub mod output;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use output::{OutputConfig, OutputFormat};
pub use traits::ConfigSection;
