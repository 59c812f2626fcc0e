pub mod app;
pub mod args;
pub mod report;
pub mod runner;

pub use crate::types::Target;
pub use app::run;
pub use args::Args;
pub use report::SearchReport;
pub use runner::SearchRunner;
