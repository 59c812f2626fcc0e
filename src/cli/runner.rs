use super::report::SearchReport;
use crate::types::Target;
use crate::config::EvolutionConfig;
use crate::engines::generation::{EvolutionEngine, LogProgressCallback};
use crate::error::RevcalcError;
use std::time::Instant;

/// Runs one independent search per target, in order
pub struct SearchRunner {
    config: EvolutionConfig,
}

impl SearchRunner {
    pub fn new(config: EvolutionConfig) -> Self {
        Self { config }
    }

    /// Parse one raw input and search for it
    pub fn run_input(&self, input: &str) -> Result<SearchReport, RevcalcError> {
        let target = Target::parse(input)?;
        Ok(self.run_target(target))
    }

    pub fn run_target(&self, target: Target) -> SearchReport {
        log::info!("Searching for {}", target);

        let mut engine = EvolutionEngine::new(self.config.clone(), target);
        let start = Instant::now();
        let outcome = engine.run(LogProgressCallback::new(target));

        SearchReport::new(target, outcome, start.elapsed())
    }

    /// Run every input in order, handing each result to `on_result` as soon as
    /// it is ready. A bad input is reported and does not stop the rest; an
    /// error returned by `on_result` does.
    pub fn run_all<'a, I, F, E>(&self, inputs: I, mut on_result: F) -> Result<(), E>
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(&str, Result<SearchReport, RevcalcError>) -> Result<(), E>,
    {
        for input in inputs {
            let result = self.run_input(input);
            if let Err(e) = &result {
                log::warn!("Skipping input: {}", e);
            }
            on_result(input, result)?;
        }
        Ok(())
    }
}
