use super::evolution_engine::ProgressCallback;
use crate::types::Target;

/// Reports generation progress through the `log` facade
pub struct LogProgressCallback {
    target: Target,
}

impl LogProgressCallback {
    pub fn new(target: Target) -> Self {
        Self { target }
    }
}

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::trace!("[target {}] generation {} starting", self.target, generation);
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, total_fitness: f64) {
        log::debug!(
            "[target {}] generation {} complete. Best fitness: {:.4}, total: {:.4}",
            self.target, generation, best_fitness, total_fitness
        );
    }
}

/// Ignores all progress events
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _generation: usize, _best: f64, _total: f64) {}
}
