use super::traits::ConfigSection;
use crate::error::RevcalcError;
use serde::{Deserialize, Serialize};

/// Widest gene the decoder supports
pub const MAX_GENE_LENGTH: usize = 16;

/// Narrowest gene that can still encode every digit and operator
pub const MIN_GENE_LENGTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub chromosome_length: usize,
    pub gene_length: usize,
    pub population_size: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    /// Optional safety cap; `None` runs until a solution appears
    pub max_generations: Option<usize>,
    /// Fixed seed for reproducible runs; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            chromosome_length: 100,
            gene_length: 4,
            population_size: 10,
            mutation_rate: 0.001,
            crossover_rate: 0.7,
            max_generations: None,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), RevcalcError> {
        if !(MIN_GENE_LENGTH..=MAX_GENE_LENGTH).contains(&self.gene_length) {
            return Err(RevcalcError::Configuration(format!(
                "Gene length must be between {} and {}",
                MIN_GENE_LENGTH, MAX_GENE_LENGTH
            )));
        }
        if self.chromosome_length < self.gene_length {
            return Err(RevcalcError::Configuration(
                "Chromosome length must hold at least one gene".to_string()
            ));
        }
        if self.population_size == 0 {
            return Err(RevcalcError::Configuration(
                "Population size must be at least 1".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(RevcalcError::Configuration(
                "Mutation rate must be between 0 and 1".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(RevcalcError::Configuration(
                "Crossover rate must be between 0 and 1".to_string()
            ));
        }
        if self.max_generations == Some(0) {
            return Err(RevcalcError::Configuration(
                "Generation cap must be at least 1 when set".to_string()
            ));
        }
        Ok(())
    }
}
