use crate::config::{AppConfig, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

/// Evolve arithmetic expressions that evaluate to each target number
#[derive(Parser, Debug)]
#[command(name = "revcalc")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Target numbers (a '.' makes a target a float, otherwise an integer)
    #[arg(allow_negative_numbers = true)]
    pub targets: Vec<String>,

    /// TOML or JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of candidates per generation
    #[arg(long)]
    pub population_size: Option<usize>,

    /// Bits per genome
    #[arg(long)]
    pub chromosome_length: Option<usize>,

    /// Bits per gene
    #[arg(long)]
    pub gene_length: Option<usize>,

    /// Per-bit flip probability
    #[arg(long)]
    pub mutation_rate: Option<f64>,

    /// Probability of splicing two parents instead of copying one
    #[arg(long)]
    pub crossover_rate: Option<f64>,

    /// Give up on a target after this many generations (default: never)
    #[arg(long)]
    pub max_generations: Option<usize>,

    /// Random seed (default: random)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Flags given on the command line win over every other source
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        let evolution = &mut config.evolution;

        if let Some(v) = self.population_size {
            evolution.population_size = v;
        }
        if let Some(v) = self.chromosome_length {
            evolution.chromosome_length = v;
        }
        if let Some(v) = self.gene_length {
            evolution.gene_length = v;
        }
        if let Some(v) = self.mutation_rate {
            evolution.mutation_rate = v;
        }
        if let Some(v) = self.crossover_rate {
            evolution.crossover_rate = v;
        }
        if self.max_generations.is_some() {
            evolution.max_generations = self.max_generations;
        }
        if self.seed.is_some() {
            evolution.seed = self.seed;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
    }
}
