use crate::config::EvolutionConfig;
use crate::engines::evaluation::FitnessEvaluator;
use crate::engines::generation::{
    decoder::ExpressionDecoder,
    genome::{to_bit_string, Genome},
    operators::{crossover, mutate, random_genome, roulette_selection},
    solutions::SolutionSet,
};
use crate::types::{Candidate, SearchOutcome, Target};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Where the generational loop stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Evaluating,
    /// Absorbing: no further generations run
    Terminated,
}

pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, total_fitness: f64);
}

impl<C: ProgressCallback + ?Sized> ProgressCallback for &mut C {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation);
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, total_fitness: f64) {
        (**self).on_generation_complete(generation, best_fitness, total_fitness);
    }
}

/// Evolves a population of bit genomes until one decodes to an expression
/// that evaluates exactly to the target.
pub struct EvolutionEngine<R: Rng = StdRng> {
    config: EvolutionConfig,
    decoder: ExpressionDecoder,
    evaluator: FitnessEvaluator,
    population: Vec<Candidate>,
    state: SearchState,
    generation: usize,
    solutions: SolutionSet,
    rng: R,
}

impl EvolutionEngine<StdRng> {
    pub fn new(config: EvolutionConfig, target: Target) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, target, rng)
    }
}

impl<R: Rng> EvolutionEngine<R> {
    /// Build an engine drawing from `rng`, with a freshly randomized population
    pub fn with_rng(config: EvolutionConfig, target: Target, mut rng: R) -> Self {
        let population = (0..config.population_size)
            .map(|_| Candidate::new(random_genome(config.chromosome_length, &mut rng)))
            .collect();

        Self {
            decoder: ExpressionDecoder::new(config.gene_length),
            evaluator: FitnessEvaluator::new(target),
            config,
            population,
            state: SearchState::Evaluating,
            generation: 0,
            solutions: SolutionSet::new(),
            rng,
        }
    }

    /// Replace the initial population with the given genomes
    pub fn with_population(mut self, genomes: Vec<Genome>) -> Self {
        self.population = genomes.into_iter().map(Candidate::new).collect();
        self
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    pub fn solutions(&self) -> &[String] {
        self.solutions.as_slice()
    }

    /// Run one generation: score everyone, then either terminate or breed the
    /// next population.
    pub fn step<C: ProgressCallback>(&mut self, callback: &mut C) -> SearchState {
        if self.state == SearchState::Terminated {
            return self.state;
        }

        self.generation += 1;
        callback.on_generation_start(self.generation);

        let total_fitness = self.evaluate_population();
        let best_fitness = self
            .population
            .iter()
            .map(|c| c.fitness)
            .fold(0.0, f64::max);

        for candidate in &self.population {
            if !FitnessEvaluator::is_solved(candidate.fitness) {
                continue;
            }
            if self.solutions.try_add(&candidate.expression) {
                log::trace!(
                    "Solution '{}' from genome {}",
                    candidate.expression,
                    to_bit_string(&candidate.genome)
                );
            }
        }

        callback.on_generation_complete(self.generation, best_fitness, total_fitness);

        if !self.solutions.is_empty() {
            log::debug!(
                "Target {} solved in generation {}: {:?}",
                self.evaluator.target(),
                self.generation,
                self.solutions.as_slice()
            );
            self.state = SearchState::Terminated;
        } else if self.config.max_generations.is_some_and(|cap| self.generation >= cap) {
            log::warn!(
                "Target {} not reached within {} generations",
                self.evaluator.target(),
                self.generation
            );
            self.state = SearchState::Terminated;
        } else {
            self.population = self.create_next_generation(total_fitness);
        }

        self.state
    }

    /// Run the evolution process until it terminates.
    ///
    /// Without `max_generations` this only returns once a solution is found.
    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> SearchOutcome {
        while self.step(&mut callback) == SearchState::Evaluating {}

        SearchOutcome {
            solutions: self.solutions.as_slice().to_vec(),
            generations: self.generation,
            solved: !self.solutions.is_empty(),
        }
    }

    /// Decode and score every candidate, returning the total fitness
    fn evaluate_population(&mut self) -> f64 {
        let mut total_fitness = 0.0;

        for candidate in &mut self.population {
            candidate.expression = self.decoder.decode(&candidate.genome);
            candidate.fitness = self.evaluator.score(&candidate.expression);
            total_fitness += candidate.fitness;
        }

        total_fitness
    }

    fn create_next_generation(&mut self, total_fitness: f64) -> Vec<Candidate> {
        let fitnesses: Vec<f64> = self.population.iter().map(|c| c.fitness).collect();
        let mut next_generation = Vec::with_capacity(self.config.population_size);

        while next_generation.len() < self.config.population_size {
            let parents = (
                roulette_selection(&fitnesses, total_fitness, &mut self.rng),
                roulette_selection(&fitnesses, total_fitness, &mut self.rng),
            );
            let (Some(a), Some(b)) = parents else {
                break;
            };

            let mut child = crossover(
                &self.population[a].genome,
                &self.population[b].genome,
                self.config.crossover_rate,
                &mut self.rng,
            );
            mutate(&mut child, self.config.mutation_rate, &mut self.rng);
            next_generation.push(Candidate::new(child));
        }

        next_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::genome::parse_bits;
    use crate::engines::generation::progress::SilentProgressCallback;

    fn padded(bits: &str, length: usize) -> Genome {
        let mut genome = parse_bits(bits).unwrap();
        genome.resize(length, true);
        genome
    }

    #[test]
    fn test_random_population_shape() {
        let config = EvolutionConfig { seed: Some(1), ..Default::default() };
        let engine = EvolutionEngine::new(config, Target::Integer(4));
        assert_eq!(engine.population().len(), 10);
        assert!(engine.population().iter().all(|c| c.genome.len() == 100));
        assert_eq!(engine.state(), SearchState::Evaluating);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_step_terminates_on_solution() {
        let config = EvolutionConfig { seed: Some(2), population_size: 2, ..Default::default() };
        let mut engine = EvolutionEngine::new(config, Target::Integer(9)).with_population(vec![
            padded("0011 1100 0011", 100),
            padded("1111", 100),
        ]);

        let state = engine.step(&mut SilentProgressCallback);
        assert_eq!(state, SearchState::Terminated);
        assert_eq!(engine.solutions(), &["3*3".to_string()]);
        assert_eq!(engine.population()[0].fitness, 999.0);
        assert_eq!(engine.population()[1].fitness, 0.0);

        // Terminated is absorbing
        assert_eq!(engine.step(&mut SilentProgressCallback), SearchState::Terminated);
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_unsolved_step_breeds_full_population() {
        let config = EvolutionConfig { seed: Some(3), population_size: 4, ..Default::default() };
        let mut engine = EvolutionEngine::new(config, Target::Integer(1000))
            .with_population(vec![padded("1111", 100); 4]);

        assert_eq!(engine.step(&mut SilentProgressCallback), SearchState::Evaluating);
        assert_eq!(engine.generation(), 1);
        assert_eq!(engine.population().len(), 4);
        assert!(engine.population().iter().all(|c| c.genome.len() == 100));
    }

    #[test]
    fn test_generation_cap_stops_unsolved_run() {
        let config = EvolutionConfig {
            seed: Some(4),
            max_generations: Some(3),
            mutation_rate: 0.0,
            ..Default::default()
        };
        // All-ones genomes decode to nothing and, without mutation, stay that way
        let mut engine = EvolutionEngine::new(config, Target::Integer(5))
            .with_population(vec![padded("", 100); 10]);

        let outcome = engine.run(SilentProgressCallback);
        assert!(!outcome.solved);
        assert!(outcome.solutions.is_empty());
        assert_eq!(outcome.generations, 3);
    }
}
