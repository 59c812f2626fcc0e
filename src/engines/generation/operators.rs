use crate::engines::generation::genome::Genome;
use rand::Rng;

/// Roulette wheel pick for a fixed draw: accumulate fitness in order and
/// return the index of the first member whose running sum reaches `draw`.
///
/// Falls back to the last member if rounding leaves the running sum short.
/// Returns `None` only for an empty population.
pub fn roulette_pick(fitnesses: &[f64], draw: f64) -> Option<usize> {
    if fitnesses.is_empty() {
        return None;
    }

    let mut so_far = 0.0;
    for (idx, fitness) in fitnesses.iter().enumerate() {
        so_far += fitness;
        if so_far >= draw {
            return Some(idx);
        }
    }

    Some(fitnesses.len() - 1)
}

/// Roulette wheel selection: probability proportional to fitness.
/// `total_fitness` must be the sum of `fitnesses`.
///
/// With zero total fitness the draw is 0, so the first member always wins.
pub fn roulette_selection<R: Rng>(
    fitnesses: &[f64],
    total_fitness: f64,
    rng: &mut R,
) -> Option<usize> {
    let draw = if total_fitness > 0.0 {
        rng.gen::<f64>() * total_fitness
    } else {
        0.0
    };

    roulette_pick(fitnesses, draw)
}

/// Single-point splice: `parent_a[split..]` followed by `parent_b[..split]`
pub fn crossover_at(parent_a: &[bool], parent_b: &[bool], split: usize) -> Genome {
    let suffix = parent_a.get(split..).unwrap_or(&[]);
    let prefix = &parent_b[..split.min(parent_b.len())];

    let mut child = Vec::with_capacity(suffix.len() + prefix.len());
    child.extend_from_slice(suffix);
    child.extend_from_slice(prefix);
    child
}

/// With probability `crossover_rate`, splice the parents at a random point in
/// `[0, len - 1]`; otherwise copy `parent_a`.
pub fn crossover<R: Rng>(
    parent_a: &[bool],
    parent_b: &[bool],
    crossover_rate: f64,
    rng: &mut R,
) -> Genome {
    if parent_a.is_empty() || rng.gen::<f64>() >= crossover_rate {
        return parent_a.to_vec();
    }

    let split = rng.gen_range(0..parent_a.len());
    crossover_at(parent_a, parent_b, split)
}

/// Mutation: flip each bit independently with probability `mutation_rate`
pub fn mutate<R: Rng>(genome: &mut Genome, mutation_rate: f64, rng: &mut R) {
    for bit in genome.iter_mut() {
        if rng.gen::<f64>() < mutation_rate {
            *bit = !*bit;
        }
    }
}

/// Generate random genome
pub fn random_genome<R: Rng>(length: usize, rng: &mut R) -> Genome {
    (0..length).map(|_| rng.gen::<bool>()).collect()
}
