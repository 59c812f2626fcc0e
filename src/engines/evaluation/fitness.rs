use crate::engines::evaluation::expression::evaluate_exact;
use crate::types::Target;

/// Fitness of a candidate whose expression hits the target exactly
pub const SOLVED_FITNESS: f64 = 999.0;

/// Scores decoded expressions against a fixed numeric target
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator {
    target: Target,
}

impl FitnessEvaluator {
    pub fn new(target: Target) -> Self {
        Self { target }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Score an expression:
    /// - evaluation failure: 0.0
    /// - exact hit: `SOLVED_FITNESS`. Integers are compared as integers, so
    ///   a result that only matches after rounding to `f64` is not a hit
    /// - otherwise: 1 / |target - result|, kept finite and never equal to
    ///   `SOLVED_FITNESS`
    pub fn score(&self, expression: &str) -> f64 {
        let result = match evaluate_exact(expression) {
            Ok(value) => value,
            Err(e) => {
                log::trace!("'{}' scored 0: {}", expression, e);
                return 0.0;
            }
        };

        let target = self.target.as_number();
        if result.exactly_equals(target) {
            return SOLVED_FITNESS;
        }

        let fitness = (1.0 / result.distance(target)).min(f64::MAX);
        if fitness == SOLVED_FITNESS {
            // Only an exact hit may carry the sentinel
            f64::from_bits(SOLVED_FITNESS.to_bits() - 1)
        } else {
            fitness
        }
    }

    pub fn is_solved(fitness: f64) -> bool {
        fitness == SOLVED_FITNESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_hit_is_solved() {
        let evaluator = FitnessEvaluator::new(Target::Integer(4));
        assert_eq!(evaluator.score("2+2"), SOLVED_FITNESS);
        assert_eq!(evaluator.score("8/2"), SOLVED_FITNESS);
    }

    #[test]
    fn test_distance_score() {
        let evaluator = FitnessEvaluator::new(Target::Integer(10));
        assert_eq!(evaluator.score("8"), 0.5);
        assert_eq!(evaluator.score("9+3"), 0.5);
        assert_eq!(evaluator.score("6"), 0.25);
    }

    #[test]
    fn test_failures_score_zero() {
        let evaluator = FitnessEvaluator::new(Target::Integer(1));
        assert_eq!(evaluator.score(""), 0.0);
        assert_eq!(evaluator.score("3*"), 0.0);
        assert_eq!(evaluator.score("3/0"), 0.0);
    }

    #[test]
    fn test_float_target() {
        let evaluator = FitnessEvaluator::new(Target::Float(1.5));
        assert_eq!(evaluator.score("3/2"), SOLVED_FITNESS);
        assert!(!FitnessEvaluator::is_solved(evaluator.score("1")));
    }

    #[test]
    fn test_integer_target_beyond_f64_precision() {
        // 8^17 * 4 = 2^53, one short of the target; as floats the two are equal
        let power = format!("{}4", "8*".repeat(17));
        let evaluator = FitnessEvaluator::new(Target::Integer(9_007_199_254_740_993));

        let fitness = evaluator.score(&power);
        assert!(!FitnessEvaluator::is_solved(fitness));
        assert_eq!(fitness, 1.0);
        assert_eq!(evaluator.score(&format!("{}+1", power)), SOLVED_FITNESS);

        let evaluator = FitnessEvaluator::new(Target::Integer(9_007_199_254_740_992));
        assert_eq!(evaluator.score(&power), SOLVED_FITNESS);
    }

    #[test]
    fn test_integer_target_against_float_result() {
        let evaluator = FitnessEvaluator::new(Target::Integer(3));
        assert_eq!(evaluator.score("6/2"), SOLVED_FITNESS);
        assert_eq!(evaluator.score("7/2"), 2.0);
    }

    #[test]
    fn test_near_miss_never_reaches_sentinel() {
        let target = 1.0 + 1.0 / SOLVED_FITNESS;
        let evaluator = FitnessEvaluator::new(Target::Float(target));
        let fitness = evaluator.score("1");
        assert!(!FitnessEvaluator::is_solved(fitness));
        assert!((fitness - SOLVED_FITNESS).abs() < 1e-6);
    }
}
