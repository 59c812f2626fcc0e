pub mod expression;
pub mod fitness;

pub use expression::{evaluate, evaluate_exact};
pub use fitness::{FitnessEvaluator, SOLVED_FITNESS};
