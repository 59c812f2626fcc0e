//! Evolutionary search for arithmetic expressions that evaluate to a target.
//!
//! Genomes are fixed-length bit strings read in 4-bit genes. Each gene maps to
//! a digit, an operator or nothing; the decoded expression is scored against
//! the target and the population is bred with roulette selection, single-point
//! crossover and bit-flip mutation until some member hits the target exactly.

pub mod cli;
pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use error::{EvalError, Result, RevcalcError};
pub use types::{Number, Target};
