use crate::engines::generation::genome::Genome;
use crate::error::RevcalcError;
use serde::Serialize;
use std::fmt;
use std::num::IntErrorKind;

/// Arithmetic operator a gene can encode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }
}

/// Value of an evaluated expression.
///
/// Integer arithmetic stays exact while it fits in `i128`; division and
/// overflow fall back to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    Float(f64),
}

// 2^127, the first float past the end of the i128 range
const I128_FLOAT_LIMIT: f64 = i128::MAX as f64;

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Numeric equality without rounding integers through `f64`
    pub fn exactly_equals(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Int(i), Number::Float(f)) | (Number::Float(f), Number::Int(i)) => {
                f.fract() == 0.0
                    && f >= -I128_FLOAT_LIMIT
                    && f < I128_FLOAT_LIMIT
                    && f as i128 == i
            }
        }
    }

    /// Absolute difference, computed in integers when both sides are integers
    pub fn distance(self, other: Number) -> f64 {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => match a.checked_sub(b) {
                Some(d) => d.unsigned_abs() as f64,
                None => (a as f64 - b as f64).abs(),
            },
            _ => (self.as_f64() - other.as_f64()).abs(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

/// A number to search for, parsed from the command line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Target {
    Integer(i128),
    Float(f64),
}

impl Target {
    /// Inputs containing a '.' are floats, everything else must be an integer
    pub fn parse(input: &str) -> Result<Self, RevcalcError> {
        let trimmed = input.trim();
        let invalid = |reason: String| RevcalcError::InvalidTarget {
            input: input.to_string(),
            reason,
        };

        if trimmed.contains('.') {
            let value: f64 = trimmed.parse().map_err(|e| invalid(format!("{}", e)))?;
            if !value.is_finite() {
                return Err(invalid("target must be finite".to_string()));
            }
            Ok(Target::Float(value))
        } else {
            trimmed.parse::<i128>().map(Target::Integer).map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    invalid("integer out of supported range (i128)".to_string())
                }
                _ => invalid(format!("{}", e)),
            })
        }
    }

    pub fn as_number(self) -> Number {
        match self {
            Target::Integer(i) => Number::Int(i),
            Target::Float(f) => Number::Float(f),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Integer(i) => write!(f, "{}", i),
            // Whole floats keep a trailing ".0" so they read as floats
            Target::Float(v) if v.fract() == 0.0 && v.abs() < 1e16 => write!(f, "{:.1}", v),
            Target::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Decoded meaning of a single gene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Digit(u8),
    Operator(Operator),
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Symbol::Digit(d) => char::from(b'0' + d),
            Symbol::Operator(op) => op.as_char(),
        }
    }
}

/// One population member with its derived state for the current generation
#[derive(Debug, Clone)]
pub struct Candidate {
    pub genome: Genome,
    pub expression: String,
    pub fitness: f64,
}

impl Candidate {
    pub fn new(genome: Genome) -> Self {
        Self {
            genome,
            expression: String::new(),
            fitness: 0.0,
        }
    }
}

/// Result of one search run
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub solutions: Vec<String>,  // Distinct solving expressions, first-seen order
    pub generations: usize,      // Includes the terminating generation
    pub solved: bool,            // False only when a generation cap stopped the run
}
