use crate::error::EvalError;
use crate::types::{Number, Operator};

/// Evaluate an infix arithmetic expression over decimal literals and
/// `+ - * /`, with the usual precedence and left associativity.
///
/// Nothing else is accepted: no whitespace, no parentheses, no unary signs.
/// `+ - *` on integers are exact; `/` always yields a float.
pub fn evaluate_exact(expression: &str) -> Result<Number, EvalError> {
    if expression.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser::new(expression);
    let value = parser.parse_sum()?;

    if let Some((position, found)) = parser.peek() {
        return Err(EvalError::UnexpectedChar { found, position });
    }
    if let Number::Float(f) = value {
        if !f.is_finite() {
            return Err(EvalError::NonFinite);
        }
    }

    Ok(value)
}

/// [`evaluate_exact`], widened to `f64`
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    evaluate_exact(expression).map(Number::as_f64)
}

struct Parser<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
        }
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }

    /// sum := product (('+' | '-') product)*
    fn parse_sum(&mut self) -> Result<Number, EvalError> {
        let mut value = self.parse_product()?;

        while let Some(op) = self.next_operator(&[Operator::Add, Operator::Sub]) {
            let rhs = self.parse_product()?;
            value = apply(op, value, rhs)?;
        }

        Ok(value)
    }

    /// product := number (('*' | '/') number)*
    fn parse_product(&mut self) -> Result<Number, EvalError> {
        let mut value = self.parse_number()?;

        while let Some(op) = self.next_operator(&[Operator::Mul, Operator::Div]) {
            let rhs = self.parse_number()?;
            value = apply(op, value, rhs)?;
        }

        Ok(value)
    }

    fn parse_number(&mut self) -> Result<Number, EvalError> {
        let mut value: Option<Number> = None;

        while let Some((_, c)) = self.peek() {
            let Some(digit) = c.to_digit(10) else { break };
            value = Some(push_digit(value.unwrap_or(Number::Int(0)), digit));
            self.chars.next();
        }

        match (value, self.peek()) {
            (Some(v), _) => Ok(v),
            (None, Some((position, found))) => Err(EvalError::UnexpectedChar { found, position }),
            (None, None) => Err(EvalError::UnexpectedEnd),
        }
    }

    /// Consume the next character if it is one of `allowed`
    fn next_operator(&mut self, allowed: &[Operator]) -> Option<Operator> {
        let (_, c) = self.peek()?;
        let op = Operator::from_char(c).filter(|op| allowed.contains(op))?;
        self.chars.next();
        Some(op)
    }
}

fn push_digit(value: Number, digit: u32) -> Number {
    match value {
        Number::Int(i) => i
            .checked_mul(10)
            .and_then(|i| i.checked_add(i128::from(digit)))
            .map_or_else(|| Number::Float(i as f64 * 10.0 + f64::from(digit)), Number::Int),
        Number::Float(f) => Number::Float(f * 10.0 + f64::from(digit)),
    }
}

fn apply(op: Operator, lhs: Number, rhs: Number) -> Result<Number, EvalError> {
    if let (Number::Int(a), Number::Int(b)) = (lhs, rhs) {
        let exact = match op {
            Operator::Add => a.checked_add(b),
            Operator::Sub => a.checked_sub(b),
            Operator::Mul => a.checked_mul(b),
            Operator::Div => None,
        };
        if let Some(value) = exact {
            return Ok(Number::Int(value));
        }
    }

    let (lhs, rhs) = (lhs.as_f64(), rhs.as_f64());
    match op {
        Operator::Add => Ok(Number::Float(lhs + rhs)),
        Operator::Sub => Ok(Number::Float(lhs - rhs)),
        Operator::Mul => Ok(Number::Float(lhs * rhs)),
        Operator::Div if rhs == 0.0 => Err(EvalError::DivisionByZero),
        Operator::Div => Ok(Number::Float(lhs / rhs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit() {
        assert_eq!(evaluate("7"), Ok(7.0));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("2+3*4"), Ok(14.0));
        assert_eq!(evaluate("8-6/2"), Ok(5.0));
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(evaluate("9-3-2"), Ok(4.0));
        assert_eq!(evaluate("8/4/2"), Ok(1.0));
    }

    #[test]
    fn test_float_division() {
        assert_eq!(evaluate("3/2"), Ok(1.5));
        assert_eq!(evaluate("1/3*3"), Ok(1.0 / 3.0 * 3.0));
    }

    #[test]
    fn test_multi_digit_literals() {
        assert_eq!(evaluate("12+30"), Ok(42.0));
    }

    #[test]
    fn test_integer_arithmetic_stays_exact() {
        // 8^17 * 4 = 2^53, where f64 stops representing every integer
        let power = format!("{}4", "8*".repeat(17));
        assert_eq!(evaluate_exact(&power), Ok(Number::Int(9_007_199_254_740_992)));
        assert_eq!(
            evaluate_exact(&format!("{}+1", power)),
            Ok(Number::Int(9_007_199_254_740_993))
        );
        assert_eq!(evaluate_exact("7-9"), Ok(Number::Int(-2)));
        assert_eq!(evaluate_exact("6/3"), Ok(Number::Float(2.0)));
    }

    #[test]
    fn test_integer_overflow_falls_back_to_float() {
        // 9^46 is about 7.9e43, well past i128::MAX
        let huge = format!("{}9", "9*".repeat(45));
        assert!(matches!(evaluate_exact(&huge), Ok(Number::Float(f)) if f > 1e43));
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(evaluate(""), Err(EvalError::Empty));
    }

    #[test]
    fn test_trailing_operator() {
        assert_eq!(evaluate("2+"), Err(EvalError::UnexpectedEnd));
        assert_eq!(evaluate("4*3-"), Err(EvalError::UnexpectedEnd));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("5/0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("1+0/0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_rejects_foreign_characters() {
        assert_eq!(
            evaluate("2+x"),
            Err(EvalError::UnexpectedChar { found: 'x', position: 2 })
        );
        assert_eq!(
            evaluate("2 "),
            Err(EvalError::UnexpectedChar { found: ' ', position: 1 })
        );
        assert!(evaluate("(1)").is_err());
        assert!(evaluate("-1").is_err());
    }
}
