use std::collections::HashSet;

/// Distinct solving expressions in the order they were first found
#[derive(Debug, Clone, Default)]
pub struct SolutionSet {
    expressions: Vec<String>,
    seen: HashSet<String>,
}

impl SolutionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to add an expression; duplicates are rejected
    pub fn try_add(&mut self, expression: &str) -> bool {
        if self.seen.contains(expression) {
            return false;
        }

        self.seen.insert(expression.to_string());
        self.expressions.push(expression.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.expressions
    }

    pub fn into_vec(self) -> Vec<String> {
        self.expressions
    }
}
