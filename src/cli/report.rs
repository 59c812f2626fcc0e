use crate::types::Target;
use crate::error::RevcalcError;
use crate::types::SearchOutcome;
use serde::Serialize;
use std::time::Duration;

/// Everything printed for one finished target
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub target: Target,
    pub solutions: Vec<String>,
    pub generations: usize,
    pub solved: bool,
    pub elapsed_ms: f64,
}

impl SearchReport {
    pub fn new(target: Target, outcome: SearchOutcome, elapsed: Duration) -> Self {
        Self {
            target,
            solutions: outcome.solutions,
            generations: outcome.generations,
            solved: outcome.solved,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }

    pub fn to_text(&self) -> String {
        let unsolved = if self.solved { "" } else { " (not solved)" };
        format!(
            "Target: {}\nEquation(s): {:?}{}\nGenerations: {}\nTime: {:.4}ms\n~",
            self.target, self.solutions, unsolved, self.generations, self.elapsed_ms
        )
    }

    pub fn to_json(&self) -> Result<String, RevcalcError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> SearchReport {
        SearchReport::new(
            Target::Integer(4),
            SearchOutcome {
                solutions: vec!["2+2".to_string(), "8/2".to_string()],
                generations: 3,
                solved: true,
            },
            Duration::from_micros(1500),
        )
    }

    #[test]
    fn test_text_layout() {
        assert_eq!(
            report().to_text(),
            "Target: 4\nEquation(s): [\"2+2\", \"8/2\"]\nGenerations: 3\nTime: 1.5000ms\n~"
        );
    }

    #[test]
    fn test_text_marks_unsolved_runs() {
        let report = SearchReport::new(
            Target::Float(2.5),
            SearchOutcome { solutions: Vec::new(), generations: 500, solved: false },
            Duration::from_millis(2),
        );
        assert_eq!(
            report.to_text(),
            "Target: 2.5\nEquation(s): [] (not solved)\nGenerations: 500\nTime: 2.0000ms\n~"
        );
    }

    #[test]
    fn test_json_layout() {
        let value: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        assert_eq!(value["target"], 4);
        assert_eq!(value["solutions"][1], "8/2");
        assert_eq!(value["generations"], 3);
        assert_eq!(value["solved"], true);
    }
}
