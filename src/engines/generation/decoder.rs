use crate::engines::generation::gene_consumer::GeneConsumer;
use crate::types::{Operator, Symbol};

/// Map a gene value to its symbol. Values 0-9 are digits, 10-13 are the four
/// operators; anything else encodes nothing.
pub fn symbol_for_gene(gene: u32) -> Option<Symbol> {
    match gene {
        0..=9 => Some(Symbol::Digit(gene as u8)),
        10 => Some(Symbol::Operator(Operator::Add)),
        11 => Some(Symbol::Operator(Operator::Sub)),
        12 => Some(Symbol::Operator(Operator::Mul)),
        13 => Some(Symbol::Operator(Operator::Div)),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeMode {
    ExpectOperand,
    ExpectOperator,
}

/// Turns genomes into expression strings
#[derive(Debug, Clone)]
pub struct ExpressionDecoder {
    gene_length: usize,
}

impl ExpressionDecoder {
    pub fn new(gene_length: usize) -> Self {
        Self { gene_length }
    }

    /// Scan genes left to right, keeping only the genes that fit the current
    /// mode. Digits and operators therefore strictly alternate, starting with
    /// a digit. The result may be empty or end on an operator.
    pub fn decode(&self, genome: &[bool]) -> String {
        let mut expression = String::new();
        let mut mode = DecodeMode::ExpectOperand;

        for gene in GeneConsumer::new(genome, self.gene_length) {
            match (mode, symbol_for_gene(gene)) {
                (DecodeMode::ExpectOperand, Some(symbol @ Symbol::Digit(_))) => {
                    expression.push(symbol.as_char());
                    mode = DecodeMode::ExpectOperator;
                }
                (DecodeMode::ExpectOperator, Some(symbol @ Symbol::Operator(_))) => {
                    expression.push(symbol.as_char());
                    mode = DecodeMode::ExpectOperand;
                }
                _ => {}
            }
        }

        expression
    }
}
