/// Genome representation for the equation search
///
/// A genome is a fixed-length sequence of bits. It is read in groups of
/// `gene_length` bits (most significant bit first); each group is one gene,
/// and the `ExpressionDecoder` turns the gene sequence into an arithmetic
/// expression.
///
/// # Why bits instead of symbols?
///
/// Working on raw bits keeps the genetic operators trivial:
/// - **Crossover**: splicing two bit vectors at one point
/// - **Mutation**: flipping single bits
/// - **No invalid states**: genes that map to no symbol are simply skipped
///
/// # Example
///
/// ```
/// use revcalc::engines::generation::genome::parse_bits;
///
/// // 0010 = '2', 1010 = '+', 0010 = '2'
/// let genome = parse_bits("0010 1010 0010").unwrap();
/// assert_eq!(genome.len(), 12);
/// ```
pub type Genome = Vec<bool>;

/// Parse a string of '0'/'1' characters into a genome. Whitespace is ignored
/// so genes can be written in groups.
pub fn parse_bits(bits: &str) -> Option<Genome> {
    bits.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '0' => Some(false),
            '1' => Some(true),
            _ => None,
        })
        .collect()
}

pub fn to_bit_string(genome: &[bool]) -> String {
    genome.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}
