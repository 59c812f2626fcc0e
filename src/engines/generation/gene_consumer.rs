/// Sequentially reads fixed-width genes from a bit genome
///
/// A trailing group shorter than `gene_length` is not a gene and is never
/// yielded.
pub struct GeneConsumer<'a> {
    genome: &'a [bool],
    gene_length: usize,
    position: usize,
}

impl<'a> GeneConsumer<'a> {
    pub fn new(genome: &'a [bool], gene_length: usize) -> Self {
        Self {
            genome,
            gene_length,
            position: 0,
        }
    }

    /// Consume the next gene and return its unsigned value
    pub fn consume(&mut self) -> Option<u32> {
        if !self.has_genes() {
            return None;
        }

        let end = self.position + self.gene_length;
        let gene = self.genome[self.position..end]
            .iter()
            .fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit));
        self.position = end;
        Some(gene)
    }

    /// Check if a full gene remains
    pub fn has_genes(&self) -> bool {
        self.gene_length > 0 && self.position + self.gene_length <= self.genome.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl Iterator for GeneConsumer<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.consume()
    }
}
