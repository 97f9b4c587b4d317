/// Number of leading records inspected when classifying a collection.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;
/// Fraction of a record's residues that must fall in an alphabet for the record to count towards it.
pub const DEFAULT_MIN_RESIDUE_FRACTION: f64 = 0.9;
/// Number of sampled records that must agree before a collection is classified.
pub const DEFAULT_MIN_AGREEING_RECORDS: usize = 8;

pub const NUCLEOTIDE_RESIDUES: &[u8] = b"ATGC";
pub const AMINO_ACID_RESIDUES: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

pub const FASTA_HEADER_PREFIX: char = '>';
