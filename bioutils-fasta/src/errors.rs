use std::io;
use thiserror::Error;

use crate::alphabet::AlphabetClassification;

/// Error type for FASTA loading and sequence collection analysis.
#[derive(Error, Debug)]
pub enum FastaError {
    /// IO error occurred while reading or writing a FASTA file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input had no `>` header line or wasn't valid UTF-8 text.
    #[error("Malformed FASTA input: {0}")]
    MalformedInput(String),

    /// A zero-length sequence was met while computing composition fractions.
    #[error("Sequence has zero length: {0}")]
    InvalidSequence(String),

    /// A statistic was requested on a collection without sequences.
    #[error("Sequence collection is empty")]
    EmptyCollection,

    /// A nucleotide-only statistic was requested on another kind of collection.
    #[error("Operation requires a nucleotide collection, found: {0}")]
    UnsupportedAlphabet(AlphabetClassification),
}

/// Result type alias for bioutils-fasta operations.
pub type Result<T> = std::result::Result<T, FastaError>;
