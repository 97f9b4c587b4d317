//! Summary statistics for sequence collections
//!
//! Length-based statistics such as N50 are only meaningful for assemblies, so
//! they require a collection classified as nucleotide.
//!

use crate::alphabet::{AlphabetClassification, classify_alphabet};
use crate::collection::SequenceCollection;
use crate::errors::{FastaError, Result};

/// Trait for computing summary statistics over a sequence collection.
pub trait SequenceCollectionStatistics {
    /// Sequence lengths in collection order.
    fn lengths(&self) -> Vec<usize>;

    /// Sum of all sequence lengths.
    fn total_length(&self) -> usize {
        self.lengths().iter().sum()
    }

    /// Classify the collection alphabet with the default thresholds.
    fn alphabet(&self) -> Result<AlphabetClassification>;

    /// Compute the N50 of a nucleotide collection.
    ///
    /// Lengths are sorted longest first and summed; N50 is the length at which the
    /// running sum first reaches half of the total.
    ///
    /// # Errors
    ///
    /// - [FastaError::EmptyCollection] if there are no sequences
    /// - [FastaError::UnsupportedAlphabet] if the collection isn't nucleotide
    fn n50(&self) -> Result<usize>;
}

impl SequenceCollectionStatistics for SequenceCollection {
    fn lengths(&self) -> Vec<usize> {
        self.iter().map(|r| r.len()).collect()
    }

    fn alphabet(&self) -> Result<AlphabetClassification> {
        classify_alphabet(self)
    }

    fn n50(&self) -> Result<usize> {
        if self.is_empty() {
            return Err(FastaError::EmptyCollection);
        }

        let alphabet = self.alphabet()?;
        if alphabet != AlphabetClassification::Nucleotide {
            return Err(FastaError::UnsupportedAlphabet(alphabet));
        }

        let mut lengths = self.lengths();
        lengths.sort_unstable_by(|a, b| b.cmp(a)); // descending

        n50_from_sorted(&lengths).ok_or(FastaError::EmptyCollection)
    }
}

/// Compute the N50 of a nucleotide collection. See [SequenceCollectionStatistics::n50].
pub fn compute_n50(collection: &SequenceCollection) -> Result<usize> {
    collection.n50()
}

/// N50 over lengths already sorted longest first. `None` for an empty slice.
fn n50_from_sorted(sorted_lengths: &[usize]) -> Option<usize> {
    let total: usize = sorted_lengths.iter().sum();
    let half = total as f64 / 2.0;

    let mut cumulative = 0usize;
    for &length in sorted_lengths {
        cumulative += length;
        if cumulative as f64 >= half {
            return Some(length);
        }
    }
    None
}
