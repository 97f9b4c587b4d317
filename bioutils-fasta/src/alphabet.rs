use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::collection::{SequenceCollection, SequenceRecord};
use crate::config::ClassifierConfig;
use crate::consts::{AMINO_ACID_RESIDUES, NUCLEOTIDE_RESIDUES};
use crate::errors::{FastaError, Result};

/// The kind of residues a sequence collection is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphabetClassification {
    Nucleotide,
    Protein,
    Unknown,
}

impl Display for AlphabetClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlphabetClassification::Nucleotide => write!(f, "nucleotide"),
            AlphabetClassification::Protein => write!(f, "protein"),
            AlphabetClassification::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for AlphabetClassification {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nucleotide" => Ok(AlphabetClassification::Nucleotide),
            "protein" => Ok(AlphabetClassification::Protein),
            "unknown" => Ok(AlphabetClassification::Unknown),
            _ => Err(()),
        }
    }
}

/// Builds a membership table for `residues`. Matching is case-sensitive.
const fn residue_table(residues: &[u8]) -> [bool; 128] {
    let mut arr = [false; 128];
    let mut i = 0;
    while i < residues.len() {
        arr[residues[i] as usize] = true;
        i += 1;
    }
    arr
}

const NUCLEOTIDE_TABLE: [bool; 128] = residue_table(NUCLEOTIDE_RESIDUES);
const AMINO_ACID_TABLE: [bool; 128] = residue_table(AMINO_ACID_RESIDUES);

///
/// Residue counts of a single sequence against the nucleotide and amino-acid
/// alphabets.
///
/// A, C, G and T belong to both alphabets, so a residue can be counted twice.
/// Only upper-case letters are counted; `length` is in characters.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidueComposition {
    pub length: usize,
    pub nucleotide: usize,
    pub amino_acid: usize,
}

impl ResidueComposition {
    pub fn from_sequence(sequence: &str) -> Self {
        let mut composition = ResidueComposition {
            length: 0,
            nucleotide: 0,
            amino_acid: 0,
        };
        for residue in sequence.chars() {
            composition.length += 1;
            if !residue.is_ascii() {
                continue;
            }
            if NUCLEOTIDE_TABLE[residue as usize] {
                composition.nucleotide += 1;
            }
            if AMINO_ACID_TABLE[residue as usize] {
                composition.amino_acid += 1;
            }
        }
        composition
    }

    /// Fraction of residues in the nucleotide alphabet. `None` for an empty sequence.
    pub fn nucleotide_fraction(&self) -> Option<f64> {
        (self.length > 0).then(|| self.nucleotide as f64 / self.length as f64)
    }

    /// Fraction of residues in the amino-acid alphabet. `None` for an empty sequence.
    pub fn amino_acid_fraction(&self) -> Option<f64> {
        (self.length > 0).then(|| self.amino_acid as f64 / self.length as f64)
    }

    ///
    /// Which alphabet this sequence votes for. The nucleotide test is applied
    /// first, so pure ACGT sequences vote nucleotide.
    ///
    pub fn vote(&self, min_fraction: f64) -> Option<AlphabetClassification> {
        let nucleotide = self.nucleotide_fraction()?;
        let amino_acid = self.amino_acid_fraction()?;

        if nucleotide >= min_fraction {
            Some(AlphabetClassification::Nucleotide)
        } else if amino_acid >= min_fraction {
            Some(AlphabetClassification::Protein)
        } else {
            None
        }
    }
}

fn record_composition(record: &SequenceRecord) -> Result<ResidueComposition> {
    if record.is_empty() {
        return Err(FastaError::InvalidSequence(record.id.clone()));
    }
    Ok(ResidueComposition::from_sequence(&record.sequence))
}

///
/// Classify a collection as nucleotide, protein or unknown with the default
/// thresholds: the first 10 records are sampled, each votes for an alphabet when
/// at least 90% of its residues belong to it, and 8 agreeing votes decide.
///
/// An empty collection is [AlphabetClassification::Unknown]. A zero-length
/// record among the sampled ones is an error.
///
pub fn classify_alphabet(collection: &SequenceCollection) -> Result<AlphabetClassification> {
    classify_alphabet_with(collection, &ClassifierConfig::default())
}

///
/// Same as [classify_alphabet] with explicit thresholds.
///
/// All sampled records are scored before a decision is made.
///
pub fn classify_alphabet_with(
    collection: &SequenceCollection,
    config: &ClassifierConfig,
) -> Result<AlphabetClassification> {
    let mut nucleotide_votes = 0;
    let mut protein_votes = 0;

    for record in collection.iter().take(config.sample_size) {
        let composition = record_composition(record)?;
        match composition.vote(config.min_residue_fraction) {
            Some(AlphabetClassification::Nucleotide) => nucleotide_votes += 1,
            Some(AlphabetClassification::Protein) => protein_votes += 1,
            _ => {}
        }
    }

    log::debug!(
        "Alphabet votes: nucleotide={}, protein={} (need {})",
        nucleotide_votes,
        protein_votes,
        config.min_agreeing_records
    );

    let classification = if nucleotide_votes >= config.min_agreeing_records {
        AlphabetClassification::Nucleotide
    } else if protein_votes >= config.min_agreeing_records {
        AlphabetClassification::Protein
    } else {
        AlphabetClassification::Unknown
    };

    Ok(classification)
}
