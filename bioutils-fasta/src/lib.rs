//! # FASTA sequence collections
//!
//! Load FASTA files (plain or gzipped) into ordered, immutable
//! [SequenceCollection]s and analyse them:
//!
//! - `alphabet` - classify a collection as nucleotide, protein or unknown from its residue composition
//! - `collection` - the collection type, with header and length filters
//! - `statistics` - length statistics such as N50
//! - `fasta` - reading and writing FASTA text
//!
//! # Example
//!
//! ```no_run
//! use bioutils_fasta::{load_fasta, SequenceCollectionStatistics};
//!
//! let contigs = load_fasta("assembly.fna.gz").unwrap();
//! let long_contigs = contigs.filter_by_length(1000);
//!
//! println!("{}", long_contigs.alphabet().unwrap());
//! println!("N50: {}", long_contigs.n50().unwrap());
//! ```

pub mod alphabet;
pub mod collection;
pub mod config;
pub mod consts;
pub mod errors;
pub mod fasta;
pub mod statistics;

// re-exports
pub use alphabet::{
    AlphabetClassification, ResidueComposition, classify_alphabet, classify_alphabet_with,
};
pub use collection::{SequenceCollection, SequenceRecord};
pub use config::{ClassifierConfig, ClassifierConfigError};
pub use errors::{FastaError, Result};
pub use fasta::{load_fasta, load_fasta_from_reader, parse_fasta_header, write_fasta};
pub use statistics::{SequenceCollectionStatistics, compute_n50};
