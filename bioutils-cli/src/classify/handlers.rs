use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use bioutils_fasta::{AlphabetClassification, ClassifierConfig, classify_alphabet_with, load_fasta};

pub fn run_classify(matches: &ArgMatches) -> Result<()> {
    let fasta = matches
        .get_one::<String>("fasta")
        .context("A path to a FASTA file is required.")?;
    let config = matches.get_one::<String>("config");

    let classification = classify_file(Path::new(fasta), config.map(Path::new))?;
    println!("{}", classification);

    Ok(())
}

/// Classify a FASTA file, with thresholds from `config` when given.
pub fn classify_file(fasta: &Path, config: Option<&Path>) -> Result<AlphabetClassification> {
    let config = match config {
        Some(path) => ClassifierConfig::from_toml(path)
            .with_context(|| format!("Failed to read classifier config: {:?}", path))?,
        None => ClassifierConfig::default(),
    };

    let collection = load_fasta(fasta)?;
    Ok(classify_alphabet_with(&collection, &config)?)
}
