use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use bioutils_fasta::{SequenceCollectionStatistics, load_fasta};

pub fn run_n50(matches: &ArgMatches) -> Result<()> {
    let fasta = matches
        .get_one::<String>("fasta")
        .context("A path to a FASTA file is required.")?;

    let collection = load_fasta(Path::new(fasta))?;
    let n50 = collection
        .n50()
        .with_context(|| format!("Can't compute N50 for {}", fasta))?;

    log::info!(
        "{} sequences, {} bases in total",
        collection.len(),
        collection.total_length()
    );
    println!("{}", n50);

    Ok(())
}
