use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use bioutils_fasta::{load_fasta, write_fasta};

use super::cli::{DEFAULT_MIN_LEN, DEFAULT_OUT};

pub fn run_filter(matches: &ArgMatches) -> Result<()> {
    let fasta = matches
        .get_one::<String>("fasta")
        .context("A path to a FASTA file is required.")?;

    let min_len = matches
        .get_one::<usize>("min-len")
        .copied()
        .unwrap_or(DEFAULT_MIN_LEN);

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let collection = load_fasta(Path::new(fasta))?;
    let filtered = collection.filter_by_length(min_len);

    log::info!(
        "Kept {} of {} sequences with length >= {}",
        filtered.len(),
        collection.len(),
        min_len
    );

    write_fasta(&filtered, Path::new(output))?;

    Ok(())
}
