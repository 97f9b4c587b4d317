use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use bioutils_core::read_identifier_file;
use bioutils_fasta::{load_fasta, write_fasta};

use super::cli::DEFAULT_OUT;

pub fn run_subset(matches: &ArgMatches) -> Result<()> {
    let fasta = matches
        .get_one::<String>("fasta")
        .context("A path to a FASTA file is required.")?;

    let ids = matches
        .get_one::<String>("ids")
        .context("A path to an identifier file is required.")?;

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let wanted = read_identifier_file(Path::new(ids))?;
    let collection = load_fasta(Path::new(fasta))?;
    let subset = collection.filter_by_header(&wanted);

    let missing = wanted.iter().filter(|id| !collection.contains(id)).count();
    if missing > 0 {
        log::warn!(
            "{} of {} requested identifiers were not found in {}",
            missing,
            wanted.len(),
            fasta
        );
    }

    write_fasta(&subset, Path::new(output))?;

    Ok(())
}
