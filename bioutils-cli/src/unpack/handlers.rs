use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use bioutils_core::unpack_gzip;

use super::cli::DEFAULT_OUTDIR;

pub fn run_unpack(matches: &ArgMatches) -> Result<()> {
    let file = matches
        .get_one::<String>("file")
        .context("A path to a gzipped file is required.")?;

    let default_outdir = DEFAULT_OUTDIR.to_string();
    let outdir = matches.get_one::<String>("outdir").unwrap_or(&default_outdir);

    let unpacked = unpack_gzip(Path::new(file), Path::new(outdir))?;
    println!("{}", unpacked.display());

    Ok(())
}
