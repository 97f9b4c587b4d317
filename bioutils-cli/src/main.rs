mod classify;
mod filter;
mod n50;
mod subset;
mod unpack;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "bioutils";
    pub const DEFAULT_LOG_FILTER: &str = "warn";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Small utilities for FASTA sequence collections: alphabet classification, filtering and N50.")
        .subcommand_required(true)
        .subcommand(classify::cli::create_classify_cli())
        .subcommand(n50::cli::create_n50_cli())
        .subcommand(subset::cli::create_subset_cli())
        .subcommand(filter::cli::create_filter_cli())
        .subcommand(unpack::cli::create_unpack_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(consts::DEFAULT_LOG_FILTER),
    )
    .init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // CLASSIFY
        //
        Some((classify::cli::CLASSIFY_CMD, matches)) => {
            classify::handlers::run_classify(matches)?;
        }

        //
        // N50
        //
        Some((n50::cli::N50_CMD, matches)) => {
            n50::handlers::run_n50(matches)?;
        }

        //
        // SUBSET BY HEADER
        //
        Some((subset::cli::SUBSET_CMD, matches)) => {
            subset::handlers::run_subset(matches)?;
        }

        //
        // FILTER BY LENGTH
        //
        Some((filter::cli::FILTER_CMD, matches)) => {
            filter::handlers::run_filter(matches)?;
        }

        //
        // UNPACK
        //
        Some((unpack::cli::UNPACK_CMD, matches)) => {
            unpack::handlers::run_unpack(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
