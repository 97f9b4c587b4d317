use clap::{Arg, Command};

pub const N50_CMD: &str = "n50";

pub fn create_n50_cli() -> Command {
    Command::new(N50_CMD)
        .about("Compute the N50 of a nucleotide FASTA file.")
        .arg_required_else_help(true)
        .arg(Arg::new("fasta").required(true).help("Path to a nucleotide FASTA file (.gz allowed)"))
}
