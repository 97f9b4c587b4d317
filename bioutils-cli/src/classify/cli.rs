use clap::{Arg, Command, arg};

pub const CLASSIFY_CMD: &str = "classify";

pub fn create_classify_cli() -> Command {
    Command::new(CLASSIFY_CMD)
        .about("Classify a FASTA file as nucleotide, protein or unknown from its residue composition.")
        .arg_required_else_help(true)
        .arg(Arg::new("fasta").required(true).help("Path to a FASTA file (.gz allowed)"))
        .arg(arg!(--config <config> "TOML file overriding the classifier thresholds"))
}
