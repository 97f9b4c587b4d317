use clap::{Arg, Command, arg};

pub const SUBSET_CMD: &str = "subset";
pub const DEFAULT_OUT: &str = "subset.fa";

pub fn create_subset_cli() -> Command {
    Command::new(SUBSET_CMD)
        .about("Extract the records whose identifiers are listed in a file.")
        .arg_required_else_help(true)
        .arg(Arg::new("fasta").required(true).help("Path to a FASTA file (.gz allowed)"))
        .arg(arg!(--ids <ids> "File with one identifier per line").required(true))
        .arg(arg!(--output <output> "FASTA file to append the matching records to"))
}
