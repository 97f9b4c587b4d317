use clap::{Arg, Command, arg, value_parser};

pub const FILTER_CMD: &str = "filter";
pub const DEFAULT_OUT: &str = "filtered.fa";
pub const DEFAULT_MIN_LEN: usize = 0;

pub fn create_filter_cli() -> Command {
    Command::new(FILTER_CMD)
        .about("Keep the records at least a minimum length long.")
        .arg_required_else_help(true)
        .arg(Arg::new("fasta").required(true).help("Path to a FASTA file (.gz allowed)"))
        .arg(
            arg!(--"min-len" <min_len> "Minimum sequence length to keep")
                .value_parser(value_parser!(usize)),
        )
        .arg(arg!(--output <output> "FASTA file to append the kept records to"))
}
