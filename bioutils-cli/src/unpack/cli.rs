use clap::{Arg, Command, arg};

pub const UNPACK_CMD: &str = "unpack";
pub const DEFAULT_OUTDIR: &str = ".";

pub fn create_unpack_cli() -> Command {
    Command::new(UNPACK_CMD)
        .about("Decompress a gzipped file, leaving the original in place.")
        .arg_required_else_help(true)
        .arg(Arg::new("file").required(true).help("Path to a .gz file"))
        .arg(arg!(--outdir <outdir> "Directory to write the decompressed file to"))
}
