use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::prelude::*;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use crate::consts::{GZIP_EXTENSION, GZIP_MAGIC};

///
/// Check whether a path points at a gzipped file, judged by its extension.
///
pub fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(GZIP_EXTENSION))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    open_dynamic_reader(path).with_context(|| format!("Failed to open file: {:?}", path))
}

///
/// Same as [get_dynamic_reader], but returns the bare `io::Error` so callers with
/// their own error types can wrap it.
///
pub fn open_dynamic_reader(path: &Path) -> io::Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Decompress a gzipped file into `out_dir`, returning the path of the
/// decompressed copy.
///
/// The copy is named after the input with its `.gz` suffix removed, so
/// `reads/genome.fna.gz` unpacks to `<out_dir>/genome.fna`. The source file is
/// left in place. Any failure (missing input, a file that isn't gzip, a
/// truncated stream) is returned as an error and the partial output is removed.
///
/// # Arguments
///
/// - path: path to the `.gz` file
/// - out_dir: directory to write the decompressed file into; created if missing
///
pub fn unpack_gzip(path: &Path, out_dir: &Path) -> Result<PathBuf> {
    if !is_gzipped(path) {
        anyhow::bail!("Not a gzipped file (expected a .gz extension): {:?}", path);
    }

    let mut file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let mut magic = [0u8; 2];
    file.read_exact(&mut magic)
        .with_context(|| format!("Failed to read gzip header of {:?}", path))?;
    if magic != GZIP_MAGIC {
        anyhow::bail!("File has a .gz extension but is not gzip data: {:?}", path);
    }
    file.rewind()?;

    let file_name = path
        .file_stem()
        .with_context(|| format!("Can't determine file name of {:?}", path))?;

    create_directory(out_dir)?;
    let out_path = out_dir.join(file_name);

    let mut decoder = MultiGzDecoder::new(BufReader::new(file));
    let mut writer = BufWriter::new(
        File::create(&out_path).with_context(|| format!("Failed to create {:?}", out_path))?,
    );

    let copied = std::io::copy(&mut decoder, &mut writer).and_then(|n| {
        writer.flush()?;
        Ok(n)
    });

    match copied {
        Ok(n) => {
            log::info!("Unpacked {:?} to {:?} ({} bytes)", path, out_path, n);
            Ok(out_path)
        }
        Err(e) => {
            drop(writer);
            let _ = fs::remove_file(&out_path);
            Err(e).with_context(|| format!("Failed to decompress {:?}", path))
        }
    }
}

///
/// Create a directory (and any missing parents) if it doesn't exist yet.
///
pub fn create_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {:?}", path))?;
    }
    Ok(())
}

///
/// File name of `path` with its last extension removed, e.g.
/// `dbs/query.db` -> `query`, `genome.fna.gz` -> `genome.fna`.
///
pub fn remove_extension(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

///
/// Read a file of identifiers, one per line. Blank lines are skipped and
/// surrounding whitespace is trimmed.
///
pub fn read_identifier_file<P: AsRef<Path>>(file_path: P) -> Result<Vec<String>> {
    let reader = get_dynamic_reader(file_path.as_ref())?;

    let identifiers = reader
        .lines()
        .map(|line| line.map(|s| s.trim().to_string()))
        .filter(|line| !matches!(line, Ok(s) if s.is_empty()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(identifiers)
}
