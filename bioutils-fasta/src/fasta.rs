use std::fs::OpenOptions;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use bioutils_core::utils::open_dynamic_reader;

use crate::collection::{SequenceCollection, SequenceRecord};
use crate::consts::FASTA_HEADER_PREFIX;
use crate::errors::{FastaError, Result};

/// Parse a FASTA header line (without '>') into name and optional description.
///
/// The name is everything before the first whitespace; the description is
/// everything after (trimmed).
///
/// # Examples
/// ```
/// use bioutils_fasta::fasta::parse_fasta_header;
///
/// let (name, desc) = parse_fasta_header("contig_1 len=5012 cov=31.2");
/// assert_eq!(name, "contig_1");
/// assert_eq!(desc, Some("len=5012 cov=31.2".to_string()));
///
/// let (name, desc) = parse_fasta_header("contig_1");
/// assert_eq!(name, "contig_1");
/// assert_eq!(desc, None);
/// ```
pub fn parse_fasta_header(header: &str) -> (String, Option<String>) {
    let header = header.trim();
    match header.split_once(char::is_whitespace) {
        Some((id, desc)) => (id.to_string(), Some(desc.trim().to_string())),
        None => (header.to_string(), None),
    }
}

/// Loads a FASTA file into memory as a [SequenceCollection].
///
/// Files ending in `.gz` are decompressed on the fly; nothing is written to disk.
///
/// # Arguments
///
/// * `file_path` - Path to the FASTA file, plain or gzipped
///
/// # Errors
///
/// - [FastaError::Io] if the file can't be opened, read or decompressed
/// - [FastaError::MalformedInput] if the file has no `>` header line or isn't UTF-8 text
///
/// # Examples
///
/// ```
/// use bioutils_fasta::fasta::load_fasta;
///
/// let collection = load_fasta("../tests/data/fasta/contigs.fa").expect("Failed to load FASTA");
/// assert_eq!(collection.len(), 10);
/// ```
pub fn load_fasta<P: AsRef<Path>>(file_path: P) -> Result<SequenceCollection> {
    let file_path = file_path.as_ref();
    let reader = open_dynamic_reader(file_path)?;
    let collection = load_fasta_from_reader(reader, &file_path.display().to_string())?;

    log::info!(
        "Loaded {} sequences from {}",
        collection.len(),
        file_path.display()
    );

    Ok(collection)
}

/// Parses FASTA text from any buffered reader.
///
/// A record starts at a line beginning with `>`; its identifier is the header
/// text up to the first whitespace. Every following line up to the next header
/// is appended to the record's sequence with whitespace and line endings
/// removed. Lines before the first header are skipped.
///
/// `source` names the input in error messages.
pub fn load_fasta_from_reader<R: BufRead>(mut reader: R, source: &str) -> Result<SequenceCollection> {
    let mut records = Vec::new();
    let mut current: Option<SequenceRecord> = None;
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        let bytes_read = reader.read_until(b'\n', &mut buf)?;
        if bytes_read == 0 {
            break;
        }
        line_number += 1;

        let line = std::str::from_utf8(&buf).map_err(|_| {
            FastaError::MalformedInput(format!(
                "invalid UTF-8 on line {} of {}",
                line_number, source
            ))
        })?;

        if let Some(header) = line.strip_prefix(FASTA_HEADER_PREFIX) {
            if let Some(record) = current.take() {
                records.push(record);
            }
            let (id, _description) = parse_fasta_header(header);
            current = Some(SequenceRecord::new(id, String::new()));
        } else if let Some(record) = current.as_mut() {
            record
                .sequence
                .extend(line.chars().filter(|c| !c.is_whitespace()));
        }
    }

    if let Some(record) = current.take() {
        records.push(record);
    }

    if records.is_empty() {
        return Err(FastaError::MalformedInput(format!(
            "no header line found in {}",
            source
        )));
    }

    Ok(SequenceCollection::from_records(records))
}

/// Writes a [SequenceCollection] as FASTA, one `>id` line and one sequence line
/// per record.
///
/// Appends when `file_path` already exists, otherwise creates it.
pub fn write_fasta<P: AsRef<Path>>(collection: &SequenceCollection, file_path: P) -> Result<()> {
    let file_path = file_path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);

    for record in collection {
        writeln!(writer, "{}", record)?;
    }
    writer.flush()?;

    log::info!(
        "Wrote {} sequences to {}",
        collection.len(),
        file_path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::fs;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<SequenceCollection> {
        load_fasta_from_reader(Cursor::new(text), "test")
    }

    #[rstest]
    fn test_multiline_records_are_concatenated() {
        let collection = parse(">seq1 first\nACGT\nACGT\n>seq2\nTTTT\n").unwrap();

        assert_eq!(
            collection.records(),
            &[
                SequenceRecord::new("seq1", "ACGTACGT"),
                SequenceRecord::new("seq2", "TTTT"),
            ]
        );
    }

    #[rstest]
    fn test_crlf_and_blank_lines() {
        let collection = parse(">seq1\r\nAC GT\r\n\r\nAC\r\n>seq2\r\n").unwrap();

        assert_eq!(collection.get("seq1").unwrap().sequence, "ACGTAC");
        assert_eq!(collection.get("seq2").unwrap().sequence, "");
    }

    #[rstest]
    fn test_text_before_first_header_is_skipped() {
        let collection = parse("some preamble\n>seq1\nACGT\n").unwrap();
        assert_eq!(collection.ids().collect::<Vec<_>>(), vec!["seq1"]);
    }

    #[rstest]
    fn test_missing_final_newline() {
        let collection = parse(">seq1\nACGT").unwrap();
        assert_eq!(collection.get("seq1").unwrap().sequence, "ACGT");
    }

    #[rstest]
    #[case("")]
    #[case("ACGT\nACGT\n")]
    fn test_no_header_is_malformed(#[case] text: &str) {
        assert!(matches!(parse(text), Err(FastaError::MalformedInput(_))));
    }

    #[rstest]
    fn test_invalid_utf8_is_malformed() {
        let bytes: &[u8] = b">seq1\nAC\xffGT\n";
        match load_fasta_from_reader(Cursor::new(bytes), "bad.fa") {
            Err(FastaError::MalformedInput(message)) => {
                assert!(message.contains("line 2"));
                assert!(message.contains("bad.fa"));
            }
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[rstest]
    fn test_multibyte_residues_count_as_one() {
        let collection = parse(">a\nÅÅÅÅ\n").unwrap();

        assert_eq!(collection.get("a").unwrap().len(), 4);
        assert!(collection.filter_by_length(5).is_empty());
    }

    #[rstest]
    fn test_duplicate_ids_last_wins() {
        let collection = parse(">a\nAAAA\n>b\nCCCC\n>a\nGGGG\n").unwrap();

        assert_eq!(collection.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(collection.get("a").unwrap().sequence, "GGGG");
    }

    #[rstest]
    #[case("chr1", "chr1", None)]
    #[case("chr1 some description", "chr1", Some("some description"))]
    #[case(" chr1\tdesc ", "chr1", Some("desc"))]
    fn test_parse_fasta_header(
        #[case] header: &str,
        #[case] name: &str,
        #[case] description: Option<&str>,
    ) {
        let (parsed_name, parsed_description) = parse_fasta_header(header);
        assert_eq!(parsed_name, name);
        assert_eq!(parsed_description.as_deref(), description);
    }

    #[rstest]
    fn test_write_fasta_appends() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("out.fa");

        let first = SequenceCollection::from_records(vec![SequenceRecord::new("a", "ACGT")]);
        let second = SequenceCollection::from_records(vec![SequenceRecord::new("b", "TTGG")]);

        write_fasta(&first, &path).unwrap();
        write_fasta(&second, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), ">a\nACGT\n>b\nTTGG\n");
    }

    #[rstest]
    fn test_load_missing_file_is_io_error() {
        let result = load_fasta("../tests/data/fasta/does_not_exist.fa");
        assert!(matches!(result, Err(FastaError::Io(_))));
    }
}
