use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use rstest::*;

use bioutils_fasta::{
    AlphabetClassification, FastaError, SequenceCollectionStatistics, classify_alphabet,
    compute_n50, load_fasta, write_fasta,
};

#[fixture]
fn path_to_contigs() -> &'static str {
    "../tests/data/fasta/contigs.fa"
}

#[fixture]
fn path_to_proteins() -> &'static str {
    "../tests/data/fasta/proteins.faa"
}

#[fixture]
fn path_to_no_header() -> &'static str {
    "../tests/data/fasta/no_header.txt"
}

fn gzip_copy(source: &str, dest: &Path) -> PathBuf {
    let mut encoder = GzEncoder::new(File::create(dest).unwrap(), Compression::default());
    encoder.write_all(&fs::read(source).unwrap()).unwrap();
    encoder.finish().unwrap();
    dest.to_path_buf()
}

#[rstest]
fn test_load_contigs(path_to_contigs: &str) {
    let contigs = load_fasta(path_to_contigs).unwrap();

    assert_eq!(contigs.len(), 10);
    assert_eq!(contigs.ids().next(), Some("contig_1"));
    assert_eq!(
        contigs.lengths(),
        vec![100, 90, 80, 70, 60, 50, 40, 30, 20, 10]
    );
}

#[rstest]
fn test_contigs_are_nucleotide(path_to_contigs: &str) {
    let contigs = load_fasta(path_to_contigs).unwrap();
    assert_eq!(
        classify_alphabet(&contigs).unwrap(),
        AlphabetClassification::Nucleotide
    );
}

#[rstest]
fn test_contigs_n50(path_to_contigs: &str) {
    let contigs = load_fasta(path_to_contigs).unwrap();
    assert_eq!(compute_n50(&contigs).unwrap(), 70);
}

#[rstest]
fn test_proteins_are_protein(path_to_proteins: &str) {
    let proteins = load_fasta(path_to_proteins).unwrap();

    assert_eq!(proteins.len(), 10);
    assert_eq!(
        classify_alphabet(&proteins).unwrap(),
        AlphabetClassification::Protein
    );
    assert!(matches!(
        compute_n50(&proteins),
        Err(FastaError::UnsupportedAlphabet(AlphabetClassification::Protein))
    ));
}

#[rstest]
fn test_no_header_is_malformed(path_to_no_header: &str) {
    assert!(matches!(
        load_fasta(path_to_no_header),
        Err(FastaError::MalformedInput(_))
    ));
}

#[rstest]
fn test_load_gzipped_matches_plain(path_to_contigs: &str) {
    let tempdir = tempfile::tempdir().unwrap();
    let gz_path = gzip_copy(path_to_contigs, &tempdir.path().join("contigs.fa.gz"));

    let plain = load_fasta(path_to_contigs).unwrap();
    let gzipped = load_fasta(&gz_path).unwrap();

    assert_eq!(gzipped, plain);
    // nothing is unpacked next to the input
    assert_eq!(fs::read_dir(tempdir.path()).unwrap().count(), 1);
}

#[rstest]
fn test_load_corrupt_gzip_is_io_error(path_to_contigs: &str) {
    let tempdir = tempfile::tempdir().unwrap();
    let path = tempdir.path().join("contigs.fa.gz");
    fs::copy(path_to_contigs, &path).unwrap();

    assert!(matches!(load_fasta(&path), Err(FastaError::Io(_))));
}

#[rstest]
#[case("../tests/data/fasta/contigs.fa")]
#[case("../tests/data/fasta/proteins.faa")]
fn test_write_then_load_round_trips(#[case] path: &str) {
    let tempdir = tempfile::tempdir().unwrap();
    let out_path = tempdir.path().join("round_trip.fa");

    let original = load_fasta(path).unwrap();
    write_fasta(&original, &out_path).unwrap();
    let reloaded = load_fasta(&out_path).unwrap();

    assert_eq!(reloaded, original);
}

#[rstest]
fn test_filtered_contigs(path_to_contigs: &str) {
    let contigs = load_fasta(path_to_contigs).unwrap();

    assert_eq!(contigs.filter_by_length(0), contigs);
    assert!(contigs.filter_by_header(Vec::<&str>::new()).is_empty());

    let long = contigs.filter_by_length(55);
    assert_eq!(long.lengths(), vec![100, 90, 80, 70, 60]);

    let subset = contigs.filter_by_header(["contig_9", "contig_2", "contig_42"]);
    assert_eq!(subset.ids().collect::<Vec<_>>(), vec!["contig_2", "contig_9"]);
}
