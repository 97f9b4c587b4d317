use std::fmt::{self, Display};

use fxhash::{FxHashMap, FxHashSet};

///
/// A single FASTA record: an identifier and its residues.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceRecord {
    pub id: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        SequenceRecord {
            id: id.into(),
            sequence: sequence.into(),
        }
    }

    /// Number of residues in the record, counted in characters.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl Display for SequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}\n{}", self.id, self.sequence)
    }
}

///
/// An ordered collection of [SequenceRecord]s keyed by identifier.
///
/// Records keep the order in which they were first seen. Identifiers are unique:
/// when an identifier repeats, the later record replaces the earlier one in place.
/// A collection is never modified after construction; the filters return new
/// collections.
///
#[derive(Clone, Debug, Default)]
pub struct SequenceCollection {
    records: Vec<SequenceRecord>,
    index: FxHashMap<String, usize>,
}

impl SequenceCollection {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I: IntoIterator<Item = SequenceRecord>>(records: I) -> Self {
        let mut collection = SequenceCollection::new();
        for record in records {
            collection.insert(record);
        }
        collection
    }

    // last record wins, position of the first one is kept
    fn insert(&mut self, record: SequenceRecord) {
        match self.index.get(&record.id) {
            Some(&position) => {
                log::debug!("Duplicate identifier {}, keeping the later record", record.id);
                self.records[position] = record;
            }
            None => {
                self.index.insert(record.id.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SequenceRecord> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SequenceRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[SequenceRecord] {
        &self.records
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    ///
    /// Keep only the records whose identifier is in `wanted`.
    ///
    /// Order is preserved. Identifiers in `wanted` that aren't in the collection
    /// are ignored.
    ///
    pub fn filter_by_header<I, S>(&self, wanted: I) -> SequenceCollection
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted: FxHashSet<String> = wanted
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();

        self.records
            .iter()
            .filter(|r| wanted.contains(&r.id))
            .cloned()
            .collect()
    }

    ///
    /// Keep only the records with at least `minimum_length` residues.
    ///
    pub fn filter_by_length(&self, minimum_length: usize) -> SequenceCollection {
        self.records
            .iter()
            .filter(|r| r.len() >= minimum_length)
            .cloned()
            .collect()
    }
}

impl PartialEq for SequenceCollection {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl Eq for SequenceCollection {}

impl FromIterator<SequenceRecord> for SequenceCollection {
    fn from_iter<I: IntoIterator<Item = SequenceRecord>>(iter: I) -> Self {
        SequenceCollection::from_records(iter)
    }
}

impl<'a> IntoIterator for &'a SequenceCollection {
    type Item = &'a SequenceRecord;
    type IntoIter = std::slice::Iter<'a, SequenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for SequenceCollection {
    type Item = SequenceRecord;
    type IntoIter = std::vec::IntoIter<SequenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
