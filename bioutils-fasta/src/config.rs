use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    DEFAULT_MIN_AGREEING_RECORDS, DEFAULT_MIN_RESIDUE_FRACTION, DEFAULT_SAMPLE_SIZE,
};

///
/// Thresholds used when classifying the alphabet of a sequence collection.
///
/// Every field is optional in a TOML file; missing fields take the defaults
/// from [crate::consts].
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClassifierConfig {
    /// How many leading records to inspect.
    pub sample_size: usize,
    /// Minimum fraction of residues in an alphabet for a record to vote for it.
    pub min_residue_fraction: f64,
    /// Minimum number of votes for the collection to be assigned an alphabet.
    pub min_agreeing_records: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            sample_size: DEFAULT_SAMPLE_SIZE,
            min_residue_fraction: DEFAULT_MIN_RESIDUE_FRACTION,
            min_agreeing_records: DEFAULT_MIN_AGREEING_RECORDS,
        }
    }
}

#[derive(Error, Debug)]
pub enum ClassifierConfigError {
    #[error("Invalid classifier config value: {0}")]
    InvalidValue(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ClassifierConfigResult<T> = std::result::Result<T, ClassifierConfigError>;

impl ClassifierConfig {
    ///
    /// Read a classifier config from a TOML file.
    ///
    /// # Arguments
    /// * `path` - path to the `.toml` file
    ///
    pub fn from_toml<P: AsRef<Path>>(path: P) -> ClassifierConfigResult<Self> {
        let contents = read_to_string(path.as_ref())?;
        let config: ClassifierConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ClassifierConfigResult<()> {
        if !(0.0..=1.0).contains(&self.min_residue_fraction) {
            return Err(ClassifierConfigError::InvalidValue(format!(
                "min_residue_fraction must be between 0 and 1, got {}",
                self.min_residue_fraction
            )));
        }
        if self.min_agreeing_records == 0 {
            return Err(ClassifierConfigError::InvalidValue(
                "min_agreeing_records must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
