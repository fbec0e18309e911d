//! Loads clinical-constant overrides from a two-column `key,value` CSV.
//!
//! Keys are the ones listed by [`ClinicalConstants::scalar_keys`]; rows are applied over the
//! built-in table in file order and the result is validated before it is handed out.

mod parser;

use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::evaluation::{ClinicalConstants, ConstantsError};

#[derive(Debug, thiserror::Error)]
pub enum ClinicalTableError {
    #[error("failed to read clinical table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid clinical table CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("unknown clinical table key '{key}' on data row {row}")]
    UnknownKey { key: String, row: usize },
    #[error("clinical table rejected: {0}")]
    Constants(#[from] ConstantsError),
}

pub struct ClinicalTableLoader;

impl ClinicalTableLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ClinicalConstants, ClinicalTableError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ClinicalConstants, ClinicalTableError> {
        Self::apply(ClinicalConstants::default(), reader)
    }

    /// Applies the overrides in `reader` on top of `base`.
    pub fn apply<R: Read>(
        base: ClinicalConstants,
        reader: R,
    ) -> Result<ClinicalConstants, ClinicalTableError> {
        let mut constants = base;
        let rows = parser::parse_overrides(reader)?;

        for (index, row) in rows.iter().enumerate() {
            let slot = constants
                .slot_mut(&row.key)
                .ok_or_else(|| ClinicalTableError::UnknownKey {
                    key: row.key.clone(),
                    row: index + 1,
                })?;
            *slot = row.value;
        }

        constants.validate()?;
        debug!(overrides = rows.len(), "clinical table loaded");
        Ok(constants)
    }
}
