//! Static department population dataset.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use villemeteo_core::AppError;

use crate::department::normalize_department_code;

const EMBEDDED_DATASET: &str = include_str!("../data/departements_population.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentPopulation {
    /// Raw department code ("01", "2A", "75", ...)
    #[serde(rename = "code_departement")]
    pub raw_code: String,
    #[serde(rename = "nom_departement", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub population: u64,
}

#[derive(Debug, Error)]
pub enum PopulationError {
    #[error("Failed to read population dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed population dataset: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<PopulationError> for AppError {
    fn from(e: PopulationError) -> Self {
        AppError::Data(e.to_string())
    }
}

/// Read-only population table indexed by map path id.
#[derive(Debug, Clone, Default)]
pub struct PopulationTable {
    entries: Vec<DepartmentPopulation>,
    by_path_id: HashMap<u32, usize>,
}

impl PopulationTable {
    /// Build the table. Entries whose code cannot be normalized are kept in
    /// [`entries`](Self::entries) but never match a path; for duplicate ids
    /// the first entry wins.
    pub fn new(entries: Vec<DepartmentPopulation>) -> Self {
        let mut by_path_id = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match normalize_department_code(&entry.raw_code) {
                Some(id) => {
                    if by_path_id.contains_key(&id) {
                        tracing::warn!(
                            "Duplicate population entry for department {} (path {}), keeping the first",
                            entry.raw_code,
                            id
                        );
                    } else {
                        by_path_id.insert(id, index);
                    }
                }
                None => {
                    tracing::warn!(
                        "Unrecognized department code '{}' in population dataset, excluded from coloring",
                        entry.raw_code
                    );
                }
            }
        }

        Self { entries, by_path_id }
    }

    /// Dataset bundled with the crate (metropolitan France, Corsica included).
    pub fn embedded() -> Result<Self, PopulationError> {
        Self::from_json_str(EMBEDDED_DATASET)
    }

    pub fn from_json_str(json: &str) -> Result<Self, PopulationError> {
        let entries: Vec<DepartmentPopulation> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn load(path: &Path) -> Result<Self, PopulationError> {
        let json = std::fs::read_to_string(path).map_err(|source| PopulationError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_json_str(&json)?;
        tracing::info!(
            "Loaded {} department populations from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Entry whose normalized code equals `path_id`.
    pub fn for_path_id(&self, path_id: u32) -> Option<&DepartmentPopulation> {
        self.by_path_id
            .get(&path_id)
            .and_then(|&index| self.entries.get(index))
    }

    pub fn entries(&self) -> &[DepartmentPopulation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn entry(code: &str, population: u64) -> DepartmentPopulation {
        DepartmentPopulation {
            raw_code: code.to_string(),
            name: None,
            population,
        }
    }

    #[test]
    fn test_embedded_covers_every_metropolitan_path() {
        let table = PopulationTable::embedded().unwrap();
        assert_eq!(table.len(), 96);
        for id in 1..=96 {
            assert!(table.for_path_id(id).is_some(), "no entry for path {}", id);
        }
        assert!(table.for_path_id(0).is_none());
        assert!(table.for_path_id(97).is_none());
    }

    #[test]
    fn test_embedded_lookup_goes_through_normalization() {
        let table = PopulationTable::embedded().unwrap();
        assert_eq!(table.for_path_id(20).unwrap().raw_code, "2A");
        assert_eq!(table.for_path_id(21).unwrap().raw_code, "2B");
        assert_eq!(table.for_path_id(22).unwrap().raw_code, "21");
        assert_eq!(table.for_path_id(76).unwrap().raw_code, "75");
        assert!(table.for_path_id(76).unwrap().population > 2_000_000);
    }

    #[test]
    fn test_malformed_codes_are_excluded() {
        let table = PopulationTable::new(vec![entry("XX", 10), entry("", 5), entry("04", 164_308)]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.for_path_id(4).unwrap().population, 164_308);
        assert_eq!(table.by_path_id.len(), 1);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let table = PopulationTable::new(vec![entry("05", 1), entry("5", 2)]);
        assert_eq!(table.for_path_id(5).unwrap().population, 1);
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        assert!(matches!(
            PopulationTable::from_json_str("{\"not\": \"a list\"}"),
            Err(PopulationError::Json(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pop.json");
        std::fs::write(
            &path,
            r#"[{"code_departement": "2B", "population": 181933}, {"code_departement": "93", "population": 1655422}]"#,
        )
        .unwrap();

        let table = PopulationTable::load(&path).unwrap();
        assert_eq!(table.for_path_id(21).unwrap().population, 181_933);
        assert_eq!(table.for_path_id(94).unwrap().population, 1_655_422);
        assert!(table.for_path_id(21).unwrap().name.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let err = PopulationTable::load(Path::new("/no/such/population.json")).unwrap_err();
        assert!(matches!(err, PopulationError::Io { .. }));
    }
}
