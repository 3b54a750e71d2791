//! Optional JSON seed file for the initial roster.

use std::{
    fs,
    path::{Path, PathBuf},
};

use shared::{domain::Employee, error::RosterError};
use thiserror::Error;
use tracing::info;

use crate::store::RecordStore;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse seed file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Invalid(#[from] RosterError),
}

pub fn read_seed_file(path: &Path) -> Result<Vec<Employee>, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds the startup store from `seed_path`, or the built-in roster when unset.
pub fn load_store(seed_path: Option<&Path>) -> Result<RecordStore, SeedError> {
    let Some(path) = seed_path else {
        return Ok(RecordStore::default());
    };

    let records = read_seed_file(path)?;
    let store = RecordStore::with_seed(records)?;
    info!(
        path = %path.display(),
        employees = store.len(),
        "loaded roster seed"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::EmployeeId;

    #[test]
    fn no_path_uses_builtin_roster() {
        let store = load_store(None).expect("default store");
        assert_eq!(store.len(), 4);
        assert_eq!(store.next_id(), EmployeeId(5));
    }

    #[test]
    fn loads_seed_file_and_advances_counter() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("seed.json");
        fs::write(
            &path,
            r#"[
                {"id": 10, "name": "Grace Hopper", "role": "Admiral", "score": 99},
                {"id": 3, "name": "Ada Lovelace", "role": "Analyst", "score": 97}
            ]"#,
        )
        .expect("write seed");

        let store = load_store(Some(path.as_path())).expect("seed store");
        assert_eq!(store.len(), 2);
        assert_eq!(store.next_id(), EmployeeId(11));
        assert_eq!(store.records()[0].name, "Grace Hopper");
    }

    #[test]
    fn rejects_invalid_seed_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("seed.json");
        fs::write(
            &path,
            r#"[{"id": 1, "name": "", "role": "Dev", "score": 50}]"#,
        )
        .expect("write seed");

        let err = load_store(Some(path.as_path())).expect_err("blank name");
        assert!(matches!(err, SeedError::Invalid(RosterError::InvalidSeed(_))));
    }

    #[test]
    fn reports_unreadable_and_malformed_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load_store(Some(missing.as_path())),
            Err(SeedError::Read { .. })
        ));

        let garbled = dir.path().join("garbled.json");
        fs::write(&garbled, "{not json").expect("write seed");
        let err = load_store(Some(garbled.as_path())).expect_err("malformed");
        assert!(err.to_string().contains("garbled.json"));
    }
}
