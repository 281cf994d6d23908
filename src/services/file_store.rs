use log::{debug, trace};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::KeyValueStore;
use crate::error::StoreError;

/// Keeps each key as `<key>.json` inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::Unavailable(format!("invalid key {:?}", key)));
        }
        Ok(self.data_dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        let path = self.key_path(key)?;
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                trace!(target: "store", "No stored value at {}", path.display());
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StoreError> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.data_dir)?;
        let contents = serde_json::to_string_pretty(&value)?;
        fs::write(&path, contents)?;
        debug!(target: "store", "Wrote {}", path.display());
        Ok(())
    }
}
