//! Key/value record stores.

use super::StorageError;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// A flat string key/value store.
pub trait SettingsStore {
    /// Reads the record under `key`. Missing keys are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes the record under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object on disk.
///
/// The file is read on every access and rewritten on every change, so
/// several processes pointed at the same file see each other's writes.
/// A missing file reads as an empty store. A file that is not a JSON
/// object fails on read; the next write moves it aside to `<name>.bak`
/// and starts a fresh object.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store at `path`. The file is created on first write.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        info!("Opening JSON record store");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_content(&self) -> Result<Option<String>, StorageError> {
        if !self.path.exists() {
            debug!("Store file missing, treating as empty");
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok((!content.trim().is_empty()).then_some(content))
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.read_content()? {
            Some(content) => Ok(serde_json::from_str(&content)?),
            None => Ok(BTreeMap::new()),
        }
    }

    /// Records to update on a write. Unreadable JSON is backed up and replaced.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read_for_update(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let Some(content) = self.read_content()? else {
            return Ok(BTreeMap::new());
        };
        match serde_json::from_str(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                let mut backup = self.path.clone().into_os_string();
                backup.push(".bak");
                let backup = PathBuf::from(backup);
                warn!(
                    error = %e,
                    backup = %backup.display(),
                    "Store file unreadable, starting fresh"
                );
                std::fs::write(&backup, content)?;
                Ok(BTreeMap::new())
            }
        }
    }

    #[instrument(skip(self, records), fields(path = %self.path.display(), count = records.len()))]
    fn write_all(&self, records: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, content)?;
        debug!("Store file written");
        Ok(())
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut records = self.read_for_update()?;
        records.insert(key.to_string(), value.to_string());
        self.write_all(&records)
    }
}
