//! State file backing for the edit session.

use letterpress_editor::{PersistError, StateStore, STORAGE_KEY};
use std::fs;
use std::path::{Path, PathBuf};

/// Single-record store: the file holds the value of `STORAGE_KEY`
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn check_key(&self, key: &str) -> Result<(), PersistError> {
        if key == STORAGE_KEY {
            Ok(())
        } else {
            Err(PersistError::Storage(format!("Unsupported key: {}", key)))
        }
    }
}

impl StateStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        self.check_key(key)?;
        if !self.path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|err| PersistError::Storage(format!("{}: {}", self.path.display(), err)))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.check_key(key)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| PersistError::Storage(format!("{}: {}", parent.display(), err)))?;
        }

        fs::write(&self.path, value)
            .map_err(|err| PersistError::Storage(format!("{}: {}", self.path.display(), err)))
    }
}
