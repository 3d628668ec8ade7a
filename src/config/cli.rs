use crate::core::Storage;
use crate::utils::error::{RaffleError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Filesystem storage; relative paths resolve against `base_path`.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        fs::read(self.resolve(path)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RaffleError::MissingFile {
                path: path.to_string(),
            },
            _ => RaffleError::IoError(e),
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        let write_error = |source: std::io::Error| RaffleError::WriteError {
            path: path.to_string(),
            source,
        };

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        fs::write(&full_path, data).map_err(write_error)
    }

    fn remove_file(&self, path: &str) -> Result<()> {
        fs::remove_file(self.resolve(path))?;
        Ok(())
    }
}
