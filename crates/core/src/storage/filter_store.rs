use std::path::{Path, PathBuf};

use crate::errors::CoreError;
use crate::models::filters::PropertyFilters;

use super::format;

/// Remembers the catalog filters between runs.
///
/// Pagination is never persisted: a restored search always starts on the
/// first page with the default page size.
#[derive(Debug, Clone)]
pub struct FilterStore {
    path: PathBuf,
}

impl FilterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, filters: &PropertyFilters) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = format::write_file(&filters.without_pagination())?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }

    /// Saved filters, or `None` when nothing was saved yet.
    pub fn load(&self) -> Result<Option<PropertyFilters>, CoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let filters: PropertyFilters = format::read_file(&bytes)?;
        Ok(Some(filters.without_pagination()))
    }

    pub fn clear(&self) -> Result<(), CoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
