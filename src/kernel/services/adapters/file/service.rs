//! File service: runs Open/Save through the local `FileProvider` and logs each call.

use super::local::LocalFileProvider;
use crate::kernel::services::ports::file::{FileProvider, Result};
use ropey::Rope;
use std::path::Path;

pub struct FileService {
    provider: LocalFileProvider,
}

impl FileService {
    pub fn new() -> Self {
        Self {
            provider: LocalFileProvider::new(),
        }
    }

    pub fn read_text(&self, path: &Path) -> Result<String> {
        let result = self.provider.read_text(path);
        match &result {
            Ok(text) => tracing::debug!(path = %path.display(), bytes = text.len(), "read file"),
            Err(e) => tracing::debug!(path = %path.display(), error = %e, "read failed"),
        }
        result
    }

    pub fn write_text(&self, path: &Path, text: &Rope) -> Result<()> {
        let result = self.provider.write_text(path, text);
        match &result {
            Ok(()) => tracing::debug!(path = %path.display(), bytes = text.len_bytes(), "wrote file"),
            Err(e) => tracing::debug!(path = %path.display(), error = %e, "write failed"),
        }
        result
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}
