//! Output stores: the file system, and memory for tests and previews.

use crate::error::{GenerateError, Result};
use crate::traits::OutputStore;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Files under a root directory. Parent directories are created on write.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
    dry_run: bool,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
        }
    }

    /// Read as usual, but skip every write.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputStore for FsStore {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        let full = self.root.join(path);
        match std::fs::read_to_string(&full) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(GenerateError::Io { path: full, source }),
        }
    }

    fn write(&mut self, path: &Path, text: &str) -> Result<()> {
        let full = self.root.join(path);
        if self.dry_run {
            tracing::debug!(path = %full.display(), "dry run, not writing");
            return Ok(());
        }
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).map_err(|source| GenerateError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&full, text).map_err(|source| GenerateError::Io { path: full, source })
    }
}

/// In-memory files keyed by relative path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }

    pub fn files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.files.iter().map(|(p, t)| (p.as_path(), t.as_str()))
    }
}

impl OutputStore for MemoryStore {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }

    fn write(&mut self, path: &Path, text: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), text.to_owned());
        Ok(())
    }
}
