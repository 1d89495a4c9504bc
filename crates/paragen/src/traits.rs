//! Traits for generation output.

use crate::error::Result;
use std::path::Path;

/// Where generated files are read from and written to.
///
/// Paths are relative to the store's root.
///
/// # Implementing Custom Stores
///
/// ```
/// use paragen::{OutputStore, Result};
/// use std::path::Path;
///
/// /// Prints files instead of writing them.
/// struct Stdout;
///
/// impl OutputStore for Stdout {
///     fn read(&self, _path: &Path) -> Result<Option<String>> {
///         Ok(None)
///     }
///
///     fn write(&mut self, path: &Path, text: &str) -> Result<()> {
///         println!("// {}\n{text}", path.display());
///         Ok(())
///     }
/// }
/// ```
pub trait OutputStore {
    /// The current content of `path`, or `None` if it does not exist yet.
    fn read(&self, path: &Path) -> Result<Option<String>>;

    /// Replace the content of `path`, creating it if needed.
    fn write(&mut self, path: &Path, text: &str) -> Result<()>;
}
