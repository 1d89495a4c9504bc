pub mod generate;
pub mod show;

use paragen::{ParagenConfig, Registry};
use std::path::{Path, PathBuf};

/// Load a schema and apply config imports. Errors are reported here.
fn load_schema(schema: &Path, config: &ParagenConfig) -> Option<Registry> {
    match paragen::input::load(schema) {
        Ok(mut registry) => {
            for import in &config.output.imports {
                registry.import(import.clone());
            }
            Some(registry)
        }
        Err(e) => {
            eprintln!("error: {e}");
            None
        }
    }
}

/// Project root for config lookup and relative output paths.
fn project_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
