//! Unit registry and generation driver.
//!
//! ```
//! use paragen::{Field, MemoryStore, RecordDef, Registry, Type};
//!
//! let mut registry = Registry::new("demo::data");
//! let level = registry.ordinal_enum("Level", ["Low", "High"], 0);
//! registry.record(
//!     RecordDef::new("Reading")
//!         .field(Field::new("value", Type::Float64))
//!         .field(Field::new("level", level.nullable())),
//! );
//!
//! let mut store = MemoryStore::new();
//! let report = registry.generate(&mut store).unwrap();
//! assert_eq!(report.written.len(), 3);
//! assert!(store.get("demo/data/reading.rs").unwrap().contains("pub struct Reading"));
//! ```

use crate::error::{GenerateError, Result};
use crate::ir::{EnumDef, RecordDef, Type};
use crate::merge;
use crate::naming;
use crate::output;
use crate::traits::OutputStore;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Imports every unit file starts with.
const UNIT_IMPORTS: &[&str] = &["use paragen_runtime::prelude::*;", "use super::*;"];

/// Imports the module index starts with.
const INDEX_IMPORTS: &[&str] = &["use paragen_runtime::prelude::*;"];

/// Stem of the module index; no unit may use it.
const INDEX_STEM: &str = "mod";

/// What a generation run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Files whose content changed (or would change, for a dry-run store).
    pub written: Vec<PathBuf>,
    /// Files already up to date.
    pub unchanged: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn is_up_to_date(&self) -> bool {
        self.written.is_empty()
    }
}

/// A rendered unit before merging.
struct Rendered {
    path: PathBuf,
    imports: Vec<String>,
    body: String,
}

/// The records and enums of one generated module.
#[derive(Debug, Clone)]
pub struct Registry {
    module: String,
    imports: Vec<String>,
    enums: Vec<Arc<EnumDef>>,
    records: Vec<Arc<RecordDef>>,
}

impl Registry {
    /// `module` is the Rust path of the generated module, e.g. `demo::data`.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            imports: Vec::new(),
            enums: Vec::new(),
            records: Vec::new(),
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// Directory of the module relative to the output root: `a::b` → `a/b`.
    pub fn module_dir(&self) -> PathBuf {
        self.module
            .split("::")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Add an import line (e.g. `use crate::convert::STRING_TO_URL;`) to every
    /// generated file.
    pub fn import(&mut self, line: impl Into<String>) {
        let line = line.into();
        if !self.imports.contains(&line) {
            self.imports.push(line);
        }
    }

    /// Register a record; returns the type to reference it from other fields.
    pub fn record(&mut self, def: RecordDef) -> Type {
        self.record_shared(Arc::new(def))
    }

    pub(crate) fn record_shared(&mut self, def: Arc<RecordDef>) -> Type {
        self.records.push(Arc::clone(&def));
        Type::Record(def)
    }

    /// Register an enum; returns the type to reference it from fields.
    pub fn enumeration(&mut self, def: EnumDef) -> Type {
        self.enumeration_shared(Arc::new(def))
    }

    pub(crate) fn enumeration_shared(&mut self, def: Arc<EnumDef>) -> Type {
        self.enums.push(Arc::clone(&def));
        Type::Enum(def)
    }

    pub fn ordinal_enum<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        variants: impl IntoIterator<Item = S>,
        default: usize,
    ) -> Type {
        self.enumeration(EnumDef::ordinal(name, variants, default))
    }

    pub fn int_enum<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        variants: impl IntoIterator<Item = (S, i32)>,
        default: usize,
    ) -> Type {
        self.enumeration(EnumDef::int_valued(name, variants, default))
    }

    pub fn string_enum<S: Into<String>, V: Into<String>>(
        &mut self,
        name: impl Into<String>,
        variants: impl IntoIterator<Item = (S, V)>,
        default: usize,
    ) -> Type {
        self.enumeration(EnumDef::string_valued(name, variants, default))
    }

    /// Declared unit names in generation order (enums, then records).
    pub fn unit_names(&self) -> impl Iterator<Item = &str> {
        self.enums
            .iter()
            .map(|e| e.name.as_str())
            .chain(self.records.iter().map(|r| r.name.as_str()))
    }

    /// Check unit names: no duplicates, no two units sharing a file, no unit
    /// named like the module index or a keyword.
    fn check_names(&self) -> Result<()> {
        let mut names = std::collections::HashSet::new();
        let mut stems: HashMap<String, &str> = HashMap::new();
        for name in self.unit_names() {
            if !names.insert(name) {
                return Err(GenerateError::DuplicateUnit(name.to_owned()));
            }
            let stem = naming::file_stem(name);
            // The stem doubles as a module name, so it must be a plain identifier.
            if stem.is_empty() || naming::field_ident(&stem) != stem {
                return Err(GenerateError::InvalidName(name.to_owned()));
            }
            if stem == INDEX_STEM {
                return Err(GenerateError::ReservedUnitName(name.to_owned()));
            }
            if let Some(first) = stems.insert(stem.clone(), name) {
                return Err(GenerateError::CollidingUnits {
                    first: first.to_owned(),
                    second: name.to_owned(),
                    stem,
                });
            }
        }
        Ok(())
    }

    fn unit_imports(&self, defaults: &[&str]) -> Vec<String> {
        defaults
            .iter()
            .map(|s| (*s).to_owned())
            .chain(self.imports.iter().cloned())
            .collect()
    }

    /// Render every unit and the index. Fails before anything is written.
    fn render_all(&self) -> Result<Vec<Rendered>> {
        self.check_names()?;
        let dir = self.module_dir();
        let mut rendered = Vec::new();
        let mut stems = Vec::new();

        for def in &self.enums {
            let stem = naming::file_stem(&def.name);
            rendered.push(Rendered {
                path: dir.join(format!("{stem}.rs")),
                imports: self.unit_imports(UNIT_IMPORTS),
                body: output::render_enum(def)?,
            });
            stems.push(stem);
        }
        for def in &self.records {
            let stem = naming::file_stem(&def.name);
            rendered.push(Rendered {
                path: dir.join(format!("{stem}.rs")),
                imports: self.unit_imports(UNIT_IMPORTS),
                body: output::render_record(def)?,
            });
            stems.push(stem);
        }
        rendered.push(Rendered {
            path: dir.join(format!("{INDEX_STEM}.rs")),
            imports: self.unit_imports(INDEX_IMPORTS),
            body: output::render_index(stems.iter().map(String::as_str)),
        });
        Ok(rendered)
    }

    /// Merged text of one unit (or of the index, for `mod`), against whatever
    /// `store` currently holds.
    pub fn render_unit(&self, name: &str, store: &dyn OutputStore) -> Result<String> {
        let wanted = self
            .module_dir()
            .join(format!("{}.rs", naming::file_stem(name)));
        let unit = self
            .render_all()?
            .into_iter()
            .find(|r| r.path == wanted)
            .ok_or_else(|| GenerateError::Schema(format!("no unit named `{name}`")))?;
        let previous = store.read(&unit.path)?;
        Ok(merge::merge(
            &self.module,
            &unit.imports,
            &unit.body,
            previous.as_deref(),
        ))
    }

    /// Render enums, then records, then the module index; merge each with its
    /// previous content and write the ones that changed.
    pub fn generate(&self, store: &mut dyn OutputStore) -> Result<GenerationReport> {
        let rendered = self.render_all()?;
        let mut report = GenerationReport::default();

        for unit in rendered {
            let previous = store.read(&unit.path)?;
            let text = merge::merge(
                &self.module,
                &unit.imports,
                &unit.body,
                previous.as_deref(),
            );
            if previous.as_deref() == Some(text.as_str()) {
                tracing::debug!(path = %unit.path.display(), "unchanged");
                report.unchanged.push(unit.path);
            } else {
                store.write(&unit.path, &text)?;
                tracing::info!(path = %unit.path.display(), "generated");
                report.written.push(unit.path);
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Field;
    use crate::store::MemoryStore;

    fn registry() -> Registry {
        let mut registry = Registry::new("demo::data");
        let kind = registry.string_enum("Kind", [("Home", "home"), ("Work", "work")], 0);
        registry.record(
            RecordDef::new("Location")
                .field(Field::new("latitude", Type::Float64))
                .field(Field::new("kind", kind)),
        );
        registry
    }

    #[test]
    fn writes_one_file_per_unit_plus_index() {
        let mut store = MemoryStore::new();
        let report = registry().generate(&mut store).unwrap();
        assert_eq!(
            report.written,
            vec![
                PathBuf::from("demo/data/kind.rs"),
                PathBuf::from("demo/data/location.rs"),
                PathBuf::from("demo/data/mod.rs"),
            ]
        );
        let index = store.get("demo/data/mod.rs").unwrap();
        assert!(index.contains("pub mod kind;\npub use kind::*;\npub mod location;"));
        assert!(!index.contains("use super::*;"));
        let location = store.get("demo/data/location.rs").unwrap();
        assert!(location.starts_with("//! Generated by paragen for `demo::data`."));
        assert!(location.contains("use paragen_runtime::prelude::*;\nuse super::*;\n"));
    }

    #[test]
    fn second_run_changes_nothing() {
        let mut store = MemoryStore::new();
        registry().generate(&mut store).unwrap();
        let report = registry().generate(&mut store).unwrap();
        assert!(report.is_up_to_date());
        assert_eq!(report.unchanged.len(), 3);
    }

    #[test]
    fn schema_imports_reach_every_file() {
        let mut registry = registry();
        registry.import("use crate::convert::STRING_TO_URL;");
        let mut store = MemoryStore::new();
        registry.generate(&mut store).unwrap();
        for (_, text) in store.files() {
            assert!(text.contains("use crate::convert::STRING_TO_URL;\n"));
        }
    }

    #[test]
    fn name_checks() {
        let mut dup = Registry::new("m");
        dup.ordinal_enum("A", ["X"], 0);
        dup.record(RecordDef::new("A"));
        assert!(matches!(
            dup.generate(&mut MemoryStore::new()),
            Err(GenerateError::DuplicateUnit(name)) if name == "A"
        ));

        let mut colliding = Registry::new("m");
        colliding.record(RecordDef::new("HomeUrl"));
        colliding.record(RecordDef::new("homeURL"));
        assert!(matches!(
            colliding.generate(&mut MemoryStore::new()),
            Err(GenerateError::CollidingUnits { stem, .. }) if stem == "home_url"
        ));

        let mut keyword = Registry::new("m");
        keyword.record(RecordDef::new("Type"));
        assert!(matches!(
            keyword.generate(&mut MemoryStore::new()),
            Err(GenerateError::InvalidName(name)) if name == "Type"
        ));

        let mut reserved = Registry::new("m");
        reserved.record(RecordDef::new("Mod"));
        assert!(matches!(
            reserved.generate(&mut MemoryStore::new()),
            Err(GenerateError::ReservedUnitName(_))
        ));
    }

    #[test]
    fn failures_write_nothing() {
        let mut registry = registry();
        registry.record(RecordDef::new("Bad").field(Field::new(
            "url",
            Type::external_host("Url", "Url::default()"),
        )));
        let mut store = MemoryStore::new();
        assert!(registry.generate(&mut store).is_err());
        assert_eq!(store.files().count(), 0);
    }

    #[test]
    fn render_unit_previews_merge() {
        let mut store = MemoryStore::new();
        store.insert(
            "demo/data/kind.rs",
            "/* EXTRA CODE START */\nimpl Kind { fn f() {} }\n/* EXTRA CODE END */\n",
        );
        let text = registry().render_unit("Kind", &store).unwrap();
        assert!(text.contains("impl Kind { fn f() {} }"));
        assert!(registry().render_unit("mod", &store).unwrap().contains("pub mod kind;"));
        assert!(registry().render_unit("Nope", &store).is_err());
    }
}
