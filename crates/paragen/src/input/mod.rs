//! Schema files.
//!
//! A schema file declares one generated module: its records and enums, plus
//! the host types, converters and external records they refer to. TOML is the
//! primary format; files ending in `.json` are read as JSON with the same
//! structure.
//!
//! ```
//! let registry = paragen::input::parse_toml(r#"
//!     module = "demo"
//!
//!     [[enum]]
//!     name = "Level"
//!     kind = "ordinal"
//!     variants = ["Low", "High"]
//!
//!     [[record]]
//!     name = "Reading"
//!     [[record.field]]
//!     name = "levels"
//!     type = "[Level?]"
//! "#).unwrap();
//! assert_eq!(registry.unit_names().collect::<Vec<_>>(), ["Level", "Reading"]);
//! ```

mod declaration;
mod type_expr;

pub use declaration::{
    ConverterDecl, EnumDecl, EnumKindDecl, ExternalDecl, FieldDecl, HostDecl, RecordDecl,
    SchemaFile, VariantDecl, VariantValue, VisibilityDecl,
};
pub use type_expr::TypeExpr;

use crate::error::{GenerateError, Result};
use crate::ir::{EnumDef, Field, RecordDef, Type, Visibility};
use crate::naming;
use crate::registry::Registry;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

const SCALARS: &[&str] = &["int", "long", "double", "boolean", "string"];

/// Read a schema file, choosing the format by extension.
pub fn load(path: &Path) -> Result<Registry> {
    let text = std::fs::read_to_string(path).map_err(|source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        parse_json(&text)
    } else {
        parse_toml(&text)
    }
}

pub fn parse_toml(text: &str) -> Result<Registry> {
    build(&toml::from_str(text)?)
}

pub fn parse_json(text: &str) -> Result<Registry> {
    build(&serde_json::from_str(text)?)
}

/// Resolve every declaration and register enums and records in file order.
pub fn build(file: &SchemaFile) -> Result<Registry> {
    let mut resolver = Resolver::new(file)?;
    let mut registry = Registry::new(file.module.clone());
    for import in &file.imports {
        registry.import(import.clone());
    }
    for decl in &file.enums {
        let def = resolver.enums[decl.name.as_str()].clone();
        registry.enumeration_shared(def);
    }
    for decl in &file.records {
        let def = resolver.record(decl.name.as_str(), false)?;
        registry.record_shared(def);
    }
    Ok(registry)
}

fn schema_error(message: impl Into<String>) -> GenerateError {
    GenerateError::Schema(message.into())
}

struct Resolver<'a> {
    hosts: HashMap<&'a str, &'a HostDecl>,
    converters: HashMap<&'a str, &'a ConverterDecl>,
    externals: HashSet<&'a str>,
    enums: HashMap<&'a str, Arc<EnumDef>>,
    record_decls: HashMap<&'a str, &'a RecordDecl>,
    records: HashMap<&'a str, Arc<RecordDef>>,
    /// Records being resolved, with whether each was reached through a list.
    stack: Vec<(&'a str, bool)>,
    /// Converters being resolved.
    converting: Vec<&'a str>,
}

impl<'a> Resolver<'a> {
    fn new(file: &'a SchemaFile) -> Result<Self> {
        let mut seen = HashSet::new();
        let declared = file
            .host
            .iter()
            .map(|h| h.name.as_str())
            .chain(file.converter.iter().map(|c| c.name.as_str()))
            .chain(file.external.iter().map(|e| e.name.as_str()))
            .chain(file.enums.iter().map(|e| e.name.as_str()))
            .chain(file.records.iter().map(|r| r.name.as_str()));
        for name in declared {
            if SCALARS.contains(&name) {
                return Err(schema_error(format!("`{name}` is a built-in type")));
            }
            if !seen.insert(name) {
                return Err(GenerateError::DuplicateUnit(name.to_owned()));
            }
        }

        let mut enums = HashMap::new();
        for decl in &file.enums {
            enums.insert(decl.name.as_str(), Arc::new(enum_def(decl)?));
        }

        Ok(Self {
            hosts: file.host.iter().map(|h| (h.name.as_str(), h)).collect(),
            converters: file.converter.iter().map(|c| (c.name.as_str(), c)).collect(),
            externals: file.external.iter().map(|e| e.name.as_str()).collect(),
            enums,
            record_decls: file.records.iter().map(|r| (r.name.as_str(), r)).collect(),
            records: HashMap::new(),
            stack: Vec::new(),
            converting: Vec::new(),
        })
    }

    fn record(&mut self, name: &'a str, via_list: bool) -> Result<Arc<RecordDef>> {
        if let Some(def) = self.records.get(name) {
            return Ok(Arc::clone(def));
        }
        let decl = self.record_decls[name];
        self.stack.push((name, via_list));

        let mut def = RecordDef::new(decl.name.clone());
        def.capability = decl.capability.clone();
        def.docs = decl.docs.clone();
        for field in &decl.fields {
            let ty = TypeExpr::parse(&field.ty)
                .map_err(schema_error)
                .and_then(|expr| self.resolve(&expr, false))
                .map_err(|e| match e {
                    GenerateError::Schema(msg) => {
                        schema_error(format!("{}.{}: {msg}", decl.name, field.name))
                    }
                    other => other,
                })?;
            def.fields.push(field_def(field, ty));
        }

        self.stack.pop();
        let def = Arc::new(def);
        self.records.insert(name, Arc::clone(&def));
        Ok(def)
    }

    fn resolve(&mut self, expr: &TypeExpr, in_list: bool) -> Result<Type> {
        match expr {
            TypeExpr::Nullable(inner) => Ok(self.resolve(inner, in_list)?.nullable()),
            TypeExpr::Sequence(inner) => Ok(self.resolve(inner, true)?.list()),
            TypeExpr::Named(name) => self.resolve_name(name, in_list),
        }
    }

    fn resolve_name(&mut self, name: &str, in_list: bool) -> Result<Type> {
        match name {
            "int" => return Ok(Type::Integer32),
            "long" => return Ok(Type::Integer64),
            "double" => return Ok(Type::Float64),
            "boolean" => return Ok(Type::Boolean),
            "string" => return Ok(Type::Text),
            _ => {}
        }
        if let Some(host) = self.hosts.get(name) {
            return Ok(Type::external_host(&host.name, &host.default));
        }
        if let Some(&converter) = self.converters.get(name) {
            return self.converter(converter, in_list);
        }
        if self.externals.contains(name) {
            return Ok(Type::external_record(name));
        }
        if let Some(def) = self.enums.get(name) {
            return Ok(Type::Enum(Arc::clone(def)));
        }
        if let Some((&key, _)) = self.record_decls.get_key_value(name) {
            if let Some(pos) = self.stack.iter().position(|(n, _)| *n == key) {
                let through_list = in_list || self.stack[pos + 1..].iter().any(|(_, l)| *l);
                if !through_list {
                    return Err(schema_error(format!(
                        "record `{name}` contains itself; break the cycle with a list"
                    )));
                }
                return Ok(Type::external_record(naming::type_ident(name)));
            }
            return Ok(Type::Record(self.record(key, in_list)?));
        }
        Err(schema_error(format!("unknown type `{name}`")))
    }

    fn converter(&mut self, decl: &'a ConverterDecl, in_list: bool) -> Result<Type> {
        if self.converting.contains(&decl.name.as_str()) {
            return Err(schema_error(format!(
                "converter `{}` refers to itself",
                decl.name
            )));
        }
        self.converting.push(&decl.name);
        let wire = TypeExpr::parse(&decl.wire)
            .map_err(schema_error)
            .and_then(|expr| self.resolve(&expr, in_list));
        let host = TypeExpr::parse(&decl.host)
            .map_err(schema_error)
            .and_then(|expr| self.resolve(&expr, in_list));
        self.converting.pop();
        Ok(Type::converted(wire?, host?, decl.codec.clone()))
    }
}

fn enum_def(decl: &EnumDecl) -> Result<EnumDef> {
    let mismatch = |variant: &str| {
        schema_error(format!(
            "{}.{variant}: value does not match enum kind {:?}",
            decl.name, decl.kind
        ))
    };
    let mut def = match decl.kind {
        EnumKindDecl::Ordinal => {
            if let Some(v) = decl.variants.iter().find(|v| v.value().is_some()) {
                return Err(mismatch(v.name()));
            }
            EnumDef::ordinal(
                decl.name.clone(),
                decl.variants.iter().map(|v| v.name().to_owned()),
                decl.default,
            )
        }
        EnumKindDecl::Int => {
            let mut variants = Vec::new();
            for v in &decl.variants {
                match v.value() {
                    Some(VariantValue::Int(n)) => variants.push((v.name().to_owned(), *n)),
                    _ => return Err(mismatch(v.name())),
                }
            }
            EnumDef::int_valued(decl.name.clone(), variants, decl.default)
        }
        EnumKindDecl::String => {
            let mut variants = Vec::new();
            for v in &decl.variants {
                let value = match v.value() {
                    Some(VariantValue::Text(s)) => s.clone(),
                    None => v.name().to_owned(),
                    Some(VariantValue::Int(_)) => return Err(mismatch(v.name())),
                };
                variants.push((v.name().to_owned(), value));
            }
            EnumDef::string_valued(decl.name.clone(), variants, decl.default)
        }
    };
    def.docs = decl.docs.clone();
    def.validate()?;
    Ok(def)
}

fn field_def(decl: &FieldDecl, ty: Type) -> Field {
    Field {
        name: decl.name.clone(),
        ty,
        key: decl.key.clone(),
        visibility: match decl.visibility {
            VisibilityDecl::Pub => Visibility::Public,
            VisibilityDecl::Crate => Visibility::Crate,
            VisibilityDecl::Private => Visibility::Private,
        },
        deprecated: decl.deprecated.clone(),
        overrides: decl.overrides,
        docs: decl.docs.clone(),
    }
}
