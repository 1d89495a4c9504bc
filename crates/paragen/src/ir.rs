//! Type algebra and unit descriptors.
//!
//! A [`Type`] knows, for itself, the Rust type it is stored as, its default
//! value expression, the runtime codec that handles it, and the expression that
//! parses it from a token source. Composite types derive all four from their
//! components, so `[string?]` becomes `Vec<Option<String>>` parsed by
//! `TEXT.as_nullable_codec().as_list_codec()`.

use crate::error::{GenerateError, Result};
use crate::naming;
use std::sync::Arc;

/// Name of the token-source variable in generated `parse` bodies.
pub const SOURCE: &str = "src";

/// A schema type.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Integer32,
    Integer64,
    Float64,
    Boolean,
    Text,
    Nullable(Box<Type>),
    Sequence(Box<Type>),
    /// Stored as `host`, encoded as `wire` through the codec static `converter`.
    Converted {
        wire: Box<Type>,
        host: Box<Type>,
        converter: String,
    },
    /// A hand-written Rust type with no codec of its own.
    ExternalHost { name: String, default: String },
    /// A record codec maintained elsewhere (or not yet declared), following the
    /// `Name` / `NAME_CODEC` convention.
    ExternalRecord(String),
    Record(Arc<RecordDef>),
    Enum(Arc<EnumDef>),
}

impl Type {
    pub fn nullable(self) -> Type {
        Type::Nullable(Box::new(self))
    }

    pub fn list(self) -> Type {
        Type::Sequence(Box::new(self))
    }

    pub fn converted(wire: Type, host: Type, converter: impl Into<String>) -> Type {
        Type::Converted {
            wire: Box::new(wire),
            host: Box::new(host),
            converter: converter.into(),
        }
    }

    pub fn external_host(name: impl Into<String>, default: impl Into<String>) -> Type {
        Type::ExternalHost {
            name: name.into(),
            default: default.into(),
        }
    }

    pub fn external_record(name: impl Into<String>) -> Type {
        Type::ExternalRecord(name.into())
    }

    /// The Rust type values are stored as.
    pub fn rust_type(&self) -> String {
        match self {
            Type::Integer32 => "i32".into(),
            Type::Integer64 => "i64".into(),
            Type::Float64 => "f64".into(),
            Type::Boolean => "bool".into(),
            Type::Text => "String".into(),
            Type::Nullable(inner) => format!("Option<{}>", inner.rust_type()),
            Type::Sequence(inner) => format!("Vec<{}>", inner.rust_type()),
            Type::Converted { host, .. } => host.rust_type(),
            Type::ExternalHost { name, .. } => name.clone(),
            Type::ExternalRecord(name) => name.clone(),
            Type::Record(def) => def.type_name(),
            Type::Enum(def) => def.type_name(),
        }
    }

    /// Expression producing a fresh default value.
    pub fn default_literal(&self) -> String {
        match self {
            Type::Integer32 | Type::Integer64 => "0".into(),
            Type::Float64 => "0.0".into(),
            Type::Boolean => "false".into(),
            Type::Text => "String::new()".into(),
            Type::Nullable(_) => "None".into(),
            Type::Sequence(_) => "Vec::new()".into(),
            Type::Converted { converter, .. } => format!("{converter}.default_value()"),
            Type::ExternalHost { default, .. } => default.clone(),
            Type::ExternalRecord(name) => format!("{}.default_value()", naming::codec_static(name)),
            Type::Record(def) => format!("{}.default_value()", def.codec_static()),
            Type::Enum(def) => def.default_path(),
        }
    }

    /// Expression naming the `&'static` codec for this type.
    pub fn codec_ref(&self) -> Result<String> {
        Ok(match self {
            Type::Integer32 => "INT32".into(),
            Type::Integer64 => "INT64".into(),
            Type::Float64 => "FLOAT64".into(),
            Type::Boolean => "BOOLEAN".into(),
            Type::Text => "TEXT".into(),
            Type::Nullable(inner) => format!("{}.as_nullable_codec()", inner.codec_ref()?),
            Type::Sequence(inner) => format!("{}.as_list_codec()", inner.codec_ref()?),
            Type::Converted {
                wire, converter, ..
            } => {
                // The wire side must be encodable on its own.
                wire.codec_ref()?;
                converter.clone()
            }
            Type::ExternalHost { name, .. } => {
                return Err(GenerateError::ExternalHostCodec(name.clone()));
            }
            Type::ExternalRecord(name) => naming::codec_static(name),
            Type::Record(def) => def.codec_static(),
            Type::Enum(def) => def.codec_static(),
        })
    }

    /// Expression reading one value from the token source [`SOURCE`].
    ///
    /// Scalars read the current token directly; everything else goes through
    /// its codec.
    pub fn parse_expr(&self) -> Result<String> {
        Ok(match self {
            Type::Integer32 => format!("{SOURCE}.value_as_i32()"),
            Type::Integer64 => format!("{SOURCE}.value_as_i64()"),
            Type::Float64 => format!("{SOURCE}.value_as_f64()"),
            Type::Boolean => format!("{SOURCE}.value_as_bool()"),
            Type::Text => format!("{SOURCE}.value_as_string()"),
            _ => format!("{}.parse({SOURCE})", self.codec_ref()?),
        })
    }

    /// Check the type is usable as a field type.
    pub fn validate(&self) -> Result<()> {
        self.codec_ref().map(drop)
    }
}

/// Field visibility in the generated struct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Public,
    Crate,
    Private,
}

impl Visibility {
    /// The keyword prefix, including a trailing space when non-empty.
    pub fn prefix(self) -> &'static str {
        match self {
            Visibility::Public => "pub ",
            Visibility::Crate => "pub(crate) ",
            Visibility::Private => "",
        }
    }
}

/// A record field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Declared name; the Rust identifier is its snake_case form.
    pub name: String,
    pub ty: Type,
    /// Wire key, when it differs from `name`.
    pub key: Option<String>,
    pub visibility: Visibility,
    pub deprecated: Option<String>,
    /// Implemented as an accessor of the record's capability trait.
    pub overrides: bool,
    pub docs: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            key: None,
            visibility: Visibility::Public,
            deprecated: None,
            overrides: false,
            docs: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn deprecated(mut self, note: impl Into<String>) -> Self {
        self.deprecated = Some(note.into());
        self
    }

    pub fn overriding(mut self) -> Self {
        self.overrides = true;
        self
    }

    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }

    /// The JSON object key.
    pub fn wire_key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.name)
    }

    pub fn ident(&self) -> String {
        naming::field_ident(&self.name)
    }
}

/// A record: an immutable value type with named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDef {
    pub name: String,
    pub fields: Vec<Field>,
    /// Trait implemented through accessors for every overriding field.
    pub capability: Option<String>,
    pub docs: Option<String>,
}

impl RecordDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            capability: None,
            docs: None,
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capability = Some(capability.into());
        self
    }

    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }

    pub fn type_name(&self) -> String {
        naming::type_ident(&self.name)
    }

    pub fn codec_static(&self) -> String {
        naming::codec_static(&self.name)
    }

    pub fn codec_struct(&self) -> String {
        naming::codec_struct(&self.name)
    }

    /// Reject duplicate fields, duplicate wire keys, unusable field types and
    /// overrides without a capability.
    pub fn validate(&self) -> Result<()> {
        let mut idents = std::collections::HashSet::new();
        let mut keys = std::collections::HashSet::new();
        for field in &self.fields {
            if !idents.insert(field.ident()) {
                return Err(GenerateError::DuplicateField {
                    record: self.name.clone(),
                    field: field.name.clone(),
                });
            }
            if !keys.insert(field.wire_key()) {
                return Err(GenerateError::DuplicateWireKey {
                    record: self.name.clone(),
                    key: field.wire_key().to_owned(),
                });
            }
            if field.overrides && self.capability.is_none() {
                return Err(GenerateError::OverrideWithoutCapability {
                    record: self.name.clone(),
                    field: field.name.clone(),
                });
            }
            field.ty.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntVariant {
    pub name: String,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringVariant {
    pub name: String,
    pub value: String,
}

/// How an enum is encoded on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumKind {
    /// Zero-based variant position.
    Ordinal(Vec<String>),
    IntValued(Vec<IntVariant>),
    StringValued(Vec<StringVariant>),
}

/// An enumeration with a designated default variant.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
    pub name: String,
    pub kind: EnumKind,
    /// Index into the variant list.
    pub default: usize,
    pub docs: Option<String>,
}

impl EnumDef {
    pub fn ordinal<S: Into<String>>(
        name: impl Into<String>,
        variants: impl IntoIterator<Item = S>,
        default: usize,
    ) -> Self {
        Self {
            name: name.into(),
            kind: EnumKind::Ordinal(variants.into_iter().map(Into::into).collect()),
            default,
            docs: None,
        }
    }

    pub fn int_valued<S: Into<String>>(
        name: impl Into<String>,
        variants: impl IntoIterator<Item = (S, i32)>,
        default: usize,
    ) -> Self {
        Self {
            name: name.into(),
            kind: EnumKind::IntValued(
                variants
                    .into_iter()
                    .map(|(name, value)| IntVariant {
                        name: name.into(),
                        value,
                    })
                    .collect(),
            ),
            default,
            docs: None,
        }
    }

    pub fn string_valued<S: Into<String>, V: Into<String>>(
        name: impl Into<String>,
        variants: impl IntoIterator<Item = (S, V)>,
        default: usize,
    ) -> Self {
        Self {
            name: name.into(),
            kind: EnumKind::StringValued(
                variants
                    .into_iter()
                    .map(|(name, value)| StringVariant {
                        name: name.into(),
                        value: value.into(),
                    })
                    .collect(),
            ),
            default,
            docs: None,
        }
    }

    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }

    /// Declared variant names, in order.
    pub fn variant_names(&self) -> Vec<&str> {
        match &self.kind {
            EnumKind::Ordinal(names) => names.iter().map(String::as_str).collect(),
            EnumKind::IntValued(variants) => variants.iter().map(|v| v.name.as_str()).collect(),
            EnumKind::StringValued(variants) => variants.iter().map(|v| v.name.as_str()).collect(),
        }
    }

    pub fn type_name(&self) -> String {
        naming::type_ident(&self.name)
    }

    pub fn codec_static(&self) -> String {
        naming::codec_static(&self.name)
    }

    /// `Name::DefaultVariant`. Only meaningful once [`validate`](Self::validate) passed.
    pub fn default_path(&self) -> String {
        let variant = self
            .variant_names()
            .get(self.default)
            .map(|v| naming::type_ident(v))
            .unwrap_or_default();
        format!("{}::{}", self.type_name(), variant)
    }

    pub fn validate(&self) -> Result<()> {
        let names = self.variant_names();
        if names.is_empty() {
            return Err(GenerateError::EmptyEnum(self.name.clone()));
        }
        if self.default >= names.len() {
            return Err(GenerateError::InvalidEnumDefault {
                name: self.name.clone(),
                index: self.default,
                len: names.len(),
            });
        }
        let mut seen = std::collections::HashSet::new();
        for name in names {
            if !seen.insert(naming::type_ident(name)) {
                return Err(GenerateError::DuplicateVariant {
                    name: self.name.clone(),
                    variant: name.to_owned(),
                });
            }
        }
        Ok(())
    }
}
