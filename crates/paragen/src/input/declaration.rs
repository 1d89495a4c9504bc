//! Serde model of a schema file.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaFile {
    /// Rust path of the generated module.
    pub module: String,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub host: Vec<HostDecl>,
    #[serde(default)]
    pub converter: Vec<ConverterDecl>,
    #[serde(default)]
    pub external: Vec<ExternalDecl>,
    #[serde(default, rename = "enum")]
    pub enums: Vec<EnumDecl>,
    #[serde(default, rename = "record")]
    pub records: Vec<RecordDecl>,
}

/// A hand-written Rust type usable as the host side of a converter.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostDecl {
    pub name: String,
    /// Rust expression for the default value.
    pub default: String,
}

/// A named converted type.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConverterDecl {
    pub name: String,
    /// Static converter codec in scope of the generated module.
    pub codec: String,
    /// Type expression of the wire side.
    pub wire: String,
    /// Type expression (usually a host name) of the in-memory side.
    pub host: String,
}

/// A record codec maintained outside the generated module.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExternalDecl {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumKindDecl {
    Ordinal,
    Int,
    String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDecl {
    pub name: String,
    pub kind: EnumKindDecl,
    /// Index of the default variant.
    #[serde(default)]
    pub default: usize,
    pub variants: Vec<VariantDecl>,
    pub docs: Option<String>,
}

/// `"Name"` or `{ name = "Name", value = 3 }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VariantDecl {
    Bare(String),
    Full {
        name: String,
        #[serde(default)]
        value: Option<VariantValue>,
    },
}

impl VariantDecl {
    pub fn name(&self) -> &str {
        match self {
            VariantDecl::Bare(name) | VariantDecl::Full { name, .. } => name,
        }
    }

    pub fn value(&self) -> Option<&VariantValue> {
        match self {
            VariantDecl::Bare(_) => None,
            VariantDecl::Full { value, .. } => value.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VariantValue {
    Int(i32),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordDecl {
    pub name: String,
    pub capability: Option<String>,
    pub docs: Option<String>,
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldDecl>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityDecl {
    #[default]
    Pub,
    Crate,
    Private,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDecl {
    pub name: String,
    /// Type expression.
    #[serde(rename = "type")]
    pub ty: String,
    /// Wire key, when it differs from `name`.
    pub key: Option<String>,
    #[serde(default)]
    pub visibility: VisibilityDecl,
    pub deprecated: Option<String>,
    #[serde(default, rename = "override")]
    pub overrides: bool,
    pub docs: Option<String>,
}
