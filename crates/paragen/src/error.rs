//! Generation-time errors.
//!
//! Everything here is detected before any file is written: misuse of the type
//! algebra, name collisions, malformed schema files.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// An external host type was asked for a codec or parse expression. Host
    /// types are only valid as the host side of a converted type.
    #[error("external host type `{0}` has no codec; wrap it in a converted type")]
    ExternalHostCodec(String),

    #[error("unit `{0}` is declared more than once")]
    DuplicateUnit(String),

    #[error("units `{first}` and `{second}` both generate `{stem}.rs`")]
    CollidingUnits {
        first: String,
        second: String,
        stem: String,
    },

    #[error("unit name `{0}` is reserved")]
    ReservedUnitName(String),

    #[error("`{0}` cannot name a unit: it must yield a plain Rust identifier")]
    InvalidName(String),

    #[error("enum `{0}` has no variants")]
    EmptyEnum(String),

    #[error("enum `{name}` default index {index} is out of range for {len} variants")]
    InvalidEnumDefault {
        name: String,
        index: usize,
        len: usize,
    },

    #[error("enum `{name}` declares variant `{variant}` more than once")]
    DuplicateVariant { name: String, variant: String },

    #[error("record `{record}` maps wire key `{key}` to more than one field")]
    DuplicateWireKey { record: String, key: String },

    #[error("record `{record}` declares field `{field}` more than once")]
    DuplicateField { record: String, field: String },

    #[error("field `{record}.{field}` overrides a capability, but `{record}` declares none")]
    OverrideWithoutCapability { record: String, field: String },

    #[error("schema error: {0}")]
    Schema(String),

    #[error("failed to parse TOML schema: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON schema: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
