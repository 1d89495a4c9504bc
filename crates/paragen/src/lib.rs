//! Rust value types and fail-soft JSON codecs from record/enum schemas.
//!
//! `paragen` turns a declarative schema into one Rust source file per record or
//! enum, each holding the value type and a static codec built on
//! [`paragen_runtime`](https://docs.rs/paragen-runtime). Files can be
//! regenerated at any time: hand-written code between marker comments, and
//! `use` lines added at the top, are carried over.
//!
//! # Architecture
//!
//! ```text
//! schema file ─> input ─┐
//!                       ├─> Registry ─> output (synthesis) ─> merge ─> OutputStore
//! builder API ──────────┘      │
//!                          ir::Type algebra
//! ```
//!
//! # Example
//!
//! ```
//! use paragen::{Field, MemoryStore, RecordDef, Registry, Type};
//!
//! let mut registry = Registry::new("model");
//! registry.record(
//!     RecordDef::new("Counter")
//!         .field(Field::new("count", Type::Integer32))
//!         .field(Field::new("label", Type::Text.nullable())),
//! );
//!
//! let mut store = MemoryStore::new();
//! registry.generate(&mut store).unwrap();
//! let text = store.get("model/counter.rs").unwrap();
//! assert!(text.contains("pub static COUNTER_CODEC: CounterCodec"));
//! assert!(text.contains("/* EXTRA CODE START */"));
//! ```

pub mod config;
pub mod error;
mod field;
pub mod input;
pub mod ir;
pub mod merge;
pub mod naming;
pub mod output;
pub mod registry;
pub mod store;
pub mod traits;

pub use config::ParagenConfig;
pub use error::{GenerateError, Result};
pub use ir::{EnumDef, EnumKind, Field, RecordDef, Type, Visibility};
pub use registry::{GenerationReport, Registry};
pub use store::{FsStore, MemoryStore};
pub use traits::OutputStore;
