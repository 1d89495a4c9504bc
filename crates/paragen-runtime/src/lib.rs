//! Fail-soft JSON codecs for paragen-generated types.
//!
//! Every generated record and enum gets a static codec implementing [`Codec`].
//! Codecs walk a [`TokenSource`] (a cursor over the tokens of one document) and
//! write to a [`TokenSink`].
//!
//! # Architecture
//!
//! ```text
//! bytes ──> TokenSource ──> Codec::parse ──> value
//!                                             │
//! bytes <── TokenSink  <── Codec::serialize <─┘
//!
//! INT32 / TEXT / ...        scalar codecs
//! XCodec                    generated record / enum codecs
//! X.as_list_codec()         memoized derived codecs (Vec<T>, Option<T>)
//! ConvertedCodec            host type over a wire codec
//! ```
//!
//! Parsing never fails on well-formed JSON. A value of the wrong shape becomes
//! its type's default, unknown object keys are skipped and reported through
//! the [`CodecContext`] hook, and missing keys keep their defaults. Only
//! malformed JSON or I/O failures surface as [`CodecError`].
//!
//! # Example
//!
//! ```
//! use paragen_runtime::prelude::*;
//!
//! let codec = INT32.as_list_codec();
//! assert_eq!(codec.parse_str("[1, 2, \"x\"]").unwrap(), vec![1, 2, 0]);
//! assert_eq!(codec.to_json_string(&vec![3, 4]), "[3,4]");
//! assert!(std::ptr::addr_eq(codec, INT32.as_list_codec()));
//! ```

pub mod codec;
pub mod context;
pub mod converted;
pub mod derived;
pub mod enums;
pub mod error;
pub mod prelude;
pub mod scalar;
pub mod sink;
pub mod token;

pub use codec::{AsDynCodec, Codec, CodecExt, Derived};
pub use context::{CodecContext, UnknownFieldHook};
pub use converted::ConvertedCodec;
pub use derived::{ListCodec, NullableCodec};
pub use enums::{IntEnum, IntEnumCodec, OrdinalEnumCodec, StringEnum, StringEnumCodec};
pub use error::{CodecError, CodecResult};
pub use sink::{JsonNumber, TokenSink};
pub use token::{Token, TokenSource};
