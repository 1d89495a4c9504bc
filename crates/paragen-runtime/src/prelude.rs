//! Everything generated code refers to.

pub use crate::codec::{AsDynCodec, Codec, CodecExt, Derived};
pub use crate::context::CodecContext;
pub use crate::converted::ConvertedCodec;
pub use crate::enums::{IntEnum, IntEnumCodec, OrdinalEnumCodec, StringEnum, StringEnumCodec};
pub use crate::scalar::{BOOLEAN, FLOAT64, INT32, INT64, TEXT};
pub use crate::sink::TokenSink;
pub use crate::token::TokenSource;
