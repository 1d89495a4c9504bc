//! Primitive codecs. Wrong token kinds, out-of-range integers and nested
//! structures in scalar position all degrade to the zero value.

use crate::codec::{Codec, Derived};
use crate::sink::TokenSink;
use crate::token::TokenSource;

macro_rules! scalar_codec {
    (
        $(#[$meta:meta])*
        $codec:ident, $static:ident, $ty:ty, $name:literal,
        default = $default:expr,
        read = |$src:ident| $read:expr,
        write = |$sink:ident, $value:ident| $write:expr $(,)?
    ) => {
        $(#[$meta])*
        pub struct $codec {
            derived: Derived<$ty>,
        }

        impl $codec {
            pub const fn new() -> Self {
                Self {
                    derived: Derived::new(),
                }
            }
        }

        impl Default for $codec {
            fn default() -> Self {
                Self::new()
            }
        }

        pub static $static: $codec = $codec::new();

        impl Codec<$ty> for $codec {
            fn name(&self) -> &str {
                $name
            }

            fn default_value(&self) -> $ty {
                $default
            }

            fn parse(&self, $src: &mut TokenSource<'_>) -> $ty {
                let value = $read;
                $src.skip_children();
                value
            }

            fn serialize(&self, $value: &$ty, $sink: &mut TokenSink, _framing: bool) {
                $write
            }

            fn derived(&self) -> &Derived<$ty> {
                &self.derived
            }
        }
    };
}

scalar_codec! {
    /// 32-bit signed integers.
    Int32Codec, INT32, i32, "int",
    default = 0,
    read = |src| src.value_as_i32(),
    write = |sink, value| sink.write_number(*value),
}

scalar_codec! {
    /// 64-bit signed integers.
    Int64Codec, INT64, i64, "long",
    default = 0,
    read = |src| src.value_as_i64(),
    write = |sink, value| sink.write_number(*value),
}

scalar_codec! {
    /// Double-precision floats. Integer tokens are accepted.
    Float64Codec, FLOAT64, f64, "double",
    default = 0.0,
    read = |src| src.value_as_f64(),
    write = |sink, value| sink.write_number(*value),
}

scalar_codec! {
    BooleanCodec, BOOLEAN, bool, "boolean",
    default = false,
    read = |src| src.value_as_bool(),
    write = |sink, value| sink.write_bool(*value),
}

scalar_codec! {
    TextCodec, TEXT, String, "string",
    default = String::new(),
    read = |src| src.value_as_string(),
    write = |sink, value| sink.write_string(value),
}
