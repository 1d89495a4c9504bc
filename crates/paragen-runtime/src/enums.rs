//! Enum codecs.
//!
//! Three wire encodings are supported: the zero-based variant position, an
//! explicit integer per variant, or an explicit string per variant. Unknown or
//! mistyped wire values parse as the enum's declared default variant.

use crate::codec::{Codec, Derived};
use crate::sink::TokenSink;
use crate::token::{Token, TokenSource};

/// Enum whose variants carry an explicit integer wire value.
pub trait IntEnum: Copy + PartialEq + Send + Sync + 'static {
    fn value(self) -> i32;
}

/// Enum whose variants carry an explicit string wire value.
pub trait StringEnum: Copy + PartialEq + Send + Sync + 'static {
    fn value(self) -> &'static str;
}

/// Encodes a variant as its position in `variants`.
pub struct OrdinalEnumCodec<E: 'static> {
    name: &'static str,
    variants: &'static [E],
    default: E,
    derived: Derived<E>,
}

impl<E: Copy + PartialEq + Send + Sync + 'static> OrdinalEnumCodec<E> {
    pub const fn new(name: &'static str, variants: &'static [E], default: E) -> Self {
        Self {
            name,
            variants,
            default,
            derived: Derived::new(),
        }
    }

    fn position(&self, value: E) -> Option<usize> {
        self.variants.iter().position(|v| *v == value)
    }
}

impl<E: Copy + PartialEq + Send + Sync + 'static> Codec<E> for OrdinalEnumCodec<E> {
    fn name(&self) -> &str {
        self.name
    }

    fn default_value(&self) -> E {
        self.default
    }

    fn parse(&self, source: &mut TokenSource<'_>) -> E {
        let value = match source.current() {
            Some(Token::Int(n)) => usize::try_from(*n)
                .ok()
                .and_then(|n| self.variants.get(n).copied()),
            _ => None,
        };
        source.skip_children();
        value.unwrap_or(self.default)
    }

    fn serialize(&self, value: &E, sink: &mut TokenSink, _framing: bool) {
        let position = self
            .position(*value)
            .or_else(|| self.position(self.default))
            .unwrap_or(0);
        sink.write_number(position);
    }

    fn derived(&self) -> &Derived<E> {
        &self.derived
    }
}

/// Encodes a variant as its [`IntEnum::value`]. The first variant with a
/// matching value wins on parse.
pub struct IntEnumCodec<E: 'static> {
    name: &'static str,
    variants: &'static [E],
    default: E,
    derived: Derived<E>,
}

impl<E: IntEnum> IntEnumCodec<E> {
    pub const fn new(name: &'static str, variants: &'static [E], default: E) -> Self {
        Self {
            name,
            variants,
            default,
            derived: Derived::new(),
        }
    }
}

impl<E: IntEnum> Codec<E> for IntEnumCodec<E> {
    fn name(&self) -> &str {
        self.name
    }

    fn default_value(&self) -> E {
        self.default
    }

    fn parse(&self, source: &mut TokenSource<'_>) -> E {
        let value = match source.current() {
            Some(Token::Int(n)) => self
                .variants
                .iter()
                .find(|v| i64::from(v.value()) == *n)
                .copied(),
            _ => None,
        };
        source.skip_children();
        value.unwrap_or(self.default)
    }

    fn serialize(&self, value: &E, sink: &mut TokenSink, _framing: bool) {
        sink.write_number(value.value());
    }

    fn derived(&self) -> &Derived<E> {
        &self.derived
    }
}

/// Encodes a variant as its [`StringEnum::value`]. The first variant with a
/// matching value wins on parse.
pub struct StringEnumCodec<E: 'static> {
    name: &'static str,
    variants: &'static [E],
    default: E,
    derived: Derived<E>,
}

impl<E: StringEnum> StringEnumCodec<E> {
    pub const fn new(name: &'static str, variants: &'static [E], default: E) -> Self {
        Self {
            name,
            variants,
            default,
            derived: Derived::new(),
        }
    }
}

impl<E: StringEnum> Codec<E> for StringEnumCodec<E> {
    fn name(&self) -> &str {
        self.name
    }

    fn default_value(&self) -> E {
        self.default
    }

    fn parse(&self, source: &mut TokenSource<'_>) -> E {
        let value = match source.current() {
            Some(Token::String(s)) => self.variants.iter().find(|v| v.value() == s).copied(),
            _ => None,
        };
        source.skip_children();
        value.unwrap_or(self.default)
    }

    fn serialize(&self, value: &E, sink: &mut TokenSink, _framing: bool) {
        sink.write_string(value.value());
    }

    fn derived(&self) -> &Derived<E> {
        &self.derived
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodecExt;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Suit {
        Hearts,
        Spades,
        Clubs,
    }

    impl IntEnum for Suit {
        fn value(self) -> i32 {
            match self {
                Suit::Hearts => 10,
                Suit::Spades => 20,
                Suit::Clubs => 10,
            }
        }
    }

    impl StringEnum for Suit {
        fn value(self) -> &'static str {
            match self {
                Suit::Hearts => "h",
                Suit::Spades => "s",
                Suit::Clubs => "c",
            }
        }
    }

    const VARIANTS: &[Suit] = &[Suit::Hearts, Suit::Spades, Suit::Clubs];

    static ORDINAL: OrdinalEnumCodec<Suit> = OrdinalEnumCodec::new("Suit", VARIANTS, Suit::Spades);
    static BY_INT: IntEnumCodec<Suit> = IntEnumCodec::new("Suit", VARIANTS, Suit::Spades);
    static BY_STR: StringEnumCodec<Suit> = StringEnumCodec::new("Suit", VARIANTS, Suit::Hearts);

    #[test]
    fn ordinal() {
        assert_eq!(ORDINAL.parse_str("2").unwrap(), Suit::Clubs);
        assert_eq!(ORDINAL.parse_str("3").unwrap(), Suit::Spades);
        assert_eq!(ORDINAL.parse_str("-1").unwrap(), Suit::Spades);
        assert_eq!(ORDINAL.parse_str("\"Clubs\"").unwrap(), Suit::Spades);
        assert_eq!(ORDINAL.to_json_string(&Suit::Clubs), "2");
    }

    #[test]
    fn int_values_first_match_wins() {
        assert_eq!(BY_INT.parse_str("10").unwrap(), Suit::Hearts);
        assert_eq!(BY_INT.parse_str("20").unwrap(), Suit::Spades);
        assert_eq!(BY_INT.parse_str("99").unwrap(), Suit::Spades);
        assert_eq!(BY_INT.to_json_string(&Suit::Clubs), "10");
    }

    #[test]
    fn string_values() {
        assert_eq!(BY_STR.parse_str("\"s\"").unwrap(), Suit::Spades);
        assert_eq!(BY_STR.parse_str("\"x\"").unwrap(), Suit::Hearts);
        assert_eq!(BY_STR.parse_str("[\"s\"]").unwrap(), Suit::Hearts);
        assert_eq!(BY_STR.to_json_string(&Suit::Clubs), "\"c\"");
    }

    #[test]
    fn enum_lists() {
        let list = BY_STR.as_list_codec();
        assert_eq!(list.name(), "[Suit]");
        assert_eq!(
            list.parse_str(r#"["c", "nope", "s"]"#).unwrap(),
            vec![Suit::Clubs, Suit::Hearts, Suit::Spades]
        );
    }
}
