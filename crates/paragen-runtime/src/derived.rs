//! List and nullable codecs, derived from a base codec on demand.
//!
//! Obtain them through [`CodecExt::as_list_codec`](crate::CodecExt::as_list_codec)
//! and [`CodecExt::as_nullable_codec`](crate::CodecExt::as_nullable_codec);
//! constructing them directly bypasses the per-base cache.

use crate::codec::{Codec, Derived};
use crate::sink::TokenSink;
use crate::token::{Token, TokenSource};

/// Codec for `Vec<T>`.
pub struct ListCodec<T: 'static> {
    base: &'static dyn Codec<T>,
    name: String,
    derived: Derived<Vec<T>>,
}

impl<T: 'static> ListCodec<T> {
    pub(crate) fn new(base: &'static dyn Codec<T>) -> Self {
        Self {
            base,
            name: format!("[{}]", base.name()),
            derived: Derived::new(),
        }
    }
}

impl<T: 'static> Codec<Vec<T>> for ListCodec<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn default_value(&self) -> Vec<T> {
        Vec::new()
    }

    /// Anything other than an array parses as an empty list.
    fn parse(&self, source: &mut TokenSource<'_>) -> Vec<T> {
        if !source.is_start_array() {
            source.skip_children();
            return Vec::new();
        }
        let mut items = Vec::new();
        loop {
            if matches!(source.next_token(), None | Some(Token::EndArray)) {
                break;
            }
            items.push(self.base.parse(source));
        }
        items
    }

    fn serialize(&self, value: &Vec<T>, sink: &mut TokenSink, _framing: bool) {
        sink.begin_array();
        for item in value {
            self.base.serialize(item, sink, true);
        }
        sink.end_array();
    }

    fn derived(&self) -> &Derived<Vec<T>> {
        &self.derived
    }
}

/// Codec for `Option<T>`: JSON `null` is `None`.
pub struct NullableCodec<T: 'static> {
    base: &'static dyn Codec<T>,
    name: String,
    derived: Derived<Option<T>>,
}

impl<T: 'static> NullableCodec<T> {
    pub(crate) fn new(base: &'static dyn Codec<T>) -> Self {
        Self {
            base,
            name: format!("{}?", base.name()),
            derived: Derived::new(),
        }
    }
}

impl<T: 'static> Codec<Option<T>> for NullableCodec<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn default_value(&self) -> Option<T> {
        None
    }

    fn parse(&self, source: &mut TokenSource<'_>) -> Option<T> {
        if source.is_null() {
            None
        } else {
            Some(self.base.parse(source))
        }
    }

    fn serialize(&self, value: &Option<T>, sink: &mut TokenSink, framing: bool) {
        match value {
            Some(inner) => self.base.serialize(inner, sink, framing),
            None => sink.write_null(),
        }
    }

    fn derived(&self) -> &Derived<Option<T>> {
        &self.derived
    }
}
