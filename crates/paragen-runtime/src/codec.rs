//! The codec contract and the per-codec derived-codec cache.

use crate::context::CodecContext;
use crate::derived::{ListCodec, NullableCodec};
use crate::error::CodecResult;
use crate::sink::TokenSink;
use crate::token::TokenSource;
use std::io;
use std::sync::OnceLock;

/// Parses and serializes values of one type against the token stream.
///
/// Codecs are stateless singletons, safe to share across threads. `parse`
/// never fails on valid JSON: a value of the wrong shape yields
/// [`default_value`](Codec::default_value) (or a partially filled value for
/// records).
pub trait Codec<T>: AsDynCodec<T> + Send + Sync {
    /// Diagnostic name: the type name for records and enums, `[inner]` for
    /// lists, `inner?` for nullables.
    fn name(&self) -> &str;

    /// Fresh default instance. Never panics.
    fn default_value(&self) -> T;

    /// Read one value starting at the cursor; on return the cursor sits on the
    /// value's last token.
    fn parse(&self, source: &mut TokenSource<'_>) -> T;

    /// Write one value. With `framing` false a record writes its fields but
    /// leaves the surrounding braces to the caller; other codecs ignore the flag.
    fn serialize(&self, value: &T, sink: &mut TokenSink, framing: bool);

    /// Cache slots for the list/nullable codecs derived from this one.
    fn derived(&self) -> &Derived<T>;
}

/// Upcast to a trait object. Implemented for every sized codec.
pub trait AsDynCodec<T> {
    fn as_dyn(&self) -> &dyn Codec<T>;
}

impl<T, C: Codec<T>> AsDynCodec<T> for C {
    fn as_dyn(&self) -> &dyn Codec<T> {
        self
    }
}

/// Lazily created list and nullable codecs over a base codec.
///
/// Each slot is initialized at most once, so concurrent first requests
/// observe the same instance.
pub struct Derived<T> {
    list: OnceLock<Box<dyn Codec<Vec<T>>>>,
    nullable: OnceLock<Box<dyn Codec<Option<T>>>>,
}

impl<T> Derived<T> {
    pub const fn new() -> Self {
        Self {
            list: OnceLock::new(),
            nullable: OnceLock::new(),
        }
    }
}

impl<T> Default for Derived<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Derived")
            .field("list", &self.list.get().map(|c| c.name()))
            .field("nullable", &self.nullable.get().map(|c| c.name()))
            .finish()
    }
}

/// Derived codecs and the byte/string/stream conveniences.
pub trait CodecExt<T>: Codec<T> {
    /// The codec for `Vec<T>`; every call returns the same instance.
    fn as_list_codec(&'static self) -> &'static dyn Codec<Vec<T>>
    where
        T: 'static,
    {
        let base = self.as_dyn();
        &**self
            .derived()
            .list
            .get_or_init(|| Box::new(ListCodec::new(base)))
    }

    /// The codec for `Option<T>`; every call returns the same instance.
    fn as_nullable_codec(&'static self) -> &'static dyn Codec<Option<T>>
    where
        T: 'static,
    {
        let base = self.as_dyn();
        &**self
            .derived()
            .nullable
            .get_or_init(|| Box::new(NullableCodec::new(base)))
    }

    fn parse_str_in(&self, context: &CodecContext, json: &str) -> CodecResult<T> {
        let mut source = context.source_from_str(json)?;
        Ok(self.parse(&mut source))
    }

    fn parse_str(&self, json: &str) -> CodecResult<T> {
        self.parse_str_in(CodecContext::global(), json)
    }

    fn parse_slice_in(&self, context: &CodecContext, bytes: &[u8]) -> CodecResult<T> {
        let mut source = context.source_from_slice(bytes)?;
        Ok(self.parse(&mut source))
    }

    fn parse_slice(&self, bytes: &[u8]) -> CodecResult<T> {
        self.parse_slice_in(CodecContext::global(), bytes)
    }

    fn parse_reader_in<R: io::Read>(&self, context: &CodecContext, reader: R) -> CodecResult<T> {
        let mut source = context.source_from_reader(reader)?;
        Ok(self.parse(&mut source))
    }

    fn parse_reader<R: io::Read>(&self, reader: R) -> CodecResult<T> {
        self.parse_reader_in(CodecContext::global(), reader)
    }

    fn to_json_string_in(&self, context: &CodecContext, value: &T) -> String {
        let mut sink = context.sink();
        self.serialize(value, &mut sink, true);
        sink.into_string()
    }

    fn to_json_string(&self, value: &T) -> String {
        self.to_json_string_in(CodecContext::global(), value)
    }

    fn to_json_bytes_in(&self, context: &CodecContext, value: &T) -> Vec<u8> {
        let mut sink = context.sink();
        self.serialize(value, &mut sink, true);
        sink.into_bytes()
    }

    fn to_json_bytes(&self, value: &T) -> Vec<u8> {
        self.to_json_bytes_in(CodecContext::global(), value)
    }

    fn write_json_in<W: io::Write>(
        &self,
        context: &CodecContext,
        value: &T,
        mut writer: W,
    ) -> CodecResult<()> {
        writer.write_all(&self.to_json_bytes_in(context, value))?;
        writer.flush()?;
        Ok(())
    }

    fn write_json<W: io::Write>(&self, value: &T, writer: W) -> CodecResult<()> {
        self.write_json_in(CodecContext::global(), value, writer)
    }
}

impl<T, C: Codec<T> + ?Sized> CodecExt<T> for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{INT32, TEXT};

    #[test]
    fn derived_codecs_are_memoized() {
        let a = INT32.as_list_codec() as *const dyn Codec<Vec<i32>> as *const ();
        let b = INT32.as_list_codec() as *const dyn Codec<Vec<i32>> as *const ();
        assert_eq!(a, b);

        let list = TEXT.as_nullable_codec().as_list_codec();
        assert_eq!(list.name(), "[string?]");
        let again = TEXT.as_nullable_codec().as_list_codec();
        assert!(std::ptr::addr_eq(list, again));
    }

    #[test]
    fn concurrent_first_request_yields_one_instance() {
        use crate::scalar::INT64;
        let addrs: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        INT64.as_nullable_codec().as_list_codec() as *const _ as *const ()
                            as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn write_json_to_writer() {
        let mut out = Vec::new();
        INT32.as_list_codec().write_json(&vec![1, 2], &mut out).unwrap();
        assert_eq!(out, b"[1,2]");
    }

    #[test]
    fn byte_and_stream_conveniences_honor_context() {
        let context = CodecContext::new().with_pretty(true);
        let codec = INT32.as_list_codec();
        assert_eq!(codec.to_json_bytes_in(&context, &vec![1]), b"[\n  1\n]");

        let mut out = Vec::new();
        codec.write_json_in(&context, &vec![], &mut out).unwrap();
        assert_eq!(out, b"[]");

        assert_eq!(codec.parse_slice_in(&context, b"[4, 5]").unwrap(), vec![4, 5]);
        assert_eq!(
            codec.parse_reader_in(&context, &b"[6]"[..]).unwrap(),
            vec![6]
        );
        assert!(codec.parse_reader_in(&context, &b"[6"[..]).is_err());
    }
}
