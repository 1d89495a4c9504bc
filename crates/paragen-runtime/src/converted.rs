//! Codecs that expose a host type while delegating the wire format to another
//! codec.

use crate::codec::{Codec, Derived};
use crate::sink::TokenSink;
use crate::token::TokenSource;

/// Parses with `wire` and maps the result through `to_host`; serializes by
/// mapping back through `to_wire`.
///
/// The two conversions are expected to be inverses; nothing checks it.
pub struct ConvertedCodec<W: 'static, H: 'static> {
    name: &'static str,
    wire: &'static dyn Codec<W>,
    to_host: fn(W) -> H,
    to_wire: fn(&H) -> W,
    derived: Derived<H>,
}

impl<W: 'static, H: 'static> ConvertedCodec<W, H> {
    pub const fn new(
        name: &'static str,
        wire: &'static dyn Codec<W>,
        to_host: fn(W) -> H,
        to_wire: fn(&H) -> W,
    ) -> Self {
        Self {
            name,
            wire,
            to_host,
            to_wire,
            derived: Derived::new(),
        }
    }

    /// The codec the wire format is delegated to.
    pub fn wire(&self) -> &'static dyn Codec<W> {
        self.wire
    }
}

impl<W: 'static, H: 'static> Codec<H> for ConvertedCodec<W, H> {
    fn name(&self) -> &str {
        self.name
    }

    fn default_value(&self) -> H {
        (self.to_host)(self.wire.default_value())
    }

    fn parse(&self, source: &mut TokenSource<'_>) -> H {
        (self.to_host)(self.wire.parse(source))
    }

    fn serialize(&self, value: &H, sink: &mut TokenSink, framing: bool) {
        let wire = (self.to_wire)(value);
        self.wire.serialize(&wire, sink, framing);
    }

    fn derived(&self) -> &Derived<H> {
        &self.derived
    }
}
