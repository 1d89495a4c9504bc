//! Token source: a cursor over the JSON token stream of one input document.
//!
//! The input is tokenized up front by driving `serde_json`'s deserializer with a
//! flattening visitor, so object keys keep their document order (duplicates
//! included). Codecs then walk the tokens with the cursor:
//!
//! - on entry to `parse`, the cursor sits on the first token of the value;
//! - on return, it sits on the last token of the value (the scalar itself, or
//!   the matching end token of an object/array).

use crate::context::CodecContext;
use crate::error::CodecResult;
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;
use std::io;

/// A single JSON token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    FieldName(String),
    String(String),
    /// Any integer representable as `i64`.
    Int(i64),
    /// Integers above `i64::MAX`.
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
}

impl Token {
    /// Name of the token kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::StartObject => "start of object",
            Token::EndObject => "end of object",
            Token::StartArray => "start of array",
            Token::EndArray => "end of array",
            Token::FieldName(_) => "field name",
            Token::String(_) => "string",
            Token::Int(_) | Token::UInt(_) => "integer",
            Token::Float(_) => "float",
            Token::Bool(_) => "boolean",
            Token::Null => "null",
        }
    }
}

/// Single-use cursor over the tokens of one document.
///
/// Owned exclusively by the parse call that created it.
pub struct TokenSource<'ctx> {
    tokens: Vec<Token>,
    pos: usize,
    context: &'ctx CodecContext,
}

impl<'ctx> TokenSource<'ctx> {
    /// Build a source over already-tokenized input, positioned on the first token.
    pub fn new(tokens: Vec<Token>, context: &'ctx CodecContext) -> Self {
        Self {
            tokens,
            pos: 0,
            context,
        }
    }

    pub fn from_str(json: &str, context: &'ctx CodecContext) -> CodecResult<Self> {
        tokenize(serde_json::Deserializer::from_str(json), context)
    }

    pub fn from_slice(bytes: &[u8], context: &'ctx CodecContext) -> CodecResult<Self> {
        tokenize(serde_json::Deserializer::from_slice(bytes), context)
    }

    pub fn from_reader<R: io::Read>(reader: R, context: &'ctx CodecContext) -> CodecResult<Self> {
        tokenize(serde_json::Deserializer::from_reader(reader), context)
    }

    /// The context this source reports unknown fields to.
    pub fn context(&self) -> &'ctx CodecContext {
        self.context
    }

    /// Token under the cursor, `None` once the input is exhausted.
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Advance the cursor by one token.
    pub fn next_token(&mut self) -> Option<&Token> {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        self.tokens.get(self.pos)
    }

    /// If the cursor is on a start token, move it to the matching end token.
    /// Otherwise do nothing.
    pub fn skip_children(&mut self) {
        if !matches!(
            self.current(),
            Some(Token::StartObject | Token::StartArray)
        ) {
            return;
        }
        let mut depth = 0usize;
        while let Some(token) = self.current() {
            match token {
                Token::StartObject | Token::StartArray => depth += 1,
                Token::EndObject | Token::EndArray => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
            self.pos += 1;
        }
    }

    /// Advance to the next key of the object being read and then onto its value.
    ///
    /// Returns `None` at the end of the object (or of the input).
    pub fn next_field(&mut self) -> Option<String> {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        let name = match self.tokens.get_mut(self.pos) {
            // Tokens are read once; the key is moved out rather than cloned.
            Some(Token::FieldName(name)) => std::mem::take(name),
            _ => return None,
        };
        self.next_token();
        Some(name)
    }

    pub fn is_null(&self) -> bool {
        matches!(self.current(), Some(Token::Null))
    }

    pub fn is_start_object(&self) -> bool {
        matches!(self.current(), Some(Token::StartObject))
    }

    pub fn is_start_array(&self) -> bool {
        matches!(self.current(), Some(Token::StartArray))
    }

    pub fn value_as_i32(&self) -> i32 {
        match self.current() {
            Some(Token::Int(v)) => match i32::try_from(*v) {
                Ok(v) => v,
                Err(_) => self.degrade("i32", 0),
            },
            _ => self.degrade("i32", 0),
        }
    }

    pub fn value_as_i64(&self) -> i64 {
        match self.current() {
            Some(Token::Int(v)) => *v,
            _ => self.degrade("i64", 0),
        }
    }

    pub fn value_as_f64(&self) -> f64 {
        match self.current() {
            Some(Token::Float(v)) => *v,
            Some(Token::Int(v)) => *v as f64,
            Some(Token::UInt(v)) => *v as f64,
            _ => self.degrade("f64", 0.0),
        }
    }

    pub fn value_as_bool(&self) -> bool {
        match self.current() {
            Some(Token::Bool(v)) => *v,
            _ => self.degrade("bool", false),
        }
    }

    /// Moves the string out of the current token.
    pub fn value_as_string(&mut self) -> String {
        match self.tokens.get_mut(self.pos) {
            Some(Token::String(s)) => std::mem::take(s),
            _ => self.degrade("string", String::new()),
        }
    }

    /// Forward an unrecognized key of the record codec `codec` to the context's hook.
    pub fn report_unknown_field(&self, key: &str, codec: &str) {
        self.context.report_unknown_field(key, codec);
    }

    fn degrade<T>(&self, expected: &'static str, fallback: T) -> T {
        tracing::trace!(
            expected,
            found = self.current().map_or("end of input", Token::kind),
            "token kind mismatch, using default"
        );
        fallback
    }
}

impl fmt::Debug for TokenSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSource")
            .field("len", &self.tokens.len())
            .field("pos", &self.pos)
            .field("current", &self.current())
            .finish()
    }
}

fn tokenize<'de, 'ctx, R>(
    mut de: serde_json::Deserializer<R>,
    context: &'ctx CodecContext,
) -> CodecResult<TokenSource<'ctx>>
where
    R: serde_json::de::Read<'de>,
{
    let mut tokens = Vec::new();
    TokenCollector(&mut tokens).deserialize(&mut de)?;
    de.end()?;
    Ok(TokenSource::new(tokens, context))
}

/// Flattens any JSON value into tokens.
struct TokenCollector<'t>(&'t mut Vec<Token>);

impl<'de> DeserializeSeed<'de> for TokenCollector<'_> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for TokenCollector<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<(), E> {
        self.0.push(Token::Bool(v));
        Ok(())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<(), E> {
        self.0.push(Token::Int(v));
        Ok(())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<(), E> {
        self.0.push(match i64::try_from(v) {
            Ok(v) => Token::Int(v),
            Err(_) => Token::UInt(v),
        });
        Ok(())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<(), E> {
        self.0.push(Token::Float(v));
        Ok(())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<(), E> {
        self.0.push(Token::String(v.to_owned()));
        Ok(())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<(), E> {
        self.0.push(Token::String(v));
        Ok(())
    }

    fn visit_unit<E: de::Error>(self) -> Result<(), E> {
        self.0.push(Token::Null);
        Ok(())
    }

    fn visit_none<E: de::Error>(self) -> Result<(), E> {
        self.0.push(Token::Null);
        Ok(())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<(), A::Error> {
        let tokens = self.0;
        tokens.push(Token::StartArray);
        while seq.next_element_seed(TokenCollector(&mut *tokens))?.is_some() {}
        tokens.push(Token::EndArray);
        Ok(())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<(), A::Error> {
        let tokens = self.0;
        tokens.push(Token::StartObject);
        while let Some(key) = map.next_key::<String>()? {
            tokens.push(Token::FieldName(key));
            map.next_value_seed(TokenCollector(&mut *tokens))?;
        }
        tokens.push(Token::EndObject);
        Ok(())
    }
}
