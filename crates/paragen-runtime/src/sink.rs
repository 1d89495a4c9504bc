//! Token sink: an in-memory JSON emitter.
//!
//! Separators and indentation are tracked here, so codecs only state structure
//! (`begin_object`, `field_name`, values, `end_object`). Output is buffered, so
//! emitting never fails; the stream conveniences report write errors when the
//! buffer is flushed.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameKind {
    Object,
    Array,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    kind: FrameKind,
    empty: bool,
}

/// Numbers the sink can write directly.
pub trait JsonNumber: Copy {
    fn write_json(self, out: &mut Vec<u8>);
}

impl JsonNumber for i32 {
    fn write_json(self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.to_string().as_bytes());
    }
}

impl JsonNumber for i64 {
    fn write_json(self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.to_string().as_bytes());
    }
}

impl JsonNumber for usize {
    fn write_json(self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.to_string().as_bytes());
    }
}

impl JsonNumber for f64 {
    /// Non-finite values have no JSON form and are written as `null`.
    fn write_json(self, out: &mut Vec<u8>) {
        match serde_json::Number::from_f64(self) {
            Some(n) => out.extend_from_slice(n.to_string().as_bytes()),
            None => out.extend_from_slice(b"null"),
        }
    }
}

/// Single-use JSON writer, exclusively owned by one serialize call.
#[derive(Debug, Default)]
pub struct TokenSink {
    out: Vec<u8>,
    frames: Vec<Frame>,
    after_name: bool,
    pretty: bool,
}

impl TokenSink {
    /// Compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Two-space indented output.
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    pub fn begin_object(&mut self) {
        self.before_value();
        self.out.push(b'{');
        self.frames.push(Frame {
            kind: FrameKind::Object,
            empty: true,
        });
    }

    pub fn end_object(&mut self) {
        self.close(FrameKind::Object, b'}');
    }

    pub fn begin_array(&mut self) {
        self.before_value();
        self.out.push(b'[');
        self.frames.push(Frame {
            kind: FrameKind::Array,
            empty: true,
        });
    }

    pub fn end_array(&mut self) {
        self.close(FrameKind::Array, b']');
    }

    /// Write an object key; the next value written belongs to it.
    pub fn field_name(&mut self, name: &str) {
        self.separate();
        self.write_escaped(name);
        self.out.push(b':');
        if self.pretty {
            self.out.push(b' ');
        }
        self.after_name = true;
    }

    pub fn write_null(&mut self) {
        self.before_value();
        self.out.extend_from_slice(b"null");
    }

    pub fn write_bool(&mut self, value: bool) {
        self.before_value();
        let text: &[u8] = if value { b"true" } else { b"false" };
        self.out.extend_from_slice(text);
    }

    pub fn write_number<N: JsonNumber>(&mut self, value: N) {
        self.before_value();
        value.write_json(&mut self.out);
    }

    pub fn write_string(&mut self, value: &str) {
        self.before_value();
        self.write_escaped(value);
    }

    pub fn null_field(&mut self, name: &str) {
        self.field_name(name);
        self.write_null();
    }

    pub fn bool_field(&mut self, name: &str, value: bool) {
        self.field_name(name);
        self.write_bool(value);
    }

    pub fn number_field<N: JsonNumber>(&mut self, name: &str, value: N) {
        self.field_name(name);
        self.write_number(value);
    }

    pub fn string_field(&mut self, name: &str, value: &str) {
        self.field_name(name);
        self.write_string(value);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.out
    }

    pub fn into_string(self) -> String {
        // Only UTF-8 is ever written.
        String::from_utf8(self.out)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
    }

    fn before_value(&mut self) {
        if self.after_name {
            self.after_name = false;
        } else {
            self.separate();
        }
    }

    fn separate(&mut self) {
        let first = match self.frames.last_mut() {
            Some(frame) => std::mem::replace(&mut frame.empty, false),
            None => return,
        };
        if !first {
            self.out.push(b',');
        }
        if self.pretty {
            self.newline();
        }
    }

    fn close(&mut self, kind: FrameKind, byte: u8) {
        self.after_name = false;
        let frame = self.frames.pop();
        debug_assert_eq!(frame.map(|f| f.kind), Some(kind), "unbalanced sink frames");
        if self.pretty && frame.is_some_and(|f| !f.empty) {
            self.newline();
        }
        self.out.push(byte);
    }

    fn newline(&mut self) {
        self.out.push(b'\n');
        for _ in 0..self.frames.len() {
            self.out.extend_from_slice(b"  ");
        }
    }

    fn write_escaped(&mut self, text: &str) {
        let quoted = serde_json::Value::from(text).to_string();
        self.out.extend_from_slice(quoted.as_bytes());
    }
}
