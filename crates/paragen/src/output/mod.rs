//! Source synthesis.
//!
//! Each renderer turns one descriptor into the body of a Rust source file: the
//! value type, its marker placeholders, and its codec. Bodies carry no header
//! or imports; [`crate::merge`] adds those and fills the placeholders.

mod enumeration;
mod index;
mod record;

pub use enumeration::render_enum;
pub use index::render_index;
pub use record::render_record;

/// Separates the hand-editable type declaration from the codec below it.
pub const GENERATED_BANNER: &str =
    "// BELOW IS GENERATED CODE. Hand-written additions belong between the marker pairs.";

/// Line-oriented source builder with four-space indentation.
#[derive(Debug, Default)]
pub struct CodeWriter {
    output: String,
    indent: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line at the current indentation. Empty text yields an
    /// empty line with no trailing whitespace.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.indent {
                self.output.push_str("    ");
            }
            self.output.push_str(text);
        }
        self.output.push('\n');
    }

    pub fn blank(&mut self) {
        self.output.push('\n');
    }

    /// Run `f` one level deeper.
    pub fn indented<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.indent += 1;
        let result = f(self);
        self.indent -= 1;
        result
    }

    /// `///` lines for a doc string, if any.
    pub fn docs(&mut self, docs: Option<&str>) {
        let Some(docs) = docs else { return };
        for line in docs.trim_end().lines() {
            if line.trim().is_empty() {
                self.line("///");
            } else {
                self.line(format!("/// {}", line.trim_end()));
            }
        }
    }

    pub fn finish(self) -> String {
        self.output
    }
}
