//! Per-field code fragments of a generated record.

use crate::error::Result;
use crate::ir::{Field, Type};
use crate::naming;
use crate::output::CodeWriter;

impl Field {
    /// The wire key as a Rust string literal.
    fn key_literal(&self) -> String {
        format!("{:?}", self.wire_key())
    }

    /// Name of the parse-time temporary. Prefixed so it never shadows the
    /// `parse` parameters.
    pub fn temp_ident(&self) -> String {
        format!("field_{}", naming::snake_case(&self.name))
    }

    /// `pub name: Type,` plus docs and deprecation.
    pub fn write_declaration(&self, w: &mut CodeWriter) {
        w.docs(self.docs.as_deref());
        if let Some(note) = &self.deprecated {
            w.line(format!("#[deprecated(note = {note:?})]"));
        }
        w.line(format!(
            "{}{}: {},",
            self.visibility.prefix(),
            self.ident(),
            self.ty.rust_type()
        ));
    }

    /// `let mut field_x: T = <default>;`
    pub fn write_temporary(&self, w: &mut CodeWriter) {
        w.line(format!(
            "let mut {}: {} = {};",
            self.temp_ident(),
            self.ty.rust_type(),
            self.ty.default_literal()
        ));
    }

    /// `"key" => field_x = <parse>,`
    pub fn write_dispatch_clause(&self, w: &mut CodeWriter) -> Result<()> {
        w.line(format!(
            "{} => {} = {},",
            self.key_literal(),
            self.temp_ident(),
            self.ty.parse_expr()?
        ));
        Ok(())
    }

    /// `x: field_x,` inside the record literal built by `parse`.
    pub fn write_initializer(&self, w: &mut CodeWriter) {
        w.line(format!("{}: {},", self.ident(), self.temp_ident()));
    }

    /// `x: <default>,` inside the literal built by `default_value`.
    pub fn write_default_initializer(&self, w: &mut CodeWriter) {
        w.line(format!("{}: {},", self.ident(), self.ty.default_literal()));
    }

    /// Statement(s) writing this field of `value` to `sink`.
    pub fn write_serialize(&self, w: &mut CodeWriter) -> Result<()> {
        let key = self.key_literal();
        let access = format!("value.{}", self.ident());
        match &self.ty {
            Type::Integer32 | Type::Integer64 | Type::Float64 => {
                w.line(format!("sink.number_field({key}, {access});"));
            }
            Type::Boolean => w.line(format!("sink.bool_field({key}, {access});")),
            Type::Text => w.line(format!("sink.string_field({key}, &{access});")),
            Type::Nullable(inner) => {
                let codec = inner.codec_ref()?;
                w.line(format!("match &{access} {{"));
                w.indented(|w| {
                    w.line("Some(v) => {");
                    w.indented(|w| {
                        w.line(format!("sink.field_name({key});"));
                        w.line(format!("{codec}.serialize(v, sink, true);"));
                    });
                    w.line("}");
                    w.line(format!("None => sink.null_field({key}),"));
                });
                w.line("}");
            }
            other => {
                let codec = other.codec_ref()?;
                w.line(format!("sink.field_name({key});"));
                w.line(format!("{codec}.serialize(&{access}, sink, true);"));
            }
        }
        Ok(())
    }

    /// Capability accessor for an overriding field.
    pub fn write_accessor(&self, w: &mut CodeWriter) {
        let ident = self.ident();
        w.line(format!("fn {ident}(&self) -> &{} {{", self.ty.rust_type()));
        w.indented(|w| w.line(format!("&self.{ident}")));
        w.line("}");
    }
}
