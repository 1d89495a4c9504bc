//! Record synthesis: the struct, its codec struct and static, and the
//! `Codec` impl.

use super::{CodeWriter, GENERATED_BANNER};
use crate::error::Result;
use crate::ir::{RecordDef, SOURCE};
use crate::merge::{EXTRA_CODE, PARSE_FINISH};

/// Render the body of a record's source file.
pub fn render_record(def: &RecordDef) -> Result<String> {
    def.validate()?;

    let name = def.type_name();
    let codec_struct = def.codec_struct();
    let codec_static = def.codec_static();
    let mut w = CodeWriter::new();

    w.docs(def.docs.as_deref());
    w.line("#[derive(Debug, Clone, PartialEq)]");
    w.line(format!("pub struct {name} {{"));
    w.indented(|w| {
        for field in &def.fields {
            field.write_declaration(w);
        }
    });
    w.line("}");
    w.blank();
    w.line(EXTRA_CODE.mark);
    w.blank();
    w.line(GENERATED_BANNER);
    w.blank();

    w.line(format!(
        "pub static {codec_static}: {codec_struct} = {codec_struct}::new();"
    ));
    w.blank();
    w.line(format!("pub struct {codec_struct} {{"));
    w.indented(|w| w.line(format!("derived: Derived<{name}>,")));
    w.line("}");
    w.blank();
    w.line(format!("impl {codec_struct} {{"));
    w.indented(|w| {
        w.line("pub const fn new() -> Self {");
        w.indented(|w| {
            w.line("Self {");
            w.indented(|w| w.line("derived: Derived::new(),"));
            w.line("}");
        });
        w.line("}");
    });
    w.line("}");
    w.blank();

    w.line(format!("impl Default for {name} {{"));
    w.indented(|w| {
        w.line("fn default() -> Self {");
        w.indented(|w| w.line(format!("{codec_static}.default_value()")));
        w.line("}");
    });
    w.line("}");
    w.blank();

    w.line("#[allow(deprecated)]");
    w.line(format!("impl Codec<{name}> for {codec_struct} {{"));
    w.indented(|w| -> Result<()> {
        w.line("fn name(&self) -> &str {");
        w.indented(|w| w.line(format!("{:?}", def.name)));
        w.line("}");
        w.blank();

        w.line(format!("fn default_value(&self) -> {name} {{"));
        w.indented(|w| {
            w.line(format!("{name} {{"));
            w.indented(|w| {
                for field in &def.fields {
                    field.write_default_initializer(w);
                }
            });
            w.line("}");
        });
        w.line("}");
        w.blank();

        write_parse(w, def, &name)?;
        w.blank();
        write_serialize(w, def, &name)?;
        w.blank();

        w.line(format!("fn derived(&self) -> &Derived<{name}> {{"));
        w.indented(|w| w.line("&self.derived"));
        w.line("}");
        Ok(())
    })?;
    w.line("}");

    if let Some(capability) = &def.capability {
        w.blank();
        w.line("#[allow(deprecated)]");
        w.line(format!("impl {capability} for {name} {{"));
        w.indented(|w| {
            let mut first = true;
            for field in def.fields.iter().filter(|f| f.overrides) {
                if !first {
                    w.blank();
                }
                first = false;
                field.write_accessor(w);
            }
        });
        w.line("}");
    }

    Ok(w.finish())
}

fn write_parse(w: &mut CodeWriter, def: &RecordDef, name: &str) -> Result<()> {
    w.line(format!(
        "fn parse(&self, {SOURCE}: &mut TokenSource<'_>) -> {name} {{"
    ));
    w.indented(|w| -> Result<()> {
        w.line(format!("if !{SOURCE}.is_start_object() {{"));
        w.indented(|w| {
            w.line(format!("{SOURCE}.skip_children();"));
            w.line("return self.default_value();");
        });
        w.line("}");
        for field in &def.fields {
            field.write_temporary(w);
        }
        w.line(format!("while let Some(key) = {SOURCE}.next_field() {{"));
        w.indented(|w| -> Result<()> {
            w.line("match key.as_str() {");
            w.indented(|w| -> Result<()> {
                for field in &def.fields {
                    field.write_dispatch_clause(w)?;
                }
                w.line(format!(
                    "_ => {SOURCE}.report_unknown_field(&key, self.name()),"
                ));
                Ok(())
            })?;
            w.line("}");
            w.line(format!("{SOURCE}.skip_children();"));
            Ok(())
        })?;
        w.line("}");
        w.line("#[allow(unused_mut)]");
        w.line(format!("let mut value = {name} {{"));
        w.indented(|w| {
            for field in &def.fields {
                field.write_initializer(w);
            }
        });
        w.line("};");
        w.line(PARSE_FINISH.mark);
        w.line("value");
        Ok(())
    })?;
    w.line("}");
    Ok(())
}

fn write_serialize(w: &mut CodeWriter, def: &RecordDef, name: &str) -> Result<()> {
    w.line(format!(
        "fn serialize(&self, value: &{name}, sink: &mut TokenSink, framing: bool) {{"
    ));
    w.indented(|w| -> Result<()> {
        w.line("if framing {");
        w.indented(|w| w.line("sink.begin_object();"));
        w.line("}");
        for field in &def.fields {
            field.write_serialize(w)?;
        }
        w.line("if framing {");
        w.indented(|w| w.line("sink.end_object();"));
        w.line("}");
        Ok(())
    })?;
    w.line("}");
    Ok(())
}
