use super::{CodeWriter, GENERATED_BANNER};
use crate::error::Result;
use crate::ir::{EnumDef, EnumKind};
use crate::merge::EXTRA_CODE;
use crate::naming;

/// Render the body of an enum's source file.
pub fn render_enum(def: &EnumDef) -> Result<String> {
    def.validate()?;

    let name = def.type_name();
    let variants: Vec<String> = def
        .variant_names()
        .into_iter()
        .map(naming::type_ident)
        .collect();
    let mut w = CodeWriter::new();

    w.docs(def.docs.as_deref());
    w.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]");
    w.line(format!("pub enum {name} {{"));
    w.indented(|w| {
        for (i, variant) in variants.iter().enumerate() {
            if i == def.default {
                w.line("#[default]");
            }
            w.line(format!("{variant},"));
        }
    });
    w.line("}");
    w.blank();
    w.line(EXTRA_CODE.mark);
    w.blank();
    w.line(GENERATED_BANNER);
    w.blank();

    w.line(format!("impl {name} {{"));
    w.indented(|w| {
        let list: Vec<String> = variants.iter().map(|v| format!("{name}::{v}")).collect();
        w.line("/// Every variant, in declaration order.");
        w.line(format!(
            "pub const VARIANTS: &'static [{name}] = &[{}];",
            list.join(", ")
        ));
    });
    w.line("}");
    w.blank();

    let codec = match &def.kind {
        EnumKind::Ordinal(_) => "OrdinalEnumCodec",
        EnumKind::IntValued(values) => {
            let arms = variants
                .iter()
                .zip(values)
                .map(|(variant, v)| format!("{name}::{variant} => {},", v.value));
            write_value_impl(&mut w, &name, "IntEnum", "i32", arms);
            write_display(&mut w, &name, "write!(f, \"{}\", self.value())");
            "IntEnumCodec"
        }
        EnumKind::StringValued(values) => {
            let arms = variants
                .iter()
                .zip(values)
                .map(|(variant, v)| format!("{name}::{variant} => {:?},", v.value));
            write_value_impl(&mut w, &name, "StringEnum", "&'static str", arms);
            write_display(&mut w, &name, "f.write_str(self.value())");
            "StringEnumCodec"
        }
    };

    w.line(format!(
        "pub static {}: {codec}<{name}> = {codec}::new({:?}, {name}::VARIANTS, {});",
        def.codec_static(),
        def.name,
        def.default_path()
    ));

    Ok(w.finish())
}

fn write_value_impl(
    w: &mut CodeWriter,
    name: &str,
    trait_name: &str,
    value_type: &str,
    arms: impl Iterator<Item = String>,
) {
    w.line(format!("impl {trait_name} for {name} {{"));
    w.indented(|w| {
        w.line(format!("fn value(self) -> {value_type} {{"));
        w.indented(|w| {
            w.line("match self {");
            w.indented(|w| {
                for arm in arms {
                    w.line(arm);
                }
            });
            w.line("}");
        });
        w.line("}");
    });
    w.line("}");
    w.blank();
}

fn write_display(w: &mut CodeWriter, name: &str, body: &str) {
    w.line(format!("impl std::fmt::Display for {name} {{"));
    w.indented(|w| {
        w.line("fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {");
        w.indented(|w| w.line(body));
        w.line("}");
    });
    w.line("}");
    w.blank();
}
