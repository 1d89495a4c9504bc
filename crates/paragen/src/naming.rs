//! Identifier conventions for generated code.
//!
//! Declared names are free-form (`homeURL`, `display-name`, `item_count`);
//! generated code uses `snake_case` for fields and files, `UpperCamelCase` for
//! types and variants, and `SCREAMING_SNAKE_CASE` for codec statics.

/// Keywords that must be written as raw identifiers (`r#type`).
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
    "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be raw identifiers at all.
const UNRAWABLE: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Split a declared name into lowercase words.
///
/// Word boundaries are non-alphanumerics, lower→upper transitions, and the
/// last capital of an acronym run (`HTTPServer` → `http`, `server`).
fn words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn snake_case(name: &str) -> String {
    words(name).join("_")
}

pub fn upper_camel_case(name: &str) -> String {
    words(name).iter().map(|w| capitalize(w)).collect()
}

pub fn screaming_snake_case(name: &str) -> String {
    snake_case(name).to_uppercase()
}

/// A value identifier (field, temporary, accessor).
pub fn field_ident(name: &str) -> String {
    let mut ident = snake_case(name);
    if ident.is_empty() {
        ident.push_str("field");
    }
    if ident.starts_with(|c: char| c.is_numeric()) {
        ident.insert(0, '_');
    }
    escape(ident)
}

/// A type or variant identifier.
pub fn type_ident(name: &str) -> String {
    let mut ident = upper_camel_case(name);
    if ident.starts_with(|c: char| c.is_numeric()) {
        ident.insert(0, 'V');
    }
    escape(ident)
}

/// The static holding a unit's codec: `Location` → `LOCATION_CODEC`.
pub fn codec_static(name: &str) -> String {
    format!("{}_CODEC", screaming_snake_case(name))
}

/// The struct implementing a record's codec: `Location` → `LocationCodec`.
pub fn codec_struct(name: &str) -> String {
    format!("{}Codec", upper_camel_case(name))
}

/// File stem of a unit: `SomeEnum` → `some_enum`.
pub fn file_stem(name: &str) -> String {
    snake_case(name)
}

fn escape(ident: String) -> String {
    if UNRAWABLE.contains(&ident.as_str()) {
        format!("{ident}_")
    } else if KEYWORDS.contains(&ident.as_str()) {
        format!("r#{ident}")
    } else {
        ident
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_conversions() {
        assert_eq!(snake_case("homeURL"), "home_url");
        assert_eq!(snake_case("HTTPServer"), "http_server");
        assert_eq!(snake_case("display-name"), "display_name");
        assert_eq!(snake_case("item_count"), "item_count");
        assert_eq!(snake_case("v2Value"), "v2_value");
        assert_eq!(upper_camel_case("some_enum"), "SomeEnum");
        assert_eq!(upper_camel_case("SomeEnum"), "SomeEnum");
        assert_eq!(screaming_snake_case("CoordinateType"), "COORDINATE_TYPE");
    }

    #[test]
    fn keywords_are_escaped() {
        assert_eq!(field_ident("type"), "r#type");
        assert_eq!(field_ident("gen"), "r#gen");
        assert_eq!(field_ident("self"), "self_");
        assert_eq!(field_ident("1st"), "_1st");
        assert_eq!(type_ident("self"), "Self_");
        assert_eq!(type_ident("2d"), "V2d");
    }

    #[test]
    fn codec_names() {
        assert_eq!(codec_static("Location"), "LOCATION_CODEC");
        assert_eq!(codec_struct("Location"), "LocationCodec");
        assert_eq!(file_stem("SomeEnum"), "some_enum");
    }
}
