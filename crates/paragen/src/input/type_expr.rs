//! Type expressions: `int`, `Location`, `string?`, `[Kind]`, `[[double]?]`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Named(String),
    Nullable(Box<TypeExpr>),
    Sequence(Box<TypeExpr>),
}

impl TypeExpr {
    pub fn parse(text: &str) -> Result<TypeExpr, String> {
        let text = text.trim();
        if let Some(inner) = text.strip_suffix('?') {
            return Ok(TypeExpr::Nullable(Box::new(TypeExpr::parse(inner)?)));
        }
        if let Some(inner) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            return Ok(TypeExpr::Sequence(Box::new(TypeExpr::parse(inner)?)));
        }
        let mut chars = text.chars();
        let valid = chars
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_')
            && chars.all(|c| c.is_alphanumeric() || c == '_');
        if valid {
            Ok(TypeExpr::Named(text.to_owned()))
        } else {
            Err(format!("malformed type expression `{text}`"))
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named(name) => f.write_str(name),
            TypeExpr::Nullable(inner) => write!(f, "{inner}?"),
            TypeExpr::Sequence(inner) => write!(f, "[{inner}]"),
        }
    }
}
