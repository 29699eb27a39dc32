use crate::prefix::types::{Prefix, StandardPrefix};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// Numeric literal accepted as a prefix scale.
    /// Examples: "1000", "1e3", "0.001", "1E-6"
    static ref SCALE_PATTERN: Regex = Regex::new(r"^[+-]?\d+(\.\d+)?([eE][+-]?\d+)?$").unwrap();
}

/// Something a prefix can be looked up by.
#[derive(Debug, Clone, PartialEq)]
pub enum PrefixToken {
    /// Match on the prefix name only ("kilo")
    Name(String),
    /// Match on the prefix symbol only ("k")
    Symbol(String),
    /// Match on the exact scale factor (1e3)
    Scale(f64),
    /// Name or symbol, names tried first
    Label(String),
}

impl PrefixToken {
    /// Classify free text: numeric literals are scales, anything else a label.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if looks_like_scale(trimmed) {
            if let Ok(scale) = trimmed.parse::<f64>() {
                return PrefixToken::Scale(scale);
            }
        }
        PrefixToken::Label(trimmed.to_string())
    }
}

/// Check if a string looks like a numeric scale factor
pub fn looks_like_scale(s: &str) -> bool {
    SCALE_PATTERN.is_match(s.trim())
}

impl From<&str> for PrefixToken {
    fn from(s: &str) -> Self {
        PrefixToken::parse(s)
    }
}

impl From<String> for PrefixToken {
    fn from(s: String) -> Self {
        PrefixToken::parse(&s)
    }
}

impl From<f64> for PrefixToken {
    fn from(scale: f64) -> Self {
        PrefixToken::Scale(scale)
    }
}

impl From<StandardPrefix> for PrefixToken {
    fn from(prefix: StandardPrefix) -> Self {
        PrefixToken::Name(prefix.name().to_string())
    }
}

impl From<&Prefix> for PrefixToken {
    fn from(prefix: &Prefix) -> Self {
        PrefixToken::Name(prefix.name().to_string())
    }
}

impl fmt::Display for PrefixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixToken::Name(name) => write!(f, "name '{}'", name),
            PrefixToken::Symbol(symbol) => write!(f, "symbol '{}'", symbol),
            PrefixToken::Scale(scale) => write!(f, "scale {:e}", scale),
            PrefixToken::Label(label) => write!(f, "'{}'", label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_detection() {
        assert!(looks_like_scale("1000"));
        assert!(looks_like_scale("1e3"));
        assert!(looks_like_scale("1E-6"));
        assert!(looks_like_scale("0.001"));
        assert!(looks_like_scale(" 1e30 "));

        assert!(!looks_like_scale("E"));
        assert!(!looks_like_scale("kilo"));
        assert!(!looks_like_scale("1e"));
        assert!(!looks_like_scale(""));
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(PrefixToken::parse("1e3"), PrefixToken::Scale(1000.0));
        assert_eq!(PrefixToken::parse("k"), PrefixToken::Label("k".to_string()));
        assert_eq!(
            PrefixToken::parse(" mega "),
            PrefixToken::Label("mega".to_string())
        );
    }

    #[test]
    fn test_from_standard_prefix() {
        assert_eq!(
            PrefixToken::from(StandardPrefix::Nano),
            PrefixToken::Name("nano".to_string())
        );
    }
}
