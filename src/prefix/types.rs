use crate::error::{QuantityError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Accepted alternative spellings of prefix names (alias, canonical).
pub(crate) const NAME_ALIASES: [(&str, &str); 3] = [("none", ""), ("mili", "milli"), ("deka", "deca")];

/// Accepted alternative symbols (alias, canonical). The canonical micro sign is U+00B5.
pub(crate) const SYMBOL_ALIASES: [(&str, &str); 2] = [("u", "\u{b5}"), ("\u{3bc}", "\u{b5}")];

pub(crate) fn canonical_name(name: &str) -> &str {
    NAME_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name)
}

pub(crate) fn canonical_symbol(symbol: &str) -> &str {
    SYMBOL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == symbol)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(symbol)
}

/// A named decimal scale factor applied to a unit's canonical value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prefix {
    name: String,
    symbol: String,
    scale: f64,
    #[serde(skip)]
    exponent: Option<i32>,
}

impl Prefix {
    /// Build a prefix value. Validation against other prefixes happens on registration.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, scale: f64) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            scale,
            exponent: exact_exponent(scale),
        }
    }

    /// The empty prefix with scale 1.
    pub fn identity() -> Self {
        StandardPrefix::Identity.prefix()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// `Some(n)` when `scale` is exactly `10^n`.
    pub fn exponent(&self) -> Option<i32> {
        self.exponent
    }

    pub fn is_identity(&self) -> bool {
        self.scale == 1.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            write!(f, "(none) = {:e}", self.scale)
        } else {
            write!(f, "{} ({}) = {:e}", self.name, self.symbol, self.scale)
        }
    }
}

/// Returns the exponent if `scale` is the double closest to a power of ten.
fn exact_exponent(scale: f64) -> Option<i32> {
    if !scale.is_finite() || scale <= 0.0 {
        return None;
    }
    let exponent = scale.log10().round() as i32;
    let power = format!("1e{}", exponent).parse::<f64>().ok()?;
    (power == scale).then_some(exponent)
}

/// The SI prefix set, from yotta (10^24) down to yocto (10^-24).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardPrefix {
    Yotta,
    Zetta,
    Exa,
    Peta,
    Tera,
    Giga,
    Mega,
    Kilo,
    Hecto,
    Deca,
    Identity,
    Deci,
    Centi,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Atto,
    Zepto,
    Yocto,
}

impl StandardPrefix {
    pub const ALL: [StandardPrefix; 21] = [
        StandardPrefix::Yotta,
        StandardPrefix::Zetta,
        StandardPrefix::Exa,
        StandardPrefix::Peta,
        StandardPrefix::Tera,
        StandardPrefix::Giga,
        StandardPrefix::Mega,
        StandardPrefix::Kilo,
        StandardPrefix::Hecto,
        StandardPrefix::Deca,
        StandardPrefix::Identity,
        StandardPrefix::Deci,
        StandardPrefix::Centi,
        StandardPrefix::Milli,
        StandardPrefix::Micro,
        StandardPrefix::Nano,
        StandardPrefix::Pico,
        StandardPrefix::Femto,
        StandardPrefix::Atto,
        StandardPrefix::Zepto,
        StandardPrefix::Yocto,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StandardPrefix::Yotta => "yotta",
            StandardPrefix::Zetta => "zetta",
            StandardPrefix::Exa => "exa",
            StandardPrefix::Peta => "peta",
            StandardPrefix::Tera => "tera",
            StandardPrefix::Giga => "giga",
            StandardPrefix::Mega => "mega",
            StandardPrefix::Kilo => "kilo",
            StandardPrefix::Hecto => "hecto",
            StandardPrefix::Deca => "deca",
            StandardPrefix::Identity => "",
            StandardPrefix::Deci => "deci",
            StandardPrefix::Centi => "centi",
            StandardPrefix::Milli => "milli",
            StandardPrefix::Micro => "micro",
            StandardPrefix::Nano => "nano",
            StandardPrefix::Pico => "pico",
            StandardPrefix::Femto => "femto",
            StandardPrefix::Atto => "atto",
            StandardPrefix::Zepto => "zepto",
            StandardPrefix::Yocto => "yocto",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            StandardPrefix::Yotta => "Y",
            StandardPrefix::Zetta => "Z",
            StandardPrefix::Exa => "E",
            StandardPrefix::Peta => "P",
            StandardPrefix::Tera => "T",
            StandardPrefix::Giga => "G",
            StandardPrefix::Mega => "M",
            StandardPrefix::Kilo => "k",
            StandardPrefix::Hecto => "h",
            StandardPrefix::Deca => "da",
            StandardPrefix::Identity => "",
            StandardPrefix::Deci => "d",
            StandardPrefix::Centi => "c",
            StandardPrefix::Milli => "m",
            StandardPrefix::Micro => "\u{b5}",
            StandardPrefix::Nano => "n",
            StandardPrefix::Pico => "p",
            StandardPrefix::Femto => "f",
            StandardPrefix::Atto => "a",
            StandardPrefix::Zepto => "z",
            StandardPrefix::Yocto => "y",
        }
    }

    pub fn exponent(self) -> i32 {
        match self {
            StandardPrefix::Yotta => 24,
            StandardPrefix::Zetta => 21,
            StandardPrefix::Exa => 18,
            StandardPrefix::Peta => 15,
            StandardPrefix::Tera => 12,
            StandardPrefix::Giga => 9,
            StandardPrefix::Mega => 6,
            StandardPrefix::Kilo => 3,
            StandardPrefix::Hecto => 2,
            StandardPrefix::Deca => 1,
            StandardPrefix::Identity => 0,
            StandardPrefix::Deci => -1,
            StandardPrefix::Centi => -2,
            StandardPrefix::Milli => -3,
            StandardPrefix::Micro => -6,
            StandardPrefix::Nano => -9,
            StandardPrefix::Pico => -12,
            StandardPrefix::Femto => -15,
            StandardPrefix::Atto => -18,
            StandardPrefix::Zepto => -21,
            StandardPrefix::Yocto => -24,
        }
    }

    pub fn scale(self) -> f64 {
        match self {
            StandardPrefix::Yotta => 1e24,
            StandardPrefix::Zetta => 1e21,
            StandardPrefix::Exa => 1e18,
            StandardPrefix::Peta => 1e15,
            StandardPrefix::Tera => 1e12,
            StandardPrefix::Giga => 1e9,
            StandardPrefix::Mega => 1e6,
            StandardPrefix::Kilo => 1e3,
            StandardPrefix::Hecto => 1e2,
            StandardPrefix::Deca => 1e1,
            StandardPrefix::Identity => 1e0,
            StandardPrefix::Deci => 1e-1,
            StandardPrefix::Centi => 1e-2,
            StandardPrefix::Milli => 1e-3,
            StandardPrefix::Micro => 1e-6,
            StandardPrefix::Nano => 1e-9,
            StandardPrefix::Pico => 1e-12,
            StandardPrefix::Femto => 1e-15,
            StandardPrefix::Atto => 1e-18,
            StandardPrefix::Zepto => 1e-21,
            StandardPrefix::Yocto => 1e-24,
        }
    }

    pub fn prefix(self) -> Prefix {
        Prefix {
            name: self.name().to_string(),
            symbol: self.symbol().to_string(),
            scale: self.scale(),
            exponent: Some(self.exponent()),
        }
    }
}

impl From<StandardPrefix> for Prefix {
    fn from(prefix: StandardPrefix) -> Self {
        prefix.prefix()
    }
}

impl From<&Prefix> for Prefix {
    fn from(prefix: &Prefix) -> Self {
        prefix.clone()
    }
}

impl FromStr for StandardPrefix {
    type Err = QuantityError;

    /// Accepts names first, then symbols, including the accepted aliases.
    fn from_str(s: &str) -> Result<Self> {
        let name = canonical_name(s);
        if let Some(found) = Self::ALL.iter().find(|p| p.name() == name) {
            return Ok(*found);
        }
        let symbol = canonical_symbol(s);
        Self::ALL
            .iter()
            .find(|p| p.symbol() == symbol)
            .copied()
            .ok_or_else(|| QuantityError::PrefixNotFound(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_exponents_match_scales() {
        for prefix in StandardPrefix::ALL {
            assert_eq!(
                exact_exponent(prefix.scale()),
                Some(prefix.exponent()),
                "{} has a scale that is not 10^{}",
                prefix.name(),
                prefix.exponent()
            );
        }
    }

    #[test]
    fn test_custom_exponent_detection() {
        assert_eq!(Prefix::new("custom", "R", 1e30).exponent(), Some(30));
        assert_eq!(Prefix::new("odd", "O", 1024.0).exponent(), None);
        assert_eq!(Prefix::new("neg", "N", -10.0).exponent(), None);
    }

    #[test]
    fn test_from_str_names_symbols_and_aliases() {
        assert_eq!("kilo".parse::<StandardPrefix>().unwrap(), StandardPrefix::Kilo);
        assert_eq!("k".parse::<StandardPrefix>().unwrap(), StandardPrefix::Kilo);
        assert_eq!("u".parse::<StandardPrefix>().unwrap(), StandardPrefix::Micro);
        assert_eq!("\u{3bc}".parse::<StandardPrefix>().unwrap(), StandardPrefix::Micro);
        assert_eq!("mili".parse::<StandardPrefix>().unwrap(), StandardPrefix::Milli);
        assert_eq!("none".parse::<StandardPrefix>().unwrap(), StandardPrefix::Identity);
        assert_eq!("da".parse::<StandardPrefix>().unwrap(), StandardPrefix::Deca);
        // "m" is milli's symbol, "M" is mega's
        assert_eq!("m".parse::<StandardPrefix>().unwrap(), StandardPrefix::Milli);
        assert_eq!("M".parse::<StandardPrefix>().unwrap(), StandardPrefix::Mega);
        assert!("kilogram".parse::<StandardPrefix>().is_err());
    }

    #[test]
    fn test_identity() {
        let identity = Prefix::identity();
        assert!(identity.is_identity());
        assert_eq!(identity.name(), "");
        assert_eq!(identity.symbol(), "");
        assert_eq!(identity.exponent(), Some(0));
    }
}
