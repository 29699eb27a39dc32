// Registry of metric prefixes with name, symbol and scale indices

use crate::error::{QuantityError, Result};
use crate::prefix::token::{looks_like_scale, PrefixToken};
use crate::prefix::types::{Prefix, StandardPrefix, NAME_ALIASES, SYMBOL_ALIASES};
use std::collections::HashMap;

/// Powers of ten that are exactly representable as f64.
const EXACT_POWERS: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];
const MAX_EXACT: i32 = 22;

#[derive(Debug, Clone)]
pub struct PrefixTable {
    by_name: HashMap<String, Prefix>,
    by_symbol: HashMap<String, String>, // symbol -> name
    by_scale: HashMap<u64, String>,     // scale bits -> name
}

impl PrefixTable {
    /// A table holding only the identity prefix.
    pub fn new() -> Self {
        let mut table = Self {
            by_name: HashMap::new(),
            by_symbol: HashMap::new(),
            by_scale: HashMap::new(),
        };
        table.insert(Prefix::identity());
        table
    }

    /// A table holding the 21 standard SI prefixes.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for prefix in StandardPrefix::ALL {
            if prefix != StandardPrefix::Identity {
                table.insert(prefix.prefix());
            }
        }
        table
    }

    fn insert(&mut self, prefix: Prefix) {
        self.by_symbol
            .insert(prefix.symbol().to_string(), prefix.name().to_string());
        self.by_scale
            .insert(prefix.scale().to_bits(), prefix.name().to_string());
        self.by_name.insert(prefix.name().to_string(), prefix);
    }

    /// Resolve a prefix by name, symbol, or scale
    pub fn resolve(&self, token: impl Into<PrefixToken>) -> Result<Prefix> {
        let token = token.into();
        let found = match &token {
            PrefixToken::Name(name) => self.find_by_name(name),
            PrefixToken::Symbol(symbol) => self.find_by_symbol(symbol),
            PrefixToken::Scale(scale) => self
                .by_scale
                .get(&scale.to_bits())
                .and_then(|name| self.by_name.get(name)),
            PrefixToken::Label(label) => self.find_by_label(label),
        };

        found
            .cloned()
            .ok_or_else(|| QuantityError::PrefixNotFound(token.to_string()))
    }

    fn find_by_name(&self, name: &str) -> Option<&Prefix> {
        self.by_name.get(name).or_else(|| {
            if NAME_ALIASES.iter().any(|(alias, _)| *alias == name) {
                self.alias_target(name)
            } else {
                None
            }
        })
    }

    fn find_by_symbol(&self, symbol: &str) -> Option<&Prefix> {
        self.by_symbol
            .get(symbol)
            .and_then(|name| self.by_name.get(name))
            .or_else(|| {
                if SYMBOL_ALIASES.iter().any(|(alias, _)| *alias == symbol) {
                    self.alias_target(symbol)
                } else {
                    None
                }
            })
    }

    fn find_by_label(&self, label: &str) -> Option<&Prefix> {
        self.find_by_name(label).or_else(|| self.find_by_symbol(label))
    }

    /// The standard prefix an alias stands for, only while it is registered unchanged.
    fn alias_target(&self, alias: &str) -> Option<&Prefix> {
        let standard: StandardPrefix = alias.parse().ok()?;
        self.by_name
            .get(standard.name())
            .filter(|prefix| {
                prefix.scale() == standard.scale() && prefix.symbol() == standard.symbol()
            })
    }

    /// True if `label` is taken by any name, symbol, or live alias.
    fn is_taken(&self, label: &str) -> bool {
        self.find_by_label(label).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Prefix> {
        self.find_by_name(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Register a custom prefix
    pub fn register(&mut self, name: &str, symbol: &str, scale: f64) -> Result<Prefix> {
        if !scale.is_finite() || scale <= 0.0 {
            log::debug!("rejected prefix '{}': scale {}", name, scale);
            return Err(QuantityError::InvalidPrefix(format!(
                "scale of '{}' must be a positive finite number, got {}",
                name, scale
            )));
        }
        check_label("name", name)?;
        check_label("symbol", symbol)?;
        if self.is_taken(name) {
            return Err(QuantityError::InvalidPrefix(format!(
                "name '{}' is already in use",
                name
            )));
        }
        if self.is_taken(symbol) {
            return Err(QuantityError::InvalidPrefix(format!(
                "symbol '{}' is already in use",
                symbol
            )));
        }
        if let Some(existing) = self.by_scale.get(&scale.to_bits()) {
            return Err(QuantityError::InvalidPrefix(format!(
                "scale {:e} is already used by '{}'",
                scale, existing
            )));
        }

        let prefix = Prefix::new(name, symbol, scale);
        log::info!("registered prefix {}", prefix);
        self.insert(prefix.clone());
        Ok(prefix)
    }

    /// Remove a prefix by name. The identity prefix is protected.
    pub fn unregister(&mut self, name: &str) -> Result<Prefix> {
        let key = match self.find_by_name(name) {
            None => return Err(QuantityError::PrefixNotFound(name.to_string())),
            Some(prefix) if prefix.is_identity() => return Err(QuantityError::ProtectedPrefix),
            Some(prefix) => prefix.name().to_string(),
        };

        let prefix = self
            .by_name
            .remove(&key)
            .ok_or_else(|| QuantityError::PrefixNotFound(name.to_string()))?;
        self.by_symbol.remove(prefix.symbol());
        self.by_scale.remove(&prefix.scale().to_bits());
        log::info!("unregistered prefix {}", prefix);
        Ok(prefix)
    }

    /// All registered prefixes, largest scale first.
    pub fn list(&self) -> Vec<&Prefix> {
        let mut prefixes: Vec<&Prefix> = self.by_name.values().collect();
        prefixes.sort_by(|a, b| b.scale().total_cmp(&a.scale()));
        prefixes
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Re-express `value` given in `from` as a value in `to`.
    pub fn convert(value: f64, from: &Prefix, to: &Prefix) -> f64 {
        convert(value, from, to)
    }
}

/// Labels must come back out of `resolve` unchanged: no padding, no numeric text.
fn check_label(kind: &str, label: &str) -> Result<()> {
    if label.is_empty() || label.trim() != label || looks_like_scale(label) {
        log::debug!("rejected prefix {} '{}'", kind, label);
        return Err(QuantityError::InvalidPrefix(format!(
            "{} '{}' must be non-empty, unpadded and not numeric",
            kind, label
        )));
    }
    Ok(())
}

impl Default for PrefixTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// `value * from.scale / to.scale`, using exact powers of ten when both prefixes have one.
pub fn convert(value: f64, from: &Prefix, to: &Prefix) -> f64 {
    if from.scale() == to.scale() {
        return value;
    }
    match (from.exponent(), to.exponent()) {
        (Some(from_exp), Some(to_exp)) => scale_by_power_of_ten(value, from_exp - to_exp),
        _ => value * (from.scale() / to.scale()),
    }
}

fn scale_by_power_of_ten(value: f64, exponent: i32) -> f64 {
    let mut result = value;
    let mut remaining = exponent;
    while remaining > MAX_EXACT {
        result *= EXACT_POWERS[MAX_EXACT as usize];
        remaining -= MAX_EXACT;
    }
    while remaining < -MAX_EXACT {
        result /= EXACT_POWERS[MAX_EXACT as usize];
        remaining += MAX_EXACT;
    }
    if remaining >= 0 {
        result * EXACT_POWERS[remaining as usize]
    } else {
        // divide by the exact power rather than multiply by an inexact reciprocal
        result / EXACT_POWERS[(-remaining) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_table_contents() {
        let table = PrefixTable::standard();
        assert_eq!(table.len(), 21);
        assert_eq!(table.resolve("kilo").unwrap().scale(), 1e3);
        assert_eq!(table.resolve("hecto").unwrap().symbol(), "h");
        assert_eq!(table.resolve("").unwrap(), Prefix::identity());
    }

    #[test]
    fn test_resolve_by_name_symbol_and_scale() {
        let table = PrefixTable::standard();
        let by_name = table.resolve(PrefixToken::Name("micro".to_string())).unwrap();
        let by_symbol = table.resolve(PrefixToken::Symbol("u".to_string())).unwrap();
        let by_scale = table.resolve(1e-6).unwrap();
        assert_eq!(by_name, by_symbol);
        assert_eq!(by_name, by_scale);

        assert_eq!(table.resolve("1e9").unwrap().name(), "giga");
        assert_eq!(table.resolve("G").unwrap().name(), "giga");
        assert_eq!(table.resolve("da").unwrap().name(), "deca");
    }

    #[test]
    fn test_resolve_missing() {
        let table = PrefixTable::standard();
        let err = table.resolve("bogus").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PrefixNotFound);
        assert_eq!(table.resolve(1e4).unwrap_err().kind(), ErrorKind::PrefixNotFound);
        // a name token does not fall back to symbols
        assert!(table.resolve(PrefixToken::Name("k".to_string())).is_err());
    }

    #[test]
    fn test_register_and_unregister() {
        let mut table = PrefixTable::standard();
        let custom = table.register("custom", "R", 1e30).unwrap();
        assert_eq!(custom.exponent(), Some(30));
        assert_eq!(table.resolve("custom").unwrap().scale(), 1e30);
        assert_eq!(table.resolve("R").unwrap().name(), "custom");
        assert_eq!(table.resolve(1e30).unwrap().name(), "custom");

        table.unregister("custom").unwrap();
        assert_eq!(
            table.resolve("custom").unwrap_err().kind(),
            ErrorKind::PrefixNotFound
        );
        assert!(table.resolve("R").is_err());
        assert_eq!(table.len(), 21);
    }

    #[test]
    fn test_register_rejects_collisions() {
        let mut table = PrefixTable::standard();
        let cases = [
            ("kilo", "X", 7.0),   // duplicate name
            ("other", "k", 7.0),  // duplicate symbol
            ("other", "X", 1e3),  // duplicate scale
            ("other", "X", 0.0),  // non-positive scale
            ("other", "X", -1e3), // non-positive scale
            ("other", "X", f64::INFINITY),
            ("other", "u", 7.0),  // symbol alias
            ("none", "X", 7.0),   // name alias
            ("k", "X", 7.0),      // name equal to an existing symbol
            ("unit", "1", 7.0),   // numeric symbol would resolve as a scale
            ("1e5", "Qx", 3.0),   // numeric name
            (" pad", "Pd", 5.0),  // padded name
            ("pad", "Pd ", 5.0),  // padded symbol
            ("", "E0", 5.0),      // empty name
            ("blank", "", 5.0),   // empty symbol
        ];
        for (name, symbol, scale) in cases {
            let err = table.register(name, symbol, scale).unwrap_err();
            assert_eq!(
                err.kind(),
                ErrorKind::InvalidPrefix,
                "({}, {}, {}) should be rejected",
                name,
                symbol,
                scale
            );
        }
        assert_eq!(table.len(), 21);
    }

    #[test]
    fn test_identity_is_protected() {
        let mut table = PrefixTable::standard();
        assert_eq!(table.unregister("").unwrap_err(), QuantityError::ProtectedPrefix);
        assert_eq!(table.unregister("none").unwrap_err(), QuantityError::ProtectedPrefix);
        assert_eq!(
            table.unregister("bogus").unwrap_err().kind(),
            ErrorKind::PrefixNotFound
        );
        assert!(table.resolve("").is_ok());
    }

    #[test]
    fn test_standard_prefix_can_be_removed_and_restored() {
        let mut table = PrefixTable::standard();
        table.unregister("hecto").unwrap();
        assert!(table.resolve("h").is_err());
        table.register("hecto", "h", 1e2).unwrap();
        assert_eq!(table.resolve("h").unwrap().exponent(), Some(2));
    }

    #[test]
    fn test_aliases_follow_their_standard_prefix() {
        let mut table = PrefixTable::standard();
        assert!(table.register("other", "u", 7.0).is_err());

        table.unregister("micro").unwrap();
        assert!(table.resolve("u").is_err());

        // a stand-in holding the micro sign is not reachable through the aliases
        table.register("fakemicro", "\u{b5}", 2e-6).unwrap();
        assert_eq!(table.resolve("\u{b5}").unwrap().name(), "fakemicro");
        assert_eq!(
            table.resolve("u").unwrap_err().kind(),
            ErrorKind::PrefixNotFound
        );
        assert!(table.resolve("\u{3bc}").is_err());

        // the freed alias can now be registered in its own right
        table.register("unitless", "u", 3.0).unwrap();
        assert_eq!(table.resolve("u").unwrap().name(), "unitless");

        table.unregister("milli").unwrap();
        table.register("mili", "mi", 4e-3).unwrap();
        assert_eq!(table.resolve("mili").unwrap().scale(), 4e-3);
        assert_eq!(table.unregister("none").unwrap_err().kind(), ErrorKind::ProtectedPrefix);
    }

    #[test]
    fn test_aliases_resolve_while_standard_prefix_present() {
        let mut table = PrefixTable::standard();
        table.unregister("deca").unwrap();
        assert!(table.resolve("deka").is_err());
        table.register("deca", "da", 1e1).unwrap();
        assert_eq!(table.resolve("deka").unwrap().symbol(), "da");
        assert_eq!(table.get("mili").unwrap().name(), "milli");
    }

    #[test]
    fn test_list_is_sorted_descending() {
        let table = PrefixTable::standard();
        let names: Vec<&str> = table.list().iter().map(|p| p.name()).collect();
        assert_eq!(names.first(), Some(&"yotta"));
        assert_eq!(names.last(), Some(&"yocto"));
        assert_eq!(names[10], "");
    }

    #[test]
    fn test_convert_exact_ratios() {
        let kilo = StandardPrefix::Kilo.prefix();
        let milli = StandardPrefix::Milli.prefix();
        let identity = Prefix::identity();

        assert_eq!(convert(2.5, &kilo, &identity), 2500.0);
        assert_eq!(convert(2500.0, &identity, &kilo), 2.5);
        assert_eq!(convert(1.0, &kilo, &milli), 1e6);
        // 0.3 * 1e-3 would round differently; division by 1e3 is exact
        assert_eq!(convert(0.3, &identity, &kilo), 0.3 / 1e3);
    }

    #[test]
    fn test_convert_identity_is_bit_exact() {
        let nano = StandardPrefix::Nano.prefix();
        let value = 0.1 + 0.2;
        assert_eq!(convert(value, &nano, &nano).to_bits(), value.to_bits());
    }

    #[test]
    fn test_convert_wide_range() {
        let yotta = StandardPrefix::Yotta.prefix();
        let yocto = StandardPrefix::Yocto.prefix();
        assert_relative_eq!(convert(1.0, &yotta, &yocto), 1e48, max_relative = 1e-15);
        assert_relative_eq!(convert(1e48, &yocto, &yotta), 1.0, max_relative = 1e-15);
    }

    #[test]
    fn test_convert_non_decimal_scale() {
        let kibi = Prefix::new("kibi", "Ki", 1024.0);
        let kilo = StandardPrefix::Kilo.prefix();
        assert_relative_eq!(convert(1.0, &kibi, &kilo), 1.024, max_relative = 1e-15);
    }
}
