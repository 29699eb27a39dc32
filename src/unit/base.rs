// Fixed SI base units, shared process-wide

use crate::error::{QuantityError, Result};
use crate::prefix::StandardPrefix;
use crate::unit::types::{Dimension, Unit};
use lazy_static::lazy_static;
use std::sync::Arc;

lazy_static! {
    static ref METRE: Arc<Unit> = Arc::new(Unit::base(
        "metre",
        "m",
        "The base unit of length.",
        Dimension::Length
    ));
    static ref METER: Arc<Unit> = Arc::new(Unit::base(
        "meter",
        "m",
        "The base unit of length.",
        Dimension::Length
    ));
    static ref SECOND: Arc<Unit> = Arc::new(Unit::base(
        "second",
        "s",
        "The base unit of time.",
        Dimension::Time
    ));
    // Stored as the gram anchored at kilo: kilo + g = kg.
    static ref KILOGRAM: Arc<Unit> = Arc::new(
        Unit::base("gram", "g", "The base unit of mass.", Dimension::Mass)
            .with_anchor(StandardPrefix::Kilo)
    );
    static ref KELVIN: Arc<Unit> = Arc::new(Unit::base(
        "kelvin",
        "K",
        "The base unit of thermodynamic temperature.",
        Dimension::Temperature
    ));
    static ref MOLE: Arc<Unit> = Arc::new(Unit::base(
        "mole",
        "mol",
        "The base unit of amount of substance.",
        Dimension::AmountOfSubstance
    ));
    static ref AMPERE: Arc<Unit> = Arc::new(Unit::base(
        "ampere",
        "A",
        "The base unit of electric current.",
        Dimension::ElectricCurrent
    ));
    static ref CANDELA: Arc<Unit> = Arc::new(Unit::base(
        "candela",
        "cd",
        "The base unit of luminous intensity.",
        Dimension::LuminousIntensity
    ));
    static ref RADIAN: Arc<Unit> = Arc::new(Unit::base(
        "radian",
        "rad",
        "The base unit of plane angle.",
        Dimension::PlaneAngle
    ));
    static ref STERADIAN: Arc<Unit> = Arc::new(Unit::base(
        "steradian",
        "sr",
        "The base unit of solid angle.",
        Dimension::SolidAngle
    ));
    static ref BASE_UNITS: Vec<(&'static str, Arc<Unit>)> = vec![
        ("metre", Arc::clone(&METRE)),
        ("meter", Arc::clone(&METER)),
        ("second", Arc::clone(&SECOND)),
        ("kilogram", Arc::clone(&KILOGRAM)),
        ("kelvin", Arc::clone(&KELVIN)),
        ("mole", Arc::clone(&MOLE)),
        ("ampere", Arc::clone(&AMPERE)),
        ("candela", Arc::clone(&CANDELA)),
        ("radian", Arc::clone(&RADIAN)),
        ("steradian", Arc::clone(&STERADIAN)),
    ];
}

/// Lookup over the fixed base-unit set.
pub struct BaseUnitRegistry;

impl BaseUnitRegistry {
    /// Look up a base unit by its key ("metre", "kilogram", ...)
    pub fn get(key: &str) -> Result<Arc<Unit>> {
        BASE_UNITS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, unit)| Arc::clone(unit))
            .ok_or_else(|| QuantityError::InvalidArgument(format!("Unknown base unit: {}", key)))
    }

    pub fn keys() -> Vec<&'static str> {
        BASE_UNITS.iter().map(|(key, _)| *key).collect()
    }

    pub fn entries() -> Vec<(&'static str, Arc<Unit>)> {
        BASE_UNITS
            .iter()
            .map(|(key, unit)| (*key, Arc::clone(unit)))
            .collect()
    }
}

pub fn base_unit(key: &str) -> Result<Arc<Unit>> {
    BaseUnitRegistry::get(key)
}

pub fn metre() -> Arc<Unit> {
    Arc::clone(&METRE)
}

pub fn meter() -> Arc<Unit> {
    Arc::clone(&METER)
}

pub fn second() -> Arc<Unit> {
    Arc::clone(&SECOND)
}

pub fn kilogram() -> Arc<Unit> {
    Arc::clone(&KILOGRAM)
}

pub fn kelvin() -> Arc<Unit> {
    Arc::clone(&KELVIN)
}

pub fn mole() -> Arc<Unit> {
    Arc::clone(&MOLE)
}

pub fn ampere() -> Arc<Unit> {
    Arc::clone(&AMPERE)
}

pub fn candela() -> Arc<Unit> {
    Arc::clone(&CANDELA)
}

pub fn radian() -> Arc<Unit> {
    Arc::clone(&RADIAN)
}

pub fn steradian() -> Arc<Unit> {
    Arc::clone(&STERADIAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_accessors_return_singletons() {
        assert!(Arc::ptr_eq(&metre(), &metre()));
        assert!(Arc::ptr_eq(&kelvin(), &base_unit("kelvin").unwrap()));
    }

    #[test]
    fn test_all_keys_are_base_units() {
        let keys = BaseUnitRegistry::keys();
        assert_eq!(keys.len(), 10);
        for key in keys {
            let unit = base_unit(key).unwrap();
            assert!(unit.is_base_unit(), "{} should be a base unit", key);
        }
    }

    #[test]
    fn test_metre_and_meter_alias() {
        assert!(metre().same_measure(&meter()));
        assert_eq!(metre().symbol(), meter().symbol());
        assert_ne!(metre().name(), meter().name());
    }

    #[test]
    fn test_kilogram_anchor() {
        let kg = kilogram();
        assert_eq!(kg.symbol(), "g");
        assert_eq!(kg.symbol_with_prefix(kg.anchor()), "kg");
        assert_eq!(kg.name_with_prefix(kg.anchor()), "kilogram");
    }

    #[test]
    fn test_base_unit_copy_cannot_be_renamed() {
        let mut copy = (*second()).clone();
        assert_eq!(
            copy.set_symbol("sec").unwrap_err().kind(),
            ErrorKind::ImmutableUnit
        );
        assert_eq!(copy.symbol(), "s");
        assert_eq!(second().symbol(), "s");
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            base_unit("furlong").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }
}
