use crate::error::{ensure_finite, QuantityError, Result};
use crate::prefix::Prefix;
use crate::quantity::Quantity;
use crate::temperature::scale::TemperatureScale;
use crate::unit::base;
use std::cmp::Ordering;
use std::fmt;

/// A temperature stored as kelvin.
///
/// Kelvin is an SI base unit, so the usual prefix machinery applies to the
/// kelvin value (`value_as(StandardPrefix::Milli)` gives millikelvin). The
/// Celsius, Fahrenheit and Rankine views are offset transforms and take no
/// prefix.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct AbsoluteTemperature {
    quantity: Quantity,
}

impl AbsoluteTemperature {
    pub fn new(kelvin: f64) -> Result<Self> {
        Ok(Self {
            quantity: Quantity::new(kelvin, base::kelvin())?,
        })
    }

    /// Read `value` in a prefixed kelvin, e.g. 20 millikelvin.
    pub fn with_prefix(value: f64, prefix: impl Into<Prefix>) -> Result<Self> {
        Ok(Self {
            quantity: Quantity::with_prefixes(
                value,
                base::kelvin(),
                Prefix::identity(),
                Some(prefix.into()),
            )?,
        })
    }

    pub fn from_scale(value: f64, scale: TemperatureScale) -> Result<Self> {
        let value = ensure_finite(value, "temperature")?;
        Self::new(scale.to_kelvin(value))
    }

    pub fn from_celsius(celsius: f64) -> Result<Self> {
        Self::from_scale(celsius, TemperatureScale::Celsius)
    }

    pub fn from_fahrenheit(fahrenheit: f64) -> Result<Self> {
        Self::from_scale(fahrenheit, TemperatureScale::Fahrenheit)
    }

    pub fn kelvin(&self) -> f64 {
        self.quantity.raw_value()
    }

    pub fn celsius(&self) -> f64 {
        self.in_scale(TemperatureScale::Celsius)
    }

    pub fn fahrenheit(&self) -> f64 {
        self.in_scale(TemperatureScale::Fahrenheit)
    }

    pub fn in_scale(&self, scale: TemperatureScale) -> f64 {
        scale.from_kelvin(self.kelvin())
    }

    pub fn set_kelvin(&mut self, kelvin: f64) -> Result<()> {
        self.quantity.set_value_as(kelvin, Prefix::identity())
    }

    pub fn set_celsius(&mut self, celsius: f64) -> Result<()> {
        self.set_in_scale(celsius, TemperatureScale::Celsius)
    }

    pub fn set_fahrenheit(&mut self, fahrenheit: f64) -> Result<()> {
        self.set_in_scale(fahrenheit, TemperatureScale::Fahrenheit)
    }

    pub fn set_in_scale(&mut self, value: f64, scale: TemperatureScale) -> Result<()> {
        let value = ensure_finite(value, "temperature")?;
        self.set_kelvin(scale.to_kelvin(value))
    }

    /// The kelvin value in `prefix`.
    pub fn value_as(&self, prefix: impl Into<Prefix>) -> Result<f64> {
        self.quantity.value_as(prefix)
    }

    pub fn set_value_as(&mut self, value: f64, prefix: impl Into<Prefix>) -> Result<()> {
        self.quantity.set_value_as(value, prefix)
    }

    pub fn compare(&self, other: &AbsoluteTemperature) -> Ordering {
        self.kelvin()
            .partial_cmp(&other.kelvin())
            .unwrap_or(Ordering::Equal)
    }

    pub fn as_quantity(&self) -> &Quantity {
        &self.quantity
    }

    pub fn into_quantity(self) -> Quantity {
        self.quantity
    }
}

impl TryFrom<&Quantity> for AbsoluteTemperature {
    type Error = QuantityError;

    /// Only kelvin quantities are absolute temperatures.
    fn try_from(quantity: &Quantity) -> Result<Self> {
        if quantity.unit().same_measure(&base::kelvin()) {
            Ok(Self {
                quantity: quantity.clone(),
            })
        } else {
            Err(QuantityError::TypeMismatch {
                expected: "a kelvin quantity".to_string(),
                found: format!("a quantity in {}", quantity.unit().name()),
            })
        }
    }
}

impl TryFrom<Quantity> for AbsoluteTemperature {
    type Error = QuantityError;

    fn try_from(quantity: Quantity) -> Result<Self> {
        AbsoluteTemperature::try_from(&quantity)
    }
}

impl fmt::Display for AbsoluteTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.quantity)
    }
}
