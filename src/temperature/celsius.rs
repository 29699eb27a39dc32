use crate::error::{ensure_finite, QuantityError, Result};
use crate::prefix::Prefix;
use crate::quantity::Quantity;
use crate::temperature::absolute::AbsoluteTemperature;
use crate::temperature::measurement::Measurement;
use crate::temperature::scale::{degree_celsius, TemperatureScale};
use std::cmp::Ordering;
use std::fmt;

/// A temperature on the Celsius scale, held in its own affine unit.
///
/// Unlike [`AbsoluteTemperature`], the stored value is degrees Celsius and
/// prefixing is rejected with `PrefixNotSupported`.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct CelsiusTemperature {
    quantity: Quantity,
}

impl CelsiusTemperature {
    pub fn new(celsius: f64) -> Result<Self> {
        Ok(Self {
            quantity: Quantity::new(celsius, degree_celsius())?,
        })
    }

    pub fn value(&self) -> f64 {
        self.quantity.raw_value()
    }

    pub fn set_value(&mut self, celsius: f64) -> Result<()> {
        self.quantity.set_value(celsius)
    }

    /// Only the identity prefix is accepted.
    pub fn value_as(&self, prefix: impl Into<Prefix>) -> Result<f64> {
        self.quantity.value_as(prefix)
    }

    pub fn set_value_as(&mut self, value: f64, prefix: impl Into<Prefix>) -> Result<()> {
        self.quantity.set_value_as(value, prefix)
    }

    pub fn to_kelvin(&self) -> f64 {
        self.quantity.unit().conversion().to_reference(self.value())
    }

    pub fn to_fahrenheit(&self) -> f64 {
        1.8 * self.value() + 32.0
    }

    pub fn from_kelvin(kelvin: f64) -> Result<Self> {
        let kelvin = ensure_finite(kelvin, "temperature")?;
        Self::new(degree_celsius().conversion().from_reference(kelvin))
    }

    pub fn from_fahrenheit(fahrenheit: f64) -> Result<Self> {
        let fahrenheit = ensure_finite(fahrenheit, "temperature")?;
        Self::new((fahrenheit - 32.0) * 5.0 / 9.0)
    }

    pub fn to_absolute(&self) -> Result<AbsoluteTemperature> {
        AbsoluteTemperature::new(self.to_kelvin())
    }

    pub fn from_absolute(absolute: &AbsoluteTemperature) -> Result<Self> {
        Self::new(absolute.in_scale(TemperatureScale::Celsius))
    }

    /// Convert a measurement that must be an absolute temperature.
    pub fn from_measurement(measurement: &Measurement) -> Result<Self> {
        match measurement {
            Measurement::AbsoluteTemperature(absolute) => Self::from_absolute(absolute),
            other => Err(QuantityError::TypeMismatch {
                expected: "an absolute temperature".to_string(),
                found: format!("a {}", other.kind_name()),
            }),
        }
    }

    /// Shift by a temperature difference in degrees.
    pub fn add_delta(&self, delta: f64) -> Result<Self> {
        let delta = ensure_finite(delta, "temperature delta")?;
        Self::new(self.value() + delta)
    }

    /// Temperature difference `self - other`, in degrees.
    pub fn difference(&self, other: &CelsiusTemperature) -> f64 {
        self.value() - other.value()
    }

    pub fn compare(&self, other: &CelsiusTemperature) -> Ordering {
        self.value()
            .partial_cmp(&other.value())
            .unwrap_or(Ordering::Equal)
    }

    pub fn as_quantity(&self) -> &Quantity {
        &self.quantity
    }
}

impl fmt::Display for CelsiusTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.quantity)
    }
}
