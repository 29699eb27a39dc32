use crate::error::{QuantityError, Result};
use crate::unit::{Conversion, Dimension, Unit};
use lazy_static::lazy_static;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Kelvin value of 0 °C.
pub const CELSIUS_OFFSET: f64 = 273.15;
/// Fahrenheit (and Rankine) degrees per kelvin.
pub const FAHRENHEIT_PER_KELVIN: f64 = 1.8;
/// Fahrenheit value of 0 K, negated.
pub const FAHRENHEIT_OFFSET: f64 = 459.67;

lazy_static! {
    static ref DEGREE_CELSIUS: Arc<Unit> = Arc::new(
        Unit::new("degree Celsius", "\u{b0}C")
            .with_description("Temperature relative to the freezing point of water.")
            .with_dimension(Dimension::Temperature)
            .with_conversion(Conversion::Affine {
                factor: 1.0,
                offset: CELSIUS_OFFSET,
                reference: "K".to_string(),
            })
    );
}

/// The shared degree-Celsius unit. Affine, so prefixes are rejected.
pub fn degree_celsius() -> Arc<Unit> {
    Arc::clone(&DEGREE_CELSIUS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 4] = [
        TemperatureScale::Kelvin,
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Rankine,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TemperatureScale::Kelvin => "kelvin",
            TemperatureScale::Celsius => "celsius",
            TemperatureScale::Fahrenheit => "fahrenheit",
            TemperatureScale::Rankine => "rankine",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureScale::Kelvin => "K",
            TemperatureScale::Celsius => "\u{b0}C",
            TemperatureScale::Fahrenheit => "\u{b0}F",
            TemperatureScale::Rankine => "\u{b0}R",
        }
    }

    /// Express an absolute temperature in kelvin on this scale.
    pub fn from_kelvin(self, kelvin: f64) -> f64 {
        match self {
            TemperatureScale::Kelvin => kelvin,
            TemperatureScale::Celsius => kelvin - CELSIUS_OFFSET,
            TemperatureScale::Fahrenheit => kelvin * FAHRENHEIT_PER_KELVIN - FAHRENHEIT_OFFSET,
            TemperatureScale::Rankine => kelvin * FAHRENHEIT_PER_KELVIN,
        }
    }

    /// Inverse of [`TemperatureScale::from_kelvin`].
    pub fn to_kelvin(self, value: f64) -> f64 {
        match self {
            TemperatureScale::Kelvin => value,
            TemperatureScale::Celsius => value + CELSIUS_OFFSET,
            TemperatureScale::Fahrenheit => (value + FAHRENHEIT_OFFSET) / FAHRENHEIT_PER_KELVIN,
            TemperatureScale::Rankine => value / FAHRENHEIT_PER_KELVIN,
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TemperatureScale {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "kelvin" | "k" => Ok(TemperatureScale::Kelvin),
            "celsius" | "c" | "\u{b0}c" => Ok(TemperatureScale::Celsius),
            "fahrenheit" | "f" | "\u{b0}f" => Ok(TemperatureScale::Fahrenheit),
            "rankine" | "r" | "\u{b0}r" => Ok(TemperatureScale::Rankine),
            _ => Err(QuantityError::InvalidArgument(format!(
                "Unknown temperature scale: {}",
                s
            ))),
        }
    }
}
