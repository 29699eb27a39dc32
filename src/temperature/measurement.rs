use crate::quantity::Quantity;
use crate::temperature::absolute::AbsoluteTemperature;
use crate::temperature::celsius::CelsiusTemperature;
use std::fmt;

/// Any of the value kinds the crate can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Measurement {
    Quantity(Quantity),
    AbsoluteTemperature(AbsoluteTemperature),
    CelsiusTemperature(CelsiusTemperature),
}

impl Measurement {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Measurement::Quantity(_) => "quantity",
            Measurement::AbsoluteTemperature(_) => "absolute temperature",
            Measurement::CelsiusTemperature(_) => "Celsius temperature",
        }
    }

    /// The underlying quantity, whatever the kind.
    pub fn as_quantity(&self) -> &Quantity {
        match self {
            Measurement::Quantity(quantity) => quantity,
            Measurement::AbsoluteTemperature(t) => t.as_quantity(),
            Measurement::CelsiusTemperature(t) => t.as_quantity(),
        }
    }
}

impl From<Quantity> for Measurement {
    fn from(quantity: Quantity) -> Self {
        Measurement::Quantity(quantity)
    }
}

impl From<AbsoluteTemperature> for Measurement {
    fn from(temperature: AbsoluteTemperature) -> Self {
        Measurement::AbsoluteTemperature(temperature)
    }
}

impl From<CelsiusTemperature> for Measurement {
    fn from(temperature: CelsiusTemperature) -> Self {
        Measurement::CelsiusTemperature(temperature)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Quantity(quantity) => write!(f, "{}", quantity),
            Measurement::AbsoluteTemperature(t) => write!(f, "{}", t),
            Measurement::CelsiusTemperature(t) => write!(f, "{}", t),
        }
    }
}
