pub mod config;
pub mod error;
pub mod prefix;
pub mod quantity;
pub mod temperature;
pub mod unit;

pub use error::{ErrorKind, QuantityError, Result};
pub use prefix::{Prefix, PrefixTable, StandardPrefix};
pub use quantity::Quantity;
pub use temperature::{AbsoluteTemperature, CelsiusTemperature, Measurement, TemperatureScale};
pub use unit::{BaseUnitRegistry, Dimension, Unit};
