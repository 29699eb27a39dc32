pub mod base;
pub mod types;

pub use base::{
    ampere, base_unit, candela, kelvin, kilogram, meter, metre, mole, radian, second, steradian,
    BaseUnitRegistry,
};
pub use types::{Conversion, Dimension, Unit, UnitKind};
