// Factory functions for quantities over the base units.
// Each value is read in the unit's conventional prefix (kilograms for mass).

use crate::error::Result;
use crate::quantity::types::Quantity;
use crate::unit::base;

pub fn new_length(metres: f64) -> Result<Quantity> {
    Quantity::new(metres, base::metre())
}

pub fn new_time(seconds: f64) -> Result<Quantity> {
    Quantity::new(seconds, base::second())
}

pub fn new_mass(kilograms: f64) -> Result<Quantity> {
    Quantity::new(kilograms, base::kilogram())
}

pub fn new_current(amperes: f64) -> Result<Quantity> {
    Quantity::new(amperes, base::ampere())
}

pub fn new_amount(moles: f64) -> Result<Quantity> {
    Quantity::new(moles, base::mole())
}

pub fn new_luminous_intensity(candelas: f64) -> Result<Quantity> {
    Quantity::new(candelas, base::candela())
}

pub fn new_plane_angle(radians: f64) -> Result<Quantity> {
    Quantity::new(radians, base::radian())
}

pub fn new_solid_angle(steradians: f64) -> Result<Quantity> {
    Quantity::new(steradians, base::steradian())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::StandardPrefix;
    use crate::unit::Dimension;

    #[test]
    fn test_factories_tag_dimensions() {
        assert_eq!(new_length(1.0).unwrap().dimension(), &Dimension::Length);
        assert_eq!(new_time(1.0).unwrap().dimension(), &Dimension::Time);
        assert_eq!(new_mass(1.0).unwrap().dimension(), &Dimension::Mass);
        assert_eq!(
            new_current(1.0).unwrap().dimension(),
            &Dimension::ElectricCurrent
        );
        assert_eq!(
            new_amount(1.0).unwrap().dimension(),
            &Dimension::AmountOfSubstance
        );
        assert_eq!(
            new_luminous_intensity(1.0).unwrap().dimension(),
            &Dimension::LuminousIntensity
        );
        assert_eq!(
            new_plane_angle(1.0).unwrap().dimension(),
            &Dimension::PlaneAngle
        );
        assert_eq!(
            new_solid_angle(1.0).unwrap().dimension(),
            &Dimension::SolidAngle
        );
    }

    #[test]
    fn test_mass_is_read_in_kilograms() {
        let mass = new_mass(2.0).unwrap();
        assert_eq!(mass.raw_value(), 2000.0);
        assert_eq!(mass.value(), 2.0);
        assert_eq!(mass.value_as(StandardPrefix::Identity).unwrap(), 2000.0);
        assert_eq!(mass.value_as(StandardPrefix::Milli).unwrap(), 2e6);
        assert_eq!(mass.to_string(), "2.000 kg");
    }
}
