use crate::error::{QuantityError, Result};
use crate::prefix::Prefix;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Base,
    Derived,
}

/// Dimension tag carried by a unit. Used for labelling and mismatch
/// detection only; there is no dimensional algebra.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Dimension {
    Length,
    Mass,
    Time,
    Temperature,
    ElectricCurrent,
    AmountOfSubstance,
    LuminousIntensity,
    PlaneAngle,
    SolidAngle,
    Derived(String),
}

impl Dimension {
    pub fn name(&self) -> &str {
        match self {
            Dimension::Length => "Length",
            Dimension::Mass => "Mass",
            Dimension::Time => "Time",
            Dimension::Temperature => "Temperature",
            Dimension::ElectricCurrent => "ElectricCurrent",
            Dimension::AmountOfSubstance => "AmountOfSubstance",
            Dimension::LuminousIntensity => "LuminousIntensity",
            Dimension::PlaneAngle => "PlaneAngle",
            Dimension::SolidAngle => "SolidAngle",
            Dimension::Derived(name) => name,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How a unit's values relate to its reference scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Conversion {
    /// Purely multiplicative; prefixes apply.
    Linear,
    /// `reference = factor * value + offset`; prefixes are meaningless.
    Affine {
        factor: f64,
        offset: f64,
        reference: String,
    },
}

impl Conversion {
    pub fn is_affine(&self) -> bool {
        matches!(self, Conversion::Affine { .. })
    }

    pub fn to_reference(&self, value: f64) -> f64 {
        match self {
            Conversion::Linear => value,
            Conversion::Affine { factor, offset, .. } => factor * value + offset,
        }
    }

    pub fn from_reference(&self, reference: f64) -> f64 {
        match self {
            Conversion::Linear => reference,
            Conversion::Affine { factor, offset, .. } => (reference - offset) / factor,
        }
    }
}

/// A physical unit of measure.
///
/// Base units are process-wide singletons (see [`crate::unit::base`]) whose
/// name and symbol cannot change. Derived units are ordinary values: mutate
/// them freely, then wrap them in an `Arc` to share them between quantities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    name: String,
    symbol: String,
    description: String,
    kind: UnitKind,
    dimension: Dimension,
    anchor: Prefix,
    conversion: Conversion,
}

impl Unit {
    /// A derived, linear unit with no prefix anchor.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            dimension: Dimension::Derived(name.clone()),
            name,
            symbol: symbol.into(),
            description: String::new(),
            kind: UnitKind::Derived,
            anchor: Prefix::identity(),
            conversion: Conversion::Linear,
        }
    }

    pub(crate) fn base(name: &str, symbol: &str, description: &str, dimension: Dimension) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            description: description.to_string(),
            kind: UnitKind::Base,
            dimension,
            anchor: Prefix::identity(),
            conversion: Conversion::Linear,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the prefix the unit's conventional symbol carries (kilo for the kilogram).
    pub fn with_anchor(mut self, anchor: impl Into<Prefix>) -> Self {
        self.anchor = anchor.into();
        self
    }

    pub fn with_conversion(mut self, conversion: Conversion) -> Self {
        self.conversion = conversion;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    pub fn anchor(&self) -> &Prefix {
        &self.anchor
    }

    pub fn conversion(&self) -> &Conversion {
        &self.conversion
    }

    pub fn is_base_unit(&self) -> bool {
        self.kind == UnitKind::Base
    }

    pub fn is_derived_unit(&self) -> bool {
        !self.is_base_unit()
    }

    pub fn allows_prefixes(&self) -> bool {
        !self.conversion.is_affine()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        if self.is_base_unit() {
            return Err(QuantityError::ImmutableUnit(self.name.clone()));
        }
        self.name = name.into();
        Ok(())
    }

    pub fn set_symbol(&mut self, symbol: impl Into<String>) -> Result<()> {
        if self.is_base_unit() {
            return Err(QuantityError::ImmutableUnit(self.name.clone()));
        }
        self.symbol = symbol.into();
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn symbol_with_prefix(&self, prefix: &Prefix) -> String {
        format!("{}{}", prefix.symbol(), self.symbol)
    }

    pub fn name_with_prefix(&self, prefix: &Prefix) -> String {
        format!("{}{}", prefix.name(), self.name)
    }

    /// Whether values in `self` and `other` measure the same thing on the same scale.
    /// Aliases such as "metre" and "meter" compare equal; names are ignored.
    pub fn same_measure(&self, other: &Unit) -> bool {
        self.symbol == other.symbol
            && self.dimension == other.dimension
            && self.anchor == other.anchor
            && self.conversion == other.conversion
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}). {}", self.name, self.symbol, self.description)
    }
}
