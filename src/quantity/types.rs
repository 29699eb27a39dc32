use crate::error::{ensure_finite, QuantityError, Result};
use crate::prefix::{convert, Prefix};
use crate::quantity::format::format_value;
use crate::unit::{Dimension, Unit};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::sync::Arc;

/// A numeric value tied to a unit.
///
/// The value is stored once, in the unit's prefix-free representation
/// (`raw_value`). Every prefixed view is computed from it on demand, so
/// writing through one prefix and reading through another never drifts.
///
/// `base_prefix` is a display and default-input anchor: it picks the prefix
/// used by [`Quantity::value`], [`Quantity::set_value`] and `Display`, and
/// never rescales the stored value.
#[derive(Debug, Clone)]
pub struct Quantity {
    raw: f64,
    unit: Arc<Unit>,
    base_prefix: Prefix,
}

impl Quantity {
    /// Create a quantity whose `value` is expressed in the unit's anchor prefix.
    pub fn new(value: f64, unit: impl Into<Arc<Unit>>) -> Result<Self> {
        let unit = unit.into();
        let base_prefix = unit.anchor().clone();
        Self::with_prefixes(value, unit, base_prefix, None)
    }

    /// Create a quantity with an explicit base prefix.
    ///
    /// `value` is read in `prefix`, or in `base_prefix` when `prefix` is `None`.
    pub fn with_prefixes(
        value: f64,
        unit: impl Into<Arc<Unit>>,
        base_prefix: impl Into<Prefix>,
        prefix: Option<Prefix>,
    ) -> Result<Self> {
        let unit = unit.into();
        let base_prefix = base_prefix.into();
        let value = ensure_finite(value, "value")?;
        ensure_prefix_allowed(&unit, &base_prefix)?;

        let prefix = prefix.unwrap_or_else(|| base_prefix.clone());
        ensure_prefix_allowed(&unit, &prefix)?;

        let raw = ensure_finite(convert(value, &prefix, &Prefix::identity()), "value")?;
        ensure_viewable(raw, &base_prefix)?;
        Ok(Self {
            raw,
            unit,
            base_prefix,
        })
    }

    /// The stored value, in the identity prefix.
    pub fn raw_value(&self) -> f64 {
        self.raw
    }

    /// The value in the base prefix. Always finite: every change that would
    /// overflow this view is rejected.
    pub fn value(&self) -> f64 {
        convert(self.raw, &Prefix::identity(), &self.base_prefix)
    }

    /// Set the value, read in the base prefix.
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        let base_prefix = self.base_prefix.clone();
        self.set_value_as(value, base_prefix)
    }

    pub fn value_as(&self, prefix: impl Into<Prefix>) -> Result<f64> {
        let prefix = prefix.into();
        ensure_prefix_allowed(&self.unit, &prefix)?;
        ensure_finite(convert(self.raw, &Prefix::identity(), &prefix), "converted value")
    }

    pub fn set_value_as(&mut self, value: f64, prefix: impl Into<Prefix>) -> Result<()> {
        let prefix = prefix.into();
        ensure_prefix_allowed(&self.unit, &prefix)?;
        let value = ensure_finite(value, "value")?;
        let raw = ensure_finite(convert(value, &prefix, &Prefix::identity()), "value")?;
        ensure_viewable(raw, &self.base_prefix)?;
        self.raw = raw;
        Ok(())
    }

    pub fn base_prefix(&self) -> &Prefix {
        &self.base_prefix
    }

    /// Change the display anchor. The stored value is untouched.
    pub fn set_base_prefix(&mut self, prefix: impl Into<Prefix>) -> Result<()> {
        let prefix = prefix.into();
        ensure_prefix_allowed(&self.unit, &prefix)?;
        ensure_viewable(self.raw, &prefix)?;
        self.base_prefix = prefix;
        Ok(())
    }

    pub fn unit(&self) -> &Arc<Unit> {
        &self.unit
    }

    pub fn dimension(&self) -> &Dimension {
        self.unit.dimension()
    }

    /// Debug-style rendering: `<Length: 10.500 m>`
    pub fn summary(&self) -> String {
        format!("<{}: {}>", self.dimension().name(), self)
    }

    fn ensure_same_unit(&self, other: &Quantity) -> Result<()> {
        if self.unit.same_measure(&other.unit) {
            Ok(())
        } else {
            Err(QuantityError::DimensionMismatch {
                left: self.unit.symbol().to_string(),
                right: other.unit.symbol().to_string(),
            })
        }
    }

    fn with_raw(&self, raw: f64) -> Result<Quantity> {
        let raw = ensure_finite(raw, "result")?;
        ensure_viewable(raw, &self.base_prefix)?;
        Ok(Quantity {
            raw,
            unit: Arc::clone(&self.unit),
            base_prefix: self.base_prefix.clone(),
        })
    }

    /// Order two quantities of the same unit by stored value.
    pub fn compare(&self, other: &Quantity) -> Result<Ordering> {
        self.ensure_same_unit(other)?;
        Ok(self.raw.partial_cmp(&other.raw).unwrap_or(Ordering::Equal))
    }

    pub fn same_value(&self, other: &Quantity) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    pub fn add(&self, other: &Quantity) -> Result<Quantity> {
        self.ensure_same_unit(other)?;
        self.with_raw(self.raw + other.raw)
    }

    pub fn subtract(&self, other: &Quantity) -> Result<Quantity> {
        self.ensure_same_unit(other)?;
        self.with_raw(self.raw - other.raw)
    }

    /// Scale by a dimensionless factor.
    pub fn multiply(&self, factor: f64) -> Result<Quantity> {
        let factor = ensure_finite(factor, "factor")?;
        self.with_raw(self.raw * factor)
    }

    /// Divide by a dimensionless, non-zero divisor.
    pub fn divide(&self, divisor: f64) -> Result<Quantity> {
        let divisor = ensure_finite(divisor, "divisor")?;
        if divisor == 0.0 {
            return Err(QuantityError::InvalidArgument(
                "divisor must be non-zero".to_string(),
            ));
        }
        self.with_raw(self.raw / divisor)
    }

    /// Always fails: the product of two quantities needs unit algebra.
    pub fn multiply_quantity(&self, other: &Quantity) -> Result<Quantity> {
        Err(QuantityError::UnsupportedOperation(format!(
            "cannot multiply {} by {} without dimensional algebra",
            self.unit.symbol(),
            other.unit.symbol()
        )))
    }

    /// Always fails: the quotient of two quantities needs unit algebra.
    pub fn divide_quantity(&self, other: &Quantity) -> Result<Quantity> {
        Err(QuantityError::UnsupportedOperation(format!(
            "cannot divide {} by {} without dimensional algebra",
            self.unit.symbol(),
            other.unit.symbol()
        )))
    }

    /// Always fails: raising a unit to a power needs unit algebra.
    pub fn pow(&self, exponent: f64) -> Result<Quantity> {
        Err(QuantityError::UnsupportedOperation(format!(
            "cannot raise {} to the power {} without dimensional algebra",
            self.unit.symbol(),
            exponent
        )))
    }

    pub fn negate(&self) -> Quantity {
        Quantity {
            raw: -self.raw,
            unit: Arc::clone(&self.unit),
            base_prefix: self.base_prefix.clone(),
        }
    }

    pub fn abs(&self) -> Quantity {
        Quantity {
            raw: self.raw.abs(),
            unit: Arc::clone(&self.unit),
            base_prefix: self.base_prefix.clone(),
        }
    }
}

fn ensure_viewable(raw: f64, base_prefix: &Prefix) -> Result<()> {
    ensure_finite(
        convert(raw, &Prefix::identity(), base_prefix),
        "value in the base prefix",
    )
    .map(|_| ())
}

pub(crate) fn ensure_prefix_allowed(unit: &Unit, prefix: &Prefix) -> Result<()> {
    if unit.allows_prefixes() || prefix.is_identity() {
        Ok(())
    } else {
        Err(QuantityError::PrefixNotSupported(format!(
            "{} (prefix '{}')",
            unit.name(),
            prefix.name()
        )))
    }
}

impl PartialEq for Quantity {
    /// Equal when the units measure the same thing and the stored values match.
    fn eq(&self, other: &Self) -> bool {
        self.unit.same_measure(&other.unit) && self.raw == other.raw
    }
}

impl PartialOrd for Quantity {
    /// `None` across different units; there is no implicit conversion.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.unit.same_measure(&other.unit) {
            self.raw.partial_cmp(&other.raw)
        } else {
            None
        }
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        self.negate()
    }
}

impl Neg for &Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        self.negate()
    }
}

impl From<&Quantity> for f64 {
    fn from(quantity: &Quantity) -> f64 {
        quantity.raw
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            format_value(self.value()),
            self.unit.symbol_with_prefix(&self.base_prefix)
        )
    }
}
