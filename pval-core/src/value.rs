//! Results that may or may not carry a unit.
//!
//! Multiplying a length by an inverse length yields a plain number. [`Value`] is the closed union every
//! arithmetic entry point returns, and the single dispatch path below treats a bare number as the zero exponent
//! vector so that collapse happens in one place.

use crate::dimension::{Dimensions, Exponent};
use crate::error::{QuantityError, QuantityResult};
use crate::quantity::Quantity;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result};
use core::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Either a bare number or a dimensioned [`Quantity`].
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// A dimensionless number.
    Number(f64),
    /// A quantity with a non-zero exponent vector.
    Quantity(Quantity),
}

/// Description of the unit a new quantity is expressed in.
#[derive(Clone, Debug)]
pub enum UnitTemplate {
    /// Explicit exponent vector, magnitude factor `1`.
    Dimensions(Dimensions),
    /// An existing quantity: its magnitude scales the new value and its exponents are inherited.
    Quantity(Quantity),
    /// Positional exponents. Must have exactly seven entries.
    Exponents(Vec<Exponent>),
}

impl UnitTemplate {
    /// Splits the template into a magnitude factor and an exponent vector.
    pub fn resolve(self) -> QuantityResult<(f64, Dimensions)> {
        match self {
            UnitTemplate::Dimensions(d) => Ok((1.0, d)),
            UnitTemplate::Quantity(q) => Ok((q.value(), q.unit())),
            UnitTemplate::Exponents(e) => Ok((1.0, Dimensions::from_exponents(&e)?)),
        }
    }
}

impl From<Dimensions> for UnitTemplate {
    fn from(d: Dimensions) -> Self {
        UnitTemplate::Dimensions(d)
    }
}

impl From<Quantity> for UnitTemplate {
    fn from(q: Quantity) -> Self {
        UnitTemplate::Quantity(q)
    }
}

impl<T: Into<Exponent>> From<Vec<T>> for UnitTemplate {
    fn from(e: Vec<T>) -> Self {
        UnitTemplate::Exponents(e.into_iter().map(Into::into).collect())
    }
}

impl Value {
    /// `value` expressed in `template`, i.e. `value * template`.
    ///
    /// ```rust
    /// use pval_core::{Dimensions, Quantity, Value};
    ///
    /// let newton = Quantity::new(1.0, Dimensions::none().length(1).mass(1).time(-2))
    ///     .as_quantity()
    ///     .unwrap();
    /// let fig = Value::with_unit(5.2, newton).unwrap();
    /// assert_eq!(fig.value(), 5.2);
    /// assert_eq!(fig.unit(), newton.unit());
    ///
    /// assert!(Value::with_unit(1.0, vec![1, 2, 3]).is_err());
    /// ```
    pub fn with_unit(value: impl Into<Value>, template: impl Into<UnitTemplate>) -> QuantityResult<Value> {
        let (scale, unit) = template.into().resolve()?;
        Ok(multiply(value.into(), Quantity::new(scale, unit)))
    }

    /// The magnitude, whether or not a unit is attached.
    #[inline]
    pub fn value(&self) -> f64 {
        match self {
            Value::Number(x) => *x,
            Value::Quantity(q) => q.value(),
        }
    }

    /// The exponent vector; all zeros for a bare number.
    #[inline]
    pub fn unit(&self) -> Dimensions {
        match self {
            Value::Number(_) => Dimensions::none(),
            Value::Quantity(q) => q.unit(),
        }
    }

    /// The number, if this is dimensionless.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(x) => Some(*x),
            Value::Quantity(_) => None,
        }
    }

    /// The quantity, if this carries a unit.
    pub fn as_quantity(&self) -> Option<Quantity> {
        match self {
            Value::Number(_) => None,
            Value::Quantity(q) => Some(*q),
        }
    }

    /// `true` when dimensionless.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Unit description used in error messages.
    pub fn describe_unit(&self) -> String {
        self.unit()
            .symbolic()
            .unwrap_or_else(|| "dimensionless".to_string())
    }

    /// `true` iff both sides have the same exponent vector (bare numbers counting as all zeros).
    pub fn compatible(&self, other: impl Into<Value>) -> bool {
        self.unit() == other.into().unit()
    }

    /// Fails with [`QuantityError::IncompatibleUnits`] describing both sides.
    pub fn assert_compatible(&self, other: impl Into<Value>) -> QuantityResult<()> {
        let other = other.into();
        if self.compatible(other) {
            Ok(())
        } else {
            Err(QuantityError::IncompatibleUnits {
                lhs: self.describe_unit(),
                rhs: other.describe_unit(),
            })
        }
    }

    /// Checked sum.
    pub fn try_add(self, rhs: impl Into<Value>) -> QuantityResult<Value> {
        let rhs = rhs.into();
        self.assert_compatible(rhs)?;
        Ok(Quantity::new(self.value() + rhs.value(), self.unit()))
    }

    /// Checked difference.
    pub fn try_sub(self, rhs: impl Into<Value>) -> QuantityResult<Value> {
        let rhs = rhs.into();
        self.assert_compatible(rhs)?;
        Ok(Quantity::new(self.value() - rhs.value(), self.unit()))
    }

    /// Floor division.
    pub fn div_floor(self, rhs: impl Into<Value>) -> Value {
        floor_divide(self, rhs.into())
    }

    /// Absolute magnitude.
    pub fn abs(self) -> Value {
        match self {
            Value::Number(x) => Value::Number(x.abs()),
            Value::Quantity(q) => Value::Quantity(q.abs()),
        }
    }

    /// Reciprocal.
    pub fn invert(self) -> Value {
        match self {
            Value::Number(x) => Value::Number(1.0 / x),
            Value::Quantity(q) => Value::Quantity(q.invert()),
        }
    }

    /// Integer power; see [`Quantity::powi`].
    pub fn powi(self, n: i32) -> QuantityResult<Value> {
        match self {
            Value::Number(x) => Ok(Value::Number(x.powi(n))),
            Value::Quantity(q) => q.powi(n),
        }
    }

    /// Rational power.
    pub fn pow(self, n: Exponent) -> QuantityResult<Value> {
        match self {
            Value::Number(x) => Ok(Value::Number(x.powf(f64::from(*n.numer()) / f64::from(*n.denom())))),
            Value::Quantity(q) => q.pow(n),
        }
    }

    /// Real power; see [`Quantity::powf`].
    pub fn powf(self, n: f64) -> QuantityResult<Value> {
        match self {
            Value::Number(x) => Ok(Value::Number(x.powf(n))),
            Value::Quantity(q) => q.powf(n),
        }
    }

    /// `true` when the magnitude is non-zero.
    pub fn is_nonzero(&self) -> bool {
        self.value() != 0.0
    }

    /// Magnitude equality of compatible operands.
    pub fn try_eq(&self, other: impl Into<Value>) -> QuantityResult<bool> {
        let other = other.into();
        self.assert_compatible(other)?;
        Ok(self.value() == other.value())
    }

    /// Negation of [`try_eq`](Self::try_eq).
    pub fn try_ne(&self, other: impl Into<Value>) -> QuantityResult<bool> {
        self.try_eq(other).map(|eq| !eq)
    }

    /// Ordering of compatible operands; `Ok(None)` when a magnitude is NaN.
    pub fn try_cmp(&self, other: impl Into<Value>) -> QuantityResult<Option<Ordering>> {
        let other = other.into();
        self.assert_compatible(other)?;
        Ok(self.value().partial_cmp(&other.value()))
    }

    /// `self < other`.
    pub fn try_lt(&self, other: impl Into<Value>) -> QuantityResult<bool> {
        self.try_cmp(other).map(|o| o == Some(Ordering::Less))
    }

    /// `self <= other`.
    pub fn try_le(&self, other: impl Into<Value>) -> QuantityResult<bool> {
        self.try_cmp(other)
            .map(|o| matches!(o, Some(Ordering::Less | Ordering::Equal)))
    }

    /// `self > other`.
    pub fn try_gt(&self, other: impl Into<Value>) -> QuantityResult<bool> {
        self.try_cmp(other).map(|o| o == Some(Ordering::Greater))
    }

    /// `self >= other`.
    pub fn try_ge(&self, other: impl Into<Value>) -> QuantityResult<bool> {
        self.try_cmp(other)
            .map(|o| matches!(o, Some(Ordering::Greater | Ordering::Equal)))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dispatch
// ─────────────────────────────────────────────────────────────────────────────

#[inline]
pub(crate) fn multiply(lhs: Value, rhs: Value) -> Value {
    Quantity::new(lhs.value() * rhs.value(), lhs.unit() + rhs.unit())
}

#[inline]
pub(crate) fn divide(lhs: Value, rhs: Value) -> Value {
    Quantity::new(lhs.value() / rhs.value(), lhs.unit() - rhs.unit())
}

#[inline]
pub(crate) fn floor_divide(lhs: Value, rhs: Value) -> Value {
    Quantity::new(floor_quotient(lhs.value(), rhs.value()), lhs.unit() - rhs.unit())
}

/// Floored quotient derived from the remainder, so `1.0 // 0.1` is `9` rather than `floor(10.000000000000002)`.
///
/// A zero divisor falls back to IEEE division (`±inf` or NaN).
fn floor_quotient(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return (a / b).floor();
    }
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floor = div.floor();
    if div - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Trait implementations
// ─────────────────────────────────────────────────────────────────────────────

impl From<f64> for Value {
    #[inline]
    fn from(x: f64) -> Self {
        Value::Number(x)
    }
}

impl From<Quantity> for Value {
    #[inline]
    fn from(q: Quantity) -> Self {
        Value::Quantity(q)
    }
}

impl TryFrom<Value> for Quantity {
    type Error = QuantityError;

    fn try_from(v: Value) -> QuantityResult<Quantity> {
        match v {
            Value::Quantity(q) => Ok(q),
            Value::Number(_) => Err(QuantityError::InvalidUnitDefinition {
                what: "a dimensionless number is not a quantity".into(),
            }),
        }
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        match self {
            Value::Number(x) => Value::Number(-x),
            Value::Quantity(q) => Value::Quantity(-q),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Value::Number(x) => write!(f, "{}", x),
            Value::Quantity(q) => write!(f, "{}", q),
        }
    }
}
