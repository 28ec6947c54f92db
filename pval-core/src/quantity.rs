//! Quantity type and its implementations.

use crate::dimension::{Dimensions, Exponent};
use crate::error::{QuantityError, QuantityResult};
use crate::value::{self, Value};
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result};
use core::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A magnitude paired with a non-zero exponent vector.
///
/// The magnitude is always expressed in base-unit terms (metres, kilograms, seconds, coulombs, kelvin, candela,
/// radians). Construction goes through [`Quantity::new`], which returns a [`Value`]: an all-zero exponent vector
/// collapses to a bare number, so a `Quantity` never ends up dimensionless.
///
/// # Examples
///
/// ```rust
/// use pval_core::{Dimensions, Quantity, Value};
///
/// let speed = Quantity::new(3.0, Dimensions::none().length(1).time(-1));
/// let time = Quantity::new(2.0, Dimensions::none().time(1));
///
/// let distance = speed * time;
/// assert_eq!(distance.value(), 6.0);
/// assert_eq!(distance.unit(), Dimensions::none().length(1));
///
/// // A ratio of two lengths is a plain number.
/// assert!(matches!(distance / distance, Value::Number(r) if r == 1.0));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity {
    value: f64,
    unit: Dimensions,
}

impl Quantity {
    /// Builds a quantity, collapsing to [`Value::Number`] when `unit` is dimensionless.
    ///
    /// ```rust
    /// use pval_core::{Dimensions, Quantity, Value};
    ///
    /// assert!(matches!(Quantity::new(4.0, Dimensions::none()), Value::Number(x) if x == 4.0));
    /// assert!(Quantity::new(4.0, Dimensions::none().mass(1)).as_quantity().is_some());
    /// ```
    #[inline]
    pub fn new(value: f64, unit: Dimensions) -> Value {
        if unit.is_dimensionless() {
            Value::Number(value)
        } else {
            Value::Quantity(Self { value, unit })
        }
    }

    /// Caller guarantees `unit` is not dimensionless.
    #[inline]
    pub(crate) fn nonzero(value: f64, unit: Dimensions) -> Self {
        debug_assert!(!unit.is_dimensionless());
        Self { value, unit }
    }

    /// Returns the magnitude in base-unit terms.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the exponent vector.
    #[inline]
    pub fn unit(&self) -> Dimensions {
        self.unit
    }

    /// Same unit, magnitude multiplied by `factor`.
    ///
    /// Unlike `q * factor` this stays a `Quantity`, since scaling never changes the exponents.
    #[inline]
    pub fn scale(self, factor: f64) -> Quantity {
        Self::nonzero(self.value * factor, self.unit)
    }

    /// Absolute magnitude, same unit.
    #[inline]
    pub fn abs(self) -> Quantity {
        Self::nonzero(self.value.abs(), self.unit)
    }

    /// `1 / q`: reciprocal magnitude, negated exponents.
    #[inline]
    pub fn invert(self) -> Quantity {
        Self::nonzero(1.0 / self.value, -self.unit)
    }

    /// `true` when the magnitude is non-zero.
    #[inline]
    pub fn is_nonzero(&self) -> bool {
        self.value != 0.0
    }

    /// Exact structural identity: equal magnitudes and equal exponents. NaN is never identical to anything.
    pub fn identical(&self, other: &Quantity) -> bool {
        self.value == other.value && self.unit == other.unit
    }

    /// `true` iff `other` has exactly the same exponent vector.
    ///
    /// A bare number is never compatible with a quantity. This never fails.
    pub fn compatible(&self, other: impl Into<Value>) -> bool {
        self.unit == other.into().unit()
    }

    /// Fails with [`QuantityError::IncompatibleUnits`] unless `other` is [`compatible`](Self::compatible).
    pub fn assert_compatible(&self, other: impl Into<Value>) -> QuantityResult<()> {
        Value::Quantity(*self).assert_compatible(other)
    }

    /// Human readable unit, e.g. `m/s^2`.
    pub fn unit_symbol(&self) -> String {
        self.unit.symbolic().unwrap_or_default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Checked addition
    // ─────────────────────────────────────────────────────────────────────────

    /// Sum of two compatible operands.
    ///
    /// ```rust
    /// use pval_core::{Dimensions, Quantity};
    ///
    /// let m = Quantity::new(1.0, Dimensions::none().length(1)).as_quantity().unwrap();
    /// let kg = Quantity::new(1.0, Dimensions::none().mass(1)).as_quantity().unwrap();
    ///
    /// assert_eq!(m.try_add(m).unwrap().value(), 2.0);
    /// assert!(m.try_add(kg).is_err());
    /// assert!(m.try_add(3.0).is_err());
    /// ```
    pub fn try_add(self, rhs: impl Into<Value>) -> QuantityResult<Quantity> {
        let rhs = rhs.into();
        self.assert_compatible(rhs)?;
        Ok(Self::nonzero(self.value + rhs.value(), self.unit))
    }

    /// Difference of two compatible operands.
    pub fn try_sub(self, rhs: impl Into<Value>) -> QuantityResult<Quantity> {
        let rhs = rhs.into();
        self.assert_compatible(rhs)?;
        Ok(Self::nonzero(self.value - rhs.value(), self.unit))
    }

    /// `lhs - self`.
    pub(crate) fn try_rsub(self, lhs: impl Into<Value>) -> QuantityResult<Quantity> {
        let lhs = lhs.into();
        self.assert_compatible(lhs)?;
        Ok(Self::nonzero(lhs.value() - self.value, self.unit))
    }

    /// Floor division: `floor(a / b)` with exponents `u - v`.
    ///
    /// ```rust
    /// use pval_core::{Dimensions, Quantity, Value};
    ///
    /// let t = Quantity::new(3.0, Dimensions::none().time(1)).as_quantity().unwrap();
    /// assert_eq!(Value::Number(-3.3).div_floor(t).value(), -2.0);
    /// ```
    pub fn div_floor(self, rhs: impl Into<Value>) -> Value {
        value::floor_divide(self.into(), rhs.into())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Powers and roots
    // ─────────────────────────────────────────────────────────────────────────

    fn raised_unit(&self, n: Exponent) -> QuantityResult<Dimensions> {
        self.unit
            .checked_scale(n)
            .ok_or_else(|| QuantityError::InvalidExponent {
                what: format!("power {} overflows the exponents of {}", n, self.unit_symbol()),
            })
    }

    /// Integer power. `q.powi(0)` is the number `1`.
    ///
    /// Fails with [`QuantityError::InvalidExponent`] when a resulting exponent no longer fits in an
    /// [`Exponent`].
    #[inline]
    pub fn powi(self, n: i32) -> QuantityResult<Value> {
        let unit = self.raised_unit(Exponent::from(n))?;
        Ok(Quantity::new(self.value.powi(n), unit))
    }

    /// Exact rational power.
    pub fn pow(self, n: Exponent) -> QuantityResult<Value> {
        let unit = self.raised_unit(n)?;
        let real = f64::from(*n.numer()) / f64::from(*n.denom());
        Ok(Quantity::new(self.value.powf(real), unit))
    }

    /// Real power. The exponent must be representable as a small rational so that the exponent vector stays
    /// exact; otherwise [`QuantityError::InvalidExponent`] is returned.
    ///
    /// ```rust
    /// use pval_core::{Dimensions, Exponent, Quantity};
    ///
    /// let x = Quantity::new(4.0, Dimensions::none().length(1)).as_quantity().unwrap();
    /// let r = x.powf(0.5).unwrap();
    /// assert_eq!(r.value(), 2.0);
    /// assert_eq!(r.unit(), Dimensions::none().length(Exponent::new(1, 2)));
    /// ```
    pub fn powf(self, n: f64) -> QuantityResult<Value> {
        let exact = Exponent::approximate_float(n).ok_or_else(|| QuantityError::InvalidExponent {
            what: format!("{} has no rational form", n),
        })?;
        let unit = self.raised_unit(exact)?;
        Ok(Quantity::new(self.value.powf(n), unit))
    }

    /// `n`-th root: magnitude `value^(1/n)`, every exponent divided by `n`.
    ///
    /// Fails with [`QuantityError::InvalidExponent`] when `n == 0` or when a divided exponent no longer fits.
    pub fn root(self, n: i32) -> QuantityResult<Quantity> {
        if n == 0 {
            return Err(QuantityError::InvalidExponent {
                what: "root of order zero".into(),
            });
        }
        let unit = self
            .unit
            .checked_div(Exponent::from(n))
            .ok_or_else(|| QuantityError::InvalidExponent {
                what: format!("root {} overflows the exponents of {}", n, self.unit_symbol()),
            })?;
        Ok(Self::nonzero(self.value.powf(1.0 / f64::from(n)), unit))
    }

    /// Square root; fails only if halving an exponent overflows.
    #[inline]
    pub fn sqrt(self) -> QuantityResult<Quantity> {
        self.root(2)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Checked comparisons
    // ─────────────────────────────────────────────────────────────────────────

    /// Magnitude equality of compatible operands.
    pub fn try_eq(&self, other: impl Into<Value>) -> QuantityResult<bool> {
        let other = other.into();
        self.assert_compatible(other)?;
        Ok(self.value == other.value())
    }

    /// Negation of [`try_eq`](Self::try_eq).
    pub fn try_ne(&self, other: impl Into<Value>) -> QuantityResult<bool> {
        self.try_eq(other).map(|eq| !eq)
    }

    /// Ordering of compatible operands; `Ok(None)` when either magnitude is NaN.
    pub fn try_cmp(&self, other: impl Into<Value>) -> QuantityResult<Option<Ordering>> {
        let other = other.into();
        self.assert_compatible(other)?;
        Ok(self.value.partial_cmp(&other.value()))
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

    // ─────────────────────────────────────────────────────────────────────────
    // Angle functions
    // ─────────────────────────────────────────────────────────────────────────

    fn angle_value(&self, op: &'static str) -> QuantityResult<f64> {
        if self.unit.is_angle() {
            Ok(self.value)
        } else {
            Err(QuantityError::NotAnAngle {
                op,
                unit: self.unit_symbol(),
            })
        }
    }

    /// Sine of an angle.
    ///
    /// ```rust
    /// use pval_core::{BaseDimension, Dimensions, Quantity};
    ///
    /// let right = Quantity::new(core::f64::consts::FRAC_PI_2, Dimensions::of(BaseDimension::Angle))
    ///     .as_quantity()
    ///     .unwrap();
    /// assert!((right.sin().unwrap() - 1.0).abs() < 1e-12);
    ///
    /// let length = Quantity::new(1.0, Dimensions::of(BaseDimension::Length)).as_quantity().unwrap();
    /// assert!(length.sin().is_err());
    /// ```
    pub fn sin(&self) -> QuantityResult<f64> {
        self.angle_value("sin").map(f64::sin)
    }

    /// Cosine of an angle.
    pub fn cos(&self) -> QuantityResult<f64> {
        self.angle_value("cos").map(f64::cos)
    }

    /// Tangent of an angle.
    pub fn tan(&self) -> QuantityResult<f64> {
        self.angle_value("tan").map(f64::tan)
    }

    /// The angle in radians, as a plain number.
    pub fn radians(&self) -> QuantityResult<f64> {
        self.angle_value("radians")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Trait implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Neg for Quantity {
    type Output = Quantity;

    #[inline]
    fn neg(self) -> Quantity {
        Self::nonzero(-self.value, self.unit)
    }
}

impl TryFrom<Quantity> for f64 {
    type Error = QuantityError;

    /// Only angles convert to a plain number (their radian value).
    fn try_from(q: Quantity) -> QuantityResult<f64> {
        q.angle_value("f64 conversion")
    }
}

/// `value[num/den]`, e.g. `1.5[m/s^2]` or `2[1/s]`.
impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}[{}]", self.value, self.unit_symbol())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct QuantityRepr {
    value: f64,
    unit: Dimensions,
}

#[cfg(feature = "serde")]
impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        QuantityRepr {
            value: self.value,
            unit: self.unit,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = QuantityRepr::deserialize(deserializer)?;
        Quantity::new(repr.value, repr.unit)
            .as_quantity()
            .ok_or_else(|| serde::de::Error::custom("a quantity needs a non-zero exponent vector"))
    }
}
