//! Base dimensions and exponent vectors.
//!
//! Every quantity is described by how many times each of the seven base dimensions appears in it. The exponents
//! are rationals so that roots (`m^1/2`) stay exact; two quantities are compatible only when all seven exponents
//! compare equal.

use crate::error::{QuantityError, QuantityResult};
use core::fmt::{Display, Formatter, Result};
use core::ops::{Add, Index, Neg, Sub};
use num_rational::Rational32;
use num_traits::{CheckedDiv, CheckedMul, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exponent applied to a single base dimension.
pub type Exponent = Rational32;

/// Number of base dimensions tracked by a [`Dimensions`] vector.
pub const DIMENSION_COUNT: usize = 7;

/// The seven fundamental measures, in exponent-vector order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BaseDimension {
    /// Length (metre).
    Length,
    /// Mass (kilogram).
    Mass,
    /// Time (second).
    Time,
    /// Electric charge (coulomb).
    Charge,
    /// Absolute temperature (kelvin).
    Temperature,
    /// Luminous intensity (candela).
    Illuminance,
    /// Plane angle (radian).
    Angle,
}

impl BaseDimension {
    /// All base dimensions, in exponent-vector order.
    pub const ALL: [BaseDimension; DIMENSION_COUNT] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Charge,
        BaseDimension::Temperature,
        BaseDimension::Illuminance,
        BaseDimension::Angle,
    ];

    /// Position of this dimension inside an exponent vector.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol of the base unit measuring this dimension.
    ///
    /// ```rust
    /// use pval_core::BaseDimension;
    /// assert_eq!(BaseDimension::Mass.symbol(), "kg");
    /// ```
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Time => "s",
            BaseDimension::Charge => "C",
            BaseDimension::Temperature => "K",
            BaseDimension::Illuminance => "cd",
            BaseDimension::Angle => "rad",
        }
    }

    /// Short keyword naming this dimension (`length`, `mass`, `time`, `charge`, `temp`, `illum`, `angle`).
    pub const fn keyword(self) -> &'static str {
        match self {
            BaseDimension::Length => "length",
            BaseDimension::Mass => "mass",
            BaseDimension::Time => "time",
            BaseDimension::Charge => "charge",
            BaseDimension::Temperature => "temp",
            BaseDimension::Illuminance => "illum",
            BaseDimension::Angle => "angle",
        }
    }
}

impl Display for BaseDimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.keyword())
    }
}

/// Exponent vector over the seven [`BaseDimension`]s.
///
/// Build one with the keyword-style helpers, starting from [`Dimensions::none`]:
///
/// ```rust
/// use pval_core::{BaseDimension, Dimensions, Exponent};
///
/// let accel = Dimensions::none().length(1).time(-2);
/// assert_eq!(accel[BaseDimension::Time], Exponent::from(-2));
/// assert!(!accel.is_dimensionless());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Dimensions([Exponent; DIMENSION_COUNT]);

impl Dimensions {
    /// The all-zero vector (a bare number).
    #[inline]
    pub fn none() -> Self {
        Self([Exponent::zero(); DIMENSION_COUNT])
    }

    /// Exponent vector from a full array, in [`BaseDimension::ALL`] order.
    #[inline]
    pub fn new(exponents: [Exponent; DIMENSION_COUNT]) -> Self {
        Self(exponents)
    }

    /// Exponent vector with a single base dimension raised to the first power.
    pub fn of(dim: BaseDimension) -> Self {
        Self::none().with(dim, 1)
    }

    /// Exponent vector from an arbitrary sequence.
    ///
    /// Fails with [`QuantityError::InvalidUnitDefinition`] unless exactly seven exponents are supplied.
    ///
    /// ```rust
    /// use pval_core::Dimensions;
    ///
    /// assert!(Dimensions::from_exponents(&[1, 0, -1, 0, 0, 0, 0]).is_ok());
    /// assert!(Dimensions::from_exponents(&[1, 2, 3]).is_err());
    /// ```
    pub fn from_exponents<T>(exponents: &[T]) -> QuantityResult<Self>
    where
        T: Copy + Into<Exponent>,
    {
        if exponents.len() != DIMENSION_COUNT {
            return Err(QuantityError::InvalidUnitDefinition {
                what: format!(
                    "expected {} exponents, got {}",
                    DIMENSION_COUNT,
                    exponents.len()
                ),
            });
        }
        let mut out = Self::none();
        for (slot, e) in out.0.iter_mut().zip(exponents) {
            *slot = (*e).into();
        }
        Ok(out)
    }

    /// Returns a copy with the exponent of `dim` replaced.
    #[inline]
    pub fn with(mut self, dim: BaseDimension, exponent: impl Into<Exponent>) -> Self {
        self.0[dim.index()] = exponent.into();
        self
    }

    /// Sets the length exponent.
    pub fn length(self, exponent: impl Into<Exponent>) -> Self {
        self.with(BaseDimension::Length, exponent)
    }

    /// Sets the mass exponent.
    pub fn mass(self, exponent: impl Into<Exponent>) -> Self {
        self.with(BaseDimension::Mass, exponent)
    }

    /// Sets the time exponent.
    pub fn time(self, exponent: impl Into<Exponent>) -> Self {
        self.with(BaseDimension::Time, exponent)
    }

    /// Sets the electric charge exponent.
    pub fn charge(self, exponent: impl Into<Exponent>) -> Self {
        self.with(BaseDimension::Charge, exponent)
    }

    /// Sets the temperature exponent.
    pub fn temp(self, exponent: impl Into<Exponent>) -> Self {
        self.with(BaseDimension::Temperature, exponent)
    }

    /// Sets the luminous intensity exponent.
    pub fn illum(self, exponent: impl Into<Exponent>) -> Self {
        self.with(BaseDimension::Illuminance, exponent)
    }

    /// Sets the angle exponent.
    pub fn angle(self, exponent: impl Into<Exponent>) -> Self {
        self.with(BaseDimension::Angle, exponent)
    }

    /// `true` when every exponent is zero.
    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(Zero::is_zero)
    }

    /// `true` for exactly `rad^1` with every other exponent zero.
    pub fn is_angle(&self) -> bool {
        *self == Self::of(BaseDimension::Angle)
    }

    /// Exponent of a single base dimension.
    #[inline]
    pub fn exponent(&self, dim: BaseDimension) -> Exponent {
        self.0[dim.index()]
    }

    /// The raw exponent array.
    #[inline]
    pub fn exponents(&self) -> &[Exponent; DIMENSION_COUNT] {
        &self.0
    }

    /// Iterates `(dimension, exponent)` pairs in vector order.
    pub fn iter(&self) -> impl Iterator<Item = (BaseDimension, Exponent)> + '_ {
        BaseDimension::ALL.iter().map(move |d| (*d, self.0[d.index()]))
    }

    fn map(self, f: impl Fn(Exponent) -> Exponent) -> Self {
        let mut out = self;
        for e in out.0.iter_mut() {
            *e = f(*e);
        }
        out
    }

    /// Applies `f` to every exponent, giving up on the first `None`.
    ///
    /// A result whose numerator is `i32::MIN` counts as overflow too, so that every vector built here can be
    /// negated.
    fn try_map(self, f: impl Fn(&Exponent) -> Option<Exponent>) -> Option<Self> {
        let mut out = self;
        for e in out.0.iter_mut() {
            let next = f(e)?;
            if *next.numer() == i32::MIN {
                return None;
            }
            *e = next;
        }
        Some(out)
    }

    /// Every exponent multiplied by `n`, or `None` if any of them overflows.
    ///
    /// ```rust
    /// use pval_core::{Dimensions, Exponent};
    ///
    /// let v = Dimensions::none().length(1).time(-1);
    /// assert_eq!(v.checked_scale(Exponent::from(2)), Some(Dimensions::none().length(2).time(-2)));
    /// assert_eq!(v.checked_scale(Exponent::from(i32::MAX)).and_then(|v| v.checked_scale(Exponent::from(2))), None);
    /// ```
    pub fn checked_scale(self, n: Exponent) -> Option<Self> {
        self.try_map(|e| e.checked_mul(&n))
    }

    /// Every exponent divided by `n`. `None` when `n` is zero or an exponent overflows.
    pub fn checked_div(self, n: Exponent) -> Option<Self> {
        self.try_map(|e| e.checked_div(&n))
    }

    fn zip_with(self, rhs: Self, f: impl Fn(Exponent, Exponent) -> Exponent) -> Self {
        let mut out = self;
        for (e, r) in out.0.iter_mut().zip(rhs.0) {
            *e = f(*e, r);
        }
        out
    }

    /// Formats the vector in `m kg / s^2` style, using base-unit symbols.
    ///
    /// Returns `None` for the dimensionless vector.
    pub fn symbolic(&self) -> Option<String> {
        let render = |positive: bool| -> String {
            self.iter()
                .filter(|(_, e)| if positive { *e > Exponent::zero() } else { *e < Exponent::zero() })
                .map(|(d, e)| {
                    let e = if positive { e } else { -e };
                    if e == Exponent::from(1) {
                        d.symbol().to_string()
                    } else {
                        format!("{}^{}", d.symbol(), e)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        };
        let num = render(true);
        let den = render(false);
        match (num.is_empty(), den.is_empty()) {
            (true, true) => None,
            (false, true) => Some(num),
            (true, false) => Some(format!("1/{}", den)),
            (false, false) => Some(format!("{}/{}", num, den)),
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::none()
    }
}

impl Index<BaseDimension> for Dimensions {
    type Output = Exponent;

    #[inline]
    fn index(&self, dim: BaseDimension) -> &Exponent {
        &self.0[dim.index()]
    }
}

impl Add for Dimensions {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for Dimensions {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Neg for Dimensions {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|e| -e)
    }
}

/// Tuple form, e.g. `(1, 0, -1, 0, 0, 0, 0)`.
impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("(")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", e)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_dimensionless() {
        assert!(Dimensions::none().is_dimensionless());
        assert!(Dimensions::default().is_dimensionless());
        assert!(!Dimensions::of(BaseDimension::Charge).is_dimensionless());
    }

    #[test]
    fn keyword_builders_fill_the_right_slot() {
        let d = Dimensions::none()
            .length(1)
            .mass(2)
            .time(3)
            .charge(4)
            .temp(5)
            .illum(6)
            .angle(7);
        let expected: Vec<Exponent> = (1..=7).map(Exponent::from).collect();
        assert_eq!(d.exponents().to_vec(), expected);
    }

    #[test]
    fn from_exponents_requires_seven_entries() {
        let d = Dimensions::from_exponents(&[1, 0, -1, 0, 0, 0, 0]).unwrap();
        assert_eq!(d, Dimensions::none().length(1).time(-1));

        let err = Dimensions::from_exponents(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, QuantityError::InvalidUnitDefinition { .. }));
        assert!(Dimensions::from_exponents::<i32>(&[]).is_err());
    }

    #[test]
    fn vector_algebra() {
        let v = Dimensions::none().length(1).time(-1);
        let t = Dimensions::none().time(1).temp(5);
        assert_eq!(v + t, Dimensions::none().length(1).temp(5));
        assert_eq!(v - t, Dimensions::none().length(1).time(-2).temp(-5));
        assert_eq!(-v, Dimensions::none().length(-1).time(1));
        assert_eq!(
            v.checked_scale(Exponent::from(2)),
            Some(Dimensions::none().length(2).time(-2))
        );
        assert_eq!(
            v.checked_div(Exponent::from(2)),
            Some(
                Dimensions::none()
                    .length(Exponent::new(1, 2))
                    .time(Exponent::new(-1, 2))
            )
        );
        assert_eq!(v.checked_div(Exponent::zero()), None);
    }

    #[test]
    fn scaling_overflow_is_reported() {
        let v = Dimensions::none().length(1);
        let tiny = v.checked_div(Exponent::from(46341)).unwrap();
        assert_eq!(tiny.checked_div(Exponent::from(46341)), None);
        assert_eq!(v.checked_div(Exponent::from(i32::MIN)), None);
        assert_eq!(v.checked_scale(Exponent::from(i32::MIN)), None);
        assert_eq!(
            v.checked_scale(Exponent::from(3))
                .and_then(|c| c.checked_scale(Exponent::from(1_000_000_000))),
            None
        );
        // untouched zero slots never overflow
        assert_eq!(
            Dimensions::none().checked_scale(Exponent::from(i32::MAX)),
            Some(Dimensions::none())
        );
    }

    #[test]
    fn angle_detection_is_exact() {
        assert!(Dimensions::of(BaseDimension::Angle).is_angle());
        assert!(!Dimensions::none().angle(2).is_angle());
        assert!(!Dimensions::none().angle(1).length(1).is_angle());
    }

    #[test]
    fn display_forms() {
        let d = Dimensions::none().length(1).time(-2);
        assert_eq!(d.to_string(), "(1, 0, -2, 0, 0, 0, 0)");
        assert_eq!(d.symbolic().as_deref(), Some("m/s^2"));
        assert_eq!(
            Dimensions::none().time(-1).symbolic().as_deref(),
            Some("1/s")
        );
        assert_eq!(
            Dimensions::none().length(Exponent::new(1, 3)).symbolic().as_deref(),
            Some("m^1/3")
        );
        assert_eq!(Dimensions::none().symbolic(), None);
    }
}
