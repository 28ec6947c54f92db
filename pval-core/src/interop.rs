//! Bridge between statically typed `qtty` quantities and runtime [`Quantity`] values.
//!
//! Each typed quantity converts into a [`Quantity`] by first expressing itself in the corresponding base unit.
//! The reverse direction checks the exponent vector and fails with [`QuantityError::IncompatibleUnits`] when it
//! does not match.
//!
//! ```rust
//! use pval_core::Quantity;
//! use qtty::length::Kilometers;
//!
//! let q: Quantity = Kilometers::new(1.5).into();
//! assert_eq!(q.value(), 1500.0);
//!
//! let back = Kilometers::try_from(q).unwrap();
//! assert_eq!(back.value(), 1.5);
//! ```

use crate::dimension::{BaseDimension, Dimensions};
use crate::error::{QuantityError, QuantityResult};
use crate::quantity::Quantity;

/// Implements `From<$qty> for Quantity` and `TryFrom<Quantity> for $qty`.
///
/// `$base` is the `qtty` unit whose ratio matches one base unit of `$dim`.
macro_rules! impl_qtty_bridge {
    ($dim:expr, $base:ty => $($qty:ty),+ $(,)?) => {
        $(
            impl From<$qty> for Quantity {
                #[inline]
                fn from(q: $qty) -> Self {
                    Quantity::nonzero(q.to::<$base>().value(), Dimensions::of($dim))
                }
            }

            impl TryFrom<Quantity> for $qty {
                type Error = QuantityError;

                fn try_from(q: Quantity) -> QuantityResult<Self> {
                    let expected = Dimensions::of($dim);
                    if q.unit() != expected {
                        return Err(QuantityError::IncompatibleUnits {
                            lhs: q.unit_symbol(),
                            rhs: expected.symbolic().unwrap_or_default(),
                        });
                    }
                    Ok(qtty::Quantity::<$base>::new(q.value()).to())
                }
            }
        )+
    };
}

impl_qtty_bridge!(BaseDimension::Length, qtty::length::Meter => qtty::length::Meters, qtty::length::Kilometers);
impl_qtty_bridge!(
    BaseDimension::Time,
    qtty::time::Second => qtty::time::Seconds, qtty::time::Minutes, qtty::time::Hours, qtty::time::Days,
);
impl_qtty_bridge!(BaseDimension::Mass, qtty::mass::Kilogram => qtty::mass::Kilograms, qtty::mass::Grams);
impl_qtty_bridge!(BaseDimension::Angle, qtty::angular::Radian => qtty::angular::Radians, qtty::angular::Degrees);

impl From<qtty::power::Watts> for Quantity {
    fn from(p: qtty::power::Watts) -> Self {
        Quantity::nonzero(p.to::<qtty::power::Watt>().value(), watt_dimensions())
    }
}

impl TryFrom<Quantity> for qtty::power::Watts {
    type Error = QuantityError;

    fn try_from(q: Quantity) -> QuantityResult<Self> {
        let expected = watt_dimensions();
        if q.unit() != expected {
            return Err(QuantityError::IncompatibleUnits {
                lhs: q.unit_symbol(),
                rhs: expected.symbolic().unwrap_or_default(),
            });
        }
        Ok(qtty::power::Watts::new(q.value()))
    }
}

/// kg m^2 / s^3
fn watt_dimensions() -> Dimensions {
    Dimensions::none().length(2).mass(1).time(-3)
}
