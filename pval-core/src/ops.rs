//! Operator implementations for every pairing of [`Quantity`], [`Value`] and `f64`.
//!
//! Multiplication and division always succeed and return a [`Value`], because the result may be dimensionless.
//! Addition and subtraction return a [`QuantityResult`]; operands must be compatible, so a bare number added to a
//! quantity always fails.

use crate::error::QuantityResult;
use crate::quantity::Quantity;
use crate::value::{self, Value};
use core::ops::{Add, Div, Mul, Sub};

/// Generates `Mul` and `Div` for each `(lhs, rhs)` pair through the shared dispatch.
macro_rules! impl_multiplicative {
    ($(($lhs:ty, $rhs:ty)),+ $(,)?) => {
        $(
            impl Mul<$rhs> for $lhs {
                type Output = Value;
                #[inline]
                fn mul(self, rhs: $rhs) -> Value {
                    value::multiply(self.into(), rhs.into())
                }
            }

            impl Div<$rhs> for $lhs {
                type Output = Value;
                #[inline]
                fn div(self, rhs: $rhs) -> Value {
                    value::divide(self.into(), rhs.into())
                }
            }
        )+
    };
}

/// Generates checked `Add` and `Sub` for `lhs op rhs -> QuantityResult<out>`.
macro_rules! impl_additive {
    ($(($lhs:ty, $rhs:ty) => $out:ty : $add:path, $sub:path;)+) => {
        $(
            impl Add<$rhs> for $lhs {
                type Output = QuantityResult<$out>;
                #[inline]
                fn add(self, rhs: $rhs) -> Self::Output {
                    $add(self, rhs)
                }
            }

            impl Sub<$rhs> for $lhs {
                type Output = QuantityResult<$out>;
                #[inline]
                fn sub(self, rhs: $rhs) -> Self::Output {
                    $sub(self, rhs)
                }
            }
        )+
    };
}

impl_multiplicative!(
    (Quantity, Quantity),
    (Quantity, Value),
    (Quantity, f64),
    (Value, Quantity),
    (Value, Value),
    (Value, f64),
    (f64, Quantity),
    (f64, Value),
);

impl_additive! {
    (Quantity, Quantity) => Quantity : Quantity::try_add, Quantity::try_sub;
    (Quantity, Value) => Quantity : Quantity::try_add, Quantity::try_sub;
    (Quantity, f64) => Quantity : Quantity::try_add, Quantity::try_sub;
    (Value, Quantity) => Quantity : reversed_add, reversed_sub;
    (f64, Quantity) => Quantity : reversed_add, reversed_sub;
    (Value, Value) => Value : Value::try_add, Value::try_sub;
    (Value, f64) => Value : Value::try_add, Value::try_sub;
    (f64, Value) => Value : number_add, number_sub;
}

#[inline]
fn reversed_add(lhs: impl Into<Value>, rhs: Quantity) -> QuantityResult<Quantity> {
    rhs.try_add(lhs)
}

#[inline]
fn reversed_sub(lhs: impl Into<Value>, rhs: Quantity) -> QuantityResult<Quantity> {
    rhs.try_rsub(lhs)
}

#[inline]
fn number_add(lhs: f64, rhs: Value) -> QuantityResult<Value> {
    Value::Number(lhs).try_add(rhs)
}

#[inline]
fn number_sub(lhs: f64, rhs: Value) -> QuantityResult<Value> {
    Value::Number(lhs).try_sub(rhs)
}

#[cfg(test)]
mod tests {
    use crate::{Dimensions, Quantity, QuantityError, Value};

    fn q(value: f64, unit: Dimensions) -> Quantity {
        Quantity::new(value, unit).as_quantity().unwrap()
    }

    #[test]
    fn mixed_multiplication() {
        let t = q(3.0, Dimensions::none().time(1));
        assert_eq!((t * 2.0).value(), 6.0);
        assert_eq!((2.0 * t).unit(), t.unit());
        assert_eq!((t * t).unit(), Dimensions::none().time(2));
        assert_eq!((Value::Number(2.0) * t).value(), 6.0);
        assert_eq!((t * Value::Number(2.0)).value(), 6.0);
        assert_eq!((Value::Number(2.0) * 4.0).as_number(), Some(8.0));
    }

    #[test]
    fn mixed_division() {
        let t = q(4.0, Dimensions::none().time(1));
        assert_eq!((1.0 / t).unit(), Dimensions::none().time(-1));
        assert_eq!((1.0 / t).value(), 0.25);
        assert_eq!((t / 2.0).value(), 2.0);
        assert_eq!((t / t).as_number(), Some(1.0));
        assert_eq!((Value::Quantity(t) / t).as_number(), Some(1.0));
    }

    #[test]
    fn additive_operators() {
        let m = q(1.0, Dimensions::none().length(1));
        let kg = q(1.0, Dimensions::none().mass(1));
        assert_eq!((m + m).unwrap().value(), 2.0);
        assert_eq!((m - m).unwrap().value(), 0.0);
        assert!(matches!(m + kg, Err(QuantityError::IncompatibleUnits { .. })));
        assert!(matches!(m + 3.0, Err(QuantityError::IncompatibleUnits { .. })));
        assert!(matches!(3.0 + m, Err(QuantityError::IncompatibleUnits { .. })));
        assert!((3.0 - m).is_err());
        assert_eq!((Value::Quantity(m) - q(3.0, m.unit())).unwrap().value(), -2.0);
        assert_eq!((2.0 - Value::Number(3.0)).unwrap().as_number(), Some(-1.0));
        assert!((Value::Number(1.0) + m).is_err());
    }
}
