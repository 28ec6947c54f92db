//! Integration tests for quantity arithmetic.

use pval_core::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

fn quantity(value: f64, unit: Dimensions) -> Quantity {
    Quantity::new(value, unit)
        .as_quantity()
        .expect("non-zero exponents")
}

fn time_temp() -> Dimensions {
    Dimensions::none().time(1).temp(5)
}

#[test]
fn construct_from_keywords_and_positions() {
    let a = quantity(3.0, time_temp());
    let b = Value::with_unit(3.0, vec![0, 0, 1, 0, 5, 0, 0]).unwrap();
    assert!(a.identical(&b.as_quantity().unwrap()));
}

#[test]
fn construct_from_template_quantity() {
    let newton = quantity(1.0, Dimensions::none().length(1).mass(1).time(-2));
    let fig = Value::with_unit(5.2, newton).unwrap().as_quantity().unwrap();
    let prune = Value::with_unit(10.0, fig).unwrap();
    assert_relative_eq!(prune.value(), 52.0);
    assert_eq!(prune.unit(), newton.unit());
}

#[test]
fn multiply_and_divide() {
    let x = quantity(1.5, time_temp());
    let y = quantity(2.0, Dimensions::none().length(1).time(-1));

    let xy = x * y;
    assert_eq!(xy.value(), 3.0);
    assert_eq!(xy.unit(), Dimensions::none().length(1).temp(5));

    let ratio = x / y;
    assert_eq!(ratio.value(), 0.75);
    assert_eq!(ratio.unit(), Dimensions::none().length(-1).time(2).temp(5));
}

#[test]
fn number_operands_are_dimensionless() {
    let t = quantity(3.0, time_temp());
    assert_eq!((t * 3.0).value(), 9.0);
    assert_eq!((3.0 * t).unit(), time_temp());
    assert_eq!((3.0 / t).unit(), -time_temp());
    assert_abs_diff_eq!((3.0 / t).value(), 1.0, epsilon = 1e-12);
}

#[test]
fn floor_division() {
    let t = quantity(3.0, time_temp());
    let r = Value::Number(-3.3).div_floor(t);
    assert_eq!(r.value(), -2.0);
    assert_eq!(r.unit(), -time_temp());

    let r = t.div_floor(1.2);
    assert_eq!(r.value(), 2.0);
    assert_eq!(r.unit(), time_temp());

    assert_eq!(t.div_floor(t).as_number(), Some(1.0));
}

#[test]
fn ratio_of_like_quantities_is_a_number() {
    let a = quantity(6.0, time_temp());
    let b = quantity(2.0, time_temp());
    match a / b {
        Value::Number(x) => assert_eq!(x, 3.0),
        Value::Quantity(q) => panic!("expected a number, got {}", q),
    }
}

#[test]
fn addition_rules() {
    let a = quantity(1.0, time_temp());
    let b = quantity(2.5, time_temp());
    assert_eq!((a + b).unwrap().value(), 3.5);
    assert_eq!((b - a).unwrap().value(), 1.5);

    let m = quantity(1.0, Dimensions::of(BaseDimension::Length));
    let kg = quantity(1.0, Dimensions::of(BaseDimension::Mass));
    assert!(matches!(m + kg, Err(QuantityError::IncompatibleUnits { .. })));
    assert!(matches!(m + 3.0, Err(QuantityError::IncompatibleUnits { .. })));
    assert!(matches!(3.0 - m, Err(QuantityError::IncompatibleUnits { .. })));
}

#[test]
fn comparisons_against_numbers_fail() {
    let m = quantity(1.0, Dimensions::of(BaseDimension::Length));
    assert!(m.try_lt(1.0).is_err());
    assert!(m.try_ge(1.0).is_err());
    assert!(m.try_eq(1.0).is_err());
    assert!(m.try_ne(1.0).is_err());
    assert!(!m.compatible(1.0));
}

#[test]
fn powers_and_roots() {
    let x = quantity(2.5, time_temp());

    let sq = x.powi(2).unwrap();
    assert_eq!(sq.value(), 6.25);
    assert_eq!(Some(sq.unit()), time_temp().checked_scale(Exponent::from(2)));

    let half = x.powf(0.5).unwrap();
    assert_relative_eq!(half.value(), 2.5_f64.sqrt());
    assert_eq!(Some(half.unit()), time_temp().checked_div(Exponent::from(2)));

    let cube_root = x.root(3).unwrap();
    assert_eq!(cube_root.value(), 2.5_f64.powf(1.0 / 3.0));
    assert_eq!(
        cube_root.unit(),
        Dimensions::none()
            .time(Exponent::new(1, 3))
            .temp(Exponent::new(5, 3))
    );

    assert!(x.root(0).is_err());
}

#[test]
fn exponent_overflow_surfaces_as_invalid_exponent() {
    let m = quantity(2.0, Dimensions::none().length(1));

    let err = m.root(46341).unwrap().root(46341).unwrap_err();
    assert!(matches!(err, QuantityError::InvalidExponent { .. }));
    assert!(err.to_string().contains("46341"));

    assert!(matches!(
        m.root(i32::MIN),
        Err(QuantityError::InvalidExponent { .. })
    ));

    let cube = m.powi(3).unwrap().as_quantity().unwrap();
    assert!(matches!(
        cube.powf(1e9),
        Err(QuantityError::InvalidExponent { .. })
    ));
    assert!(matches!(
        Value::Quantity(cube).powi(1_000_000_000),
        Err(QuantityError::InvalidExponent { .. })
    ));
}

#[test]
fn angles() {
    let rad = Dimensions::of(BaseDimension::Angle);
    let a = quantity(core::f64::consts::FRAC_PI_6, rad);
    assert_relative_eq!(a.sin().unwrap(), 0.5, epsilon = 1e-12);
    assert_relative_eq!(f64::try_from(a).unwrap(), core::f64::consts::FRAC_PI_6);

    let m = quantity(1.0, Dimensions::of(BaseDimension::Length));
    for result in [m.sin(), m.cos(), m.tan(), m.radians()] {
        assert!(matches!(result, Err(QuantityError::NotAnAngle { .. })));
    }
}

#[test]
fn display() {
    let x = quantity(3.0, Dimensions::none().length(1).mass(1).time(-2));
    assert_eq!(x.to_string(), "3[m kg/s^2]");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let x = quantity(1.5, Dimensions::none().length(Exponent::new(1, 2)));
    let json = serde_json::to_string(&x).unwrap();
    let back: Quantity = serde_json::from_str(&json).unwrap();
    assert!(x.identical(&back));

    let v: Value = serde_json::from_str("4.0").unwrap();
    assert_eq!(v.as_number(), Some(4.0));

    let dimensionless = serde_json::to_string(&Dimensions::none()).unwrap();
    let json = format!(r#"{{"value": 1.0, "unit": {}}}"#, dimensionless);
    assert!(serde_json::from_str::<Quantity>(&json).is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Property-based tests
// ─────────────────────────────────────────────────────────────────────────────

fn exponents() -> impl Strategy<Value = Dimensions> {
    prop::array::uniform7(-4i32..=4).prop_map(|e| Dimensions::new(e.map(Exponent::from)))
}

proptest! {
    #[test]
    fn prop_product_adds_exponents(a in -1e6..1e6f64, b in -1e6..1e6f64, u in exponents(), v in exponents()) {
        let p = Quantity::new(a, u) * Quantity::new(b, v);
        prop_assert_eq!(p.unit(), u + v);
        prop_assert_eq!(p.value(), a * b);
    }

    #[test]
    fn prop_quotient_subtracts_exponents(a in -1e6..1e6f64, b in 1e-3..1e6f64, u in exponents(), v in exponents()) {
        let p = Quantity::new(a, u) / Quantity::new(b, v);
        prop_assert_eq!(p.unit(), u - v);
        prop_assert_eq!(p.value(), a / b);
    }

    #[test]
    fn prop_root_then_power_restores_exponents(a in 1e-3..1e6f64, u in exponents(), n in 1i32..6) {
        prop_assume!(!u.is_dimensionless());
        let q = Quantity::new(a, u).as_quantity().unwrap();
        let back = q.root(n).unwrap().powi(n).unwrap();
        prop_assert_eq!(back.unit(), u);
        prop_assert!((back.value() - a).abs() <= 1e-9 * a);
    }

    #[test]
    fn prop_compatibility_is_exponent_equality(u in exponents(), v in exponents()) {
        prop_assume!(!u.is_dimensionless());
        let q = Quantity::new(1.0, u).as_quantity().unwrap();
        prop_assert_eq!(q.compatible(Quantity::new(1.0, v)), u == v);
        prop_assert_eq!(q.assert_compatible(Quantity::new(1.0, v)).is_ok(), u == v);
    }
}
