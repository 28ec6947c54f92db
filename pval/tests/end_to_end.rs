//! Quantity arithmetic over units from the global registry.

use pval::*;

use approx::assert_relative_eq;

fn u(name: &str) -> Quantity {
    global().unwrap().lookup(name).unwrap()
}

#[test]
fn newton_from_base_units() {
    let lhs = 5.0 * u("N");
    let rhs = 5.0 * u("m") * u("kg") / u("sec").powi(2).unwrap();
    assert!(lhs.try_eq(rhs).unwrap());
    assert!(u("N").identical(&u("newton")));
}

#[test]
fn kinetic_energy_in_joules() {
    let mass = (1200.0 * u("kg")).as_quantity().unwrap();
    let speed = (100.0 * u("km") / u("hr")).as_quantity().unwrap();
    let energy = 0.5 * mass * speed.powi(2).unwrap();

    assert!(energy.compatible(u("J")));
    assert_relative_eq!(energy.in_units("kJ").unwrap(), 462.962_962_962_963, max_relative = 1e-12);
}

#[test]
fn incompatible_operations_fail() {
    assert!(matches!(u("m") + u("kg"), Err(QuantityError::IncompatibleUnits { .. })));
    assert!(matches!(u("m") + 3.0, Err(QuantityError::IncompatibleUnits { .. })));
    assert!(u("m").try_lt(u("sec")).is_err());
    assert!(matches!(
        u("hr").in_units("m"),
        Err(UnitError::Quantity(QuantityError::IncompatibleUnits { .. }))
    ));
    assert!(matches!(
        u("m").in_units("nope"),
        Err(UnitError::UndefinedUnit { .. })
    ));
}

#[test]
fn angles_from_degrees() {
    let right = (90.0 * u("deg")).as_quantity().unwrap();
    assert_relative_eq!(right.sin().unwrap(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(right.in_units("rev").unwrap(), 0.25, max_relative = 1e-12);
    assert!(matches!(u("sr").cos(), Err(QuantityError::NotAnAngle { .. })));
}

#[test]
fn root_restores_exponents() {
    let area = (2.0 * u("acre")).as_quantity().unwrap();
    let side = area.sqrt().unwrap();
    assert!(side.compatible(u("m")));
    assert_relative_eq!(side.powi(2).unwrap().value(), area.value(), max_relative = 1e-12);
    assert_eq!(area.root(4).unwrap().powi(4).unwrap().unit(), area.unit());
}

#[cfg(feature = "qtty")]
#[test]
fn typed_quantities_bridge() {
    let q = (1.5 * u("hr")).as_quantity().unwrap();
    let typed = qtty::time::Hours::try_from(q).unwrap();
    assert_relative_eq!(typed.value(), 1.5, max_relative = 1e-12);

    let back: Quantity = typed.into();
    assert_relative_eq!(back.in_units("min").unwrap(), 90.0, max_relative = 1e-12);
}
