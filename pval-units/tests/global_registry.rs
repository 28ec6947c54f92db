//! Lifecycle of the process-wide registry.
//!
//! Kept as a single test in its own binary: `reset` clears state that every other test in the process would see.

use pval_core::Dimensions;
use pval_units::*;

#[test]
fn global_registry_lifecycle() {
    init_registry().unwrap();
    init_registry().unwrap();

    let units = global().unwrap();
    assert!(std::ptr::eq(units, global().unwrap()));

    let fresh = units.len();
    assert!(units.contains("N"));
    assert!(!units.contains("kjunk"));

    units
        .add(
            "junk",
            UnitSpec::new(1.0)
                .unit(Dimensions::none().length(1).angle(-2))
                .prefixable(),
        )
        .unwrap();
    let kjunk = units.lookup("kjunk").unwrap();
    assert_eq!(kjunk.value(), 1000.0);
    assert_eq!(kjunk.in_units("junk").unwrap(), 1000.0);
    assert_eq!(units.len(), fresh + 2);

    units.reset().unwrap();
    assert_eq!(units.len(), fresh);
    assert!(matches!(
        units.lookup("junk"),
        Err(UnitError::UndefinedUnit { .. })
    ));

    // A definition conflicting with the pre-reset `junk` is accepted now.
    units
        .add("junk", UnitSpec::new(2.0).unit(Dimensions::none().mass(1)))
        .unwrap();
    units.reset().unwrap();
}
