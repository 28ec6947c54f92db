//! Expressing quantities in named units of the global registry.

use pval_core::{Quantity, Value};

use crate::error::UnitResult;
use crate::registry::global;

/// Conversion helpers backed by the global registry.
///
/// ```rust
/// use pval_units::{global, QuantityExt};
///
/// let units = global().unwrap();
/// let day = units.lookup("day").unwrap();
/// assert_eq!(day.in_units("hr").unwrap(), 24.0);
/// ```
pub trait QuantityExt {
    /// Magnitude of `self / unit(name)`; fails when the dimensions differ or the unit is unknown.
    fn in_units(&self, name: &str) -> UnitResult<f64>;
}

impl QuantityExt for Quantity {
    fn in_units(&self, name: &str) -> UnitResult<f64> {
        global()?.convert(*self, name)
    }
}

impl QuantityExt for Value {
    fn in_units(&self, name: &str) -> UnitResult<f64> {
        global()?.convert(*self, name)
    }
}
