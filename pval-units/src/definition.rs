//! Unit definitions as accepted by [`UnitRegistry::add`](crate::UnitRegistry::add).

use crate::error::{UnitError, UnitResult};
use pval_core::{Quantity, UnitTemplate, Value};

/// A registered unit and whether it may take a metric prefix.
#[derive(Debug, Clone, Copy)]
pub struct UnitEntry {
    /// Value of one of this unit, in base units.
    pub quantity: Quantity,
    /// Whether prefixed forms (`k<name>`, `m<name>`, ...) may be synthesized.
    pub can_prefix: bool,
}

impl UnitEntry {
    /// Same quantity (exact) and same prefix flag.
    pub fn matches(&self, other: &UnitEntry) -> bool {
        self.can_prefix == other.can_prefix && self.quantity.identical(&other.quantity)
    }
}

/// Builder describing a unit: `value` times an optional template, plus the prefix flag.
///
/// ```rust
/// use pval_core::Dimensions;
/// use pval_units::UnitSpec;
///
/// // junk = m / rad^2, usable as mjunk, kjunk, ...
/// let spec = UnitSpec::new(1.0)
///     .unit(Dimensions::none().length(1).angle(-2))
///     .prefixable();
/// assert!(spec.is_prefixable());
/// ```
#[derive(Debug, Clone)]
pub struct UnitSpec {
    value: Value,
    template: Option<UnitTemplate>,
    can_prefix: bool,
}

impl UnitSpec {
    /// A unit worth `value`; without [`unit`](Self::unit) the value must already carry dimensions.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            template: None,
            can_prefix: false,
        }
    }

    /// Expresses the value in `template` (an exponent vector or an existing unit).
    pub fn unit(mut self, template: impl Into<UnitTemplate>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Allows metric prefixes on this unit.
    pub fn prefixable(self) -> Self {
        self.can_prefix(true)
    }

    /// Sets the prefix flag explicitly.
    pub fn can_prefix(mut self, can_prefix: bool) -> Self {
        self.can_prefix = can_prefix;
        self
    }

    /// Current prefix flag.
    pub fn is_prefixable(&self) -> bool {
        self.can_prefix
    }

    /// Evaluates the definition. Dimensionless results are rejected.
    pub fn build(self, name: &str) -> UnitResult<UnitEntry> {
        let value = match self.template {
            Some(template) => Value::with_unit(self.value, template)?,
            None => self.value,
        };
        match value {
            Value::Quantity(quantity) => Ok(UnitEntry {
                quantity,
                can_prefix: self.can_prefix,
            }),
            Value::Number(_) => Err(UnitError::DimensionlessUnit {
                name: name.to_string(),
            }),
        }
    }
}

impl From<Quantity> for UnitSpec {
    fn from(q: Quantity) -> Self {
        UnitSpec::new(q)
    }
}

impl From<Value> for UnitSpec {
    fn from(v: Value) -> Self {
        UnitSpec::new(v)
    }
}
