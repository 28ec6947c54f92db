//! Error type for quantity arithmetic.

use thiserror::Error;

/// Failures raised by [`Quantity`](crate::Quantity) construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// The operands measure different things (e.g. a length against a mass).
    #[error("incompatible units: {lhs} vs {rhs}")]
    IncompatibleUnits {
        /// Unit description of the left operand.
        lhs: String,
        /// Unit description of the right operand.
        rhs: String,
    },

    /// A unit template could not be turned into an exponent vector.
    #[error("invalid unit definition: {what}")]
    InvalidUnitDefinition {
        /// What was wrong with the definition.
        what: String,
    },

    /// An angle-only operation was applied to something that is not `rad^1`.
    #[error("cannot take {op} of non-angle quantity with units {unit}")]
    NotAnAngle {
        /// The rejected operation.
        op: &'static str,
        /// Unit description of the operand.
        unit: String,
    },

    /// A power or root order that cannot be applied to an exponent vector.
    #[error("invalid exponent: {what}")]
    InvalidExponent {
        /// Description of the rejected exponent.
        what: String,
    },
}

/// Convenient result alias for quantity operations.
pub type QuantityResult<T> = Result<T, QuantityError>;
