//! Error types for registry operations.

use pval_core::QuantityError;
use thiserror::Error;

/// Result type for registry operations.
pub type UnitResult<T> = Result<T, UnitError>;

/// Failures raised by the unit registry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// Arithmetic on a unit value failed.
    #[error(transparent)]
    Quantity(#[from] QuantityError),

    /// `name` is already registered with a different value, unit or prefix flag.
    #[error("inconsistent definition of unit '{name}': already {existing}, attempted {attempted}")]
    InconsistentUnitDefinition {
        /// The unit being redefined.
        name: String,
        /// The registered definition.
        existing: String,
        /// The rejected definition.
        attempted: String,
    },

    /// Plain assignment is never allowed.
    #[error("units cannot be assigned; use add() to define '{name}'")]
    AttemptToAssignToUnit {
        /// Target of the assignment.
        name: String,
    },

    /// No unit has this name, with or without a prefix.
    #[error("undefined unit '{name}'")]
    UndefinedUnit {
        /// The name that was looked up.
        name: String,
    },

    /// The definition has an all-zero exponent vector.
    #[error("unit '{name}' would be dimensionless")]
    DimensionlessUnit {
        /// The rejected unit.
        name: String,
    },

    /// A unit definitions file could not be read or parsed.
    #[error("unit definitions: {message}")]
    Config {
        /// What went wrong, including the file path when known.
        message: String,
    },
}

impl UnitError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        UnitError::Config {
            message: message.into(),
        }
    }
}
