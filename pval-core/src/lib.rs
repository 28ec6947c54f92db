//! Runtime dimensional analysis for physical quantities.
//!
//! `pval-core` models a measurement as an `f64` magnitude paired with an exponent vector over seven base
//! dimensions:
//!
//! - A [`Dimensions`] vector holds one rational [`Exponent`] per [`BaseDimension`] (length, mass, time, charge,
//!   temperature, luminous intensity, angle).
//! - A [`Quantity`] is a magnitude in base-unit terms plus a non-zero [`Dimensions`] vector.
//! - Anything that may come out dimensionless is a [`Value`]: either a bare [`Value::Number`] or a
//!   [`Value::Quantity`].
//!
//! Most users should depend on `pval` (the facade crate), which adds the named-unit registry.
//!
//! # What this crate solves
//!
//! - Dimension checking at run time, at the point of the offending operation.
//! - Exact exponent bookkeeping through roots and rational powers (`m^1/2`).
//! - Uniform handling of mixed number/quantity operands.
//!
//! # What this crate does not try to solve
//!
//! - Parsing unit expressions from free-form strings.
//! - Offset scales such as degrees Celsius.
//! - Symbolic simplification beyond exact exponent equality.
//!
//! # Quick start
//!
//! ```rust
//! use pval_core::{Dimensions, Quantity, QuantityError};
//!
//! let metre = Quantity::new(1.0, Dimensions::none().length(1)).as_quantity().unwrap();
//! let second = Quantity::new(1.0, Dimensions::none().time(1)).as_quantity().unwrap();
//!
//! let speed = 10.0 * metre / second;
//! assert_eq!(speed.value(), 10.0);
//! assert_eq!(speed.unit(), Dimensions::none().length(1).time(-1));
//!
//! // Adding a length to a time is a typed error, not a silent bug.
//! assert!(matches!(metre + second, Err(QuantityError::IncompatibleUnits { .. })));
//! ```
//!
//! # Feature flags
//!
//! - `qtty` (default): conversions to and from the statically typed quantities of the `qtty` crate.
//! - `serde`: `Serialize`/`Deserialize` for [`Dimensions`], [`Quantity`] and [`Value`].
//!
//! # Panics and errors
//!
//! Every fallible operation returns [`QuantityResult`]. Arithmetic on magnitudes follows IEEE-754 behavior (NaN and
//! infinities propagate).

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod error;
mod ops;
mod quantity;
mod value;

#[cfg(feature = "qtty")]
mod interop;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{BaseDimension, Dimensions, Exponent, DIMENSION_COUNT};
pub use error::{QuantityError, QuantityResult};
pub use quantity::Quantity;
pub use value::{UnitTemplate, Value};
