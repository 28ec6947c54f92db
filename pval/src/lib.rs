//! Physical values with run-time dimensional analysis.
//!
//! `pval` is the user-facing crate in this workspace. It re-exports the quantity engine from `pval-core` and the
//! named-unit registry from `pval-units`.
//!
//! A value is a [`Quantity`]: an `f64` magnitude plus exponents over seven base dimensions. Every operation checks
//! those exponents, so mixing a length with a mass fails at the offending step instead of producing a wrong number.
//!
//! # What this crate solves
//!
//! - Catches dimension errors at run time with typed errors ([`QuantityError`], [`UnitError`]).
//! - Named units with SI prefixes synthesized on demand (`km`, `mN`, `µs`, `GW`).
//! - Conversion between any two compatible units ([`QuantityExt::in_units`]).
//!
//! # What this crate does not try to solve
//!
//! - Parsing free-form unit expressions such as `"kg m / s^2"`.
//! - Offset scales (degrees Celsius or Fahrenheit).
//! - Compile-time unit checking; see the `qtty` bridge for that.
//!
//! # Quick start
//!
//! ```rust
//! use pval::{global, QuantityExt};
//!
//! let units = global().unwrap();
//! let u = |name: &str| units.lookup(name).unwrap();
//!
//! let force = 5.0 * u("m") * u("kg") / u("sec").powi(2).unwrap();
//! assert!(force.try_eq(5.0 * u("N")).unwrap());
//!
//! let power = (746.0 * u("W")).as_quantity().unwrap();
//! assert!((power.in_units("hp").unwrap() - 1.0).abs() < 1e-3);
//! ```
//!
//! # Incorrect usage (dimension error)
//!
//! ```rust
//! use pval::{global, QuantityError};
//!
//! let units = global().unwrap();
//! let sum = units.lookup("m").unwrap() + units.lookup("kg").unwrap();
//! assert!(matches!(sum, Err(QuantityError::IncompatibleUnits { .. })));
//! ```
//!
//! # Feature flags
//!
//! - `qtty` (default): conversions to and from the statically typed quantities of the `qtty` crate.
//! - `serde`: serde support for [`Dimensions`], [`Quantity`] and [`Value`].
//! - `cli`: builds the `pval` command-line tool.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use pval_core::*;
pub use pval_units::*;
