//! Named units for `pval` quantities.
//!
//! A [`UnitRegistry`] maps names to [`Quantity`](pval_core::Quantity) values. Definitions are checked for
//! consistency on every insertion, and SI-prefixed variants of prefixable units (`km`, `µs`, `MPa`) are synthesized
//! on first lookup.
//!
//! ```rust
//! use pval_units::{global, UnitSpec};
//!
//! let units = global().unwrap();
//! let newton = units.lookup("N").unwrap();
//! let fig = units.add("fig", UnitSpec::new(5.2).unit(newton)).unwrap();
//! assert!((fig.value() - 5.2).abs() < 1e-12);
//!
//! let kn = units.lookup("kN").unwrap();
//! assert_eq!(kn.value(), 1000.0);
//! ```

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod convert;
mod definition;
mod error;
mod prefix;
mod registry;
mod standard;

pub use config::{UnitDefinition, UnitsConfig, UNITS_FILE_ENV};
pub use convert::QuantityExt;
pub use definition::{UnitEntry, UnitSpec};
pub use error::{UnitError, UnitResult};
pub use prefix::{Prefix, PREFIXES};
pub use registry::{global, init_registry, UnitRegistry};
