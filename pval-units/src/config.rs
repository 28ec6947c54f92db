//! Unit definition files.
//!
//! Extra units can be declared in TOML and registered in order, so later entries may build on earlier ones:
//!
//! ```toml
//! [[unit]]
//! name = "furlong"
//! value = 220
//! unit = "yd"
//!
//! [[unit]]
//! name = "junk"
//! exponents = { length = 1, angle = -2 }
//! can_prefix = true
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use pval_core::{BaseDimension, Dimensions, Exponent};

use crate::definition::UnitSpec;
use crate::error::{UnitError, UnitResult};
use crate::registry::UnitRegistry;

/// Environment variable naming an extra definitions file.
pub const UNITS_FILE_ENV: &str = "PVAL_UNITS_FILE";

/// A set of unit definitions read from a file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitsConfig {
    /// Definitions, in registration order.
    #[serde(default, rename = "unit")]
    pub units: Vec<UnitDefinition>,
}

/// A single `[[unit]]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Name to register.
    pub name: String,
    /// Multiplier applied to `unit` or `exponents`; defaults to `1`.
    #[serde(default = "default_value")]
    pub value: f64,
    /// Name of an already registered unit (prefixes allowed).
    #[serde(default)]
    pub unit: Option<String>,
    /// Exponents keyed by dimension keyword (`length`, `mass`, `time`, `charge`, `temp`, `illum`, `angle`).
    #[serde(default)]
    pub exponents: Option<BTreeMap<String, i32>>,
    /// Allow metric prefixes.
    #[serde(default)]
    pub can_prefix: bool,
}

fn default_value() -> f64 {
    1.0
}

impl UnitDefinition {
    fn dimensions(&self, exponents: &BTreeMap<String, i32>) -> UnitResult<Dimensions> {
        let mut dims = Dimensions::none();
        for (key, exponent) in exponents {
            let dim = BaseDimension::ALL
                .iter()
                .find(|d| d.keyword() == key)
                .ok_or_else(|| {
                    UnitError::config(format!(
                        "unit '{}': unknown dimension '{}'",
                        self.name, key
                    ))
                })?;
            dims = dims.with(*dim, Exponent::from(*exponent));
        }
        Ok(dims)
    }

    /// Resolves the definition against `registry`.
    pub fn to_spec(&self, registry: &UnitRegistry) -> UnitResult<UnitSpec> {
        let spec = UnitSpec::new(self.value).can_prefix(self.can_prefix);
        match (&self.unit, &self.exponents) {
            (Some(_), Some(_)) => Err(UnitError::config(format!(
                "unit '{}': give either 'unit' or 'exponents', not both",
                self.name
            ))),
            (Some(unit), None) => Ok(spec.unit(registry.lookup(unit)?)),
            (None, Some(exponents)) => Ok(spec.unit(self.dimensions(exponents)?)),
            (None, None) => Ok(spec),
        }
    }
}

impl UnitsConfig {
    /// Load unit definitions from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> UnitResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            UnitError::config(format!(
                "failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config = Self::from_toml(&content)?;
        debug!(
            "Read {} unit definitions from {}",
            config.units.len(),
            path.as_ref().display()
        );
        Ok(config)
    }

    /// Parse unit definitions from TOML text.
    pub fn from_toml(content: &str) -> UnitResult<Self> {
        toml::from_str(content).map_err(|e| UnitError::config(format!("failed to parse: {}", e)))
    }

    /// Load unit definitions from the default location.
    ///
    /// Searches for `units.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    pub fn from_default_location() -> UnitResult<Self> {
        let search_paths = [PathBuf::from("units.toml"), PathBuf::from("config/units.toml")];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(UnitError::config(
            "no units.toml found in standard locations",
        ))
    }

    /// Load the file named by `PVAL_UNITS_FILE`, if the variable is set.
    pub fn from_env() -> UnitResult<Option<Self>> {
        match std::env::var_os(UNITS_FILE_ENV) {
            Some(path) => Self::from_file(PathBuf::from(path)).map(Some),
            None => Ok(None),
        }
    }

    /// Registers every definition in order. Stops at the first failure.
    pub fn apply(&self, registry: &UnitRegistry) -> UnitResult<()> {
        for def in &self.units {
            let spec = def.to_spec(registry)?;
            registry.add(&def.name, spec)?;
        }
        info!("Applied {} unit definitions", self.units.len());
        Ok(())
    }
}

impl std::str::FromStr for UnitsConfig {
    type Err = UnitError;

    fn from_str(s: &str) -> UnitResult<Self> {
        Self::from_toml(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    #[test]
    fn test_parse_and_apply() {
        let toml = r#"
[[unit]]
name = "furlong"
value = 220
unit = "yd"

[[unit]]
name = "junk"
exponents = { length = 1, angle = -2 }
can_prefix = true
"#;

        let config: UnitsConfig = toml.parse().unwrap();
        assert_eq!(config.units.len(), 2);
        assert_eq!(config.units[1].value, 1.0);

        let units = UnitRegistry::standard().unwrap();
        config.apply(&units).unwrap();

        assert_relative_eq!(units.lookup("furlong").unwrap().value(), 201.168, max_relative = 1e-12);
        assert_eq!(units.lookup("kjunk").unwrap().value(), 1000.0);
        assert_eq!(
            units.lookup("junk").unwrap().unit(),
            Dimensions::none().length(1).angle(-2)
        );
    }

    #[test]
    fn test_apply_is_idempotent() {
        let config = UnitsConfig::from_toml("[[unit]]\nname = \"span\"\nvalue = 9\nunit = \"inch\"\n").unwrap();
        let units = UnitRegistry::standard().unwrap();
        config.apply(&units).unwrap();
        config.apply(&units).unwrap();
    }

    #[test]
    fn test_rejects_bad_definitions() {
        let units = UnitRegistry::standard().unwrap();

        let both = UnitsConfig::from_toml(
            "[[unit]]\nname = \"x\"\nunit = \"m\"\nexponents = { length = 1 }\n",
        )
        .unwrap();
        assert!(matches!(both.apply(&units), Err(UnitError::Config { .. })));

        let neither = UnitsConfig::from_toml("[[unit]]\nname = \"x\"\nvalue = 3\n").unwrap();
        assert!(matches!(
            neither.apply(&units),
            Err(UnitError::DimensionlessUnit { .. })
        ));

        let unknown = UnitsConfig::from_toml("[[unit]]\nname = \"x\"\nunit = \"qjunk\"\n").unwrap();
        assert!(matches!(
            unknown.apply(&units),
            Err(UnitError::UndefinedUnit { .. })
        ));

        let bad_dim =
            UnitsConfig::from_toml("[[unit]]\nname = \"x\"\nexponents = { width = 1 }\n").unwrap();
        assert!(matches!(bad_dim.apply(&units), Err(UnitError::Config { .. })));

        assert!(UnitsConfig::from_toml("[[unit]]\nvalue = 3\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[unit]]\nname = \"fortnight\"\nvalue = 14\nunit = \"day\"").unwrap();

        let config = UnitsConfig::from_file(file.path()).unwrap();
        let units = UnitRegistry::standard().unwrap();
        config.apply(&units).unwrap();
        assert_eq!(units.lookup("fortnight").unwrap().value(), 14.0 * 86400.0);

        assert!(UnitsConfig::from_file("/nonexistent/units.toml").is_err());
    }
}
