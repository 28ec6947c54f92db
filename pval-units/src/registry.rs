//! Named-unit registry.
//!
//! Units are stored by name together with a prefix flag. Registration is append-only: adding a name that already
//! exists succeeds only when the new definition is identical, and returns the stored quantity. Lookups that miss
//! fall back to prefix synthesis (`km` = `1000 * m` when `m` is prefixable), and the synthesized unit is cached
//! under its full name.
//!
//! A process-wide instance preloaded with the standard catalogue is available through [`global`]; independent
//! registries can be built with [`UnitRegistry::empty`] or [`UnitRegistry::standard`].

use std::collections::HashMap;
use std::sync::OnceLock;

use log::{debug, info, warn};
use parking_lot::Mutex;
use pval_core::{Quantity, Value};

use crate::definition::{UnitEntry, UnitSpec};
use crate::error::{UnitError, UnitResult};
use crate::prefix;
use crate::standard;

/// Global registry instance initialized once
static REGISTRY: OnceLock<UnitRegistry> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seed {
    Empty,
    Standard,
}

/// Unlocked registry contents. Bootstrap code works on this directly while the lock is held.
#[derive(Debug, Default)]
pub(crate) struct RegistryState {
    units: HashMap<String, UnitEntry>,
}

impl RegistryState {
    pub(crate) fn define(&mut self, name: &str, spec: UnitSpec) -> UnitResult<Quantity> {
        let entry = spec.build(name)?;
        if let Some(existing) = self.units.get(name) {
            if existing.matches(&entry) {
                return Ok(existing.quantity);
            }
            warn!(
                "Rejected redefinition of unit '{}': {} (prefixable={}) -> {} (prefixable={})",
                name, existing.quantity, existing.can_prefix, entry.quantity, entry.can_prefix
            );
            return Err(UnitError::InconsistentUnitDefinition {
                name: name.to_string(),
                existing: describe(existing),
                attempted: describe(&entry),
            });
        }
        debug!("Registered unit '{}' = {}", name, entry.quantity);
        self.units.insert(name.to_string(), entry);
        Ok(entry.quantity)
    }

    pub(crate) fn resolve(&mut self, name: &str) -> UnitResult<Quantity> {
        if let Some(entry) = self.units.get(name) {
            return Ok(entry.quantity);
        }

        let synthesized = prefix::split(name).and_then(|(factor, base)| {
            self.units
                .get(base)
                .filter(|entry| entry.can_prefix)
                .map(|entry| entry.quantity.scale(factor))
        });

        match synthesized {
            Some(quantity) => {
                debug!("Synthesized prefixed unit '{}' = {}", name, quantity);
                self.units.insert(
                    name.to_string(),
                    UnitEntry {
                        quantity,
                        can_prefix: false,
                    },
                );
                Ok(quantity)
            }
            None => Err(UnitError::UndefinedUnit {
                name: name.to_string(),
            }),
        }
    }

    fn seed(&mut self, seed: Seed) -> UnitResult<()> {
        if seed == Seed::Standard {
            standard::install(self)?;
            info!("Standard unit catalogue installed ({} units)", self.units.len());
        }
        Ok(())
    }
}

fn describe(entry: &UnitEntry) -> String {
    if entry.can_prefix {
        format!("{} (prefixable)", entry.quantity)
    } else {
        entry.quantity.to_string()
    }
}

/// Thread-safe catalogue of named units.
#[derive(Debug)]
pub struct UnitRegistry {
    state: Mutex<RegistryState>,
    seed: Seed,
}

impl UnitRegistry {
    /// A registry with no units at all.
    pub fn empty() -> Self {
        Self {
            state: Mutex::new(RegistryState::default()),
            seed: Seed::Empty,
        }
    }

    /// A registry preloaded with the base, SI-derived and imperial units.
    pub fn standard() -> UnitResult<Self> {
        let mut state = RegistryState::default();
        state.seed(Seed::Standard)?;
        Ok(Self {
            state: Mutex::new(state),
            seed: Seed::Standard,
        })
    }

    /// Registers `name`, or verifies that an existing definition is identical.
    ///
    /// Returns the stored quantity. A definition that differs in magnitude, exponents or prefix flag fails with
    /// [`UnitError::InconsistentUnitDefinition`].
    ///
    /// ```rust
    /// use pval_core::Dimensions;
    /// use pval_units::{UnitRegistry, UnitSpec};
    ///
    /// let units = UnitRegistry::empty();
    /// units.add("junk", UnitSpec::new(1.0).unit(Dimensions::none().length(1)).prefixable()).unwrap();
    ///
    /// let kjunk = units.lookup("kjunk").unwrap();
    /// assert_eq!(kjunk.value(), 1000.0);
    /// assert!(units.add("junk", UnitSpec::new(2.0).unit(Dimensions::none().length(1))).is_err());
    /// ```
    pub fn add(&self, name: &str, spec: impl Into<UnitSpec>) -> UnitResult<Quantity> {
        self.state.lock().define(name, spec.into())
    }

    /// Resolves a unit by name, synthesizing prefixed variants of prefixable units on demand.
    pub fn lookup(&self, name: &str) -> UnitResult<Quantity> {
        self.state.lock().resolve(name)
    }

    /// Direct entry for `name`, without prefix synthesis.
    pub fn get(&self, name: &str) -> Option<UnitEntry> {
        self.state.lock().units.get(name).copied()
    }

    /// `true` if `name` is registered (synthesized prefixes count once looked up).
    pub fn contains(&self, name: &str) -> bool {
        self.state.lock().units.contains_key(name)
    }

    /// Units are immutable once defined; this always fails with [`UnitError::AttemptToAssignToUnit`].
    pub fn assign(&self, name: &str, _quantity: Quantity) -> UnitResult<()> {
        Err(UnitError::AttemptToAssignToUnit {
            name: name.to_string(),
        })
    }

    /// Magnitude of `value` measured in the unit `name`.
    ///
    /// ```rust
    /// use pval_units::UnitRegistry;
    ///
    /// let units = UnitRegistry::standard().unwrap();
    /// let marathon = (42.195 * units.lookup("km").unwrap()).as_quantity().unwrap();
    /// let miles = units.convert(marathon, "mi").unwrap();
    /// assert!((miles - 26.2188).abs() < 1e-4);
    /// ```
    pub fn convert(&self, value: impl Into<Value>, name: &str) -> UnitResult<f64> {
        let value = value.into();
        let unit = self.lookup(name)?;
        value.assert_compatible(unit)?;
        Ok(value.value() / unit.value())
    }

    /// All entries, sorted by name.
    pub fn entries(&self) -> Vec<(String, UnitEntry)> {
        let state = self.state.lock();
        let mut entries: Vec<_> = state
            .units
            .iter()
            .map(|(name, entry)| (name.clone(), *entry))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.state.lock().units.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every definition (including synthesized prefixes) and reinstalls the registry's initial catalogue.
    ///
    /// Intended for tests.
    pub fn reset(&self) -> UnitResult<()> {
        let mut state = self.state.lock();
        state.units.clear();
        state.seed(self.seed)?;
        info!("Unit registry reset ({} units)", state.units.len());
        Ok(())
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::empty()
    }
}

/// Initialize the global registry with the standard catalogue.
///
/// Idempotent: later calls return immediately.
pub fn init_registry() -> UnitResult<()> {
    if REGISTRY.get().is_some() {
        return Ok(());
    }

    let registry = UnitRegistry::standard()?;

    // Losing a concurrent initialization race is fine; both catalogues are identical.
    let _ = REGISTRY.set(registry);

    Ok(())
}

/// The process-wide registry, initialized on first use.
pub fn global() -> UnitResult<&'static UnitRegistry> {
    if REGISTRY.get().is_none() {
        init_registry()?;
    }

    REGISTRY
        .get()
        .ok_or_else(|| UnitError::config("unit registry not initialized"))
}
