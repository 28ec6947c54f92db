//! `pval` command-line tool.
//!
//! Inspects the unit registry and converts values between units.
//!
//! # Usage
//!
//! ```bash
//! pval units --json
//! pval show kN
//! pval convert 26.2 mi km
//! pval --units-file extra.toml show furlong
//! ```
//!
//! # Environment Variables
//!
//! - `PVAL_UNITS_FILE`: extra unit definitions loaded before the command runs
//! - `RUST_LOG`: Log level (default: warn)

use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use pval::{Exponent, Quantity, UnitEntry, UnitRegistry, UnitsConfig, PREFIXES};

#[derive(Parser)]
#[command(name = "pval")]
#[command(about = "Physical values with dimensional analysis", long_about = None)]
struct Cli {
    /// Extra unit definitions (TOML) to load before running the command
    #[arg(long, global = true, env = "PVAL_UNITS_FILE")]
    units_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered units
    Units {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show a single unit, synthesizing prefixed names if needed
    Show {
        /// Unit name, e.g. `N` or `kPa`
        name: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Express `value` in unit `from` as a number of `to`
    Convert {
        value: f64,
        from: String,
        to: String,
    },
    /// List the metric prefixes
    Prefixes,
}

/// Serialized form of a registry entry.
#[derive(Debug, Serialize)]
struct UnitRow {
    name: String,
    value: f64,
    exponents: BTreeMap<&'static str, String>,
    prefixable: bool,
}

impl UnitRow {
    fn new(name: &str, entry: &UnitEntry) -> Self {
        Self {
            name: name.to_string(),
            value: entry.quantity.value(),
            exponents: exponents(&entry.quantity),
            prefixable: entry.can_prefix,
        }
    }

    fn symbol(&self) -> String {
        let dims = self.exponents.iter().map(|(k, v)| format!("{}^{}", k, v));
        dims.collect::<Vec<_>>().join(" ")
    }

    fn render(&self) -> String {
        let flag = if self.prefixable { " (prefixable)" } else { "" };
        format!("{:<10} {:>24e}  {}{}", self.name, self.value, self.symbol(), flag)
    }
}

fn exponents(q: &Quantity) -> BTreeMap<&'static str, String> {
    q.unit()
        .iter()
        .filter(|(_, e)| *e != Exponent::from(0))
        .map(|(d, e)| (d.keyword(), e.to_string()))
        .collect()
}

fn load_registry(units_file: Option<&PathBuf>) -> anyhow::Result<&'static UnitRegistry> {
    let registry = pval::global().context("Failed to initialize unit registry")?;
    if let Some(path) = units_file {
        let config = UnitsConfig::from_file(path)
            .with_context(|| format!("Failed to load unit definitions from {}", path.display()))?;
        config
            .apply(registry)
            .with_context(|| format!("Failed to apply unit definitions from {}", path.display()))?;
        debug!("Loaded {} extra units from {}", config.units.len(), path.display());
    }
    Ok(registry)
}

fn convert(registry: &UnitRegistry, value: f64, from: &str, to: &str) -> anyhow::Result<f64> {
    let source = registry
        .lookup(from)
        .with_context(|| format!("Unknown source unit '{}'", from))?;
    let amount = value * source;
    registry
        .convert(amount, to)
        .with_context(|| format!("Cannot express {} in '{}'", from, to))
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = load_registry(cli.units_file.as_ref())?;

    match cli.command {
        Commands::Units { json } => {
            let rows: Vec<UnitRow> = registry
                .entries()
                .iter()
                .map(|(name, entry)| UnitRow::new(name, entry))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in &rows {
                    println!("{}", row.render());
                }
            }
        }
        Commands::Show { name, json } => {
            let quantity = registry
                .lookup(&name)
                .with_context(|| format!("Unknown unit '{}'", name))?;
            let entry = registry.get(&name).unwrap_or(UnitEntry {
                quantity,
                can_prefix: false,
            });
            let row = UnitRow::new(&name, &entry);
            if json {
                println!("{}", serde_json::to_string_pretty(&row)?);
            } else {
                println!("{} = {}", name, entry.quantity);
                println!("{}", row.render());
            }
        }
        Commands::Convert { value, from, to } => {
            let result = convert(registry, value, &from, &to)?;
            println!("{} {} = {} {}", value, from, result, to);
        }
        Commands::Prefixes => {
            for prefix in PREFIXES.iter() {
                println!("{}  {:<6} {:e}", prefix.symbol, prefix.name, prefix.factor);
            }
        }
    }

    Ok(())
}
