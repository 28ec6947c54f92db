//! The standard unit catalogue.
//!
//! Every unit after the seven base units is ordinary quantity arithmetic over units defined before it, in this
//! order: base units, synonyms and scaled units, angle and time, volume, SI derived, then imperial and customary.
//!
//! Imperial masses use the international avoirdupois definitions (`lb = 0.45359237 kg`), so `oz` is exactly
//! `28.349523125 g`. Older tables that round the ounce to `28.375 g` will not agree with this catalogue.

use core::f64::consts::PI;

use pval_core::{BaseDimension, Dimensions, Quantity, Value};

use crate::definition::UnitSpec;
use crate::error::UnitResult;
use crate::registry::RegistryState;

pub(crate) fn install(state: &mut RegistryState) -> UnitResult<()> {
    base_units(state)?;
    scaled_units(state)?;
    angle_and_time(state)?;
    volume(state)?;
    si_derived(state)?;
    imperial(state)?;
    Ok(())
}

fn alias(state: &mut RegistryState, names: &[&str], target: &str) -> UnitResult<()> {
    let q = state.resolve(target)?;
    for name in names {
        state.define(name, UnitSpec::from(q))?;
    }
    Ok(())
}

fn base_units(state: &mut RegistryState) -> UnitResult<()> {
    for (name, dim, can_prefix) in [
        ("m", BaseDimension::Length, true),
        ("kg", BaseDimension::Mass, false),
        ("s", BaseDimension::Time, true),
        ("C", BaseDimension::Charge, true),
        ("K", BaseDimension::Temperature, false),
        ("cd", BaseDimension::Illuminance, true),
        ("rad", BaseDimension::Angle, true),
    ] {
        state.define(
            name,
            UnitSpec::new(1.0)
                .unit(Dimensions::of(dim))
                .can_prefix(can_prefix),
        )?;
    }
    Ok(())
}

fn scaled_units(state: &mut RegistryState) -> UnitResult<()> {
    let kg = state.resolve("kg")?;
    state.define("g", UnitSpec::new(kg / 1000.0).prefixable())?;

    let s = state.resolve("s")?;
    state.define("sec", UnitSpec::new(s).prefixable())?;

    let coulomb = state.resolve("C")?;
    state.define("coul", UnitSpec::new(coulomb).prefixable())?;

    state.define("tonne", UnitSpec::new(1000.0).unit(kg))?;
    Ok(())
}

fn angle_and_time(state: &mut RegistryState) -> UnitResult<()> {
    let rad = state.resolve("rad")?;
    state.define("deg", UnitSpec::new(rad * PI / 180.0))?;
    state.define("sr", UnitSpec::new(rad.powi(2)?))?;
    state.define("rev", UnitSpec::new(2.0 * PI).unit(rad))?;

    let sec = state.resolve("sec")?;
    for (name, seconds) in [
        ("min", 60.0),
        ("hr", 3600.0),
        ("day", 86400.0),
        ("week", 604800.0),
    ] {
        state.define(name, UnitSpec::new(seconds).unit(sec))?;
    }
    Ok(())
}

fn volume(state: &mut RegistryState) -> UnitResult<()> {
    let m = state.resolve("m")?;
    state.define("L", UnitSpec::new(0.001 * m.powi(3)?).prefixable())?;
    let litre = state.resolve("L")?;
    state.define("l", UnitSpec::new(litre).prefixable())?;
    alias(state, &["litre", "liter"], "L")
}

fn si_derived(state: &mut RegistryState) -> UnitResult<()> {
    let m = state.resolve("m")?;
    let kg = state.resolve("kg")?;
    let sec = state.resolve("sec")?;
    let coul = state.resolve("coul")?;
    let cd = state.resolve("cd")?;
    let sr = state.resolve("sr")?;

    derived(state, "Hz", 1.0 / sec)?;
    let newton = derived(state, "N", m * kg / sec.powi(2)?)?;
    let joule = derived(state, "J", newton * m)?;
    derived(state, "W", joule / sec)?;
    let pascal = derived(state, "Pa", newton / m.powi(2)?)?;
    let amp = derived(state, "A", coul / sec)?;
    let volt = derived(state, "V", joule / coul)?;
    derived(state, "F", coul / volt)?;
    derived(state, "Ohm", volt / amp)?;
    let lumen = derived(state, "lm", cd * sr)?;
    derived(state, "lx", lumen / m.powi(2)?)?;

    state.define("bar", UnitSpec::new(1e5).unit(pascal))?;
    state.define("atm", UnitSpec::new(101_325.0).unit(pascal))?;

    alias(state, &["hertz"], "Hz")?;
    alias(state, &["newton"], "N")?;
    alias(state, &["joule"], "J")?;
    alias(state, &["watt"], "W")?;
    alias(state, &["pascal"], "Pa")?;
    alias(state, &["amp", "ampere"], "A")?;
    alias(state, &["volt"], "V")?;
    alias(state, &["farad"], "F")?;
    alias(state, &["ohm"], "Ohm")?;
    alias(state, &["lumen"], "lm")?;
    alias(state, &["lux"], "lx")?;
    Ok(())
}

/// Registers a prefixable SI unit.
fn derived(state: &mut RegistryState, name: &str, value: Value) -> UnitResult<Quantity> {
    state.define(name, UnitSpec::new(value).prefixable())
}

fn imperial(state: &mut RegistryState) -> UnitResult<()> {
    // length
    let cm = state.resolve("cm")?;
    let inch = state.define("inch", UnitSpec::new(2.54).unit(cm))?;
    let ft = state.define("ft", UnitSpec::new(12.0).unit(inch))?;
    let yd = state.define("yd", UnitSpec::new(3.0).unit(ft))?;
    let mi = state.define("mi", UnitSpec::new(1760.0).unit(yd))?;
    state.define("league", UnitSpec::new(3.0).unit(mi))?;
    let m = state.resolve("m")?;
    let nmi = state.define("nmi", UnitSpec::new(1852.0).unit(m))?;

    // area
    state.define("acre", UnitSpec::new(4840.0 * yd.powi(2)?))?;

    // volume
    let pt = state.define("pt", UnitSpec::new(28.875 * inch.powi(3)?))?;
    let qt = state.define("qt", UnitSpec::new(2.0).unit(pt))?;
    state.define("gal", UnitSpec::new(4.0).unit(qt))?;
    state.define("fl_oz", UnitSpec::new(pt / 16.0))?;

    // weight
    let g = state.resolve("g")?;
    let oz = state.define("oz", UnitSpec::new(28.349523125).unit(g))?;
    let lb = state.define("lb", UnitSpec::new(16.0).unit(oz))?;
    state.define("ton", UnitSpec::new(2000.0).unit(lb))?;

    // force, energy, power
    let newton = state.resolve("N")?;
    let lbf = state.define("lbf", UnitSpec::new(4.44822162).unit(newton))?;
    let joule = state.resolve("J")?;
    state.define("BTU", UnitSpec::new(1055.05585).unit(joule))?;
    let watt = state.resolve("W")?;
    state.define("hp", UnitSpec::new(745.699872).unit(watt))?;

    // compound
    state.define("psi", UnitSpec::new(lbf / inch.powi(2)?))?;
    let hr = state.resolve("hr")?;
    state.define("mph", UnitSpec::new(mi / hr))?;
    state.define("knot", UnitSpec::new(nmi / hr))?;

    alias(state, &["foot", "feet"], "ft")?;
    alias(state, &["yard", "yards"], "yd")?;
    alias(state, &["mile", "miles"], "mi")?;
    alias(state, &["pint"], "pt")?;
    alias(state, &["quart"], "qt")?;
    alias(state, &["gallon"], "gal")?;
    alias(state, &["ounce"], "oz")?;
    alias(state, &["pound"], "lb")?;
    Ok(())
}
