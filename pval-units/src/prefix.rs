//! Metric prefixes recognised during lookup.

/// A single-character metric prefix and its multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prefix {
    /// Character placed in front of the unit name.
    pub symbol: char,
    /// Full prefix name, e.g. `kilo`.
    pub name: &'static str,
    /// Power-of-ten multiplier.
    pub factor: f64,
}

const fn prefix(symbol: char, name: &'static str, factor: f64) -> Prefix {
    Prefix {
        symbol,
        name,
        factor,
    }
}

/// Every supported prefix, smallest first. Both `u` and `µ` mean micro.
pub const PREFIXES: [Prefix; 17] = [
    prefix('f', "femto", 1e-15),
    prefix('p', "pico", 1e-12),
    prefix('n', "nano", 1e-9),
    prefix('u', "micro", 1e-6),
    prefix('µ', "micro", 1e-6),
    prefix('m', "milli", 1e-3),
    prefix('c', "centi", 1e-2),
    prefix('d', "deci", 1e-1),
    prefix('h', "hecto", 1e2),
    prefix('k', "kilo", 1e3),
    prefix('M', "mega", 1e6),
    prefix('G', "giga", 1e9),
    prefix('T', "tera", 1e12),
    prefix('P', "peta", 1e15),
    prefix('E', "exa", 1e18),
    prefix('Z', "zetta", 1e21),
    prefix('Y', "yotta", 1e24),
];

/// Multiplier for a prefix symbol.
pub fn factor(symbol: char) -> Option<f64> {
    PREFIXES.iter().find(|p| p.symbol == symbol).map(|p| p.factor)
}

/// Splits `name` into a prefix and a non-empty remainder, if the first character is a known prefix.
pub fn split(name: &str) -> Option<(f64, &str)> {
    let mut chars = name.chars();
    let first = chars.next()?;
    let base = chars.as_str();
    if base.is_empty() {
        return None;
    }
    factor(first).map(|f| (f, base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_lookup() {
        assert_eq!(factor('k'), Some(1e3));
        assert_eq!(factor('µ'), factor('u'));
        assert_eq!(factor('q'), None);
    }

    #[test]
    fn test_split_needs_a_base() {
        assert_eq!(split("km"), Some((1e3, "m")));
        assert_eq!(split("µs"), Some((1e-6, "s")));
        assert_eq!(split("k"), None);
        assert_eq!(split(""), None);
        assert_eq!(split("qjunk"), None);
    }
}
