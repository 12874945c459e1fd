// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Immutable unit-symbol table.
//!
//! Built once at process start and passed by reference; never mutated
//! after construction. Maps the model's SI unit names to display symbols
//! and base-unit multipliers.

use rustc_hash::FxHashMap;

/// SI prefix multipliers as defined in the IFC specification.
#[inline]
pub fn si_prefix_multiplier(prefix: &str) -> f64 {
    match prefix {
        "ATTO" => 1e-18,
        "FEMTO" => 1e-15,
        "PICO" => 1e-12,
        "NANO" => 1e-9,
        "MICRO" => 1e-6,
        "MILLI" => 1e-3, // most common: millimeters
        "CENTI" => 1e-2,
        "DECI" => 1e-1,
        "DECA" => 1e1,
        "HECTO" => 1e2,
        "KILO" => 1e3,
        "MEGA" => 1e6,
        "GIGA" => 1e9,
        "TERA" => 1e12,
        "PETA" => 1e15,
        "EXA" => 1e18,
        _ => 1.0, // no prefix or unknown = base unit
    }
}

/// One measure unit: its display symbol and multiplier to the base unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitEntry {
    pub symbol: &'static str,
    pub to_base: f64,
}

/// Lookup table from SI unit names to symbols and multipliers.
#[derive(Debug)]
pub struct UnitTable {
    entries: FxHashMap<&'static str, UnitEntry>,
}

impl UnitTable {
    /// The standard table covering the unit names building models use.
    pub fn standard() -> Self {
        let mut entries = FxHashMap::default();
        let mut add = |name, symbol, to_base| {
            entries.insert(name, UnitEntry { symbol, to_base });
        };

        add("METRE", "m", 1.0);
        add("SQUARE_METRE", "m²", 1.0);
        add("CUBIC_METRE", "m³", 1.0);
        add("GRAM", "g", 1e-3); // base mass unit is the kilogram
        add("SECOND", "s", 1.0);
        add("RADIAN", "rad", 1.0);
        add("DEGREE", "°", std::f64::consts::PI / 180.0);
        add("KELVIN", "K", 1.0);
        add("WATT", "W", 1.0);
        add("NEWTON", "N", 1.0);
        add("PASCAL", "Pa", 1.0);
        add("LUMEN", "lm", 1.0);
        add("LUX", "lx", 1.0);

        Self { entries }
    }

    /// Looks up a unit by its SI name.
    pub fn get(&self, name: &str) -> Option<UnitEntry> {
        self.entries.get(name).copied()
    }

    /// Display symbol for a unit name.
    pub fn symbol(&self, name: &str) -> Option<&'static str> {
        self.get(name).map(|e| e.symbol)
    }

    /// Multiplier to the base unit for an optionally prefixed unit, e.g.
    /// `("MILLI", "METRE")` → `1e-3`.
    pub fn scale(&self, prefix: Option<&str>, name: &str) -> Option<f64> {
        let entry = self.get(name)?;
        let prefix_multiplier = prefix.map(si_prefix_multiplier).unwrap_or(1.0);
        Some(prefix_multiplier * entry.to_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millimetre_scale() {
        let table = UnitTable::standard();
        assert_eq!(table.scale(Some("MILLI"), "METRE"), Some(1e-3));
        assert_eq!(table.scale(None, "METRE"), Some(1.0));
    }

    #[test]
    fn symbols_resolve() {
        let table = UnitTable::standard();
        assert_eq!(table.symbol("CUBIC_METRE"), Some("m³"));
        assert_eq!(table.symbol("FURLONG"), None);
    }

    #[test]
    fn unknown_prefix_falls_back_to_base() {
        assert_eq!(si_prefix_multiplier("NOT_A_PREFIX"), 1.0);
        assert_eq!(si_prefix_multiplier("KILO"), 1e3);
    }
}
