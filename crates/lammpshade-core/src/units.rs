// Dweve LAMMPShade - LAMMPS YAML dump reader
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! LAMMPS unit styles and axis labels for thermo quantities.
//!
//! The `units` field of a step names the unit style the simulation ran with.
//! This module maps that style and a thermo keyword onto a printable unit,
//! which the CSV exporter uses for annotated headers.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for a `units` value that is not a LAMMPS unit style.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit style '{0}'")]
pub struct UnknownUnitStyle(pub String);

/// A LAMMPS `units` style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitStyle {
    Lj,
    Real,
    Metal,
    Si,
    Cgs,
    Electron,
    Micro,
    Nano,
}

/// Physical quantities that thermo keywords commonly report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Time,
    Distance,
    Velocity,
    Force,
    Temperature,
    Energy,
    Pressure,
}

impl UnitStyle {
    /// All styles, in LAMMPS documentation order.
    pub const ALL: [UnitStyle; 8] = [
        UnitStyle::Lj,
        UnitStyle::Real,
        UnitStyle::Metal,
        UnitStyle::Si,
        UnitStyle::Cgs,
        UnitStyle::Electron,
        UnitStyle::Micro,
        UnitStyle::Nano,
    ];

    /// The name as written in a LAMMPS input script.
    pub fn name(self) -> &'static str {
        match self {
            Self::Lj => "lj",
            Self::Real => "real",
            Self::Metal => "metal",
            Self::Si => "si",
            Self::Cgs => "cgs",
            Self::Electron => "electron",
            Self::Micro => "micro",
            Self::Nano => "nano",
        }
    }

    /// Unit of `quantity` in this style. Empty for the reduced `lj` style.
    pub fn unit_of(self, quantity: Quantity) -> &'static str {
        use Quantity::*;
        match (self, quantity) {
            (Self::Lj, _) => "",

            (Self::Real, Time) => "fs",
            (Self::Real, Distance) => "Å",
            (Self::Real, Velocity) => "Å/fs",
            (Self::Real, Force) => "kcal/(mol·Å)",
            (Self::Real, Temperature) => "K",
            (Self::Real, Energy) => "kcal/mol",
            (Self::Real, Pressure) => "atm",

            (Self::Metal, Time) => "ps",
            (Self::Metal, Distance) => "Å",
            (Self::Metal, Velocity) => "Å/ps",
            (Self::Metal, Force) => "eV/Å",
            (Self::Metal, Temperature) => "K",
            (Self::Metal, Energy) => "eV",
            (Self::Metal, Pressure) => "bar",

            (Self::Si, Time) => "s",
            (Self::Si, Distance) => "m",
            (Self::Si, Velocity) => "m/s",
            (Self::Si, Force) => "N",
            (Self::Si, Temperature) => "K",
            (Self::Si, Energy) => "J",
            (Self::Si, Pressure) => "Pa",

            (Self::Cgs, Time) => "s",
            (Self::Cgs, Distance) => "cm",
            (Self::Cgs, Velocity) => "cm/s",
            (Self::Cgs, Force) => "dyne",
            (Self::Cgs, Temperature) => "K",
            (Self::Cgs, Energy) => "erg",
            (Self::Cgs, Pressure) => "dyne/cm²",

            (Self::Electron, Time) => "fs",
            (Self::Electron, Distance) => "Bohr",
            (Self::Electron, Velocity) => "Bohr/atu",
            (Self::Electron, Force) => "Hartree/Bohr",
            (Self::Electron, Temperature) => "K",
            (Self::Electron, Energy) => "Hartree",
            (Self::Electron, Pressure) => "Pa",

            (Self::Micro, Time) => "µs",
            (Self::Micro, Distance) => "µm",
            (Self::Micro, Velocity) => "µm/µs",
            (Self::Micro, Force) => "pg·µm/µs²",
            (Self::Micro, Temperature) => "K",
            (Self::Micro, Energy) => "pg·µm²/µs²",
            (Self::Micro, Pressure) => "pg/(µm·µs²)",

            (Self::Nano, Time) => "ns",
            (Self::Nano, Distance) => "nm",
            (Self::Nano, Velocity) => "nm/ns",
            (Self::Nano, Force) => "ag·nm/ns²",
            (Self::Nano, Temperature) => "K",
            (Self::Nano, Energy) => "ag·nm²/ns²",
            (Self::Nano, Pressure) => "ag/(nm·ns²)",
        }
    }

    /// Parenthesized unit label for a thermo keyword, e.g. `(fs)` for `Time`
    /// in `real` units. Empty when the keyword has no known quantity or the
    /// style is dimensionless.
    ///
    /// ```
    /// use lammpshade_core::UnitStyle;
    ///
    /// assert_eq!(UnitStyle::Real.label_for("Time"), "(fs)");
    /// assert_eq!(UnitStyle::Real.label_for("c_temp_up"), "(K)");
    /// assert_eq!(UnitStyle::Real.label_for("Step"), "");
    /// assert_eq!(UnitStyle::Lj.label_for("Time"), "");
    /// ```
    pub fn label_for(self, keyword: &str) -> String {
        match Quantity::for_keyword(keyword).map(|q| self.unit_of(q)) {
            Some(unit) if !unit.is_empty() => format!("({})", unit),
            _ => String::new(),
        }
    }
}

impl FromStr for UnitStyle {
    type Err = UnknownUnitStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownUnitStyle(name.to_string()))
    }
}

impl fmt::Display for UnitStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Quantity {
    /// Guess the quantity a thermo keyword reports.
    ///
    /// The `c_` and `v_` prefixes of computes and variables are ignored, and
    /// matching is case-insensitive: `Temp` and `c_temp_up` are temperatures,
    /// `v_vcmy_glicerol` is a velocity, `v_fcmx_diamup` a force. `Step` and
    /// unknown names give `None`.
    pub fn for_keyword(keyword: &str) -> Option<Quantity> {
        let name = strip_thermo_prefix(keyword).to_ascii_lowercase();
        let name = name.as_str();

        if name == "step" {
            return None;
        }
        if name == "time" || name == "dt" || name == "elapsed" {
            return Some(Self::Time);
        }
        if name.contains("temp") {
            return Some(Self::Temperature);
        }
        if name.contains("press") {
            return Some(Self::Pressure);
        }
        if matches!(name, "vx" | "vy" | "vz") || name.starts_with("vcm") || name.contains("vel") {
            return Some(Self::Velocity);
        }
        if matches!(name, "fx" | "fy" | "fz") || name.starts_with("fcm") || name.contains("force")
        {
            return Some(Self::Force);
        }
        if name.contains("eng") || name.starts_with("e_") || name == "enthalpy" || name == "ecouple"
        {
            return Some(Self::Energy);
        }
        if matches!(
            name,
            "x" | "y" | "z" | "lx" | "ly" | "lz" | "xlo" | "xhi" | "ylo" | "yhi" | "zlo" | "zhi"
        ) {
            return Some(Self::Distance);
        }

        None
    }
}

/// Drop a leading `c_` (compute) or `v_` (variable) reference prefix.
///
/// ```
/// use lammpshade_core::units::strip_thermo_prefix;
///
/// assert_eq!(strip_thermo_prefix("c_temp"), "temp");
/// assert_eq!(strip_thermo_prefix("v_vel"), "vel");
/// assert_eq!(strip_thermo_prefix("Temp"), "Temp");
/// ```
pub fn strip_thermo_prefix(keyword: &str) -> &str {
    keyword
        .strip_prefix("c_")
        .or_else(|| keyword.strip_prefix("v_"))
        .unwrap_or(keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unit_style() {
        assert_eq!("real".parse::<UnitStyle>(), Ok(UnitStyle::Real));
        assert_eq!(" metal ".parse::<UnitStyle>(), Ok(UnitStyle::Metal));
        assert_eq!("LJ".parse::<UnitStyle>(), Ok(UnitStyle::Lj));
    }

    #[test]
    fn test_parse_unknown_unit_style() {
        let err = "imperial".parse::<UnitStyle>().unwrap_err();
        assert_eq!(err, UnknownUnitStyle("imperial".to_string()));
        assert_eq!(err.to_string(), "unknown unit style 'imperial'");
    }

    #[test]
    fn test_name_round_trips() {
        for style in UnitStyle::ALL {
            assert_eq!(style.name().parse::<UnitStyle>(), Ok(style));
            assert_eq!(style.to_string(), style.name());
        }
    }

    #[test]
    fn test_real_units() {
        assert_eq!(UnitStyle::Real.label_for("Time"), "(fs)");
        assert_eq!(UnitStyle::Real.label_for("velocity"), "(Å/fs)");
        assert_eq!(UnitStyle::Real.label_for("force"), "(kcal/(mol·Å))");
        assert_eq!(UnitStyle::Real.label_for("temperature"), "(K)");
        assert_eq!(UnitStyle::Real.label_for("other"), "");
    }

    #[test]
    fn test_metal_units() {
        assert_eq!(UnitStyle::Metal.label_for("Time"), "(ps)");
        assert_eq!(UnitStyle::Metal.label_for("TotEng"), "(eV)");
        assert_eq!(UnitStyle::Metal.label_for("Press"), "(bar)");
    }

    #[test]
    fn test_lj_is_dimensionless() {
        for quantity in [
            Quantity::Time,
            Quantity::Distance,
            Quantity::Velocity,
            Quantity::Force,
            Quantity::Temperature,
            Quantity::Energy,
            Quantity::Pressure,
        ] {
            assert_eq!(UnitStyle::Lj.unit_of(quantity), "");
        }
        assert_eq!(UnitStyle::Lj.label_for("Temp"), "");
    }

    #[test]
    fn test_every_dimensional_style_has_units() {
        for style in UnitStyle::ALL.into_iter().filter(|s| *s != UnitStyle::Lj) {
            assert!(!style.unit_of(Quantity::Time).is_empty(), "{}", style);
            assert_eq!(style.unit_of(Quantity::Temperature), "K");
        }
    }

    #[test]
    fn test_quantity_for_keyword() {
        assert_eq!(Quantity::for_keyword("Step"), None);
        assert_eq!(Quantity::for_keyword("Time"), Some(Quantity::Time));
        assert_eq!(Quantity::for_keyword("Temp"), Some(Quantity::Temperature));
        assert_eq!(Quantity::for_keyword("c_temp_glicerol"), Some(Quantity::Temperature));
        assert_eq!(Quantity::for_keyword("v_vcmy_diamup"), Some(Quantity::Velocity));
        assert_eq!(Quantity::for_keyword("v_fcmz_glicerol"), Some(Quantity::Force));
        assert_eq!(Quantity::for_keyword("E_pair"), Some(Quantity::Energy));
        assert_eq!(Quantity::for_keyword("PotEng"), Some(Quantity::Energy));
        assert_eq!(Quantity::for_keyword("Lx"), Some(Quantity::Distance));
        assert_eq!(Quantity::for_keyword("Volume"), None);
    }

    #[test]
    fn test_strip_thermo_prefix_only_once() {
        assert_eq!(strip_thermo_prefix("c_v_x"), "v_x");
        assert_eq!(strip_thermo_prefix("c_"), "");
        assert_eq!(strip_thermo_prefix("cv"), "cv");
    }
}
