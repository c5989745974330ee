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


//! # LAMMPShade
//!
//! Reads the YAML-style dumps LAMMPS writes with `dump yaml` and
//! `thermo_modify line yaml`, one step at a time, and turns them into
//! XYZ trajectories and thermo tables.
//!
//! ## Quick Start
//!
//! ```rust
//! use lammpshade::stream::StepReader;
//! use std::io::Cursor;
//!
//! let dump = "\
//! ---
//! timestep: 100
//! units: real
//! natoms: 2
//! ...
//! ";
//!
//! let mut reader = StepReader::new(Cursor::new(dump));
//! let step = reader.get_next_step().expect("valid dump");
//! assert_eq!(step.timestep(), Some(100));
//! assert_eq!(step.units(), Some(lammpshade::UnitStyle::Real));
//!
//! // An exhausted reader keeps returning empty records.
//! assert!(reader.get_next_step().expect("valid dump").is_empty());
//! ```
//!
//! For whole-file work, [`Simulation`] streams a dump once and collects
//! the thermo table while writing the trajectory.
//!
//! ## Modules
//!
//! - [`stream`]: step-by-step dump reading
//! - [`xyz`]: extended XYZ trajectory output
//! - [`csv`]: thermo tables and CSV export
//! - [`lex`]: line classification
//! - [`units`]: LAMMPS unit styles and labels

pub use lammpshade_core::{
    coerce, format_float, Dialect, LineToken, Quantity, StepRecord, Thermo, UnitStyle,
    UnknownUnitStyle, Value, ValueMap,
};

mod error;
mod simulation;

pub use error::{LammpshadeError, Result, ResultExt};
pub use simulation::{ConversionSummary, Simulation};

pub mod lex {
    //! Line classification
    pub use lammpshade_core::lex::{
        classify, split_key_value, strip_dash_marker, Dialect, LineToken,
    };
}

pub mod units {
    //! LAMMPS unit styles
    pub use lammpshade_core::units::{strip_thermo_prefix, Quantity, UnitStyle, UnknownUnitStyle};
}

pub mod stream {
    //! Step-by-step dump reading
    pub use lammpshade_stream::{
        LineReader, StepParserConfig, StepReader, StreamError, StreamResult,
    };
}

pub mod xyz {
    //! Extended XYZ trajectory output
    pub use lammpshade_xyz::{comment_line, render_frame, XyzError, XyzWriter, COLUMN_ORDER};
}

pub mod csv {
    //! Thermo tables and CSV export
    pub use lammpshade_csv::{
        to_csv_string, to_csv_string_with_config, to_csv_writer, to_csv_writer_with_config,
        CsvError, ThermoTable, ToCsvConfig,
    };
}
