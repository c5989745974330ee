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

//! Value model and line grammar for LAMMPS YAML dumps.
//!
//! LAMMPS writes `dump yaml` and `thermo_style yaml` output in a small,
//! line-oriented dialect: `---` opens a timestep block, `...` closes it, and
//! the lines in between are `key: value` pairs or dash lines belonging to the
//! key above them. This crate holds everything about that dialect that does
//! not touch I/O:
//!
//! - [`coerce`]: turns a raw token into an integer, float, flat list or string
//! - [`lex`]: classifies one raw line into a [`LineToken`]
//! - [`StepRecord`]: the ordered field map of one block, with typed accessors
//! - [`units`]: LAMMPS unit styles and labels for thermo columns
//!
//! The streaming reader lives in `lammpshade-stream`.
//!
//! ```
//! use lammpshade_core::lex::{classify, Dialect, LineToken};
//! use lammpshade_core::{coerce, Value};
//!
//! let dialect = Dialect::default();
//! match classify("natoms: 10", &dialect) {
//!     LineToken::KeyValue { key, value } => {
//!         assert_eq!(key, "natoms");
//!         assert_eq!(coerce(value), Value::Int(10));
//!     }
//!     other => panic!("unexpected token {:?}", other),
//! }
//! ```

mod coerce;
pub mod lex;
mod record;
pub mod units;
mod value;

pub use coerce::coerce;
pub use lex::{Dialect, LineToken};
pub use record::{StepRecord, Thermo};
pub use units::{Quantity, UnitStyle, UnknownUnitStyle};
pub use value::{format_float, Value, ValueMap};
