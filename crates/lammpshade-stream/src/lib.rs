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

//! Streaming reader for LAMMPS YAML dumps.
//!
//! LAMMPS appends one `---` ... `...` block per dumped timestep, so a
//! trajectory file grows with the run length. [`StepReader`] pulls one block
//! at a time from any [`Read`](std::io::Read) source and hands it back as a
//! [`StepRecord`]; only the current line and the record being assembled are
//! kept in memory.
//!
//! ```rust,no_run
//! use lammpshade_stream::StepReader;
//!
//! # fn main() -> Result<(), lammpshade_stream::StreamError> {
//! let reader = StepReader::open("dump.yaml")?;
//!
//! for step in reader {
//!     let step = step?;
//!     println!("timestep {:?}: {} atoms", step.timestep(), step.natoms().unwrap_or(0));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Calls to [`StepReader::get_next_step`] can also be interleaved with other
//! work; the reader resumes exactly where the previous call stopped and
//! returns empty records once the input is exhausted.

mod error;
mod parser;
mod reader;

pub use error::{StreamError, StreamResult};
pub use parser::{StepParserConfig, StepReader};
pub use reader::LineReader;

/// Re-export core types for convenience.
pub use lammpshade_core::{Dialect, StepRecord, Value};
