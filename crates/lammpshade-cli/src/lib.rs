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


//! LAMMPShade CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **convert**: write every step of a dump as a frame of an XYZ trajectory
//! - **thermo**: collect the thermo output of a dump into a CSV table
//! - **inspect**: print parsed steps as JSON lines
//!
//! # Examples
//!
//! ```no_run
//! use lammpshade_cli::commands::convert;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), lammpshade_cli::error::CliError> {
//! convert(Path::new("dump.yaml"), Path::new("dump.xyz"))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
