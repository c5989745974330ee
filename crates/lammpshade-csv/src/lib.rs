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

//! Thermo tables and CSV export for LAMMPS dump steps.
//!
//! [`ThermoTable`] collects the `thermo` sub-record of every step into
//! columns; [`to_csv_writer`] and friends write it out for spreadsheets
//! and plotting scripts, optionally with unit labels in the header.

mod error;
mod thermo;
mod to_csv;

pub use error::{CsvError, Result};
pub use thermo::ThermoTable;
pub use to_csv::{
    to_csv_string, to_csv_string_with_config, to_csv_writer, to_csv_writer_with_config,
    ToCsvConfig,
};
