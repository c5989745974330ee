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


//! Thermo command - thermo output to CSV

use super::write_output;
use crate::error::CliError;
use lammpshade::csv::{to_csv_string_with_config, ToCsvConfig};
use lammpshade::{ResultExt, Simulation};
use std::path::Path;
use tracing::warn;

/// Collect the thermo output of `input` and write it as CSV.
///
/// With `units`, headers carry the labels of the unit style named by the
/// first step, e.g. `Time (fs)`. A dump without a unit style falls back to
/// plain headers.
///
/// # Errors
///
/// Returns `Err` if the dump cannot be read, holds no thermo output, or
/// its thermo keywords change between steps.
pub fn thermo(input: &Path, output: Option<&Path>, units: bool) -> Result<(), CliError> {
    let mut sim =
        Simulation::open(input).with_context(|| format!("opening {}", input.display()))?;

    sim.read_to_end()
        .with_context(|| format!("reading {}", input.display()))?;

    let units = match (units, sim.units()) {
        (false, _) => None,
        (true, None) => {
            warn!(input = %input.display(), "no unit style in dump, writing plain headers");
            None
        }
        (true, style) => style,
    };
    let table = sim.thermo_table()?.ok_or_else(|| CliError::NoThermo {
        path: input.to_path_buf(),
    })?;
    let config = ToCsvConfig {
        units,
        ..ToCsvConfig::default()
    };

    let csv = to_csv_string_with_config(table, config).context("writing thermo table")?;
    write_output(&csv, output)
}
