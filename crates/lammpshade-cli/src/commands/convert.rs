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


//! Convert command - dump to XYZ trajectory

use crate::error::CliError;
use lammpshade::{ResultExt, Simulation};
use std::path::Path;

/// Convert every step of `input` into a frame of the trajectory `output`.
///
/// Prints a one-line summary on success.
///
/// # Errors
///
/// Returns `Err` if:
/// - The input cannot be opened or read
/// - `output` does not end in `.xyz` or cannot be created
/// - A step lacks the fields a frame needs (`natoms`, `keywords`, `data`
///   with `x`, `y` and `z` columns)
pub fn convert(input: &Path, output: &Path) -> Result<(), CliError> {
    let mut sim =
        Simulation::open(input).with_context(|| format!("opening {}", input.display()))?;
    let summary = sim
        .convert_to_xyz(output)
        .with_context(|| format!("converting {}", input.display()))?;

    println!("Wrote {} frame(s) to {}", summary.frames, output.display());
    Ok(())
}
