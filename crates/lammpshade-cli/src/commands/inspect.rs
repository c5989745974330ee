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


//! Inspect command - parsed steps as JSON lines

use crate::error::CliError;
use lammpshade::stream::StepReader;
use lammpshade::ResultExt;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Print each step of `input` as one JSON object per line.
///
/// Keys keep the order they have in the dump. Steps are read lazily, so
/// `limit` stops reading the file as soon as enough steps were printed.
///
/// # Examples
///
/// ```no_run
/// use lammpshade_cli::commands::inspect;
/// use std::path::Path;
///
/// # fn main() -> Result<(), lammpshade_cli::error::CliError> {
/// // {"timestep":0,"units":"real","natoms":3,...}
/// inspect(Path::new("dump.yaml"), Some(1))?;
/// # Ok(())
/// # }
/// ```
pub fn inspect(input: &Path, limit: Option<usize>) -> Result<(), CliError> {
    let reader = StepReader::open(input).with_context(|| format!("opening {}", input.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut printed = 0;

    for step in reader.take(limit.unwrap_or(usize::MAX)) {
        let step =
            step.with_context(|| format!("reading step {} of {}", printed, input.display()))?;
        serde_json::to_writer(&mut out, &step)?;
        writeln!(out).map_err(|e| CliError::io_error("-", e))?;
        printed += 1;
    }

    out.flush().map_err(|e| CliError::io_error("-", e))?;
    debug!(steps = printed, "inspect finished");
    Ok(())
}
