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

//! One simulation dump, read once.

use crate::error::{Result, ResultExt};
use lammpshade_core::{StepRecord, UnitStyle};
use lammpshade_csv::ThermoTable;
use lammpshade_stream::{StepParserConfig, StepReader};
use lammpshade_xyz::XyzWriter;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Frames written to the trajectory.
    pub frames: usize,
    /// Thermo rows collected while converting.
    pub thermo_rows: usize,
    /// Output file, when the conversion wrote to a path.
    pub output: Option<PathBuf>,
}

/// A LAMMPS dump together with the thermo output collected from it.
///
/// The dump is streamed exactly once. Whatever consumes the steps first
/// ([`convert_to_xyz`](Self::convert_to_xyz) or
/// [`thermo_table`](Self::thermo_table)) collects the thermo table on the
/// way, so asking for the table after a conversion costs nothing.
///
/// ```
/// use lammpshade::Simulation;
/// use lammpshade_test::fixtures;
/// use std::io::Cursor;
///
/// let mut sim = Simulation::from_reader(Cursor::new(fixtures::full_dump()));
/// let mut out = lammpshade::xyz::XyzWriter::new(Vec::new());
///
/// let summary = sim.convert_to_writer(&mut out).unwrap();
/// assert_eq!(summary.frames, 2);
///
/// let table = sim.thermo_table().unwrap().unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(sim.unit_label("Temp"), "(K)");
/// ```
pub struct Simulation<R: Read> {
    reader: StepReader<R>,
    thermo: ThermoTable,
    units: Option<UnitStyle>,
    steps_seen: usize,
}

impl Simulation<File> {
    /// Open a dump file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_step_reader(StepReader::open(path)?))
    }

    /// Open a dump file with a custom reader configuration.
    pub fn open_with_config(path: impl AsRef<Path>, config: StepParserConfig) -> Result<Self> {
        Ok(Self::from_step_reader(StepReader::open_with_config(
            path, config,
        )?))
    }
}

impl<R: Read> Simulation<R> {
    /// Read a dump from any source.
    pub fn from_reader(reader: R) -> Self {
        Self::from_step_reader(StepReader::new(reader))
    }

    /// Wrap an existing step reader.
    pub fn from_step_reader(reader: StepReader<R>) -> Self {
        Self {
            reader,
            thermo: ThermoTable::new(),
            units: None,
            steps_seen: 0,
        }
    }

    /// Unit style named by the first step, once a step has been read.
    pub fn units(&self) -> Option<UnitStyle> {
        self.units
    }

    /// Unit label for a thermo keyword, e.g. `(fs)` for `Time` in `real`
    /// units. Empty when the units or the keyword's quantity are unknown.
    pub fn unit_label(&self, keyword: &str) -> String {
        self.units
            .map(|style| style.label_for(keyword))
            .unwrap_or_default()
    }

    /// Number of steps read from the dump so far.
    pub fn steps_seen(&self) -> usize {
        self.steps_seen
    }

    /// Convert every remaining step into an XYZ trajectory at `output`.
    pub fn convert_to_xyz(&mut self, output: impl AsRef<Path>) -> Result<ConversionSummary> {
        let output = output.as_ref();
        let mut writer = XyzWriter::create(output)?;
        let mut summary = self.convert_to_writer(&mut writer)?;
        writer
            .finish()
            .with_context(|| format!("flushing {}", output.display()))?;

        summary.output = Some(output.to_path_buf());
        Ok(summary)
    }

    /// Convert every remaining step into frames of `writer`.
    ///
    /// Steps already consumed by an earlier call are not written again.
    pub fn convert_to_writer<W: Write>(
        &mut self,
        writer: &mut XyzWriter<W>,
    ) -> Result<ConversionSummary> {
        let start_frames = writer.frames_written();

        while let Some(step) = self.next_step()? {
            let index = self.steps_seen - 1;
            writer
                .write_step(&step)
                .with_context(|| describe_step(&step, index))?;
        }

        let frames = writer.frames_written() - start_frames;
        info!(frames, thermo_rows = self.thermo.len(), "conversion finished");
        Ok(ConversionSummary {
            frames,
            thermo_rows: self.thermo.len(),
            output: None,
        })
    }

    /// The thermo table of the whole dump.
    ///
    /// Reads any steps not yet consumed. Returns `None` when no step
    /// carried thermo output.
    pub fn thermo_table(&mut self) -> Result<Option<&ThermoTable>> {
        self.read_to_end()?;

        if self.thermo.is_empty() {
            Ok(None)
        } else {
            Ok(Some(&self.thermo))
        }
    }

    /// Read the remaining steps without writing them anywhere.
    pub fn read_to_end(&mut self) -> Result<()> {
        while self.next_step()?.is_some() {}
        Ok(())
    }

    /// Read the next step, recording its units and thermo row.
    fn next_step(&mut self) -> Result<Option<StepRecord>> {
        let Some(step) = self.reader.next() else {
            return Ok(None);
        };
        let step = step.with_context(|| format!("reading step {}", self.steps_seen))?;

        if self.steps_seen == 0 {
            self.units = step.units();
        }
        self.thermo
            .push(&step)
            .with_context(|| describe_step(&step, self.steps_seen))?;

        debug!(index = self.steps_seen, timestep = ?step.timestep(), "processed step");
        self.steps_seen += 1;
        Ok(Some(step))
    }
}

fn describe_step(step: &StepRecord, index: usize) -> String {
    match step.timestep() {
        Some(timestep) => format!("step {} (timestep {})", index, timestep),
        None => format!("step {}", index),
    }
}
