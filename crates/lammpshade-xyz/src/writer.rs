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

//! Frame-by-frame XYZ writer.
//!
//! Each step becomes one frame:
//!
//! ```text
//! 3
//! Step=0; Time=0; Box=[0, 10], [0, 10], [-5, 5]; Temp=300.0134
//! O 1.5 2 0.25 0.001 -0.002 0 1
//! H 2.25 2 0.25 0 0 0.004 2
//! H 0.75 2 0.25 -0.001 0.003 0 2
//! ```
//!
//! The first line is the atom count, the second carries the thermo output
//! and box, and each atom row lists the columns of [`COLUMN_ORDER`] that the
//! dump provides.

use crate::error::{Result, XyzError};
use lammpshade_core::units::strip_thermo_prefix;
use lammpshade_core::{StepRecord, Value};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Atom columns written to each row, in output order. Columns the dump does
/// not provide are left out.
pub const COLUMN_ORDER: [&str; 11] = [
    "element", "x", "y", "z", "vx", "vy", "vz", "fx", "fy", "fz", "type",
];

/// Columns every frame needs.
const REQUIRED_COLUMNS: [&str; 3] = ["x", "y", "z"];

/// Streams step records to an XYZ trajectory.
///
/// # Example
///
/// ```
/// use lammpshade_core::Value;
/// use lammpshade_test::StepBuilder;
/// use lammpshade_xyz::XyzWriter;
///
/// let step = StepBuilder::new()
///     .natoms(1)
///     .keywords(&["id", "element", "x", "y", "z"])
///     .row(vec![Value::Int(1), "Ar".into(), Value::Float(0.5), Value::Int(1), Value::Int(2)])
///     .build();
///
/// let mut writer = XyzWriter::new(Vec::new());
/// writer.write_step(&step).unwrap();
/// let bytes = writer.finish().unwrap();
///
/// assert_eq!(String::from_utf8(bytes).unwrap(), "1\n\nAr 0.5 1 2\n");
/// ```
#[derive(Debug)]
pub struct XyzWriter<W: Write> {
    out: W,
    frames: usize,
}

impl XyzWriter<BufWriter<File>> {
    /// Create (or truncate) an `.xyz` file.
    ///
    /// # Errors
    ///
    /// `XyzError::InvalidExtension` unless the path ends in `.xyz`, and
    /// `XyzError::Io` if the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.extension().and_then(|ext| ext.to_str()) != Some("xyz") {
            return Err(XyzError::InvalidExtension {
                path: path.to_path_buf(),
            });
        }

        let file = File::create(path)?;
        debug!(path = %path.display(), "created xyz output");
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> XyzWriter<W> {
    /// Wrap any writer.
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> usize {
        self.frames
    }

    /// Borrow the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Write one step as a frame.
    ///
    /// # Errors
    ///
    /// - `MissingField` if `natoms`, `keywords` or `data` is absent
    /// - `InvalidField` if one of them has the wrong shape
    /// - `MissingColumn` if `keywords` lacks `x`, `y` or `z`
    /// - `RowShape` if an atom row is shorter than `keywords`
    pub fn write_step(&mut self, step: &StepRecord) -> Result<()> {
        let frame = render_frame(step)?;
        self.out.write_all(frame.as_bytes())?;
        self.frames += 1;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        debug!(frames = self.frames, "finished xyz output");
        Ok(self.out)
    }
}

/// Render a complete frame, including the trailing newline.
pub fn render_frame(step: &StepRecord) -> Result<String> {
    let natoms = natoms(step)?;
    let keywords = step
        .keywords()
        .ok_or_else(|| missing_or_invalid(step, "keywords", "a list of column names"))?;
    let rows = step
        .atom_data()
        .ok_or_else(|| missing_or_invalid(step, "data", "a list of atom rows"))?;

    let columns = select_columns(keywords)?;

    if rows.len() as u64 != natoms {
        warn!(
            timestep = ?step.timestep(),
            natoms,
            rows = rows.len(),
            "natoms does not match the number of atom rows"
        );
    }

    let mut frame = String::with_capacity(64 + rows.len() * columns.len() * 12);
    // Writing into a String cannot fail.
    let _ = writeln!(frame, "{}", natoms);
    let _ = writeln!(frame, "{}", comment_line(step));

    for (index, row) in rows.iter().enumerate() {
        let values = row.as_list().ok_or_else(|| {
            XyzError::invalid_field("data", "a list of atom rows", row.type_name())
        })?;
        if values.len() < keywords.len() {
            return Err(XyzError::RowShape {
                row: index,
                expected: keywords.len(),
                actual: values.len(),
            });
        }

        for (i, &column) in columns.iter().enumerate() {
            if i > 0 {
                frame.push(' ');
            }
            let _ = write!(frame, "{}", values[column]);
        }
        frame.push('\n');
    }

    Ok(frame)
}

/// The annotated comment line of a frame (without newline).
///
/// Thermo keywords lose their `c_`/`v_` prefixes and are written as
/// `key=value` pairs joined by `"; "`. The box goes right after `Time`, or
/// at the end when there is no `Time` keyword.
///
/// ```
/// use lammpshade_core::Value;
/// use lammpshade_test::StepBuilder;
/// use lammpshade_xyz::comment_line;
///
/// let step = StepBuilder::new()
///     .thermo(&["Step", "Time", "c_temp"], vec![Value::Int(0), Value::Int(1), Value::Int(6)])
///     .box_bounds(vec![(Value::Int(0), Value::Int(5)), (Value::Float(4.7), Value::Int(-9))])
///     .build();
///
/// assert_eq!(comment_line(&step), "Step=0; Time=1; Box=[0, 5], [4.7, -9]; temp=6");
/// ```
pub fn comment_line(step: &StepRecord) -> String {
    let box_entry = step.box_bounds().map(format_box);
    let mut entries = Vec::new();
    let mut box_placed = false;

    if let Some(thermo) = step.thermo() {
        for (keyword, value) in thermo.pairs() {
            let keyword = keyword.to_string();
            let name = strip_thermo_prefix(&keyword);
            entries.push(format!("{}={}", name, value));

            if name == "Time" {
                if let Some(entry) = box_entry.as_ref().filter(|_| !box_placed) {
                    entries.push(entry.clone());
                    box_placed = true;
                }
            }
        }
    }

    if let Some(entry) = box_entry.filter(|_| !box_placed) {
        entries.push(entry);
    }

    entries.join("; ")
}

fn format_box(bounds: &[Value]) -> String {
    let dims: Vec<String> = bounds.iter().map(Value::to_string).collect();
    format!("Box={}", dims.join(", "))
}

fn natoms(step: &StepRecord) -> Result<u64> {
    match step.get("natoms") {
        None => Err(XyzError::MissingField("natoms".to_string())),
        Some(Value::Int(n)) if *n >= 0 => Ok(*n as u64),
        Some(other) => Err(XyzError::invalid_field(
            "natoms",
            "a non-negative integer",
            other.to_string(),
        )),
    }
}

fn missing_or_invalid(step: &StepRecord, field: &str, expected: &str) -> XyzError {
    match step.get(field) {
        None => XyzError::MissingField(field.to_string()),
        Some(value) => XyzError::invalid_field(field, expected, value.type_name()),
    }
}

/// Indices into `keywords` of the output columns, in [`COLUMN_ORDER`].
fn select_columns(keywords: &[Value]) -> Result<Vec<usize>> {
    let position = |name: &&str| keywords.iter().position(|k| k.as_str() == Some(*name));

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|name| position(*name).is_none())
    {
        return Err(XyzError::MissingColumn(missing.to_string()));
    }

    Ok(COLUMN_ORDER.iter().filter_map(|name| position(name)).collect())
}
