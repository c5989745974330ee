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

//! Column-oriented thermo table.
//!
//! With `dump_modify thermo yes` every dump step carries the thermo output
//! of that timestep. [`ThermoTable`] stacks those rows into one column per
//! keyword, the shape plotting tools want.

use crate::error::{CsvError, Result};
use lammpshade_core::{StepRecord, Value};

/// Thermo output accumulated across steps.
///
/// The first step that carries thermo output fixes the column names. Every
/// later step must report the same keywords with one value each.
///
/// # Example
///
/// ```
/// use lammpshade_core::Value;
/// use lammpshade_csv::ThermoTable;
/// use lammpshade_test::StepBuilder;
///
/// let mut table = ThermoTable::new();
/// for (step, temp) in [(0, 300.0), (100, 301.5)] {
///     let record = StepBuilder::new()
///         .thermo(&["Step", "Temp"], vec![Value::Int(step), Value::Float(temp)])
///         .build();
///     assert!(table.push(&record).unwrap());
/// }
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.column_f64("Temp"), Some(vec![300.0, 301.5]));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThermoTable {
    keywords: Vec<String>,
    columns: Vec<Vec<Value>>,
    len: usize,
}

impl ThermoTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a sequence of steps. Steps without thermo output
    /// are skipped.
    pub fn from_steps<'a, I>(steps: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a StepRecord>,
    {
        let mut table = Self::new();
        for step in steps {
            table.push(step)?;
        }
        Ok(table)
    }

    /// Append the thermo row of `step`.
    ///
    /// Returns `Ok(false)` and leaves the table unchanged if the step has no
    /// thermo output.
    ///
    /// # Errors
    ///
    /// - `KeywordMismatch` if the keywords differ from the table's
    /// - `ShapeMismatch` if the data array length differs from the number
    ///   of keywords
    ///
    /// A failed push leaves the table unchanged.
    pub fn push(&mut self, step: &StepRecord) -> Result<bool> {
        let Some(thermo) = step.thermo() else {
            return Ok(false);
        };

        let names: Vec<String> = thermo.keywords.iter().map(Value::to_string).collect();

        if self.len > 0 && names != self.keywords {
            return Err(CsvError::KeywordMismatch {
                row: self.len,
                expected: self.keywords.join(", "),
                found: names.join(", "),
            });
        }
        if thermo.data.len() != names.len() {
            return Err(CsvError::ShapeMismatch {
                row: self.len,
                expected: names.len(),
                actual: thermo.data.len(),
            });
        }

        if self.len == 0 {
            self.columns = vec![Vec::new(); names.len()];
            self.keywords = names;
        }
        for (column, value) in self.columns.iter_mut().zip(thermo.data) {
            column.push(value.clone());
        }
        self.len += 1;
        Ok(true)
    }

    /// Column names, in thermo order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no step carried thermo output.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All values of one column.
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        let index = self.keywords.iter().position(|k| k == name)?;
        self.columns.get(index).map(Vec::as_slice)
    }

    /// One column as floats, for plotting. Non-numeric cells become `NaN`.
    pub fn column_f64(&self, name: &str) -> Option<Vec<f64>> {
        self.column(name).map(|values| {
            values
                .iter()
                .map(|v| v.as_float().unwrap_or(f64::NAN))
                .collect()
        })
    }

    /// One row, in keyword order.
    pub fn row(&self, index: usize) -> Option<Vec<&Value>> {
        if index >= self.len {
            return None;
        }
        Some(self.columns.iter().map(|column| &column[index]).collect())
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Value>> + '_ {
        (0..self.len).filter_map(move |index| self.row(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lammpshade_test::StepBuilder;

    fn step(keywords: &[&str], data: Vec<Value>) -> StepRecord {
        StepBuilder::new().thermo(keywords, data).build()
    }

    #[test]
    fn test_step_without_thermo_is_skipped() {
        let mut table = ThermoTable::new();
        let record = StepBuilder::new().natoms(3).build();
        assert!(!table.push(&record).unwrap());
        assert!(table.is_empty());
        assert!(table.keywords().is_empty());
    }

    #[test]
    fn test_first_thermo_step_fixes_keywords() {
        let mut table = ThermoTable::new();
        table
            .push(&step(&["Step", "Temp"], vec![Value::Int(0), Value::Float(1.5)]))
            .unwrap();
        assert_eq!(table.keywords(), &["Step".to_string(), "Temp".to_string()][..]);
        assert_eq!(table.column("Step"), Some(&[Value::Int(0)][..]));
        assert_eq!(table.column("Press"), None);
    }

    #[test]
    fn test_keyword_mismatch_leaves_table_unchanged() {
        let mut table = ThermoTable::new();
        table
            .push(&step(&["Step", "Temp"], vec![Value::Int(0), Value::Int(1)]))
            .unwrap();

        let err = table
            .push(&step(&["Step", "Press"], vec![Value::Int(1), Value::Int(2)]))
            .unwrap_err();
        match err {
            CsvError::KeywordMismatch { row, expected, found } => {
                assert_eq!(row, 1);
                assert_eq!(expected, "Step, Temp");
                assert_eq!(found, "Step, Press");
            }
            other => panic!("expected KeywordMismatch, got {:?}", other),
        }
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_shape_mismatch() {
        let mut table = ThermoTable::new();
        let err = table
            .push(&step(&["Step", "Temp"], vec![Value::Int(0)]))
            .unwrap_err();
        assert!(matches!(
            err,
            CsvError::ShapeMismatch {
                row: 0,
                expected: 2,
                actual: 1
            }
        ));
        assert!(table.is_empty());
        assert!(table.keywords().is_empty());
    }

    #[test]
    fn test_rows_and_floats() {
        let table = ThermoTable::from_steps(&[
            step(&["Step", "Note"], vec![Value::Int(0), "start".into()]),
            StepBuilder::new().natoms(1).build(),
            step(&["Step", "Note"], vec![Value::Int(10), Value::Float(2.5)]),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.row(1), Some(vec![&Value::Int(10), &Value::Float(2.5)]));
        assert_eq!(table.row(2), None);
        assert_eq!(table.rows().count(), 2);

        let notes = table.column_f64("Note").unwrap();
        assert!(notes[0].is_nan());
        assert_eq!(notes[1], 2.5);
        assert_eq!(table.column_f64("Step"), Some(vec![0.0, 10.0]));
    }
}
