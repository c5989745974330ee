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

//! Write thermo tables as CSV.

use crate::error::{CsvError, Result};
use crate::thermo::ThermoTable;
use lammpshade_core::UnitStyle;
use std::io::Write;

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
    /// Append unit labels such as `(fs)` to header names (default: none)
    pub units: Option<UnitStyle>,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
            units: None,
        }
    }
}

/// Convert a thermo table to a CSV string.
///
/// # Example
/// ```
/// use lammpshade_core::Value;
/// use lammpshade_csv::{to_csv_string, ThermoTable};
/// use lammpshade_test::StepBuilder;
///
/// let step = StepBuilder::new()
///     .thermo(&["Step", "Temp"], vec![Value::Int(0), Value::Float(300.0)])
///     .build();
/// let table = ThermoTable::from_steps([&step]).unwrap();
///
/// assert_eq!(to_csv_string(&table).unwrap(), "Step,Temp\n0,300.0\n");
/// ```
pub fn to_csv_string(table: &ThermoTable) -> Result<String> {
    to_csv_string_with_config(table, ToCsvConfig::default())
}

/// Convert a thermo table to a CSV string with custom configuration.
///
/// # Example
/// ```
/// use lammpshade_core::{UnitStyle, Value};
/// use lammpshade_csv::{to_csv_string_with_config, ThermoTable, ToCsvConfig};
/// use lammpshade_test::StepBuilder;
///
/// let step = StepBuilder::new()
///     .thermo(&["Step", "Time", "Temp"], vec![Value::Int(0), Value::Int(0), Value::Float(300.0)])
///     .build();
/// let table = ThermoTable::from_steps([&step]).unwrap();
/// let config = ToCsvConfig {
///     delimiter: b';',
///     units: Some(UnitStyle::Real),
///     ..Default::default()
/// };
///
/// assert_eq!(
///     to_csv_string_with_config(&table, config).unwrap(),
///     "Step;Time (fs);Temp (K)\n0;0;300.0\n"
/// );
/// ```
pub fn to_csv_string_with_config(table: &ThermoTable, config: ToCsvConfig) -> Result<String> {
    let mut buffer = Vec::with_capacity(estimate_csv_size(table));
    to_csv_writer_with_config(table, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Write a thermo table as CSV to a writer.
///
/// # Example
/// ```no_run
/// use lammpshade_csv::{to_csv_writer, ThermoTable};
/// use std::fs::File;
///
/// let table = ThermoTable::new();
/// let file = File::create("thermo.csv").unwrap();
/// to_csv_writer(&table, file).unwrap();
/// ```
pub fn to_csv_writer<W: Write>(table: &ThermoTable, writer: W) -> Result<()> {
    to_csv_writer_with_config(table, writer, ToCsvConfig::default())
}

/// Write a thermo table as CSV with custom configuration.
///
/// An empty table produces just the header row, or nothing at all when
/// headers are disabled.
pub fn to_csv_writer_with_config<W: Write>(
    table: &ThermoTable,
    writer: W,
    config: ToCsvConfig,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .from_writer(writer);

    if config.include_headers && !table.keywords().is_empty() {
        let headers: Vec<String> = table
            .keywords()
            .iter()
            .map(|keyword| header_name(keyword, config.units))
            .collect();
        wtr.write_record(&headers)?;
    }

    for row in table.rows() {
        wtr.write_record(row.iter().map(|value| value.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Header cell for a keyword, with its unit label when one is known.
fn header_name(keyword: &str, units: Option<UnitStyle>) -> String {
    match units.map(|style| style.label_for(keyword)) {
        Some(label) if !label.is_empty() => format!("{} {}", keyword, label),
        _ => keyword.to_string(),
    }
}

/// Rough output size: keywords plus about a dozen bytes per cell.
fn estimate_csv_size(table: &ThermoTable) -> usize {
    let header: usize = table.keywords().iter().map(|k| k.len() + 8).sum();
    header + table.len() * table.keywords().len() * 12
}
