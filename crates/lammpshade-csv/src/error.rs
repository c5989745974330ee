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

//! Error types for thermo table accumulation and CSV export.

use thiserror::Error;

/// Thermo table and CSV error types.
///
/// # Examples
///
/// ```
/// use lammpshade_csv::CsvError;
///
/// let err = CsvError::ShapeMismatch {
///     row: 3,
///     expected: 6,
///     actual: 5,
/// };
///
/// assert_eq!(
///     err.to_string(),
///     "Thermo row 3 has 5 values, expected 6"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// A step's thermo keywords differ from the table's columns.
    ///
    /// ```
    /// use lammpshade_csv::CsvError;
    ///
    /// let err = CsvError::KeywordMismatch {
    ///     row: 1,
    ///     expected: "Step, Temp".to_string(),
    ///     found: "Step, Press".to_string(),
    /// };
    /// assert!(err.to_string().contains("[Step, Press]"));
    /// ```
    #[error("Thermo keywords of row {row} are [{found}], table has [{expected}]")]
    KeywordMismatch {
        /// Index the row would have had (0-based).
        row: usize,
        /// Table keywords, comma separated.
        expected: String,
        /// Step keywords, comma separated.
        found: String,
    },

    /// A step's thermo data does not have one value per keyword.
    #[error("Thermo row {row} has {actual} values, expected {expected}")]
    ShapeMismatch {
        /// Index the row would have had (0-based).
        row: usize,
        /// Number of keywords.
        expected: usize,
        /// Number of values.
        actual: usize,
    },

    /// I/O error during CSV writing.
    ///
    /// ```
    /// use lammpshade_csv::CsvError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
    /// let csv_err = CsvError::from(io_err);
    /// assert!(csv_err.to_string().starts_with("I/O error"));
    /// ```
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Invalid UTF-8 in CSV output.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Context where the invalid UTF-8 was encountered.
        context: String,
    },
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;
