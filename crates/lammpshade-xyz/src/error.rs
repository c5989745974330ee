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

//! Error types for XYZ output.

use std::path::PathBuf;
use thiserror::Error;

/// XYZ writer error types.
///
/// A step is validated completely before any of it is written, so an error
/// never leaves a partial frame in the output.
///
/// # Examples
///
/// ```
/// use lammpshade_xyz::XyzError;
///
/// let err = XyzError::MissingColumn("x".to_string());
/// assert_eq!(err.to_string(), "Missing required column: x");
/// ```
#[derive(Debug, Error)]
pub enum XyzError {
    /// Output path does not end in `.xyz`.
    #[error("Output file must have the .xyz extension: {}", path.display())]
    InvalidExtension {
        /// Rejected path.
        path: PathBuf,
    },

    /// A field the frame needs is absent from the step.
    ///
    /// ```
    /// use lammpshade_xyz::XyzError;
    ///
    /// let err = XyzError::MissingField("natoms".to_string());
    /// assert_eq!(err.to_string(), "Step has no 'natoms' field");
    /// ```
    #[error("Step has no '{0}' field")]
    MissingField(String),

    /// A field is present but has the wrong shape.
    #[error("Field '{field}' must be {expected}, got {found}")]
    InvalidField {
        /// Field name.
        field: String,
        /// Expected shape description.
        expected: String,
        /// What was found instead.
        found: String,
    },

    /// One of the mandatory coordinate columns is missing from `keywords`.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// An atom row has fewer values than there are keywords.
    ///
    /// ```
    /// use lammpshade_xyz::XyzError;
    ///
    /// let err = XyzError::RowShape { row: 4, expected: 9, actual: 7 };
    /// assert!(err.to_string().contains("row 4"));
    /// ```
    #[error("Atom row {row} has {actual} values, expected {expected}")]
    RowShape {
        /// Row index (0-based).
        row: usize,
        /// Number of keywords.
        expected: usize,
        /// Number of values in the row.
        actual: usize,
    },

    /// I/O error while writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl XyzError {
    #[inline]
    pub(crate) fn invalid_field(
        field: &str,
        expected: &str,
        found: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            field: field.to_string(),
            expected: expected.to_string(),
            found: found.into(),
        }
    }
}

/// Result type for XYZ operations.
pub type Result<T> = std::result::Result<T, XyzError>;
