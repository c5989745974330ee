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


//! Structured error types for the LAMMPShade CLI.

use lammpshade::LammpshadeError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading or converting a dump failed.
    #[error(transparent)]
    Lammpshade(#[from] LammpshadeError),

    /// Writing command output failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// Output path, `-` for stdout
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// A step could not be rendered as JSON.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// The dump carries no thermo output.
    #[error("'{}' contains no thermo output", path.display())]
    NoThermo {
        /// The input dump
        path: PathBuf,
    },
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "out.csv",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error for 'out.csv': denied");
    }

    #[test]
    fn test_no_thermo_display() {
        let err = CliError::NoThermo {
            path: PathBuf::from("box.yaml"),
        };
        assert_eq!(err.to_string(), "'box.yaml' contains no thermo output");
    }
}
