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

//! Error types for the step reader.
//!
//! The dump grammar has no syntax errors: anything the reader does not
//! recognize is skipped or kept as a string. What remains are problems with
//! the source itself (it cannot be opened or read, it is not UTF-8, a line is
//! absurdly long) and invalid reader configuration.
//!
//! ```rust
//! use lammpshade_stream::{StepReader, StreamError};
//!
//! match StepReader::open("/no/such/dump.yaml") {
//!     Err(StreamError::SourceNotFound { path, .. }) => {
//!         assert_eq!(path.to_str(), Some("/no/such/dump.yaml"));
//!     }
//!     other => panic!("expected SourceNotFound, got {:?}", other.map(|_| ())),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading steps.
///
/// Errors raised while reading a specific line carry its number; use
/// [`line()`](Self::line) to extract it uniformly.
///
/// ```rust
/// use lammpshade_stream::StreamError;
///
/// let err = StreamError::utf8(42, "invalid utf-8 sequence of 1 bytes from index 3");
/// assert_eq!(err.line(), Some(42));
/// assert!(err.to_string().contains("line 42"));
/// ```
#[derive(Error, Debug)]
pub enum StreamError {
    /// The input file could not be opened.
    #[error("cannot open '{}': {source}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error while reading.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid UTF-8 encoding.
    #[error("Invalid UTF-8 at line {line}: {message}")]
    Utf8 { line: usize, message: String },

    /// Line longer than the configured limit.
    #[error("Line {line} is {length} bytes long, limit is {limit}")]
    LineTooLong {
        line: usize,
        length: usize,
        limit: usize,
    },

    /// Invalid reader configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl StreamError {
    /// Create a source-not-found error.
    #[inline]
    pub fn source_not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceNotFound {
            path: path.into(),
            source,
        }
    }

    /// Create a UTF-8 error.
    #[inline]
    pub fn utf8(line: usize, message: impl Into<String>) -> Self {
        Self::Utf8 {
            line,
            message: message.into(),
        }
    }

    /// Create a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Get the line number if available.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Utf8 { line, .. } | Self::LineTooLong { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type for streaming operations.
pub type StreamResult<T> = Result<T, StreamError>;
