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

//! Error type of the facade and context helpers.
//!
//! Every crate of the workspace has its own error enum;
//! [`LammpshadeError`] wraps them so a whole pipeline can use `?`.
//! [`ResultExt`] attaches a description of what was being done when the
//! error happened:
//!
//! ```rust
//! use lammpshade::{ResultExt, Simulation};
//!
//! fn convert(input: &str, output: &str) -> lammpshade::Result<usize> {
//!     let mut sim = Simulation::open(input).context(format!("opening {}", input))?;
//!     let summary = sim
//!         .convert_to_xyz(output)
//!         .with_context(|| format!("converting {} to {}", input, output))?;
//!     Ok(summary.frames)
//! }
//!
//! let err = convert("/no/such/dump.yaml", "out.xyz").unwrap_err();
//! assert!(err.to_string().starts_with("opening /no/such/dump.yaml: cannot open"));
//! ```

use lammpshade_csv::CsvError;
use lammpshade_stream::StreamError;
use lammpshade_xyz::XyzError;
use std::fmt;
use thiserror::Error;

/// Any error of the LAMMPShade pipeline.
#[derive(Debug, Error)]
pub enum LammpshadeError {
    /// Reading the dump failed.
    #[error(transparent)]
    Stream(#[from] StreamError),

    /// Writing the XYZ trajectory failed.
    #[error(transparent)]
    Xyz(#[from] XyzError),

    /// Building or exporting the thermo table failed.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// An error with a description of the operation that failed.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LammpshadeError>,
    },
}

impl LammpshadeError {
    /// Wrap this error with a context message.
    pub fn context(self, context: impl fmt::Display) -> Self {
        Self::Context {
            context: context.to_string(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with all context layers removed.
    pub fn root(&self) -> &LammpshadeError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Line number of the underlying read error, if it has one.
    pub fn line(&self) -> Option<usize> {
        match self.root() {
            Self::Stream(err) => err.line(),
            _ => None,
        }
    }
}

/// Result type of the facade.
pub type Result<T> = std::result::Result<T, LammpshadeError>;

/// Extension trait for adding context to results whose error converts into
/// [`LammpshadeError`].
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context<C: fmt::Display>(self, context: C) -> Result<T>;

    /// Add lazily computed context to an error. The closure runs only on the
    /// error path.
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<LammpshadeError>,
{
    #[inline]
    fn context<C: fmt::Display>(self, context: C) -> Result<T> {
        self.map_err(|e| {
            let err: LammpshadeError = e.into();
            err.context(context)
        })
    }

    #[inline]
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| {
            let err: LammpshadeError = e.into();
            err.context(f())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    fn utf8_error() -> LammpshadeError {
        StreamError::utf8(12, "invalid utf-8 sequence").into()
    }

    #[test]
    fn test_transparent_display() {
        assert_eq!(
            utf8_error().to_string(),
            "Invalid UTF-8 at line 12: invalid utf-8 sequence"
        );
    }

    #[test]
    fn test_context_layers() {
        let err = utf8_error().context("reading step 3").context("converting dump");
        assert_eq!(
            err.to_string(),
            "converting dump: reading step 3: Invalid UTF-8 at line 12: invalid utf-8 sequence"
        );
        assert!(matches!(err.root(), LammpshadeError::Stream(_)));
        assert_eq!(err.line(), Some(12));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_result_ext_converts_foreign_errors() {
        let result: std::result::Result<(), XyzError> =
            Err(XyzError::MissingColumn("x".to_string()));
        let err = result.context("writing frame 0").unwrap_err();
        assert_eq!(err.to_string(), "writing frame 0: Missing required column: x");
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_with_context_is_lazy() {
        let ok: std::result::Result<u8, CsvError> = Ok(1);
        let value = ok
            .with_context(|| -> String { panic!("context computed on success") })
            .unwrap();
        assert_eq!(value, 1);

        let failed: std::result::Result<u8, CsvError> =
            Err(CsvError::from(io::Error::new(io::ErrorKind::Other, "full")));
        let err = failed.with_context(|| "exporting thermo").unwrap_err();
        assert!(err.to_string().starts_with("exporting thermo: I/O error"));
    }
}
