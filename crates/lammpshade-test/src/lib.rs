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

//! Shared test fixtures and utilities for the LAMMPShade crates.
//!
//! - [`fixtures`]: dump texts in the shape LAMMPS writes them, plus the
//!   edge cases the reader has to survive (truncation, missing terminators)
//! - [`StepBuilder`]: fluent construction of [`StepRecord`]s for writer tests
//! - [`write_dump`]: puts a fixture on disk for path-based APIs
//!
//! ```rust
//! use lammpshade_test::{fixtures, StepBuilder};
//! use lammpshade_core::Value;
//!
//! let text = fixtures::full_dump();
//! assert!(text.starts_with("---"));
//!
//! let step = StepBuilder::new()
//!     .natoms(1)
//!     .keywords(&["element", "x", "y", "z"])
//!     .row(vec!["C".into(), Value::Float(0.0), Value::Float(1.5), Value::Float(2.0)])
//!     .build();
//! assert_eq!(step.natoms(), Some(1));
//! ```

pub mod fixtures;

mod builders;

pub use builders::StepBuilder;

use std::io::{self, Write};
use tempfile::{Builder, NamedTempFile};

pub use lammpshade_core::StepRecord;

/// Type alias for a list of fixture functions (name, dump text).
pub type FixtureList = Vec<(&'static str, fn() -> &'static str)>;

/// Write `content` to a fresh temporary `.yaml` file.
///
/// The file is removed when the returned handle is dropped.
pub fn write_dump(content: &str) -> io::Result<NamedTempFile> {
    let mut file = Builder::new()
        .prefix("lammpshade-")
        .suffix(".yaml")
        .tempfile()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}
