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

//! XYZ trajectory output for LAMMPS dump steps.
//!
//! Visualizers such as OVITO and VMD read the extended XYZ layout: an atom
//! count, a free-form comment line, then one row per atom. [`XyzWriter`]
//! writes one such frame per [`StepRecord`](lammpshade_core::StepRecord),
//! putting the step's thermo output and box into the comment line.

mod error;
mod writer;

pub use error::{Result, XyzError};
pub use writer::{comment_line, render_frame, XyzWriter, COLUMN_ORDER};
