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

//! Dump texts used across the test suites.
//!
//! Everything here is a `&'static str` so fixtures can be fed to an
//! in-memory cursor or written to disk with [`write_dump`](crate::write_dump).

use crate::FixtureList;

/// Returns all fixture functions for iteration.
pub fn all() -> FixtureList {
    vec![
        ("box_example", box_example),
        ("thermo_example", thermo_example),
        ("full_dump", full_dump),
        ("truncated_dump", truncated_dump),
        ("missing_terminator", missing_terminator),
        ("terminator_only", terminator_only),
        ("empty", empty),
    ]
}

/// A single block with a nested list of box bounds.
pub fn box_example() -> &'static str {
    "---\nbox:\n  - [ 0, 53 ]\n  - [ 0, 52.57 ]\n...\n"
}

/// A single block with a nested thermo mapping.
pub fn thermo_example() -> &'static str {
    "\
---
natoms: 10
thermo:
  - keywords: [ Step, Time, Temp ]
  - data: [ 0, 0, 300.0134 ]
...
"
}

/// Two complete timesteps as written by `dump yaml` with
/// `dump_modify thermo yes`, including LAMMPS's trailing commas.
pub fn full_dump() -> &'static str {
    "\
---
creator: LAMMPS
date: 2024-03-06 13:25:10
timestep: 0
units: real
time: 0
natoms: 3
boundary: [ p, p, p, p, p, p, ]
thermo:
  - keywords: [ Step, Time, Temp, PotEng, Press, c_temp_water, v_vcmx_water, ]
  - data: [ 0, 0, 300.0134, -12.5, 1, 298.2, 0.001, ]
box:
  - [ 0, 10 ]
  - [ 0, 10 ]
  - [ -5, 5 ]
keywords: [ id, type, element, x, y, z, vx, vy, vz, ]
data:
  - [ 1, 1, O, 1.5, 2, 0.25, 0.001, -0.002, 0, ]
  - [ 2, 2, H, 2.25, 2, 0.25, 0, 0, 0.004, ]
  - [ 3, 2, H, 0.75, 2, 0.25, -0.001, 0.003, 0, ]
...
---
creator: LAMMPS
date: 2024-03-06 13:25:10
timestep: 100
units: real
time: 100
natoms: 3
boundary: [ p, p, p, p, p, p, ]
thermo:
  - keywords: [ Step, Time, Temp, PotEng, Press, c_temp_water, v_vcmx_water, ]
  - data: [ 100, 100, 301.5, -12.25, -3.5e-2, 299.75, 1.25e-05, ]
box:
  - [ 0, 10 ]
  - [ 0, 10 ]
  - [ -5, 5 ]
keywords: [ id, type, element, x, y, z, vx, vy, vz, ]
data:
  - [ 1, 1, O, 1.5, 2.5, 0.25, 0.001, -0.002, 0, ]
  - [ 2, 2, H, 2.5, 2, 0.25, 0, 0, 0.004, ]
  - [ 3, 2, H, 0.5, 2, 0.75, -0.001, 0.003, 0, ]
...
"
}

/// One complete step followed by a step cut off mid-way through its box.
pub fn truncated_dump() -> &'static str {
    "\
---
timestep: 0
natoms: 1
keywords: [ id, element, x, y, z, ]
data:
  - [ 1, Ar, 0.5, 0.5, 0.5, ]
...
---
timestep: 10
natoms: 1
box:
  - [ 0, 4 ]
"
}

/// Two start markers sharing a single terminator.
pub fn missing_terminator() -> &'static str {
    "---\ntimestep: 0\nnatoms: 2\n---\ntimestep: 1\nnatoms: 2\n...\n"
}

/// A lone block terminator.
pub fn terminator_only() -> &'static str {
    "...\n"
}

/// No input at all.
pub fn empty() -> &'static str {
    ""
}
