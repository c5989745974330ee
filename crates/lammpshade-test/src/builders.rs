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

//! Builder for step records.

use lammpshade_core::{StepRecord, Value, ValueMap};

/// Fluent construction of a [`StepRecord`] in the shape the reader
/// produces.
///
/// Fields are inserted in call order.
#[derive(Debug, Default)]
pub struct StepBuilder {
    record: StepRecord,
    rows: Vec<Value>,
}

impl StepBuilder {
    /// Start an empty step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Any field.
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.record.insert(key, value.into());
        self
    }

    /// `timestep` field.
    pub fn timestep(self, timestep: i64) -> Self {
        self.field("timestep", timestep)
    }

    /// `natoms` field.
    pub fn natoms(self, natoms: i64) -> Self {
        self.field("natoms", natoms)
    }

    /// `units` field, e.g. `real`.
    pub fn units(self, units: &str) -> Self {
        self.field("units", units)
    }

    /// Per-atom column names.
    pub fn keywords(self, keywords: &[&str]) -> Self {
        self.field("keywords", strings(keywords))
    }

    /// Append one per-atom row. Rows are stored under `data` on
    /// [`build`](Self::build).
    pub fn row(mut self, row: Vec<Value>) -> Self {
        self.rows.push(Value::List(row));
        self
    }

    /// Thermo sub-record.
    pub fn thermo(self, keywords: &[&str], data: Vec<Value>) -> Self {
        let mut map = ValueMap::new();
        map.insert("keywords".to_string(), strings(keywords));
        map.insert("data".to_string(), Value::List(data));
        self.field("thermo", Value::Map(map))
    }

    /// Box bounds, one `[lo, hi]` pair per dimension.
    pub fn box_bounds(self, bounds: Vec<(Value, Value)>) -> Self {
        let bounds = bounds
            .into_iter()
            .map(|(lo, hi)| Value::List(vec![lo, hi]))
            .collect::<Vec<_>>();
        self.field("box", Value::List(bounds))
    }

    /// Finish the step, adding the collected rows as `data`.
    pub fn build(mut self) -> StepRecord {
        if !self.rows.is_empty() {
            self.record.insert("data", Value::List(self.rows));
        }
        self.record
    }
}

fn strings(items: &[&str]) -> Value {
    Value::List(items.iter().map(|s| Value::from(*s)).collect())
}
