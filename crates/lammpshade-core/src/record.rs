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

//! Step records.
//!
//! A [`StepRecord`] is the ordered field map of one `---` ... `...` block.
//! The generic map API is what the parser uses; the typed accessors below it
//! are what the writers use to find the atom table, thermo output and box.

use crate::units::UnitStyle;
use crate::value::Value;
use indexmap::map::{IntoIter, Iter, Keys};
use indexmap::IndexMap;

/// One parsed timestep block.
///
/// Keys keep their first-occurrence order. Inserting an existing key replaces
/// its value without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct StepRecord {
    fields: IndexMap<String, Value>,
}

/// The `thermo` sub-record of a step: column names and one row of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thermo<'a> {
    /// Thermo column names (`Step`, `Temp`, `c_...`, `v_...`).
    pub keywords: &'a [Value],
    /// Values for this step, aligned with `keywords`.
    pub data: &'a [Value],
}

impl<'a> Thermo<'a> {
    /// Iterate `(keyword, value)` pairs. Stops at the shorter of the two.
    pub fn pairs(&self) -> impl Iterator<Item = (&'a Value, &'a Value)> + 'a {
        let (keywords, data) = (self.keywords, self.data);
        keywords.iter().zip(data.iter())
    }

    /// Look up a value by keyword name.
    pub fn get(&self, keyword: &str) -> Option<&'a Value> {
        self.pairs()
            .find(|(k, _)| k.as_str() == Some(keyword))
            .map(|(_, v)| v)
    }
}

impl StepRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, returning the previous value if the key was present.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    /// Field value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns true if the record has a field named `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.fields.iter()
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> Keys<'_, String, Value> {
        self.fields.keys()
    }

    /// Consume the record, returning its ordered field map.
    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.fields
    }

    // ==================== Domain accessors ====================

    /// Simulation timestep (`timestep` field).
    pub fn timestep(&self) -> Option<i64> {
        self.get("timestep").and_then(Value::as_int)
    }

    /// Atom count (`natoms` field).
    pub fn natoms(&self) -> Option<i64> {
        self.get("natoms").and_then(Value::as_int)
    }

    /// Unit style named by the `units` field, if it is a known style.
    pub fn units(&self) -> Option<UnitStyle> {
        self.get("units")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
    }

    /// Per-atom column names (`keywords` field).
    pub fn keywords(&self) -> Option<&[Value]> {
        self.get("keywords").and_then(Value::as_list)
    }

    /// Per-atom rows (`data` field). Each row is a list aligned with
    /// [`keywords`](Self::keywords).
    pub fn atom_data(&self) -> Option<&[Value]> {
        self.get("data").and_then(Value::as_list)
    }

    /// Thermo output for this step, when the block carries a `thermo`
    /// mapping with both `keywords` and `data` lists.
    pub fn thermo(&self) -> Option<Thermo<'_>> {
        let map = self.get("thermo")?.as_map()?;
        Some(Thermo {
            keywords: map.get("keywords")?.as_list()?,
            data: map.get("data")?.as_list()?,
        })
    }

    /// Simulation box bounds (`box` field), one `[lo, hi]` entry per
    /// dimension.
    pub fn box_bounds(&self) -> Option<&[Value]> {
        self.get("box").and_then(Value::as_list)
    }
}

impl FromIterator<(String, Value)> for StepRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for StepRecord {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a StepRecord {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl From<IndexMap<String, Value>> for StepRecord {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Self { fields }
    }
}
