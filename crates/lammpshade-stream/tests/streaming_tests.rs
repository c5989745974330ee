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

//! End-to-end tests for the step reader.

use lammpshade_stream::{StepParserConfig, StepReader, StreamError, Value};
use lammpshade_test::{fixtures, write_dump};
use std::io::{self, Cursor, Read};

fn reader(input: &'static str) -> StepReader<Cursor<&'static str>> {
    StepReader::new(Cursor::new(input))
}

fn list(items: Vec<Value>) -> Value {
    Value::List(items)
}

// ==================== Fixture tests ====================

#[test]
fn test_box_example() {
    let mut reader = reader(fixtures::box_example());
    let step = reader.get_next_step().unwrap();

    assert_eq!(step.len(), 1);
    assert_eq!(
        step.get("box"),
        Some(&list(vec![
            list(vec![Value::Int(0), Value::Int(53)]),
            list(vec![Value::Int(0), Value::Float(52.57)]),
        ]))
    );
}

#[test]
fn test_thermo_example() {
    let mut reader = reader(fixtures::thermo_example());
    let step = reader.get_next_step().unwrap();

    assert_eq!(step.keys().collect::<Vec<_>>(), vec!["natoms", "thermo"]);
    assert_eq!(step.natoms(), Some(10));

    let thermo = step.thermo().unwrap();
    assert_eq!(
        thermo.keywords,
        &[Value::from("Step"), Value::from("Time"), Value::from("Temp")][..]
    );
    assert_eq!(
        thermo.data,
        &[Value::Int(0), Value::Int(0), Value::Float(300.0134)][..]
    );
}

#[test]
fn test_full_dump() {
    let steps: Vec<_> = reader(fixtures::full_dump())
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(steps.len(), 2);

    let first = &steps[0];
    assert_eq!(first.get("creator"), Some(&Value::from("LAMMPS")));
    assert_eq!(first.get("date"), Some(&Value::from("2024-03-06 13:25:10")));
    assert_eq!(first.timestep(), Some(0));
    assert_eq!(first.natoms(), Some(3));
    assert_eq!(first.units(), Some(lammpshade_core::UnitStyle::Real));

    // Trailing commas leave no empty elements behind.
    assert_eq!(first.keywords().map(<[Value]>::len), Some(9));
    assert_eq!(
        first.get("boundary").and_then(Value::as_list).map(<[Value]>::len),
        Some(6)
    );

    let rows = first.atom_data().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0],
        list(vec![
            Value::Int(1),
            Value::Int(1),
            Value::from("O"),
            Value::Float(1.5),
            Value::Int(2),
            Value::Float(0.25),
            Value::Float(0.001),
            Value::Float(-0.002),
            Value::Int(0),
        ])
    );

    let second = &steps[1];
    assert_eq!(second.timestep(), Some(100));
    assert_eq!(
        second.thermo().unwrap().get("Press"),
        Some(&Value::Float(-0.035))
    );
}

#[test]
fn test_field_order_follows_source() {
    let mut reader = reader(fixtures::full_dump());
    let step = reader.get_next_step().unwrap();
    assert_eq!(
        step.keys().collect::<Vec<_>>(),
        vec![
            "creator", "date", "timestep", "units", "time", "natoms", "boundary", "thermo",
            "box", "keywords", "data",
        ]
    );
}

// ==================== Isolation and exhaustion tests ====================

#[test]
fn test_block_isolation() {
    let mut reader = reader("---\nonly_first: 1\nshared: a\n...\n---\nshared: b\n...\n");
    let first = reader.get_next_step().unwrap();
    let second = reader.get_next_step().unwrap();

    assert!(first.contains_key("only_first"));
    assert!(!second.contains_key("only_first"));
    assert_eq!(second.get("shared"), Some(&Value::from("b")));
}

#[test]
fn test_exhaustion_is_idempotent() {
    let mut reader = reader(fixtures::box_example());
    assert!(!reader.get_next_step().unwrap().is_empty());

    for _ in 0..5 {
        assert!(reader.get_next_step().unwrap().is_empty());
        assert!(reader.is_closed());
    }
    assert_eq!(reader.steps_read(), 1);
}

#[test]
fn test_terminator_only_closes_after_one_call() {
    let mut reader = reader(fixtures::terminator_only());
    assert!(!reader.is_closed());
    assert!(reader.get_next_step().unwrap().is_empty());
    assert!(reader.is_closed());
}

#[test]
fn test_truncated_dump() {
    let mut reader = reader(fixtures::truncated_dump());

    let complete = reader.get_next_step().unwrap();
    assert_eq!(complete.timestep(), Some(0));
    assert!(!reader.is_closed());

    let partial = reader.get_next_step().unwrap();
    assert_eq!(partial.timestep(), Some(10));
    assert_eq!(partial.box_bounds().map(<[Value]>::len), Some(1));
    assert!(reader.is_closed());
}

#[test]
fn test_missing_terminator() {
    let steps: Vec<_> = reader(fixtures::missing_terminator())
        .map(Result::unwrap)
        .collect();
    // The second start marker does not split the block: its fields land in
    // the same record and overwrite the first values.
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].timestep(), Some(1));
    assert_eq!(steps[0].keys().collect::<Vec<_>>(), vec!["timestep", "natoms"]);
}

#[test]
fn test_every_fixture_terminates() {
    for (name, fixture) in fixtures::all() {
        let mut reader = reader(fixture());
        let mut calls = 0;
        while !reader.is_closed() {
            reader.get_next_step().unwrap();
            calls += 1;
            assert!(calls < 100, "fixture {} never closed", name);
        }
    }
}

// ==================== Resource tests ====================

/// Reader that counts how often it is dropped.
struct Guarded {
    inner: Cursor<&'static str>,
    dropped: std::rc::Rc<std::cell::Cell<u32>>,
}

impl Read for Guarded {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Drop for Guarded {
    fn drop(&mut self) {
        self.dropped.set(self.dropped.get() + 1);
    }
}

#[test]
fn test_stream_released_exactly_once() {
    let dropped = std::rc::Rc::new(std::cell::Cell::new(0));
    let source = Guarded {
        inner: Cursor::new(fixtures::thermo_example()),
        dropped: dropped.clone(),
    };

    let mut reader = StepReader::new(source);
    reader.get_next_step().unwrap();
    assert_eq!(dropped.get(), 0);

    reader.get_next_step().unwrap();
    assert_eq!(dropped.get(), 1);

    reader.close();
    reader.get_next_step().unwrap();
    drop(reader);
    assert_eq!(dropped.get(), 1);
}

struct FailingRead;

impl Read for FailingRead {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "device gone"))
    }
}

#[test]
fn test_io_error_closes_reader() {
    let mut reader = StepReader::new(FailingRead);
    let err = reader.get_next_step().unwrap_err();
    assert!(matches!(err, StreamError::Io(_)));
    assert!(reader.is_closed());
    assert!(reader.next().is_none());
}

#[test]
fn test_invalid_utf8_then_resume() {
    let bytes: &'static [u8] = b"---\nname: \xff\xfe\n...\n---\nnatoms: 2\n...\n";
    let mut reader = StepReader::new(Cursor::new(bytes));

    let err = reader.get_next_step().unwrap_err();
    assert_eq!(err.line(), Some(2));

    // The bad line is gone; the rest of its block is skipped up to the next
    // block start.
    let next = reader.get_next_step().unwrap();
    assert_eq!(next.natoms(), Some(2));
}

// ==================== File tests ====================

#[test]
fn test_open_file() {
    let file = write_dump(fixtures::full_dump()).unwrap();
    let reader = StepReader::open(file.path()).unwrap();
    assert_eq!(reader.count(), 2);
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    match StepReader::open(&path) {
        Err(StreamError::SourceNotFound { path: reported, source }) => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        Err(other) => panic!("expected SourceNotFound, got {}", other),
        Ok(_) => panic!("expected SourceNotFound"),
    }
}

#[test]
fn test_open_with_invalid_config() {
    let file = write_dump(fixtures::box_example()).unwrap();
    let mut config = StepParserConfig::default();
    config.dialect.block_end.clear();

    assert!(matches!(
        StepReader::open_with_config(file.path(), config),
        Err(StreamError::Config(_))
    ));
}
