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

//! Step reader implementation.
//!
//! Each call to [`StepReader::get_next_step`] drives a small state machine
//! over the line cursor until one block is complete:
//!
//! - `SeekingStart`: everything before a block start marker is skipped.
//! - `InBlock`: `key: value` lines become fields; a key with an empty value
//!   opens a nested section.
//! - `InNested`: dash lines under that key are collected into a list (bare
//!   scalars) or a mapping (`- subkey: value`). The first line that is not a
//!   dash line closes the section and is dispatched again at block level.
//!
//! A block ends at its terminator or at end of input, where the stream is
//! released. A block start inside an open block is skipped and collection
//! carries on into the same record.
//!
//! # Basic Usage
//!
//! ```rust
//! use lammpshade_core::Value;
//! use lammpshade_stream::StepReader;
//! use std::io::Cursor;
//!
//! let input = "\
//! ---
//! natoms: 10
//! thermo:
//!   - keywords: [ Step, Temp ]
//!   - data: [ 0, 300.0134 ]
//! ...
//! ";
//!
//! let mut reader = StepReader::new(Cursor::new(input));
//! let step = reader.get_next_step().unwrap();
//!
//! assert_eq!(step.natoms(), Some(10));
//! assert_eq!(step.thermo().unwrap().get("Temp"), Some(&Value::Float(300.0134)));
//!
//! // Exhausted: every further call returns an empty record.
//! assert!(reader.get_next_step().unwrap().is_empty());
//! assert!(reader.is_closed());
//! ```

use crate::error::{StreamError, StreamResult};
use crate::reader::{LineReader, DEFAULT_BUFFER_SIZE, DEFAULT_MAX_LINE_LENGTH};
use lammpshade_core::lex::{classify, split_key_value, Dialect, LineToken};
use lammpshade_core::{coerce, StepRecord, Value, ValueMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace, warn};

/// Configuration options for the step reader.
///
/// # Examples
///
/// ```rust
/// use lammpshade_stream::StepParserConfig;
///
/// let config = StepParserConfig::default();
/// assert_eq!(config.dialect.block_start, "---");
/// assert_eq!(config.dialect.block_end, "...");
/// assert_eq!(config.buffer_size, 64 * 1024);
/// assert_eq!(config.max_line_length, 1_000_000);
/// ```
///
/// A reader for a variant dialect:
///
/// ```rust
/// use lammpshade_core::Dialect;
/// use lammpshade_stream::{StepParserConfig, StepReader};
/// use std::io::Cursor;
///
/// let config = StepParserConfig {
///     dialect: Dialect {
///         block_start: "BEGIN".to_string(),
///         block_end: "END".to_string(),
///         separator: '=',
///         ..Dialect::default()
///     },
///     ..Default::default()
/// };
///
/// let mut reader = StepReader::with_config(Cursor::new("BEGIN\nnatoms = 3\nEND\n"), config)
///     .unwrap();
/// assert_eq!(reader.get_next_step().unwrap().natoms(), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct StepParserConfig {
    /// Block markers, key separator and dash character.
    pub dialect: Dialect,

    /// Buffer size for reading input.
    ///
    /// Default: 64KB
    pub buffer_size: usize,

    /// Maximum line length in bytes.
    ///
    /// Lines exceeding this length cause a [`StreamError::LineTooLong`].
    /// A dump `data` row is short, so only corrupt input gets near this.
    ///
    /// Default: 1,000,000 bytes (1MB)
    pub max_line_length: usize,
}

impl Default for StepParserConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl StepParserConfig {
    /// Check that the dialect can be lexed unambiguously.
    pub fn validate(&self) -> StreamResult<()> {
        let dialect = &self.dialect;
        if dialect.block_start.is_empty() {
            return Err(StreamError::config("block start marker is empty"));
        }
        if dialect.block_end.is_empty() {
            return Err(StreamError::config("block end marker is empty"));
        }
        if dialect.block_start == dialect.block_end {
            return Err(StreamError::config(format!(
                "block start and end markers are both '{}'",
                dialect.block_start
            )));
        }
        if dialect.separator == dialect.dash {
            return Err(StreamError::config(format!(
                "separator and dash are both '{}'",
                dialect.separator
            )));
        }
        if self.buffer_size == 0 {
            return Err(StreamError::config("buffer size must be positive"));
        }
        Ok(())
    }
}

/// Pull-based reader of LAMMPS YAML step blocks.
///
/// One reader owns one stream. Records are handed to the caller by value and
/// the reader keeps no record state between calls, only its read position.
///
/// `StepReader` implements `Iterator<Item = StreamResult<StepRecord>>`; the
/// iterator ends once the stream is exhausted.
///
/// ```rust
/// use lammpshade_stream::StepReader;
/// use std::io::Cursor;
///
/// let input = "---\ntimestep: 0\n...\n---\ntimestep: 100\n...\n";
/// let steps: Vec<i64> = StepReader::new(Cursor::new(input))
///     .map(|step| step.unwrap().timestep().unwrap())
///     .collect();
///
/// assert_eq!(steps, vec![0, 100]);
/// ```
pub struct StepReader<R: Read> {
    reader: LineReader<R>,
    config: StepParserConfig,
    steps_read: usize,
}

#[derive(Debug)]
enum State {
    SeekingStart,
    InBlock,
    InNested(Nested),
}

/// Collection state of a nested section.
#[derive(Debug)]
struct Nested {
    key: String,
    list: Vec<Value>,
    map: ValueMap,
    last: Option<NestedKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NestedKind {
    List,
    Map,
}

/// What to do after dispatching one line.
enum Flow {
    /// Read the next line in the given state.
    Continue(State),
    /// Put the line back and read it again in the given state.
    Redispatch(State),
    /// The block is complete.
    Finish,
}

impl Nested {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            list: Vec::new(),
            map: ValueMap::new(),
            last: None,
        }
    }

    /// Each run of list items starts a new list.
    fn push_item(&mut self, value: Value) {
        if self.last != Some(NestedKind::List) {
            self.list.clear();
        }
        self.list.push(value);
        self.last = Some(NestedKind::List);
    }

    /// Each run of mapping entries starts a new mapping.
    fn insert_entry(&mut self, key: &str, value: Value) {
        if self.last != Some(NestedKind::Map) {
            self.map.clear();
        }
        self.map.insert(key.to_string(), value);
        self.last = Some(NestedKind::Map);
    }

    /// Store the run that was collected last. A section without any dash
    /// lines leaves the key untouched.
    fn flush(self, record: &mut StepRecord) {
        match self.last {
            Some(NestedKind::List) => {
                record.insert(self.key, Value::List(self.list));
            }
            Some(NestedKind::Map) => {
                record.insert(self.key, Value::Map(self.map));
            }
            None => {}
        }
    }
}

impl StepReader<File> {
    /// Open a dump file with the default configuration.
    ///
    /// Fails with [`StreamError::SourceNotFound`] if the file cannot be
    /// opened.
    pub fn open(path: impl AsRef<Path>) -> StreamResult<Self> {
        Self::open_with_config(path, StepParserConfig::default())
    }

    /// Open a dump file with a custom configuration.
    pub fn open_with_config(
        path: impl AsRef<Path>,
        config: StepParserConfig,
    ) -> StreamResult<Self> {
        let path = path.as_ref();
        config.validate()?;
        let file = File::open(path).map_err(|e| StreamError::source_not_found(path, e))?;
        debug!(path = %path.display(), "opened dump");
        Self::with_config(file, config)
    }
}

impl<R: Read> StepReader<R> {
    /// Create a reader with the default configuration.
    pub fn new(reader: R) -> Self {
        let config = StepParserConfig::default();
        Self {
            reader: Self::line_reader(reader, &config),
            config,
            steps_read: 0,
        }
    }

    /// Create a reader with a custom configuration.
    ///
    /// # Errors
    ///
    /// `StreamError::Config` if the dialect is ambiguous (see
    /// [`StepParserConfig::validate`]).
    pub fn with_config(reader: R, config: StepParserConfig) -> StreamResult<Self> {
        config.validate()?;
        Ok(Self {
            reader: Self::line_reader(reader, &config),
            config,
            steps_read: 0,
        })
    }

    fn line_reader(reader: R, config: &StepParserConfig) -> LineReader<R> {
        LineReader::with_capacity(reader, config.buffer_size)
            .with_max_line_length(config.max_line_length)
    }

    /// The configuration this reader was built with.
    pub fn config(&self) -> &StepParserConfig {
        &self.config
    }

    /// Number of non-empty records returned so far.
    pub fn steps_read(&self) -> usize {
        self.steps_read
    }

    /// Number of the last line read from the stream.
    pub fn line_number(&self) -> usize {
        self.reader.line_number()
    }

    /// Returns true once the stream has been released.
    pub fn is_closed(&self) -> bool {
        self.reader.is_closed()
    }

    /// Release the stream. Further calls to
    /// [`get_next_step`](Self::get_next_step) return empty records.
    /// Closing an already closed reader does nothing.
    pub fn close(&mut self) {
        if self.reader.close() {
            debug!(line = self.reader.line_number(), "released dump stream");
        }
    }

    /// Read the next step block.
    ///
    /// Returns the complete record at a block terminator, or whatever was
    /// collected when the input ends. At end of input the stream is
    /// released; from then on every call returns an empty record without
    /// touching it.
    ///
    /// # Errors
    ///
    /// I/O failures, invalid UTF-8 and over-long lines. The record being
    /// assembled is discarded. A failed read releases the stream; a bad
    /// line is consumed and the next call continues after it.
    pub fn get_next_step(&mut self) -> StreamResult<StepRecord> {
        let mut record = StepRecord::new();
        if self.reader.is_closed() {
            return Ok(record);
        }

        let mut state = State::SeekingStart;
        loop {
            let (line_num, line) = match self.reader.next_line() {
                Ok(Some(next)) => next,
                Ok(None) => {
                    self.finish_at_eof(state, &mut record);
                    return Ok(record);
                }
                Err(e) => {
                    if matches!(e, StreamError::Io(_)) {
                        self.close();
                    }
                    return Err(e);
                }
            };

            let flow = {
                let token = classify(&line, &self.config.dialect);
                trace!(line = line_num, ?token, "dispatch");
                self.dispatch(state, token, &line, line_num, &mut record)
            };

            match flow {
                Flow::Continue(next) => state = next,
                Flow::Redispatch(next) => {
                    self.reader.push_back(line_num, line);
                    state = next;
                }
                Flow::Finish => return Ok(self.finalize(record)),
            }
        }
    }

    fn dispatch(
        &self,
        state: State,
        token: LineToken<'_>,
        line: &str,
        line_num: usize,
        record: &mut StepRecord,
    ) -> Flow {
        match state {
            State::SeekingStart => match token {
                LineToken::BlockStart => Flow::Continue(State::InBlock),
                _ => Flow::Continue(State::SeekingStart),
            },
            State::InBlock => self.dispatch_block(token, line, line_num, record),
            State::InNested(mut nested) => match token {
                LineToken::DashScalar { value } => {
                    nested.push_item(coerce(value));
                    Flow::Continue(State::InNested(nested))
                }
                LineToken::DashKeyValue { key, value } => {
                    let value = if value.is_empty() {
                        Value::String(String::new())
                    } else {
                        coerce(value)
                    };
                    nested.insert_entry(key, value);
                    Flow::Continue(State::InNested(nested))
                }
                _ => {
                    nested.flush(record);
                    Flow::Redispatch(State::InBlock)
                }
            },
        }
    }

    fn dispatch_block(
        &self,
        token: LineToken<'_>,
        line: &str,
        line_num: usize,
        record: &mut StepRecord,
    ) -> Flow {
        match token {
            LineToken::BlockEnd => Flow::Finish,
            LineToken::BlockStart => {
                if !record.is_empty() {
                    warn!(
                        line = line_num,
                        fields = record.len(),
                        "block start before terminator, continuing the same step"
                    );
                }
                Flow::Continue(State::InBlock)
            }
            LineToken::KeyValue { key, value } => self.key_value(key, value, record),
            LineToken::DashKeyValue { .. } => {
                // Outside a nested section a dash line is split like any
                // other line with a separator.
                match split_key_value(line, self.config.dialect.separator) {
                    Some((key, value)) => self.key_value(key, value, record),
                    None => Flow::Continue(State::InBlock),
                }
            }
            LineToken::DashScalar { .. } | LineToken::Other => Flow::Continue(State::InBlock),
        }
    }

    fn key_value(&self, key: &str, value: &str, record: &mut StepRecord) -> Flow {
        if value.is_empty() {
            Flow::Continue(State::InNested(Nested::new(key)))
        } else {
            record.insert(key, coerce(value));
            Flow::Continue(State::InBlock)
        }
    }

    fn finish_at_eof(&mut self, state: State, record: &mut StepRecord) {
        match state {
            State::SeekingStart => {}
            State::InBlock => {
                warn!(fields = record.len(), "input ended inside a step block");
            }
            State::InNested(nested) => {
                warn!(
                    key = %nested.key,
                    fields = record.len(),
                    "input ended inside a nested section"
                );
                nested.flush(record);
            }
        }
        self.close();
        if !record.is_empty() {
            self.steps_read += 1;
        }
    }

    fn finalize(&mut self, record: StepRecord) -> StepRecord {
        if !record.is_empty() {
            self.steps_read += 1;
        }
        debug!(
            step = self.steps_read,
            fields = record.len(),
            line = self.reader.line_number(),
            "finalized step block"
        );
        record
    }
}

impl<R: Read> Iterator for StepReader<R> {
    type Item = StreamResult<StepRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reader.is_closed() {
            return None;
        }
        match self.get_next_step() {
            Ok(record) if record.is_empty() && self.reader.is_closed() => None,
            other => Some(other),
        }
    }
}
