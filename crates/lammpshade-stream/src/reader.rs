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

//! Line cursor for the step reader.
//!
//! Provides buffered line-by-line reading with line number tracking, a single
//! pending-line slot for push back, and an explicit close that releases the
//! underlying stream exactly once.
//!
//! This module is primarily an internal implementation detail of the step
//! reader, but is exposed for advanced use cases.

use crate::error::{StreamError, StreamResult};
use std::io::{BufRead, BufReader, Read};

/// Default read buffer capacity.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Default maximum line length in bytes.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1_000_000;

/// Buffered line reader with line number tracking.
///
/// Reads input line-by-line, handling both LF and CRLF line endings and
/// tracking the current line number for error reporting.
///
/// # Examples
///
/// ## Basic Line Reading
///
/// ```rust
/// use lammpshade_stream::LineReader;
/// use std::io::Cursor;
///
/// let input = "---\nnatoms: 2\n...";
/// let mut reader = LineReader::new(Cursor::new(input));
///
/// assert_eq!(reader.next_line().unwrap(), Some((1, "---".to_string())));
/// assert_eq!(reader.next_line().unwrap(), Some((2, "natoms: 2".to_string())));
/// assert_eq!(reader.next_line().unwrap(), Some((3, "...".to_string())));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
///
/// ## Push Back and Close
///
/// ```rust
/// use lammpshade_stream::LineReader;
/// use std::io::Cursor;
///
/// let mut reader = LineReader::new(Cursor::new("---\n..."));
///
/// let (num, line) = reader.next_line().unwrap().unwrap();
/// reader.push_back(num, line);
/// assert_eq!(reader.next_line().unwrap(), Some((1, "---".to_string())));
///
/// assert!(reader.close());
/// assert!(!reader.close());
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct LineReader<R: Read> {
    reader: Option<BufReader<R>>,
    line_number: usize,
    buffer: Vec<u8>,
    pending: Option<(usize, String)>,
    max_line_length: usize,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader.
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, DEFAULT_BUFFER_SIZE)
    }

    /// Create with a specific buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: Some(BufReader::with_capacity(capacity, reader)),
            line_number: 0,
            buffer: Vec::new(),
            pending: None,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }

    /// Set the maximum accepted line length in bytes, excluding the line
    /// terminator.
    pub fn with_max_line_length(mut self, limit: usize) -> Self {
        self.max_line_length = limit;
        self
    }

    /// Get the number of the last line read from the stream.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns true once the underlying stream has been released.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }

    /// Read the next line.
    ///
    /// A pushed-back line is returned first. After [`close`](Self::close)
    /// only a pending line can still come out; the stream is never touched.
    pub fn next_line(&mut self) -> StreamResult<Option<(usize, String)>> {
        if let Some(pending) = self.pending.take() {
            return Ok(Some(pending));
        }

        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        self.buffer.clear();
        if reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
            if self.buffer.last() == Some(&b'\r') {
                self.buffer.pop();
            }
        }

        if self.buffer.len() > self.max_line_length {
            return Err(StreamError::LineTooLong {
                line: self.line_number,
                length: self.buffer.len(),
                limit: self.max_line_length,
            });
        }

        let line = std::str::from_utf8(&self.buffer)
            .map_err(|e| StreamError::utf8(self.line_number, e.to_string()))?;

        Ok(Some((self.line_number, line.to_string())))
    }

    /// Peek at the next line without consuming it.
    pub fn peek_line(&mut self) -> StreamResult<Option<&(usize, String)>> {
        if self.pending.is_none() {
            self.pending = self.next_line()?;
        }
        Ok(self.pending.as_ref())
    }

    /// Push a line back to be read again. Only one line can be pending.
    #[inline]
    pub fn push_back(&mut self, line_num: usize, line: String) {
        self.pending = Some((line_num, line));
    }

    /// Release the underlying stream.
    ///
    /// Returns true if this call released it, false if it was already
    /// closed.
    pub fn close(&mut self) -> bool {
        self.reader.take().is_some()
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = StreamResult<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
