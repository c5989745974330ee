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

//! Line classification for the dump dialect.
//!
//! Every raw line is turned into exactly one [`LineToken`] before the block
//! parser sees it. Classification relies only on local substring checks
//! (marker prefixes, a leading dash marker, the presence of the separator),
//! never on indentation.
//!
//! | Line                          | Token                                  |
//! |-------------------------------|----------------------------------------|
//! | `---`                         | [`LineToken::BlockStart`]              |
//! | `...`                         | [`LineToken::BlockEnd`]                |
//! | `natoms: 10`                  | `KeyValue { "natoms", "10" }`          |
//! | `thermo:`                     | `KeyValue { "thermo", "" }`            |
//! | `  - [ 0, 53 ]`               | `DashScalar { "[ 0, 53 ]" }`           |
//! | `  - keywords: [ Step, Time ]`| `DashKeyValue { "keywords", "[...]" }` |
//! | anything else                 | [`LineToken::Other`]                   |
//!
//! A dash line that also contains the separator is always a `DashKeyValue`,
//! never a `DashScalar`.

/// Marker characters and prefixes of the dialect.
///
/// The defaults match what LAMMPS writes for `dump yaml` and
/// `thermo_style yaml`.
///
/// ```
/// use lammpshade_core::lex::Dialect;
///
/// let dialect = Dialect::default();
/// assert_eq!(dialect.block_start, "---");
/// assert_eq!(dialect.block_end, "...");
/// assert_eq!(dialect.separator, ':');
/// assert_eq!(dialect.dash, '-');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    /// Prefix of a line that opens a step block.
    pub block_start: String,
    /// Prefix of a line that closes a step block.
    pub block_end: String,
    /// Key/value separator.
    pub separator: char,
    /// Nested entry marker.
    pub dash: char,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            block_start: "---".to_string(),
            block_end: "...".to_string(),
            separator: ':',
            dash: '-',
        }
    }
}

/// One classified input line. Borrowed slices point into the raw line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineToken<'a> {
    /// Block start marker.
    BlockStart,
    /// Block terminator marker.
    BlockEnd,
    /// `key: value`; `value` is empty when a nested block follows.
    KeyValue { key: &'a str, value: &'a str },
    /// Dash line without a separator: one list element.
    DashScalar { value: &'a str },
    /// Dash line with a separator: one sub-mapping entry.
    DashKeyValue { key: &'a str, value: &'a str },
    /// Blank lines and anything unrecognized.
    Other,
}

impl<'a> LineToken<'a> {
    /// Returns true for the two dash variants.
    #[inline]
    pub fn is_dash(&self) -> bool {
        matches!(self, Self::DashScalar { .. } | Self::DashKeyValue { .. })
    }
}

/// Classify one line (without its line terminator).
///
/// ```
/// use lammpshade_core::lex::{classify, Dialect, LineToken};
///
/// let dialect = Dialect::default();
/// assert_eq!(classify("---", &dialect), LineToken::BlockStart);
/// assert_eq!(
///     classify("  - data: [ 0, 0, 300.0134 ]", &dialect),
///     LineToken::DashKeyValue { key: "data", value: "[ 0, 0, 300.0134 ]" }
/// );
/// ```
pub fn classify<'a>(line: &'a str, dialect: &Dialect) -> LineToken<'a> {
    if line.starts_with(dialect.block_start.as_str()) {
        return LineToken::BlockStart;
    }
    if line.starts_with(dialect.block_end.as_str()) {
        return LineToken::BlockEnd;
    }

    if let Some(rest) = strip_dash_marker(line, dialect.dash) {
        return match split_key_value(rest, dialect.separator) {
            Some((key, value)) => LineToken::DashKeyValue {
                key: key.trim_matches(|c: char| c == dialect.dash || c.is_whitespace()),
                value,
            },
            None => LineToken::DashScalar { value: rest.trim() },
        };
    }

    match split_key_value(line, dialect.separator) {
        Some((key, value)) => LineToken::KeyValue { key, value },
        None => LineToken::Other,
    }
}

/// Split at the first separator, trimming both halves.
#[inline]
pub fn split_key_value(line: &str, separator: char) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(separator)?;
    Some((key.trim(), value.trim()))
}

/// Return what follows a leading dash marker, if the line has one.
///
/// The marker is the dash character after optional indentation, followed by
/// whitespace or the end of the line. `-5` is not a dash line.
#[inline]
pub fn strip_dash_marker(line: &str, dash: char) -> Option<&str> {
    let rest = line.trim_start().strip_prefix(dash)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(line: &str) -> LineToken<'_> {
        classify(line, &Dialect::default())
    }

    // ==================== Marker tests ====================

    #[test]
    fn test_block_markers() {
        assert_eq!(lex("---"), LineToken::BlockStart);
        assert_eq!(lex("..."), LineToken::BlockEnd);
    }

    #[test]
    fn test_markers_are_prefixes() {
        assert_eq!(lex("--- # step 1"), LineToken::BlockStart);
        assert_eq!(lex("....."), LineToken::BlockEnd);
    }

    #[test]
    fn test_indented_markers_are_not_markers() {
        assert_eq!(lex("    ..."), LineToken::Other);
        assert_eq!(lex(" ---"), LineToken::Other);
    }

    // ==================== Key-value tests ====================

    #[test]
    fn test_key_value() {
        assert_eq!(
            lex("natoms: 10"),
            LineToken::KeyValue {
                key: "natoms",
                value: "10"
            }
        );
    }

    #[test]
    fn test_key_with_empty_value() {
        assert_eq!(
            lex("thermo:"),
            LineToken::KeyValue {
                key: "thermo",
                value: ""
            }
        );
        assert_eq!(
            lex("box:   "),
            LineToken::KeyValue {
                key: "box",
                value: ""
            }
        );
    }

    #[test]
    fn test_split_at_first_separator() {
        assert_eq!(
            lex("date: 2024-03-06 13:25:10"),
            LineToken::KeyValue {
                key: "date",
                value: "2024-03-06 13:25:10"
            }
        );
    }

    #[test]
    fn test_indented_key_value() {
        assert_eq!(
            lex("    units: real"),
            LineToken::KeyValue {
                key: "units",
                value: "real"
            }
        );
    }

    #[test]
    fn test_negative_value_is_not_a_dash_line() {
        assert_eq!(
            lex("pe: -6.7733681"),
            LineToken::KeyValue {
                key: "pe",
                value: "-6.7733681"
            }
        );
    }

    // ==================== Dash line tests ====================

    #[test]
    fn test_dash_scalar() {
        assert_eq!(
            lex("  - [ 0, 53 ]"),
            LineToken::DashScalar { value: "[ 0, 53 ]" }
        );
    }

    #[test]
    fn test_dash_scalar_negative_number() {
        assert_eq!(lex("- -5"), LineToken::DashScalar { value: "-5" });
    }

    #[test]
    fn test_bare_dash() {
        assert_eq!(lex("  -"), LineToken::DashScalar { value: "" });
    }

    #[test]
    fn test_dash_key_value() {
        assert_eq!(
            lex("  - keywords: [ Step, Time, Quantity ]"),
            LineToken::DashKeyValue {
                key: "keywords",
                value: "[ Step, Time, Quantity ]"
            }
        );
    }

    #[test]
    fn test_dash_and_separator_is_always_dict_entry() {
        assert_eq!(
            lex("  - [ 1, 2, 12:30 ]"),
            LineToken::DashKeyValue {
                key: "[ 1, 2, 12",
                value: "30 ]"
            }
        );
    }

    #[test]
    fn test_dash_key_noise_stripped() {
        assert_eq!(
            lex("  - - nested: 1"),
            LineToken::DashKeyValue {
                key: "nested",
                value: "1"
            }
        );
    }

    #[test]
    fn test_dash_key_keeps_inner_dashes() {
        assert_eq!(
            lex("  - c_my-temp: 3"),
            LineToken::DashKeyValue {
                key: "c_my-temp",
                value: "3"
            }
        );
    }

    #[test]
    fn test_dash_without_space_is_not_marker() {
        assert_eq!(lex("  -5"), LineToken::Other);
    }

    #[test]
    fn test_is_dash() {
        assert!(lex("- 1").is_dash());
        assert!(lex("- a: 1").is_dash());
        assert!(!lex("a: 1").is_dash());
        assert!(!lex("").is_dash());
    }

    // ==================== Other tests ====================

    #[test]
    fn test_blank_and_free_text() {
        assert_eq!(lex(""), LineToken::Other);
        assert_eq!(lex("   "), LineToken::Other);
        assert_eq!(lex("just some words"), LineToken::Other);
    }

    // ==================== Custom dialect tests ====================

    #[test]
    fn test_custom_dialect() {
        let dialect = Dialect {
            block_start: "BEGIN".to_string(),
            block_end: "END".to_string(),
            separator: '=',
            dash: '*',
        };
        assert_eq!(classify("BEGIN", &dialect), LineToken::BlockStart);
        assert_eq!(classify("END", &dialect), LineToken::BlockEnd);
        assert_eq!(
            classify("natoms = 4", &dialect),
            LineToken::KeyValue {
                key: "natoms",
                value: "4"
            }
        );
        assert_eq!(
            classify("  * 1.5", &dialect),
            LineToken::DashScalar { value: "1.5" }
        );
        assert_eq!(classify("---", &dialect), LineToken::Other);
    }
}
