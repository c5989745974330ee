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

//! Value coercion for untyped dump tokens.
//!
//! The dump format carries no type information, so every value is classified
//! from its text alone. Rules are tried in order and the first match wins:
//!
//! 1. Surrounding whitespace is trimmed.
//! 2. ASCII digits with an optional leading `-` become [`Value::Int`].
//! 3. Anything containing a `.` that parses as a float (including scientific
//!    notation such as `-6.5e-3`) becomes [`Value::Float`].
//! 4. `[a, b, c]` becomes a [`Value::List`] whose elements go through rules
//!    2 and 3; empty elements are dropped, so trailing commas are harmless.
//! 5. Everything else is kept as a [`Value::String`].
//!
//! Coercion is total: malformed numbers are simply strings.
//!
//! # Limitations
//!
//! Bracketed lists are one level deep. `[[1, 2], [3]]` is split on every
//! comma and yields the strings `"[1"`, `"2]"` and `"[3]"`.

use crate::value::Value;

/// Classify a raw token into a typed value.
///
/// # Examples
///
/// ```
/// use lammpshade_core::{coerce, Value};
///
/// assert_eq!(coerce("123"), Value::Int(123));
/// assert_eq!(coerce(" -3.14e-2 "), Value::Float(-0.0314));
/// assert_eq!(
///     coerce("[1, 2.5, hello]"),
///     Value::List(vec![Value::Int(1), Value::Float(2.5), Value::from("hello")])
/// );
/// assert_eq!(coerce("plain"), Value::from("plain"));
/// ```
pub fn coerce(token: &str) -> Value {
    let token = token.trim();

    if let Some(value) = coerce_number(token) {
        return value;
    }

    if let Some(items) = coerce_list(token) {
        return Value::List(items);
    }

    Value::String(token.to_string())
}

/// Rules 2 and 3: integer, then dotted float.
#[inline]
fn coerce_number(token: &str) -> Option<Value> {
    if is_integer_literal(token) {
        // Digit strings past i64 are still numbers.
        return Some(match token.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Float(token.parse::<f64>().ok()?),
        });
    }

    if token.contains('.') {
        if let Ok(f) = token.parse::<f64>() {
            return Some(Value::Float(f));
        }
    }

    None
}

/// Digits only, with at most one leading minus sign.
#[inline]
fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Rule 4: a single-level bracketed list.
fn coerce_list(token: &str) -> Option<Vec<Value>> {
    let inner = token.strip_prefix('[')?.strip_suffix(']')?;

    let items = inner
        .split(',')
        .map(str::trim)
        .filter_map(|elem| match coerce_number(elem) {
            Some(value) => Some(value),
            None if elem.is_empty() => None,
            None => Some(Value::String(elem.to_string())),
        })
        .collect();

    Some(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: Vec<Value>) -> Value {
        Value::List(items)
    }

    // ==================== Integer tests ====================

    #[test]
    fn test_integer() {
        assert_eq!(coerce("123"), Value::Int(123));
        assert_eq!(coerce("0"), Value::Int(0));
    }

    #[test]
    fn test_negative_integer() {
        assert_eq!(coerce("-42"), Value::Int(-42));
    }

    #[test]
    fn test_integer_with_whitespace() {
        assert_eq!(coerce("  7\t"), Value::Int(7));
    }

    #[test]
    fn test_lone_minus_is_string() {
        assert_eq!(coerce("-"), Value::from("-"));
    }

    #[test]
    fn test_double_minus_is_string() {
        assert_eq!(coerce("--5"), Value::from("--5"));
    }

    #[test]
    fn test_plus_sign_is_not_integer() {
        assert_eq!(coerce("+5"), Value::from("+5"));
    }

    #[test]
    fn test_integer_overflow_becomes_float() {
        assert_eq!(
            coerce("123456789012345678901234567890"),
            Value::Float(1.2345678901234568e29)
        );
    }

    // ==================== Float tests ====================

    #[test]
    fn test_float() {
        assert_eq!(coerce("3.14"), Value::Float(3.14));
        assert_eq!(coerce("-0.5"), Value::Float(-0.5));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(coerce("-6.5e-3"), Value::Float(-0.0065));
        assert_eq!(coerce("-3.14e-2"), Value::Float(-0.0314));
        assert_eq!(coerce("2.5E+4"), Value::Float(25000.0));
    }

    #[test]
    fn test_leading_and_trailing_dot() {
        assert_eq!(coerce(".5"), Value::Float(0.5));
        assert_eq!(coerce("5."), Value::Float(5.0));
    }

    #[test]
    fn test_exponent_without_dot_is_string() {
        assert_eq!(coerce("1e-3"), Value::from("1e-3"));
    }

    #[test]
    fn test_malformed_float_is_string() {
        assert_eq!(coerce("1.2.3"), Value::from("1.2.3"));
        assert_eq!(coerce("."), Value::from("."));
        assert_eq!(coerce("v1.2"), Value::from("v1.2"));
    }

    // ==================== List tests ====================

    #[test]
    fn test_list_of_integers() {
        assert_eq!(
            coerce("[1, 2, 3]"),
            list(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }

    #[test]
    fn test_list_mixed() {
        assert_eq!(
            coerce("[1, 2.5, hello]"),
            list(vec![Value::Int(1), Value::Float(2.5), Value::from("hello")])
        );
    }

    #[test]
    fn test_list_padded_like_lammps() {
        assert_eq!(
            coerce("[ 0, 52.57 ]"),
            list(vec![Value::Int(0), Value::Float(52.57)])
        );
    }

    #[test]
    fn test_list_trailing_comma_dropped() {
        assert_eq!(
            coerce("[ p, p, p, ]"),
            list(vec![Value::from("p"), Value::from("p"), Value::from("p")])
        );
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(coerce("[]"), list(vec![]));
        assert_eq!(coerce("[ , , ]"), list(vec![]));
    }

    #[test]
    fn test_list_elements_never_recurse() {
        assert_eq!(
            coerce("[[1, 2], [3]]"),
            list(vec![Value::from("[1"), Value::from("2]"), Value::from("[3]")])
        );
    }

    #[test]
    fn test_list_negative_and_scientific() {
        assert_eq!(
            coerce("[ -1, -2.5e-06, x ]"),
            list(vec![Value::Int(-1), Value::Float(-2.5e-06), Value::from("x")])
        );
    }

    #[test]
    fn test_unbalanced_brackets_are_strings() {
        assert_eq!(coerce("[1, 2"), Value::from("[1, 2"));
        assert_eq!(coerce("1, 2]"), Value::from("1, 2]"));
    }

    // ==================== String tests ====================

    #[test]
    fn test_plain_string() {
        assert_eq!(coerce("plain"), Value::from("plain"));
        assert_eq!(coerce("LAMMPS"), Value::from("LAMMPS"));
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(coerce(""), Value::from(""));
        assert_eq!(coerce("   "), Value::from(""));
    }

    #[test]
    fn test_string_keeps_inner_whitespace() {
        assert_eq!(coerce("  hello world  "), Value::from("hello world"));
    }

    #[test]
    fn test_special_float_words_are_strings() {
        assert_eq!(coerce("inf"), Value::from("inf"));
        assert_eq!(coerce("nan"), Value::from("nan"));
    }

    #[test]
    fn test_unicode_digits_are_strings() {
        assert_eq!(coerce("١٢٣"), Value::from("١٢٣"));
    }
}
