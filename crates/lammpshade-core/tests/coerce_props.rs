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

//! Property tests for value coercion.

use lammpshade_core::{coerce, Value};
use proptest::prelude::*;

proptest! {
    #[test]
    fn coerce_is_total(token in ".*") {
        let value = coerce(&token);
        prop_assert!(matches!(
            value,
            Value::Int(_) | Value::Float(_) | Value::String(_) | Value::List(_)
        ));
    }

    #[test]
    fn coerce_ignores_surrounding_whitespace(token in "[ -~]{0,24}", pad in "[ \t]{0,4}") {
        let padded = format!("{}{}{}", pad, token, pad);
        prop_assert_eq!(coerce(&padded), coerce(&token));
    }

    #[test]
    fn integers_round_trip(n in any::<i64>()) {
        prop_assert_eq!(coerce(&n.to_string()), Value::Int(n));
    }

    #[test]
    fn decimals_are_floats(int_part in -100_000i64..100_000, frac in 0u32..10_000) {
        let token = format!("{}.{}", int_part, frac);
        let expected: f64 = token.parse().unwrap();
        prop_assert_eq!(coerce(&token), Value::Float(expected));
    }

    #[test]
    fn string_results_are_trimmed(token in ".*") {
        if let Value::String(s) = coerce(&token) {
            prop_assert_eq!(s.as_str(), token.trim());
        }
    }

    #[test]
    fn list_elements_are_scalars(items in prop::collection::vec("[a-z0-9.]{1,6}", 0..8)) {
        let token = format!("[{}]", items.join(", "));
        match coerce(&token) {
            Value::List(values) => {
                prop_assert_eq!(values.len(), items.len());
                prop_assert!(values.iter().all(Value::is_scalar));
            }
            other => prop_assert!(false, "expected list, got {:?}", other),
        }
    }
}

#[test]
fn documented_examples() {
    assert_eq!(coerce("123"), Value::Int(123));
    assert_eq!(coerce("-3.14e-2"), Value::Float(-0.0314));
    assert_eq!(
        coerce("[1, 2.5, hello]"),
        Value::List(vec![Value::Int(1), Value::Float(2.5), Value::from("hello")])
    );
    assert_eq!(coerce("plain"), Value::from("plain"));
}
