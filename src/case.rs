// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! snake_case ⇄ camelCase key rewriting for JSON payloads.
//!
//! The backend speaks snake_case; callers of this crate see camelCase.
//! Only object keys are rewritten. Strings (date strings included), numbers,
//! booleans and null are leaves and come back untouched. Arrays are mapped
//! element by element, at any depth.
//!
//! ```
//! use serde_json::json;
//! use wealth_api_client::case::{to_camel, to_snake};
//!
//! let wire = json!({ "user_first_name": "Ada", "holdings": [{ "asset_id": 7 }] });
//! let camel = to_camel(&wire);
//! assert_eq!(camel, json!({ "userFirstName": "Ada", "holdings": [{ "assetId": 7 }] }));
//! assert_eq!(to_snake(&camel), wire);
//! ```

use serde_json::{Map, Value};

/// Rewrite every `_x` (x an ASCII lowercase letter) as `X`.
///
/// Underscores followed by anything else are kept, so `address_line_1`
/// stays as is and `a_b_c` becomes `aBC`.
pub fn camel_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(next) = chars.peek().copied().filter(char::is_ascii_lowercase) {
                out.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        out.push(c);
    }

    out
}

/// Rewrite every ASCII uppercase letter `X` as `_x`.
pub fn snake_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Camel-case every key of a borrowed value.
pub fn to_camel(value: &Value) -> Value {
    camelize(value.clone())
}

/// Snake-case every key of a borrowed value.
pub fn to_snake(value: &Value) -> Value {
    snakeize(value.clone())
}

/// Camel-case every key, consuming the value.
pub fn camelize(value: Value) -> Value {
    rewrite_keys(value, camel_key)
}

/// Snake-case every key, consuming the value.
pub fn snakeize(value: Value) -> Value {
    rewrite_keys(value, snake_key)
}

fn rewrite_keys(value: Value, rename: fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, inner) in map {
                out.insert(rename(&key), rewrite_keys(inner, rename));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| rewrite_keys(item, rename))
                .collect(),
        ),
        leaf => leaf,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn camel_key_uppercases_each_marked_letter() {
        assert_eq!(camel_key("user_first_name"), "userFirstName");
        assert_eq!(camel_key("a_b_c"), "aBC");
        assert_eq!(camel_key("address_line_1"), "address_line_1");
        assert_eq!(camel_key("a__b"), "a_B");
        assert_eq!(camel_key("plain"), "plain");
    }

    #[test]
    fn snake_key_splits_on_uppercase() {
        assert_eq!(snake_key("userFirstName"), "user_first_name");
        assert_eq!(snake_key("aBC"), "a_b_c");
        assert_eq!(snake_key("plain"), "plain");
        assert_eq!(snake_key("already_snake"), "already_snake");
    }

    #[test]
    fn multi_underscore_keys_camelize_exactly() {
        assert_eq!(
            to_camel(&json!({ "user_first_name": "x" })),
            json!({ "userFirstName": "x" })
        );
        assert_eq!(to_camel(&json!({ "a_b_c": 1 })), json!({ "aBC": 1 }));
    }

    #[test]
    fn arrays_of_objects_transform_element_wise() {
        assert_eq!(
            to_camel(&json!([{ "a_b": 1 }, { "c_d": 2 }])),
            json!([{ "aB": 1 }, { "cD": 2 }])
        );
    }

    #[test]
    fn nested_structures_are_rewritten_at_every_depth() {
        let input = json!({
            "portfolio_summary": {
                "top_holdings": [
                    { "asset_name": "Fund", "price_history": [{ "closing_price": 1.5 }] }
                ],
                "last_updated_at": "2024-03-01T12:00:00Z"
            }
        });
        let expected = json!({
            "portfolioSummary": {
                "topHoldings": [
                    { "assetName": "Fund", "priceHistory": [{ "closingPrice": 1.5 }] }
                ],
                "lastUpdatedAt": "2024-03-01T12:00:00Z"
            }
        });
        assert_eq!(to_camel(&input), expected);
        assert_eq!(to_snake(&expected), input);
    }

    #[test]
    fn leaves_pass_through_unchanged() {
        for leaf in [
            Value::Null,
            json!(true),
            json!(42),
            json!("created_at"),
            json!("2024-01-31T00:00:00.000Z"),
        ] {
            assert_eq!(to_camel(&leaf), leaf);
            assert_eq!(to_snake(&leaf), leaf);
        }
    }

    #[test]
    fn string_values_are_never_recased() {
        let input = json!({ "sort_by": "created_at", "tags": ["first_tag"] });
        assert_eq!(
            to_camel(&input),
            json!({ "sortBy": "created_at", "tags": ["first_tag"] })
        );
    }

    #[test]
    fn transforms_are_idempotent() {
        let input = json!({
            "user_id": 1,
            "nestedList": [{ "inner_key": { "deepKey": null } }],
            "x": "y"
        });
        let camel = to_camel(&input);
        assert_eq!(to_camel(&camel), camel);
        let snake = to_snake(&input);
        assert_eq!(to_snake(&snake), snake);
    }

    #[test]
    fn snake_round_trip_restores_original_keys() {
        let input = json!({
            "account_id": "acc_1",
            "is_primary": true,
            "balances": [{ "available_balance": "10.00", "currency_code": "USD" }]
        });
        assert_eq!(to_snake(&to_camel(&input)), input);
    }

    #[test]
    fn deep_nesting_has_no_depth_cap() {
        let mut value = json!({ "leaf_key": 1 });
        for _ in 0..200 {
            value = json!({ "wrapper_key": value });
        }
        let mut camel = to_camel(&value);
        for _ in 0..200 {
            camel = camel["wrapperKey"].take();
        }
        assert_eq!(camel, json!({ "leafKey": 1 }));
    }
}
