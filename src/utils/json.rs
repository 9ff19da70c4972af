//! Helpers over loosely-typed JSON values

use serde_json::{Map, Value};

/// JavaScript truthiness of a JSON value
///
/// `null`, `false`, `0` and `""` are falsy; arrays and objects are always
/// truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Shallow-merge values into a new object, left to right
///
/// Later keys overwrite earlier ones. Arrays contribute their indices as
/// keys; scalars and `null` contribute nothing. Nested values are copied,
/// not merged.
pub fn extend<'a, I>(values: I) -> Map<String, Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut merged = Map::new();
    for value in values {
        match value {
            Value::Object(obj) => {
                for (key, v) in obj {
                    merged.insert(key.clone(), v.clone());
                }
            }
            Value::Array(items) => {
                for (index, v) in items.iter().enumerate() {
                    merged.insert(index.to_string(), v.clone());
                }
            }
            _ => {}
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&falsy), "{} should be falsy", falsy);
        }
        for truthy in [json!(true), json!(-1), json!("0"), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{} should be truthy", truthy);
        }
    }

    #[test]
    fn test_extend_later_keys_win() {
        let a = json!({"title": "old", "completed": false});
        let b = json!({"title": "new", "id": "x"});
        let merged = extend([&a, &b]);

        assert_eq!(Value::Object(merged), json!({"title": "new", "completed": false, "id": "x"}));
    }

    #[test]
    fn test_extend_is_shallow() {
        let a = json!({"nested": {"x": 1, "y": 2}});
        let b = json!({"nested": {"x": 3}});
        let merged = extend([&a, &b]);
        assert_eq!(merged["nested"], json!({"x": 3}));
    }

    #[test]
    fn test_extend_skips_scalars_and_indexes_arrays() {
        let values = [json!(null), json!(5), json!(["a", "b"]), json!({"1": "z"})];
        let merged = extend(&values);
        assert_eq!(Value::Object(merged), json!({"0": "a", "1": "z"}));
    }

    #[test]
    fn test_extend_does_not_touch_inputs() {
        let a = json!({"k": 1});
        let mut merged = extend([&a]);
        merged.insert("k".to_string(), json!(2));
        assert_eq!(a, json!({"k": 1}));
    }
}
