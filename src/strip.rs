//! Compaction of JSON results by removing empty values

use serde_json::{Map, Value};

/// Recursively drop `null`, `false`, `""`, `[]` and `{}` from objects and
/// arrays.
///
/// Emptiness is judged after the child itself has been stripped, so a
/// container holding nothing but empty values disappears as well and
/// `strip(&strip(v)) == strip(v)`. Numbers are kept, `0` included.
pub fn strip(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, child) in map {
                let child = strip(child);
                if !is_empty(&child) {
                    out.insert(key.clone(), child);
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(strip)
                .filter(|item| !is_empty(item))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_flat_object() {
        let input = json!({
            "key1": "value",
            "key2": "",
            "key3": [],
            "key4": {},
            "key5": null,
            "key6": false,
            "key7": [1, 2, 3],
        });
        assert_eq!(strip(&input), json!({"key1": "value", "key7": [1, 2, 3]}));
    }

    #[test]
    fn test_strip_nested_object() {
        let input = json!({
            "outer": {
                "inner1": "value",
                "inner2": "",
                "inner3": {"deep": "value", "empty": null},
            }
        });
        assert_eq!(
            strip(&input),
            json!({"outer": {"inner1": "value", "inner3": {"deep": "value"}}})
        );
    }

    #[test]
    fn test_strip_array() {
        let input = json!([1, "", null, [], {}, "value"]);
        assert_eq!(strip(&input), json!([1, "value"]));
    }

    #[test]
    fn test_strip_keeps_zero_and_true() {
        let input = json!({"count": 0, "flag": true, "ratio": 0.0});
        assert_eq!(strip(&input), input);
    }

    #[test]
    fn test_container_emptied_by_stripping_is_dropped() {
        let input = json!({"a": {"b": ""}, "c": [null, false], "d": 1});
        assert_eq!(strip(&input), json!({"d": 1}));
    }

    #[test]
    fn test_strip_preserves_key_order() {
        let input = json!({"zeta": 1, "alpha": "", "mid": 2, "beta": 3});
        let keys: Vec<_> = strip(&input)
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["zeta", "mid", "beta"]);
    }

    #[test]
    fn test_strip_is_idempotent() {
        let samples = [
            json!({"a": {"b": {"c": ""}}, "d": [[], [1, {}], {"e": null}]}),
            json!([{"x": false}, "", [[]], "keep"]),
            json!({"classes": [{"name": "Foo", "methods": []}]}),
            json!("scalar"),
            json!(null),
        ];
        for sample in samples {
            let once = strip(&sample);
            assert_eq!(strip(&once), once, "not idempotent for {sample}");
        }
    }

    #[test]
    fn test_scalars_pass_through() {
        assert_eq!(strip(&json!("")), json!(""));
        assert_eq!(strip(&json!(false)), json!(false));
        assert_eq!(strip(&json!(42)), json!(42));
    }
}
