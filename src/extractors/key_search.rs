use crate::config::default_max_search_depth;
use serde_json::{map, Value};
use std::slice;

enum Frame<'a> {
    Object(map::Iter<'a>),
    Array(slice::Iter<'a, Value>),
}

/// Find the first value stored under `key` anywhere in `node`.
///
/// Traversal is depth-first: each object's keys are visited in document
/// order, and a nested container is searched completely before the next key
/// of its parent is looked at. Arrays are walked element by element. A key
/// whose value is `null` still counts as a match.
pub fn search_for_key<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    search_for_key_bounded(node, key, default_max_search_depth())
}

/// Same as [`search_for_key`], but containers nested more than `max_depth`
/// levels below `node` are not entered.
pub fn search_for_key_bounded<'a>(
    node: &'a Value,
    key: &str,
    max_depth: usize,
) -> Option<&'a Value> {
    let mut stack = Vec::new();
    match frame_for(node) {
        Some(frame) => stack.push(frame),
        None => return None,
    }

    while let Some(frame) = stack.last_mut() {
        let child = match frame {
            Frame::Object(entries) => match entries.next() {
                Some((k, v)) if k == key => return Some(v),
                Some((_, v)) => v,
                None => {
                    stack.pop();
                    continue;
                }
            },
            Frame::Array(items) => match items.next() {
                Some(v) => v,
                None => {
                    stack.pop();
                    continue;
                }
            },
        };

        if stack.len() <= max_depth {
            if let Some(frame) = frame_for(child) {
                stack.push(frame);
            }
        }
    }

    None
}

fn frame_for(value: &Value) -> Option<Frame<'_>> {
    match value {
        Value::Object(map) => Some(Frame::Object(map.iter())),
        Value::Array(items) => Some(Frame::Array(items.iter())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_level_key() {
        let data = json!({ "headline": "Pancakes", "url": "https://example.com" });
        assert_eq!(search_for_key(&data, "headline"), Some(&json!("Pancakes")));
    }

    #[test]
    fn test_deeply_nested_key() {
        let data = json!({
            "a": { "b": { "c": { "d": { "totalTime": "PT45M" } } } }
        });
        assert_eq!(search_for_key(&data, "totalTime"), Some(&json!("PT45M")));
    }

    #[test]
    fn test_missing_key() {
        let data = json!({ "a": { "b": [1, 2, { "c": 3 }] } });
        assert_eq!(search_for_key(&data, "headline"), None);
    }

    #[test]
    fn test_searches_through_arrays() {
        let data = json!({
            "@graph": [
                { "@type": "Organization", "name": "Example Kitchen" },
                { "@type": "Recipe", "recipeIngredient": ["1 cup flour"] }
            ]
        });
        assert_eq!(
            search_for_key(&data, "recipeIngredient"),
            Some(&json!(["1 cup flour"]))
        );
    }

    #[test]
    fn test_nested_match_before_later_sibling() {
        // The first key's subtree is exhausted before the second key is seen
        let data = json!({
            "first": { "name": "nested" },
            "name": "top level"
        });
        assert_eq!(search_for_key(&data, "name"), Some(&json!("nested")));
    }

    #[test]
    fn test_parent_key_before_its_children() {
        let data = json!({
            "name": "outer",
            "publisher": { "name": "inner" }
        });
        assert_eq!(search_for_key(&data, "name"), Some(&json!("outer")));
    }

    #[test]
    fn test_first_match_in_document_order() {
        let data: Value =
            serde_json::from_str(r#"{"z": {"k": 1}, "a": {"k": 2}}"#).unwrap();
        assert_eq!(search_for_key(&data, "k"), Some(&json!(1)));
    }

    #[test]
    fn test_null_value_is_a_match() {
        let data = json!({ "a": { "k": null }, "b": { "k": "later" } });
        assert_eq!(search_for_key(&data, "k"), Some(&Value::Null));
    }

    #[test]
    fn test_scalar_root() {
        assert_eq!(search_for_key(&json!("headline"), "headline"), None);
        assert_eq!(search_for_key(&Value::Null, "headline"), None);
    }

    #[test]
    fn test_depth_bound() {
        let data = json!({ "a": { "b": { "k": "deep" } } });
        assert_eq!(search_for_key_bounded(&data, "k", 0), None);
        assert_eq!(search_for_key_bounded(&data, "k", 1), None);
        assert_eq!(
            search_for_key_bounded(&data, "k", 2),
            Some(&json!("deep"))
        );
    }

    #[test]
    fn test_very_deep_nesting_does_not_overflow() {
        let mut data = json!({ "k": "bottom" });
        for _ in 0..10_000 {
            // Move each level in; json! would serialize a copy of the whole tree
            let mut wrapper = serde_json::Map::new();
            wrapper.insert("wrap".to_string(), data);
            data = Value::Object(wrapper);
        }
        assert_eq!(search_for_key_bounded(&data, "k", 20_000), Some(&json!("bottom")));
        assert_eq!(search_for_key(&data, "k"), None);
        // Dropping a 10k-deep Value recurses; forget it to keep the test stack small
        std::mem::forget(data);
    }
}
