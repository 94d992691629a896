//! Field-path extraction from management API resources.
//!
//! Paths use `.` as separator and address nested object keys
//! (`attributes.parameters.address`). A segment boundary may carry the
//! array-flatten marker `[]` (`relationships.servers.data[].id`): the prefix
//! must address an array, and the remaining suffix is applied to every
//! element, collecting the results into an array.

use serde_json::Value;

/// Resolve a field-path against a JSON value.
///
/// Returns `None` when any segment is missing or resolves to `null`. With a
/// `[]` marker the result is always an array with one entry per element of
/// the addressed array; elements whose suffix is absent contribute `null`.
pub fn extract(value: &Value, path: &str) -> Option<Value> {
    match path.split_once("[]") {
        None => lookup(value, path).cloned(),
        Some((prefix, suffix)) => {
            let items = lookup(value, prefix)?.as_array()?;
            let suffix = suffix.strip_prefix('.').unwrap_or(suffix);
            let collected = items
                .iter()
                .map(|item| {
                    if suffix.is_empty() {
                        item.clone()
                    } else {
                        extract(item, suffix).unwrap_or(Value::Null)
                    }
                })
                .collect();
            Some(Value::Array(collected))
        }
    }
}

/// Resolve a field-path and render it as cell text, falling back to
/// `default` when the path is absent.
pub fn extract_or(value: &Value, path: &str, default: &str) -> String {
    extract(value, path)
        .map(|v| render(&v))
        .unwrap_or_else(|| default.to_string())
}

/// Render a JSON value as table cell text. Arrays are joined with `", "`,
/// objects serialize as compact JSON, `null` is empty.
pub fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

fn lookup<'a>(mut value: &'a Value, path: &str) -> Option<&'a Value> {
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        value = value.get(segment)?;
    }
    if value.is_null() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_nested_keys() {
        let resource = json!({
            "id": "srv1",
            "attributes": {"parameters": {"address": "127.0.0.1", "port": 3306}}
        });

        assert_eq!(extract(&resource, "id"), Some(json!("srv1")));
        assert_eq!(
            extract(&resource, "attributes.parameters.address"),
            Some(json!("127.0.0.1"))
        );
        assert_eq!(
            extract(&resource, "attributes.parameters.port"),
            Some(json!(3306))
        );
    }

    #[test]
    fn absent_segments_yield_none_at_any_depth() {
        let resource = json!({"attributes": {"state": "Running"}});

        assert_eq!(extract(&resource, "missing"), None);
        assert_eq!(extract(&resource, "attributes.missing"), None);
        assert_eq!(extract(&resource, "attributes.state.deeper"), None);
        assert_eq!(extract(&json!(null), "attributes"), None);
    }

    #[test]
    fn explicit_null_counts_as_absent() {
        let resource = json!({"attributes": {"master_id": null}});
        assert_eq!(extract(&resource, "attributes.master_id"), None);
        assert_eq!(extract_or(&resource, "attributes.master_id", ""), "");
    }

    #[test]
    fn flatten_marker_maps_suffix_over_each_element() {
        let resource = json!({
            "relationships": {
                "servers": {
                    "data": [
                        {"id": "db1", "type": "servers"},
                        {"id": "db2", "type": "servers"}
                    ]
                }
            }
        });

        assert_eq!(
            extract(&resource, "relationships.servers.data[].id"),
            Some(json!(["db1", "db2"]))
        );
    }

    #[test]
    fn flatten_result_has_one_entry_per_element() {
        let resource = json!({
            "data": [
                {"id": "a"},
                {"name": "no id here"},
                {"id": "c"}
            ]
        });

        assert_eq!(
            extract(&resource, "data[].id"),
            Some(json!(["a", null, "c"]))
        );
    }

    #[test]
    fn flatten_on_missing_or_non_array_prefix_is_absent() {
        let resource = json!({"relationships": {"servers": {"data": "oops"}}});

        assert_eq!(extract(&resource, "relationships.monitors.data[].id"), None);
        assert_eq!(extract(&resource, "relationships.servers.data[].id"), None);
    }

    #[test]
    fn renders_native_arrays_joined() {
        let resource = json!({"attributes": {"status": ["Master", "Running"]}});
        assert_eq!(
            extract_or(&resource, "attributes.status", ""),
            "Master, Running"
        );
    }

    #[test]
    fn renders_scalars_and_objects() {
        assert_eq!(render(&json!("text")), "text");
        assert_eq!(render(&json!(42)), "42");
        assert_eq!(render(&json!(true)), "true");
        assert_eq!(render(&json!(null)), "");
        assert_eq!(render(&json!({"connections": 5})), r#"{"connections":5}"#);
    }

    #[test]
    fn default_applies_only_when_absent() {
        let resource = json!({"attributes": {"user": "maxuser"}});
        assert_eq!(extract_or(&resource, "attributes.user", "-"), "maxuser");
        assert_eq!(extract_or(&resource, "attributes.remote", "-"), "-");
    }
}
