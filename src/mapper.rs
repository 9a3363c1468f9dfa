//! Field-by-field copy from decoded JSON objects onto typed records.
//!
//! The registry's v1 API makes no schema promises, so mapping is a
//! best-effort structural copy rather than validation: a record field is set
//! when the matching key is present with a compatible JSON type and stays
//! unset otherwise. Nothing here ever fails.

use serde_json::{Map, Value};

/// A record that can be populated from one decoded JSON object.
pub trait FromObject: Sized {
    fn from_object(obj: &Map<String, Value>) -> Self;
}

pub(crate) fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_owned)
}

pub(crate) fn u64_field(obj: &Map<String, Value>, key: &str) -> Option<u64> {
    obj.get(key).and_then(Value::as_u64)
}

pub(crate) fn bool_field(obj: &Map<String, Value>, key: &str) -> Option<bool> {
    obj.get(key).and_then(Value::as_bool)
}

/// String array field. Non-string elements are dropped; a missing or
/// non-array value yields an empty list.
pub(crate) fn string_list_field(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PackageMetrics, PackageVersion};
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_present_fields_are_copied_verbatim() {
        let source = obj(json!({
            "downloads": 42,
            "rating_score": 7,
            "latest_version": "1.2.3"
        }));

        let metrics = PackageMetrics::from_object(&source);
        assert_eq!(metrics.downloads, Some(42));
        assert_eq!(metrics.rating_score, Some(7));
        assert_eq!(metrics.latest_version.as_deref(), Some("1.2.3"));
    }

    #[test]
    fn test_absent_fields_stay_unset() {
        let source = obj(json!({ "downloads": 42 }));

        let metrics = PackageMetrics::from_object(&source);
        assert_eq!(metrics.downloads, Some(42));
        assert_eq!(metrics.rating_score, None);
        assert_eq!(metrics.latest_version, None);
    }

    #[test]
    fn test_mismatched_types_stay_unset() {
        let source = obj(json!({
            "downloads": "forty-two",
            "rating_score": 7,
            "latest_version": 1.5
        }));

        let metrics = PackageMetrics::from_object(&source);
        assert_eq!(metrics.downloads, None);
        assert_eq!(metrics.rating_score, Some(7));
        assert_eq!(metrics.latest_version, None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let source = obj(json!({
            "downloads": 3,
            "brand_new_api_field": { "nested": true }
        }));

        let metrics = PackageMetrics::from_object(&source);
        assert_eq!(metrics.downloads, Some(3));
    }

    #[test]
    fn test_string_list_field_drops_non_strings() {
        let source = obj(json!({
            "dependencies": ["BepInEx-BepInExPack-5.4.2100", 17, null, "Owner-Lib-1.0.0"]
        }));

        let version = PackageVersion::from_object(&source);
        assert_eq!(
            version.dependencies,
            vec!["BepInEx-BepInExPack-5.4.2100", "Owner-Lib-1.0.0"]
        );
    }

    #[test]
    fn test_empty_object_maps_to_all_defaults() {
        let source = obj(json!({}));

        let version = PackageVersion::from_object(&source);
        assert_eq!(version.name, None);
        assert_eq!(version.downloads, None);
        assert_eq!(version.is_active, None);
        assert!(version.dependencies.is_empty());
    }
}
