//! Deep merge for layered YAML configuration.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely (a project that lists `tools` owns the list)
//! - Null values in overlay delete the key, which restores the built-in default
//! - Scalars in overlay replace scalars in base

use serde_yaml::Value;

/// Deep merge two YAML values; `overlay` wins at the point of conflict.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge layers in order (later overrides earlier).
///
/// Null layers (empty files) are skipped rather than wiping the result.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .filter(|config| !config.is_null())
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn nested_settings_merge_recursively() {
        let base = yaml("settings:\n  timeout_secs: 5\n  default_output: normal\n");
        let overlay = yaml("settings:\n  timeout_secs: 10\n");

        let result = deep_merge(&base, &overlay);

        assert_eq!(result["settings"]["timeout_secs"], 10);
        assert_eq!(result["settings"]["default_output"], "normal");
    }

    #[test]
    fn sequences_are_replaced_not_merged() {
        let base = yaml(
            r#"
files:
  manifests:
    - k8s-deployment.yaml
    - cloudbuild.yaml
"#,
        );
        let overlay = yaml("files:\n  manifests:\n    - skaffold.yaml\n");

        let result = deep_merge(&base, &overlay);
        let manifests = result["files"]["manifests"].as_sequence().unwrap();

        assert_eq!(manifests.len(), 1);
        assert_eq!(manifests[0], "skaffold.yaml");
    }

    #[test]
    fn null_removes_inherited_value() {
        let base = yaml("cloud:\n  cli: gcloud\n  project_env: MY_PROJECT\n");
        let overlay = yaml("cloud:\n  project_env: null\n");

        let result = deep_merge(&base, &overlay);

        assert!(result["cloud"].get("project_env").is_none());
        assert_eq!(result["cloud"]["cli"], "gcloud");
    }

    #[test]
    fn empty_overlay_returns_base_unchanged() {
        let base = yaml("settings:\n  timeout_secs: 3\n");
        let result = deep_merge(&base, &yaml("{}"));
        assert_eq!(result["settings"]["timeout_secs"], 3);
    }

    #[test]
    fn merge_configs_merges_multiple_in_order() {
        let configs = vec![yaml("a: 1\nb: 2"), yaml("b: 3\nc: 4"), yaml("c: 5")];

        let result = merge_configs(&configs);

        assert_eq!(result["a"], 1);
        assert_eq!(result["b"], 3);
        assert_eq!(result["c"], 5);
    }

    #[test]
    fn merge_configs_skips_null_layers() {
        let configs = vec![yaml("a: 1"), Value::Null];
        let result = merge_configs(&configs);
        assert_eq!(result["a"], 1);
    }
}
