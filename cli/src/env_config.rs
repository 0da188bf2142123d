use std::collections::HashMap;
use std::env;

use terraform_plan::CONFIG_KEYS;

pub const ENV_PREFIX: &str = "EVIDRA_";

/// Environment variable carrying a config key, e.g. `EVIDRA_MAX_RESOURCE_CHANGES`.
pub fn env_var_name(key: &str) -> String {
    format!("{}{}", ENV_PREFIX, key.to_uppercase())
}

pub fn config_from_env() -> HashMap<String, String> {
    config_from_lookup(|name| env::var(name).ok())
}

/// Collect every known config key whose variable is set and non-empty.
pub fn config_from_lookup<F>(lookup: F) -> HashMap<String, String>
where
    F: Fn(&str) -> Option<String>,
{
    CONFIG_KEYS
        .iter()
        .filter_map(|key| {
            lookup(&env_var_name(key))
                .filter(|v| !v.is_empty())
                .map(|v| (key.to_string(), v))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_env_var_name() {
        assert_eq!(
            env_var_name("max_resource_changes"),
            "EVIDRA_MAX_RESOURCE_CHANGES"
        );
    }

    #[test]
    fn test_config_from_lookup() {
        let vars: HashMap<String, String> = [
            ("EVIDRA_MAX_RESOURCE_CHANGES", "2"),
            ("EVIDRA_FILTER_ACTIONS", ""),
            ("EVIDRA_SOMETHING_ELSE", "x"),
            ("max_resource_changes", "99"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = config_from_lookup(|name| vars.get(name).cloned());
        assert_eq!(config.len(), 1);
        assert_eq!(config["max_resource_changes"], "2");
    }
}
