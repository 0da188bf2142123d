use evidra_defs::{AdapterError, ResourceMode};
use evidra_utils::{parse_format_version, version_in_range};
use semver::Version;
use serde::Deserialize;

use crate::ADAPTER_NAME;

/// Rendered plan as produced by `terraform show -json`.
///
/// Only the fields the adapter reads are modelled; everything else is ignored.
#[derive(Deserialize, Debug)]
pub struct Plan {
    #[serde(default)]
    pub format_version: String,
    #[serde(default)]
    pub terraform_version: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resource_changes: Vec<ResourceChange>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resource_drift: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub deferred_changes: Vec<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
pub struct ResourceChange {
    pub address: String,
    #[serde(default)]
    pub mode: ResourceMode,
    #[serde(rename = "type", default)]
    pub resource_type: String,
    #[serde(default)]
    pub provider_name: String,
    pub change: Option<Change>,
}

#[derive(Deserialize, Debug)]
pub struct Change {
    #[serde(default)]
    pub actions: Vec<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Plan {
    /// Lowest supported plan format version (inclusive).
    pub fn min_format_version() -> Version {
        Version::new(0, 1, 0)
    }

    /// First unsupported plan format version.
    pub fn max_format_version() -> Version {
        Version::new(2, 0, 0)
    }

    pub fn decode(raw: &[u8]) -> Result<Plan, AdapterError> {
        serde_json::from_slice(raw).map_err(|e| AdapterError::decode(ADAPTER_NAME, e.to_string()))
    }

    /// Check that this is a plan document in a format version we understand.
    pub fn validate(&self) -> Result<(), AdapterError> {
        if self.format_version.trim().is_empty() {
            return Err(AdapterError::validation(
                ADAPTER_NAME,
                "unexpected plan input, format version is missing",
            ));
        }

        let version = parse_format_version(&self.format_version).map_err(|e| {
            AdapterError::validation(
                ADAPTER_NAME,
                format!("invalid format version {:?}: {}", self.format_version, e),
            )
        })?;

        if !version_in_range(
            &version,
            &Self::min_format_version(),
            &Self::max_format_version(),
        ) {
            return Err(AdapterError::validation(
                ADAPTER_NAME,
                format!(
                    "unsupported plan format version: {:?} does not satisfy \">= 0.1, < 2.0\"",
                    self.format_version
                ),
            ));
        }

        Ok(())
    }
}
