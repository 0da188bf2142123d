use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::{AdapterError, InputValue};

/// The adapter output.
///
/// `input` holds the business parameters handed to policy evaluation.
/// `metadata` holds provenance for audit logging and is never sent to policy.
/// Both maps are ordered so that identical inputs serialize identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdapterResult {
    pub input: BTreeMap<String, InputValue>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, InputValue>,
}

impl AdapterResult {
    pub fn input_int(&self, key: &str) -> Option<usize> {
        self.input.get(key).and_then(InputValue::as_int)
    }

    pub fn input_bool(&self, key: &str) -> Option<bool> {
        self.input.get(key).and_then(InputValue::as_bool)
    }

    pub fn input_str_list(&self, key: &str) -> Option<&[String]> {
        self.input.get(key).and_then(InputValue::as_str_list)
    }

    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(InputValue::as_str)
    }
}

/// Converts raw tool output into policy input.
pub trait Adapter {
    /// Adapter identifier, by convention `{tool}-{artifact}` (e.g. "terraform-plan").
    fn name(&self) -> &'static str;

    /// Extract business parameters from the raw artifact bytes.
    ///
    /// `config` is a flat map of adapter-specific settings. Keys the adapter
    /// does not recognize are ignored.
    fn convert(
        &self,
        raw: &[u8],
        config: &HashMap<String, String>,
    ) -> Result<AdapterResult, AdapterError>;
}
