use serde::{Deserialize, Serialize};

use crate::ResourceAction;

/// One itemized entry of the `resource_changes` detail array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceChangeRecord {
    /// Full Terraform resource address (e.g., "module.s3bucket.aws_s3_bucket.example")
    pub address: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub action: ResourceAction,
    /// Provider source (e.g., "registry.terraform.io/hashicorp/aws"), may be empty
    pub provider: String,
}

/// A business parameter or metadata value.
///
/// Adapter output is a flat string-keyed map whose values differ in kind;
/// this closed set is every kind an adapter may emit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum InputValue {
    Int(usize),
    Bool(bool),
    Str(String),
    StrList(Vec<String>),
    Changes(Vec<ResourceChangeRecord>),
}

impl InputValue {
    pub fn as_int(&self) -> Option<usize> {
        match self {
            InputValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            InputValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            InputValue::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str_list(&self) -> Option<&[String]> {
        match self {
            InputValue::StrList(v) => Some(v),
            // An empty JSON array reads back as a string list.
            InputValue::Changes(v) if v.is_empty() => Some(&[]),
            _ => None,
        }
    }

    pub fn as_changes(&self) -> Option<&[ResourceChangeRecord]> {
        match self {
            InputValue::Changes(v) => Some(v),
            InputValue::StrList(v) if v.is_empty() => Some(&[]),
            _ => None,
        }
    }
}

impl From<usize> for InputValue {
    fn from(v: usize) -> Self {
        InputValue::Int(v)
    }
}

impl From<bool> for InputValue {
    fn from(v: bool) -> Self {
        InputValue::Bool(v)
    }
}

impl From<String> for InputValue {
    fn from(v: String) -> Self {
        InputValue::Str(v)
    }
}

impl From<&str> for InputValue {
    fn from(v: &str) -> Self {
        InputValue::Str(v.to_string())
    }
}

impl From<Vec<String>> for InputValue {
    fn from(v: Vec<String>) -> Self {
        InputValue::StrList(v)
    }
}

impl From<Vec<ResourceChangeRecord>> for InputValue {
    fn from(v: Vec<ResourceChangeRecord>) -> Self {
        InputValue::Changes(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_values_serialize_untagged() {
        assert_eq!(serde_json::to_value(InputValue::from(3usize)).unwrap(), json!(3));
        assert_eq!(serde_json::to_value(InputValue::from(true)).unwrap(), json!(true));
        assert_eq!(serde_json::to_value(InputValue::from("x")).unwrap(), json!("x"));
        assert_eq!(
            serde_json::to_value(InputValue::from(vec!["a".to_string()])).unwrap(),
            json!(["a"])
        );

        let record = ResourceChangeRecord {
            address: "aws_instance.web".to_string(),
            resource_type: "aws_instance".to_string(),
            action: ResourceAction::Replace,
            provider: "registry.terraform.io/hashicorp/aws".to_string(),
        };
        assert_eq!(
            serde_json::to_value(InputValue::from(vec![record])).unwrap(),
            json!([{
                "address": "aws_instance.web",
                "type": "aws_instance",
                "action": "replace",
                "provider": "registry.terraform.io/hashicorp/aws"
            }])
        );
    }

    #[test]
    fn test_values_read_back() {
        let value: InputValue = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(value.as_int(), Some(7));

        let value: InputValue = serde_json::from_value(json!([])).unwrap();
        assert_eq!(value.as_str_list(), Some(&[][..]));
        assert_eq!(value.as_changes(), Some(&[][..]));

        let value: InputValue = serde_json::from_value(json!([{
            "address": "a.b",
            "type": "a",
            "action": "create",
            "provider": ""
        }]))
        .unwrap();
        assert_eq!(value.as_changes().map(|c| c.len()), Some(1));
        assert_eq!(value.as_str_list(), None);
    }
}
