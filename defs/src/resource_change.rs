use serde::{Deserialize, Serialize};

/// Resource mode indicating how Terraform manages the resource
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResourceMode {
    #[default]
    Managed,
    Data,
}

/// Primary action of a resource change, reduced from Terraform's action list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceAction {
    Create,
    Update,
    Delete,
    Replace,
    Read,
    NoOp,
    Unknown,
}

impl ResourceAction {
    /// Collapse a plan's action list into a single primary action.
    ///
    /// A list holding both `delete` and `create` (in either order) is a replace.
    /// Verbs this crate does not know about yield `Unknown` rather than `NoOp`,
    /// so new Terraform actions never look harmless to policy.
    pub fn from_actions<S: AsRef<str>>(actions: &[S]) -> Self {
        let has = |verb: &str| actions.iter().any(|a| a.as_ref() == verb);

        match actions {
            _ if has("delete") && has("create") => ResourceAction::Replace,
            _ if has("create") => ResourceAction::Create,
            _ if has("delete") => ResourceAction::Delete,
            _ if has("update") => ResourceAction::Update,
            _ if has("read") => ResourceAction::Read,
            [] => ResourceAction::Unknown,
            a if a.iter().all(|v| v.as_ref() == "no-op") => ResourceAction::NoOp,
            _ => ResourceAction::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceAction::Create => "create",
            ResourceAction::Update => "update",
            ResourceAction::Delete => "delete",
            ResourceAction::Replace => "replace",
            ResourceAction::Read => "read",
            ResourceAction::NoOp => "no-op",
            ResourceAction::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_replace_in_either_order() {
        assert_eq!(
            ResourceAction::from_actions(&["delete", "create"]),
            ResourceAction::Replace
        );
        assert_eq!(
            ResourceAction::from_actions(&["create", "delete"]),
            ResourceAction::Replace
        );
    }

    #[test]
    fn test_single_verbs() {
        assert_eq!(ResourceAction::from_actions(&["create"]), ResourceAction::Create);
        assert_eq!(ResourceAction::from_actions(&["delete"]), ResourceAction::Delete);
        assert_eq!(ResourceAction::from_actions(&["update"]), ResourceAction::Update);
        assert_eq!(ResourceAction::from_actions(&["read"]), ResourceAction::Read);
        assert_eq!(ResourceAction::from_actions(&["no-op"]), ResourceAction::NoOp);
    }

    #[test]
    fn test_unrecognized_verbs_are_unknown() {
        assert_eq!(ResourceAction::from_actions(&["forget"]), ResourceAction::Unknown);
        assert_eq!(
            ResourceAction::from_actions(&["no-op", "forget"]),
            ResourceAction::Unknown
        );
        let empty: [&str; 0] = [];
        assert_eq!(ResourceAction::from_actions(&empty), ResourceAction::Unknown);
    }

    #[test]
    fn test_create_wins_over_lower_precedence_verbs() {
        assert_eq!(
            ResourceAction::from_actions(&["create", "forget"]),
            ResourceAction::Create
        );
        assert_eq!(
            ResourceAction::from_actions(&["update", "read"]),
            ResourceAction::Update
        );
    }

    #[test]
    fn test_enum_serialization() {
        assert_eq!(
            serde_json::to_value(ResourceMode::Managed).unwrap(),
            "managed"
        );
        assert_eq!(serde_json::to_value(ResourceMode::Data).unwrap(), "data");
        assert_eq!(
            serde_json::from_value::<ResourceMode>(serde_json::json!("data")).unwrap(),
            ResourceMode::Data
        );

        assert_eq!(serde_json::to_value(ResourceAction::NoOp).unwrap(), "no-op");
        assert_eq!(
            serde_json::to_value(ResourceAction::Replace).unwrap(),
            "replace"
        );
        for action in [
            ResourceAction::Create,
            ResourceAction::Update,
            ResourceAction::Delete,
            ResourceAction::Replace,
            ResourceAction::Read,
            ResourceAction::NoOp,
            ResourceAction::Unknown,
        ] {
            assert_eq!(serde_json::to_value(action).unwrap(), action.as_str());
        }
    }
}
