use std::collections::{BTreeSet, HashMap};

use evidra_utils::parse_csv_set;

pub const DEFAULT_MAX_RESOURCE_CHANGES: usize = 200;

/// Configuration keys this adapter understands. Anything else is ignored.
pub const CONFIG_KEYS: [&str; 6] = [
    "filter_resource_types",
    "filter_actions",
    "include_data_sources",
    "max_resource_changes",
    "resource_changes_sort",
    "truncate_strategy",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Address,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncateStrategy {
    /// Keep the first N entries.
    #[default]
    DropTail,
    /// Drop every entry, keep only the flag and total.
    SummaryOnly,
}

/// Fully-defaulted adapter configuration.
///
/// Built from the caller's flat string map. Values that fail to parse fall
/// back to their defaults instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanConfig {
    /// Scope filter: include `mode = data` resources.
    pub include_data_sources: bool,
    /// Scope filter: only these resource types. Empty means all.
    pub filter_resource_types: BTreeSet<String>,
    /// Detail filter: only these primary actions in `resource_changes`. Empty means all.
    pub filter_actions: BTreeSet<String>,
    pub max_resource_changes: usize,
    pub sort: SortOrder,
    pub truncate_strategy: TruncateStrategy,
}

impl Default for PlanConfig {
    fn default() -> Self {
        PlanConfig {
            include_data_sources: false,
            filter_resource_types: BTreeSet::new(),
            filter_actions: BTreeSet::new(),
            max_resource_changes: DEFAULT_MAX_RESOURCE_CHANGES,
            sort: SortOrder::default(),
            truncate_strategy: TruncateStrategy::default(),
        }
    }
}

impl PlanConfig {
    pub fn from_map(config: &HashMap<String, String>) -> Self {
        let get = |key: &str| config.get(key).map(|v| v.trim()).unwrap_or("");

        PlanConfig {
            include_data_sources: get("include_data_sources").eq_ignore_ascii_case("true"),
            filter_resource_types: parse_csv_set(get("filter_resource_types")),
            filter_actions: parse_csv_set(get("filter_actions")),
            max_resource_changes: parse_limit(get("max_resource_changes")),
            sort: match get("resource_changes_sort") {
                "none" => SortOrder::None,
                _ => SortOrder::Address,
            },
            truncate_strategy: match get("truncate_strategy") {
                "summary_only" => TruncateStrategy::SummaryOnly,
                _ => TruncateStrategy::DropTail,
            },
        }
    }

    /// Scope filter check: decides whether a change counts at all.
    pub fn in_scope(&self, is_data: bool, resource_type: &str) -> bool {
        if is_data && !self.include_data_sources {
            return false;
        }
        self.filter_resource_types.is_empty() || self.filter_resource_types.contains(resource_type)
    }

    /// Detail filter check: decides whether a change is itemized.
    pub fn in_detail(&self, action: &str) -> bool {
        self.filter_actions.is_empty() || self.filter_actions.contains(action)
    }
}

fn parse_limit(s: &str) -> usize {
    match s.parse::<i64>() {
        Ok(n) if n >= 0 => usize::try_from(n).unwrap_or(DEFAULT_MAX_RESOURCE_CHANGES),
        _ => DEFAULT_MAX_RESOURCE_CHANGES,
    }
}
