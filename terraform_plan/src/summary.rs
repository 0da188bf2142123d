use std::collections::BTreeSet;

use evidra_defs::{ResourceAction, ResourceChangeRecord, ResourceMode};

use crate::config::{PlanConfig, SortOrder};
use crate::plan::ResourceChange;

/// Aggregates of one pass over a plan's resource changes.
///
/// Counts, classification sets and the delete/replace lists only see changes
/// admitted by the scope filters. `changes` additionally honors the detail filter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    pub create_count: usize,
    pub update_count: usize,
    pub destroy_count: usize,
    pub replace_count: usize,
    pub resource_types: BTreeSet<String>,
    pub providers: BTreeSet<String>,
    pub delete_types: BTreeSet<String>,
    pub replace_types: BTreeSet<String>,
    pub delete_addresses: Vec<String>,
    pub replace_addresses: Vec<String>,
    pub changes: Vec<ResourceChangeRecord>,
}

impl PlanSummary {
    pub fn collect(resource_changes: &[ResourceChange], config: &PlanConfig) -> Self {
        let mut summary = PlanSummary::default();

        for rc in resource_changes {
            let Some(change) = &rc.change else {
                continue;
            };
            if !config.in_scope(rc.mode == ResourceMode::Data, &rc.resource_type) {
                continue;
            }

            summary.resource_types.insert(rc.resource_type.clone());
            if !rc.provider_name.is_empty() {
                summary.providers.insert(rc.provider_name.clone());
            }

            let action = ResourceAction::from_actions(change.actions.as_slice());
            match action {
                ResourceAction::Create => summary.create_count += 1,
                ResourceAction::Update => summary.update_count += 1,
                ResourceAction::Delete => {
                    summary.destroy_count += 1;
                    summary.delete_types.insert(rc.resource_type.clone());
                    summary.delete_addresses.push(rc.address.clone());
                }
                ResourceAction::Replace => {
                    summary.replace_count += 1;
                    summary.replace_types.insert(rc.resource_type.clone());
                    summary.replace_addresses.push(rc.address.clone());
                }
                ResourceAction::Read | ResourceAction::NoOp | ResourceAction::Unknown => {}
            }

            if !config.in_detail(action.as_str()) {
                continue;
            }

            summary.changes.push(ResourceChangeRecord {
                address: rc.address.clone(),
                resource_type: rc.resource_type.clone(),
                action,
                provider: rc.provider_name.clone(),
            });
        }

        summary
    }

    /// Order the itemized array and the address lists. Classification sets are always sorted.
    pub fn sort(&mut self, order: SortOrder) {
        if order == SortOrder::Address {
            self.changes.sort_by(|a, b| a.address.cmp(&b.address));
            self.delete_addresses.sort();
            self.replace_addresses.sort();
        }
    }

    pub fn total_changes(&self) -> usize {
        self.create_count + self.update_count + self.destroy_count + self.replace_count
    }

    pub fn has_destroys(&self) -> bool {
        self.destroy_count > 0
    }

    pub fn has_replaces(&self) -> bool {
        self.replace_count > 0
    }

    /// Only deletes, nothing created, updated or replaced.
    pub fn is_destroy_plan(&self) -> bool {
        self.destroy_count > 0
            && self.create_count == 0
            && self.update_count == 0
            && self.replace_count == 0
    }
}
