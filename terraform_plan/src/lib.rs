//! Terraform plan adapter.
//!
//! Turns the rendered JSON of a Terraform plan (`terraform show -json`) into a
//! small set of business parameters for policy evaluation: change counts,
//! classification sets, risk shortcuts and a bounded list of per-resource
//! changes.
//!
//! Two kinds of filters apply. Scope filters (`filter_resource_types`,
//! `include_data_sources`) narrow everything. The detail filter
//! (`filter_actions`) narrows only the itemized `resource_changes` array, so
//! counts always show the full picture within scope.

mod adapter;
mod config;
mod plan;
mod summary;
mod truncate;

pub use adapter::{PlanAdapter, LARGE_PLAN_THRESHOLD};
pub use config::{
    PlanConfig, SortOrder, TruncateStrategy, CONFIG_KEYS, DEFAULT_MAX_RESOURCE_CHANGES,
};
pub use plan::{Change, Plan, ResourceChange};
pub use summary::PlanSummary;
pub use truncate::Bounded;

pub const ADAPTER_NAME: &str = "terraform-plan";

/// Adapter version. Set `VERSION` at build time to override the crate version.
pub const ADAPTER_VERSION: &str = env!("ADAPTER_VERSION");

/// Output contract identifier. Bump only on breaking changes (field removal, semantic change).
pub const OUTPUT_SCHEMA_VERSION: &str = "terraform-plan@v1";
