use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use evidra_defs::{Adapter, AdapterError, AdapterResult, InputValue};
use evidra_utils::{get_timestamp, sha256_hex, Clock, SystemClock};
use log::{debug, info};

use crate::config::{PlanConfig, TruncateStrategy};
use crate::plan::Plan;
use crate::summary::PlanSummary;
use crate::truncate::Bounded;
use crate::{ADAPTER_NAME, ADAPTER_VERSION, OUTPUT_SCHEMA_VERSION};

/// Plans with more raw resource changes than this get a scope-filter hint.
pub const LARGE_PLAN_THRESHOLD: usize = 500;

/// Converts `terraform show -json` output into policy input.
#[derive(Clone)]
pub struct PlanAdapter {
    clock: Arc<dyn Clock>,
}

impl Default for PlanAdapter {
    fn default() -> Self {
        PlanAdapter {
            clock: Arc::new(SystemClock),
        }
    }
}

impl PlanAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `clock` for the metadata timestamp.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        PlanAdapter { clock }
    }

    /// Transform an already-normalized configuration.
    pub fn transform(&self, raw: &[u8], config: &PlanConfig) -> Result<AdapterResult, AdapterError> {
        let artifact_sha256 = sha256_hex(raw);

        let plan = Plan::decode(raw)?;
        plan.validate()?;

        debug!(
            "Converting plan (format {}, terraform {:?}) with {} resource changes using {:?}",
            plan.format_version,
            plan.terraform_version,
            plan.resource_changes.len(),
            config
        );

        let mut summary = PlanSummary::collect(&plan.resource_changes, config);
        summary.sort(config.sort);

        let total_changes = summary.total_changes();
        let has_destroys = summary.has_destroys();
        let has_replaces = summary.has_replaces();
        let is_destroy_plan = summary.is_destroy_plan();

        let changes = Bounded::new(
            summary.changes,
            config.max_resource_changes,
            config.truncate_strategy,
        );
        // Address lists never use summary_only.
        let delete_addresses = Bounded::new(
            summary.delete_addresses,
            config.max_resource_changes,
            TruncateStrategy::DropTail,
        );
        let replace_addresses = Bounded::new(
            summary.replace_addresses,
            config.max_resource_changes,
            TruncateStrategy::DropTail,
        );

        let mut warnings = Vec::new();
        if plan.resource_changes.is_empty() {
            warnings.push("plan contains no resource changes".to_string());
        }
        if plan.terraform_version.is_empty() {
            warnings.push("terraform_version missing from plan JSON".to_string());
        }
        warnings.extend(changes.warning("resource_changes"));
        warnings.extend(delete_addresses.warning("delete_addresses"));
        warnings.extend(replace_addresses.warning("replace_addresses"));
        if plan.resource_changes.len() > LARGE_PLAN_THRESHOLD {
            warnings.push(format!(
                "large plan with {} resources; consider filter_resource_types",
                plan.resource_changes.len()
            ));
        }
        for warning in &warnings {
            info!("{}: {}", ADAPTER_NAME, warning);
        }

        let mut input: BTreeMap<String, InputValue> = BTreeMap::new();
        let mut put = |key: &str, value: InputValue| {
            input.insert(key.to_string(), value);
        };

        // Counts, within the resource type scope
        put("create_count", summary.create_count.into());
        put("update_count", summary.update_count.into());
        put("destroy_count", summary.destroy_count.into());
        put("replace_count", summary.replace_count.into());
        put("total_changes", total_changes.into());

        // Classification
        put("resource_types", sorted(summary.resource_types));
        put("providers", sorted(summary.providers));
        put("has_destroys", has_destroys.into());
        put("has_replaces", has_replaces.into());
        put("is_destroy_plan", is_destroy_plan.into());

        // Whole-plan signals, never scope-filtered
        put("drift_count", plan.resource_drift.len().into());
        put("deferred_count", plan.deferred_changes.len().into());

        // Risk shortcuts, not affected by filter_actions
        put("delete_types", sorted(summary.delete_types));
        put("replace_types", sorted(summary.replace_types));
        put("delete_addresses_total", delete_addresses.total.into());
        put("delete_addresses_truncated", delete_addresses.truncated.into());
        put("delete_addresses", delete_addresses.items.into());
        put("replace_addresses_total", replace_addresses.total.into());
        put("replace_addresses_truncated", replace_addresses.truncated.into());
        put("replace_addresses", replace_addresses.items.into());

        // Per-resource detail
        put("resource_changes_count", changes.total.into());
        put("resource_changes_truncated", changes.truncated.into());
        put("resource_changes", changes.items.into());

        let mut metadata: BTreeMap<String, InputValue> = BTreeMap::new();
        metadata.insert("adapter_name".to_string(), ADAPTER_NAME.into());
        metadata.insert("adapter_version".to_string(), ADAPTER_VERSION.into());
        metadata.insert(
            "output_schema_version".to_string(),
            OUTPUT_SCHEMA_VERSION.into(),
        );
        metadata.insert("terraform_version".to_string(), plan.terraform_version.into());
        metadata.insert("format_version".to_string(), plan.format_version.into());
        metadata.insert(
            "resource_count".to_string(),
            plan.resource_changes.len().into(),
        );
        metadata.insert(
            "timestamp".to_string(),
            get_timestamp(self.clock.as_ref()).into(),
        );
        metadata.insert("artifact_sha256".to_string(), artifact_sha256.into());
        metadata.insert("warnings".to_string(), warnings.into());

        Ok(AdapterResult { input, metadata })
    }
}

impl Adapter for PlanAdapter {
    fn name(&self) -> &'static str {
        ADAPTER_NAME
    }

    fn convert(
        &self,
        raw: &[u8],
        config: &HashMap<String, String>,
    ) -> Result<AdapterResult, AdapterError> {
        self.transform(raw, &PlanConfig::from_map(config))
    }
}

fn sorted(set: BTreeSet<String>) -> InputValue {
    InputValue::StrList(set.into_iter().collect())
}
