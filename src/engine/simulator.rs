//! Indicator simulation: evaluates the indicator tables over a year range for one
//! entity configuration. Pure and deterministic; the same inputs give bit-identical
//! tables.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::data::{ConfigCatalog, EntityConfig};
use crate::engine::formula::AdjustmentPolicy;
use crate::engine::indicators::{IndicatorSpec, PriorityGroup, CORE_INDICATORS};
use crate::engine::table::IndicatorTable;
use crate::engine::years::{validate_years, YearRange};
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Selection rule for overlapping budget windows.
    pub adjustment_policy: AdjustmentPolicy,
}

pub fn simulate(years: &[i32], config: &EntityConfig) -> Result<IndicatorTable> {
    simulate_with(years, config, &SimulationOptions::default())
}

pub fn simulate_with(
    years: &[i32],
    config: &EntityConfig,
    options: &SimulationOptions,
) -> Result<IndicatorTable> {
    validate_years(years)?;

    let inert = config.inert_priorities();
    if !inert.is_empty() {
        tracing::debug!(?inert, "priority tags gate no indicator group");
    }

    let mut table = IndicatorTable::with_years(years.to_vec());
    push_indicators(&mut table, CORE_INDICATORS, config, options);
    for group in config.active_groups() {
        push_indicators(&mut table, group.indicators(), config, options);
    }
    Ok(table)
}

fn push_indicators(
    table: &mut IndicatorTable,
    specs: &[IndicatorSpec],
    config: &EntityConfig,
    options: &SimulationOptions,
) {
    for spec in specs {
        table.push_column(spec.name, |year| {
            spec.formula.evaluate(year, config, options.adjustment_policy)
        });
    }
}

/// A simulated table with the configuration it came from.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub selector: String,
    pub generated_at: DateTime<Utc>,
    pub groups: Vec<PriorityGroup>,
    pub config: EntityConfig,
    pub table: IndicatorTable,
}

/// Resolve `selector` against `catalog` and simulate it over `range`.
pub fn generate_with(
    catalog: &ConfigCatalog,
    selector: &str,
    range: YearRange,
    options: &SimulationOptions,
) -> Result<Dataset> {
    let config = catalog.resolve(selector);
    let table = simulate_with(&range.years(), &config, options)?;
    tracing::debug!(
        selector,
        columns = table.columns().len(),
        rows = table.len(),
        "simulated indicators"
    );
    Ok(Dataset {
        selector: selector.to_string(),
        generated_at: Utc::now(),
        groups: config.active_groups(),
        config,
        table,
    })
}

/// Built-in catalog, default range and options.
pub fn generate(selector: &str) -> Result<Dataset> {
    generate_with(
        &ConfigCatalog::builtin(),
        selector,
        YearRange::default(),
        &SimulationOptions::default(),
    )
}
