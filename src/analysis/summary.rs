//! Headline metrics derived from a simulated table: latest-year values and their
//! change since the first simulated year.

use serde::Serialize;

use crate::engine::indicators::{
    AIR_DEFENSE_COVERAGE, ASYMMETRIC_NAVAL, BUDGET, DETERRENCE, MILITARY_GDP_SHARE,
    MISSILE_MAX_RANGE_KM, MISSILE_STOCK, MOBILIZATION_DAYS, PERSONNEL, PROXY_FORCES, READINESS,
};
use crate::engine::{elapsed, IndicatorTable};

/// Range assumed for the first year when the range column has no usable baseline.
pub const BASELINE_RANGE_KM: f64 = 300.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategicSummary {
    pub first_year: i32,
    pub latest_year: i32,
    pub budget: f64,
    pub gdp_share: f64,
    pub personnel: f64,
    pub personnel_growth_pct: f64,
    pub deterrence: f64,
    /// Zero when the missile group is not active.
    pub missile_stock: f64,
    pub asymmetric_naval: f64,
    pub proxy_forces: f64,
    pub mobilization_days: f64,
    pub mobilization_reduction_pct: f64,
    pub air_defense: f64,
    pub air_defense_growth_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_range_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_range_growth_pct: Option<f64>,
    pub readiness: f64,
    pub readiness_delta: f64,
}

/// Relative change in percent; zero when the baseline is zero.
pub fn percent_change(from: f64, to: f64) -> f64 {
    if from == 0.0 {
        0.0
    } else {
        (to - from) / from * 100.0
    }
}

fn first_and_last(table: &IndicatorTable, name: &str) -> Option<(f64, f64)> {
    let values = table.get(name)?;
    Some((*values.first()?, *values.last()?))
}

fn latest_or_zero(table: &IndicatorTable, name: &str) -> f64 {
    first_and_last(table, name).map_or(0.0, |(_, last)| last)
}

impl StrategicSummary {
    /// `None` for an empty table.
    pub fn from_table(table: &IndicatorTable) -> Option<Self> {
        let first_year = table.first_year()?;
        let latest_year = table.last_year()?;

        let (personnel_first, personnel) = first_and_last(table, PERSONNEL)?;
        let (mobilization_first, mobilization_days) = first_and_last(table, MOBILIZATION_DAYS)?;
        let (air_defense_first, air_defense) = first_and_last(table, AIR_DEFENSE_COVERAGE)?;
        let (readiness_first, readiness) = first_and_last(table, READINESS)?;

        let range = first_and_last(table, MISSILE_MAX_RANGE_KM).map(|(first, last)| {
            let baseline = if first > 0.0 { first } else { BASELINE_RANGE_KM };
            (last, percent_change(baseline, last))
        });

        Some(Self {
            first_year,
            latest_year,
            budget: latest_or_zero(table, BUDGET),
            gdp_share: latest_or_zero(table, MILITARY_GDP_SHARE),
            personnel,
            personnel_growth_pct: percent_change(personnel_first, personnel),
            deterrence: latest_or_zero(table, DETERRENCE),
            missile_stock: latest_or_zero(table, MISSILE_STOCK),
            asymmetric_naval: latest_or_zero(table, ASYMMETRIC_NAVAL),
            proxy_forces: latest_or_zero(table, PROXY_FORCES),
            mobilization_days,
            mobilization_reduction_pct: -percent_change(mobilization_first, mobilization_days),
            air_defense,
            air_defense_growth_pct: percent_change(air_defense_first, air_defense),
            max_range_km: range.map(|(last, _)| last),
            max_range_growth_pct: range.map(|(_, growth)| growth),
            readiness,
            readiness_delta: readiness - readiness_first,
        })
    }
}

/// Industrial self-sufficiency index, `min(40 + 3t, 85)`.
pub fn self_sufficiency(years: &[i32]) -> Vec<f64> {
    years
        .iter()
        .map(|&year| (40.0 + 3.0 * elapsed(year)).min(85.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_change_handles_zero_baseline() {
        assert_eq!(percent_change(0.0, 10.0), 0.0);
        assert_eq!(percent_change(50.0, 75.0), 50.0);
    }

    #[test]
    fn self_sufficiency_saturates() {
        let values = self_sufficiency(&[2000, 2010, 2027]);
        assert_eq!(values, vec![40.0, 70.0, 85.0]);
    }
}
