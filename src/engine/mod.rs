pub mod formula;
pub mod indicators;
pub mod simulator;
pub mod table;
pub mod years;

pub use formula::{
    elapsed, Adjustment, AdjustmentPolicy, Era, Formula, Seed, Step, BASE_YEAR,
};
pub use indicators::{
    all_indicators, find_indicator, IndicatorSpec, PriorityGroup, BUDGET_ADJUSTMENTS,
    CORE_INDICATORS, YEAR_COLUMN,
};
pub use simulator::{
    generate, generate_with, simulate, simulate_with, Dataset, SimulationOptions,
};
pub use table::{Column, IndicatorTable};
pub use years::{validate_years, YearRange, DEFAULT_FIRST_YEAR, DEFAULT_LAST_YEAR};
