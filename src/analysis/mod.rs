pub mod summary;

pub use summary::{percent_change, self_sufficiency, StrategicSummary, BASELINE_RANGE_KM};
