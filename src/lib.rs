//! Deterministic multi-year military capability indicators for a selected branch or
//! strategic program.
//!
//! ```
//! use defense_indicators::data::resolve;
//! use defense_indicators::engine::{simulate, YearRange};
//!
//! let config = resolve("Programme Missilistique");
//! let table = simulate(&YearRange::default().years(), &config).unwrap();
//! assert_eq!(table.len(), 28);
//! assert_eq!(table.value_at("Budget_Defense_Mds", 2000), Some(3.5));
//! ```

pub mod analysis;
pub mod cli;
pub mod data;
pub mod engine;
pub mod error;
pub mod export;
pub mod logging;

pub use data::{resolve, ConfigCatalog, EntityConfig};
pub use engine::{generate, simulate, IndicatorTable, YearRange};
pub use error::{IndicatorError, RangeDefect, Result};
