pub mod catalogs;
pub mod config;
pub mod entity;
pub mod overlay;
pub mod reference;

pub use catalogs::{
    missile_system, naval_asset, Armament, MissileClass, MissileSystem, NavalAsset,
    OperationalStatus, MISSILE_SYSTEMS, NAVAL_ASSETS, STRATEGIC_RANGE_KM,
};
pub use config::{
    authored_config, resolve, Descriptors, EntityConfig, EntityKind, DEFAULT_BUDGET_BASE,
    DEFAULT_EXERCISES_BASE, DEFAULT_PERSONNEL_BASE,
};
pub use entity::Entity;
pub use overlay::{ConfigCatalog, OVERLAY_ENV_VAR};
pub use reference::{
    in_service_by, sanctions_between, ModernizationLevel, ResponseCapacity, SanctionEvent,
    ServiceEntry, ThreatAssessment, MODERNIZATION_LEVELS, RESPONSE_CAPACITIES,
    SANCTIONS_TIMELINE, SERVICE_TIMELINE, THREAT_MATRIX,
};
