//! Entity configuration: the handful of scalars and priority tags that seed the
//! indicator engine, plus descriptive metadata carried through for display.
//!
//! Resolution is total: a selector with no authored configuration gets
//! [`EntityConfig::fallback`], never an error.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::data::entity::Entity;
use crate::engine::PriorityGroup;
use crate::error::{IndicatorError, Result};

pub const DEFAULT_BUDGET_BASE: f64 = 12.0;
pub const DEFAULT_PERSONNEL_BASE: f64 = 500.0;
pub const DEFAULT_EXERCISES_BASE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    ArmeeTotale,
    BrancheElite,
    ProgrammeStrategique,
    ProgrammeAsymetrique,
    Branche,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArmeeTotale => "armee_totale",
            Self::BrancheElite => "branche_elite",
            Self::ProgrammeStrategique => "programme_strategique",
            Self::ProgrammeAsymetrique => "programme_asymetrique",
            Self::Branche => "branche",
        }
    }
}

/// Display-only metadata. The engine never reads these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Descriptors {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doctrines: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_capabilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deployed_systems: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_units: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operating_zones: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
}

impl Descriptors {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityConfig {
    pub kind: EntityKind,
    /// Annual budget seed in billions; `None` falls back to [`DEFAULT_BUDGET_BASE`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_base: Option<f64>,
    /// Personnel seed in thousands; `None` falls back to [`DEFAULT_PERSONNEL_BASE`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personnel_base: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises_base: Option<f64>,
    #[serde(default)]
    pub priorities: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Descriptors::is_empty")]
    pub descriptors: Descriptors,
}

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl EntityConfig {
    /// Configuration used for any selector without an authored entry.
    pub fn fallback() -> Self {
        Self {
            kind: EntityKind::Branche,
            budget_base: None,
            personnel_base: Some(50.0),
            exercises_base: Some(20.0),
            priorities: tags(&["defense_generique"]),
            descriptors: Descriptors::default(),
        }
    }

    pub fn budget_base(&self) -> f64 {
        self.budget_base.unwrap_or(DEFAULT_BUDGET_BASE)
    }

    pub fn personnel_base(&self) -> f64 {
        self.personnel_base.unwrap_or(DEFAULT_PERSONNEL_BASE)
    }

    pub fn exercises_base(&self) -> f64 {
        self.exercises_base.unwrap_or(DEFAULT_EXERCISES_BASE)
    }

    pub fn has_priority(&self, tag: &str) -> bool {
        self.priorities.contains(tag)
    }

    /// Reject seeds the engine cannot grow from: negative, NaN or infinite.
    pub fn validate(&self, selector: &str) -> Result<()> {
        let seeds = [
            ("budget_base", self.budget_base),
            ("personnel_base", self.personnel_base),
            ("exercises_base", self.exercises_base),
        ];
        for (field, value) in seeds {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(IndicatorError::InvalidConfig {
                        selector: selector.to_string(),
                        field,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    /// Indicator groups switched on by this configuration's priority tags.
    pub fn active_groups(&self) -> Vec<PriorityGroup> {
        PriorityGroup::ALL
            .into_iter()
            .filter(|group| self.has_priority(group.tag()))
            .collect()
    }

    /// Priority tags that gate no indicator group.
    ///
    /// Several authored entries spell their tags differently from the ones the
    /// engine checks (`missiles_balistiques` vs `missiles`), so those entities get
    /// no group columns. The tags are reported here as authored, not rewritten.
    pub fn inert_priorities(&self) -> Vec<&str> {
        self.priorities
            .iter()
            .map(String::as_str)
            .filter(|tag| PriorityGroup::from_tag(tag).is_none())
            .collect()
    }
}

/// Authored configuration for an entity, if one exists.
pub fn authored_config(entity: Entity) -> Option<EntityConfig> {
    match entity {
        Entity::ArmedForces => Some(EntityConfig {
            kind: EntityKind::ArmeeTotale,
            budget_base: Some(15.0),
            personnel_base: Some(610.0),
            exercises_base: Some(80.0),
            priorities: tags(&[
                "missiles",
                "asymetrique",
                "cyber",
                "nucleaire",
                "defense_aerienne",
            ]),
            descriptors: Descriptors {
                doctrines: strings(&[
                    "Dissuasion Asymétrique",
                    "Guerre de Proximité",
                    "Défense Stratégique",
                ]),
                special_capabilities: strings(&[
                    "Essaims de vedettes",
                    "Missiles balistiques",
                    "Guerre cyber",
                ]),
                ..Descriptors::default()
            },
        }),
        Entity::RevolutionaryGuard => Some(EntityConfig {
            kind: EntityKind::BrancheElite,
            budget_base: None,
            personnel_base: Some(125.0),
            exercises_base: Some(45.0),
            priorities: tags(&["missiles_balistiques", "operations_speciales", "proxies", "cyber"]),
            descriptors: Descriptors {
                special_units: strings(&["Forces Quds", "Basij", "Forces Navales IRGC"]),
                operating_zones: strings(&["Moyen-Orient", "Golfe Persique", "Mer d'Oman"]),
                ..Descriptors::default()
            },
        }),
        Entity::MissileProgram => Some(EntityConfig {
            kind: EntityKind::ProgrammeStrategique,
            budget_base: Some(3.5),
            personnel_base: None,
            exercises_base: None,
            priorities: tags(&[
                "missiles_balistiques",
                "missiles_croisiere",
                "precision",
                "portee",
            ]),
            descriptors: Descriptors {
                deployed_systems: strings(&["Shahab-3", "Ghadr", "Emad", "Fateh-110"]),
                objective: Some("Couverture régionale complète".to_string()),
                ..Descriptors::default()
            },
        }),
        Entity::AsymmetricNaval => Some(EntityConfig {
            kind: EntityKind::ProgrammeAsymetrique,
            budget_base: Some(1.2),
            personnel_base: None,
            exercises_base: None,
            priorities: tags(&[
                "sous_marins",
                "vedettes_rapides",
                "mines_marines",
                "missiles_anti_navires",
            ]),
            descriptors: Descriptors {
                capabilities: strings(&["Essaims navals", "Guerre des détroits", "Déni d'accès"]),
                operating_zones: strings(&["Détroit d'Ormuz", "Golfe Persique"]),
                ..Descriptors::default()
            },
        }),
        _ => None,
    }
}

/// Resolve a selector against the built-in catalog.
pub fn resolve(selector: &str) -> EntityConfig {
    match Entity::from_name(selector).and_then(authored_config) {
        Some(config) => config,
        None => {
            tracing::debug!(selector, "no authored configuration, using fallback");
            EntityConfig::fallback()
        }
    }
}
