//! Indicator definitions. Column names are the public contract with table consumers.

use std::fmt;

use serde::Serialize;

use crate::engine::formula::{Adjustment, Era, Formula, Seed, Step};

pub const YEAR_COLUMN: &str = "Annee";

pub const BUDGET: &str = "Budget_Defense_Mds";
pub const PERSONNEL: &str = "Personnel_Milliers";
pub const MILITARY_GDP_SHARE: &str = "PIB_Militaire_Pourcent";
pub const EXERCISES: &str = "Exercices_Militaires";
pub const READINESS: &str = "Readiness_Operative";
pub const DETERRENCE: &str = "Capacite_Dissuasion";
pub const MOBILIZATION_DAYS: &str = "Temps_Mobilisation_Jours";
pub const MISSILE_TESTS: &str = "Tests_Missiles";
pub const TECH_DEVELOPMENT: &str = "Developpement_Technologique";
pub const ARTILLERY: &str = "Capacite_Artillerie";
pub const AIR_DEFENSE_COVERAGE: &str = "Couverture_AD";
pub const LOGISTICS_RESILIENCE: &str = "Resilience_Logistique";
pub const CYBER_CAPABILITIES: &str = "Cyber_Capabilities";
pub const WEAPONS_PRODUCTION: &str = "Production_Armements";

pub const MISSILE_STOCK: &str = "Stock_Missiles";
pub const MISSILE_MAX_RANGE_KM: &str = "Portee_Max_Missiles_Km";
pub const MISSILE_ACCURACY: &str = "Precision_Missiles";
pub const MISSILE_PRODUCTION: &str = "Production_Missiles_An";

pub const PROXY_FORCES: &str = "Forces_Proxies";
pub const ASYMMETRIC_NAVAL: &str = "Capacite_Navale_Asymetrique";
pub const SWARM_EXERCISES: &str = "Exercices_Guerre_Proximite";

pub const CYBER_ATTACKS: &str = "Attaques_Cyber_Reussies";
pub const CYBER_COMMAND: &str = "Reseau_Commandement_Cyber";
pub const CYBER_DEFENSE: &str = "Cyber_Defense_Niveau";

pub const ENRICHMENT_CAPACITY: &str = "Capacite_Enrichissement";
pub const CENTRIFUGES: &str = "Centrifuges_Operationnels";
pub const NUCLEAR_EXPERTISE: &str = "Expertise_Nucleaire";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorSpec {
    pub name: &'static str,
    pub formula: Formula,
}

const fn saturating(name: &'static str, intercept: f64, slope: f64, cap: f64) -> IndicatorSpec {
    IndicatorSpec {
        name,
        formula: Formula::Saturating { intercept, slope, cap },
    }
}

/// Budget windows, in evaluation order. Overlapping windows select one factor
/// according to the [`AdjustmentPolicy`](crate::engine::AdjustmentPolicy); they never multiply.
pub const BUDGET_ADJUSTMENTS: &[Adjustment] = &[
    Adjustment {
        first: 2006,
        last: Some(2008),
        factor: 1.10,
    },
    Adjustment {
        first: 2010,
        last: Some(2012),
        factor: 0.90,
    },
    Adjustment {
        first: 2015,
        last: None,
        factor: 1.15,
    },
    Adjustment {
        first: 2018,
        last: None,
        factor: 1.10,
    },
    Adjustment {
        first: 2020,
        last: None,
        factor: 1.20,
    },
];

const READINESS_STEPS: &[Step] = &[
    Step {
        from: 2006,
        amount: 5.0,
    },
    Step {
        from: 2011,
        amount: 6.0,
    },
    Step {
        from: 2015,
        amount: 4.0,
    },
];

const DETERRENCE_ERAS: &[Era] = &[
    Era::flat(i32::MIN, 40.0),
    Era::flat(2000, 55.0),
    Era::flat(2008, 70.0),
    Era::ramp(2015, 80.0, 1.5),
];

const MISSILE_TEST_ERAS: &[Era] = &[
    Era::flat(i32::MIN, 2.0),
    Era::ramp(2005, 5.0, 1.0),
    Era::ramp(2010, 10.0, 2.0),
    Era::ramp(2015, 20.0, 3.0),
];

const MISSILE_STOCK_ERAS: &[Era] = &[
    Era::flat(i32::MIN, 100.0),
    Era::ramp(2000, 200.0, 30.0),
    Era::ramp(2008, 500.0, 50.0),
    Era::ramp(2015, 1000.0, 80.0),
];

const MISSILE_RANGE_ERAS: &[Era] = &[
    Era::flat(i32::MIN, 300.0),
    Era::ramp(2000, 500.0, 100.0),
    Era::ramp(2006, 1300.0, 150.0),
    Era::flat(2012, 2000.0),
];

pub const CORE_INDICATORS: &[IndicatorSpec] = &[
    IndicatorSpec {
        name: BUDGET,
        formula: Formula::Growth {
            seed: Seed::Budget,
            rate: 0.045,
            adjustments: BUDGET_ADJUSTMENTS,
        },
    },
    IndicatorSpec {
        name: PERSONNEL,
        formula: Formula::Growth {
            seed: Seed::Personnel,
            rate: 0.012,
            adjustments: &[],
        },
    },
    IndicatorSpec {
        name: MILITARY_GDP_SHARE,
        formula: Formula::Linear {
            intercept: 3.2,
            slope: 0.15,
        },
    },
    IndicatorSpec {
        name: EXERCISES,
        formula: Formula::Seasonal {
            seed: Seed::Exercises,
            slope: 4.0,
            amplitude: 6.0,
            period: 4.0,
        },
    },
    IndicatorSpec {
        name: READINESS,
        formula: Formula::Stepped {
            intercept: 70.0,
            slope: 1.3,
            steps: READINESS_STEPS,
            cap: 92.0,
        },
    },
    IndicatorSpec {
        name: DETERRENCE,
        formula: Formula::Eras {
            eras: DETERRENCE_ERAS,
            cap: Some(95.0),
        },
    },
    IndicatorSpec {
        name: MOBILIZATION_DAYS,
        formula: Formula::Floored {
            intercept: 30.0,
            slope: -0.8,
            floor: 7.0,
        },
    },
    IndicatorSpec {
        name: MISSILE_TESTS,
        formula: Formula::Eras {
            eras: MISSILE_TEST_ERAS,
            cap: None,
        },
    },
    saturating(TECH_DEVELOPMENT, 45.0, 2.8, 85.0),
    saturating(ARTILLERY, 75.0, 1.5, 92.0),
    saturating(AIR_DEFENSE_COVERAGE, 50.0, 2.5, 88.0),
    saturating(LOGISTICS_RESILIENCE, 65.0, 2.2, 90.0),
    saturating(CYBER_CAPABILITIES, 55.0, 3.2, 87.0),
    saturating(WEAPONS_PRODUCTION, 60.0, 2.5, 89.0),
];

const MISSILE_GROUP: &[IndicatorSpec] = &[
    IndicatorSpec {
        name: MISSILE_STOCK,
        formula: Formula::Eras {
            eras: MISSILE_STOCK_ERAS,
            cap: Some(3000.0),
        },
    },
    IndicatorSpec {
        name: MISSILE_MAX_RANGE_KM,
        formula: Formula::Eras {
            eras: MISSILE_RANGE_ERAS,
            cap: Some(2000.0),
        },
    },
    IndicatorSpec {
        name: MISSILE_ACCURACY,
        formula: Formula::Floored {
            intercept: 1000.0,
            slope: -40.0,
            floor: 50.0,
        },
    },
    saturating(MISSILE_PRODUCTION, 50.0, 10.0, 200.0),
];

const ASYMMETRIC_GROUP: &[IndicatorSpec] = &[
    saturating(PROXY_FORCES, 5.0, 2.0, 50.0),
    saturating(ASYMMETRIC_NAVAL, 40.0, 3.0, 85.0),
    saturating(SWARM_EXERCISES, 10.0, 2.0, 60.0),
];

const CYBER_GROUP: &[IndicatorSpec] = &[
    saturating(CYBER_ATTACKS, 15.0, 3.0, 80.0),
    saturating(CYBER_COMMAND, 50.0, 3.0, 88.0),
    saturating(CYBER_DEFENSE, 45.0, 3.2, 86.0),
];

const NUCLEAR_GROUP: &[IndicatorSpec] = &[
    saturating(ENRICHMENT_CAPACITY, 5.0, 3.0, 40.0),
    saturating(CENTRIFUGES, 1.0, 0.5, 20.0),
    saturating(NUCLEAR_EXPERTISE, 30.0, 4.0, 85.0),
];

/// Optional indicator group, switched on by its priority tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PriorityGroup {
    #[serde(rename = "missiles")]
    Missiles,
    #[serde(rename = "asymetrique")]
    Asymmetric,
    #[serde(rename = "cyber")]
    Cyber,
    #[serde(rename = "nucleaire")]
    Nuclear,
}

impl PriorityGroup {
    /// Groups in column order.
    pub const ALL: [PriorityGroup; 4] = [
        PriorityGroup::Missiles,
        PriorityGroup::Asymmetric,
        PriorityGroup::Cyber,
        PriorityGroup::Nuclear,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Missiles => "missiles",
            Self::Asymmetric => "asymetrique",
            Self::Cyber => "cyber",
            Self::Nuclear => "nucleaire",
        }
    }

    pub fn from_tag(tag: &str) -> Option<PriorityGroup> {
        Self::ALL.into_iter().find(|group| group.tag() == tag)
    }

    pub const fn indicators(self) -> &'static [IndicatorSpec] {
        match self {
            Self::Missiles => MISSILE_GROUP,
            Self::Asymmetric => ASYMMETRIC_GROUP,
            Self::Cyber => CYBER_GROUP,
            Self::Nuclear => NUCLEAR_GROUP,
        }
    }
}

impl fmt::Display for PriorityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Every indicator the engine can produce, core first.
pub fn all_indicators() -> impl Iterator<Item = &'static IndicatorSpec> {
    CORE_INDICATORS
        .iter()
        .chain(PriorityGroup::ALL.into_iter().flat_map(|g| g.indicators().iter()))
}

pub fn find_indicator(name: &str) -> Option<&'static IndicatorSpec> {
    all_indicators().find(|spec| spec.name == name)
}
