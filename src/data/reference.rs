//! Geopolitical reference tables shown alongside the indicator series: sanctions
//! timeline, threat matrix, response capacities, modernization levels and
//! weapon-system service dates.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SanctionEvent {
    pub year: i32,
    pub measure: &'static str,
    /// Impact on a 0..=10 scale.
    pub impact: u8,
}

pub const SANCTIONS_TIMELINE: &[SanctionEvent] = &[
    SanctionEvent {
        year: 2006,
        measure: "Résolution 1737",
        impact: 5,
    },
    SanctionEvent {
        year: 2010,
        measure: "Résolution 1929",
        impact: 7,
    },
    SanctionEvent {
        year: 2012,
        measure: "Embargo pétrolier",
        impact: 8,
    },
    SanctionEvent {
        year: 2015,
        measure: "JCPOA Temporaire",
        impact: 3,
    },
    SanctionEvent {
        year: 2018,
        measure: "Retrait US JCPOA",
        impact: 7,
    },
    SanctionEvent {
        year: 2020,
        measure: "Maximum Pressure",
        impact: 9,
    },
    SanctionEvent {
        year: 2022,
        measure: "Nouvelles sanctions",
        impact: 8,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThreatAssessment {
    pub threat: &'static str,
    pub probability: f64,
    pub impact: f64,
    pub preparedness: f64,
}

impl ThreatAssessment {
    /// Probability-weighted impact.
    pub fn risk(&self) -> f64 {
        self.probability * self.impact
    }

    /// Risk not covered by preparedness, floored at zero.
    pub fn exposure(&self) -> f64 {
        (self.risk() * (1.0 - self.preparedness)).max(0.0)
    }
}

pub const THREAT_MATRIX: &[ThreatAssessment] = &[
    ThreatAssessment {
        threat: "Frappe Israélienne",
        probability: 0.6,
        impact: 0.8,
        preparedness: 0.9,
    },
    ThreatAssessment {
        threat: "Intervention US",
        probability: 0.4,
        impact: 0.9,
        preparedness: 0.7,
    },
    ThreatAssessment {
        threat: "Guerre Navale",
        probability: 0.5,
        impact: 0.7,
        preparedness: 0.8,
    },
    ThreatAssessment {
        threat: "Cyber Attaque",
        probability: 0.8,
        impact: 0.6,
        preparedness: 0.6,
    },
    ThreatAssessment {
        threat: "Soulèvement Interne",
        probability: 0.3,
        impact: 0.8,
        preparedness: 0.5,
    },
    ThreatAssessment {
        threat: "Blocus Économique",
        probability: 0.7,
        impact: 0.9,
        preparedness: 0.8,
    },
];

/// Relative contribution of each capability to countering a scenario (0..=1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResponseCapacity {
    pub scenario: &'static str,
    pub missiles: f64,
    pub navy: f64,
    pub proxies: f64,
    pub cyber: f64,
}

impl ResponseCapacity {
    /// Name and score of the strongest capability for this scenario.
    pub fn leading_capability(&self) -> (&'static str, f64) {
        [
            ("missiles", self.missiles),
            ("navy", self.navy),
            ("proxies", self.proxies),
            ("cyber", self.cyber),
        ]
        .into_iter()
        .fold(("missiles", f64::MIN), |best, next| {
            if next.1 > best.1 {
                next
            } else {
                best
            }
        })
    }
}

pub const RESPONSE_CAPACITIES: &[ResponseCapacity] = &[
    ResponseCapacity {
        scenario: "Attaque Aérienne",
        missiles: 0.9,
        navy: 0.4,
        proxies: 0.3,
        cyber: 0.2,
    },
    ResponseCapacity {
        scenario: "Blocus Naval",
        missiles: 0.7,
        navy: 0.9,
        proxies: 0.2,
        cyber: 0.1,
    },
    ResponseCapacity {
        scenario: "Cyber Attaque",
        missiles: 0.2,
        navy: 0.1,
        proxies: 0.1,
        cyber: 0.9,
    },
    ResponseCapacity {
        scenario: "Opérations Spéciales",
        missiles: 0.6,
        navy: 0.3,
        proxies: 0.8,
        cyber: 0.4,
    },
    ResponseCapacity {
        scenario: "Guerre Régionale",
        missiles: 0.8,
        navy: 0.6,
        proxies: 0.7,
        cyber: 0.5,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceEntry {
    pub system: &'static str,
    pub range_km: u32,
    pub in_service: i32,
}

pub const SERVICE_TIMELINE: &[ServiceEntry] = &[
    ServiceEntry {
        system: "Shahab-3",
        range_km: 2000,
        in_service: 2003,
    },
    ServiceEntry {
        system: "Ghadr",
        range_km: 1600,
        in_service: 2007,
    },
    ServiceEntry {
        system: "Fateh-110",
        range_km: 300,
        in_service: 2002,
    },
    ServiceEntry {
        system: "Sous-marin Ghadir",
        range_km: 3000,
        in_service: 2007,
    },
    ServiceEntry {
        system: "Vedette Tondar",
        range_km: 200,
        in_service: 2002,
    },
    ServiceEntry {
        system: "Drone Shahed-129",
        range_km: 2000,
        in_service: 2012,
    },
    ServiceEntry {
        system: "Bavar-373",
        range_km: 200,
        in_service: 2019,
    },
];

/// Capability level of a domain at the start and end of the modelled period (0..=100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModernizationLevel {
    pub domain: &'static str,
    pub level_2000: u8,
    pub level_2027: u8,
}

impl ModernizationLevel {
    pub fn gain(&self) -> i16 {
        i16::from(self.level_2027) - i16::from(self.level_2000)
    }
}

pub const MODERNIZATION_LEVELS: &[ModernizationLevel] = &[
    ModernizationLevel {
        domain: "Missiles Balistiques",
        level_2000: 40,
        level_2027: 85,
    },
    ModernizationLevel {
        domain: "Défense Aérienne",
        level_2000: 30,
        level_2027: 75,
    },
    ModernizationLevel {
        domain: "Marine Asymétrique",
        level_2000: 35,
        level_2027: 80,
    },
    ModernizationLevel {
        domain: "Drones",
        level_2000: 20,
        level_2027: 70,
    },
    ModernizationLevel {
        domain: "Cyberguerre",
        level_2000: 25,
        level_2027: 75,
    },
];

/// Systems in service by the end of `year`.
pub fn in_service_by(year: i32) -> impl Iterator<Item = &'static ServiceEntry> {
    SERVICE_TIMELINE.iter().filter(move |entry| entry.in_service <= year)
}

/// Sanctions whose year falls in `[from, to]`.
pub fn sanctions_between(from: i32, to: i32) -> impl Iterator<Item = &'static SanctionEvent> {
    SANCTIONS_TIMELINE
        .iter()
        .filter(move |event| (from..=to).contains(&event.year))
}
