//! Selectable entities: military branches and strategic programs, keyed by their
//! exact display name.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Entity {
    ArmedForces,
    Army,
    Navy,
    AirForce,
    RevolutionaryGuard,
    QudsForce,
    Basij,
    CoastGuard,
    MissileProgram,
    AirDefense,
    AsymmetricNaval,
    ProximityWarfare,
    Cybersecurity,
    CombatDrones,
    NuclearProgram,
}

impl Entity {
    /// Branch options, in selection-list order.
    pub const BRANCHES: [Entity; 8] = [
        Entity::ArmedForces,
        Entity::Army,
        Entity::Navy,
        Entity::AirForce,
        Entity::RevolutionaryGuard,
        Entity::QudsForce,
        Entity::Basij,
        Entity::CoastGuard,
    ];

    /// Strategic program options, in selection-list order.
    pub const PROGRAMS: [Entity; 7] = [
        Entity::MissileProgram,
        Entity::AirDefense,
        Entity::AsymmetricNaval,
        Entity::ProximityWarfare,
        Entity::Cybersecurity,
        Entity::CombatDrones,
        Entity::NuclearProgram,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::ArmedForces => "Forces Armées de la RII",
            Self::Army => "Armée de Terre",
            Self::Navy => "Marine de la RII",
            Self::AirForce => "Force Aérienne",
            Self::RevolutionaryGuard => "Forces de la Révolution Islamique (IRGC)",
            Self::QudsForce => "Forces Quds",
            Self::Basij => "Basij",
            Self::CoastGuard => "Garde Côtière",
            Self::MissileProgram => "Programme Missilistique",
            Self::AirDefense => "Défense Aérienne",
            Self::AsymmetricNaval => "Capacités Navales Asymétriques",
            Self::ProximityWarfare => "Guerre de Proximité",
            Self::Cybersecurity => "Cybersécurité",
            Self::CombatDrones => "Drones de Combat",
            Self::NuclearProgram => "Programme Nucléaire",
        }
    }

    pub const fn is_program(self) -> bool {
        matches!(
            self,
            Self::MissileProgram
                | Self::AirDefense
                | Self::AsymmetricNaval
                | Self::ProximityWarfare
                | Self::Cybersecurity
                | Self::CombatDrones
                | Self::NuclearProgram
        )
    }

    /// Every entity, branches first.
    pub fn all() -> impl Iterator<Item = Entity> {
        Self::BRANCHES.into_iter().chain(Self::PROGRAMS)
    }

    /// Exact, case-sensitive match on the display name.
    pub fn from_name(name: &str) -> Option<Entity> {
        Self::all().find(|entity| entity.name() == name)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
