//! Static missile and naval asset catalogs. Descriptive only: nothing here feeds the
//! indicator engine.

use std::fmt;

use serde::Serialize;

/// Range above which a missile system is classed as strategic.
pub const STRATEGIC_RANGE_KM: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OperationalStatus {
    #[serde(rename = "Opérationnel")]
    Operational,
    #[serde(rename = "Test")]
    Testing,
}

impl OperationalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operational => "Opérationnel",
            Self::Testing => "Test",
        }
    }
}

impl fmt::Display for OperationalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MissileClass {
    #[serde(rename = "Stratégique")]
    Strategic,
    #[serde(rename = "Tactique")]
    Tactical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MissileSystem {
    pub name: &'static str,
    pub system_type: &'static str,
    pub range_km: u32,
    /// Circular error probable, as published (e.g. "50m").
    pub precision: &'static str,
    pub status: OperationalStatus,
}

impl MissileSystem {
    pub fn classification(&self) -> MissileClass {
        if self.range_km > STRATEGIC_RANGE_KM {
            MissileClass::Strategic
        } else {
            MissileClass::Tactical
        }
    }
}

pub const MISSILE_SYSTEMS: &[MissileSystem] = &[
    MissileSystem {
        name: "Shahab-3",
        system_type: "MRBM",
        range_km: 2000,
        precision: "50m",
        status: OperationalStatus::Operational,
    },
    MissileSystem {
        name: "Ghadr",
        system_type: "MRBM",
        range_km: 1600,
        precision: "30m",
        status: OperationalStatus::Operational,
    },
    MissileSystem {
        name: "Emad",
        system_type: "MRBM",
        range_km: 1700,
        precision: "500m",
        status: OperationalStatus::Operational,
    },
    MissileSystem {
        name: "Sejjil",
        system_type: "MRBM",
        range_km: 2000,
        precision: "100m",
        status: OperationalStatus::Testing,
    },
    MissileSystem {
        name: "Khorramshahr",
        system_type: "MRBM",
        range_km: 2000,
        precision: "80m",
        status: OperationalStatus::Operational,
    },
    MissileSystem {
        name: "Fateh-110",
        system_type: "Missile Sol-Sol",
        range_km: 300,
        precision: "10m",
        status: OperationalStatus::Operational,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Armament {
    Torpedoes(u32),
    Missiles(&'static str),
    /// Support vessels carry a capacity instead of weapons.
    Capacity(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavalAsset {
    pub name: &'static str,
    pub asset_type: &'static str,
    pub displacement_t: u32,
    pub armament: Armament,
    pub status: OperationalStatus,
}

pub const NAVAL_ASSETS: &[NavalAsset] = &[
    NavalAsset {
        name: "Sous-marin Classe Ghadir",
        asset_type: "Sous-marin de poche",
        displacement_t: 120,
        armament: Armament::Torpedoes(2),
        status: OperationalStatus::Operational,
    },
    NavalAsset {
        name: "Sous-marin Classe Fateh",
        asset_type: "Sous-marin conventionnel",
        displacement_t: 600,
        armament: Armament::Missiles("Croisière"),
        status: OperationalStatus::Operational,
    },
    NavalAsset {
        name: "Vedette Tondar",
        asset_type: "Vedette rapide",
        displacement_t: 12,
        armament: Armament::Missiles("Anti-navires"),
        status: OperationalStatus::Operational,
    },
    NavalAsset {
        name: "Navire Moudge",
        asset_type: "Frégate",
        displacement_t: 1500,
        armament: Armament::Missiles("Surface-air"),
        status: OperationalStatus::Operational,
    },
    NavalAsset {
        name: "Navire logistique Bandar Abbas",
        asset_type: "Navire soutien",
        displacement_t: 45000,
        armament: Armament::Capacity("Ravitaillement"),
        status: OperationalStatus::Operational,
    },
];

pub fn missile_system(name: &str) -> Option<&'static MissileSystem> {
    MISSILE_SYSTEMS.iter().find(|system| system.name == name)
}

pub fn naval_asset(name: &str) -> Option<&'static NavalAsset> {
    NAVAL_ASSETS.iter().find(|asset| asset.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_exact_name() {
        assert_eq!(missile_system("Ghadr").map(|m| m.range_km), Some(1600));
        assert!(missile_system("ghadr").is_none());
        assert_eq!(
            naval_asset("Vedette Tondar").map(|a| a.displacement_t),
            Some(12)
        );
    }

    #[test]
    fn classification_splits_at_strategic_range() {
        assert_eq!(
            missile_system("Fateh-110").unwrap().classification(),
            MissileClass::Tactical
        );
        assert_eq!(
            missile_system("Emad").unwrap().classification(),
            MissileClass::Strategic
        );
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in MISSILE_SYSTEMS.iter().enumerate() {
            assert!(MISSILE_SYSTEMS[i + 1..].iter().all(|b| b.name != a.name));
        }
        for (i, a) in NAVAL_ASSETS.iter().enumerate() {
            assert!(NAVAL_ASSETS[i + 1..].iter().all(|b| b.name != a.name));
        }
    }

    #[test]
    fn status_serializes_as_display_tag() {
        let json = serde_json::to_value(missile_system("Sejjil").unwrap()).unwrap();
        assert_eq!(json["status"], "Test");
        let json = serde_json::to_value(naval_asset("Sous-marin Classe Ghadir").unwrap()).unwrap();
        assert_eq!(json["armament"]["torpedoes"], 2);
    }
}
