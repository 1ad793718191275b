//! Serde structs for faction and ship template definitions.
//!
//! These double as the on-disk data file format (RON, TOML, or JSON) and
//! the in-memory domain model read by the builder. Stats are accepted
//! as-is; degenerate values (empty names, negative stats) render as
//! degenerate display data rather than being rejected here.

use serde::{Deserialize, Serialize};

// ===========================================================================
// Factions
// ===========================================================================

/// Relationship of one faction toward another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    #[default]
    Neutral,
    Enemy,
    Friendly,
}

impl Stance {
    /// Display string for key-value rows.
    pub fn label(self) -> &'static str {
        match self {
            Stance::Neutral => "Neutral",
            Stance::Enemy => "Enemy",
            Stance::Friendly => "Friendly",
        }
    }
}

/// One faction: display name, description text, and its stance toward every
/// faction by table index. A missing row entry (including its own index)
/// reads as Neutral.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactionDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stances: Vec<Stance>,
}

// ===========================================================================
// Ship templates
// ===========================================================================

/// Size class of a weapon tube. Medium is the default and renders without
/// a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TubeSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// A beam weapon mount. Direction is degrees from dead ahead, clockwise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BeamMount {
    pub direction: f32,
    pub range: f32,
    pub damage: f32,
    pub cycle_time: f32,
}

/// A missile launch tube.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeaponTube {
    pub direction: f32,
    pub load_time: f32,
    #[serde(default)]
    pub size: TubeSize,
}

/// The missile weapon kinds a template can stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissileKind {
    Homing,
    Nuke,
    Mine,
    Emp,
    Hvli,
}

impl MissileKind {
    /// Canonical iteration order for storage rows.
    pub const ALL: [MissileKind; 5] = [
        MissileKind::Homing,
        MissileKind::Nuke,
        MissileKind::Mine,
        MissileKind::Emp,
        MissileKind::Hvli,
    ];
}

/// Jump drive range. Presence of the struct is the capability flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JumpDrive {
    pub min_distance: f32,
    pub max_distance: f32,
}

/// Static configuration of one ship design.
///
/// Speeds are in internal units per tick-equivalent; the builder scales
/// them for display. Distances are in internal units (1000 per displayed
/// "u").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipTemplateDef {
    pub name: String,
    pub class_name: String,
    #[serde(default)]
    pub sub_class: String,
    #[serde(default)]
    pub radius: f32,
    /// Shield segment levels, outermost first. Empty means no shields.
    #[serde(default)]
    pub shields: Vec<f32>,
    #[serde(default)]
    pub hull: f32,
    #[serde(default)]
    pub impulse_speed: f32,
    #[serde(default)]
    pub turn_speed: f32,
    #[serde(default)]
    pub warp_speed: f32,
    #[serde(default)]
    pub jump_drive: Option<JumpDrive>,
    #[serde(default)]
    pub beams: Vec<BeamMount>,
    #[serde(default)]
    pub tubes: Vec<WeaponTube>,
    /// Missile stock per kind. Kinds with zero count may be omitted.
    #[serde(default)]
    pub missile_storage: Vec<(MissileKind, u32)>,
    #[serde(default)]
    pub description: String,
    /// Name of the visual asset for this design, if any.
    #[serde(default)]
    pub model: Option<String>,
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stance_labels() {
        assert_eq!(Stance::Neutral.label(), "Neutral");
        assert_eq!(Stance::Enemy.label(), "Enemy");
        assert_eq!(Stance::Friendly.label(), "Friendly");
    }

    #[test]
    fn tube_size_defaults_to_medium() {
        let tube: WeaponTube = ron::from_str("(direction: 0.0, load_time: 8.0)").unwrap();
        assert_eq!(tube.size, TubeSize::Medium);
    }

    #[test]
    fn template_optional_fields_default() {
        let template: ShipTemplateDef =
            ron::from_str(r#"(name: "Scout", class_name: "Corvette")"#).unwrap();
        assert_eq!(template.sub_class, "");
        assert!(template.shields.is_empty());
        assert!(template.jump_drive.is_none());
        assert!(template.model.is_none());
        assert_eq!(template.impulse_speed, 0.0);
    }

    #[test]
    fn missile_kind_order_is_stable() {
        assert_eq!(MissileKind::ALL[0], MissileKind::Homing);
        assert_eq!(MissileKind::ALL[4], MissileKind::Hvli);
    }
}
