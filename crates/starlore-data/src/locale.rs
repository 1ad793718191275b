//! Locale service for user-facing labels the builder can not hardcode.
//!
//! The builder is decoupled from any locale backend: it receives a
//! [`Locale`] and asks it for the missile storage row label. Hosts with a
//! real translation catalog implement the trait over it; [`EnglishLocale`]
//! is the fallback.

use crate::schema::MissileKind;

/// Injected formatting service for localized labels.
pub trait Locale {
    /// Localized display name of a missile weapon kind.
    fn missile_weapon_name(&self, kind: MissileKind) -> String;

    /// Label for a missile storage row, e.g. "Storage Homing".
    fn storage_label(&self, kind: MissileKind) -> String {
        format!("Storage {}", self.missile_weapon_name(kind))
    }
}

/// Untranslated English labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocale;

impl Locale for EnglishLocale {
    fn missile_weapon_name(&self, kind: MissileKind) -> String {
        match kind {
            MissileKind::Homing => "Homing",
            MissileKind::Nuke => "Nuke",
            MissileKind::Mine => "Mine",
            MissileKind::Emp => "EMP",
            MissileKind::Hvli => "HVLI",
        }
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_storage_labels() {
        let locale = EnglishLocale;
        assert_eq!(locale.storage_label(MissileKind::Homing), "Storage Homing");
        assert_eq!(locale.storage_label(MissileKind::Emp), "Storage EMP");
    }

    #[test]
    fn storage_label_tracks_custom_names() {
        struct Uppercase;
        impl Locale for Uppercase {
            fn missile_weapon_name(&self, kind: MissileKind) -> String {
                EnglishLocale.missile_weapon_name(kind).to_uppercase()
            }
        }
        assert_eq!(Uppercase.storage_label(MissileKind::Mine), "Storage MINE");
    }
}
