//! Runtime lookup structures over the loaded definitions.
//!
//! Registration happens once at load time; afterwards the catalogs are
//! read-only. Lookups the builder performs per template go through the
//! name index.

use crate::schema::{FactionDef, ShipTemplateDef, Stance};
use std::collections::{HashMap, HashSet};

/// Errors from catalog registration.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate ship template name: {0}")]
    DuplicateTemplate(String),
}

// ---------------------------------------------------------------------------
// Factions
// ---------------------------------------------------------------------------

/// Ordered faction table. Input order is display order.
#[derive(Debug, Clone, Default)]
pub struct FactionTable {
    factions: Vec<FactionDef>,
}

impl FactionTable {
    pub fn new(factions: Vec<FactionDef>) -> Self {
        Self { factions }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FactionDef> {
        self.factions.iter()
    }

    pub fn get(&self, index: usize) -> Option<&FactionDef> {
        self.factions.get(index)
    }

    /// Stance of faction `who` toward faction `toward`. Out-of-range
    /// lookups read as Neutral.
    pub fn stance(&self, who: usize, toward: usize) -> Stance {
        self.factions
            .get(who)
            .and_then(|faction| faction.stances.get(toward))
            .copied()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.factions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factions.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Ship templates
// ---------------------------------------------------------------------------

/// Ship template catalog with name lookup.
#[derive(Debug, Clone, Default)]
pub struct ShipCatalog {
    templates: Vec<ShipTemplateDef>,
    name_to_index: HashMap<String, usize>,
}

impl ShipCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template. Names must be unique across the catalog.
    pub fn register(&mut self, template: ShipTemplateDef) -> Result<(), CatalogError> {
        if self.name_to_index.contains_key(&template.name) {
            return Err(CatalogError::DuplicateTemplate(template.name));
        }
        self.name_to_index
            .insert(template.name.clone(), self.templates.len());
        self.templates.push(template);
        Ok(())
    }

    /// Lookup by template name.
    pub fn get(&self, name: &str) -> Option<&ShipTemplateDef> {
        self.name_to_index
            .get(name)
            .and_then(|&index| self.templates.get(index))
    }

    /// Every template name, in registration order. Callers sort as needed.
    pub fn template_names(&self) -> Vec<String> {
        self.templates
            .iter()
            .map(|template| template.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Visual assets
// ---------------------------------------------------------------------------

/// Distinct visual asset names in first-seen order. Backs the debug-only
/// models section of the database.
#[derive(Debug, Clone, Default)]
pub struct ModelLibrary {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl ModelLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an asset name; repeats are ignored.
    pub fn register(&mut self, name: &str) {
        if self.seen.insert(name.to_string()) {
            self.names.push(name.to_string());
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn faction(name: &str, stances: Vec<Stance>) -> FactionDef {
        FactionDef {
            name: name.to_string(),
            description: format!("About {name}."),
            stances,
        }
    }

    fn template(name: &str) -> ShipTemplateDef {
        ShipTemplateDef {
            name: name.to_string(),
            class_name: "Frigate".to_string(),
            sub_class: String::new(),
            radius: 0.0,
            shields: Vec::new(),
            hull: 0.0,
            impulse_speed: 0.0,
            turn_speed: 0.0,
            warp_speed: 0.0,
            jump_drive: None,
            beams: Vec::new(),
            tubes: Vec::new(),
            missile_storage: Vec::new(),
            description: String::new(),
            model: None,
        }
    }

    #[test]
    fn stance_lookup_by_index() {
        let table = FactionTable::new(vec![
            faction("Navy", vec![Stance::Friendly, Stance::Enemy]),
            faction("Raiders", vec![Stance::Enemy, Stance::Friendly]),
        ]);
        assert_eq!(table.stance(0, 1), Stance::Enemy);
        assert_eq!(table.stance(1, 0), Stance::Enemy);
    }

    #[test]
    fn missing_stance_rows_read_neutral() {
        let table = FactionTable::new(vec![faction("Navy", vec![])]);
        assert_eq!(table.stance(0, 5), Stance::Neutral);
        assert_eq!(table.stance(7, 0), Stance::Neutral);
    }

    #[test]
    fn catalog_register_and_lookup() {
        let mut catalog = ShipCatalog::new();
        catalog.register(template("Atlantis")).unwrap();
        catalog.register(template("Phobos T3")).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("Atlantis").is_some());
        assert!(catalog.get("Leviathan").is_none());
        assert_eq!(catalog.template_names(), vec!["Atlantis", "Phobos T3"]);
    }

    #[test]
    fn duplicate_template_rejected() {
        let mut catalog = ShipCatalog::new();
        catalog.register(template("Atlantis")).unwrap();
        let result = catalog.register(template("Atlantis"));
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateTemplate(name)) if name == "Atlantis"
        ));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn model_library_dedupes_in_first_seen_order() {
        let mut models = ModelLibrary::new();
        models.register("battleship_blue");
        models.register("cruiser_red");
        models.register("battleship_blue");
        assert_eq!(models.names(), &["battleship_blue", "cruiser_red"]);
    }
}
