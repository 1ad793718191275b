//! Science database builder: populates a session's entry forest from the
//! loaded faction and ship template data.
//!
//! # Overview
//!
//! One call to [`rebuild`] performs a full build pass: it discards the
//! previous forest, then writes two root sections ("Factions" and "Ships")
//! plus, in debug builds, a third section enumerating every known visual
//! asset. The pass is deterministic: factions appear in table order, ship
//! classes and templates in lexicographic order, and every derived row is
//! formatted with fixed rounding and scaling rules because the output is
//! user-facing reference data.
//!
//! The builder never repairs the tree in place. If the domain inputs are
//! inconsistent (a template name with no catalog entry) the pass fails and
//! the error propagates to the caller instead of leaving a partial forest
//! behind.
//!
//! # Formatting Rules
//!
//! - Size, Shield, and Hull round to the nearest integer.
//! - Speeds scale from internal units per tick to units per minute
//!   (x60 / 1000) and render with one decimal.
//! - Jump range scales by 1/1000 and rounds to whole units.
//! - Beam rows carry damage and cycle time with one decimal each; tube
//!   rows carry whole-second load times plus a size suffix for
//!   non-medium tubes.

use starlore_core::heading::Facing;
use starlore_core::id::{EntryId, VisualRef};
use starlore_core::session::{Session, SessionError};
use starlore_data::catalog::{FactionTable, ModelLibrary, ShipCatalog};
use starlore_data::locale::Locale;
use starlore_data::schema::{ShipTemplateDef, TubeSize};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur during a build pass.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The catalog listed a template name it can not resolve.
    #[error("ship template not found: {0}")]
    TemplateNotFound(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}

// ---------------------------------------------------------------------------
// Build pass
// ---------------------------------------------------------------------------

/// Rebuild the science database from scratch.
///
/// Clears the session's forest, then fills the "Factions" and "Ships"
/// sections. Debug builds also append a "Models (debug)" section listing
/// every known visual asset. Fails without touching the session further if
/// a scenario is already running or a template lookup misses.
pub fn rebuild(
    session: &mut Session,
    factions: &FactionTable,
    ships: &ShipCatalog,
    models: &ModelLibrary,
    locale: &dyn Locale,
) -> Result<(), BuildError> {
    session.begin_rebuild()?;

    fill_factions(session, factions)?;
    fill_ships(session, ships, locale)?;

    #[cfg(debug_assertions)]
    fill_models(session, models)?;
    #[cfg(not(debug_assertions))]
    let _ = models;

    tracing::debug!(
        roots = session.roots().len(),
        entries = session.entries().len(),
        "science database rebuilt"
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Factions section
// ---------------------------------------------------------------------------

fn fill_factions(session: &mut Session, factions: &FactionTable) -> Result<(), SessionError> {
    let root = session.add_root()?;
    session.entries_mut().set_name(root, "Factions");

    for (n, faction) in factions.iter().enumerate() {
        let entry = session.entries_mut().add_entry(root, &faction.name);
        for (m, other) in factions.iter().enumerate() {
            if n == m {
                continue;
            }
            session
                .entries_mut()
                .add_key_value(entry, &other.name, factions.stance(n, m).label());
        }
        session
            .entries_mut()
            .set_long_description(entry, &faction.description);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Ships section
// ---------------------------------------------------------------------------

fn fill_ships(
    session: &mut Session,
    ships: &ShipCatalog,
    locale: &dyn Locale,
) -> Result<(), BuildError> {
    let root = session.add_root()?;
    session.entries_mut().set_name(root, "Ships");

    let mut template_names = ships.template_names();
    template_names.sort();

    let mut templates = Vec::with_capacity(template_names.len());
    for name in &template_names {
        let template = ships
            .get(name)
            .ok_or_else(|| BuildError::TemplateNotFound(name.clone()))?;
        templates.push(template);
    }

    // Distinct class names in first-seen order, then sorted for display.
    let mut class_list: Vec<&str> = Vec::new();
    let mut class_set: HashSet<&str> = HashSet::new();
    for &template in &templates {
        if class_set.insert(&template.class_name) {
            class_list.push(&template.class_name);
        }
    }
    class_list.sort_unstable();

    for class_name in class_list {
        let class_entry = session.entries_mut().add_entry(root, class_name);
        for &template in &templates {
            if template.class_name == class_name {
                fill_template_entry(session, class_entry, template, locale);
            }
        }
    }
    Ok(())
}

fn fill_template_entry(
    session: &mut Session,
    class_entry: EntryId,
    template: &ShipTemplateDef,
    locale: &dyn Locale,
) {
    let db = session.entries_mut();
    let entry = db.add_entry(class_entry, &template.name);

    if let Some(model) = &template.model {
        db.set_image(entry, VisualRef(model.clone()));
    }

    db.add_key_value(entry, "Class", &template.class_name);
    db.add_key_value(entry, "Sub-class", &template.sub_class);
    db.add_key_value(entry, "Size", &format_whole(template.radius));

    if !template.shields.is_empty() {
        let levels: Vec<String> = template.shields.iter().map(|&l| format_whole(l)).collect();
        db.add_key_value(entry, "Shield", &levels.join("/"));
    }
    db.add_key_value(entry, "Hull", &format_whole(template.hull));

    if template.impulse_speed > 0.0 {
        db.add_key_value(entry, "Move speed", &format_speed(template.impulse_speed));
    }
    if template.turn_speed > 0.0 {
        db.add_key_value(
            entry,
            "Turn speed",
            &format!("{:.1} deg/sec", template.turn_speed),
        );
    }
    if template.warp_speed > 0.0 {
        db.add_key_value(entry, "Warp speed", &format_speed(template.warp_speed));
    }
    if let Some(jump) = &template.jump_drive {
        db.add_key_value(
            entry,
            "Jump range",
            &format!(
                "{:.0} - {:.0} u",
                jump.min_distance / 1000.0,
                jump.max_distance / 1000.0
            ),
        );
    }

    for beam in &template.beams {
        if beam.range > 0.0 {
            db.add_key_value(
                entry,
                &format!("{} beam weapon", Facing::classify(beam.direction).label()),
                &format!("{:.1} Dmg / {:.1} sec", beam.damage, beam.cycle_time),
            );
        }
    }

    for tube in &template.tubes {
        let mut info = format!("{} sec", tube.load_time.round() as i64);
        match tube.size {
            TubeSize::Small => info.push_str(", small"),
            TubeSize::Large => info.push_str(", large"),
            TubeSize::Medium => {}
        }
        db.add_key_value(
            entry,
            &format!("{} tube", Facing::classify(tube.direction).label()),
            &info,
        );
    }

    for &(kind, count) in &template.missile_storage {
        if count > 0 {
            db.add_key_value(entry, &locale.storage_label(kind), &count.to_string());
        }
    }

    if !template.description.is_empty() {
        db.set_long_description(entry, &template.description);
    }
}

// ---------------------------------------------------------------------------
// Models section (debug builds)
// ---------------------------------------------------------------------------

#[cfg(debug_assertions)]
fn fill_models(session: &mut Session, models: &ModelLibrary) -> Result<(), SessionError> {
    let root = session.add_root()?;
    session.entries_mut().set_name(root, "Models (debug)");
    for name in models.names() {
        let db = session.entries_mut();
        let entry = db.add_entry(root, name);
        db.set_image(entry, VisualRef(name.clone()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Nearest-integer rendering for sizes, shield levels, and hull points.
fn format_whole(value: f32) -> String {
    format!("{}", value.round() as i64)
}

/// Internal units per tick to displayed units per minute, one decimal.
fn format_speed(speed: f32) -> String {
    format!("{:.1} u/min", speed * 60.0 / 1000.0)
}

// ===========================================================================
// Tests
// ===========================================================================
