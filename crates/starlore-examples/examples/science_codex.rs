//! Science database example: build the default codex from embedded RON
//! data, extend it the way a scenario script would, and print the forest.
//!
//! Run with: `cargo run -p starlore-examples --example science_codex`

use starlore_build::rebuild;
use starlore_core::entry::EntryDb;
use starlore_core::id::EntryId;
use starlore_core::script::NodeBuilder;
use starlore_core::session::Session;
use starlore_data::catalog::{FactionTable, ModelLibrary, ShipCatalog};
use starlore_data::locale::EnglishLocale;
use starlore_data::schema::{FactionDef, ShipTemplateDef};

const FACTIONS_RON: &str = r#"[
    (
        name: "Human Navy",
        description: "The spacefaring branch of Earth's defense forces.",
        stances: [friendly, enemy, friendly],
    ),
    (
        name: "Kraylor",
        description: "Expansionist zealots on a holy crusade.",
        stances: [enemy, friendly, enemy],
    ),
    (
        name: "Arlenians",
        description: "Peaceful energy beings with little interest in territory.",
        stances: [friendly, enemy, friendly],
    ),
]"#;

const SHIPS_RON: &str = r#"[
    (
        name: "Atlantis",
        class_name: "Corvette",
        sub_class: "Destroyer",
        radius: 400.0,
        shields: [200.0, 200.0],
        hull: 250.0,
        impulse_speed: 90.0,
        turn_speed: 10.0,
        jump_drive: Some((min_distance: 5000.0, max_distance: 50000.0)),
        beams: [
            (direction: -20.0, range: 1500.0, damage: 8.0, cycle_time: 6.0),
            (direction: 20.0, range: 1500.0, damage: 8.0, cycle_time: 6.0),
        ],
        tubes: [
            (direction: -90.0, load_time: 10.0),
            (direction: 90.0, load_time: 10.0),
            (direction: 180.0, load_time: 10.0, size: large),
        ],
        missile_storage: [(homing, 12), (nuke, 4), (mine, 8)],
        description: "A refitted deep-space destroyer.",
        model: Some("battleship_destroyer"),
    ),
    (
        name: "Phobos T3",
        class_name: "Frigate",
        sub_class: "Cruiser",
        radius: 200.0,
        shields: [100.0, 100.0],
        hull: 120.0,
        impulse_speed: 60.0,
        turn_speed: 10.0,
        warp_speed: 900.0,
        beams: [(direction: 0.0, range: 1200.0, damage: 6.0, cycle_time: 8.0)],
        description: "The workhorse of the fleet.",
        model: Some("cruiser_phobos"),
    ),
]"#;

fn main() {
    tracing_subscriber::fmt().init();

    let factions: Vec<FactionDef> = ron::from_str(FACTIONS_RON).expect("parse factions");
    let templates: Vec<ShipTemplateDef> = ron::from_str(SHIPS_RON).expect("parse ships");

    let factions = FactionTable::new(factions);
    let mut ships = ShipCatalog::new();
    let mut models = ModelLibrary::new();
    for template in templates {
        if let Some(model) = &template.model {
            models.register(model);
        }
        ships.register(template).expect("register template");
    }

    let mut session = Session::new();
    rebuild(&mut session, &factions, &ships, &models, &EnglishLocale).expect("rebuild");

    // A scenario script extending the built tree through the capability
    // interface.
    let ships_root = session.root_named("Ships").unwrap();
    let contact = session.cursor(ships_root).add_entry("Unidentified Contact");
    let mut cursor = session.cursor(contact);
    cursor.add_key_value("Threat", "Unknown");
    cursor.set_long_description("Picked up on long-range sensors near the nebula.");

    session.activate();

    for &root in session.roots() {
        print_entry(session.entries(), root, 0);
    }
}

fn print_entry(db: &EntryDb, id: EntryId, depth: usize) {
    let Some(entry) = db.get(id) else { return };
    let indent = "  ".repeat(depth);
    println!("{indent}{}", entry.name);
    for (key, value) in &entry.key_values {
        println!("{indent}  {key}: {value}");
    }
    if let Some(text) = &entry.long_description {
        println!("{indent}  -- {text}");
    }
    for &child in &entry.children {
        print_entry(db, child, depth + 1);
    }
}
