//! Data file loading: reads faction and ship definitions from a data
//! directory and builds the runtime catalogs.
//!
//! Provides format detection (RON/JSON/TOML), file discovery, and the
//! top-level [`load_database_data`] entry point.

use crate::catalog::{CatalogError, FactionTable, ModelLibrary, ShipCatalog};
use crate::schema::{FactionDef, ShipTemplateDef};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur during data loading.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// A required data file was not found in the given directory.
    #[error("required file '{file}' not found in {dir}")]
    MissingRequired { file: &'static str, dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two files with the same base name but different formats exist.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// A duplicate name was found.
    #[error("duplicate name '{name}' in {file}")]
    DuplicateName { file: PathBuf, name: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Scan a directory for a data file with the given base name (without
/// extension).
///
/// Looks for `{base_name}.ron`, `{base_name}.toml`, and `{base_name}.json`.
/// Returns `Ok(None)` if no file is found, or `Err(ConflictingFormats)` if
/// multiple formats exist for the same base name.
pub fn find_data_file(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, DataLoadError> {
    let extensions = ["ron", "toml", "json"];
    let mut found: Option<PathBuf> = None;

    for ext in &extensions {
        let candidate = dir.join(format!("{base_name}.{ext}"));
        if candidate.exists() {
            if let Some(ref existing) = found {
                return Err(DataLoadError::ConflictingFormats {
                    a: existing.clone(),
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }

    Ok(found)
}

fn require_data_file(
    dir: &Path,
    base_name: &'static str,
) -> Result<PathBuf, DataLoadError> {
    find_data_file(dir, base_name)?.ok_or_else(|| DataLoadError::MissingRequired {
        file: base_name,
        dir: dir.to_path_buf(),
    })
}

// ===========================================================================
// Deserialization
// ===========================================================================

/// Read a file and deserialize it according to its format (detected from
/// extension).
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| DataLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
        Format::Json => serde_json::from_str(&content).map_err(|e| DataLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
        Format::Toml => toml::from_str(&content).map_err(|e| DataLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
    }
}

// ===========================================================================
// File schemas
// ===========================================================================

#[derive(Debug, Deserialize)]
struct FactionsFile {
    factions: Vec<FactionDef>,
}

#[derive(Debug, Deserialize)]
struct ShipsFile {
    /// Visual assets known independently of any template.
    #[serde(default)]
    models: Vec<String>,
    templates: Vec<ShipTemplateDef>,
}

// ===========================================================================
// Top-level loading
// ===========================================================================

/// Everything the database builder reads, loaded from one data directory.
#[derive(Debug)]
pub struct DatabaseData {
    pub factions: FactionTable,
    pub ships: ShipCatalog,
    pub models: ModelLibrary,
}

/// Load `factions.{ron,toml,json}` and `ships.{ron,toml,json}` from `dir`.
///
/// The model library is the declared `models` list followed by any template
/// model names not already in it, first-seen order.
pub fn load_database_data(dir: &Path) -> Result<DatabaseData, DataLoadError> {
    let factions_path = require_data_file(dir, "factions")?;
    let ships_path = require_data_file(dir, "ships")?;

    let factions_file: FactionsFile = deserialize_file(&factions_path)?;
    let ships_file: ShipsFile = deserialize_file(&ships_path)?;

    let mut models = ModelLibrary::new();
    for name in &ships_file.models {
        models.register(name);
    }

    let mut ships = ShipCatalog::new();
    for template in ships_file.templates {
        if let Some(model) = &template.model {
            models.register(model);
        }
        ships.register(template).map_err(|err| match err {
            CatalogError::DuplicateTemplate(name) => DataLoadError::DuplicateName {
                file: ships_path.clone(),
                name,
            },
        })?;
    }

    Ok(DatabaseData {
        factions: FactionTable::new(factions_file.factions),
        ships,
        models,
    })
}

// ===========================================================================
// Tests
// ===========================================================================
