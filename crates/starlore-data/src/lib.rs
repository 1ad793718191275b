//! Domain inputs for the science database: faction relations, ship
//! template stats, known visual assets, and the locale service used to
//! label missile storage rows.
//!
//! The build layer treats everything here as read-only reference data.
//! Definitions arrive either from data files (RON, TOML, or JSON -- see
//! [`loader`]) or straight from game code via the catalog registration
//! APIs.

pub mod catalog;
pub mod loader;
pub mod locale;
pub mod schema;

pub use loader::{DataLoadError, DatabaseData, load_database_data};
