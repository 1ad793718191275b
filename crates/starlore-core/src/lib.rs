//! Starlore Core -- the science database model for starship bridge games.
//!
//! This crate provides the browsable reference tree shown on a ship's
//! science console: a forest of entries, each carrying a display name,
//! ordered key-value rows, child entries, an optional long description,
//! and an optional visual asset reference.
//!
//! # Ownership Model
//!
//! Entries live in an arena ([`entry::EntryDb`]) keyed by stable
//! [`id::EntryId`]s. Each entry stores its parent's id as a weak
//! back-reference and owns the ordered list of its children's ids, so the
//! tree has no reference cycles and no shared ownership. The arena itself
//! is owned by a [`session::Session`], which also tracks the ordered set
//! of root entries and the scenario lifecycle.
//!
//! # Rebuild Discipline
//!
//! The database is never patched incrementally. A build pass calls
//! [`session::Session::begin_rebuild`], which discards every prior entry,
//! then repopulates the forest from scratch. Once the session is activated
//! (a scenario is running), creating new roots is a misuse: it is logged
//! and rejected so that consumers iterating the roots never observe a
//! half-registered entry.
//!
//! # Key Types
//!
//! - [`entry::EntryDb`] -- Arena of entries with append-only mutation ops.
//! - [`session::Session`] -- Session-scoped registry of root entries.
//! - [`script::NodeBuilder`] -- The four mutation entry points exposed to
//!   scenario scripting layers, implemented by [`script::Cursor`].
//! - [`heading::Facing`] -- Coarse directional bucket for mount headings.

pub mod entry;
pub mod heading;
pub mod id;
pub mod script;
pub mod session;
