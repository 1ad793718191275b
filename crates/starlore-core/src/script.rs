//! Mutation surface exposed to scenario scripting layers.
//!
//! Scenario scripts extend the science database with custom content, but
//! they only ever see the four entry points below. The concrete node type
//! implements them once through [`Cursor`]; a binding layer hands scripts a
//! `dyn NodeBuilder` and never needs reflection.

use crate::entry::EntryDb;
use crate::id::EntryId;

/// Capability interface for external drivers (scenario scripts, UI glue).
///
/// All operations are unconditional mutations; none can fail. `add_entry`
/// returns the child's id so the caller can position a new cursor on it.
pub trait NodeBuilder {
    fn set_name(&mut self, name: &str);
    fn add_entry(&mut self, name: &str) -> EntryId;
    fn add_key_value(&mut self, key: &str, value: &str);
    fn set_long_description(&mut self, text: &str);
}

/// A [`NodeBuilder`] positioned on one entry of an [`EntryDb`].
pub struct Cursor<'a> {
    db: &'a mut EntryDb,
    id: EntryId,
}

impl<'a> Cursor<'a> {
    pub fn new(db: &'a mut EntryDb, id: EntryId) -> Self {
        Self { db, id }
    }

    /// The entry this cursor mutates.
    pub fn id(&self) -> EntryId {
        self.id
    }
}

impl NodeBuilder for Cursor<'_> {
    fn set_name(&mut self, name: &str) {
        self.db.set_name(self.id, name);
    }

    fn add_entry(&mut self, name: &str) -> EntryId {
        self.db.add_entry(self.id, name)
    }

    fn add_key_value(&mut self, key: &str, value: &str) {
        self.db.add_key_value(self.id, key, value);
    }

    fn set_long_description(&mut self, text: &str) {
        self.db.set_long_description(self.id, text);
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(builder: &mut dyn NodeBuilder) -> EntryId {
        builder.set_name("Wrecks");
        let child = builder.add_entry("Derelict Freighter");
        builder.add_key_value("Status", "Adrift");
        builder.set_long_description("Catalog of known wrecks.");
        child
    }

    #[test]
    fn cursor_mutates_through_trait_object() {
        let mut db = EntryDb::new();
        // A detached entry stands in for a session-created root.
        let root = db.add_entry(EntryId::default(), "???");

        let child = drive(&mut db.cursor(root));

        let entry = db.get(root).unwrap();
        assert_eq!(entry.name, "Wrecks");
        assert_eq!(entry.children, vec![child]);
        assert_eq!(entry.key_values.len(), 1);
        assert_eq!(entry.long_description.as_deref(), Some("Catalog of known wrecks."));
        assert_eq!(db.get(child).unwrap().name, "Derelict Freighter");
    }

    #[test]
    fn cursor_reports_its_entry() {
        let mut db = EntryDb::new();
        let node = db.add_entry(EntryId::default(), "n");
        assert_eq!(db.cursor(node).id(), node);
    }
}
