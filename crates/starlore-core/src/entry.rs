//! Arena-backed storage for science database entries.
//!
//! Entries form a forest: roots are created through the owning
//! [`Session`](crate::session::Session), children through [`EntryDb::add_entry`].
//! All mutation operations are unconditional and append-only -- there is no
//! removal, reordering, or re-parenting API. Key-value rows are a list, not
//! a map: duplicate keys are kept and displayed in insertion order.
//!
//! Mutations addressed to an id that a later rebuild has discarded fall on
//! empty arena slots and are ignored; stale ids can no longer reach live
//! state.

use crate::id::{EntryId, VisualRef};
use crate::script::Cursor;
use slotmap::SlotMap;

/// Display name of an entry that was never named.
pub const PLACEHOLDER_NAME: &str = "???";

// ---------------------------------------------------------------------------
// Entry data
// ---------------------------------------------------------------------------

/// A single entry in the science database tree.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Display label.
    pub name: String,
    /// Weak back-reference to the parent entry. Set at construction,
    /// never reassigned. `None` for roots.
    pub parent: Option<EntryId>,
    /// Child entries in display order. Append-only.
    pub children: Vec<EntryId>,
    /// Key-value rows in display order. Append-only; duplicate keys allowed.
    pub key_values: Vec<(String, String)>,
    /// Optional long-form text shown below the rows. Last write wins.
    pub long_description: Option<String>,
    /// Optional visual asset shown alongside the entry.
    pub visual: Option<VisualRef>,
}

impl Entry {
    fn new(parent: Option<EntryId>, name: String) -> Self {
        Self {
            name,
            parent,
            children: Vec::new(),
            key_values: Vec::new(),
            long_description: None,
            visual: None,
        }
    }
}

// ---------------------------------------------------------------------------
// EntryDb -- the arena
// ---------------------------------------------------------------------------

/// Arena holding every entry of one build pass.
///
/// Owned by a [`Session`](crate::session::Session); cleared wholesale when
/// the session begins a new rebuild.
#[derive(Debug, Default)]
pub struct EntryDb {
    entries: SlotMap<EntryId, Entry>,
}

impl EntryDb {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
        }
    }

    /// Insert an unnamed root entry. Only the owning session may create
    /// roots; it enforces the scenario lifecycle.
    pub(crate) fn insert_root(&mut self) -> EntryId {
        self.entries
            .insert(Entry::new(None, PLACEHOLDER_NAME.to_string()))
    }

    /// Discard every entry. Ids handed out before this call become stale.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Create a child entry under `parent` and return its id.
    ///
    /// The child records `parent` as its back-reference. If `parent` is
    /// stale the child is still allocated but attached to nothing, so no
    /// enumeration can reach it and the next rebuild reclaims it.
    pub fn add_entry(&mut self, parent: EntryId, name: &str) -> EntryId {
        let child = self
            .entries
            .insert(Entry::new(Some(parent), name.to_string()));
        if let Some(entry) = self.entries.get_mut(parent) {
            entry.children.push(child);
        }
        child
    }

    /// Overwrite the display name.
    pub fn set_name(&mut self, id: EntryId, name: &str) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.name = name.to_string();
        }
    }

    /// Append a key-value row. Duplicates and empty strings are accepted
    /// as-is; this is a presentation layer, not a validator.
    pub fn add_key_value(&mut self, id: EntryId, key: &str, value: &str) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.key_values.push((key.to_string(), value.to_string()));
        }
    }

    /// Set the long description. Unlike key-value rows this overwrites any
    /// previous text.
    pub fn set_long_description(&mut self, id: EntryId, text: &str) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.long_description = Some(text.to_string());
        }
    }

    /// Attach a visual asset reference. Overwrites any previous one.
    pub fn set_image(&mut self, id: EntryId, visual: VisualRef) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.visual = Some(visual);
        }
    }

    /// Read an entry. Returns `None` for stale ids.
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id)
    }

    /// Children of an entry in display order. Empty for stale ids.
    pub fn children(&self, id: EntryId) -> &[EntryId] {
        self.entries
            .get(id)
            .map(|entry| entry.children.as_slice())
            .unwrap_or(&[])
    }

    /// A scripting cursor positioned on `id`.
    pub fn cursor(&mut self, id: EntryId) -> Cursor<'_> {
        Cursor::new(self, id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn db_with_root() -> (EntryDb, EntryId) {
        let mut db = EntryDb::new();
        let root = db.insert_root();
        (db, root)
    }

    #[test]
    fn root_starts_with_placeholder_name() {
        let (db, root) = db_with_root();
        assert_eq!(db.get(root).unwrap().name, PLACEHOLDER_NAME);
        assert_eq!(db.get(root).unwrap().parent, None);
    }

    #[test]
    fn add_entry_sets_parent_and_preserves_order() {
        let (mut db, root) = db_with_root();
        let a = db.add_entry(root, "Alpha");
        let b = db.add_entry(root, "Beta");
        let c = db.add_entry(root, "Gamma");

        assert_eq!(db.children(root), &[a, b, c]);
        assert_eq!(db.get(b).unwrap().parent, Some(root));
        assert_eq!(db.get(c).unwrap().name, "Gamma");
    }

    #[test]
    fn duplicate_sibling_names_are_allowed() {
        let (mut db, root) = db_with_root();
        let a = db.add_entry(root, "Twin");
        let b = db.add_entry(root, "Twin");
        assert_ne!(a, b);
        assert_eq!(db.children(root).len(), 2);
    }

    #[test]
    fn key_values_keep_duplicates_in_order() {
        let (mut db, root) = db_with_root();
        db.add_key_value(root, "Hull", "100");
        db.add_key_value(root, "Hull", "200");
        db.add_key_value(root, "", "");

        let rows = &db.get(root).unwrap().key_values;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ("Hull".to_string(), "100".to_string()));
        assert_eq!(rows[1], ("Hull".to_string(), "200".to_string()));
    }

    #[test]
    fn long_description_is_last_write_wins() {
        let (mut db, root) = db_with_root();
        db.set_long_description(root, "first");
        db.set_long_description(root, "second");
        assert_eq!(db.get(root).unwrap().long_description.as_deref(), Some("second"));
    }

    #[test]
    fn set_image_overwrites() {
        let (mut db, root) = db_with_root();
        db.set_image(root, VisualRef("old".to_string()));
        db.set_image(root, VisualRef("new".to_string()));
        assert_eq!(
            db.get(root).unwrap().visual,
            Some(VisualRef("new".to_string()))
        );
    }

    #[test]
    fn mutations_on_stale_ids_are_ignored() {
        let (mut db, root) = db_with_root();
        let child = db.add_entry(root, "Old");
        db.clear();

        db.set_name(child, "Renamed");
        db.add_key_value(child, "k", "v");
        db.set_long_description(child, "text");
        assert!(db.get(child).is_none());
        assert!(db.is_empty());
    }

    #[test]
    fn child_of_stale_parent_is_unreachable() {
        let (mut db, root) = db_with_root();
        db.clear();
        let orphan = db.add_entry(root, "Lost");
        // Allocated, but no live entry lists it as a child.
        assert!(db.get(orphan).is_some());
        assert_eq!(db.children(root), &[] as &[EntryId]);
    }
}
