//! Session-scoped registry of science database roots.
//!
//! One [`Session`] spans one hosted scenario. It owns the entry arena and
//! the ordered list of root entries consumers iterate for display. The
//! whole forest is rebuilt wholesale at scenario start; nothing from the
//! previous pass survives.
//!
//! Root creation is gated by the scenario lifecycle. While the scenario is
//! running, a late root would break the iteration-order assumptions of
//! consumers mid-display, so the attempt is logged and rejected without
//! leaving a half-registered entry behind. Child creation and all other
//! entry mutations stay unrestricted.

use crate::entry::{Entry, EntryDb};
use crate::id::EntryId;
use crate::script::Cursor;

/// Errors from lifecycle-gated session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A root was requested (or a rebuild started) while the scenario is
    /// running.
    #[error("science database roots can not be created while a scenario is running")]
    ScenarioRunning,
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Accepting roots: between construction (or scenario end) and
    /// activation.
    Building,
    /// Scenario running: the root set is frozen.
    Active,
}

/// Owns the arena and the ordered root set for one scenario session.
#[derive(Debug)]
pub struct Session {
    db: EntryDb,
    roots: Vec<EntryId>,
    phase: Phase,
}

impl Session {
    /// A fresh session, accepting roots.
    pub fn new() -> Self {
        Self {
            db: EntryDb::new(),
            roots: Vec::new(),
            phase: Phase::Building,
        }
    }

    /// Discard every root and entry ahead of a fresh build pass.
    ///
    /// Fails if the scenario is still running; a rebuild must never race
    /// consumers that assume tree stability.
    pub fn begin_rebuild(&mut self) -> Result<(), SessionError> {
        if self.phase == Phase::Active {
            tracing::error!("science database rebuild requested while a scenario is running");
            return Err(SessionError::ScenarioRunning);
        }
        self.roots.clear();
        self.db.clear();
        Ok(())
    }

    /// Create a new root entry with the placeholder name and return its id.
    ///
    /// Rejected once the scenario is running: the attempt is logged and no
    /// entry is allocated, so enumeration never sees it.
    pub fn add_root(&mut self) -> Result<EntryId, SessionError> {
        if self.phase == Phase::Active {
            tracing::error!("science database roots can not be created while a scenario is running");
            return Err(SessionError::ScenarioRunning);
        }
        let id = self.db.insert_root();
        self.roots.push(id);
        Ok(id)
    }

    /// Mark the scenario as running, freezing the root set.
    pub fn activate(&mut self) {
        self.phase = Phase::Active;
    }

    /// Mark the scenario as ended; the next rebuild trigger may replace the
    /// forest.
    pub fn deactivate(&mut self) {
        self.phase = Phase::Building;
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Root entries in creation order.
    pub fn roots(&self) -> &[EntryId] {
        &self.roots
    }

    /// Read-only iteration over root entries for display.
    pub fn iter_roots(&self) -> impl Iterator<Item = (EntryId, &Entry)> {
        self.roots
            .iter()
            .filter_map(|&id| self.db.get(id).map(|entry| (id, entry)))
    }

    /// The entry arena, read-only.
    pub fn entries(&self) -> &EntryDb {
        &self.db
    }

    /// The entry arena, for mutation of already-constructed entries.
    pub fn entries_mut(&mut self) -> &mut EntryDb {
        &mut self.db
    }

    /// A scripting cursor positioned on `id`.
    pub fn cursor(&mut self, id: EntryId) -> Cursor<'_> {
        self.db.cursor(id)
    }

    /// Find a root by display name. Linear scan; the root set is tiny.
    pub fn root_named(&self, name: &str) -> Option<EntryId> {
        self.roots
            .iter()
            .copied()
            .find(|&id| self.db.get(id).is_some_and(|entry| entry.name == name))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
