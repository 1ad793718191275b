use slotmap::new_key_type;

new_key_type! {
    /// Identifies an entry in the science database arena. Stable for the
    /// lifetime of a build pass; invalidated by the next rebuild.
    pub struct EntryId;
}

/// Opaque reference to a visual asset (3D model or radar trace) attached to
/// an entry. The database only carries the asset name; the rendering layer
/// resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisualRef(pub String);
