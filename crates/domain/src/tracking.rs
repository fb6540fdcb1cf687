//! Change tracking for partial persistence.
//!
//! Every mutable template field funnels through [`ChangeTracker::mark_dirty`]
//! with its [`TemplateField`] identifier, so an owning unit-of-work can ask
//! which fields changed since load without diffing the entity itself.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Identifier for a mutable, change-tracked template field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateField {
    Path,
    Content,
    CreatorId,
    Level,
    SortOrder,
    ParentId,
    NodePath,
    MasterTemplateAlias,
}

impl TemplateField {
    /// Converts to the stable string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateField::Path => "path",
            TemplateField::Content => "content",
            TemplateField::CreatorId => "creatorId",
            TemplateField::Level => "level",
            TemplateField::SortOrder => "sortOrder",
            TemplateField::ParentId => "parentId",
            TemplateField::NodePath => "nodePath",
            TemplateField::MasterTemplateAlias => "masterTemplateAlias",
        }
    }

    /// Parses from the stable string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "path" => Some(TemplateField::Path),
            "content" => Some(TemplateField::Content),
            "creatorId" => Some(TemplateField::CreatorId),
            "level" => Some(TemplateField::Level),
            "sortOrder" => Some(TemplateField::SortOrder),
            "parentId" => Some(TemplateField::ParentId),
            "nodePath" => Some(TemplateField::NodePath),
            "masterTemplateAlias" => Some(TemplateField::MasterTemplateAlias),
            _ => None,
        }
    }
}

impl std::fmt::Display for TemplateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records which fields of an entity were modified since load.
///
/// Marking is unconditional: a write of the current value still records the
/// field. Marking the same field twice yields a single record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeTracker {
    dirty: BTreeSet<TemplateField>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `field` as modified.
    pub fn mark_dirty(&mut self, field: TemplateField) {
        tracing::trace!(field = %field, "field marked dirty");
        self.dirty.insert(field);
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn is_field_dirty(&self, field: TemplateField) -> bool {
        self.dirty.contains(&field)
    }

    /// Dirty field identifiers in stable order.
    pub fn dirty_fields(&self) -> Vec<TemplateField> {
        self.dirty.iter().copied().collect()
    }

    /// Forgets all recorded changes, typically after a successful persist.
    pub fn reset(&mut self) {
        self.dirty.clear();
    }
}

/// The seam an owning unit-of-work consumes to query and reset an entity's
/// change records.
pub trait DirtyTracking {
    fn is_dirty(&self) -> bool;
    fn is_field_dirty(&self, field: TemplateField) -> bool;
    fn dirty_fields(&self) -> Vec<TemplateField>;
    fn reset_dirty(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_field_serialization() {
        assert_eq!(
            serde_json::to_string(&TemplateField::ParentId).unwrap(),
            "\"parentId\""
        );
        assert_eq!(
            serde_json::to_string(&TemplateField::MasterTemplateAlias).unwrap(),
            "\"masterTemplateAlias\""
        );
    }

    #[test]
    fn test_template_field_round_trip() {
        let all = [
            TemplateField::Path,
            TemplateField::Content,
            TemplateField::CreatorId,
            TemplateField::Level,
            TemplateField::SortOrder,
            TemplateField::ParentId,
            TemplateField::NodePath,
            TemplateField::MasterTemplateAlias,
        ];
        for field in all {
            assert_eq!(TemplateField::from_str(field.as_str()), Some(field));
        }
        assert_eq!(TemplateField::from_str("invalid"), None);
    }

    #[test]
    fn test_template_field_display() {
        assert_eq!(TemplateField::Level.to_string(), "level");
        assert_eq!(TemplateField::NodePath.to_string(), "nodePath");
    }

    #[test]
    fn test_tracker_starts_clean() {
        let tracker = ChangeTracker::new();
        assert!(!tracker.is_dirty());
        assert!(tracker.dirty_fields().is_empty());
    }

    #[test]
    fn test_mark_dirty_records_field() {
        let mut tracker = ChangeTracker::new();
        tracker.mark_dirty(TemplateField::Level);
        assert!(tracker.is_dirty());
        assert!(tracker.is_field_dirty(TemplateField::Level));
        assert!(!tracker.is_field_dirty(TemplateField::SortOrder));
    }

    #[test]
    fn test_mark_dirty_twice_yields_one_record() {
        let mut tracker = ChangeTracker::new();
        tracker.mark_dirty(TemplateField::Level);
        tracker.mark_dirty(TemplateField::Level);
        assert_eq!(tracker.dirty_fields(), vec![TemplateField::Level]);
    }

    #[test]
    fn test_dirty_fields_stable_order() {
        let mut tracker = ChangeTracker::new();
        tracker.mark_dirty(TemplateField::NodePath);
        tracker.mark_dirty(TemplateField::Path);
        tracker.mark_dirty(TemplateField::Level);
        assert_eq!(
            tracker.dirty_fields(),
            vec![
                TemplateField::Path,
                TemplateField::Level,
                TemplateField::NodePath,
            ]
        );
    }

    #[test]
    fn test_reset_clears_records() {
        let mut tracker = ChangeTracker::new();
        tracker.mark_dirty(TemplateField::ParentId);
        tracker.reset();
        assert!(!tracker.is_dirty());
        assert!(!tracker.is_field_dirty(TemplateField::ParentId));
    }
}
