//! Base contract for editable view files.

use uuid::Uuid;

use crate::config::ViewEngineConfig;

/// Contract shared by on-disk view files: stable identity, tracked path and
/// content mutation, and a validity predicate over explicit configuration.
pub trait ViewFile {
    /// Stable identifier, derived from the name at construction.
    fn key(&self) -> Uuid;

    /// File-system location.
    fn path(&self) -> &str;

    /// Moves the file. The change is recorded for partial persistence.
    fn set_path(&mut self, path: String);

    /// Raw file content, empty until loaded.
    fn content(&self) -> &str;

    /// Replaces the file content. The change is recorded for partial
    /// persistence.
    fn set_content(&mut self, content: String);

    /// Whether the file sits in an allowed directory with an allowed
    /// extension for the configured engine. Pure predicate: malformed paths
    /// or empty configuration yield `false`, never an error.
    fn is_valid(&self, config: &ViewEngineConfig) -> bool;
}
