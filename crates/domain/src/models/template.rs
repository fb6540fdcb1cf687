//! Template domain model.
//!
//! A template is an on-disk view file with a position in the content
//! hierarchy and an optional master template it inherits layout from. Every
//! mutable field funnels through the change tracker so a unit-of-work can
//! persist only what changed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use shared::alias::{sanitize_name, to_safe_alias};
use shared::keys::derive_key;
use shared::paths::{verify_edit_path, verify_file_extension};

use crate::config::ViewEngineConfig;
use crate::error::TemplateError;
use crate::models::file::ViewFile;
use crate::models::rendering::RenderingEngine;
use crate::tracking::{ChangeTracker, DirtyTracking, TemplateField};

/// Master-template reference id, resolved on demand.
///
/// Stays `Unresolved` until a caller supplies the id (typically looked up by
/// alias in the repository layer), then holds the resolved integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MasterTemplateId {
    #[default]
    Unresolved,
    Resolved(i64),
}

impl MasterTemplateId {
    /// The resolved id, if resolution already happened.
    pub fn get(&self) -> Option<i64> {
        match self {
            MasterTemplateId::Resolved(id) => Some(*id),
            MasterTemplateId::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, MasterTemplateId::Resolved(_))
    }

    /// Returns the id, invoking `resolver` on first read only.
    pub fn resolve_with<F: FnOnce() -> i64>(&mut self, resolver: F) -> i64 {
        match *self {
            MasterTemplateId::Resolved(id) => id,
            MasterTemplateId::Unresolved => {
                let id = resolver();
                *self = MasterTemplateId::Resolved(id);
                id
            }
        }
    }
}

/// Represents a template file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    key: Uuid,
    name: String,
    alias: String,
    path: String,
    #[serde(default)]
    content: String,
    creator_id: i64,
    level: i32,
    sort_order: i32,
    parent_id: i64,
    node_path: Option<String>,
    #[serde(skip)]
    master_template_id: MasterTemplateId,
    master_template_alias: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(skip)]
    tracker: ChangeTracker,
}

impl Template {
    /// Sentinel parent id for a template at the root of the hierarchy.
    pub const NO_PARENT: i64 = -1;

    /// Creates a new template.
    ///
    /// The key is derived from the name, the name loses path separators, and
    /// the alias is normalized into its safe form. Names and aliases that
    /// sanitize to nothing are rejected.
    pub fn new(path: &str, name: &str, alias: &str) -> Result<Self, TemplateError> {
        let name = sanitize_name(name);
        if name.trim().is_empty() {
            return Err(TemplateError::EmptyName);
        }

        let safe_alias = to_safe_alias(alias);
        if safe_alias.is_empty() {
            return Err(TemplateError::UnusableAlias(alias.to_string()));
        }

        let now = Utc::now();
        let mut template = Self {
            key: derive_key(&name),
            name,
            alias: safe_alias,
            path: path.to_string(),
            content: String::new(),
            creator_id: 0,
            level: 0,
            sort_order: 0,
            parent_id: 0,
            node_path: None,
            master_template_id: MasterTemplateId::Unresolved,
            master_template_alias: None,
            created_at: now,
            updated_at: now,
            tracker: ChangeTracker::new(),
        };
        // The root default goes through the tracked setter, so a freshly
        // constructed template already carries a ParentId change record.
        template.set_parent_id(Self::NO_PARENT);
        Ok(template)
    }

    /// Rehydration constructor: path only, no name, alias or key yet. Used
    /// when loading a template back from disk before its metadata row is
    /// attached.
    pub fn from_path(path: &str) -> Self {
        let now = Utc::now();
        let mut template = Self {
            key: Uuid::nil(),
            name: String::new(),
            alias: String::new(),
            path: path.to_string(),
            content: String::new(),
            creator_id: 0,
            level: 0,
            sort_order: 0,
            parent_id: 0,
            node_path: None,
            master_template_id: MasterTemplateId::Unresolved,
            master_template_alias: None,
            created_at: now,
            updated_at: now,
            tracker: ChangeTracker::new(),
        };
        template.set_parent_id(Self::NO_PARENT);
        template
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn creator_id(&self) -> i64 {
        self.creator_id
    }

    pub fn set_creator_id(&mut self, creator_id: i64) {
        self.creator_id = creator_id;
        self.tracker.mark_dirty(TemplateField::CreatorId);
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn set_level(&mut self, level: i32) {
        self.level = level;
        self.tracker.mark_dirty(TemplateField::Level);
    }

    pub fn sort_order(&self) -> i32 {
        self.sort_order
    }

    pub fn set_sort_order(&mut self, sort_order: i32) {
        self.sort_order = sort_order;
        self.tracker.mark_dirty(TemplateField::SortOrder);
    }

    pub fn parent_id(&self) -> i64 {
        self.parent_id
    }

    pub fn set_parent_id(&mut self, parent_id: i64) {
        self.parent_id = parent_id;
        self.tracker.mark_dirty(TemplateField::ParentId);
    }

    /// Materialized hierarchy path, e.g. `-1,1050,1063`.
    pub fn node_path(&self) -> Option<&str> {
        self.node_path.as_deref()
    }

    pub fn set_node_path(&mut self, node_path: Option<String>) {
        self.node_path = node_path;
        self.tracker.mark_dirty(TemplateField::NodePath);
    }

    pub fn master_template_alias(&self) -> Option<&str> {
        self.master_template_alias.as_deref()
    }

    pub fn set_master_template_alias(&mut self, alias: Option<String>) {
        self.master_template_alias = alias;
        self.tracker.mark_dirty(TemplateField::MasterTemplateAlias);
    }

    /// Master-template id reference. Not change-tracked.
    pub fn master_template_id(&self) -> MasterTemplateId {
        self.master_template_id
    }

    pub fn set_master_template_id(&mut self, id: i64) {
        self.master_template_id = MasterTemplateId::Resolved(id);
    }

    /// Returns the master-template id, invoking `resolver` on first read.
    pub fn resolve_master_template_id<F: FnOnce() -> i64>(&mut self, resolver: F) -> i64 {
        self.master_template_id.resolve_with(resolver)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Classifies the rendering engine from the file path. Razor suffixes
    /// (`cshtml`, `vbhtml`, no leading dot required) are MVC; everything
    /// else is WebForms.
    pub fn rendering_engine(&self) -> RenderingEngine {
        if self.path.ends_with("cshtml") || self.path.ends_with("vbhtml") {
            RenderingEngine::Mvc
        } else {
            RenderingEngine::WebForms
        }
    }
}

impl ViewFile for Template {
    fn key(&self) -> Uuid {
        self.key
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn set_path(&mut self, path: String) {
        self.path = path;
        self.tracker.mark_dirty(TemplateField::Path);
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn set_content(&mut self, content: String) {
        self.content = content;
        self.tracker.mark_dirty(TemplateField::Content);
    }

    fn is_valid(&self, config: &ViewEngineConfig) -> bool {
        let valid_file = verify_edit_path(&self.path, &config.allowed_directories());
        let valid_extension = verify_file_extension(&self.path, &config.allowed_extensions());
        valid_file && valid_extension
    }
}

impl DirtyTracking for Template {
    fn is_dirty(&self) -> bool {
        self.tracker.is_dirty()
    }

    fn is_field_dirty(&self, field: TemplateField) -> bool {
        self.tracker.is_field_dirty(field)
    }

    fn dirty_fields(&self) -> Vec<TemplateField> {
        self.tracker.dirty_fields()
    }

    fn reset_dirty(&mut self) {
        self.tracker.reset();
    }
}

/// Request payload for creating a template.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(
        length(min = 1, max = 100, message = "Alias must be 1-100 characters"),
        custom(function = "shared::validation::validate_alias")
    )]
    pub alias: String,

    #[validate(custom(function = "shared::validation::validate_template_path"))]
    pub path: String,
}

impl CreateTemplateRequest {
    /// Builds the entity from the validated payload.
    pub fn into_template(self) -> Result<Template, TemplateError> {
        Template::new(&self.path, &self.name, &self.alias)
    }
}

/// Request payload for updating a template's hierarchy and master-template
/// fields (partial update).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplateRequest {
    pub parent_id: Option<i64>,
    pub level: Option<i32>,
    pub sort_order: Option<i32>,
    pub node_path: Option<String>,
    pub master_template_alias: Option<String>,
}

impl UpdateTemplateRequest {
    /// Funnels every present field through the entity's tracked setters.
    pub fn apply_to(&self, template: &mut Template) {
        if let Some(parent_id) = self.parent_id {
            template.set_parent_id(parent_id);
        }
        if let Some(level) = self.level {
            template.set_level(level);
        }
        if let Some(sort_order) = self.sort_order {
            template.set_sort_order(sort_order);
        }
        if let Some(node_path) = &self.node_path {
            template.set_node_path(Some(node_path.clone()));
        }
        if let Some(alias) = &self.master_template_alias {
            template.set_master_template_alias(Some(alias.clone()));
        }
    }
}

/// Response payload for template operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateResponse {
    pub key: Uuid,
    pub name: String,
    pub alias: String,
    pub path: String,
    pub parent_id: i64,
    pub level: i32,
    pub sort_order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_template_alias: Option<String>,
    pub rendering_engine: RenderingEngine,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Template> for TemplateResponse {
    fn from(t: &Template) -> Self {
        Self {
            key: t.key,
            name: t.name.clone(),
            alias: t.alias.clone(),
            path: t.path.clone(),
            parent_id: t.parent_id,
            level: t.level,
            sort_order: t.sort_order,
            node_path: t.node_path.clone(),
            master_template_alias: t.master_template_alias.clone(),
            rendering_engine: t.rendering_engine(),
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}
