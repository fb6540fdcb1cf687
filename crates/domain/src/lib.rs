//! Domain layer for the CMS template backend.
//!
//! This crate contains:
//! - Domain models (Template, rendering-engine classification)
//! - Change tracking for partial persistence
//! - View-engine configuration
//! - Domain error types

pub mod config;
pub mod error;
pub mod models;
pub mod tracking;

pub use config::ViewEngineConfig;
pub use error::TemplateError;
pub use models::Template;
pub use tracking::{ChangeTracker, DirtyTracking, TemplateField};
