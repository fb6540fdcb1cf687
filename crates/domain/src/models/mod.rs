//! Domain models for the CMS template backend.

pub mod file;
pub mod rendering;
pub mod template;

pub use file::ViewFile;
pub use rendering::RenderingEngine;
pub use template::{MasterTemplateId, Template};
