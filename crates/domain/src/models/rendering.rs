//! Rendering-engine classification.

use serde::{Deserialize, Serialize};

/// View-technology family a template file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderingEngine {
    /// Component-based MVC views (Razor).
    Mvc,
    /// Legacy form-based pages.
    WebForms,
}

impl RenderingEngine {
    /// Converts to the configuration string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderingEngine::Mvc => "mvc",
            RenderingEngine::WebForms => "webforms",
        }
    }

    /// Parses from the configuration string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "mvc" => Some(RenderingEngine::Mvc),
            "webforms" => Some(RenderingEngine::WebForms),
            _ => None,
        }
    }
}

impl std::fmt::Display for RenderingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
