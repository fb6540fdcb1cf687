//! View-engine configuration.
//!
//! Validation never reads ambient process-wide state: callers load a
//! [`ViewEngineConfig`] once and pass it into
//! [`crate::models::Template::is_valid`].

use serde::Deserialize;

use crate::models::rendering::RenderingEngine;

/// Configuration driving template validation and classification defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewEngineConfig {
    pub engine: EngineConfig,
    pub directories: DirectoryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Rendering engine newly created templates target.
    #[serde(default = "default_rendering_engine")]
    pub default_rendering_engine: RenderingEngine,

    /// Whether WebForms sites use master pages instead of plain pages.
    #[serde(default = "default_use_master_pages")]
    pub use_master_pages: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// Root directory for WebForms master pages.
    #[serde(default = "default_masterpages_dir")]
    pub masterpages: String,

    /// Root directory for MVC views.
    #[serde(default = "default_mvc_views_dir")]
    pub mvc_views: String,
}

// Default value functions
fn default_rendering_engine() -> RenderingEngine {
    RenderingEngine::Mvc
}
fn default_use_master_pages() -> bool {
    true
}
fn default_masterpages_dir() -> String {
    "/masterpages".to_string()
}
fn default_mvc_views_dir() -> String {
    "/views".to_string()
}

impl Default for ViewEngineConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig {
                default_rendering_engine: default_rendering_engine(),
                use_master_pages: default_use_master_pages(),
            },
            directories: DirectoryConfig {
                masterpages: default_masterpages_dir(),
                mvc_views: default_mvc_views_dir(),
            },
        }
    }
}

impl ViewEngineConfig {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with CMS__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("CMS").separator("__"))
            .build()?
            .try_deserialize::<Self>()?;

        tracing::debug!(
            engine = cfg.engine.default_rendering_engine.as_str(),
            use_master_pages = cfg.engine.use_master_pages,
            "view-engine configuration loaded"
        );
        Ok(cfg)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// Builds entirely from embedded defaults plus overrides, without relying
    /// on config files (which may not be accessible during tests).
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [engine]
            default_rendering_engine = "mvc"
            use_master_pages = true

            [directories]
            masterpages = "/masterpages"
            mvc_views = "/views"
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        builder.build()?.try_deserialize()
    }

    /// File extensions acceptable for the configured default engine.
    pub fn allowed_extensions(&self) -> Vec<&'static str> {
        match self.engine.default_rendering_engine {
            RenderingEngine::Mvc => vec!["cshtml", "vbhtml"],
            RenderingEngine::WebForms => {
                if self.engine.use_master_pages {
                    vec!["master"]
                } else {
                    vec!["aspx"]
                }
            }
        }
    }

    /// Directories a template file may live under for the configured default
    /// engine.
    pub fn allowed_directories(&self) -> Vec<&str> {
        let mut dirs = vec![self.directories.masterpages.as_str()];
        if self.engine.default_rendering_engine == RenderingEngine::Mvc {
            dirs.push(self.directories.mvc_views.as_str());
        }
        dirs
    }
}
