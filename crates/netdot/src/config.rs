//! Configuration types for netdot rendering.
//!
//! All types implement [`serde::Deserialize`] so the CLI can load them from
//! a TOML file. Every section and field is optional.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`RenderConfig`] - Which [`ViewMode`] flat documents are rendered with.
//! - [`DiagnosticsConfig`] - Whether warnings fail a render.
//!
//! # Example
//!
//! ```
//! # use netdot::config::AppConfig;
//! # use netdot::view::ViewMode;
//! let config = AppConfig::default();
//! assert_eq!(config.render().view(), ViewMode::Full);
//! assert!(!config.diagnostics().deny_warnings());
//! ```

use serde::Deserialize;

use netdot_core::view::ViewMode;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Diagnostics configuration section.
    #[serde(default)]
    diagnostics: DiagnosticsConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(render: RenderConfig, diagnostics: DiagnosticsConfig) -> Self {
        Self {
            render,
            diagnostics,
        }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the diagnostics configuration.
    pub fn diagnostics(&self) -> &DiagnosticsConfig {
        &self.diagnostics
    }
}

/// Render settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    /// [`ViewMode`] used for flat documents. Hierarchical documents ignore it.
    #[serde(default)]
    view: ViewMode,
}

impl RenderConfig {
    pub fn new(view: ViewMode) -> Self {
        Self { view }
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiagnosticsConfig {
    /// Treat warning diagnostics (skipped links, dropped documents) as errors.
    #[serde(default)]
    deny_warnings: bool,
}

impl DiagnosticsConfig {
    pub fn new(deny_warnings: bool) -> Self {
        Self { deny_warnings }
    }

    pub fn deny_warnings(&self) -> bool {
        self.deny_warnings
    }
}
