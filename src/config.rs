//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`M4L_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use mat4lab_display::PanelLayout;
use mat4lab_math::Matrix4x4;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Text grid layout
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Colors
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Input matrices for the demo
    #[serde(default)]
    pub demo: DemoConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`M4L_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // M4L_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("M4L_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "mat4lab - 4x4 Matrix Operations".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
        }
    }
}

/// Text grid layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Vertical distance between text rows in pixels
    pub row_height: i32,
    /// Horizontal distance between matrix columns in pixels
    pub column_width: i32,
    /// Left edge of the panel grid
    pub origin_x: i32,
    /// Top edge of the panel grid
    pub origin_y: i32,
    /// Integer glyph scale factor
    pub text_scale: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_height: 20,
            column_width: 60,
            origin_x: 0,
            origin_y: 0,
            text_scale: 1,
        }
    }
}

impl LayoutConfig {
    /// Convert to the display crate's layout type
    pub fn to_panel_layout(&self) -> PanelLayout {
        PanelLayout {
            row_height: self.row_height,
            column_width: self.column_width,
            origin_x: self.origin_x,
            origin_y: self.origin_y,
        }
    }
}

/// Color configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Text color [r, g, b, a]
    pub text_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.02, 0.02, 0.08, 1.0],
            text_color: [0.9, 0.9, 0.9, 1.0],
        }
    }
}

/// The two demo input matrices, row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    pub m1: [[f32; 4]; 4],
    pub m2: [[f32; 4]; 4],
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            m1: [
                [3.2, 0.7, 9.6, 4.4],
                [5.5, 1.3, 7.8, 2.1],
                [6.9, 8.0, 2.6, 1.0],
                [0.5, 7.2, 5.1, 3.3],
            ],
            m2: [
                [4.1, 6.5, 3.3, 2.2],
                [8.8, 0.6, 9.9, 7.7],
                [1.1, 5.5, 6.6, 0.0],
                [3.3, 9.9, 8.8, 2.2],
            ],
        }
    }
}

impl DemoConfig {
    pub fn m1(&self) -> Matrix4x4 {
        Matrix4x4::from(self.m1)
    }

    pub fn m2(&self) -> Matrix4x4 {
        Matrix4x4::from(self.m2)
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.layout.row_height, 20);
        assert_eq!(config.layout.column_width, 60);
    }

    #[test]
    fn test_default_demo_matrices() {
        let config = AppConfig::default();
        assert_eq!(config.demo.m1().m[0][0], 3.2);
        assert_eq!(config.demo.m2().m[3][3], 2.2);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("row_height"));
        assert!(toml.contains("m1"));
    }

    #[test]
    fn test_panel_layout_conversion() {
        let layout = LayoutConfig {
            row_height: 16,
            column_width: 48,
            origin_x: 4,
            origin_y: 8,
            text_scale: 2,
        };
        let panel_layout = layout.to_panel_layout();
        assert_eq!(panel_layout.row_height, 16);
        assert_eq!(panel_layout.column_width, 48);
        assert_eq!(panel_layout.origin_x, 4);
        assert_eq!(panel_layout.origin_y, 8);
    }
}
