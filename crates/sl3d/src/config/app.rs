use super::{Config, ConfigError};
use crate::platform::MonitorMode;
use crate::render::{BackendKind, ClearColor};
use serde::{Deserialize, Serialize};

/// Top-level application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Which backend to construct
    pub backend: BackendKind,
    /// Window placement and size
    pub window: WindowConfig,
    /// GL context hints
    pub context: ContextConfig,
    /// Log filtering
    pub logging: LoggingConfig,
    /// Color the example render hook clears to
    pub clear_color: ClearColor,
}

impl Config for AppConfig {}

/// Window creation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Framebuffer width in pixels
    pub width: u32,
    /// Framebuffer height in pixels
    pub height: u32,
    /// Initial window title
    pub title: String,
    /// Windowed or fullscreen on the primary monitor
    pub monitor: MonitorMode,
    /// Wait for vertical blank on buffer swap
    pub vsync: bool,
}

impl WindowConfig {
    /// Windowed configuration with the given size and title
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            ..Self::default()
        }
    }

    /// Reject sizes the windowing library cannot create
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            title: "Default_Window_Title".to_string(),
            monitor: MonitorMode::Windowed,
            vsync: true,
        }
    }
}

/// OpenGL context hints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Requested GL major version
    pub major_version: u32,
    /// Requested GL minor version
    pub minor_version: u32,
    /// Request a core profile context
    pub core_profile: bool,
    /// Request a forward-compatible context (required on macOS for core 3.2+)
    pub forward_compatible: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            major_version: 3,
            minor_version: 3,
            core_profile: true,
            forward_compatible: cfg!(target_os = "macos"),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level filter; `RUST_LOG` takes precedence
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_default_window() {
        let config = AppConfig::default();

        assert_eq!(config.backend, BackendKind::OpenGl);
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.window.title, "Default_Window_Title");
        assert_eq!(config.window.monitor, MonitorMode::Windowed);
        assert_eq!(config.clear_color, ClearColor::BLUE);
        assert_eq!((config.context.major_version, config.context.minor_version), (3, 3));
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        assert!(WindowConfig::new(640, 480, "ok").validate().is_ok());
        assert!(matches!(
            WindowConfig::new(0, 480, "no width").validate(),
            Err(ConfigError::Invalid(_))
        ));
        assert!(WindowConfig::new(640, 0, "no height").validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            backend = "vulkan"

            [window]
            title = "Partial"
            monitor = "primary"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend, BackendKind::Vulkan);
        assert_eq!(config.window.title, "Partial");
        assert_eq!(config.window.monitor, MonitorMode::Primary);
        assert_eq!(config.window.width, 640);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_opengl_backend_name() {
        let config: AppConfig = toml::from_str(r#"backend = "opengl""#).unwrap();
        assert_eq!(config.backend, BackendKind::OpenGl);

        let saved = toml::to_string(&AppConfig::default()).unwrap();
        assert!(saved.contains(r#"backend = "opengl""#));
        assert!(toml::from_str::<AppConfig>(r#"backend = "open_gl""#).is_err());
    }
}
