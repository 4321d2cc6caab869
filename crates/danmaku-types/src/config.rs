//! Game configuration loaded from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::error::{DanmakuError, Result};

/// Screen and window settings for a danmaku session.
///
/// Every field is optional in the TOML source; missing fields take the
/// defaults of a portrait arcade screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical screen width in pixels.
    pub screen_width: u32,
    /// Logical screen height in pixels.
    pub screen_height: u32,
    /// Title of the host window.
    pub window_title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 480,
            screen_height: 640,
            window_title: "danmaku".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(src: &str) -> Result<Self> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&src)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(DanmakuError::Config(format!(
                "screen size must be non-zero, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.screen_width > i32::MAX as u32 || self.screen_height > i32::MAX as u32 {
            return Err(DanmakuError::Config(
                "screen size does not fit pixel coordinates".into(),
            ));
        }
        Ok(())
    }
}
