//! Error types for danmaku.

use std::io;

/// Errors produced by the danmaku framework.
#[derive(Debug, thiserror::Error)]
pub enum DanmakuError {
    /// A container asked for a layout policy the engine does not implement,
    /// or a policy name that does not exist.
    #[error("unsupported layout option {field}={value} on container '{container}'")]
    UnsupportedLayout {
        container: String,
        field: &'static str,
        value: String,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl DanmakuError {
    /// Shorthand for [`DanmakuError::UnsupportedLayout`].
    pub fn unsupported_layout(
        container: impl Into<String>,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::UnsupportedLayout {
            container: container.into(),
            field,
            value: value.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DanmakuError>;
