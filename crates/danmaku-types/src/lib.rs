//! Foundation types for danmaku.
//!
//! This crate contains the engine-agnostic types shared by the other danmaku
//! crates: integer geometry, the error taxonomy, and game configuration.

pub mod config;
pub mod error;
pub mod geometry;

pub use error::{DanmakuError, Result};
pub use geometry::{Point, Rect};
