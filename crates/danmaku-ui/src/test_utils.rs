//! Shared test utilities for danmaku-ui tests.
//!
//! Provides a [`FakeView`] leaf that records how often it was laid out.

use danmaku_types::Rect;

use crate::view::View;

/// A leaf view that counts its layout calls.
#[derive(Debug, Clone)]
pub struct FakeView {
    pub rect: Rect,
    pub layout_calls: usize,
}

impl FakeView {
    /// A fake with an intrinsic size of `w` x `h`.
    pub fn sized(w: i32, h: i32) -> Self {
        Self {
            rect: Rect::from_size(w, h),
            layout_calls: 0,
        }
    }
}

impl View for FakeView {
    fn name(&self) -> &str {
        "fake"
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn layout(&mut self) -> danmaku_types::Result<()> {
        self.layout_calls += 1;
        Ok(())
    }
}
