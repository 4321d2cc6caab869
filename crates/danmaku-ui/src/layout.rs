//! Axis helpers: main/cross mapping and pixel rounding.
//!
//! The flex engine works in main/cross coordinates. These helpers translate
//! between those and screen X/Y for a given [`Direction`].

use danmaku_types::{Point, Rect};

use crate::flex::Direction;

/// Extent of `size` along the main axis of `direction`.
pub fn main_extent(direction: Direction, size: Point) -> i32 {
    match direction {
        Direction::Row => size.x,
        Direction::Column => size.y,
    }
}

/// Extent of `size` along the cross axis of `direction`.
pub fn cross_extent(direction: Direction, size: Point) -> i32 {
    match direction {
        Direction::Row => size.y,
        Direction::Column => size.x,
    }
}

/// Round half up to the nearest pixel: `floor(v + 0.5)`.
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Build a rectangle from a main-axis span and a cross-axis span.
///
/// Each of the four edges is rounded on its own, so a span's far edge is
/// never derived from a rounded size.
pub fn span_rect(
    direction: Direction,
    main_offset: f64,
    main_size: f64,
    cross_offset: f64,
    cross_size: f64,
) -> Rect {
    let main0 = round_half_up(main_offset);
    let main1 = round_half_up(main_offset + main_size);
    let cross0 = round_half_up(cross_offset);
    let cross1 = round_half_up(cross_offset + cross_size);
    match direction {
        Direction::Row => Rect::new(main0, cross0, main1, cross1),
        Direction::Column => Rect::new(cross0, main0, cross1, main1),
    }
}
