//! danmaku-ui: the view tree and layout toolkit of the danmaku game UI.
//!
//! Views expose their rectangle and ordered children through the [`View`]
//! trait; container views delegate to the [`Flex`] engine to position their
//! children. Nothing here draws pixels or reads input.

pub mod flex;
pub mod layout;
pub mod scene;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;

pub use flex::{AlignContent, AlignItems, Direction, Flex, FlexWrap, Justify};
pub use scene::Scene;
pub use view::{BlockView, FlexView, View, layout_tree};
