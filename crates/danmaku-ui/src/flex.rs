//! Flexbox layout for a single line of children.
//!
//! Implements the CSS Flexible Box algorithm
//! (<https://www.w3.org/TR/css-flexbox-1/>) restricted to one line and
//! without grow/shrink: every child keeps its current main-axis extent as its
//! flex base size, and leftover space is consumed only by justification.
//! Multi-line wrapping is not implemented and is reported as an unsupported
//! layout option.

use danmaku_types::{DanmakuError, Rect, Result};

use crate::layout::{cross_extent, main_extent, span_rect};
use crate::view::View;

macro_rules! policy_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The kebab-case name used in scene files.
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $text, )+
                }
            }

            /// Look a variant up by its kebab-case name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $text => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

policy_enum! {
    /// The direction in which flex items are laid out.
    Direction {
        /// Main axis is X.
        Row => "row",
        /// Main axis is Y.
        Column => "column",
    }
}

policy_enum! {
    /// Whether the container is single- or multi-line.
    FlexWrap {
        NoWrap => "no-wrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

policy_enum! {
    /// Distribution of items along the main axis.
    ///
    /// <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
    Justify {
        /// Pack to the start of the line.
        Start => "start",
        /// Pack to the end of the line.
        End => "end",
        /// Pack to the center of the line.
        Center => "center",
        /// Even spacing, first and last items flush with the edges.
        SpaceBetween => "space-between",
        /// Even spacing, half-size spaces at both ends.
        SpaceAround => "space-around",
    }
}

policy_enum! {
    /// Placement of items along the cross axis of their line.
    AlignItems {
        Start => "start",
        End => "end",
        Center => "center",
    }
}

policy_enum! {
    /// Alignment of lines when there is extra cross-axis space.
    ///
    /// Only meaningful for multi-line containers, so the single-line engine
    /// never reads it.
    AlignContent {
        Stretch => "stretch",
        Start => "start",
        End => "end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
    }
}

/// Layout policy of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flex {
    pub direction: Direction,
    pub wrap: FlexWrap,
    pub justify: Justify,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
}

impl Default for Flex {
    fn default() -> Self {
        Self {
            direction: Direction::Row,
            wrap: FlexWrap::NoWrap,
            justify: Justify::Center,
            align_items: AlignItems::Center,
            align_content: AlignContent::Center,
        }
    }
}

/// One child's geometry during a pass, in main/cross coordinates.
#[derive(Debug, Clone, Copy, Default)]
struct Element {
    flex_base_size: f64,
    main_size: f64,
    main_offset: f64,
    cross_size: f64,
    cross_offset: f64,
}

#[derive(Debug, Default)]
struct FlexLine {
    main_size: f64,
    cross_size: f64,
    cross_offset: f64,
    items: Vec<Element>,
}

impl Flex {
    pub fn row() -> Self {
        Self::default()
    }

    pub fn column() -> Self {
        Self {
            direction: Direction::Column,
            ..Self::default()
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_wrap(mut self, wrap: FlexWrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn with_align_items(mut self, align: AlignItems) -> Self {
        self.align_items = align;
        self
    }

    pub fn with_align_content(mut self, align: AlignContent) -> Self {
        self.align_content = align;
        self
    }

    /// Fail if this policy asks for something the engine cannot lay out.
    ///
    /// `container` names the owner in the returned error.
    pub fn check(&self, container: &str) -> Result<()> {
        match self.wrap {
            FlexWrap::NoWrap => Ok(()),
            FlexWrap::Wrap | FlexWrap::WrapReverse => {
                log::error!("flex '{container}': {} is not implemented", self.wrap);
                Err(DanmakuError::unsupported_layout(
                    container,
                    "wrap",
                    self.wrap.name(),
                ))
            },
        }
    }

    /// Position `children` inside a container occupying `bounds`, then lay
    /// out each child in turn.
    ///
    /// Child rectangles are local to the container: offsets start at 0 on
    /// its leading edges. This policy and every policy below it are checked
    /// before any child is touched, so an unsupported policy anywhere in the
    /// subtree leaves every child as it was.
    pub fn layout<V: View>(
        &self,
        container: &str,
        bounds: Rect,
        children: &mut [V],
    ) -> Result<()> {
        self.check(container)?;
        children.iter().try_for_each(|child| child.check_layout())?;

        let size = bounds.size();
        let container_main = f64::from(main_extent(self.direction, size));
        let container_cross = f64::from(cross_extent(self.direction, size));

        let mut line = self.collect_line(children);

        // No grow/shrink: free space is left to justification.
        let free_space = container_main - line.main_size;
        for item in &mut line.items {
            item.main_size = item.flex_base_size;
        }

        // A single line fills the container's cross extent.
        line.cross_size = container_cross;
        line.cross_offset = 0.0;

        log::trace!(
            "flex '{container}': {} {} children in {}x{}, free space {free_space}",
            line.items.len(),
            self.direction,
            size.x,
            size.y,
        );

        self.justify_line(&mut line, container_main);
        self.align_line(&mut line);

        for (child, item) in children.iter_mut().zip(&line.items) {
            child.set_rect(span_rect(
                self.direction,
                item.main_offset,
                item.main_size,
                item.cross_offset,
                item.cross_size,
            ));
            child.layout()?;
        }
        Ok(())
    }

    fn collect_line<V: View>(&self, children: &[V]) -> FlexLine {
        let items: Vec<Element> = children
            .iter()
            .map(|child| {
                let size = child.rect().size();
                Element {
                    flex_base_size: f64::from(main_extent(self.direction, size)),
                    cross_size: f64::from(cross_extent(self.direction, size)),
                    ..Element::default()
                }
            })
            .collect();
        FlexLine {
            main_size: items.iter().map(|e| e.flex_base_size).sum(),
            items,
            ..FlexLine::default()
        }
    }

    fn justify_line(&self, line: &mut FlexLine, container_main: f64) {
        let used: f64 = line.items.iter().map(|e| e.main_size).sum();
        let remaining = container_main - used;
        let count = line.items.len();

        // Leading space plus `i` inter-item spacings. Sizes and `remaining`
        // are whole pixels, so each value is a single division of exact
        // integers and positions do not drift along the line.
        let space_before = |i: usize| -> f64 {
            match self.justify {
                Justify::Start => 0.0,
                Justify::End => remaining,
                Justify::Center => remaining / 2.0,
                // A lone item has no gap to spread into; it packs to the start.
                Justify::SpaceBetween if count > 1 => i as f64 * remaining / (count - 1) as f64,
                Justify::SpaceBetween => 0.0,
                Justify::SpaceAround => (2 * i + 1) as f64 * remaining / (2 * count) as f64,
            }
        };

        let mut cursor = 0.0;
        for (i, item) in line.items.iter_mut().enumerate() {
            item.main_offset = cursor + space_before(i);
            cursor += item.main_size;
        }
    }

    fn align_line(&self, line: &mut FlexLine) {
        for item in &mut line.items {
            item.cross_offset = line.cross_offset;
            if item.cross_size == line.cross_size {
                continue;
            }
            let diff = line.cross_size - item.cross_size;
            match self.align_items {
                AlignItems::Start => {},
                AlignItems::End => item.cross_offset += diff,
                AlignItems::Center => item.cross_offset += diff / 2.0,
            }
        }
    }
}
