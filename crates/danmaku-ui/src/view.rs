//! The view tree: the [`View`] capability trait and the stock views.

use danmaku_types::{Rect, Result};

use crate::flex::Flex;

/// A rectangular node in the UI tree.
///
/// A view's rectangle is expressed in its parent's coordinate space. Before a
/// layout pass the size of that rectangle is the view's intrinsic size; after
/// the pass it is the resolved geometry.
pub trait View {
    /// Name used in diagnostics.
    fn name(&self) -> &str {
        "view"
    }

    /// Current rectangle.
    fn rect(&self) -> Rect;

    /// Assign a new rectangle.
    fn set_rect(&mut self, rect: Rect);

    /// Direct children, in layout order.
    fn children(&self) -> &[Box<dyn View>] {
        &[]
    }

    /// Mutable access to the direct children, in layout order.
    fn children_mut(&mut self) -> &mut [Box<dyn View>] {
        &mut []
    }

    /// Position this view's children inside its current rectangle, and
    /// recursively theirs.
    fn layout(&mut self) -> Result<()> {
        Ok(())
    }

    /// Fail if this view or any descendant has a layout policy that cannot be
    /// laid out. Touches nothing.
    fn check_layout(&self) -> Result<()> {
        self.children()
            .iter()
            .try_for_each(|child| child.check_layout())
    }
}

impl std::fmt::Debug for dyn View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("name", &self.name())
            .field("rect", &self.rect())
            .field("children", &self.children().len())
            .finish()
    }
}

impl<V: View + ?Sized> View for Box<V> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn rect(&self) -> Rect {
        (**self).rect()
    }

    fn set_rect(&mut self, rect: Rect) {
        (**self).set_rect(rect);
    }

    fn children(&self) -> &[Box<dyn View>] {
        (**self).children()
    }

    fn children_mut(&mut self) -> &mut [Box<dyn View>] {
        (**self).children_mut()
    }

    fn layout(&mut self) -> Result<()> {
        (**self).layout()
    }

    fn check_layout(&self) -> Result<()> {
        (**self).check_layout()
    }
}

/// Run one full layout pass: give `root` the rectangle `bounds` and lay out
/// the whole tree below it.
///
/// Every container in the tree is checked first, so an unsupported policy
/// anywhere fails the pass before any rectangle changes.
pub fn layout_tree(root: &mut dyn View, bounds: Rect) -> Result<()> {
    root.check_layout()?;
    root.set_rect(bounds);
    root.layout()
}

/// Visit `view` and its descendants depth-first, in layout order.
///
/// The callback receives the depth (0 for `view`), the view, and its
/// rectangle translated to the coordinate space of `view`'s parent.
pub fn walk(view: &dyn View, f: &mut dyn FnMut(usize, &dyn View, Rect)) {
    walk_at(view, 0, view.rect(), f);
}

fn walk_at(
    view: &dyn View,
    depth: usize,
    absolute: Rect,
    f: &mut dyn FnMut(usize, &dyn View, Rect),
) {
    f(depth, view, absolute);
    for child in view.children() {
        let child_abs = child.rect().translate(absolute.min());
        walk_at(&**child, depth + 1, child_abs, f);
    }
}

/// A container that positions its children with a [`Flex`] policy.
pub struct FlexView {
    name: String,
    /// Layout policy applied to the children.
    pub flex: Flex,
    rect: Rect,
    children: Vec<Box<dyn View>>,
}

impl FlexView {
    /// A container with the default policy and an intrinsic size of
    /// `width` x `height`.
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            flex: Flex::default(),
            rect: Rect::from_size(width, height),
            children: Vec::new(),
        }
    }

    pub fn with_flex(mut self, flex: Flex) -> Self {
        self.flex = flex;
        self
    }

    pub fn with_child(mut self, child: impl View + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Append a child at the end of the layout order.
    pub fn push(&mut self, child: Box<dyn View>) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl std::fmt::Debug for FlexView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlexView")
            .field("name", &self.name)
            .field("flex", &self.flex)
            .field("rect", &self.rect)
            .field("children", &self.children.len())
            .finish()
    }
}

impl View for FlexView {
    fn name(&self) -> &str {
        &self.name
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn children(&self) -> &[Box<dyn View>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn View>] {
        &mut self.children
    }

    fn layout(&mut self) -> Result<()> {
        self.flex.layout(&self.name, self.rect, &mut self.children)
    }

    fn check_layout(&self) -> Result<()> {
        self.flex.check(&self.name)?;
        self.children
            .iter()
            .try_for_each(|child| child.check_layout())
    }
}

/// A leaf of fixed intrinsic size: a sprite, a label, a spacer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockView {
    name: String,
    rect: Rect,
}

impl BlockView {
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            rect: Rect::from_size(width, height),
        }
    }
}

impl View for BlockView {
    fn name(&self) -> &str {
        &self.name
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flex::{AlignItems, FlexWrap, Justify};
    use danmaku_types::DanmakuError;

    fn menu() -> FlexView {
        FlexView::new("menu", 0, 0)
            .with_flex(
                Flex::column()
                    .with_justify(Justify::Center)
                    .with_align_items(AlignItems::Center),
            )
            .with_child(BlockView::new("start", 80, 20))
            .with_child(
                FlexView::new("options", 100, 20)
                    .with_flex(Flex::row().with_justify(Justify::SpaceBetween))
                    .with_child(BlockView::new("left", 10, 10))
                    .with_child(BlockView::new("right", 10, 10)),
            )
    }

    #[test]
    fn layout_tree_assigns_root_bounds() {
        let mut root = menu();
        layout_tree(&mut root, Rect::from_size(200, 100)).unwrap();
        assert_eq!(root.rect(), Rect::from_size(200, 100));
        // Column, remaining = 100 - 40 = 60, offset 30.
        assert_eq!(root.children()[0].rect(), Rect::new(60, 30, 140, 50));
        assert_eq!(root.children()[1].rect(), Rect::new(50, 50, 150, 70));
    }

    #[test]
    fn grandchildren_follow_new_bounds() {
        let mut root = menu();
        layout_tree(&mut root, Rect::from_size(200, 100)).unwrap();
        let options = &root.children()[1];
        assert_eq!(options.children()[0].rect(), Rect::new(0, 5, 10, 15));
        assert_eq!(options.children()[1].rect(), Rect::new(90, 5, 100, 15));
    }

    #[test]
    fn nested_reflow_on_resize() {
        let mut root = FlexView::new("root", 0, 0)
            .with_flex(Flex::row().with_justify(Justify::Start))
            .with_child(
                FlexView::new("bar", 40, 40)
                    .with_flex(Flex::row().with_justify(Justify::End))
                    .with_child(BlockView::new("icon", 10, 10)),
            );
        layout_tree(&mut root, Rect::from_size(100, 40)).unwrap();
        let icon = root.children()[0].children()[0].rect();
        assert_eq!(icon, Rect::new(30, 15, 40, 25));

        // Resize the bar; its children must re-flow on the next pass.
        root.children_mut()[0].set_rect(Rect::from_size(60, 40));
        layout_tree(&mut root, Rect::from_size(100, 40)).unwrap();
        let icon = root.children()[0].children()[0].rect();
        assert_eq!(icon, Rect::new(50, 15, 60, 25));
    }

    #[test]
    fn unsupported_policy_deep_in_tree_changes_nothing() {
        let mut root = FlexView::new("root", 0, 0)
            .with_child(BlockView::new("a", 10, 10))
            .with_child(
                FlexView::new("grid", 20, 20)
                    .with_flex(Flex::row().with_wrap(FlexWrap::WrapReverse))
                    .with_child(BlockView::new("b", 5, 5)),
            );
        let err = layout_tree(&mut root, Rect::from_size(100, 100)).unwrap_err();
        match err {
            DanmakuError::UnsupportedLayout {
                container, value, ..
            } => {
                assert_eq!(container, "grid");
                assert_eq!(value, "wrap-reverse");
            },
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(root.rect(), Rect::ZERO);
        assert_eq!(root.children()[0].rect(), Rect::from_size(10, 10));
    }

    #[test]
    fn direct_layout_with_unsupported_descendant_changes_nothing() {
        let mut root = FlexView::new("root", 100, 100)
            .with_child(BlockView::new("a", 10, 10))
            .with_child(
                FlexView::new("grid", 20, 20)
                    .with_flex(Flex::row().with_wrap(FlexWrap::Wrap))
                    .with_child(BlockView::new("b", 5, 5)),
            );
        let err = root.layout().unwrap_err();
        assert!(matches!(
            err,
            DanmakuError::UnsupportedLayout { field: "wrap", .. }
        ));
        assert_eq!(root.children()[0].rect(), Rect::from_size(10, 10));
        assert_eq!(root.children()[1].rect(), Rect::from_size(20, 20));
        assert_eq!(root.children()[1].children()[0].rect(), Rect::from_size(5, 5));
    }

    #[test]
    fn boxed_view_debug_shows_name_and_rect() {
        let view: Box<dyn View> = Box::new(BlockView::new("logo", 3, 4));
        let dbg = format!("{view:?}");
        assert!(dbg.contains("logo"));
        assert!(dbg.contains("x1: 3"));
    }

    #[test]
    fn walk_reports_absolute_rects() {
        let mut root = menu();
        layout_tree(&mut root, Rect::new(10, 10, 210, 110)).unwrap();
        let mut seen = Vec::new();
        walk(&root, &mut |depth, view, abs| {
            seen.push((depth, view.name().to_string(), abs));
        });
        let names: Vec<&str> = seen.iter().map(|s| s.1.as_str()).collect();
        assert_eq!(names, vec!["menu", "start", "options", "left", "right"]);
        assert_eq!(seen[0].2, Rect::new(10, 10, 210, 110));
        assert_eq!(seen[1].2, Rect::new(70, 40, 150, 60));
        assert_eq!(seen[4], (2, "right".to_string(), Rect::new(150, 65, 160, 75)));
    }

    #[test]
    fn block_layout_is_noop() {
        let mut block = BlockView::new("b", 3, 4);
        block.layout().unwrap();
        assert_eq!(block.rect(), Rect::from_size(3, 4));
        assert!(block.children().is_empty());
        block.check_layout().unwrap();
    }

    #[test]
    fn push_appends_in_order() {
        let mut view = FlexView::new("v", 10, 10);
        assert!(view.is_empty());
        view.push(Box::new(BlockView::new("one", 1, 1)));
        view.push(Box::new(BlockView::new("two", 1, 1)));
        assert_eq!(view.len(), 2);
        assert_eq!(view.children()[1].name(), "two");
    }
}
