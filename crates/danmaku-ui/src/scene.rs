//! Declarative view trees loaded from TOML.
//!
//! A scene describes a tree of containers and leaves. Policy fields are
//! kept as strings until [`Scene::build`] so that an unknown value can be
//! reported together with the container it belongs to.

use std::path::Path;

use serde::Deserialize;

use danmaku_types::{DanmakuError, Result};

use crate::flex::{AlignContent, AlignItems, Direction, Flex, FlexWrap, Justify};
use crate::view::{BlockView, FlexView, View};

/// A parsed scene file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    pub root: NodeSpec,
}

/// What kind of view a node builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Flex,
    #[default]
    Block,
}

/// One node of a scene.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeSpec {
    pub name: String,
    pub kind: NodeKind,
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
    pub direction: Option<String>,
    pub wrap: Option<String>,
    pub justify: Option<String>,
    pub align_items: Option<String>,
    pub align_content: Option<String>,
    pub children: Vec<NodeSpec>,
}

impl Scene {
    /// Parse a scene from TOML text.
    pub fn from_toml(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Read and parse a scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;
        let scene = Self::from_toml(&src)?;
        log::debug!("Loaded scene '{}' from {}", scene.root.name, path.display());
        Ok(scene)
    }

    /// Build the view tree this scene describes.
    pub fn build(&self) -> Result<Box<dyn View>> {
        self.root.build("root")
    }
}

impl NodeSpec {
    fn build(&self, path: &str) -> Result<Box<dyn View>> {
        let name = if self.name.is_empty() {
            path.to_string()
        } else {
            self.name.clone()
        };
        let width = pixels(&name, "width", self.width)?;
        let height = pixels(&name, "height", self.height)?;

        match self.kind {
            NodeKind::Block => {
                if !self.children.is_empty() {
                    return Err(DanmakuError::Config(format!(
                        "block '{name}' cannot have children"
                    )));
                }
                if let Some(field) = self.policy_field() {
                    return Err(DanmakuError::Config(format!(
                        "block '{name}' cannot set flex option '{field}'"
                    )));
                }
                Ok(Box::new(BlockView::new(name, width, height)))
            },
            NodeKind::Flex => {
                let flex = self.flex(&name)?;
                let mut view = FlexView::new(name.clone(), width, height).with_flex(flex);
                for (i, child) in self.children.iter().enumerate() {
                    view.push(child.build(&format!("{name}/{i}"))?);
                }
                Ok(Box::new(view))
            },
        }
    }

    fn flex(&self, container: &str) -> Result<Flex> {
        let mut flex = Flex::default();
        if let Some(v) = &self.direction {
            flex.direction = parse_option(container, "direction", v, Direction::from_name)?;
        }
        if let Some(v) = &self.wrap {
            flex.wrap = parse_option(container, "wrap", v, FlexWrap::from_name)?;
        }
        if let Some(v) = &self.justify {
            flex.justify = parse_option(container, "justify", v, Justify::from_name)?;
        }
        if let Some(v) = &self.align_items {
            flex.align_items = parse_option(container, "align_items", v, AlignItems::from_name)?;
        }
        if let Some(v) = &self.align_content {
            flex.align_content =
                parse_option(container, "align_content", v, AlignContent::from_name)?;
        }
        Ok(flex)
    }

    fn policy_field(&self) -> Option<&'static str> {
        [
            ("direction", &self.direction),
            ("wrap", &self.wrap),
            ("justify", &self.justify),
            ("align_items", &self.align_items),
            ("align_content", &self.align_content),
        ]
        .into_iter()
        .find_map(|(field, value)| value.as_ref().map(|_| field))
    }
}

fn parse_option<T>(
    container: &str,
    field: &'static str,
    value: &str,
    from_name: fn(&str) -> Option<T>,
) -> Result<T> {
    from_name(value).ok_or_else(|| {
        log::error!("flex '{container}': unknown {field} '{value}'");
        DanmakuError::unsupported_layout(container, field, value)
    })
}

fn pixels(name: &str, field: &str, value: u32) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| DanmakuError::Config(format!("'{name}': {field} {value} is out of range")))
}
