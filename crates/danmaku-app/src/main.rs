//! danmaku layout driver.
//!
//! Loads a scene (the built-in title screen unless a path is given), lays it
//! out at the configured screen size, and logs every resolved rectangle.
//!
//! Usage: `danmaku-layout [scene.toml] [config.toml]`

mod report;

use anyhow::{Context, Result};

use danmaku_types::Rect;
use danmaku_types::config::GameConfig;
use danmaku_ui::{Scene, layout_tree};

const TITLE_SCENE: &str = include_str!("../scenes/title.toml");

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let scene_path = args.next();
    let config_path = args.next();

    let config = match &config_path {
        Some(path) => GameConfig::load(path).with_context(|| format!("loading config {path}"))?,
        None => GameConfig::default(),
    };
    log::info!(
        "Starting {} ({}x{})",
        config.window_title,
        config.screen_width,
        config.screen_height,
    );

    let scene = match &scene_path {
        Some(path) => Scene::load(path).with_context(|| format!("loading scene {path}"))?,
        None => Scene::from_toml(TITLE_SCENE).context("parsing built-in title scene")?,
    };

    let mut root = scene.build().context("building view tree")?;
    // GameConfig guarantees both extents fit in i32.
    let screen = Rect::from_size(config.screen_width as i32, config.screen_height as i32);
    layout_tree(root.as_mut(), screen).context("laying out scene")?;

    for line in report::describe(root.as_ref()) {
        log::info!("{line}");
    }
    Ok(())
}
