//! Text dump of a laid-out view tree.

use danmaku_ui::View;
use danmaku_ui::view::walk;

/// One line per view, indented by depth, with the view's rectangle in the
/// root's coordinate space and its size.
pub fn describe(root: &dyn View) -> Vec<String> {
    let mut lines = Vec::new();
    walk(root, &mut |depth, view, abs| {
        lines.push(format!(
            "{:indent$}{} {} {}x{}",
            "",
            view.name(),
            abs,
            abs.width(),
            abs.height(),
            indent = depth * 2,
        ));
    });
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use danmaku_types::Rect;
    use danmaku_ui::{Scene, layout_tree};

    #[test]
    fn title_scene_lays_out_on_default_screen() {
        let scene = Scene::from_toml(crate::TITLE_SCENE).unwrap();
        let mut root = scene.build().unwrap();
        layout_tree(root.as_mut(), Rect::from_size(480, 640)).unwrap();

        let lines = describe(root.as_ref());
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "title (0,0)-(480,640) 480x640");
        // Column space-around: used 280, remaining 360, spacing 120, lead 60.
        assert_eq!(lines[1], "  logo (80,60)-(400,156) 320x96");
        assert_eq!(lines[2], "  menu (120,276)-(360,436) 240x160");
        assert_eq!(lines[3], "    start (160,276)-(320,308) 160x32");
        assert_eq!(lines[4], "    options (160,340)-(320,372) 160x32");
        assert_eq!(lines[5], "    quit (160,404)-(320,436) 160x32");
        assert_eq!(lines[6], "  footer (0,556)-(480,580) 480x24");
        assert_eq!(lines[7], "    hint (0,564)-(200,580) 200x16");
        assert_eq!(lines[8], "    version (432,568)-(480,580) 48x12");
    }
}
