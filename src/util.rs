// DOM helpers shared by the animated components.

use web_sys::Element;
use yew::NodeRef;

use crate::state::Transform;

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Inline style for a layer: its static layout rules followed by the pose.
pub fn pose_style(base: &str, pose: &Transform) -> String {
    format!("{} {}", base, pose.to_css())
}

/// Writes the pose onto the node; detached refs are skipped.
pub fn apply_pose(node: &NodeRef, base: &str, pose: &Transform) {
    if let Some(el) = node.cast::<Element>() {
        let _ = el.set_attribute("style", &pose_style(base, pose));
    }
}
