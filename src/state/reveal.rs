use super::parallax::{ParallaxOffsets, ParallaxRig};
use super::tween::{Ease, Transform, Tween};

/// Layers animated by the reveal pass and, partly, by parallax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Main,
    Sky,
    Background,
    Character,
    Title,
}

impl Layer {
    pub const ALL: [Layer; 5] = [
        Layer::Main,
        Layer::Sky,
        Layer::Background,
        Layer::Character,
        Layer::Title,
    ];

    /// Pose the layer is rendered with before the reveal pass starts.
    pub fn initial_pose(self) -> Transform {
        match self {
            Layer::Main => Transform::scaled(2.0, -30.0),
            Layer::Sky => Transform::scaled(3.5, -60.0),
            Layer::Background => Transform::scaled(2.0, -10.0),
            Layer::Character => Transform::scaled(1.9, -21.0),
            Layer::Title => Transform {
                font_size_em: Some(9.0),
                ..Transform::scaled(1.0, -26.0)
            },
        }
    }
}

/// Independent, staggered tweens that settle every layer into place.
#[derive(Clone, Debug)]
pub struct RevealAnimation {
    tweens: Vec<(Layer, Tween)>,
}

impl Default for RevealAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealAnimation {
    pub fn new() -> Self {
        let settle = |layer: Layer, to: Transform, duration: f64, delay: f64| {
            (
                layer,
                Tween::new(layer.initial_pose(), to, duration, Ease::ExpoInOut).delay(delay),
            )
        };
        Self {
            tweens: vec![
                settle(Layer::Main, Transform::scaled(1.0, 0.0), 2.0, -1.0),
                settle(Layer::Sky, Transform::scaled(2.5, 0.0), 1.0, -0.8),
                settle(Layer::Background, Transform::scaled(1.2, 0.0), 2.0, -0.9),
                settle(Layer::Character, Transform::scaled(0.85, 0.0), 1.0, 0.0),
                settle(
                    Layer::Title,
                    Transform {
                        font_size_em: Some(9.0),
                        ..Transform::scaled(1.0, 0.0)
                    },
                    1.0,
                    0.0,
                ),
            ],
        }
    }

    pub fn pose(&self, layer: Layer, elapsed: f64) -> Transform {
        self.tweens
            .iter()
            .find(|(l, _)| *l == layer)
            .map(|(_, tw)| tw.sample(elapsed))
            .unwrap_or_else(|| layer.initial_pose())
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        self.tweens.iter().all(|(_, tw)| tw.is_finished(elapsed))
    }
}

/// Poses for one frame and whether anything is still in motion.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneFrame {
    pub poses: Vec<(Layer, Transform)>,
    pub keep_running: bool,
}

/// Reveal pass plus pointer parallax, composed per layer.
#[derive(Clone, Debug, Default)]
pub struct RevealScene {
    reveal: RevealAnimation,
    rig: ParallaxRig,
}

impl RevealScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aim(&mut self, target: ParallaxOffsets, elapsed: f64) {
        self.rig.aim(target, elapsed);
    }

    /// The frame that observes everything at rest still carries final poses
    /// but asks the loop to stop; the next `aim` needs a fresh loop.
    pub fn frame(&self, elapsed: f64) -> SceneFrame {
        let offsets = self.rig.offsets(elapsed);
        let poses = Layer::ALL
            .iter()
            .map(|&layer| {
                let pose = self.reveal.pose(layer, elapsed);
                let pose = match layer {
                    Layer::Title => pose.with_x(offsets.text),
                    Layer::Sky => pose.with_x(offsets.sky),
                    Layer::Background => pose.with_x(offsets.bg),
                    Layer::Main | Layer::Character => pose,
                };
                (layer, pose)
            })
            .collect();
        SceneFrame {
            poses,
            keep_running: !self.reveal.is_finished(elapsed) || !self.rig.is_settled(elapsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_layer_has_a_tween() {
        let anim = RevealAnimation::new();
        for layer in Layer::ALL {
            assert!(anim.tweens.iter().any(|(l, _)| *l == layer));
        }
    }

    #[test]
    fn settles_to_resting_pose() {
        let anim = RevealAnimation::new();
        // background is the slowest: 2s starting 0.9s in
        assert!(!anim.is_finished(1.0));
        assert!(anim.is_finished(1.1));
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(close(anim.pose(Layer::Main, 1.1).scale, 1.0));
        assert!(close(anim.pose(Layer::Sky, 1.1).scale, 2.5));
        assert!(close(anim.pose(Layer::Background, 1.1).scale, 1.2));
        assert!(close(anim.pose(Layer::Character, 1.1).scale, 0.85));
        for layer in Layer::ALL {
            assert!(close(anim.pose(layer, 1.1).rotate_deg, 0.0));
        }
        assert_eq!(anim.pose(Layer::Title, 1.1).font_size_em, Some(9.0));
    }

    #[test]
    fn negative_delays_overlap_the_start() {
        let anim = RevealAnimation::new();
        assert!(!anim.is_finished(0.5));
        // main is already halfway through its ease at t=0
        let main = anim.pose(Layer::Main, 0.0);
        assert!((main.scale - 1.5).abs() < 1e-9);
        // character has not moved yet
        assert_eq!(anim.pose(Layer::Character, 0.0), Layer::Character.initial_pose());
    }

    #[test]
    fn scene_idles_once_settled_and_wakes_on_aim() {
        let mut scene = RevealScene::new();
        assert!(scene.frame(0.0).keep_running);
        let last = scene.frame(1.1);
        assert!(!last.keep_running);
        assert_eq!(last.poses.len(), Layer::ALL.len());

        let target = ParallaxOffsets::for_pointer(1000.0, 1000.0);
        scene.aim(target, 5.0);
        let moving = scene.frame(5.25);
        assert!(moving.keep_running);
        let settled = scene.frame(5.5);
        assert!(!settled.keep_running);
        let pose = |frame: &SceneFrame, layer: Layer| {
            frame.poses.iter().find(|(l, _)| *l == layer).map(|(_, p)| *p)
        };
        assert_eq!(pose(&settled, Layer::Sky).map(|p| p.x_percent), Some(target.sky));
        assert_eq!(pose(&settled, Layer::Background).map(|p| p.x_percent), Some(target.bg));
        assert_eq!(pose(&settled, Layer::Title).map(|p| p.x_percent), Some(target.text));
        // main and character never follow the pointer
        assert_eq!(pose(&settled, Layer::Main).map(|p| p.x_percent), Some(0.0));
        assert_eq!(pose(&settled, Layer::Character).map(|p| p.x_percent), Some(0.0));
    }
}
