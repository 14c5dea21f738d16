use super::tween::{Ease, Timeline, Transform, Tween};
use crate::config::REVEAL_THRESHOLD;

const SCALE_STAGE: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroFrame {
    pub mask: Transform,
    /// Set on exactly one frame: the one that crosses the reveal threshold.
    pub reveal: bool,
}

/// Masked logo timeline: rotate and fade, then scale through the screen.
#[derive(Clone, Debug)]
pub struct IntroSequencer {
    timeline: Timeline,
}

impl Default for IntroSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl IntroSequencer {
    pub fn new() -> Self {
        let rest = Transform::default();
        let timeline = Timeline::new()
            .push(Tween::new(
                rest,
                Transform {
                    rotate_deg: 45.0,
                    opacity: 0.0,
                    ..rest
                },
                1.7,
                Ease::Power4InOut,
            ))
            .push(
                Tween::new(rest, Transform { scale: 12.0, ..rest }, 1.7, Ease::ExpoInOut)
                    .delay(-1.5),
            );
        Self { timeline }
    }

    pub fn step(&mut self, elapsed: f64) -> IntroFrame {
        let mask = self.timeline.sample(Transform::default(), elapsed);
        let mut reveal = false;
        // Killing the timeline latches the reveal.
        if !self.timeline.is_killed()
            && self.timeline.tween_progress(SCALE_STAGE, elapsed) > REVEAL_THRESHOLD
        {
            self.timeline.kill(elapsed);
            reveal = true;
        }
        IntroFrame { mask, reveal }
    }
}
