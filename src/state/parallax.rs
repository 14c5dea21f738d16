use super::tween::{Ease, ScalarTween};
use crate::config::{
    PARALLAX_BG_FACTOR, PARALLAX_FOLLOW_SECS, PARALLAX_GAIN, PARALLAX_SKY_FACTOR,
    PARALLAX_TEXT_FACTOR,
};

/// Horizontal offsets, in percent of each layer's width.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxOffsets {
    pub text: f64,
    pub sky: f64,
    pub bg: f64,
}

impl ParallaxOffsets {
    pub fn for_pointer(client_x: f64, viewport_width: f64) -> Self {
        let x = (client_x - viewport_width * 0.5) * PARALLAX_GAIN;
        Self {
            text: x * PARALLAX_TEXT_FACTOR,
            sky: x * PARALLAX_SKY_FACTOR,
            bg: x * PARALLAX_BG_FACTOR,
        }
    }
}

/// Eases the three parallax layers towards the latest pointer offsets.
#[derive(Clone, Debug)]
pub struct ParallaxRig {
    text: ScalarTween,
    sky: ScalarTween,
    bg: ScalarTween,
}

impl Default for ParallaxRig {
    fn default() -> Self {
        let rest = ScalarTween::at_rest(0.0, PARALLAX_FOLLOW_SECS, Ease::Power1Out);
        Self {
            text: rest,
            sky: rest,
            bg: rest,
        }
    }
}

impl ParallaxRig {
    pub fn aim(&mut self, target: ParallaxOffsets, now: f64) {
        self.text.retarget(target.text, now);
        self.sky.retarget(target.sky, now);
        self.bg.retarget(target.bg, now);
    }

    pub fn is_settled(&self, now: f64) -> bool {
        self.text.is_settled(now) && self.sky.is_settled(now) && self.bg.is_settled(now)
    }

    pub fn offsets(&self, now: f64) -> ParallaxOffsets {
        ParallaxOffsets {
            text: self.text.value(now),
            sky: self.sky.value(now),
            bg: self.bg.value(now),
        }
    }
}
