//! Minimal tween/timeline engine for the page's CSS transforms.
//!
//! Times are in seconds. A tween's `delay` may be negative, in which case the
//! tween begins already advanced by that amount.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    #[cfg(test)]
    Linear,
    Power1Out,
    Power4InOut,
    ExpoInOut,
}

impl Ease {
    pub fn apply(self, progress: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            #[cfg(test)]
            Self::Linear => t,
            Self::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Self::Power4InOut => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
                }
            }
            Self::ExpoInOut => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
        }
    }
}

/// Animated properties of one visual layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub rotate_deg: f64,
    pub x_percent: f64,
    pub opacity: f64,
    /// `None` leaves the font size to the stylesheet.
    pub font_size_em: Option<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotate_deg: 0.0,
            x_percent: 0.0,
            opacity: 1.0,
            font_size_em: None,
        }
    }
}

impl Transform {
    pub fn scaled(scale: f64, rotate_deg: f64) -> Self {
        Self {
            scale,
            rotate_deg,
            ..Default::default()
        }
    }

    pub fn lerp(&self, to: &Transform, t: f64) -> Transform {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Transform {
            scale: mix(self.scale, to.scale),
            rotate_deg: mix(self.rotate_deg, to.rotate_deg),
            x_percent: mix(self.x_percent, to.x_percent),
            opacity: mix(self.opacity, to.opacity),
            font_size_em: match (self.font_size_em, to.font_size_em) {
                (Some(a), Some(b)) => Some(mix(a, b)),
                (a, b) => b.or(a),
            },
        }
    }

    pub fn with_x(mut self, x_percent: f64) -> Self {
        self.x_percent = x_percent;
        self
    }

    /// Inline style fragment; the caller prepends layout-specific rules.
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "transform:translateX({:.3}%) rotate({:.3}deg) scale({:.4}); opacity:{:.3};",
            self.x_percent, self.rotate_deg, self.scale, self.opacity
        );
        if let Some(em) = self.font_size_em {
            css.push_str(&format!(" font-size:{:.3}em;", em));
        }
        css
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub from: Transform,
    pub to: Transform,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: Transform, to: Transform, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            delay: 0.0,
            ease,
        }
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Linear progress in `[0, 1]` at `elapsed` seconds since the tween was scheduled.
    pub fn progress(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.delay;
        if self.duration <= f64::EPSILON {
            return if local >= 0.0 { 1.0 } else { 0.0 };
        }
        (local / self.duration).clamp(0.0, 1.0)
    }

    pub fn sample(&self, elapsed: f64) -> Transform {
        let eased = self.ease.apply(self.progress(elapsed));
        self.from.lerp(&self.to, eased)
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        self.progress(elapsed) >= 1.0
    }
}

/// Tweens on a single target, each positioned after the previous one's end.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    entries: Vec<(f64, Tween)>,
    end: f64,
    killed_at: Option<f64>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `tween` at the current end plus its own delay.
    pub fn push(mut self, tween: Tween) -> Self {
        let start = (self.end + tween.delay).max(0.0);
        let finish = start + tween.duration;
        self.end = self.end.max(finish);
        self.entries.push((start, tween));
        self
    }

    fn clamp_time(&self, elapsed: f64) -> f64 {
        match self.killed_at {
            Some(k) => elapsed.min(k),
            None => elapsed,
        }
    }

    /// Own progress of the tween at `index`, independent of the timeline's.
    pub fn tween_progress(&self, index: usize, elapsed: f64) -> f64 {
        let t = self.clamp_time(elapsed);
        self.entries
            .get(index)
            .map(|(start, tw)| {
                if tw.duration <= f64::EPSILON {
                    if t >= *start { 1.0 } else { 0.0 }
                } else {
                    ((t - start) / tw.duration).clamp(0.0, 1.0)
                }
            })
            .unwrap_or(0.0)
    }

    /// Composite value: each started tween overrides the properties it animates
    /// in order, so later tweens win for overlapping ranges.
    pub fn sample(&self, base: Transform, elapsed: f64) -> Transform {
        let t = self.clamp_time(elapsed);
        let mut out = base;
        for (i, (start, tw)) in self.entries.iter().enumerate() {
            if t < *start && i > 0 {
                continue;
            }
            let eased = tw.ease.apply(self.tween_progress(i, t));
            let value = tw.from.lerp(&tw.to, eased);
            overlay_changed(&mut out, tw, &value);
        }
        out
    }

    pub fn kill(&mut self, elapsed: f64) {
        if self.killed_at.is_none() {
            self.killed_at = Some(elapsed);
        }
    }

    pub fn is_killed(&self) -> bool {
        self.killed_at.is_some()
    }
}

// Copy only the properties `tw` actually animates onto `out`.
fn overlay_changed(out: &mut Transform, tw: &Tween, value: &Transform) {
    if tw.from.scale != tw.to.scale {
        out.scale = value.scale;
    }
    if tw.from.rotate_deg != tw.to.rotate_deg {
        out.rotate_deg = value.rotate_deg;
    }
    if tw.from.x_percent != tw.to.x_percent {
        out.x_percent = value.x_percent;
    }
    if tw.from.opacity != tw.to.opacity {
        out.opacity = value.opacity;
    }
    if tw.from.font_size_em != tw.to.font_size_em {
        out.font_size_em = value.font_size_em;
    }
}

/// Single retargetable value, used to ease a layer towards the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalarTween {
    from: f64,
    to: f64,
    started_at: f64,
    duration: f64,
    ease: Ease,
}

impl ScalarTween {
    pub fn at_rest(value: f64, duration: f64, ease: Ease) -> Self {
        Self {
            from: value,
            to: value,
            started_at: 0.0,
            duration,
            ease,
        }
    }

    pub fn value(&self, now: f64) -> f64 {
        if self.duration <= f64::EPSILON {
            return self.to;
        }
        let p = ((now - self.started_at) / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.ease.apply(p)
    }

    /// Starts a new tween from the current value towards `target`.
    pub fn retarget(&mut self, target: f64, now: f64) {
        self.from = self.value(now);
        self.to = target;
        self.started_at = now;
    }

    pub fn is_settled(&self, now: f64) -> bool {
        now - self.started_at >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn eases_hit_endpoints() {
        for ease in [Ease::Linear, Ease::Power1Out, Ease::Power4InOut, Ease::ExpoInOut] {
            assert!(close(ease.apply(0.0), 0.0), "{:?} at 0", ease);
            assert!(close(ease.apply(1.0), 1.0), "{:?} at 1", ease);
            assert!(close(ease.apply(-3.0), 0.0));
            assert!(close(ease.apply(7.0), 1.0));
        }
    }

    #[test]
    fn in_out_eases_are_symmetric_at_midpoint() {
        assert!(close(Ease::Power4InOut.apply(0.5), 0.5));
        assert!(close(Ease::ExpoInOut.apply(0.5), 0.5));
        assert!(Ease::ExpoInOut.apply(0.1) < 0.01);
        assert!(Ease::Power1Out.apply(0.5) > 0.5);
    }

    #[test]
    fn negative_delay_starts_tween_advanced() {
        let tw = Tween::new(Transform::scaled(2.0, -30.0), Transform::default(), 2.0, Ease::Linear)
            .delay(-1.0);
        assert!(close(tw.progress(0.0), 0.5));
        assert!(close(tw.sample(0.0).scale, 1.5));
        assert!(tw.is_finished(1.0));
        assert!(!tw.is_finished(0.99));
    }

    #[test]
    fn positive_delay_holds_from_value() {
        let tw = Tween::new(Transform::scaled(2.0, 0.0), Transform::default(), 1.0, Ease::Linear)
            .delay(0.5);
        assert!(close(tw.sample(0.25).scale, 2.0));
        assert!(close(tw.sample(1.0).scale, 1.5));
    }

    #[test]
    fn timeline_overlaps_with_negative_delay() {
        let base = Transform::default();
        let tl = Timeline::new()
            .push(Tween::new(base, Transform { rotate_deg: 45.0, opacity: 0.0, ..base }, 1.7, Ease::Linear))
            .push(Tween::new(base, Transform { scale: 12.0, ..base }, 1.7, Ease::Linear).delay(-1.5));
        assert!(close(tl.entries[1].0, 0.2));
        assert!(close(tl.end, 1.9));
        assert!(close(tl.tween_progress(1, 0.2 + 0.85), 0.5));
        assert!(close(tl.tween_progress(1, 1.9), 1.0));
    }

    #[test]
    fn timeline_sample_combines_properties() {
        let base = Transform::default();
        let tl = Timeline::new()
            .push(Tween::new(base, Transform { rotate_deg: 40.0, ..base }, 1.0, Ease::Linear))
            .push(Tween::new(base, Transform { scale: 3.0, ..base }, 1.0, Ease::Linear).delay(-0.5));
        let v = tl.sample(base, 1.0);
        assert!(close(v.rotate_deg, 40.0));
        assert!(close(v.scale, 2.0));
        // second stage not started yet
        let early = tl.sample(base, 0.25);
        assert!(close(early.scale, 1.0));
        assert!(close(early.rotate_deg, 10.0));
    }

    #[test]
    fn killed_timeline_freezes() {
        let base = Transform::default();
        let mut tl = Timeline::new().push(Tween::new(base, Transform { scale: 2.0, ..base }, 1.0, Ease::Linear));
        tl.kill(0.5);
        tl.kill(0.9);
        assert!(tl.is_killed());
        assert!(close(tl.sample(base, 1.0).scale, 1.5));
        assert!(close(tl.tween_progress(0, 5.0), 0.5));
    }

    #[test]
    fn scalar_tween_retargets_from_current_value() {
        let mut s = ScalarTween::at_rest(0.0, 1.0, Ease::Linear);
        s.retarget(10.0, 0.0);
        assert!(close(s.value(0.5), 5.0));
        s.retarget(0.0, 0.5);
        assert!(close(s.value(0.5), 5.0));
        assert!(close(s.value(1.5), 0.0));
        assert!(s.is_settled(1.5));
    }

    #[test]
    fn css_includes_font_size_only_when_set() {
        let t = Transform::scaled(1.5, -10.0);
        assert!(!t.to_css().contains("font-size"));
        let t = Transform { font_size_em: Some(9.0), ..t };
        assert!(t.to_css().contains("font-size:9.000em"));
        assert!(t.to_css().contains("rotate(-10.000deg)"));
    }
}
