//! Transition descriptors for entrance animations.
//!
//! A [`Transition`] names where an element starts, where it rests, and how
//! long the move takes. Components render it as inline CSS: the starting
//! state until they are activated, then the resting state together with a
//! CSS `transition` so the browser tweens between the two. [`Transition::sample`]
//! gives the same timeline in Rust.

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl VisualState {
    pub const RESTING: Self = Self {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    pub const fn transparent() -> Self {
        Self { opacity: 0.0, ..Self::RESTING }
    }

    /// Transparent and pushed down by `offset` px.
    pub const fn below(offset: f64) -> Self {
        Self { opacity: 0.0, offset_y: offset, ..Self::RESTING }
    }

    /// Transparent and pulled up by `offset` px.
    pub const fn above(offset: f64) -> Self {
        Self { opacity: 0.0, offset_y: -offset, ..Self::RESTING }
    }

    /// Transparent and pulled left by `offset` px.
    pub const fn left_of(offset: f64) -> Self {
        Self { opacity: 0.0, offset_x: -offset, ..Self::RESTING }
    }

    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            opacity: mix(self.opacity, to.opacity),
            offset_x: mix(self.offset_x, to.offset_x),
            offset_y: mix(self.offset_y, to.offset_y),
            scale: mix(self.scale, to.scale),
        }
    }

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.offset_x, self.offset_y, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }

    /// Maps linear progress in `0..=1` onto the eased curve.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: VisualState,
    pub to: VisualState,
    /// Seconds.
    pub duration: f64,
    /// Seconds between activation and the start of the move.
    pub delay: f64,
    pub easing: Easing,
}

impl Transition {
    pub fn new(from: VisualState, to: VisualState) -> Self {
        Self {
            from,
            to,
            duration: config::REVEAL_DURATION,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }

    pub fn with_duration(mut self, secs: f64) -> Self {
        self.duration = secs.max(0.0);
        self
    }

    pub fn with_delay(mut self, secs: f64) -> Self {
        self.delay = secs.max(0.0);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn starts_at(&self) -> f64 {
        self.delay
    }

    pub fn ends_at(&self) -> f64 {
        self.delay + self.duration
    }

    /// Visual state `elapsed` seconds after activation.
    pub fn sample(&self, elapsed: f64) -> VisualState {
        if elapsed <= self.starts_at() {
            return self.from;
        }
        if self.duration <= 0.0 || elapsed >= self.ends_at() {
            return self.to;
        }
        let progress = (elapsed - self.delay) / self.duration;
        self.from.lerp(&self.to, self.easing.apply(progress))
    }

    pub fn css_transition(&self) -> String {
        let timing = format!(
            "{} {} {}",
            seconds(self.duration),
            self.easing.css(),
            seconds(self.delay)
        );
        format!("opacity {timing}, transform {timing}")
    }

    /// Inline style for an element that is either still waiting or has been
    /// activated.
    pub fn style(&self, active: bool) -> String {
        let state = if active { self.to } else { self.from };
        format!("{} transition: {};", state.css(), self.css_transition())
    }
}

// Rounded to the millisecond so staggered delays like 0.1 * 3 + 0.3 print cleanly.
fn seconds(value: f64) -> String {
    format!("{}s", (value * 1000.0).round() / 1000.0)
}
