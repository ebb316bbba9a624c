//! Animated numeric counters.
//!
//! Each `[data-count]` node counts up from zero to its target once it is half
//! visible. Values interpolate linearly over [`COUNTER_DURATION_MS`] of wall
//! clock time, the display shows the floor of the interpolated value, and the
//! last frame snaps to the exact target.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::binding::{UiBinding, UiNode};
use crate::consts::{COUNTER_DURATION_MS, COUNTER_THRESHOLD};
use crate::trigger::VisibilityOptions;

/// Attribute carrying a counter's target value.
pub const COUNT_ATTR: &str = "data-count";

/// Lifecycle of a one-shot animation. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationPhase {
    #[default]
    Pending,
    Animating,
    Done,
}

/// Interpolation state for a single counter.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    phase: AnimationPhase,
    started_at_ms: f64,
    shown: i64,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: i64) -> Self {
        Self { target, phase: AnimationPhase::Pending, started_at_ms: 0.0, shown: 0 }
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Last value produced by [`Self::tick`].
    #[must_use]
    pub fn shown(&self) -> i64 {
        self.shown
    }

    /// Begin animating. Returns `false` unless the animation was pending.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.phase != AnimationPhase::Pending {
            return false;
        }
        self.phase = AnimationPhase::Animating;
        self.started_at_ms = now_ms;
        true
    }

    /// Value to display `elapsed_ms` after the start.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        if self.target <= 0 || elapsed_ms >= COUNTER_DURATION_MS {
            return self.target;
        }
        let progress = elapsed_ms.max(0.0) / COUNTER_DURATION_MS;
        ((self.target as f64) * progress).floor() as i64
    }

    /// Advance to `now_ms`, returning the value to display.
    ///
    /// Returns `None` when the animation is not running. The displayed value
    /// never decreases, and the call that reaches the target finishes the
    /// animation.
    pub fn tick(&mut self, now_ms: f64) -> Option<i64> {
        if self.phase != AnimationPhase::Animating {
            return None;
        }
        let value = self.value_at(now_ms - self.started_at_ms);
        if value >= self.target {
            self.shown = self.target;
            self.phase = AnimationPhase::Done;
        } else {
            self.shown = self.shown.max(value);
        }
        Some(self.shown)
    }
}

/// Parse a target the way the markup writes it: leading integer digits,
/// optional sign, trailing text ignored.
#[must_use]
pub fn parse_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    Some(sign * value)
}

#[derive(Clone, Debug)]
struct Counter<N> {
    node: N,
    animation: CounterAnimation,
}

/// All counters on the page.
#[derive(Clone, Debug)]
pub struct CounterAnimator<N> {
    counters: Vec<Counter<N>>,
}

impl<N: UiNode> CounterAnimator<N> {
    /// Collect every node carrying a parseable [`COUNT_ATTR`].
    pub fn from_binding<B: UiBinding<Node = N>>(binding: &B) -> Self {
        let counters = binding
            .query_all(&format!("[{COUNT_ATTR}]"))
            .into_iter()
            .filter_map(|node| {
                let raw = node.attr(COUNT_ATTR)?;
                let Some(target) = parse_target(&raw) else {
                    log::debug!("skipping counter with target {raw:?}");
                    return None;
                };
                Some(Counter { node, animation: CounterAnimation::new(target) })
            })
            .collect();
        Self { counters }
    }

    #[must_use]
    pub fn options() -> VisibilityOptions {
        VisibilityOptions::once(COUNTER_THRESHOLD)
    }

    /// Nodes to hand to the visibility trigger.
    #[must_use]
    pub fn nodes(&self) -> Vec<N> {
        self.counters.iter().map(|c| c.node.clone()).collect()
    }

    #[must_use]
    pub fn phase(&self, node: &N) -> Option<AnimationPhase> {
        self.counters.iter().find(|c| c.node == *node).map(|c| c.animation.phase())
    }

    /// Start the counter for `node` and render its first frame.
    ///
    /// Returns `true` if more frames are needed.
    pub fn start(&mut self, node: &N, now_ms: f64) -> bool {
        let Some(counter) = self.counters.iter_mut().find(|c| c.node == *node) else {
            return self.is_running();
        };
        if counter.animation.start(now_ms) {
            if let Some(value) = counter.animation.tick(now_ms) {
                counter.node.set_text(&value.to_string());
            }
        }
        self.is_running()
    }

    /// Render one frame for every running counter.
    ///
    /// Returns `true` if another frame should be requested.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        for counter in &mut self.counters {
            if let Some(value) = counter.animation.tick(now_ms) {
                counter.node.set_text(&value.to_string());
            }
        }
        self.is_running()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.counters.iter().any(|c| c.animation.phase() == AnimationPhase::Animating)
    }
}
