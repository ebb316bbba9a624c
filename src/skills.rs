//! Staggered skill-bar fills.
//!
//! The whole skills section acts as one trigger. When it becomes 30% visible
//! every `.skill-progress` bar is scheduled to grow to its `data-progress`
//! width, each bar [`SKILL_STAGGER_MS`] after the previous one. The width
//! change itself is animated by CSS.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use crate::binding::{UiBinding, UiNode};
use crate::consts::{SKILL_STAGGER_MS, SKILLS_THRESHOLD};
use crate::counter::AnimationPhase;
use crate::trigger::VisibilityOptions;

pub const SKILL_BAR_SELECTOR: &str = ".skill-progress";
pub const PROGRESS_ATTR: &str = "data-progress";

/// One scheduled width change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggeredFill {
    pub index: usize,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
struct SkillBar<N> {
    node: N,
    percent: f64,
    filled: bool,
}

/// Parse a progress percentage, clamped to `0..=100`. Missing or invalid
/// values fill to zero.
#[must_use]
pub fn parse_percent(raw: Option<&str>) -> f64 {
    raw.and_then(|r| r.trim().trim_end_matches('%').parse::<f64>().ok())
        .filter(|p| p.is_finite())
        .map_or(0.0, |p| p.clamp(0.0, 100.0))
}

/// Delay before bar `index` starts filling.
#[must_use]
pub fn stagger_delay(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(SKILL_STAGGER_MS)
}

#[derive(Clone, Debug)]
pub struct SkillBars<N> {
    section: Option<N>,
    bars: Vec<SkillBar<N>>,
    phase: AnimationPhase,
}

impl<N: UiNode> SkillBars<N> {
    pub fn from_binding<B: UiBinding<Node = N>>(binding: &B) -> Self {
        let bars = binding
            .query_all(SKILL_BAR_SELECTOR)
            .into_iter()
            .map(|node| {
                let percent = parse_percent(node.attr(PROGRESS_ATTR).as_deref());
                SkillBar { node, percent, filled: false }
            })
            .collect();
        Self { section: binding.skills_section(), bars, phase: AnimationPhase::Pending }
    }

    #[must_use]
    pub fn options() -> VisibilityOptions {
        VisibilityOptions::once(SKILLS_THRESHOLD)
    }

    /// The container observed for visibility, if present.
    #[must_use]
    pub fn section(&self) -> Option<&N> {
        self.section.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Plan the staggered fills. Only the first call yields anything.
    pub fn trigger(&mut self) -> Vec<StaggeredFill> {
        if self.phase != AnimationPhase::Pending {
            return Vec::new();
        }
        if self.bars.is_empty() {
            self.phase = AnimationPhase::Done;
            return Vec::new();
        }
        self.phase = AnimationPhase::Animating;
        (0..self.bars.len())
            .map(|index| StaggeredFill { index, delay_ms: stagger_delay(index) })
            .collect()
    }

    /// Apply the target width to bar `index`.
    pub fn fill(&mut self, index: usize) {
        if self.phase != AnimationPhase::Animating {
            return;
        }
        let Some(bar) = self.bars.get_mut(index) else {
            return;
        };
        if !bar.filled {
            bar.node.set_style("width", &format!("{}%", bar.percent));
            bar.filled = true;
        }
        if self.bars.iter().all(|b| b.filled) {
            self.phase = AnimationPhase::Done;
        }
    }
}
