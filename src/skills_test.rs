use super::*;
use crate::testing::{FakeBinding, FakeNode};

fn setup(progress: &[Option<&str>]) -> (FakeBinding, Vec<FakeNode>) {
    let mut binding = FakeBinding::new();
    binding.slot("skills_section");
    let bars: Vec<FakeNode> = progress
        .iter()
        .map(|p| match p {
            Some(value) => FakeNode::new().with_attr(PROGRESS_ATTR, value),
            None => FakeNode::new(),
        })
        .collect();
    binding.add_all(SKILL_BAR_SELECTOR, bars.clone());
    (binding, bars)
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_percent_accepts_plain_and_suffixed() {
    assert_eq!(parse_percent(Some("90")), 90.0);
    assert_eq!(parse_percent(Some(" 75% ")), 75.0);
    assert_eq!(parse_percent(Some("42.5")), 42.5);
}

#[test]
fn parse_percent_clamps_and_defaults() {
    assert_eq!(parse_percent(Some("140")), 100.0);
    assert_eq!(parse_percent(Some("-3")), 0.0);
    assert_eq!(parse_percent(Some("lots")), 0.0);
    assert_eq!(parse_percent(Some("NaN")), 0.0);
    assert_eq!(parse_percent(None), 0.0);
}

#[test]
fn stagger_is_index_times_step() {
    assert_eq!(stagger_delay(0), 0);
    assert_eq!(stagger_delay(1), 100);
    assert_eq!(stagger_delay(7), 700);
}

// =============================================================
// Trigger
// =============================================================

#[test]
fn trigger_plans_one_fill_per_bar_in_order() {
    let (binding, _) = setup(&[Some("90"), Some("80"), Some("70")]);
    let mut skills = SkillBars::from_binding(&binding);
    assert!(skills.section().is_some());

    let plan = skills.trigger();
    assert_eq!(
        plan,
        vec![
            StaggeredFill { index: 0, delay_ms: 0 },
            StaggeredFill { index: 1, delay_ms: 100 },
            StaggeredFill { index: 2, delay_ms: 200 },
        ]
    );
    assert_eq!(skills.phase(), AnimationPhase::Animating);
}

#[test]
fn trigger_is_one_shot() {
    let (binding, _) = setup(&[Some("50")]);
    let mut skills = SkillBars::from_binding(&binding);
    assert_eq!(skills.trigger().len(), 1);
    assert!(skills.trigger().is_empty());
    skills.fill(0);
    assert!(skills.trigger().is_empty());
}

#[test]
fn trigger_without_bars_finishes() {
    let (binding, _) = setup(&[]);
    let mut skills = SkillBars::from_binding(&binding);
    assert!(skills.trigger().is_empty());
    assert_eq!(skills.phase(), AnimationPhase::Done);
}

#[test]
fn missing_section_is_reported() {
    let skills = SkillBars::<FakeNode>::from_binding(&FakeBinding::new());
    assert!(skills.section().is_none());
    assert!(skills.is_empty());
}

// =============================================================
// Fill
// =============================================================

#[test]
fn every_bar_reaches_its_width() {
    let (binding, bars) = setup(&[Some("90"), None, Some("65.5")]);
    let mut skills = SkillBars::from_binding(&binding);
    for step in skills.trigger() {
        skills.fill(step.index);
    }
    assert_eq!(bars[0].style("width").as_deref(), Some("90%"));
    assert_eq!(bars[1].style("width").as_deref(), Some("0%"));
    assert_eq!(bars[2].style("width").as_deref(), Some("65.5%"));
    assert_eq!(skills.phase(), AnimationPhase::Done);
}

#[test]
fn phase_stays_animating_until_last_fill() {
    let (binding, _) = setup(&[Some("10"), Some("20")]);
    let mut skills = SkillBars::from_binding(&binding);
    skills.trigger();
    skills.fill(1);
    assert_eq!(skills.phase(), AnimationPhase::Animating);
    skills.fill(0);
    assert_eq!(skills.phase(), AnimationPhase::Done);
}

#[test]
fn out_of_range_fill_is_ignored() {
    let (binding, _) = setup(&[Some("10")]);
    let mut skills = SkillBars::from_binding(&binding);
    skills.trigger();
    skills.fill(5);
    assert_eq!(skills.phase(), AnimationPhase::Animating);
}
