//! Fixed thresholds and timings shared across components.

// ── Scroll state ────────────────────────────────────────────────

/// Scroll offset above which the navbar takes its "scrolled" style.
pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 100.0;

/// Scroll offset above which the back-to-top control is shown.
pub const BACK_TO_TOP_AFTER_PX: f64 = 300.0;

/// A section becomes active this many pixels before its top is reached.
pub const SECTION_ACTIVATION_MARGIN_PX: f64 = 200.0;

/// Parallax speed of the first background shape.
pub const PARALLAX_BASE_SPEED: f64 = 0.5;

/// Extra parallax speed added per shape index.
pub const PARALLAX_SPEED_STEP: f64 = 0.1;

/// Rotation in degrees applied per scrolled pixel.
pub const PARALLAX_ROTATION_PER_PX: f64 = 0.1;

// ── Visibility thresholds ───────────────────────────────────────

/// Intersection ratio that starts a counter.
pub const COUNTER_THRESHOLD: f64 = 0.5;

/// Intersection ratio of the skills section that fills the bars.
pub const SKILLS_THRESHOLD: f64 = 0.3;

/// Intersection ratio that reveals a tagged element.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom root margin for reveals; negative shrinks the viewport.
pub const REVEAL_ROOT_MARGIN_BOTTOM_PX: f64 = -50.0;

// ── Animation timings ───────────────────────────────────────────

/// Wall-clock duration of a counter animation.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Nominal animation frame interval.
pub const FRAME_INTERVAL_MS: f64 = 16.0;

/// Delay between consecutive skill bars.
pub const SKILL_STAGGER_MS: u32 = 100;

/// Delay after typing one character.
pub const TYPE_CHAR_DELAY_MS: u32 = 100;

/// Delay after deleting one character.
pub const DELETE_CHAR_DELAY_MS: u32 = 50;

/// Pause once a phrase is fully typed.
pub const PHRASE_HOLD_MS: u32 = 2000;

/// Pause before typing the next phrase.
pub const NEXT_PHRASE_DELAY_MS: u32 = 500;

/// How long the body keeps its theme transition.
pub const THEME_TRANSITION_MS: u32 = 300;

/// How long a form field error stays visible.
pub const FORM_ERROR_CLEAR_MS: u32 = 3000;

/// Delay between window load and the hero reveal.
pub const HERO_REVEAL_DELAY_MS: u32 = 100;

// ── Gestures ────────────────────────────────────────────────────

/// Minimum vertical travel for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
