//! Typing-text effect.
//!
//! Types each phrase one character at a time, holds it, deletes it back to
//! empty, then moves to the next phrase, wrapping around forever. Each
//! [`Typewriter::step`] returns the text to show and how long to wait before
//! the next step; the host owns the timer and can stop the loop.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::consts::{DELETE_CHAR_DELAY_MS, NEXT_PHRASE_DELAY_MS, PHRASE_HOLD_MS, TYPE_CHAR_DELAY_MS};

/// Position within the phrase cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypingState {
    pub phrase_index: usize,
    /// Characters currently shown.
    pub char_index: usize,
    pub deleting: bool,
}

/// Output of one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    state: TypingState,
    stopped: bool,
}

impl Typewriter {
    #[must_use]
    pub fn new(phrases: &[String]) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.chars().collect()).collect(),
            state: TypingState::default(),
            stopped: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> TypingState {
        self.state
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Advance by one character.
    ///
    /// Returns `None` once stopped, or if there is nothing to type.
    pub fn step(&mut self) -> Option<TypingStep> {
        if self.stopped {
            return None;
        }
        let phrase = self.phrases.get(self.state.phrase_index)?;
        let len = phrase.len();
        let state = &mut self.state;

        let mut delay_ms = if state.deleting {
            state.char_index = state.char_index.saturating_sub(1);
            DELETE_CHAR_DELAY_MS
        } else {
            state.char_index = (state.char_index + 1).min(len);
            TYPE_CHAR_DELAY_MS
        };
        let text: String = phrase[..state.char_index].iter().collect();

        if !state.deleting && state.char_index == len {
            state.deleting = true;
            delay_ms = PHRASE_HOLD_MS;
        } else if state.deleting && state.char_index == 0 {
            state.deleting = false;
            state.phrase_index = (state.phrase_index + 1) % self.phrases.len();
            delay_ms = NEXT_PHRASE_DELAY_MS;
        }

        Some(TypingStep { text, delay_ms })
    }
}
