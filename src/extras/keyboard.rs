//! Keyboard shortcuts.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

/// A key press, reduced to what the shortcuts look at.
#[derive(Clone, Copy, Debug)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    /// The event target is the nav toggle button.
    pub on_nav_toggle: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    CloseMenu,
    ToggleMenu,
    ScrollToTop,
    ScrollToBottom,
}

impl KeyAction {
    /// Whether the browser's default handling must be suppressed.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::ScrollToTop | Self::ScrollToBottom)
    }
}

/// Map a key press to the actions it triggers, in order.
#[must_use]
pub fn actions(press: KeyPress<'_>) -> Vec<KeyAction> {
    let mut out = Vec::new();
    match press.key {
        "Escape" => out.push(KeyAction::CloseMenu),
        "Enter" if press.on_nav_toggle => out.push(KeyAction::ToggleMenu),
        "ArrowUp" if press.ctrl => out.push(KeyAction::ScrollToTop),
        "ArrowDown" if press.ctrl => out.push(KeyAction::ScrollToBottom),
        _ => {}
    }
    out
}
