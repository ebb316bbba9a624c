//! Peripheral conveniences.
//!
//! SYSTEM CONTEXT
//! ==============
//! None of these coordinate with the scroll-driven components. Each is a small
//! reaction to one kind of browser event, kept here so the browser layer only
//! has to translate events and forward them.

pub mod cursor;
pub mod form;
pub mod images;
pub mod keyboard;
pub mod page;
pub mod swipe;
