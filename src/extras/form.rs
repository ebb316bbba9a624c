//! Contact form validation.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::binding::{UiBinding, UiNode};
use crate::consts::FORM_ERROR_CLEAR_MS;

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// Submitted field values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// Element id of the offending field.
    pub field: &'static str,
    pub message: &'static str,
}

#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_ok_and(|re| re.is_match(email))
}

/// Check every field, in form order. Subject is optional.
#[must_use]
pub fn validate(form: &ContactForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if form.name.trim().is_empty() {
        errors.push(FieldError { field: "name", message: "Please enter your name" });
    }
    if form.email.trim().is_empty() {
        errors.push(FieldError { field: "email", message: "Please enter your email" });
    } else if !validate_email(form.email.trim()) {
        errors.push(FieldError { field: "email", message: "Please enter a valid email address" });
    }
    if form.message.trim().is_empty() {
        errors.push(FieldError { field: "message", message: "Please enter a message" });
    }
    errors
}

/// Show `message` under `field_id` and outline the field.
///
/// Returns the delay after which [`clear_error`] should run, or `None` when
/// either node is missing.
pub fn show_error<B: UiBinding>(binding: &B, field_id: &str, message: &str) -> Option<u32> {
    let error = binding.by_id(&format!("{field_id}-error"))?;
    let field = binding.by_id(field_id)?;
    error.set_text(message);
    field.set_style("border-color", "var(--error-color)");
    Some(FORM_ERROR_CLEAR_MS)
}

pub fn clear_error<B: UiBinding>(binding: &B, field_id: &str) {
    if let Some(error) = binding.by_id(&format!("{field_id}-error")) {
        error.set_text("");
    }
    if let Some(field) = binding.by_id(field_id) {
        field.set_style("border-color", "");
    }
}
