//! Confirmation prompt descriptions

/// Title of the fixed registration prompt
pub const REGISTRATION_TITLE: &str = "Confirm registration";

/// Message of the fixed registration prompt
pub const REGISTRATION_MESSAGE: &str = "Registration confirmation: do you want to proceed?";

/// Confirmation prompt configuration
///
/// Front-ends render this however their surface requires (modal dialog,
/// inline `[y/N]` question). The text is what the user sees; nothing else
/// about the prompt is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptSpec<'a> {
    /// Prompt title
    pub title: &'a str,
    /// Prompt message
    pub message: &'a str,
}

impl<'a> PromptSpec<'a> {
    /// Create a prompt
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self { title, message }
    }
}

impl PromptSpec<'static> {
    /// The fixed registration prompt shown by the submission gate
    pub fn registration() -> Self {
        Self::new(REGISTRATION_TITLE, REGISTRATION_MESSAGE)
    }
}
