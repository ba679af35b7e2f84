//! Application state

/// Longest name the form accepts
pub const MAX_NAME_LEN: usize = 32;

/// Screens in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Registration form
    Form,
    /// Help screen
    Help,
}

/// The form control a submission acts on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Name entered into the form
    pub name: String,
}

/// Central application state
pub struct AppState {
    /// Currently displayed screen
    pub current_screen: Screen,

    /// The registration form being edited
    pub form: FormState,

    /// Status message shown in the footer
    pub status_message: Option<String>,

    /// Error message shown in the footer, takes precedence over status
    pub error_message: Option<String>,
}

impl AppState {
    /// Create the initial state
    pub fn new() -> Self {
        Self {
            current_screen: Screen::Form,
            form: FormState::default(),
            status_message: None,
            error_message: None,
        }
    }

    /// Clear both footer messages
    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
