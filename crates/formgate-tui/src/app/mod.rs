//! Application state and event handling

mod state;

pub use state::{AppState, FormState, Screen, MAX_NAME_LEN};

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use tracing::{error, info};

use formgate_core::{
    ConfirmationGate, GateConfig, GateError, RegistrationLog, RegistrationRecord, SubmitHandler,
};

use crate::confirm::ModalConfirmer;
use crate::ui::{self, Theme};

/// Submit handler that appends the form's name to the registration log
///
/// Persistence failures are resolved to a `false` result, as the gate's
/// collaborator contract requires; the underlying error is kept so the
/// host can report it after the gate returns.
pub struct RegistrySubmit<'a> {
    registry: &'a RegistrationLog,
    last_error: Option<GateError>,
}

impl<'a> RegistrySubmit<'a> {
    /// Create a handler writing to the given log
    pub fn new(registry: &'a RegistrationLog) -> Self {
        Self {
            registry,
            last_error: None,
        }
    }

    /// Take the error from the last failed submission, if any
    pub fn take_error(&mut self) -> Option<GateError> {
        self.last_error.take()
    }
}

impl SubmitHandler for RegistrySubmit<'_> {
    type Event = KeyEvent;
    type Element = FormState;

    fn submit(&mut self, _event: &KeyEvent, form: &FormState) -> bool {
        match self
            .registry
            .append(RegistrationRecord::new(form.name.clone()))
        {
            Ok(()) => {
                info!("Recorded registration for '{}'", form.name);
                true
            }
            Err(e) => {
                error!("Failed to record registration: {}", e);
                self.last_error = Some(e);
                false
            }
        }
    }
}

/// Main application struct
pub struct App {
    /// Application state
    pub state: AppState,

    /// Visual theme
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    registry: RegistrationLog,
    tick_rate: Duration,
    last_tick: Instant,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application instance from the persisted configuration
    pub fn new() -> Self {
        let config = GateConfig::load();
        Self {
            state: AppState::new(),
            theme: Theme::default(),
            should_quit: false,
            registry: RegistrationLog::new(config.log_path),
            tick_rate: Duration::from_millis(config.tick_rate_ms),
            last_tick: Instant::now(),
        }
    }

    /// Run the application main loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            // Draw UI
            terminal.draw(|frame| ui::render(frame, &self.state, &self.theme))?;

            // Handle events
            let timeout = self
                .tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key.code) {
                        self.submit(terminal, key);
                    }
                }
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Handle a key press, returning whether a submission was requested
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state.current_screen {
            Screen::Form => self.handle_form_key(key),
            Screen::Help => {
                self.handle_help_key(key);
                false
            }
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::F(1) => {
                self.state.current_screen = Screen::Help;
            }
            KeyCode::Enter => {
                return true;
            }
            KeyCode::Backspace => {
                self.state.form.name.pop();
                self.state.clear_messages();
            }
            KeyCode::Char(c) => {
                if self.state.form.name.len() < MAX_NAME_LEN {
                    self.state.form.name.push(c);
                }
                self.state.clear_messages();
            }
            _ => {}
        }
        false
    }

    fn handle_help_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc => {
                self.state.current_screen = Screen::Form;
            }
            _ => {}
        }
    }

    /// Run the form submission behind the confirmation gate
    ///
    /// Opens the modal dialog over the current screen, and on an affirmative
    /// answer appends the registration to the log. The form is reset only
    /// when the gate reports the submission went through.
    fn submit<B: Backend>(&mut self, terminal: &mut Terminal<B>, key: KeyEvent) {
        let name = self.state.form.name.trim();
        if name.is_empty() {
            self.state.error_message = Some("Enter a name before submitting".to_string());
            return;
        }
        let form = FormState {
            name: name.to_string(),
        };

        let mut handler = RegistrySubmit::new(&self.registry);
        let confirmer = ModalConfirmer::new(terminal, &self.state, &self.theme);
        let mut gate = ConfirmationGate::new(confirmer, &mut handler);
        let accepted = gate.confirm_and_maybe_submit(&key, &form);

        if let Some(e) = handler.take_error() {
            self.state.error_message = Some(format!("Failed to record registration: {}", e));
            return;
        }

        if accepted {
            self.state.status_message = Some(format!("Registered '{}'", form.name));
            self.state.form.name.clear();
        } else {
            self.state.status_message = Some("Registration cancelled".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use formgate_core::AutoConfirmer;
    use tempfile::tempdir;

    fn test_app(registry: RegistrationLog) -> App {
        App {
            state: AppState::new(),
            theme: Theme::default(),
            should_quit: false,
            registry,
            tick_rate: Duration::from_millis(100),
            last_tick: Instant::now(),
        }
    }

    fn press(app: &mut App, key: KeyCode) -> bool {
        app.handle_key(key)
    }

    #[test]
    fn test_typing_edits_form_name() {
        let dir = tempdir().unwrap();
        let mut app = test_app(RegistrationLog::new(dir.path().join("registrations.json")));

        for c in "alice".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.state.form.name, "alice");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state.form.name, "alic");
    }

    #[test]
    fn test_name_length_is_capped() {
        let dir = tempdir().unwrap();
        let mut app = test_app(RegistrationLog::new(dir.path().join("registrations.json")));

        for _ in 0..MAX_NAME_LEN + 10 {
            press(&mut app, KeyCode::Char('x'));
        }
        assert_eq!(app.state.form.name.len(), MAX_NAME_LEN);
    }

    #[test]
    fn test_enter_requests_submission() {
        let dir = tempdir().unwrap();
        let mut app = test_app(RegistrationLog::new(dir.path().join("registrations.json")));

        assert!(press(&mut app, KeyCode::Enter));
        assert!(!press(&mut app, KeyCode::Char('a')));
    }

    #[test]
    fn test_escape_quits_from_form() {
        let dir = tempdir().unwrap();
        let mut app = test_app(RegistrationLog::new(dir.path().join("registrations.json")));

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_screen_navigation() {
        let dir = tempdir().unwrap();
        let mut app = test_app(RegistrationLog::new(dir.path().join("registrations.json")));

        press(&mut app, KeyCode::F(1));
        assert_eq!(app.state.current_screen, Screen::Help);

        // Enter on the help screen returns instead of submitting
        assert!(!press(&mut app, KeyCode::Enter));
        assert_eq!(app.state.current_screen, Screen::Form);
    }

    #[test]
    fn test_registry_submit_appends_record() {
        let dir = tempdir().unwrap();
        let registry = RegistrationLog::new(dir.path().join("registrations.json"));
        let mut handler = RegistrySubmit::new(&registry);

        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let form = FormState {
            name: "alice".to_string(),
        };
        let mut gate = ConfirmationGate::new(AutoConfirmer::affirm(), &mut handler);
        assert!(gate.confirm_and_maybe_submit(&key, &form));

        let records = registry.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "alice");
    }

    #[test]
    fn test_registry_submit_resolves_failure_to_false() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();

        let registry = RegistrationLog::new(blocker.join("registrations.json"));
        let mut handler = RegistrySubmit::new(&registry);

        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let form = FormState {
            name: "bob".to_string(),
        };
        let mut gate = ConfirmationGate::new(AutoConfirmer::affirm(), &mut handler);
        assert!(!gate.confirm_and_maybe_submit(&key, &form));
        assert!(handler.take_error().is_some());
    }

    #[test]
    fn test_declined_gate_skips_registry() {
        let dir = tempdir().unwrap();
        let registry = RegistrationLog::new(dir.path().join("registrations.json"));
        let mut handler = RegistrySubmit::new(&registry);

        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let form = FormState {
            name: "carol".to_string(),
        };
        let mut gate = ConfirmationGate::new(AutoConfirmer::decline(), &mut handler);
        assert!(!gate.confirm_and_maybe_submit(&key, &form));
        assert!(registry.load().unwrap().is_empty());
    }
}
