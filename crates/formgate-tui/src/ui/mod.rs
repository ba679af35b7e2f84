//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
mod theme;

pub use theme::Theme;

use ratatui::prelude::*;

use crate::app::{AppState, Screen};

/// Main render function - delegates to appropriate screen
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme) {
    match state.current_screen {
        Screen::Form => screens::form::render(frame, state, theme),
        Screen::Help => screens::help::render(frame, state, theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::ConfirmDialog;
    use formgate_core::PromptSpec;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_form_screen_renders_input_and_hints() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = AppState::new();
        state.form.name = "alice".to_string();
        let theme = Theme::default();

        terminal.draw(|frame| render(frame, &state, &theme)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("FORMGATE"));
        assert!(text.contains("alice_"));
        assert!(text.contains("[Enter] Submit"));
    }

    #[test]
    fn test_form_screen_shows_error_message() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = AppState::new();
        state.error_message = Some("Enter a name before submitting".to_string());
        let theme = Theme::default();

        terminal.draw(|frame| render(frame, &state, &theme)).unwrap();

        assert!(buffer_text(&terminal).contains("Enter a name before submitting"));
    }

    #[test]
    fn test_help_screen_renders() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = AppState::new();
        state.current_screen = Screen::Help;
        let theme = Theme::default();

        terminal.draw(|frame| render(frame, &state, &theme)).unwrap();

        assert!(buffer_text(&terminal).contains("Confirmation dialog:"));
    }

    #[test]
    fn test_confirm_dialog_renders_over_form() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = AppState::new();
        let theme = Theme::default();
        let prompt = PromptSpec::registration();
        let dialog = ConfirmDialog::new(&prompt);

        terminal
            .draw(|frame| {
                render(frame, &state, &theme);
                dialog.render(frame, frame.area(), &theme);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Confirm registration"));
        assert!(text.contains("[Y] Yes"));
    }
}
