//! Blocking modal confirmation dialog
//!
//! Renders the confirmation dialog over the current screen and blocks on
//! terminal events until the user answers. The surrounding event loop is
//! suspended for the duration, which gives the dialog the same exclusive
//! quality as a native modal prompt.

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tracing::warn;

use formgate_core::{Confirmer, Decision, PromptSpec};

use crate::app::AppState;
use crate::ui::{self, components::ConfirmDialog, Theme};

/// Asks a yes/no question through a centered dialog box
///
/// Only `y` affirms; `n` and `Esc` decline; other keys are ignored and the
/// dialog stays up. Draw and read failures resolve to a decline, so a dead
/// terminal can never produce an unconfirmed submission.
pub struct ModalConfirmer<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a, B: Backend> ModalConfirmer<'a, B> {
    /// Create a confirmer drawing over the given state
    pub fn new(terminal: &'a mut Terminal<B>, state: &'a AppState, theme: &'a Theme) -> Self {
        Self {
            terminal,
            state,
            theme,
        }
    }
}

impl<B: Backend> Confirmer for ModalConfirmer<'_, B> {
    fn ask(&mut self, prompt: &PromptSpec) -> Decision {
        let state = self.state;
        let theme = self.theme;
        let dialog = ConfirmDialog::new(prompt);

        loop {
            let drawn = self.terminal.draw(|frame| {
                ui::render(frame, state, theme);
                dialog.render(frame, frame.area(), theme);
            });
            if let Err(e) = drawn {
                warn!("Failed to draw confirmation dialog: {}", e);
                return Decision::Declined;
            }

            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(decision) = decision_for_key(key.code) {
                        return decision;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("Failed to read confirmation answer: {}", e);
                    return Decision::Declined;
                }
            }
        }
    }
}

/// Map a key press inside the dialog to a decision
fn decision_for_key(key: KeyCode) -> Option<Decision> {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(Decision::Affirmed),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Decision::Declined),
        _ => None,
    }
}
