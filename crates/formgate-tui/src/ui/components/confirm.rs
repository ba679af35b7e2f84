//! Confirmation dialog component

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use formgate_core::PromptSpec;

use crate::ui::{layout::centered_rect, Theme};

/// Centered yes/no dialog drawn over the current screen
pub struct ConfirmDialog<'a> {
    title: &'a str,
    message: &'a str,
}

impl<'a> ConfirmDialog<'a> {
    /// Create a dialog presenting the given prompt
    pub fn new(prompt: &PromptSpec<'a>) -> Self {
        Self {
            title: prompt.title,
            message: prompt.message,
        }
    }

    /// Render the dialog
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(60, 40, area);

        // Clear the background
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(theme.title())
            .borders(Borders::ALL)
            .border_style(theme.border_focused());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(3),    // Message
                Constraint::Length(1), // Help text
            ])
            .split(inner);

        let message_widget = Paragraph::new(self.message)
            .style(theme.text())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(message_widget, chunks[0]);

        let help_widget = Paragraph::new("[Y] Yes    [N] No    [Esc] Cancel")
            .style(theme.text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(help_widget, chunks[1]);
    }
}
