//! Registration form screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{AppState, MAX_NAME_LEN};
use crate::ui::layout::{render_footer, render_header, render_status_bar, section_block_focused};
use crate::ui::Theme;

/// Render the registration form
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Form
            Constraint::Length(1), // Status bar
            Constraint::Length(2), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], Some("Registration"), theme);

    render_form_body(frame, chunks[1], state, theme);

    render_status_bar(
        frame,
        chunks[2],
        state.status_message.as_deref(),
        state.error_message.as_deref(),
        theme,
    );

    render_footer(
        frame,
        chunks[3],
        &[("Enter", "Submit"), ("F1", "Help"), ("Esc", "Quit")],
        theme,
    );
}

fn render_form_body(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = section_block_focused("New registration", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Hint
        ])
        .split(inner);

    let label = Paragraph::new("Name").style(theme.text_secondary());
    frame.render_widget(label, rows[0]);

    let input = Paragraph::new(format!("{}_", state.form.name)).style(theme.input(true));
    frame.render_widget(input, rows[1]);

    let hint = Paragraph::new(format!(
        "Submitting asks for confirmation before anything is recorded ({} characters max).",
        MAX_NAME_LEN
    ))
    .style(theme.text_muted());
    frame.render_widget(hint, rows[3]);
}
