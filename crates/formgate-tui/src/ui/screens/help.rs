//! Help screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::ui::layout::{render_header, ScreenLayout};
use crate::ui::Theme;

/// Render the help screen
pub fn render(frame: &mut Frame, _state: &AppState, theme: &Theme) {
    let layout = ScreenLayout::new(frame.area());

    render_header(frame, layout.header, Some("Help"), theme);

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  FORMGATE - Confirmation-Gated Registration",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("  Form:", Style::default().fg(Color::Cyan))),
        Line::from("    Type            - Edit the name field"),
        Line::from("    Backspace       - Delete the last character"),
        Line::from("    Enter           - Submit the registration"),
        Line::from("    F1              - Show this help"),
        Line::from("    Esc             - Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Confirmation dialog:",
            Style::default().fg(Color::Cyan),
        )),
        Line::from("    y               - Confirm and record the registration"),
        Line::from("    n or Esc        - Cancel, nothing is recorded"),
        Line::from(""),
        Line::from("    The dialog blocks the rest of the interface until it"),
        Line::from("    is answered. Declining leaves the form as it was."),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(" Help "),
    );

    frame.render_widget(content, layout.content);

    let footer = Paragraph::new(" Press [Enter] or [Esc] to return ")
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));
    frame.render_widget(footer, layout.footer);
}
