//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::{App, Focus};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let status_text = match app.focus {
            Focus::None => "h: health • i: info • t/p: edit forms • ?: help • q: quit".to_string(),
            Focus::TextInput | Focus::PasswordInput => {
                "Enter: submit • Tab: switch form • Esc: back".to_string()
            }
        };

        let status_color = if app.error_message.is_some() {
            Color::Red
        } else if app.is_loading() {
            Color::Yellow
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
