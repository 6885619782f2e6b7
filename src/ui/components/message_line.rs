//! Shared message line: the last error, or the loading indicator

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use super::super::app::App;

/// Message line component. Errors take priority over the loading
/// indicator; the line stays until the next trigger or an explicit Esc.
pub struct MessageLine;

impl MessageLine {
    /// Render the message line
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let (text, color) = if let Some(error) = &app.error_message {
            (format!("Error: {error}"), Color::Red)
        } else if app.is_loading() {
            let mut waiting: Vec<&str> = app.pending.iter().map(|e| e.path()).collect();
            waiting.sort_unstable();
            (format!("⏳ Waiting on {}", waiting.join(", ")), Color::Yellow)
        } else {
            (String::new(), Color::Gray)
        };

        let line = Paragraph::new(text).style(Style::default().fg(color));
        f.render_widget(line, area);
    }
}
