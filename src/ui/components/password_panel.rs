//! Password analysis form: masked input line plus the last result

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::super::app::{App, Focus};
use super::super::layout::LayoutManager;
use super::pretty_json;

/// Password analysis form component
pub struct PasswordPanel;

impl PasswordPanel {
    /// Render the masked input line and result area
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let focused = app.focus == Focus::PasswordInput;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" /analyze/password [p] ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = LayoutManager::form_layout(inner);

        // The typed value never reaches the screen
        let masked = "•".repeat(app.password_input.chars().count());
        let input = if focused { format!("{masked}▏") } else { masked };
        f.render_widget(
            Paragraph::new(input).style(Style::default().fg(Color::White)),
            chunks[0],
        );

        let result = match &app.password_result {
            Some(analysis) => pretty_json(analysis),
            None => String::new(),
        };
        f.render_widget(
            Paragraph::new(result)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: false }),
            chunks[1],
        );
    }
}
