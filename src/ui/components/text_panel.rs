//! Text analysis form: input line plus the last result

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::super::app::{App, Focus};
use super::super::layout::LayoutManager;
use super::pretty_json;

/// Text analysis form component
pub struct TextPanel;

impl TextPanel {
    /// Render the input line and result area
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let focused = app.focus == Focus::TextInput;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" /analyze [t] ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = LayoutManager::form_layout(inner);

        let input = if focused {
            format!("{}▏", app.text_input)
        } else {
            app.text_input.clone()
        };
        f.render_widget(
            Paragraph::new(input).style(Style::default().fg(Color::White)),
            chunks[0],
        );

        let result = match &app.text_result {
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
