//! System pane: health and info triggers with their raw results

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;
use super::pretty_json;
use crate::api::Endpoint;

/// System pane component
pub struct SystemPanel;

impl SystemPanel {
    /// Render the health and info blocks
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let chunks = LayoutManager::system_layout(area);

        Self::render_result_block(
            f,
            chunks[0],
            app,
            Endpoint::Health,
            " /health [h] ",
            app.health_result.as_ref().map(pretty_json),
        );
        Self::render_result_block(
            f,
            chunks[1],
            app,
            Endpoint::Info,
            " /info [i] ",
            app.info_result.as_ref().map(pretty_json),
        );
    }

    fn render_result_block(
        f: &mut Frame,
        area: Rect,
        app: &App,
        endpoint: Endpoint,
        title: &str,
        result: Option<String>,
    ) {
        let border_style = if app.pending.contains(&endpoint) {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let text = match result {
            Some(json) => json,
            None if app.pending.contains(&endpoint) => "…".to_string(),
            None => "No result yet".to_string(),
        };

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(title.to_string()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, area);
    }
}
