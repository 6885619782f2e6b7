//! Help panel overlay

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help overlay
    pub fn render(f: &mut Frame, _app: &App) {
        let area = LayoutManager::centered_rect(60, 60, f.area());

        let help_text = "\
 h          Check /health
 i          Get /info
 t          Edit the text to analyze
 p          Edit the password to analyze
 Enter      Submit the focused form
 Tab        Switch between forms
 Esc        Leave a form / dismiss the error line
 ?          Toggle this help
 q, Ctrl-C  Quit";

        let panel = Paragraph::new(help_text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help "),
        );

        f.render_widget(Clear, area);
        f.render_widget(panel, area);
    }
}
