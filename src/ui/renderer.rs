//! Main UI rendering and coordination

use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::Duration;

use super::app::App;
use super::components::{HelpPanel, MessageLine, PasswordPanel, StatusBar, SystemPanel, TextPanel};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::api::{AnalysisService, ApiClient};
use crate::config::Config;

/// Run the main TUI application
pub async fn run_app(config: &Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create application state and the transport client
    let mut app = App::new();
    let client = ApiClient::new(config.api.base_url.clone());
    info!("using analysis service at {}", client.base_url());
    let service: Arc<dyn AnalysisService> = Arc::new(client);

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, &service).await;

    // Cleanup
    disable_raw_mode()?;
    if config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    service: &Arc<dyn AnalysisService>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        // Handle events with a timeout so in-flight triggers keep the UI
        // responsive
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    let _handled = handle_events(Event::Key(key), app, service)?;
                }
                Event::Resize(_, _) => {
                    // Redrawn on the next loop iteration
                }
                _ => {}
            }
        }

        // Commit any triggers that completed since the last iteration
        app.poll_outcomes().await;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &mut App) {
    let chunks = LayoutManager::main_layout(f.area());
    let body = LayoutManager::body_layout(chunks[0]);
    let forms = LayoutManager::forms_layout(body[1]);

    SystemPanel::render(f, body[0], app);
    TextPanel::render(f, forms[0], app);
    PasswordPanel::render(f, forms[1], app);
    MessageLine::render(f, chunks[1], app);
    StatusBar::render(f, chunks[2], app);

    // Render the help panel last so it sits on top of everything
    if app.show_help {
        HelpPanel::render(f, app);
    }
}
