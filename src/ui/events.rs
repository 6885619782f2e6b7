//! Event handling and key bindings

use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use super::app::{App, Focus};
use crate::api::{AnalysisService, Endpoint};

/// Handle all user input events
pub fn handle_events(
    event: Event,
    app: &mut App,
    service: &Arc<dyn AnalysisService>,
) -> Result<bool, anyhow::Error> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            // Ctrl+C always quits, regardless of mode
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
                return Ok(true);
            }

            // Help panel blocks all other shortcuts while open
            if app.show_help {
                return Ok(handle_help_panel(key, app));
            }

            return match app.focus {
                Focus::None => handle_normal_mode(key, app, service),
                Focus::TextInput | Focus::PasswordInput => handle_input_mode(key, app, service),
            };
        }
    }
    Ok(false)
}

/// Handle events when the help panel is open
fn handle_help_panel(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('?' | 'q') | KeyCode::Esc => {
            app.show_help = false;
            true
        }
        _ => false, // Ignore all other keys when help is open
    }
}

/// Handle events in normal mode
fn handle_normal_mode(
    key: crossterm::event::KeyEvent,
    app: &mut App,
    service: &Arc<dyn AnalysisService>,
) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            Ok(true)
        }
        KeyCode::Char('h') => {
            app.trigger(Endpoint::Health, service);
            Ok(true)
        }
        KeyCode::Char('i') => {
            app.trigger(Endpoint::Info, service);
            Ok(true)
        }
        KeyCode::Char('t') => {
            app.focus = Focus::TextInput;
            Ok(true)
        }
        KeyCode::Char('p') => {
            app.focus = Focus::PasswordInput;
            Ok(true)
        }
        KeyCode::Tab => {
            app.cycle_focus();
            Ok(true)
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            Ok(true)
        }
        KeyCode::Esc => {
            app.dismiss_error();
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Handle events while one of the two analyze forms is focused. Enter
/// submits the form in place of a browser's form submission; there is no
/// page navigation to suppress in a terminal.
fn handle_input_mode(
    key: crossterm::event::KeyEvent,
    app: &mut App,
    service: &Arc<dyn AnalysisService>,
) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Char(c) if !c.is_control() => {
            app.add_char_to_input(c);
            Ok(true)
        }
        KeyCode::Backspace => {
            app.remove_char_from_input();
            Ok(true)
        }
        KeyCode::Enter => {
            app.submit_focused_form(service);
            Ok(true)
        }
        KeyCode::Tab => {
            app.cycle_focus();
            Ok(true)
        }
        KeyCode::Esc => {
            app.leave_input();
            Ok(true)
        }
        _ => Ok(false), // Ignore all other keys while editing
    }
}
