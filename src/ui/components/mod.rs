//! UI components

pub mod help_panel;
pub mod message_line;
pub mod password_panel;
pub mod status_bar;
pub mod system_panel;
pub mod text_panel;

pub use help_panel::HelpPanel;
pub use message_line::MessageLine;
pub use password_panel::PasswordPanel;
pub use status_bar::StatusBar;
pub use system_panel::SystemPanel;
pub use text_panel::TextPanel;

use serde::Serialize;

/// Pretty-print a payload for display, exactly as it came off the wire.
pub(crate) fn pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "<unrenderable payload>".to_string())
}
