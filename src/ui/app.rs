//! Application state and trigger orchestration
//!
//! [`App`] is the single mutable aggregate shared by the four endpoint
//! triggers. Each trigger clears the error slot, marks its endpoint as
//! pending, and spawns the transport call; the event loop collects
//! completions and commits them back here. The loading indicator is
//! derived from the pending set, so a fast-finishing trigger cannot clear
//! it while another endpoint is still in flight. Completions commit in
//! arrival order, not invocation order.

use std::collections::HashSet;
use std::sync::Arc;

use log::{error, info};
use serde_json::Value;
use tokio::task::JoinHandle;

use crate::api::{AnalysisService, ApiError, Endpoint, PasswordAnalysis, ServiceInfo, TextAnalysis};

/// Which part of the screen receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Normal mode: single-key commands.
    None,
    TextInput,
    PasswordInput,
}

/// Completion of one in-flight trigger.
#[derive(Debug)]
pub enum TriggerOutcome {
    Health(Result<Value, ApiError>),
    Info(Result<ServiceInfo, ApiError>),
    Text(Result<TextAnalysis, ApiError>),
    Password(Result<PasswordAnalysis, ApiError>),
    /// The spawned task died outside the normalized error path.
    Crashed(Endpoint),
}

impl TriggerOutcome {
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Health(_) => Endpoint::Health,
            Self::Info(_) => Endpoint::Info,
            Self::Text(_) => Endpoint::AnalyzeText,
            Self::Password(_) => Endpoint::AnalyzePassword,
            Self::Crashed(endpoint) => *endpoint,
        }
    }
}

/// Application state
pub struct App {
    pub should_quit: bool,
    pub show_help: bool,
    pub focus: Focus,

    /// Endpoints with a trigger started and not yet completed.
    pub pending: HashSet<Endpoint>,
    /// Message of the most recently completed failing trigger.
    pub error_message: Option<String>,

    pub health_result: Option<Value>,
    pub info_result: Option<ServiceInfo>,
    pub text_result: Option<TextAnalysis>,
    pub password_result: Option<PasswordAnalysis>,

    pub text_input: String,
    pub password_input: String,

    tasks: Vec<(Endpoint, JoinHandle<TriggerOutcome>)>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance with all result slots absent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            should_quit: false,
            show_help: false,
            focus: Focus::None,
            pending: HashSet::new(),
            error_message: None,
            health_result: None,
            info_result: None,
            text_result: None,
            password_result: None,
            text_input: String::new(),
            password_input: String::new(),
            tasks: Vec::new(),
        }
    }

    /// True while at least one trigger has started and not yet completed.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    /// True while spawned transport calls have not been collected yet.
    #[must_use]
    pub fn has_inflight_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Steps 1 and 2 of every trigger: clear the previous error and mark
    /// the endpoint pending.
    pub fn begin_trigger(&mut self, endpoint: Endpoint) {
        self.error_message = None;
        self.pending.insert(endpoint);
        info!("trigger started: {}", endpoint.path());
    }

    /// Start a trigger: record it as pending and spawn the transport call.
    /// Analysis calls carry the input value as of now, not as of completion.
    pub fn trigger(&mut self, endpoint: Endpoint, service: &Arc<dyn AnalysisService>) {
        self.begin_trigger(endpoint);

        let service = Arc::clone(service);
        let text = self.text_input.clone();
        let password = self.password_input.clone();
        let handle = tokio::spawn(async move {
            match endpoint {
                Endpoint::Health => TriggerOutcome::Health(service.health().await),
                Endpoint::Info => TriggerOutcome::Info(service.info().await),
                Endpoint::AnalyzeText => TriggerOutcome::Text(service.analyze_text(&text).await),
                Endpoint::AnalyzePassword => {
                    TriggerOutcome::Password(service.analyze_password(&password).await)
                }
            }
        });
        self.tasks.push((endpoint, handle));
    }

    /// Commit a completed trigger: write the endpoint's own result slot on
    /// success or the shared error slot on failure, and clear the pending
    /// mark on both paths. Other endpoints' slots are never touched.
    pub fn apply_outcome(&mut self, outcome: TriggerOutcome) {
        let endpoint = outcome.endpoint();
        self.pending.remove(&endpoint);

        match outcome {
            TriggerOutcome::Health(Ok(value)) => {
                info!("trigger succeeded: {}", endpoint.path());
                self.health_result = Some(value);
            }
            TriggerOutcome::Info(Ok(payload)) => {
                info!("trigger succeeded: {}", endpoint.path());
                self.info_result = Some(payload);
            }
            TriggerOutcome::Text(Ok(payload)) => {
                info!("trigger succeeded: {}", endpoint.path());
                self.text_result = Some(payload);
            }
            TriggerOutcome::Password(Ok(payload)) => {
                info!("trigger succeeded: {}", endpoint.path());
                self.password_result = Some(payload);
            }
            TriggerOutcome::Health(Err(e))
            | TriggerOutcome::Info(Err(e))
            | TriggerOutcome::Text(Err(e))
            | TriggerOutcome::Password(Err(e)) => {
                error!("{e}");
                self.error_message = Some(e.to_string());
            }
            TriggerOutcome::Crashed(endpoint) => {
                error!("task for {} aborted", endpoint.path());
                self.error_message = Some(format!("Unexpected error during {}", endpoint.label()));
            }
        }
    }

    /// Collect finished transport calls and commit their outcomes in
    /// arrival order. Called from the event loop between redraws.
    pub async fn poll_outcomes(&mut self) {
        if self.tasks.is_empty() {
            return;
        }

        let (finished, running): (Vec<_>, Vec<_>) = self
            .tasks
            .drain(..)
            .partition(|(_, handle)| handle.is_finished());
        self.tasks = running;

        for (endpoint, handle) in finished {
            match handle.await {
                Ok(outcome) => self.apply_outcome(outcome),
                Err(join_err) => {
                    error!("task for {} failed to join: {join_err}", endpoint.path());
                    self.apply_outcome(TriggerOutcome::Crashed(endpoint));
                }
            }
        }
    }

    /// Submit the focused form. Empty input is forwarded to the service,
    /// which decides whether to reject it.
    pub fn submit_focused_form(&mut self, service: &Arc<dyn AnalysisService>) {
        match self.focus {
            Focus::TextInput => self.trigger(Endpoint::AnalyzeText, service),
            Focus::PasswordInput => self.trigger(Endpoint::AnalyzePassword, service),
            Focus::None => {}
        }
    }

    /// Switch between the two input forms.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::None | Focus::PasswordInput => Focus::TextInput,
            Focus::TextInput => Focus::PasswordInput,
        };
    }

    /// Leave input mode without submitting. The typed value is kept.
    pub fn leave_input(&mut self) {
        self.focus = Focus::None;
    }

    /// Add a character to the focused input.
    pub fn add_char_to_input(&mut self, c: char) {
        match self.focus {
            Focus::TextInput => self.text_input.push(c),
            Focus::PasswordInput => self.password_input.push(c),
            Focus::None => {}
        }
    }

    /// Remove the last character from the focused input.
    pub fn remove_char_from_input(&mut self) {
        match self.focus {
            Focus::TextInput => {
                self.text_input.pop();
            }
            Focus::PasswordInput => {
                self.password_input.pop();
            }
            Focus::None => {}
        }
    }

    /// Dismiss the error line without starting a new trigger.
    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_is_idle_and_empty() {
        let app = App::new();
        assert!(!app.is_loading());
        assert!(app.error_message.is_none());
        assert!(app.health_result.is_none());
        assert!(app.info_result.is_none());
        assert!(app.text_result.is_none());
        assert!(app.password_result.is_none());
        assert_eq!(app.focus, Focus::None);
    }

    #[test]
    fn test_focus_cycling() {
        let mut app = App::new();
        app.cycle_focus();
        assert_eq!(app.focus, Focus::TextInput);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::PasswordInput);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::TextInput);
        app.leave_input();
        assert_eq!(app.focus, Focus::None);
    }

    #[test]
    fn test_typing_goes_to_focused_input_only() {
        let mut app = App::new();
        app.add_char_to_input('x');
        assert!(app.text_input.is_empty());
        assert!(app.password_input.is_empty());

        app.focus = Focus::TextInput;
        app.add_char_to_input('h');
        app.add_char_to_input('i');
        app.remove_char_from_input();
        assert_eq!(app.text_input, "h");
        assert!(app.password_input.is_empty());

        app.focus = Focus::PasswordInput;
        app.add_char_to_input('s');
        assert_eq!(app.password_input, "s");
        assert_eq!(app.text_input, "h");
    }

    #[test]
    fn test_backspace_on_empty_input_is_noop() {
        let mut app = App::new();
        app.focus = Focus::PasswordInput;
        app.remove_char_from_input();
        assert!(app.password_input.is_empty());
    }

    #[test]
    fn test_crashed_outcome_uses_generic_message() {
        let mut app = App::new();
        app.begin_trigger(Endpoint::Info);
        app.apply_outcome(TriggerOutcome::Crashed(Endpoint::Info));
        assert!(!app.is_loading());
        let message = app.error_message.unwrap();
        assert!(message.contains("Unexpected error"), "message was: {message}");
        assert!(message.contains("service info"), "message was: {message}");
    }
}
