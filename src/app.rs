//! Application state and core logic

use crate::api::{SubmissionApi, SubmissionClient, SubmissionError, SubmissionReceipt};
use crate::config::{AppConfig, FilePreferenceStore};
use crate::platform::is_shortcut_modifier;
use crate::state::{
    AppState, Form, FormButton, SubmitStep, SystemThemeSource, TerminalThemeSource, ThemeManager,
    View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot;

type SubmitResult = Result<SubmissionReceipt, SubmissionError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Light/dark theme and its persisted preference
    pub theme: ThemeManager,
    /// Backend client
    api: Arc<dyn SubmissionApi>,
    /// System appearance signal, polled by the event loop
    system_theme: Box<dyn SystemThemeSource>,
    last_system_prefers_dark: bool,
    /// Result channel of the request in flight, if any
    pending_submit: Option<oneshot::Receiver<SubmitResult>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create an App from its collaborators
    pub fn new(
        api: Arc<dyn SubmissionApi>,
        theme: ThemeManager,
        system_theme: Box<dyn SystemThemeSource>,
    ) -> Self {
        let last_system_prefers_dark = system_theme.prefers_dark();
        Self {
            state: AppState::default(),
            theme,
            api,
            system_theme,
            last_system_prefers_dark,
            pending_submit: None,
            quit: false,
        }
    }

    /// Wire up the real HTTP client, config-file theme store and terminal signal
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let base_url = config.resolve_api_base_url();
        tracing::info!("Using submission backend at {base_url}");
        let api = Arc::new(SubmissionClient::new(base_url)?);

        let system_theme = Box::new(TerminalThemeSource);
        let store = Box::new(FilePreferenceStore::new(AppConfig::config_path()));
        let theme = ThemeManager::load(store, system_theme.prefers_dark());

        Ok(Self::new(api, theme, system_theme))
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let shortcut = is_shortcut_modifier(key.modifiers);
        match key.code {
            KeyCode::Char('q') if shortcut => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('t') if shortcut => {
                self.toggle_theme();
                return Ok(());
            }
            KeyCode::Char('u') if shortcut => {
                self.clear_theme_preference();
                return Ok(());
            }
            _ => {}
        }

        match self.state.current_view {
            View::Form => self.handle_form_key(key).await?,
            View::Submissions => self.handle_submissions_key(key).await?,
        }
        Ok(())
    }

    /// Handle keys in the form view
    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let shortcut = is_shortcut_modifier(key.modifiers);
        let on_action_row = self.state.form.is_actions_row_active();

        match key.code {
            KeyCode::F(2) => self.open_submissions().await,
            KeyCode::Char('s') if shortcut => self.submit(),
            KeyCode::Char('r') if shortcut => self.reset_form(),
            KeyCode::Char(_) if shortcut => {}
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Esc => self.state.form.dismiss_status(),
            // Action row: pick and trigger a button
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l')
                if on_action_row =>
            {
                self.state.form.selected_button = self.state.form.selected_button.toggle();
            }
            KeyCode::Enter if on_action_row => match self.state.form.selected_button {
                FormButton::Submit => self.submit(),
                FormButton::Reset => self.reset_form(),
            },
            // Field input
            KeyCode::Enter => {
                if self.state.form.focused_field().is_some_and(|f| f.is_multiline()) {
                    self.state.form.input_char('\n');
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Char(c) if !on_action_row => {
                let c = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                self.state.form.input_char(c);
            }
            KeyCode::Backspace if !on_action_row => {
                self.state.form.backspace();
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the submissions listing
    async fn handle_submissions_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::F(2) => self.state.current_view = View::Form,
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev(),
            KeyCode::Char('r') => self.load_submissions().await,
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and, if clean, send it in the background
    pub fn submit(&mut self) {
        match self.state.form.begin_submit() {
            SubmitStep::Ready(data) => {
                let api = Arc::clone(&self.api);
                let (tx, rx) = oneshot::channel();
                tokio::spawn(async move {
                    let result = api.submit(&data).await;
                    // Receiver is gone only if the app is shutting down
                    let _ = tx.send(result);
                });
                self.pending_submit = Some(rx);
            }
            SubmitStep::Invalid => {
                self.state.status_message = Some("Please fix the highlighted fields".to_string());
            }
            SubmitStep::Busy => {
                self.state.status_message = Some("Submission already in progress".to_string());
            }
        }
    }

    /// Pick up the result of the request in flight. Returns true once it resolved.
    pub fn poll_submission(&mut self) -> bool {
        let Some(rx) = self.pending_submit.as_mut() else {
            return false;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(oneshot::error::TryRecvError::Empty) => return false,
            Err(oneshot::error::TryRecvError::Closed) => {
                tracing::error!("Submission task ended without a result");
                Err(SubmissionError::Network("request task aborted".to_string()))
            }
        };
        self.pending_submit = None;
        self.state.form.resolve(result);
        true
    }

    fn reset_form(&mut self) {
        if self.state.form.reset() {
            self.state.form.scroll_to_top();
            self.state.status_message = Some("Form cleared".to_string());
        }
    }

    /// Follow the system appearance when it changes
    pub fn sync_system_theme(&mut self) {
        let prefers_dark = self.system_theme.prefers_dark();
        if prefers_dark == self.last_system_prefers_dark {
            return;
        }
        self.last_system_prefers_dark = prefers_dark;
        self.theme.on_system_change(prefers_dark);
    }

    fn toggle_theme(&mut self) {
        match self.theme.toggle() {
            Ok(theme) => {
                self.state.status_message = Some(format!("Switched to {} mode", theme.as_str()));
            }
            Err(e) => {
                tracing::warn!("Failed to save theme preference: {e}");
                self.push_error(format!("Could not save theme preference: {e}"));
            }
        }
    }

    fn clear_theme_preference(&mut self) {
        let prefers_dark = self.system_theme.prefers_dark();
        self.last_system_prefers_dark = prefers_dark;
        match self.theme.clear_preference(prefers_dark) {
            Ok(()) => {
                self.state.status_message = Some("Following system theme".to_string());
            }
            Err(e) => self.push_error(format!("Could not clear theme preference: {e}")),
        }
    }

    async fn open_submissions(&mut self) {
        self.state.current_view = View::Submissions;
        self.load_submissions().await;
    }

    async fn load_submissions(&mut self) {
        match self.api.list_submissions().await {
            Ok(records) => {
                self.state.status_message = Some(format!("Loaded {} submission(s)", records.len()));
                self.state.submissions = records;
                self.state.selected_index = 0;
            }
            Err(e) => {
                tracing::warn!("Failed to load submissions: {e}");
                self.push_error(format!("Failed to load submissions: {e}"));
            }
        }
    }
}
