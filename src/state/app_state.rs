//! Application state definitions

use super::forms::ContactForm;
use crate::api::SubmissionRecord;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    Submissions,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: ContactForm,

    // Submissions listing
    pub submissions: Vec<SubmissionRecord>,
    pub selected_index: usize,

    /// Transient notice shown in the status bar, cleared on the next key press
    pub status_message: Option<String>,

    /// Errors waiting to be shown in the modal dialog, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn select_next(&mut self) {
        if !self.submissions.is_empty() {
            self.selected_index = (self.selected_index + 1).min(self.submissions.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> SubmissionRecord {
        SubmissionRecord {
            id: None,
            full_name: name.to_string(),
            email: String::new(),
            phone: String::new(),
            message: String::new(),
            submitted_at: None,
        }
    }

    #[test]
    fn test_default_view_is_form() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Form);
        assert!(!state.has_errors());
    }

    #[test]
    fn test_errors_are_shown_in_order() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = AppState::default();
        state.select_next();
        assert_eq!(state.selected_index, 0);

        state.submissions = vec![record("a"), record("b")];
        state.select_next();
        state.select_next();
        assert_eq!(state.selected_index, 1);
        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected_index, 0);
    }
}
