//! Contact form state machine
//!
//! `ContactForm` owns the field values, the per-field errors and the status of
//! the last submission. Every transition goes through [`FormPhase`] so the
//! Idle/Validating/Submitting/Success/Error flow can be exercised without a
//! terminal.

use super::field::Field;
use crate::api::{SubmissionApi, SubmissionError, SubmissionReceipt};
use crate::state::validation::{truncate_to_limit, validate_form};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Message length at which the character counter turns into a warning
pub const MESSAGE_WARN_CHARS: usize = 900;

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// User-entered values for one form instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        }
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Per-field validation failure messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<Field, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: String) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    #[allow(dead_code)]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Outcome of the most recent submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Success(String),
    Error(String),
}

impl SubmitStatus {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Error(m) => m,
        }
    }
}

/// Submission lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Error,
}

impl FormPhase {
    /// Whether the state machine allows moving from `self` to `next`
    pub fn can_transition_to(self, next: FormPhase) -> bool {
        use FormPhase::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Idle)
                | (Validating, Submitting)
                | (Submitting, Success)
                | (Submitting, Error)
                | (Success, Idle)
                | (Error, Idle)
        )
    }
}

/// Buttons in the action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Reset,
}

impl FormButton {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Submit => Self::Reset,
            Self::Reset => Self::Submit,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Submit Form",
            Self::Reset => "Reset Form",
        }
    }
}

/// Result of asking the form to start a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStep {
    /// A request is already in flight
    Busy,
    /// Validation failed; errors are stored on the form
    Invalid,
    /// Validation passed; send this snapshot
    Ready(FormData),
}

/// The contact form controller
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    data: FormData,
    errors: ErrorMap,
    status: Option<SubmitStatus>,
    phase: FormPhase,
    /// 0..=3 are the fields, 4 is the action row
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn status(&self) -> Option<&SubmitStatus> {
        self.status.as_ref()
    }

    #[allow(dead_code)]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Field under the cursor, `None` when the action row is focused
    pub fn focused_field(&self) -> Option<Field> {
        Field::from_index(self.active_field_index)
    }

    pub fn is_actions_row_active(&self) -> bool {
        self.active_field_index == Field::ALL.len()
    }

    pub fn focus(&mut self, field: Field) {
        self.active_field_index = field.index();
    }

    /// Move the cursor back to the first field so the status banner is in view
    pub fn scroll_to_top(&mut self) {
        self.active_field_index = 0;
    }

    /// Message length shown by the character counter
    pub fn char_count(&self) -> usize {
        self.data.message.chars().count()
    }

    pub fn char_count_warning(&self) -> bool {
        self.char_count() > MESSAGE_WARN_CHARS
    }

    fn transition(&mut self, next: FormPhase) -> bool {
        if !self.phase.can_transition_to(next) {
            tracing::warn!("Rejected form transition {:?} -> {:?}", self.phase, next);
            return false;
        }
        tracing::debug!("Form transition {:?} -> {:?}", self.phase, next);
        self.phase = next;
        true
    }

    /// Replace a field's value. Ignored unless idle.
    ///
    /// Any error shown for the field is dropped without re-validating.
    pub fn set_field(&mut self, field: Field, value: &str) -> bool {
        if self.phase != FormPhase::Idle {
            return false;
        }
        let value = match field.max_chars() {
            Some(max) => truncate_to_limit(value, max),
            None => value.to_string(),
        };
        *self.data.get_mut(field) = value;
        self.errors.remove(field);
        true
    }

    /// Append a character to the focused field
    pub fn input_char(&mut self, c: char) -> bool {
        let Some(field) = self.focused_field() else {
            return false;
        };
        if self.phase != FormPhase::Idle {
            return false;
        }
        if let Some(max) = field.max_chars() {
            if self.data.get(field).chars().count() >= max {
                return false;
            }
        }
        self.data.get_mut(field).push(c);
        self.errors.remove(field);
        true
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) -> bool {
        let Some(field) = self.focused_field() else {
            return false;
        };
        if self.phase != FormPhase::Idle {
            return false;
        }
        self.data.get_mut(field).pop();
        self.errors.remove(field);
        true
    }

    /// Start a submission attempt: validate and, if clean, enter Submitting
    pub fn begin_submit(&mut self) -> SubmitStep {
        if !self.transition(FormPhase::Validating) {
            return SubmitStep::Busy;
        }

        let errors = validate_form(&self.data);
        if !errors.is_empty() {
            tracing::debug!("Validation failed for {} field(s)", errors.len());
            self.errors = errors;
            self.transition(FormPhase::Idle);
            let first_failing = self.errors.iter().next().map(|(f, _)| f);
            if let Some(field) = first_failing {
                self.focus(field);
            }
            return SubmitStep::Invalid;
        }

        self.errors.clear();
        self.status = None;
        self.transition(FormPhase::Submitting);
        SubmitStep::Ready(self.data.clone())
    }

    /// Apply the result of the in-flight submission. Ignored unless submitting.
    pub fn resolve(&mut self, result: Result<SubmissionReceipt, SubmissionError>) -> bool {
        match result {
            Ok(receipt) => {
                if !self.transition(FormPhase::Success) {
                    return false;
                }
                tracing::info!("Submission accepted (HTTP {})", receipt.status);
                self.data = FormData::default();
                self.errors.clear();
                self.status = Some(SubmitStatus::Success(receipt.message));
                self.scroll_to_top();
            }
            Err(err) => {
                if !self.transition(FormPhase::Error) {
                    return false;
                }
                tracing::warn!("Submission failed: {err}");
                self.status = Some(SubmitStatus::Error(err.user_message()));
            }
        }
        self.transition(FormPhase::Idle);
        true
    }

    /// Validate, send and resolve in one go. Returns whether the API was called.
    pub async fn submit_with(&mut self, api: &dyn SubmissionApi) -> bool {
        match self.begin_submit() {
            SubmitStep::Ready(data) => {
                let result = api.submit(&data).await;
                self.resolve(result);
                true
            }
            SubmitStep::Busy | SubmitStep::Invalid => false,
        }
    }

    /// Clear values, errors and status. Ignored unless idle.
    pub fn reset(&mut self) -> bool {
        if self.phase != FormPhase::Idle {
            return false;
        }
        self.data = FormData::default();
        self.errors.clear();
        self.status = None;
        true
    }

    /// Hide the status banner
    pub fn dismiss_status(&mut self) {
        if self.phase == FormPhase::Idle {
            self.status = None;
        }
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        Field::ALL.len() + 1 // fields + action row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Field::ALL.len());
    }
}
