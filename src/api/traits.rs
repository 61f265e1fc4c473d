//! Trait abstraction for the submission backend to enable mocking in tests

use super::client::{SubmissionReceipt, SubmissionRecord};
use super::error::SubmissionError;
use crate::state::FormData;
use async_trait::async_trait;

/// Backend operations used by the form, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionApi: Send + Sync {
    /// Send one form submission
    async fn submit(&self, data: &FormData) -> Result<SubmissionReceipt, SubmissionError>;

    /// Fetch previously stored submissions
    async fn list_submissions(&self) -> Result<Vec<SubmissionRecord>, SubmissionError>;
}
