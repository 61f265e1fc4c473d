//! HTTP client module for the submission backend

mod client;
mod error;
mod traits;

pub use client::{SubmissionClient, SubmissionReceipt, SubmissionRecord, DEFAULT_BASE_URL};
pub use error::SubmissionError;
pub use traits::SubmissionApi;

#[cfg(test)]
pub use traits::MockSubmissionApi;
