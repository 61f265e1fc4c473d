//! HTTP client for the submission backend
//!
//! Posts the contact form as JSON and turns the HTTP response into either a
//! receipt or a [`SubmissionError`]. No retries and no explicit timeout.

use super::error::SubmissionError;
use super::traits::SubmissionApi;
use crate::state::FormData;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Shown when a 2xx response carries no message of its own
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// A successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub status: u16,
    pub message: String,
}

/// One stored submission as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

impl SubmissionRecord {
    /// Submission time in local time, or the raw value if it is not RFC 3339
    pub fn submitted_at_display(&self) -> String {
        match &self.submitted_at {
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|_| raw.clone()),
            None => "-".to_string(),
        }
    }
}

/// Request body for `POST /submit-form`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionPayload<'a> {
    #[serde(flatten)]
    data: &'a FormData,
    submitted_at: String,
}

impl<'a> SubmissionPayload<'a> {
    fn new(data: &'a FormData, now: DateTime<Utc>) -> Self {
        Self {
            data,
            submitted_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListingBody {
    Bare(Vec<SubmissionRecord>),
    Wrapped { submissions: Vec<SubmissionRecord> },
}

/// Non-blank string `message` of a decoded JSON body
fn message_of(value: &Value) -> Option<String> {
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}

/// Pull a non-blank `message` out of a JSON body, if there is one
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(message_of)
}

/// Map a submit response to a receipt or an error
///
/// A 2xx body must be JSON; one without a usable `message` gets the default
/// text. Non-2xx bodies are only searched for a `message`.
pub fn interpret_submit_response(
    status: u16,
    body: &str,
) -> Result<SubmissionReceipt, SubmissionError> {
    if !(200..300).contains(&status) {
        return Err(SubmissionError::Http {
            status,
            message: extract_message(body),
        });
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| SubmissionError::Parse(e.to_string()))?;
    let message = message_of(&value).unwrap_or_else(|| {
        tracing::debug!("Submit response carried no message, using default");
        DEFAULT_SUCCESS_MESSAGE.to_string()
    });
    Ok(SubmissionReceipt { status, message })
}

/// Decode the listing body, accepting a bare array or `{"submissions": [...]}`
pub fn parse_listing(body: &str) -> Result<Vec<SubmissionRecord>, SubmissionError> {
    match serde_json::from_str::<ListingBody>(body) {
        Ok(ListingBody::Bare(records)) | Ok(ListingBody::Wrapped { submissions: records }) => {
            Ok(records)
        }
        Err(e) => Err(SubmissionError::Parse(e.to_string())),
    }
}

/// Client for the contact form backend
pub struct SubmissionClient {
    http: reqwest::Client,
    base_url: String,
}

impl SubmissionClient {
    /// Create a client rooted at `base_url` (e.g. `http://localhost:3001/api`)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("contact-tui/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl SubmissionApi for SubmissionClient {
    async fn submit(&self, data: &FormData) -> Result<SubmissionReceipt, SubmissionError> {
        let url = self.endpoint("submit-form");
        let payload = SubmissionPayload::new(data, Utc::now());
        tracing::info!("Submitting contact form to {url}");

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("API Error: {e}");
                SubmissionError::Network(e.to_string())
            })?;

        let status = response.status().as_u16();
        // An unreadable body is treated like an empty one, which fails to decode on 2xx
        let body = response.text().await.unwrap_or_default();
        let result = interpret_submit_response(status, &body);
        if let Err(ref e) = result {
            tracing::error!("API Error: {e}");
        }
        result
    }

    async fn list_submissions(&self) -> Result<Vec<SubmissionRecord>, SubmissionError> {
        let url = self.endpoint("submissions");
        tracing::debug!("Fetching submissions from {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            return Err(SubmissionError::Http {
                status,
                message: extract_message(&body),
            });
        }
        parse_listing(&body)
    }
}
