//! Submission to the remote intake service.
//!
//! The intake service is opaque: a single endpoint accepting a JSON `POST`
//! of the lead record. Only the status class and, for conflicts, the
//! `message` field of the body matter here.

use async_trait::async_trait;
use lead_forms::FormRecord;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::config::IntakeConfig;
use crate::error::{Result, SubmitError};

/// A successful intake response.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// HTTP status code (2xx).
    pub status: u16,
    /// The JSON body returned by the service.
    pub body: Value,
}

/// Anything that can take one lead record and accept or refuse it.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Submits the full record as one request.
    async fn submit(&self, record: &FormRecord) -> Result<Receipt>;
}

/// Submission over HTTP to a configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpSubmissionService {
    client: Client,
    endpoint: Url,
}

impl HttpSubmissionService {
    /// Creates a client for the configured endpoint, applying its timeout.
    pub fn new(config: &IntakeConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Returns the endpoint requests go to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionService for HttpSubmissionService {
    async fn submit(&self, record: &FormRecord) -> Result<Receipt> {
        // Values are personal data, so only the target is logged.
        debug!(endpoint = %self.endpoint, "posting lead");
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(record)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "intake service responded");
        classify_response(status, &body)
    }
}

/// Maps an intake response onto success, duplicate conflict, or rejection.
///
/// - `2xx` with a JSON body is a success.
/// - `400`/`409` whose JSON `message` mentions "duplicate" (any case) is a
///   duplicate-lead conflict.
/// - Everything else is a rejection carrying the status.
pub fn classify_response(status: u16, body: &str) -> Result<Receipt> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body)
            .map(|body| Receipt { status, body })
            .map_err(|e| SubmitError::InvalidResponse(format!("status {status}: {e}")));
    }

    let message = body_message(body);

    if matches!(status, 400 | 409) {
        if let Some(message) = &message {
            if message.to_lowercase().contains("duplicate") {
                return Err(SubmitError::Duplicate(message.clone()));
            }
        }
    }

    Err(SubmitError::Rejected {
        status,
        message: message.unwrap_or_else(|| format!("HTTP {status}")),
    })
}

/// Extracts the `message` string from a JSON error body.
fn body_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
