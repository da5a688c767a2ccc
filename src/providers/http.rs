use async_trait::async_trait;
use log::{debug, error, warn};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::app_config::Config;
use crate::errors::{AppError, ErrorKind};
use crate::providers::{InferenceOutcome, InferenceRequest, Provider};

/// Number of prompt characters echoed in debug logs
const PROMPT_PREVIEW_CHARS: usize = 100;

/// Client for the live text-generation endpoint
///
/// Sends `POST <endpoint>` with body `{"model_name", "prompt"}` and a bearer
/// credential, expects `{"response": "..."}` back. One attempt per call.
#[derive(Debug)]
pub struct HttpProvider {
    /// HTTP client carrying the request timeout
    client: Client,
    /// Full endpoint URL
    endpoint: String,
    /// Bearer credential
    api_key: String,
    /// Request timeout, kept for log messages
    timeout: Duration,
}

impl HttpProvider {
    /// Create a new HTTP provider
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout,
        })
    }

    /// Create an HTTP provider from the application configuration
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(&config.api_endpoint, &config.api_key, config.timeout())
    }

    /// Endpoint this provider posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Map a transport-level error onto a failure kind
    fn classify_transport_error(&self, error: &reqwest::Error) -> InferenceOutcome {
        if error.is_timeout() {
            error!("Request timed out: no answer within {:?}", self.timeout);
            InferenceOutcome::failure(ErrorKind::Timeout, error.to_string())
        } else if error.is_connect() {
            error!("Could not connect to {}: {}", self.endpoint, error);
            InferenceOutcome::failure(ErrorKind::ConnectionError, error.to_string())
        } else {
            error!("HTTP request failed: {}", error);
            InferenceOutcome::failure(ErrorKind::UnknownError, error.to_string())
        }
    }
}

/// Extract the generated text from a success-status body
pub fn parse_response_body(body: &str) -> InferenceOutcome {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            let preview: String = body.chars().take(200).collect();
            error!("Response is not valid JSON: {}. Body: {}", e, preview);
            return InferenceOutcome::failure(
                ErrorKind::MalformedResponse,
                format!("invalid JSON: {}", e),
            );
        }
    };

    match value.get("response") {
        Some(Value::String(text)) => InferenceOutcome::success(text.clone()),
        Some(other) => {
            error!("Field 'response' is not a string: {}", other);
            InferenceOutcome::failure(
                ErrorKind::MalformedResponse,
                "field 'response' is not a string",
            )
        }
        None => {
            error!("Key 'response' not found in response: {}", value);
            InferenceOutcome::failure(ErrorKind::MalformedResponse, "missing field 'response'")
        }
    }
}

#[async_trait]
impl Provider for HttpProvider {
    async fn complete(&self, request: &InferenceRequest) -> InferenceOutcome {
        let preview: String = request.prompt.chars().take(PROMPT_PREVIEW_CHARS).collect();
        debug!("Sending request to {} (model: {})", self.endpoint, request.model_name);
        debug!("Prompt: {}...", preview);

        let response = match self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return self.classify_transport_error(&e),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return self.classify_transport_error(&e),
        };

        if status.as_u16() >= 400 {
            error!("API error ({}): {}", status, body);
            return InferenceOutcome::failure(ErrorKind::RemoteError, format!("{}: {}", status, body));
        }

        let outcome = parse_response_body(&body);
        match &outcome {
            InferenceOutcome::Success { text } => {
                debug!("Received response from API ({} chars)", text.chars().count());
            }
            InferenceOutcome::Failure { kind, .. } => {
                warn!("Unusable {} response from {}: {}", status, self.endpoint, kind);
            }
        }
        outcome
    }

    fn name(&self) -> &str {
        "http"
    }
}
