/*!
 * Provider implementations for the remote text-generation service.
 *
 * - `http`: live client for the JSON `{model_name, prompt}` endpoint
 * - `mock`: canned responses keyed by model role, no network I/O
 *
 * Providers never fail with `Err`: every problem is reported as an
 * `InferenceOutcome::Failure` carrying an `ErrorKind`.
 */

use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Debug;

use crate::errors::{ErrorKind, InferenceError};

pub mod http;
pub mod mock;

/// Role the caller intends a model to play
///
/// Decided by the caller, never inferred from the model name. The mock
/// provider uses it to pick its canned response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelRole {
    /// Produces translations
    Translator,
    /// Judges translations
    Judge,
    /// Anything else
    #[default]
    Other,
}

/// One call to the text-generation endpoint
///
/// Serializes to the wire body `{"model_name": ..., "prompt": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferenceRequest {
    /// Model identifier understood by the endpoint
    pub model_name: String,
    /// Prompt text
    pub prompt: String,
    /// Caller-declared role, not sent over the wire
    #[serde(skip)]
    pub role: ModelRole,
}

impl InferenceRequest {
    /// Create a new request
    pub fn new(role: ModelRole, model_name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            prompt: prompt.into(),
            role,
        }
    }
}

/// Result of a single gateway call
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceOutcome {
    /// The endpoint produced text
    Success {
        /// Generated text
        text: String,
    },
    /// The call failed
    Failure {
        /// Why it failed
        kind: ErrorKind,
        /// Diagnostic detail for logs
        detail: String,
    },
}

impl InferenceOutcome {
    /// Create a success outcome
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success { text: text.into() }
    }

    /// Create a failure outcome
    pub fn failure(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            detail: detail.into(),
        }
    }

    /// Whether the call succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Failure kind, if any
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    /// Convert into a `Result` for callers that prefer `?`
    pub fn into_result(self) -> Result<String, InferenceError> {
        match self {
            Self::Success { text } => Ok(text),
            Self::Failure { kind, detail } => Err(InferenceError { kind, detail }),
        }
    }
}

/// Common trait for all text-generation providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing the gateway to switch between live and mock backends.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Perform exactly one call; never retries and never panics
    async fn complete(&self, request: &InferenceRequest) -> InferenceOutcome;

    /// Short name used in log lines
    fn name(&self) -> &str;
}
