/*!
 * Mock provider used when mocks are enabled in the configuration.
 *
 * Responses come from an explicit table keyed by `ModelRole`, so a run is
 * fully deterministic and never touches the network. This lets end-to-end
 * harnesses without network access drive the whole request/response path.
 */

use async_trait::async_trait;
use log::debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::providers::{InferenceOutcome, InferenceRequest, ModelRole, Provider};

/// Canned response for the translator role
pub const MOCK_TRANSLATION: &str = "The sun is shining.";

/// Canned response for the judge role
pub const MOCK_CRITIQUE: &str = "Rating: 9/10. Fluent and accurate.";

/// Canned response for any other role
pub const MOCK_DEFAULT: &str = "Mocked Response: Default answer";

/// Role-keyed table of canned responses
#[derive(Debug, Clone, PartialEq)]
pub struct MockResponses {
    /// Returned for `ModelRole::Translator`
    pub translation: String,
    /// Returned for `ModelRole::Judge`
    pub critique: String,
    /// Returned for `ModelRole::Other`
    pub default: String,
}

impl MockResponses {
    /// Look up the response for a role
    pub fn for_role(&self, role: ModelRole) -> &str {
        match role {
            ModelRole::Translator => &self.translation,
            ModelRole::Judge => &self.critique,
            ModelRole::Other => &self.default,
        }
    }
}

impl Default for MockResponses {
    fn default() -> Self {
        Self {
            translation: MOCK_TRANSLATION.to_string(),
            critique: MOCK_CRITIQUE.to_string(),
            default: MOCK_DEFAULT.to_string(),
        }
    }
}

/// Mock provider returning canned responses
#[derive(Debug)]
pub struct MockProvider {
    /// Response table
    responses: MockResponses,
    /// Number of requests served
    request_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a mock provider with the default response table
    pub fn new() -> Self {
        Self::with_responses(MockResponses::default())
    }

    /// Create a mock provider with a custom response table
    pub fn with_responses(responses: MockResponses) -> Self {
        Self {
            responses,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of requests served so far, shared between clones
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            responses: self.responses.clone(),
            request_count: Arc::clone(&self.request_count),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(&self, request: &InferenceRequest) -> InferenceOutcome {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        debug!("Mock response for {:?} model {}", request.role, request.model_name);
        InferenceOutcome::success(self.responses.for_role(request.role))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
