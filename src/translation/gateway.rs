/*!
 * Inference gateway: one outbound call per invocation.
 *
 * The gateway owns the mock/live switch. The mode is chosen once from the
 * configuration when the gateway is built and never changes afterwards.
 */

use log::{debug, warn};
use std::sync::Arc;
use std::time::Instant;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::providers::http::HttpProvider;
use crate::providers::mock::MockProvider;
use crate::providers::{InferenceOutcome, InferenceRequest, ModelRole, Provider};

/// How the gateway produces outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayMode {
    /// Canned responses, no network I/O
    Mock,
    /// Real HTTP calls to the configured endpoint
    Live,
    /// A provider injected by the embedding code
    Custom,
}

/// Single-call wrapper around a text-generation provider
#[derive(Debug, Clone)]
pub struct InferenceGateway {
    provider: Arc<dyn Provider>,
    mode: GatewayMode,
}

impl InferenceGateway {
    /// Build the gateway selected by `config.enable_mocks`
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        if config.enable_mocks {
            debug!("Inference gateway running in mock mode");
            Ok(Self::mock(MockProvider::new()))
        } else {
            debug!("Inference gateway posting to {}", config.api_endpoint);
            Ok(Self {
                provider: Arc::new(HttpProvider::from_config(config)?),
                mode: GatewayMode::Live,
            })
        }
    }

    /// Gateway over a mock provider
    pub fn mock(provider: MockProvider) -> Self {
        Self {
            provider: Arc::new(provider),
            mode: GatewayMode::Mock,
        }
    }

    /// Gateway over any provider
    pub fn with_provider(provider: Arc<dyn Provider>) -> Self {
        Self {
            provider,
            mode: GatewayMode::Custom,
        }
    }

    /// Active mode
    pub fn mode(&self) -> GatewayMode {
        self.mode
    }

    /// Perform one call
    pub async fn call(&self, request: InferenceRequest) -> InferenceOutcome {
        let started = Instant::now();
        let outcome = self.provider.complete(&request).await;

        match &outcome {
            InferenceOutcome::Success { .. } => debug!(
                "{} call to {} succeeded in {:?}",
                self.provider.name(),
                request.model_name,
                started.elapsed()
            ),
            InferenceOutcome::Failure { kind, detail } => warn!(
                "{} call to {} failed after {:?} ({}): {}",
                self.provider.name(),
                request.model_name,
                started.elapsed(),
                kind,
                detail
            ),
        }

        outcome
    }

    /// Build a request for `model_name` in the given role and perform one call
    pub async fn call_model(&self, role: ModelRole, model_name: &str, prompt: &str) -> InferenceOutcome {
        self.call(InferenceRequest::new(role, model_name, prompt)).await
    }
}
