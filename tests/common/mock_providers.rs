/*!
 * Scripted provider for pipeline tests
 *
 * Returns predetermined outcomes in order and records every request, so a
 * test can assert both what the pipeline did with each outcome and how many
 * calls it made.
 */

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use transcritic::errors::ErrorKind;
use transcritic::providers::{InferenceOutcome, InferenceRequest, Provider};

/// Tracks calls made to the scripted provider
#[derive(Debug, Default)]
pub struct ApiCallTracker {
    /// Count of calls made
    pub call_count: usize,
    /// Every request received, in order
    pub requests: Vec<InferenceRequest>,
}

/// Provider replaying a fixed list of outcomes
#[derive(Debug)]
pub struct ScriptedProvider {
    outcomes: Mutex<VecDeque<InferenceOutcome>>,
    tracker: Arc<Mutex<ApiCallTracker>>,
}

impl ScriptedProvider {
    /// Create a provider that answers with `outcomes`, one per call
    pub fn new(outcomes: Vec<InferenceOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            tracker: Arc::new(Mutex::new(ApiCallTracker::default())),
        }
    }

    /// Get the call tracker
    pub fn tracker(&self) -> Arc<Mutex<ApiCallTracker>> {
        self.tracker.clone()
    }

    /// Number of calls made so far
    pub fn call_count(&self) -> usize {
        self.tracker.lock().unwrap().call_count
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    async fn complete(&self, request: &InferenceRequest) -> InferenceOutcome {
        {
            let mut tracker = self.tracker.lock().unwrap();
            tracker.call_count += 1;
            tracker.requests.push(request.clone());
        }

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| InferenceOutcome::failure(ErrorKind::UnknownError, "script exhausted"))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
