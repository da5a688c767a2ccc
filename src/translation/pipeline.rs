/*!
 * Translate-then-critique pipeline.
 *
 * One run moves through `Validating -> Translating -> Evaluating -> Done`.
 * Any of the first three stages can end the run in `Failed`:
 * 1. Validation failure: no remote call is made
 * 2. Translation failure: the evaluation call is skipped
 * 3. Evaluation failure: the translation is kept and returned with the error
 *
 * A run always produces a `PipelineResult`; nothing is raised to the caller.
 */

use log::{debug, info, warn};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::app_config::Config;
use crate::errors::{AppError, ErrorKind};
use crate::language_utils::language_display_name;
use crate::providers::{InferenceOutcome, ModelRole};
use crate::translation::gateway::InferenceGateway;
use crate::translation::prompts::{build_evaluation_prompt, build_translation_prompt};
use crate::validation::InputValidator;

/// Stage of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Validating,
    Translating,
    Evaluating,
    Done,
    Failed,
}

/// Everything the presentation layer needs to render one submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineResult {
    /// Text as submitted
    pub original_text: String,
    /// Target language key as submitted
    pub target_language: String,
    /// Translation, when the translation stage succeeded
    pub translation: Option<String>,
    /// Critique, when both stages succeeded
    pub critique: Option<String>,
    /// User-facing error, when any stage failed
    pub error: Option<String>,
    /// Failure kind of the remote call that failed, if one did
    pub error_kind: Option<ErrorKind>,
    /// Stage that failed, if any
    pub failed_stage: Option<PipelineStage>,
}

impl PipelineResult {
    fn new(text: &str, target_language: &str) -> Self {
        Self {
            original_text: text.to_string(),
            target_language: target_language.to_string(),
            translation: None,
            critique: None,
            error: None,
            error_kind: None,
            failed_stage: None,
        }
    }

    fn fail(mut self, stage: PipelineStage, kind: Option<ErrorKind>, message: String) -> Self {
        self.error = Some(message);
        self.error_kind = kind;
        self.failed_stage = Some(stage);
        self
    }

    /// Final state of the run
    pub fn stage(&self) -> PipelineStage {
        if self.failed_stage.is_some() {
            PipelineStage::Failed
        } else {
            PipelineStage::Done
        }
    }

    /// Whether both stages succeeded
    pub fn is_success(&self) -> bool {
        self.stage() == PipelineStage::Done
    }
}

/// Orchestrates validation, translation and evaluation for one submission
#[derive(Debug, Clone)]
pub struct TranslationCriticPipeline {
    validator: InputValidator,
    gateway: InferenceGateway,
    supported_languages: BTreeMap<String, String>,
    translation_model: String,
    judge_model: String,
}

impl TranslationCriticPipeline {
    /// Create a pipeline over an existing gateway
    pub fn new(config: &Config, gateway: InferenceGateway) -> Self {
        Self {
            validator: InputValidator::from_config(config),
            gateway,
            supported_languages: config.supported_languages.clone(),
            translation_model: config.translation_model.clone(),
            judge_model: config.judge_model.clone(),
        }
    }

    /// Create a pipeline with the gateway selected by the configuration
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Ok(Self::new(config, InferenceGateway::from_config(config)?))
    }

    /// The gateway this pipeline calls
    pub fn gateway(&self) -> &InferenceGateway {
        &self.gateway
    }

    /// Run the pipeline for one submission
    pub async fn run(&self, text: &str, target_language: &str) -> PipelineResult {
        let result = PipelineResult::new(text, target_language);

        debug!("Pipeline stage: {:?}", PipelineStage::Validating);
        let validation = self.validator.validate(text, target_language);
        if !validation.is_valid {
            let message = validation
                .error_message
                .unwrap_or_else(|| "Invalid input".to_string());
            warn!("Validation failed: {}", message);
            return result.fail(PipelineStage::Validating, None, message);
        }

        debug!("Pipeline stage: {:?}", PipelineStage::Translating);
        let language_name = language_display_name(target_language, &self.supported_languages);
        let prompt = build_translation_prompt(text, language_name);
        let translation = match self
            .gateway
            .call_model(ModelRole::Translator, &self.translation_model, &prompt)
            .await
        {
            InferenceOutcome::Success { text } => text,
            InferenceOutcome::Failure { kind, .. } => {
                warn!("Translation stage failed ({}), skipping evaluation", kind);
                let message = format!("Translation failed: {}.", kind.user_message());
                return result.fail(PipelineStage::Translating, Some(kind), message);
            }
        };

        debug!("Pipeline stage: {:?}", PipelineStage::Evaluating);
        let prompt = build_evaluation_prompt(text, &translation);
        let mut result = PipelineResult {
            translation: Some(translation),
            ..result
        };
        match self
            .gateway
            .call_model(ModelRole::Judge, &self.judge_model, &prompt)
            .await
        {
            InferenceOutcome::Success { text } => {
                result.critique = Some(text);
            }
            InferenceOutcome::Failure { kind, .. } => {
                warn!("Evaluation stage failed ({}), returning translation only", kind);
                let message = format!(
                    "Translation succeeded, but the quality evaluation failed: {}.",
                    kind.user_message()
                );
                return result.fail(PipelineStage::Evaluating, Some(kind), message);
            }
        }

        info!("Translated {} chars into {}", text.chars().count(), language_name);
        debug!("Pipeline stage: {:?}", PipelineStage::Done);
        result
    }
}
