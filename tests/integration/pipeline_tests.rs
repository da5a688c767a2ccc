/*!
 * Integration tests for the translate-then-critique pipeline
 *
 * Live-mode runs go through a local wiremock server so the number of remote
 * calls can be asserted; the remaining runs use the scripted provider.
 */

use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use transcritic::errors::ErrorKind;
use transcritic::providers::mock::{MOCK_CRITIQUE, MOCK_TRANSLATION};
use transcritic::providers::{InferenceOutcome, ModelRole};
use transcritic::translation::{InferenceGateway, PipelineStage, TranslationCriticPipeline};
use transcritic::Config;

use crate::common::mock_providers::ScriptedProvider;
use crate::common::{JUDGE_MODEL, TRANSLATION_MODEL, init_logging, live_config};

async fn start_server() -> (MockServer, TranslationCriticPipeline) {
    init_logging();
    let server = MockServer::start().await;
    let endpoint = format!("{}/api/generate", server.uri());
    let pipeline = TranslationCriticPipeline::from_config(&live_config(&endpoint)).unwrap();
    (server, pipeline)
}

fn scripted_pipeline(outcomes: Vec<InferenceOutcome>) -> (TranslationCriticPipeline, Arc<ScriptedProvider>) {
    init_logging();
    let provider = Arc::new(ScriptedProvider::new(outcomes));
    let gateway = InferenceGateway::with_provider(provider.clone());
    let pipeline = TranslationCriticPipeline::new(&live_config("http://localhost:8000/api/generate"), gateway);
    (pipeline, provider)
}

#[tokio::test]
async fn test_run_fullSuccess_shouldCallEndpointTwice() {
    let (server, pipeline) = start_server().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"model_name": TRANSLATION_MODEL})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Translated text"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"model_name": JUDGE_MODEL})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Rating: 9/10"})))
        .expect(1)
        .mount(&server)
        .await;

    let result = pipeline.run("Hello world", "english").await;

    assert_eq!(result.original_text, "Hello world");
    assert_eq!(result.target_language, "english");
    assert_eq!(result.translation.as_deref(), Some("Translated text"));
    assert_eq!(result.critique.as_deref(), Some("Rating: 9/10"));
    assert_eq!(result.error, None);
    assert_eq!(result.stage(), PipelineStage::Done);
    assert!(result.is_success());
}

#[tokio::test]
async fn test_run_emptyText_shouldMakeNoRemoteCalls() {
    let (server, pipeline) = start_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "unused"})))
        .expect(0)
        .mount(&server)
        .await;

    let result = pipeline.run("", "english").await;

    assert_eq!(result.translation, None);
    assert_eq!(result.critique, None);
    assert!(!result.error.as_deref().unwrap_or_default().is_empty());
    assert_eq!(result.failed_stage, Some(PipelineStage::Validating));
}

#[tokio::test]
async fn test_run_translationServerError_shouldSkipEvaluation() {
    let (server, pipeline) = start_server().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"model_name": TRANSLATION_MODEL})))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"model_name": JUDGE_MODEL})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "unused"})))
        .expect(0)
        .mount(&server)
        .await;

    let result = pipeline.run("Hello world", "english").await;

    assert_eq!(result.translation, None);
    assert_eq!(result.critique, None);
    assert!(!result.error.as_deref().unwrap_or_default().is_empty());
    assert_eq!(result.error_kind, Some(ErrorKind::RemoteError));
    assert_eq!(result.failed_stage, Some(PipelineStage::Translating));
    // The raw server body stays in the logs
    assert!(!result.error.unwrap().contains("Internal Server Error"));
}

#[tokio::test]
async fn test_run_translationMalformed_shouldSkipEvaluation() {
    let (server, pipeline) = start_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("This is not valid JSON"))
        .expect(1)
        .mount(&server)
        .await;

    let result = pipeline.run("Hello world", "english").await;

    assert_eq!(result.translation, None);
    assert_eq!(result.error_kind, Some(ErrorKind::MalformedResponse));
}

#[tokio::test]
async fn test_run_anyTranslationFailure_shouldCallOnce() {
    for kind in [
        ErrorKind::Timeout,
        ErrorKind::ConnectionError,
        ErrorKind::RemoteError,
        ErrorKind::MalformedResponse,
        ErrorKind::UnknownError,
    ] {
        let (pipeline, provider) = scripted_pipeline(vec![
            InferenceOutcome::failure(kind, "scripted"),
            InferenceOutcome::success("never used"),
        ]);

        let result = pipeline.run("Hello world", "french").await;

        assert_eq!(provider.call_count(), 1, "{:?} must short-circuit", kind);
        assert_eq!(result.translation, None);
        assert_eq!(result.critique, None);
        assert_eq!(result.error_kind, Some(kind));
        assert!(!result.error.unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_run_evaluationConnectionFailure_shouldKeepTranslation() {
    let (pipeline, provider) = scripted_pipeline(vec![
        InferenceOutcome::success("Le soleil brille."),
        InferenceOutcome::failure(ErrorKind::ConnectionError, "connection refused"),
    ]);

    let result = pipeline.run("The sun is shining.", "french").await;

    assert_eq!(provider.call_count(), 2);
    assert_eq!(result.translation.as_deref(), Some("Le soleil brille."));
    assert_eq!(result.critique, None);
    assert!(!result.error.as_deref().unwrap_or_default().is_empty());
    assert_eq!(result.error_kind, Some(ErrorKind::ConnectionError));
    assert_eq!(result.failed_stage, Some(PipelineStage::Evaluating));
    assert_eq!(result.stage(), PipelineStage::Failed);
}

#[tokio::test]
async fn test_run_shouldFeedTranslationIntoJudgePrompt() {
    let (pipeline, provider) = scripted_pipeline(vec![
        InferenceOutcome::success("Le soleil brille."),
        InferenceOutcome::success("Rating: 9/10"),
    ]);

    let result = pipeline.run("The sun is shining.", "french").await;
    assert!(result.is_success());

    let tracker = provider.tracker();
    let tracker = tracker.lock().unwrap();
    assert_eq!(tracker.call_count, 2);

    let translate = &tracker.requests[0];
    assert_eq!(translate.role, ModelRole::Translator);
    assert_eq!(translate.model_name, TRANSLATION_MODEL);
    assert!(translate.prompt.contains("The sun is shining."));
    assert!(translate.prompt.contains("French"), "Display name expected in prompt");

    let judge = &tracker.requests[1];
    assert_eq!(judge.role, ModelRole::Judge);
    assert_eq!(judge.model_name, JUDGE_MODEL);
    assert!(judge.prompt.contains("The sun is shining."));
    assert!(judge.prompt.contains("Le soleil brille."));
}

#[tokio::test]
async fn test_run_unsupportedLanguage_shouldMakeNoCalls() {
    let (pipeline, provider) = scripted_pipeline(vec![]);

    let result = pipeline.run("Hello world", "klingon").await;

    assert_eq!(provider.call_count(), 0);
    assert!(result.error.unwrap().to_lowercase().contains("language"));
}

#[tokio::test]
async fn test_run_inMockModeFromConfig_shouldReturnCannedResults() {
    init_logging();
    let config = Config {
        enable_mocks: true,
        ..Config::default()
    };
    let pipeline = TranslationCriticPipeline::from_config(&config).unwrap();

    let result = pipeline.run("Солнце светит.", "english").await;

    assert_eq!(result.translation.as_deref(), Some(MOCK_TRANSLATION));
    assert_eq!(result.critique.as_deref(), Some(MOCK_CRITIQUE));
    assert_eq!(result.error, None);
}

#[tokio::test]
async fn test_pipelineResult_serialize_shouldExposeAllFields() {
    let (pipeline, _provider) = scripted_pipeline(vec![
        InferenceOutcome::success("Hallo Welt"),
        InferenceOutcome::failure(ErrorKind::Timeout, "slow"),
    ]);

    let result = pipeline.run("Hello world", "german").await;
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["translation"], "Hallo Welt");
    assert_eq!(value["critique"], serde_json::Value::Null);
    assert_eq!(value["error_kind"], "timeout");
    assert_eq!(value["failed_stage"], "evaluating");
}
