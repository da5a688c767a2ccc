/*!
 * # transcritic - Translator & Critic
 *
 * A Rust library that translates a text with a remote text-generation
 * service and then asks the same service to critique the translation.
 *
 * ## Features
 *
 * - Input validation (blank text, length limit, supported languages)
 * - Prompt construction for the translation and evaluation stages
 * - A gateway that classifies every failure instead of raising it
 * - A deterministic mock mode for tests without network access
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `validation`: Input validation
 * - `translation`: The two-stage pipeline:
 *   - `translation::prompts`: Prompt templates
 *   - `translation::gateway`: Mock/live inference gateway
 *   - `translation::pipeline`: Stage orchestration
 * - `providers`: Live HTTP client and mock provider
 * - `language_utils`: Supported-language table and ISO code lookup
 * - `errors`: Error kinds and error types
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod validation;
pub mod translation;
pub mod language_utils;
pub mod providers;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use validation::{InputValidator, ValidationResult};
pub use translation::{InferenceGateway, PipelineResult, PipelineStage, TranslationCriticPipeline};
pub use providers::{InferenceOutcome, InferenceRequest, ModelRole};
pub use errors::{AppError, ConfigError, ErrorKind, InferenceError};
