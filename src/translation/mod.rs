/*!
 * Translation and critique of user text through a remote text-generation service.
 *
 * - `prompts`: Prompt templates and builders for both stages
 * - `gateway`: Single-call wrapper with the mock/live switch
 * - `pipeline`: Validate, translate, evaluate orchestration
 */

// Re-export main types for easier usage
pub use self::gateway::{GatewayMode, InferenceGateway};
pub use self::pipeline::{PipelineResult, PipelineStage, TranslationCriticPipeline};
pub use self::prompts::{build_evaluation_prompt, build_translation_prompt, PromptTemplate};

// Submodules
pub mod gateway;
pub mod pipeline;
pub mod prompts;
