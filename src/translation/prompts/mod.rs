/*!
 * Prompt construction for the translate and evaluate stages.
 *
 * Both builders are pure string templating and do no validation; callers
 * pass text that already went through the input validator.
 */

pub mod templates;

// Re-export main types
pub use templates::{build_evaluation_prompt, build_translation_prompt, PromptTemplate};
