/*!
 * Prompt templates for translation and translation judging.
 *
 * Templates carry the instruction text only. User-supplied text is appended
 * after rendering so that anything inside it, including brace sequences that
 * look like placeholders, reaches the model verbatim.
 */

/// Instruction template with a `{target_language}` placeholder.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// Instruction for the translation stage.
    pub const TRANSLATOR: &'static str = r#"You are a professional translator.
Translate the text below into {target_language}.

## Requirements
- Preserve the meaning, tone and formatting of the original
- Keep names, numbers and line breaks intact
- Respond with the translation only, without explanations or notes"#;

    /// Instruction for the evaluation stage.
    pub const JUDGE: &'static str = r#"You are an expert translation critic.
Evaluate the quality of the translation below against the original text.

## Criteria
- Accuracy: is the meaning fully and correctly conveyed?
- Fluency: does the translation read naturally?
- Style: are tone and register preserved?

## Output
Start with a line of the form "Rating: N/10", then give a short justification
and, if needed, concrete suggestions for improvement."#;

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the translator template.
    pub fn translator() -> Self {
        Self::new(Self::TRANSLATOR)
    }

    /// Create the judge template.
    pub fn judge() -> Self {
        Self::new(Self::JUDGE)
    }

    /// Render the template with the given target language.
    pub fn render(&self, target_language: &str) -> String {
        self.template.replace("{target_language}", target_language)
    }
}

/// Build the prompt for the translation stage.
///
/// `target_language` is the human-readable name that ends up in the prompt.
pub fn build_translation_prompt(text: &str, target_language: &str) -> String {
    format!(
        "{}\n\n### Text to translate\n{}",
        PromptTemplate::translator().render(target_language),
        text
    )
}

/// Build the prompt for the evaluation stage.
pub fn build_evaluation_prompt(original: &str, translated: &str) -> String {
    format!(
        "{}\n\n### Original text\n{}\n\n### Translation\n{}",
        PromptTemplate::judge().render(""),
        original,
        translated
    )
}
