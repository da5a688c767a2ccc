/*!
 * Tests for input validation
 */

use transcritic::validation::{InputValidator, ValidationResult};
use transcritic::Config;

fn validator() -> InputValidator {
    InputValidator::from_config(&Config::default())
}

#[test]
fn test_validate_emptyText_shouldBeInvalid() {
    let result = validator().validate("", "english");

    assert!(!result.is_valid, "Empty text must not be valid");
    assert!(result.error_message.is_some(), "An error message is expected");
}

#[test]
fn test_validate_whitespaceOnlyText_shouldBeInvalid() {
    for text in ["   ", "\n\t", " \r\n "] {
        let result = validator().validate(text, "english");
        assert!(!result.is_valid, "Whitespace-only text {:?} must not be valid", text);
    }
}

#[test]
fn test_validate_textExceedingMaxLength_shouldMentionLength() {
    let config = Config::default();
    let long_text = "a".repeat(config.max_text_length + 1);

    let result = validator().validate(&long_text, "english");

    assert!(!result.is_valid);
    let message = result.error_message.unwrap().to_lowercase();
    assert!(message.contains("long") && message.contains("length"), "Message was: {}", message);
}

#[test]
fn test_validate_textAtMaxLength_shouldBeValid() {
    let config = Config::default();
    let text = "a".repeat(config.max_text_length);

    assert!(validator().validate(&text, "english").is_valid);
}

#[test]
fn test_validate_unsupportedLanguage_shouldMentionLanguage() {
    let result = validator().validate("Test text", "klingon");

    assert!(!result.is_valid);
    let message = result.error_message.unwrap().to_lowercase();
    assert!(message.contains("language"), "Message was: {}", message);
    assert!(message.contains("klingon"));
}

#[test]
fn test_validate_validInput_shouldPassWithoutMessage() {
    let result = validator().validate("This is a test text", "english");

    assert_eq!(result, ValidationResult::valid());
    assert!(result.is_valid);
    assert_eq!(result.error_message, None);
}

#[test]
fn test_validate_everySupportedLanguage_shouldPass() {
    let config = Config::default();
    let validator = InputValidator::from_config(&config);

    for language in config.supported_languages.keys() {
        assert!(validator.validate("Hello world", language).is_valid, "{} should be supported", language);
    }
}

#[test]
fn test_validate_sameInputTwice_shouldGiveSameResult() {
    let validator = validator();
    assert_eq!(validator.validate("Hi", "nope"), validator.validate("Hi", "nope"));
}
