/*!
 * Tests for language utilities
 */

use transcritic::language_utils::{
    default_supported_languages, language_display_name, languages_from_codes, resolve_language_key,
};

#[test]
fn test_defaultLanguages_shouldIncludeEnglishAndFrench() {
    let languages = default_supported_languages();

    assert!(languages.contains_key("english"));
    assert!(languages.contains_key("french"));
    assert!(languages.contains_key("russian"));
}

#[test]
fn test_displayName_shouldFallBackToKey() {
    let languages = default_supported_languages();

    assert_eq!(language_display_name("german", &languages), "German");
    assert_eq!(language_display_name("klingon", &languages), "klingon");
}

#[test]
fn test_resolveLanguageKey_withIsoCode_shouldFindKey() {
    let languages = default_supported_languages();

    assert_eq!(resolve_language_key("fr", &languages).as_deref(), Some("french"));
    assert_eq!(resolve_language_key("RU", &languages).as_deref(), Some("russian"));
    assert_eq!(resolve_language_key("jpn", &languages).as_deref(), Some("japanese"));
}

#[test]
fn test_resolveLanguageKey_withUnsupportedIsoCode_shouldReturnNone() {
    let languages = languages_from_codes(&["en"]);

    assert_eq!(resolve_language_key("fr", &languages), None);
    assert_eq!(resolve_language_key("en", &languages).as_deref(), Some("english"));
}

#[test]
fn test_resolveLanguageKey_withCustomKeys_shouldMatchDisplayName() {
    let mut languages = std::collections::BTreeMap::new();
    languages.insert("fr".to_string(), "French".to_string());

    assert_eq!(resolve_language_key("fr", &languages).as_deref(), Some("fr"));
    assert_eq!(resolve_language_key("french", &languages).as_deref(), Some("fr"));
    assert_eq!(resolve_language_key("fra", &languages).as_deref(), Some("fr"));
}
