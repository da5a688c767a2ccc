use isolang::Language;
use std::collections::BTreeMap;

/// Language utilities for the supported-language table
///
/// Supported target languages are a mapping from a lowercase key (what the
/// user submits, e.g. `"french"`) to a human-readable display name (what the
/// model sees, e.g. `"French"`). The default table is derived from ISO 639-1
/// codes so the display names match the ISO English names.
/// ISO 639-1 codes of the languages supported out of the box
pub const DEFAULT_LANGUAGE_CODES: &[&str] = &["en", "ru", "fr", "de", "es", "it", "zh", "ja"];

/// Build the default supported-language mapping
pub fn default_supported_languages() -> BTreeMap<String, String> {
    languages_from_codes(DEFAULT_LANGUAGE_CODES)
}

/// Build a supported-language mapping from ISO 639-1 codes
///
/// Unknown codes are skipped.
pub fn languages_from_codes(codes: &[&str]) -> BTreeMap<String, String> {
    codes
        .iter()
        .filter_map(|code| Language::from_639_1(&code.trim().to_lowercase()))
        .map(|lang| (lang.to_name().to_lowercase(), lang.to_name().to_string()))
        .collect()
}

/// Get the display name for a supported-language key
///
/// Falls back to the key itself so a prompt never loses the language.
pub fn language_display_name<'a>(key: &'a str, languages: &'a BTreeMap<String, String>) -> &'a str {
    languages.get(key).map(String::as_str).unwrap_or(key)
}

/// Resolve user input to a supported-language key
///
/// Accepts a key in any case, a display name, or an ISO 639-1 / 639-3 code
/// whose English name is supported. Returns `None` if nothing matches.
pub fn resolve_language_key(input: &str, languages: &BTreeMap<String, String>) -> Option<String> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    if languages.contains_key(&normalized) {
        return Some(normalized);
    }

    if let Some((key, _)) = languages.iter().find(|(_, name)| name.to_lowercase() == normalized) {
        return Some(key.clone());
    }

    let iso = match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(&normalized),
        _ => None,
    }?;

    let iso_name = iso.to_name().to_lowercase();
    languages
        .iter()
        .find(|(key, name)| **key == iso_name || name.to_lowercase() == iso_name)
        .map(|(key, _)| key.clone())
}
