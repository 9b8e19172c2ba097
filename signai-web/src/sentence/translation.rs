//! Translation request validation and response quality check
//!
//! The HTTP call itself is made by the page against the MyMemory API.
//! This module decides what to ask for and whether the answer is usable.

use serde::Deserialize;
use thiserror::Error;

/// MyMemory endpoint, query parameters are appended by the caller
pub const TRANSLATION_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

/// Source language of every assembled sentence
pub const SOURCE_LANGUAGE: &str = "en";

/// Phrases the service returns when it falls back to unrelated memory hits
const GARBAGE_KEYWORDS: [&str; 4] = ["delhi metro", "swagat", "welcome to", "station"];

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("No sentence to translate!")]
    EmptySentence,

    #[error("No target language selected")]
    MissingTarget,

    #[error("Malformed translation response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    response_status: serde_json::Value,
    #[serde(default)]
    response_data: Option<ApiResponseData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponseData {
    #[serde(default)]
    translated_text: Option<String>,
}

/// A validated translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
    target: String,
}

impl TranslationRequest {
    pub fn new(sentence: &str, target: &str) -> Result<Self, TranslationError> {
        let text = sentence.trim();
        if text.is_empty() {
            return Err(TranslationError::EmptySentence);
        }
        let target = target.trim();
        if target.is_empty() {
            return Err(TranslationError::MissingTarget);
        }
        Ok(Self {
            text: text.to_string(),
            target: target.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// "en|<target>" as expected by the `langpair` parameter
    pub fn language_pair(&self) -> String {
        format!("{}|{}", SOURCE_LANGUAGE, self.target)
    }

    /// Label used when logging the result, e.g. "[ES] Hola"
    pub fn history_line(&self, translated: &str) -> String {
        format!("[{}] {}", self.target.to_uppercase(), translated)
    }
}

/// Verdict on a translation response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Translated(String),
    /// Service answered but the text is an echo or unrelated boilerplate
    PoorQuality,
    /// Non-200 status or no translated text
    ServiceError,
}

impl TranslationOutcome {
    /// Text for the translation panel
    pub fn message(&self) -> &str {
        match self {
            TranslationOutcome::Translated(text) => text,
            TranslationOutcome::PoorQuality => {
                "⚠️ Translation quality poor. Try Google Translate for better results."
            }
            TranslationOutcome::ServiceError => "Translation service error. Please try again.",
        }
    }
}

/// Parse and judge a raw JSON response for `request`
pub fn evaluate(
    request: &TranslationRequest,
    response_json: &str,
) -> Result<TranslationOutcome, TranslationError> {
    let response: ApiResponse = serde_json::from_str(response_json)?;

    let translated = match (response.response_status.as_u64(), response.response_data) {
        (Some(200), Some(ApiResponseData { translated_text: Some(text) })) if !text.is_empty() => text,
        _ => return Ok(TranslationOutcome::ServiceError),
    };

    let lower = translated.to_lowercase();
    let has_garbage = GARBAGE_KEYWORDS.iter().any(|keyword| lower.contains(keyword));
    if has_garbage || lower == request.text.to_lowercase() {
        return Ok(TranslationOutcome::PoorQuality);
    }

    Ok(TranslationOutcome::Translated(translated))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TranslationRequest {
        TranslationRequest::new("Hello, how are you?", "es").unwrap()
    }

    #[test]
    fn test_request_validation() {
        assert!(matches!(
            TranslationRequest::new("  ", "es"),
            Err(TranslationError::EmptySentence)
        ));
        assert!(matches!(
            TranslationRequest::new("Yes", ""),
            Err(TranslationError::MissingTarget)
        ));
        let req = request();
        assert_eq!(req.language_pair(), "en|es");
        assert_eq!(req.history_line("Hola"), "[ES] Hola");
    }

    #[test]
    fn test_good_translation() {
        let json = r#"{"responseData":{"translatedText":"Hola, ¿cómo estás?","match":1},"responseStatus":200}"#;
        let outcome = evaluate(&request(), json).unwrap();
        assert_eq!(outcome, TranslationOutcome::Translated("Hola, ¿cómo estás?".into()));
    }

    #[test]
    fn test_echo_is_poor_quality() {
        let json = r#"{"responseData":{"translatedText":"HELLO, HOW ARE YOU?"},"responseStatus":200}"#;
        assert_eq!(evaluate(&request(), json).unwrap(), TranslationOutcome::PoorQuality);
    }

    #[test]
    fn test_garbage_keyword_is_poor_quality() {
        let json = r#"{"responseData":{"translatedText":"Welcome to Delhi Metro"},"responseStatus":200}"#;
        assert_eq!(evaluate(&request(), json).unwrap(), TranslationOutcome::PoorQuality);
    }

    #[test]
    fn test_service_error() {
        let json = r#"{"responseData":{"translatedText":"QUOTA EXCEEDED"},"responseStatus":429}"#;
        assert_eq!(evaluate(&request(), json).unwrap(), TranslationOutcome::ServiceError);

        let json = r#"{"responseStatus":"403"}"#;
        assert_eq!(evaluate(&request(), json).unwrap(), TranslationOutcome::ServiceError);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            evaluate(&request(), "<html>"),
            Err(TranslationError::MalformedResponse(_))
        ));
    }
}
