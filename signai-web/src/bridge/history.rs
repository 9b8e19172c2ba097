//! Conversation history and translation entry points
//!
//! The page performs the actual fetch. Rust builds the request URL from
//! the current sentence and judges the response before logging it.

use wasm_bindgen::prelude::*;

use crate::sentence::{
    evaluate, export_filename as filename_for, EntryKind, TranslationOutcome, TranslationRequest,
    TRANSLATION_ENDPOINT,
};

use super::classifier_integration::with_state;
use super::clock;

#[wasm_bindgen]
pub fn clear_history() {
    with_state(|state| state.history.clear());
}

/// History entries as JSON: [{ text, timestamp, type }]
#[wasm_bindgen]
pub fn get_history_json() -> Result<String, JsValue> {
    with_state(|state| state.history.to_json()).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Plain-text conversation export
#[wasm_bindgen]
pub fn export_history() -> Result<String, JsValue> {
    with_state(|state| state.history.export()).map_err(JsValue::from)
}

/// File name for a download started now
#[wasm_bindgen]
pub fn export_filename() -> String {
    filename_for(clock::epoch_ms())
}

/// MyMemory URL translating the current sentence into `target`
#[wasm_bindgen]
pub fn translation_url(target: &str) -> Result<String, JsValue> {
    let request = current_request(target)?;
    Ok(format!(
        "{}?q={}&langpair={}",
        TRANSLATION_ENDPOINT,
        String::from(js_sys::encode_uri_component(request.text())),
        String::from(js_sys::encode_uri_component(&request.language_pair())),
    ))
}

/// Judge the service's JSON answer. Returns the text for the translation
/// panel; good translations are also added to the history.
#[wasm_bindgen]
pub fn accept_translation(target: &str, response_json: &str) -> Result<String, JsValue> {
    let request = current_request(target)?;
    let outcome = evaluate(&request, response_json).map_err(|err| {
        web_sys::console::error_1(&format!("Translation error: {}", err).into());
        JsValue::from(err)
    })?;

    if let TranslationOutcome::Translated(text) = &outcome {
        let line = request.history_line(text);
        let timestamp = clock::display_time();
        with_state(|state| state.history.push(line, timestamp, EntryKind::Translation));
    }
    Ok(outcome.message().to_string())
}

fn current_request(target: &str) -> Result<TranslationRequest, JsValue> {
    let sentence = with_state(|state| state.transcript.sentence().to_string());
    TranslationRequest::new(&sentence, target).map_err(JsValue::from)
}
