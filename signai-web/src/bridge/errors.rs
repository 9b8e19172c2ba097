//! Error conversions at the JS boundary

use wasm_bindgen::JsValue;

use crate::sentence::{ExportError, TranscriptError, TranslationError};

use super::landmarks::FrameError;

impl From<FrameError> for JsValue {
    fn from(err: FrameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<TranscriptError> for JsValue {
    fn from(err: TranscriptError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<ExportError> for JsValue {
    fn from(err: ExportError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<TranslationError> for JsValue {
    fn from(err: TranslationError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
