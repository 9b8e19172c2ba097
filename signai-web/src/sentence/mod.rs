//! Sentence module - from committed gestures to text
//!
//! Re-exports only. All logic in submodules.

mod conversation;
mod templates;
mod transcript;
mod translation;

pub use conversation::{
    export_filename, ConversationEntry, ConversationLog, EntryKind, ExportError, EXPORT_HEADER,
};
pub use templates::{assemble, lookup, TEMPLATES};
pub use transcript::{Transcript, TranscriptError};
pub use translation::{
    evaluate, TranslationError, TranslationOutcome, TranslationRequest, SOURCE_LANGUAGE,
    TRANSLATION_ENDPOINT,
};
