//! Current sentence shown to the user and handed to speech synthesis

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("No sentence to speak!")]
    NothingToSpeak,
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    sentence: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sentence (commit or preset phrase)
    pub fn set(&mut self, sentence: impl Into<String>) {
        self.sentence = sentence.into();
    }

    pub fn clear(&mut self) {
        self.sentence.clear();
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn is_empty(&self) -> bool {
        self.sentence.trim().is_empty()
    }

    /// Trimmed sentence, or an error if there is nothing to say
    pub fn speakable(&self) -> Result<&str, TranscriptError> {
        match self.sentence.trim() {
            "" => Err(TranscriptError::NothingToSpeak),
            text => Ok(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_not_speakable() {
        let mut transcript = Transcript::new();
        assert_eq!(transcript.speakable(), Err(TranscriptError::NothingToSpeak));
        transcript.set("   ");
        assert_eq!(transcript.speakable(), Err(TranscriptError::NothingToSpeak));
    }

    #[test]
    fn test_set_and_clear() {
        let mut transcript = Transcript::new();
        transcript.set(" Please stop! ");
        assert_eq!(transcript.speakable(), Ok("Please stop!"));
        transcript.clear();
        assert!(transcript.is_empty());
    }
}
