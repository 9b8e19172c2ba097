//! Gesture vocabulary and per-frame classification result

/// Label shown when no known pose is detected
pub const NO_GESTURE_LABEL: &str = "—";

/// Closed gesture vocabulary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Gesture {
    Ok,
    Hello,
    Help,
    Good,
    You,
    ThankYou,
    Yes,
    No,
    Stop,
    /// No rule matched this frame
    #[default]
    None,
}

impl Gesture {
    /// Every recognizable gesture, sentinel excluded
    pub const VOCABULARY: [Gesture; 9] = [
        Gesture::Ok,
        Gesture::Hello,
        Gesture::Help,
        Gesture::Good,
        Gesture::You,
        Gesture::ThankYou,
        Gesture::Yes,
        Gesture::No,
        Gesture::Stop,
    ];

    /// Word displayed to the user and used in sentences
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::Ok => "OK",
            Gesture::Hello => "Hello",
            Gesture::Help => "Help",
            Gesture::Good => "Good",
            Gesture::You => "You",
            Gesture::ThankYou => "Thank you",
            Gesture::Yes => "Yes",
            Gesture::No => "No",
            Gesture::Stop => "Stop",
            Gesture::None => NO_GESTURE_LABEL,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Gesture::None)
    }
}

/// Result of classifying a single frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Classification {
    pub gesture: Gesture,
    /// 0-100
    pub confidence: u8,
}

impl Classification {
    pub const NONE: Classification = Classification {
        gesture: Gesture::None,
        confidence: 0,
    };

    /// Confidence is clamped to 100; the sentinel always reports 0
    pub fn new(gesture: Gesture, confidence: u8) -> Self {
        if gesture.is_none() {
            return Self::NONE;
        }
        Self {
            gesture,
            confidence: confidence.min(100),
        }
    }
}

/// Coarse bucket used by the page to color the confidence meter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: u8) -> Self {
        match confidence {
            80..=u8::MAX => ConfidenceTier::High,
            50..=79 => ConfidenceTier::Medium,
            _ => ConfidenceTier::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}
