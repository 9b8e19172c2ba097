//! Two-gesture sentence templates

use crate::classifier::Gesture;

/// (first, second) -> sentence. Order matters: (A, B) and (B, A) are different.
pub const TEMPLATES: [(Gesture, Gesture, &str); 7] = [
    (Gesture::Hello, Gesture::You, "Hello, how are you?"),
    (Gesture::Help, Gesture::You, "Do you need help?"),
    (Gesture::Yes, Gesture::Help, "Yes, I need help."),
    (Gesture::No, Gesture::Help, "I don't need help."),
    (Gesture::ThankYou, Gesture::You, "Thank you very much!"),
    (Gesture::Good, Gesture::You, "You are good."),
    (Gesture::Stop, Gesture::You, "Please stop!"),
];

/// Template sentence for an ordered pair, if one exists
pub fn lookup(first: Gesture, second: Gesture) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(a, b, _)| *a == first && *b == second)
        .map(|(_, _, sentence)| *sentence)
}

/// Sentence for a gesture history.
///
/// Uses the template for the last two gestures when one exists, otherwise
/// the last gesture's word. None for an empty history.
pub fn assemble(history: &[Gesture]) -> Option<String> {
    let last = *history.last()?;

    let template = match history {
        [.., first, second] => lookup(*first, *second),
        _ => None,
    };

    Some(template.map_or_else(|| last.as_str().to_string(), str::to_string))
}
