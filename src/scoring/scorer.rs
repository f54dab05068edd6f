use tracing::debug;

use crate::constants::{NEGATIVE_PHRASES, SHORT_RESPONSE_LEN};

use super::types::{ClassificationLabel, ExpectedValues, Intent};

/// Classifies a generated answer by literal keyword containment.
///
/// A response counts as unanswered only when it is short *and* reads like a "no data" refusal.
/// Everything else is either correct (the keywords the intent asks for are present) or incorrect.
/// A response that quotes an expected keyword while denying it still scores as correct.
pub fn classify(response: &str, expected: &ExpectedValues, intent: &Intent) -> ClassificationLabel {
    let response = response.to_lowercase();

    if is_refusal(&response) {
        return ClassificationLabel::Unanswered;
    }

    let mentions = |keyword: &str| !keyword.is_empty() && response.contains(keyword);

    let is_correct = match intent {
        Intent::AskTeam => mentions(&expected.team),
        Intent::AskPosition => mentions(&expected.position),
        // An empty expected player trivially occurs; only the detail check then applies.
        Intent::AskInfo => {
            response.contains(expected.player.as_str())
                && (response.contains(expected.team.as_str())
                    || response.contains(expected.position.as_str()))
        }
        Intent::Other(_) => mentions(&expected.team) || mentions(&expected.position),
    };

    let label = if is_correct {
        ClassificationLabel::Correct
    } else {
        ClassificationLabel::Incorrect
    };

    debug!(intent = %intent, label = %label, "Classified response");
    label
}

/// `true` for short responses containing a negative-result phrase. Expects lower-cased input.
fn is_refusal(lowered: &str) -> bool {
    lowered.chars().count() < SHORT_RESPONSE_LEN
        && NEGATIVE_PHRASES
            .iter()
            .any(|phrase| lowered.contains(phrase))
}
