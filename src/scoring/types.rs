use serde::{Deserialize, Serialize};

use super::error::ScoringError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Verdict for one generated answer.
///
/// The serialized codes (`TP`/`FP`/`FN`) are kept for compatibility with existing results files;
/// they are not statistical true/false positives, since there is no negative class.
pub enum ClassificationLabel {
    /// Expected keywords present.
    Correct,
    /// Answered, but the expected keywords are missing.
    Incorrect,
    /// Short "no data" style refusal.
    Unanswered,
}

impl ClassificationLabel {
    pub const ALL: [ClassificationLabel; 3] = [Self::Correct, Self::Incorrect, Self::Unanswered];

    /// Returns the code written to the results file.
    pub fn as_code(&self) -> &'static str {
        match self {
            ClassificationLabel::Correct => "TP",
            ClassificationLabel::Incorrect => "FP",
            ClassificationLabel::Unanswered => "FN",
        }
    }
}

impl std::str::FromStr for ClassificationLabel {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "TP" => Ok(Self::Correct),
            "FP" => Ok(Self::Incorrect),
            "FN" => Ok(Self::Unanswered),
            other => Err(ScoringError::UnknownLabel {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ClassificationLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

impl Serialize for ClassificationLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_code())
    }
}

impl<'de> Deserialize<'de> for ClassificationLabel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// What a test question asks about. Drives which expected keywords must appear.
pub enum Intent {
    AskTeam,
    AskPosition,
    AskInfo,
    /// Any other label; scored by the team-or-position fallback.
    Other(String),
}

impl Intent {
    pub fn as_str(&self) -> &str {
        match self {
            Intent::AskTeam => "Ask_Team",
            Intent::AskPosition => "Ask_Position",
            Intent::AskInfo => "Ask_Info",
            Intent::Other(label) => label,
        }
    }
}

impl From<&str> for Intent {
    fn from(label: &str) -> Self {
        match label {
            "Ask_Team" => Intent::AskTeam,
            "Ask_Position" => Intent::AskPosition,
            "Ask_Info" => Intent::AskInfo,
            other => Intent::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Scoring ground truth for one question. All values are lower-cased and trimmed.
pub struct ExpectedValues {
    pub team: String,
    pub position: String,
    pub player: String,
}

impl ExpectedValues {
    /// Normalizes raw dataset cells (lower-case, trimmed).
    pub fn new(team: &str, position: &str, player: &str) -> Self {
        Self {
            team: normalize(team),
            position: normalize(position),
            player: normalize(player),
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
