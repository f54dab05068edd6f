//! Cross-cutting, shared constants.
//!
//! Matching and scoring thresholds live here so the store, the scorer and their tests agree on
//! a single value.

/// Shortest candidate name (in characters) that may match inside free text.
///
/// Names below this length ("Ed", "Rui", ...) collide with ordinary words too often.
pub const MIN_NAME_LEN: usize = 4;

/// Responses shorter than this (in characters) are eligible for the "unanswered" verdict.
pub const SHORT_RESPONSE_LEN: usize = 50;

/// Lower-cased phrases that mark a short response as a "no data" refusal.
pub const NEGATIVE_PHRASES: &[&str] = &[
    "veri bulunamadı",
    "bilgi yok",
    "bilinmiyor",
    "eşleşen oyuncu yok",
    "üzgünüm",
];

/// Placeholder for a missing cell in a player record.
pub const NOT_AVAILABLE: &str = "N/A";

/// Unit appended to a present price value.
pub const PRICE_UNIT: &str = "M€";

/// Context handed to the evaluation log when no player could be resolved.
pub const NO_DATA_CONTEXT: &str = "Veri bulunamadı";

/// Response recorded for a backend when no player could be resolved for a test question.
pub const NO_DATA_RESPONSE: &str = "Veri bulunamadı.";

/// Intent assumed when the test dataset has no intent cell.
pub const DEFAULT_INTENT: &str = "General";

/// Number of decimal places used when metrics are displayed or written.
pub const DISPLAY_DECIMALS: i32 = 2;

/// Rounds `value` to [`DISPLAY_DECIMALS`] places.
pub fn round_for_display(value: f64) -> f64 {
    let factor = 10f64.powi(DISPLAY_DECIMALS);
    (value * factor).round() / factor
}
