use serde::{Deserialize, Serialize};

use crate::constants::{NOT_AVAILABLE, PRICE_UNIT};

/// Raw CSV row as it appears in the player dataset.
///
/// Extra columns are ignored; absent or blank cells deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub club: Option<String>,
    #[serde(default)]
    pub league: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

/// Immutable presentation record for one player.
///
/// Every field is display-ready: missing cells are `"N/A"` (names are empty instead) and the
/// price carries its unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    pub name: String,
    pub full_name: String,
    pub age: String,
    pub position: String,
    pub club: String,
    pub league: String,
    pub nationality: String,
    pub price: String,
}

impl PlayerRecord {
    /// Renders the record as the context string handed to a generation backend.
    pub fn context(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }

    /// Returns `true` if `text` (already lower-cased) mentions this player by a name long enough
    /// to be trusted.
    pub(crate) fn is_mentioned_in(&self, lowered_text: &str, min_len: usize) -> bool {
        [&self.name, &self.full_name].into_iter().any(|candidate| {
            let candidate = candidate.to_lowercase();
            candidate.chars().count() >= min_len && lowered_text.contains(&candidate)
        })
    }

    /// Returns `true` if either name contains `lowered_query` as a substring.
    pub(crate) fn name_contains(&self, lowered_query: &str) -> bool {
        self.name.to_lowercase().contains(lowered_query)
            || self.full_name.to_lowercase().contains(lowered_query)
    }
}

impl From<PlayerRow> for PlayerRecord {
    fn from(row: PlayerRow) -> Self {
        Self {
            name: row.name.unwrap_or_default(),
            full_name: row.full_name.unwrap_or_default(),
            age: or_not_available(row.age),
            position: or_not_available(row.position),
            club: or_not_available(row.club),
            league: or_not_available(row.league),
            nationality: or_not_available(row.nationality),
            price: format_price(row.price.as_deref()),
        }
    }
}

/// Formats a raw price cell as `"<value> M€"`, or `"N/A"` when blank.
///
/// Numeric cells are printed as floats (`75` becomes `75.0`). Other text is kept as-is.
pub fn format_price(raw: Option<&str>) -> String {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };

    match value.parse::<f64>() {
        Ok(number) if number.is_nan() => NOT_AVAILABLE.to_string(),
        Ok(number) => format!("{:?} {}", number, PRICE_UNIT),
        Err(_) => format!("{} {}", value, PRICE_UNIT),
    }
}

fn or_not_available(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
