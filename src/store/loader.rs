use std::path::Path;

use tracing::debug;

use super::error::{StoreError, StoreResult};
use super::record::{PlayerRecord, PlayerRow};

/// Columns a player dataset must have. The remaining record columns may be absent.
pub const REQUIRED_COLUMNS: &[&str] = &["name", "full_name"];

/// Reads every row of the player CSV at `path`, in file order. Any malformed row fails the load.
pub fn load_players(path: &Path) -> StoreResult<Vec<PlayerRecord>> {
    if !path.exists() {
        return Err(StoreError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let csv_err = |source| StoreError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(csv_err)?;

    let headers = reader.headers().map_err(csv_err)?;
    if let Some(column) = REQUIRED_COLUMNS
        .iter()
        .copied()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        return Err(StoreError::MissingColumn {
            path: path.to_path_buf(),
            column,
        });
    }

    let records = reader
        .deserialize::<PlayerRow>()
        .map(|row| row.map(PlayerRecord::from).map_err(csv_err))
        .collect::<StoreResult<Vec<_>>>()?;

    debug!(path = %path.display(), rows = records.len(), "Parsed player dataset");
    Ok(records)
}
