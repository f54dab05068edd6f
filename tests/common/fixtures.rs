//! Test fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use scout::assistant::AppContext;
use scout::backend::{BackendKind, MockBackend};
use scout::store::RecordStore;

/// Player table with an extra ignored column, a blank age cell and a name ("Pedri") that is a
/// prefix of a later row's name ("Pedrinho").
pub const PLAYERS_CSV: &str = "\
name,full_name,age,position,club,league,nationality,price,scraped_at
Pedri,Pedro González López,22,Midfielder,Barcelona,LaLiga,Spain,100.0,2025-01-01
Messi,Lionel Andrés Messi,37,Forward,Inter Miami,MLS,Argentina,25.0,2025-01-01
Kane,Harry Edward Kane,,Forward,Bayern Munich,Bundesliga,England,90.0,2025-01-01
Pedrinho,Pedro Henrique,26,Winger,Zenit,Premier Liga,Brazil,,2025-01-01
";

pub const TEST_DATASET_CSV: &str = "\
question,intent,expected_team,expected_position,expected_player
Pedri hangi takımda oynuyor?,Ask_Team,Barcelona,,Pedri
Messi hangi mevkide oynuyor?,Ask_Position,,Forward,Messi
Harry Edward Kane kimdir?,Ask_Info,Bayern Munich,Forward,Kane
Zidane hangi takımda?,Ask_Team,Real Madrid,,Zidane
";

pub fn write_fixture(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, contents).expect("fixture should be writable");
    path
}

pub fn write_players_csv(dir: &Path) -> PathBuf {
    write_fixture(dir, "players.csv", PLAYERS_CSV)
}

pub fn write_test_dataset(dir: &Path) -> PathBuf {
    write_fixture(dir, "test_dataset.csv", TEST_DATASET_CSV)
}

/// Context over the fixture player table with the given scripted backends.
pub fn mock_context(
    players_path: &Path,
    xai: Arc<MockBackend>,
    gemini: Arc<MockBackend>,
) -> AppContext {
    AppContext::new(RecordStore::load(players_path), xai, gemini)
}

pub fn default_mocks() -> (Arc<MockBackend>, Arc<MockBackend>) {
    (
        Arc::new(MockBackend::new(BackendKind::Xai)),
        Arc::new(MockBackend::new(BackendKind::Gemini)),
    )
}
