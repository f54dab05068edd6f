use std::io::Write;

use super::*;
use crate::constants::NOT_AVAILABLE;

fn player(name: &str, full_name: &str, club: &str) -> PlayerRecord {
    PlayerRecord {
        name: name.to_string(),
        full_name: full_name.to_string(),
        age: "30".to_string(),
        position: "Midfielder".to_string(),
        club: club.to_string(),
        league: "Premier League".to_string(),
        nationality: "Belgium".to_string(),
        price: format_price(Some("50.0")),
    }
}

fn sample_store() -> RecordStore {
    RecordStore::from_records(vec![
        player("Ed", "Edson Alvarez", "West Ham"),
        player("Messi", "Lionel Andrés Messi", "Inter Miami"),
        player("De Bruyne", "Kevin De Bruyne", "Manchester City"),
        player("Kevin", "Kevin Schade", "Brentford"),
    ])
}

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_lookup_by_name_is_case_insensitive() {
    let store = sample_store();

    let found = store.lookup_by_name("messi").expect("should match");
    assert_eq!(found.name, "Messi");

    let found = store.lookup_by_name("  MESSI ").expect("should match");
    assert_eq!(found.name, "Messi");
}

#[test]
fn test_lookup_by_name_matches_full_name() {
    let store = sample_store();

    let found = store.lookup_by_name("andrés").expect("should match");
    assert_eq!(found.name, "Messi");
}

#[test]
fn test_lookup_by_name_prefers_first_row() {
    let store = sample_store();

    let found = store.lookup_by_name("kevin").expect("should match");
    assert_eq!(found.full_name, "Kevin De Bruyne");
}

#[test]
fn test_lookup_by_name_empty_query() {
    let store = sample_store();
    assert!(store.lookup_by_name("").is_none());
    assert!(store.lookup_by_name("    ").is_none());
}

#[test]
fn test_lookup_by_name_short_query_never_matches() {
    let store = sample_store();

    for query in ["e", "ed", "ess", " de ", "Kev"] {
        assert!(
            store.lookup_by_name(query).is_none(),
            "query {:?} should not match",
            query
        );
    }
}

#[test]
fn test_lookup_by_name_no_match() {
    let store = sample_store();
    assert!(store.lookup_by_name("Ronaldo").is_none());
}

#[test]
fn test_find_mentioned_player_full_name() {
    let store = sample_store();

    let found = store
        .find_mentioned_player("Kevin De Bruyne is a midfielder")
        .expect("should match");
    assert_eq!(found.full_name, "Kevin De Bruyne");
}

#[test]
fn test_find_mentioned_player_skips_short_names() {
    let store = sample_store();

    // "ed" occurs in "played" but is below the length guard.
    assert!(store.find_mentioned_player("who played yesterday?").is_none());
}

#[test]
fn test_find_mentioned_player_short_text_never_matches() {
    let store = sample_store();

    for text in ["ed", "Ed?", "de"] {
        assert!(store.find_mentioned_player(text).is_none());
    }
}

#[test]
fn test_find_mentioned_player_first_match_wins() {
    let store = sample_store();

    // Row order decides, not specificity: "De Bruyne" (row 3) precedes "Kevin Schade" (row 4).
    let found = store
        .find_mentioned_player("is kevin schade better than de bruyne?")
        .expect("should match");
    assert_eq!(found.full_name, "Kevin De Bruyne");
}

#[test]
fn test_find_mentioned_player_case_insensitive() {
    let store = sample_store();

    let found = store
        .find_mentioned_player("MESSI hangi takımda?")
        .expect("should match");
    assert_eq!(found.club, "Inter Miami");
}

#[test]
fn test_find_mentioned_player_empty_text() {
    let store = sample_store();
    assert!(store.find_mentioned_player("").is_none());
}

#[test]
fn test_unavailable_store_never_matches() {
    let store = RecordStore::unavailable();

    assert!(!store.is_available());
    assert_eq!(store.len(), 0);
    assert!(store.lookup_by_name("messi").is_none());
    assert!(store.find_mentioned_player("messi hangi takımda").is_none());
    assert!(store.resolve("messi").is_none());
}

#[test]
fn test_resolve_falls_back_to_name_lookup() {
    let store = sample_store();

    // "bruy" is not a full name, so only the partial name lookup finds it.
    let found = store.resolve("bruy").expect("should match");
    assert_eq!(found.name, "De Bruyne");
}

#[test]
fn test_format_price() {
    assert_eq!(format_price(Some("85.0")), "85.0 M€");
    assert_eq!(format_price(Some(" 12 ")), "12.0 M€");
    assert_eq!(format_price(Some("75")), "75.0 M€");
    assert_eq!(format_price(Some("85.50")), "85.5 M€");
    assert_eq!(format_price(Some("NaN")), NOT_AVAILABLE);
    assert_eq!(format_price(Some("unknown")), "unknown M€");
    assert_eq!(format_price(Some("")), NOT_AVAILABLE);
    assert_eq!(format_price(None), NOT_AVAILABLE);
}

#[test]
fn test_record_from_row_fills_missing_fields() {
    let record = PlayerRecord::from(PlayerRow {
        name: None,
        full_name: Some("Jude Bellingham".to_string()),
        club: Some("Real Madrid".to_string()),
        ..Default::default()
    });

    assert_eq!(record.name, "");
    assert_eq!(record.full_name, "Jude Bellingham");
    assert_eq!(record.age, NOT_AVAILABLE);
    assert_eq!(record.position, NOT_AVAILABLE);
    assert_eq!(record.club, "Real Madrid");
    assert_eq!(record.price, NOT_AVAILABLE);
}

#[test]
fn test_context_contains_all_fields() {
    let record = player("Messi", "Lionel Andrés Messi", "Inter Miami");
    let context = record.context();

    let value: serde_json::Value = serde_json::from_str(&context).unwrap();
    assert_eq!(value["name"], "Messi");
    assert_eq!(value["club"], "Inter Miami");
    assert_eq!(value["price"], "50.0 M€");
    assert_eq!(value.as_object().unwrap().len(), 8);
}

#[test]
fn test_load_from_csv() {
    let file = write_csv(
        "name,full_name,age,position,club,league,nationality,price,extra\n\
         Messi,Lionel Messi,36,Forward,Inter Miami,MLS,Argentina,35.0,x\n\
         ,Kevin De Bruyne,32,Midfielder,Manchester City,Premier League,Belgium,,y\n",
    );

    let store = RecordStore::load(file.path());

    assert!(store.is_available());
    assert_eq!(store.len(), 2);

    let messi = store.lookup_by_name("messi").unwrap();
    assert_eq!(messi.price, "35.0 M€");
    assert_eq!(messi.nationality, "Argentina");

    let kdb = store.lookup_by_name("de bruyne").unwrap();
    assert_eq!(kdb.name, "");
    assert_eq!(kdb.price, NOT_AVAILABLE);
}

#[test]
fn test_load_missing_file_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::load(&dir.path().join("nope.csv"));

    assert!(!store.is_available());
    assert!(store.lookup_by_name("messi").is_none());
}

#[test]
fn test_load_players_missing_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_players(&dir.path().join("nope.csv")).unwrap_err();

    assert!(matches!(err, StoreError::NotFound { .. }));
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn test_load_empty_table_is_available() {
    let file = write_csv("name,full_name,age,position,club,league,nationality,price\n");
    let store = RecordStore::load(file.path());

    assert!(store.is_available());
    assert!(store.is_empty());
    assert!(store.lookup_by_name("messi").is_none());
}

#[test]
fn test_load_players_requires_name_columns() {
    let file = write_csv("player,club\nMessi,Inter Miami\n");

    let err = load_players(file.path()).unwrap_err();
    assert!(matches!(
        err,
        StoreError::MissingColumn { column: "name", .. }
    ));

    let file = write_csv("name,club\nMessi,Inter Miami\n");
    let err = load_players(file.path()).unwrap_err();
    assert!(matches!(
        err,
        StoreError::MissingColumn {
            column: "full_name",
            ..
        }
    ));
}

#[test]
fn test_load_without_name_columns_is_unavailable() {
    let file = write_csv("player,club\nMessi,Inter Miami\n");

    let store = RecordStore::load(file.path());

    assert!(!store.is_available());
    assert!(store.resolve("Messi nerede oynuyor?").is_none());
}

#[test]
fn test_load_with_only_name_columns() {
    let file = write_csv("name,full_name\nMessi,Lionel Messi\n");

    let store = RecordStore::load(file.path());

    let messi = store.lookup_by_name("messi").expect("should match");
    assert_eq!(messi.club, NOT_AVAILABLE);
    assert_eq!(messi.price, NOT_AVAILABLE);
}
