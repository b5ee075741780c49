//! Integration tests for game persistence
//!
//! These tests cover the join / configure / result lifecycle against the
//! in-memory backend, record expiry, and rejection of malformed records.

use chrono::{DateTime, TimeDelta, Utc};
use janken::{
    Game, GameType, Hand,
    store::{Clock, GameStore, KvStore, MemoryKvStore, StoreConfig, StoreError},
};
use rand::{SeedableRng, rngs::StdRng};
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

type ManualClock = Arc<Mutex<DateTime<Utc>>>;

fn store_with_clock(start: DateTime<Utc>) -> (ManualClock, Arc<MemoryKvStore>, GameStore) {
    let now = Arc::new(Mutex::new(start));
    let handle = Arc::clone(&now);
    let clock: Clock = Arc::new(move || *handle.lock().expect("clock lock"));
    let kv = Arc::new(MemoryKvStore::with_clock(clock));
    let store = GameStore::new(kv.clone());
    (now, kv, store)
}

#[test]
fn test_save_then_get_round_trips_every_field() {
    let store = GameStore::new(Arc::new(MemoryKvStore::new()));
    let mut game = Game::new(GameType::Elimination)
        .with_creator("owner")
        .with_post("post-1")
        .with_language("ja");
    game.set_max_rounds(3).expect("valid max rounds");
    game.add_or_update_hands("p1", &[Some(Hand::Rock), None, Some(Hand::Paper)]);
    game.add_or_update_hands("p2", &[]);

    store.save(&game).expect("save");
    let loaded = store.get(&game.id).expect("get");

    assert_eq!(loaded, game);
    assert_eq!(loaded.created_at, game.created_at);
    let p1 = loaded.participant("p1").expect("p1 stored");
    assert_eq!(p1.hand_at(1), None);
    assert_eq!(p1.hand_at(2), Some(Hand::Paper));
}

#[test]
fn test_resolved_game_round_trips_ranks() {
    let store = GameStore::new(Arc::new(MemoryKvStore::new()));
    let mut game = Game::new(GameType::Elimination);
    game.add_or_update_hands("p1", &[Some(Hand::Rock)]);
    game.add_or_update_hands("p2", &[Some(Hand::Scissors)]);
    game.resolve_with(&mut StdRng::seed_from_u64(5));

    store.save(&game).expect("save");
    let loaded = store.get(&game.id).expect("get");

    assert_eq!(loaded.participant("p1").map(|p| p.rank()), Some(1));
    assert_eq!(loaded.participant("p2").map(|p| p.rank()), Some(2));
}

#[test]
fn test_join_configure_result_lifecycle() {
    let store = GameStore::new(Arc::new(MemoryKvStore::new()));

    let game = Game::new(GameType::Elimination).with_creator("owner");
    let id = game.id.clone();
    store.save(&game).expect("create");

    // Each request is a separate read-modify-write.
    for (user, hand) in [("p1", Hand::Rock), ("p2", Hand::Scissors), ("p3", Hand::Paper)] {
        let mut game = store.get(&id).expect("load for join");
        game.add_or_update_hands(user, &[Some(hand)]);
        store.save(&game).expect("save join");
    }

    let mut game = store.get(&id).expect("load for cancel");
    game.remove_participant("p3");
    store.save(&game).expect("save cancel");

    let mut game = store.get(&id).expect("load for config");
    game.set_max_rounds(1).expect("valid max rounds");
    store.save(&game).expect("save config");

    let mut game = store.take(&id).expect("load for result");
    assert!(game.is_creator("owner"));
    game.ensure_resolvable().expect("two participants");
    let result = game.resolve_with(&mut StdRng::seed_from_u64(9));

    assert_eq!(result[0].user_id, "p1");
    assert_eq!(result[1].user_id, "p2");
    assert!(matches!(store.get(&id), Err(StoreError::NotFound(_))));
}

#[test]
fn test_records_expire_after_one_week() {
    let start = Utc::now();
    let (now, kv, store) = store_with_clock(start);
    let game = Game::default();
    store.save(&game).expect("save");

    let key = store.config().key_for(&game.id);
    assert_eq!(
        kv.expires_at(&key).expect("expires_at"),
        Some(start + TimeDelta::seconds(604_800))
    );

    *now.lock().expect("clock lock") = start + TimeDelta::days(7) - TimeDelta::seconds(1);
    assert!(store.get(&game.id).is_ok());

    *now.lock().expect("clock lock") = start + TimeDelta::days(7);
    assert!(matches!(store.get(&game.id), Err(StoreError::NotFound(_))));
}

#[test]
fn test_saving_again_restarts_expiry() {
    let start = Utc::now();
    let (now, _kv, store) = store_with_clock(start);
    let mut game = Game::default();
    store.save(&game).expect("save");

    *now.lock().expect("clock lock") = start + TimeDelta::days(6);
    game.add_or_update_hands("p1", &[Some(Hand::Rock)]);
    store.save(&game).expect("save again");

    *now.lock().expect("clock lock") = start + TimeDelta::days(10);
    assert!(store.get(&game.id).is_ok());
}

#[test]
fn test_configured_expiry() {
    let start = Utc::now();
    let now = Arc::new(Mutex::new(start));
    let handle = Arc::clone(&now);
    let clock: Clock = Arc::new(move || *handle.lock().expect("clock lock"));
    let kv = Arc::new(MemoryKvStore::with_clock(clock));
    let config = StoreConfig {
        expiry_secs: 60,
        ..StoreConfig::default()
    };
    let store = GameStore::with_config(kv, config);
    let game = Game::default();
    store.save(&game).expect("save");

    *now.lock().expect("clock lock") = start + TimeDelta::seconds(61);
    assert!(matches!(store.get(&game.id), Err(StoreError::NotFound(_))));
}

fn put_raw(kv: &MemoryKvStore, id: &str, record: &serde_json::Value) {
    let bytes = serde_json::to_vec(record).expect("record serializes");
    kv.set_with_expiry(&format!("janken_{id}"), &bytes, Duration::from_secs(60))
        .expect("set");
}

#[test]
fn test_unknown_game_type_is_decode_error() {
    let kv = Arc::new(MemoryKvStore::new());
    let store = GameStore::new(kv.clone());
    let mut record = serde_json::to_value(Game::default()).expect("game serializes");
    record["game_type"] = serde_json::json!("tic_tac_toe");
    put_raw(&kv, "g1", &record);

    assert!(matches!(store.get("g1"), Err(StoreError::Decode(_))));
}

#[test]
fn test_legacy_game_type_tag_decodes() {
    let kv = Arc::new(MemoryKvStore::new());
    let store = GameStore::new(kv.clone());
    let mut record = serde_json::to_value(Game::default()).expect("game serializes");
    record["game_type"] = serde_json::json!("JankenGameImpl1");
    put_raw(&kv, "g1", &record);

    let game = store.get("g1").expect("legacy tag decodes");
    assert_eq!(game.game_type, GameType::Elimination);

    // Saving again writes the current tag.
    store.save(&game).expect("save");
    let bytes = kv
        .get(&store.config().key_for(&game.id))
        .expect("get")
        .expect("record present");
    let saved: serde_json::Value = serde_json::from_slice(&bytes).expect("record is json");
    assert_eq!(saved["game_type"], "elimination");
}

#[test]
fn test_missing_game_type_is_decode_error() {
    let kv = Arc::new(MemoryKvStore::new());
    let store = GameStore::new(kv.clone());
    let mut record = serde_json::to_value(Game::default()).expect("game serializes");
    record
        .as_object_mut()
        .expect("record is an object")
        .remove("game_type");
    put_raw(&kv, "g1", &record);

    assert!(matches!(store.get("g1"), Err(StoreError::Decode(_))));
}

#[test]
fn test_empty_object_is_decode_error() {
    let kv = Arc::new(MemoryKvStore::new());
    let store = GameStore::new(kv.clone());
    put_raw(&kv, "g1", &serde_json::json!({}));

    let err = store.get("g1").expect_err("empty record");
    assert!(matches!(err, StoreError::Decode(_)));
    assert!(err.is_missing());
}

#[test]
fn test_hand_record_format() {
    let kv = Arc::new(MemoryKvStore::new());
    let store = GameStore::new(kv.clone());
    let record = serde_json::json!({
        "id": "g1",
        "created_at": 1_700_000_000_000_i64,
        "post_id": "post",
        "creator": "owner",
        "max_rounds": 2,
        "participants": [
            {"user_id": "p1", "hands": ["rock", "", "", "", "", "", "", "", "", ""], "rank": 0},
            {"user_id": "p2", "hands": ["scissors", "paper"], "rank": 0}
        ],
        "language": "en",
        "game_type": "elimination"
    });
    put_raw(&kv, "g1", &record);

    let game = store.get("g1").expect("well-formed record");
    assert_eq!(game.short_id(), "g1");
    assert_eq!(game.created_at.timestamp_millis(), 1_700_000_000_000);
    assert_eq!(game.max_rounds(), 2);
    let p2 = game.participant("p2").expect("p2 stored");
    assert_eq!(p2.hands().len(), janken::MAX_HANDS);
    assert_eq!(p2.hand_at(1), Some(Hand::Paper));
}
