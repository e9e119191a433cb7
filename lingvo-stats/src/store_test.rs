//! Unit tests for StatsStore.
//!
//! Covers recording, windowed unique-user queries, load/merge/backfill, and
//! atomic persistence round-trips.

use std::fs;

use chrono::{Duration, Utc};
use lingvo_core::{ContentKind, Direction, User};
use tempfile::TempDir;

use crate::store::StatsStore;

fn user(id: i64, username: Option<&str>, first: Option<&str>, last: Option<&str>) -> User {
    User {
        id,
        username: username.map(String::from),
        first_name: first.map(String::from),
        last_name: last.map(String::from),
    }
}

fn day_str(days_ago: i64) -> String {
    (Utc::now().date_naive() - Duration::days(days_ago))
        .format("%Y-%m-%d")
        .to_string()
}

#[test]
fn test_fresh_store_is_seeded() {
    let dir = TempDir::new().expect("tempdir");
    let store = StatsStore::open(dir.path().join("stats.json"));

    let s = store.snapshot();
    assert_eq!(s.messages_total, 0);
    assert_eq!(s.by_type.get("text"), Some(&0));
    assert_eq!(s.by_type.get("video_note"), Some(&0));
    assert_eq!(s.translations.get("ru_to_en"), Some(&0));
    assert!(s.users.is_empty());
    assert!(s.daily.is_empty());
}

#[test]
fn test_record_event_updates_all_counters_together() {
    let dir = TempDir::new().expect("tempdir");
    let mut store = StatsStore::open(dir.path().join("stats.json"));

    let sender = user(42, Some("anna"), Some("Anna"), Some("Petrova"));
    store.record_event(&sender, ContentKind::Text);
    store.record_event(&sender, ContentKind::Photo);

    let s = store.snapshot();
    assert_eq!(s.messages_total, 2);
    assert_eq!(s.by_type.get("text"), Some(&1));
    assert_eq!(s.by_type.get("photo"), Some(&1));
    assert_eq!(s.users.get("42"), Some(&2));
    assert_eq!(s.usernames.get("42").map(String::as_str), Some("anna"));
    assert_eq!(
        s.names.get("42").map(String::as_str),
        Some("Anna Petrova")
    );
    let today = s.daily.get(&day_str(0)).expect("today's bucket");
    assert_eq!(today.users.get("42"), Some(&2));

    // messages_total stays the sum of by_type over the object's lifetime.
    assert_eq!(s.messages_total, s.by_type.values().sum::<u64>());
}

#[test]
fn test_record_event_overwrites_identity_with_latest() {
    let dir = TempDir::new().expect("tempdir");
    let mut store = StatsStore::open(dir.path().join("stats.json"));

    store.record_event(&user(7, Some("old"), Some("Old"), None), ContentKind::Text);
    store.record_event(&user(7, None, Some("New"), None), ContentKind::Text);

    let s = store.snapshot();
    assert_eq!(s.usernames.get("7").map(String::as_str), Some(""));
    assert_eq!(s.names.get("7").map(String::as_str), Some("New"));
}

#[test]
fn test_record_translation() {
    let dir = TempDir::new().expect("tempdir");
    let mut store = StatsStore::open(dir.path().join("stats.json"));

    store.record_translation(Direction::RuToEn);
    store.record_translation(Direction::RuToEn);
    store.record_translation(Direction::Other);

    let s = store.snapshot();
    assert_eq!(s.translations.get("ru_to_en"), Some(&2));
    assert_eq!(s.translations.get("en_to_ru"), Some(&0));
    assert_eq!(s.translations.get("other"), Some(&1));
}

#[test]
fn test_unique_users_zero_and_negative_days() {
    let dir = TempDir::new().expect("tempdir");
    let mut store = StatsStore::open(dir.path().join("stats.json"));
    store.record_event(&user(1, None, Some("A"), None), ContentKind::Text);

    assert_eq!(store.unique_users_in_range(0), 0);
    assert_eq!(store.unique_users_in_range(-5), 0);
}

#[test]
fn test_unique_users_windows_and_monotonicity() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("stats.json");

    // Build a file with buckets 0, 6 and 29 days back plus one junk key.
    let raw = format!(
        r#"{{
            "daily": {{
                "{today}": {{ "users": {{ "1": 3 }} }},
                "{week}": {{ "users": {{ "2": 1 }} }},
                "{month}": {{ "users": {{ "3": 1, "1": 1 }} }},
                "not-a-date": {{ "users": {{ "99": 1 }} }}
            }}
        }}"#,
        today = day_str(0),
        week = day_str(6),
        month = day_str(29),
    );
    fs::write(&path, raw).expect("write fixture");

    let store = StatsStore::open(&path);
    assert_eq!(store.unique_users_in_range(1), 1);
    assert_eq!(store.unique_users_in_range(7), 2);
    assert_eq!(store.unique_users_in_range(30), 3);

    let mut previous = 0;
    for days in 0..40 {
        let count = store.unique_users_in_range(days);
        assert!(count >= previous, "not monotone at days={}", days);
        previous = count;
    }
}

#[test]
fn test_persist_and_reload_round_trip() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("stats.json");

    let mut store = StatsStore::open(&path);
    store.record_event(&user(5, Some("bob"), Some("Bob"), None), ContentKind::Sticker);
    store.record_translation(Direction::EnToRu);
    store.try_persist().expect("persist");

    let reloaded = StatsStore::open(&path);
    assert_eq!(reloaded.snapshot(), store.snapshot());
}

#[test]
fn test_persist_is_idempotent_byte_for_byte() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("stats.json");

    let mut store = StatsStore::open(&path);
    store.record_event(&user(5, Some("bob"), None, None), ContentKind::Voice);
    store.try_persist().expect("first persist");
    let first = fs::read(&path).expect("read first");
    store.try_persist().expect("second persist");
    let second = fs::read(&path).expect("read second");
    assert_eq!(first, second);
}

#[test]
fn test_load_merges_partial_file_and_backfills() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("stats.json");
    fs::write(
        &path,
        r#"{ "messages_total": 12, "by_type": { "text": 10 }, "users": { "1": 12 } }"#,
    )
    .expect("write fixture");

    let store = StatsStore::open(&path);
    let s = store.snapshot();
    assert_eq!(s.messages_total, 12);
    assert_eq!(s.by_type.get("text"), Some(&10));
    // Missing labels and top-level keys are backfilled.
    assert_eq!(s.by_type.get("sticker"), Some(&0));
    assert_eq!(s.translations.get("other"), Some(&0));
    assert!(s.usernames.is_empty());
    assert!(s.daily.is_empty());
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("stats.json");
    fs::write(&path, "{ not json").expect("write fixture");

    let store = StatsStore::open(&path);
    assert_eq!(store.snapshot().messages_total, 0);
    assert_eq!(store.snapshot().by_type.get("text"), Some(&0));
}

#[test]
fn test_pretty_name_fallback_chain() {
    let dir = TempDir::new().expect("tempdir");
    let mut store = StatsStore::open(dir.path().join("stats.json"));

    store.record_event(&user(1, Some("anna"), Some("Anna"), None), ContentKind::Text);
    store.record_event(&user(2, None, Some("Boris"), None), ContentKind::Text);
    store.record_event(&user(3, None, None, None), ContentKind::Text);

    assert_eq!(
        store.pretty_name("1"),
        "<a href=\"https://t.me/anna\">@anna</a>"
    );
    assert_eq!(store.pretty_name("2"), "Boris");
    assert_eq!(store.pretty_name("3"), "ID 3");
    assert_eq!(store.pretty_name("404"), "ID 404");
}
