//! The persisted stats snapshot.
//!
//! One JSON document, UTF-8, pretty-printed. All maps are `BTreeMap` so
//! serialization is deterministic and repeated persists of an unchanged
//! snapshot produce byte-identical files.

use std::collections::BTreeMap;

use lingvo_core::{ContentKind, Direction};
use serde::{Deserialize, Serialize};

/// Per-UTC-day record of which users sent at least one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBucket {
    #[serde(default)]
    pub users: BTreeMap<String, u64>,
}

/// Full persisted stats state. Every field carries `#[serde(default)]` so a
/// partial file from an older version merges over the defaults key by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default)]
    pub messages_total: u64,
    /// Content-kind label → count. Pre-seeded with zeros for all known labels.
    #[serde(default)]
    pub by_type: BTreeMap<String, u64>,
    /// Direction label → count. Pre-seeded with zeros for all known labels.
    #[serde(default)]
    pub translations: BTreeMap<String, u64>,
    /// User id → all-time message count.
    #[serde(default)]
    pub users: BTreeMap<String, u64>,
    /// User id → latest observed handle (possibly empty).
    #[serde(default)]
    pub usernames: BTreeMap<String, String>,
    /// User id → latest observed display name. Empty means the user has no
    /// name on record; emptiness is the absence flag, there is no sentinel.
    #[serde(default)]
    pub names: BTreeMap<String, String>,
    /// "YYYY-MM-DD" (UTC) → daily bucket.
    #[serde(default)]
    pub daily: BTreeMap<String, DailyBucket>,
}

impl StatsSnapshot {
    /// A fresh snapshot with all known labels seeded at zero.
    pub fn seeded() -> Self {
        let mut snapshot = StatsSnapshot::default();
        snapshot.backfill();
        snapshot
    }

    /// Inserts zero entries for every known content-kind and direction label,
    /// so later lookups never need existence checks. Run once after load.
    pub fn backfill(&mut self) {
        for kind in ContentKind::ALL {
            self.by_type.entry(kind.label().to_string()).or_insert(0);
        }
        for direction in Direction::ALL {
            self.translations
                .entry(direction.label().to_string())
                .or_insert(0);
        }
    }
}
