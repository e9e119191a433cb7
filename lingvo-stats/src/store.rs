//! StatsStore: the process-wide counters object.
//!
//! Constructed once at startup (loads from disk or seeds defaults), mutated on
//! every processed message, persisted write-through after each mutation via a
//! temp-file-plus-rename so a crash mid-write never corrupts the existing file.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate, Utc};
use lingvo_core::{ContentKind, Direction, User};
use tempfile::NamedTempFile;
use tracing::warn;

use crate::error::StatsError;
use crate::snapshot::StatsSnapshot;

pub struct StatsStore {
    path: PathBuf,
    snapshot: StatsSnapshot,
}

impl StatsStore {
    /// Opens the store at `path`. A missing file seeds defaults; an unreadable
    /// or unparseable file is logged and replaced with defaults on the next
    /// persist (stats are best-effort, never fatal).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let snapshot = match Self::load(&path) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(
                    error = %e,
                    path = %path.display(),
                    "failed to load stats snapshot, using defaults"
                );
                StatsSnapshot::seeded()
            }
        };
        Self { path, snapshot }
    }

    fn load(path: &Path) -> Result<StatsSnapshot, StatsError> {
        if !path.exists() {
            return Ok(StatsSnapshot::seeded());
        }
        let raw = fs::read_to_string(path)?;
        let mut snapshot: StatsSnapshot = serde_json::from_str(&raw)?;
        // Keys an older file may be missing are merged in by serde defaults;
        // label maps still need their zero entries.
        snapshot.backfill();
        Ok(snapshot)
    }

    /// Read access for report builders and tests.
    pub fn snapshot(&self) -> &StatsSnapshot {
        &self.snapshot
    }

    fn today_str() -> String {
        Utc::now().format("%Y-%m-%d").to_string()
    }

    /// Records one processed message: bumps the total, the content-kind
    /// counter (unknown labels are created at zero), the sender's all-time
    /// count, overwrites the sender's handle/display name with the latest
    /// observed values, and bumps today's daily bucket. One logical step, so
    /// `messages_total` never diverges from the other counters.
    pub fn record_event(&mut self, user: &User, kind: ContentKind) {
        let s = &mut self.snapshot;
        s.messages_total += 1;
        *s.by_type.entry(kind.label().to_string()).or_insert(0) += 1;

        let uid = user.id.to_string();
        *s.users.entry(uid.clone()).or_insert(0) += 1;
        s.usernames.insert(
            uid.clone(),
            user.username.as_deref().unwrap_or("").trim().to_string(),
        );
        s.names.insert(uid.clone(), user.display_name());

        let bucket = s.daily.entry(Self::today_str()).or_default();
        *bucket.users.entry(uid).or_insert(0) += 1;
    }

    /// Records one successful translation for the given direction.
    pub fn record_translation(&mut self, direction: Direction) {
        *self
            .snapshot
            .translations
            .entry(direction.label().to_string())
            .or_insert(0) += 1;
    }

    /// Number of distinct users seen in the last `days` UTC days, today
    /// inclusive. `days <= 0` is 0. Daily keys that do not parse as dates are
    /// skipped, not errors.
    pub fn unique_users_in_range(&self, days: i64) -> usize {
        if days <= 0 {
            return 0;
        }
        let today = Utc::now().date_naive();
        let cutoff = today - Duration::days(days - 1);
        let mut unique: HashSet<&str> = HashSet::new();
        for (day, bucket) in &self.snapshot.daily {
            match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
                Ok(date) if cutoff <= date && date <= today => {
                    unique.extend(bucket.users.keys().map(String::as_str));
                }
                _ => {}
            }
        }
        unique.len()
    }

    /// Clickable HTML handle if one is on record, else the display name, else
    /// an `ID <uid>` fallback.
    pub fn pretty_name(&self, uid: &str) -> String {
        let username = self
            .snapshot
            .usernames
            .get(uid)
            .map(|s| s.trim())
            .unwrap_or("");
        if !username.is_empty() {
            return format!("<a href=\"https://t.me/{0}\">@{0}</a>", username);
        }
        let name = self.snapshot.names.get(uid).map(|s| s.trim()).unwrap_or("");
        if !name.is_empty() {
            return name.to_string();
        }
        format!("ID {}", uid)
    }

    /// Best-effort persistence: failures are logged and swallowed so the
    /// dispatch path never breaks on a full disk or bad permissions.
    pub fn persist(&self) {
        if let Err(e) = self.try_persist() {
            warn!(
                error = %e,
                path = %self.path.display(),
                "failed to persist stats snapshot"
            );
        }
    }

    /// Writes the snapshot to a temp file in the target's directory, then
    /// atomically renames it over the target.
    pub fn try_persist(&self) -> Result<(), StatsError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(tmp.as_file(), &self.snapshot)?;
        tmp.persist(&self.path)
            .map_err(|e| StatsError::Persist(e.to_string()))?;
        Ok(())
    }
}
