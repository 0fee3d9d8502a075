//! Expedition log — user-authored annotations pinned to route positions.
//!
//! Entries are append-only: created once, never mutated, removed only
//! by an external bulk clear that this crate does not expose. Every
//! mutation rewrites the full collection through the repository port.

use crate::{
    error::SimResult,
    geo::GeoPoint,
    store::LogRepository,
    types::EntityId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogIcon {
    Note,
    Observation,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpeditionLogEntry {
    pub id: EntityId,
    pub title: String,
    pub body: String,
    pub icon: LogIcon,
    pub created_at: DateTime<Utc>,
    pub position: GeoPoint,
}

pub struct ExpeditionLogStore<R: LogRepository> {
    repository: R,
    /// Most-recent-first, matching display order.
    entries: Vec<ExpeditionLogEntry>,
}

impl<R: LogRepository> ExpeditionLogStore<R> {
    /// Load the persisted collection from the repository. A malformed
    /// payload is not fatal: it is logged and treated as no entries.
    pub fn open(repository: R) -> SimResult<Self> {
        let entries = match repository.load()? {
            Some(payload) => match serde_json::from_str::<Vec<ExpeditionLogEntry>>(&payload) {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("Failed to parse stored expedition logs, starting empty: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Ok(Self { repository, entries })
    }

    /// Create a log entry pinned to `position` and persist the whole
    /// collection. A title that trims to empty is a silent no-op —
    /// nothing is added, nothing is written.
    pub fn create(
        &mut self,
        title: &str,
        body: &str,
        icon: LogIcon,
        position: GeoPoint,
    ) -> SimResult<Option<&ExpeditionLogEntry>> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }

        let entry = ExpeditionLogEntry {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            body: body.trim().to_string(),
            icon,
            created_at: Utc::now(),
            position,
        };
        log::debug!("Expedition log created: id={} title={:?}", entry.id, entry.title);

        self.entries.insert(0, entry);
        self.persist()?;
        Ok(self.entries.first())
    }

    /// Linear lookup by identifier, used to resolve a detail view when
    /// a log marker is selected.
    pub fn find_by_id(&self, id: &str) -> Option<&ExpeditionLogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All entries, most recent first.
    pub fn entries(&self) -> &[ExpeditionLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hand the repository back, e.g. to reopen the store in a later
    /// session against the same medium.
    pub fn into_repository(self) -> R {
        self.repository
    }

    fn persist(&mut self) -> SimResult<()> {
        let payload = serde_json::to_string(&self.entries)?;
        self.repository.save(&payload)
    }
}
