//! JSON snapshot persistence for the catalogs.
//!
//! The panel keeps events and participants as one serde document written to
//! a single file, the way a browser deployment would keep them in local
//! storage. Rule sets are deliberately NOT part of the snapshot: they live
//! only for the duration of an editing session.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use eventdesk_core::error::CoreError;
use eventdesk_core::event::{seed_events, Event};
use eventdesk_core::participant::{seed_participants, Participant};
use eventdesk_core::types::Timestamp;

/// The persisted catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub saved_at: Timestamp,
    pub events: Vec<Event>,
    pub participants: Vec<Participant>,
}

impl PanelSnapshot {
    /// Capture the current catalogs, stamped with the current time.
    pub fn capture(events: &[Event], participants: &[Participant]) -> Self {
        Self {
            saved_at: chrono::Utc::now(),
            events: events.to_vec(),
            participants: participants.to_vec(),
        }
    }
}

/// Write a snapshot as pretty-printed JSON.
pub fn save(path: &Path, snapshot: &PanelSnapshot) -> Result<(), CoreError> {
    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| CoreError::Internal(format!("snapshot serialization failed: {e}")))?;
    fs::write(path, json)
        .map_err(|e| CoreError::Internal(format!("snapshot write to {path:?} failed: {e}")))
}

/// Load catalogs from a snapshot file, falling back to seed data when the
/// file does not exist. Malformed content is an error, not a silent reseed.
pub fn load_or_seed(path: &Path) -> Result<(Vec<Event>, Vec<Participant>), CoreError> {
    if !path.exists() {
        return Ok((seed_events(), seed_participants()));
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| CoreError::Internal(format!("snapshot read from {path:?} failed: {e}")))?;
    let snapshot: PanelSnapshot = serde_json::from_str(&raw)
        .map_err(|e| CoreError::Internal(format!("snapshot parse failed: {e}")))?;

    Ok((snapshot.events, snapshot.participants))
}
