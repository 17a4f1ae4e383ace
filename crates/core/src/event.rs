//! Event catalog types, form drafts, and list filtering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{validation_error, CoreError};
use crate::search::matches_query;
use crate::types::EntityId;

/// Lifecycle state of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Active,
    Closed,
}

impl EventStatus {
    /// Human-readable label for status badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Closed => "Closed",
        }
    }
}

/// One organized event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EntityId,
    pub name: String,
    pub date: NaiveDate,
    pub venue: String,
    pub status: EventStatus,
}

impl Event {
    /// Build an event from a validated draft and a fresh id.
    pub fn from_draft(id: EntityId, draft: EventDraft) -> Self {
        Self {
            id,
            name: draft.name,
            date: draft.date,
            venue: draft.venue,
            status: draft.status,
        }
    }

    /// Overwrite every editable field from a draft, keeping the id.
    pub fn apply_draft(&mut self, draft: EventDraft) {
        self.name = draft.name;
        self.date = draft.date;
        self.venue = draft.venue;
        self.status = draft.status;
    }
}

/// Create/update form payload for an event.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
pub struct EventDraft {
    #[validate(length(min = 1, message = "Event name must not be empty"))]
    pub name: String,
    pub date: NaiveDate,
    #[validate(length(min = 1, message = "Venue must not be empty"))]
    pub venue: String,
    pub status: EventStatus,
}

impl EventDraft {
    /// Run field validation, flattening failures into a [`CoreError`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(|e| validation_error(&e))
    }
}

/// Status facet of the event list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventStatusFilter {
    #[default]
    All,
    Active,
    Closed,
}

impl EventStatusFilter {
    fn accepts(self, status: EventStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == EventStatus::Active,
            Self::Closed => status == EventStatus::Closed,
        }
    }
}

/// Filter events by a case-insensitive substring of name or venue plus a
/// status facet, preserving list order.
pub fn filter_events<'a>(
    events: &'a [Event],
    query: &str,
    status: EventStatusFilter,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| matches_query(&[&e.name, &e.venue], query) && status.accepts(e.status))
        .collect()
}

/// The catalog every fresh installation starts with.
pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            name: "Workshop React FADE".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 10).expect("valid seed date"),
            venue: "UFPE - Auditório A".to_string(),
            status: EventStatus::Active,
        },
        Event {
            id: "2".to_string(),
            name: "Simpósio de Tecnologia".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid seed date"),
            venue: "CISAM - Recife".to_string(),
            status: EventStatus::Active,
        },
        Event {
            id: "3".to_string(),
            name: "Hackathon Universitário".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 20).expect("valid seed date"),
            venue: "Poli-UPE".to_string(),
            status: EventStatus::Closed,
        },
    ]
}
