//! Participant registry types, form drafts, transfer rules, and filtering.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{validation_error, CoreError};
use crate::search::matches_query;
use crate::types::EntityId;

/// One registered participant.
///
/// Participants are bound to an event by its display NAME, not its id.
/// Renaming an event therefore orphans its bindings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub event_name: String,
    pub checked_in: bool,
}

impl Participant {
    /// Build a participant from a validated draft and a fresh id.
    ///
    /// New registrations always start not checked in.
    pub fn from_draft(id: EntityId, draft: ParticipantDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            event_name: draft.event_name,
            checked_in: false,
        }
    }
}

/// Registration form payload for a participant.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
pub struct ParticipantDraft {
    #[validate(length(min = 1, message = "Participant name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Enter a valid e-mail address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Participant must be bound to an event"))]
    pub event_name: String,
}

impl ParticipantDraft {
    /// Run field validation, flattening failures into a [`CoreError`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(|e| validation_error(&e))
    }
}

/// Refuse a transfer that would not move the participant anywhere.
pub fn validate_transfer(participant: &Participant, target_event_name: &str) -> Result<(), CoreError> {
    if participant.event_name == target_event_name {
        return Err(CoreError::Conflict(format!(
            "{} is already bound to \"{target_event_name}\"",
            participant.name
        )));
    }
    Ok(())
}

/// Filter participants by a case-insensitive substring of name or e-mail,
/// preserving list order.
pub fn filter_participants<'a>(participants: &'a [Participant], query: &str) -> Vec<&'a Participant> {
    participants
        .iter()
        .filter(|p| matches_query(&[&p.name, &p.email], query))
        .collect()
}

/// The registry every fresh installation starts with.
pub fn seed_participants() -> Vec<Participant> {
    vec![
        Participant {
            id: "1".to_string(),
            name: "Rodrigo Campos".to_string(),
            email: "rodrigo@email.com".to_string(),
            event_name: "Workshop React FADE".to_string(),
            checked_in: true,
        },
        Participant {
            id: "2".to_string(),
            name: "Maria Silva".to_string(),
            email: "maria@email.com".to_string(),
            event_name: "Simpósio de Tecnologia".to_string(),
            checked_in: false,
        },
    ]
}
