//! In-memory catalog stores for events and participants.
//!
//! Stores own their data in insertion order (newest first, matching the
//! screens they back), validate drafts before applying them, and report
//! outcomes through the injected notifier.

use eventdesk_core::error::CoreError;
use eventdesk_core::event::{filter_events, Event, EventDraft, EventStatusFilter};
use eventdesk_core::id::IdSource;
use eventdesk_core::notify::{NotificationKind, Notifier};
use eventdesk_core::participant::{
    filter_participants, validate_transfer, Participant, ParticipantDraft,
};
use eventdesk_core::types::EntityId;

/// The event catalog for one panel session.
pub struct EventStore {
    events: Vec<Event>,
    ids: Box<dyn IdSource>,
    notifier: Box<dyn Notifier>,
}

impl EventStore {
    pub fn new(events: Vec<Event>, ids: Box<dyn IdSource>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            events,
            ids,
            notifier,
        }
    }

    /// All events, newest first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Validate the draft and prepend a new event with a fresh id.
    pub fn create(&mut self, draft: EventDraft) -> Result<EntityId, CoreError> {
        draft.check()?;
        let event = Event::from_draft(self.ids.next_id(), draft);
        let id = event.id.clone();
        self.events.insert(0, event);
        self.notifier.notify(
            NotificationKind::Success,
            "Event created successfully.",
            None,
        );
        Ok(id)
    }

    /// Validate the draft and overwrite the matching event's fields.
    pub fn update(&mut self, id: &str, draft: EventDraft) -> Result<(), CoreError> {
        draft.check()?;
        let Some(event) = self.events.iter_mut().find(|e| e.id == id) else {
            return Err(CoreError::NotFound {
                entity: "event",
                id: id.to_string(),
            });
        };
        event.apply_draft(draft);
        self.notifier.notify(
            NotificationKind::Success,
            "Event updated successfully.",
            None,
        );
        Ok(())
    }

    /// Remove the matching event. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) {
        self.events.retain(|e| e.id != id);
        self.notifier
            .notify(NotificationKind::Success, "Event removed.", None);
    }

    /// Filter by substring query and status facet.
    pub fn search(&self, query: &str, status: EventStatusFilter) -> Vec<&Event> {
        filter_events(&self.events, query, status)
    }
}

/// The participant registry for one panel session.
pub struct ParticipantStore {
    participants: Vec<Participant>,
    ids: Box<dyn IdSource>,
    notifier: Box<dyn Notifier>,
}

impl ParticipantStore {
    pub fn new(
        participants: Vec<Participant>,
        ids: Box<dyn IdSource>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            participants,
            ids,
            notifier,
        }
    }

    /// All participants, newest first.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Validate the draft and prepend a new, not-yet-checked-in participant.
    pub fn register(&mut self, draft: ParticipantDraft) -> Result<EntityId, CoreError> {
        draft.check()?;
        let participant = Participant::from_draft(self.ids.next_id(), draft);
        let id = participant.id.clone();
        self.participants.insert(0, participant);
        self.notifier
            .notify(NotificationKind::Success, "Participant registered.", None);
        Ok(id)
    }

    /// Remove the matching participant. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) {
        self.participants.retain(|p| p.id != id);
        self.notifier
            .notify(NotificationKind::Success, "Participant removed.", None);
    }

    /// Rebind the participant to another event.
    ///
    /// Transfers to the event the participant is already bound to are
    /// refused; nothing changes and the refusal is surfaced as an error
    /// notification.
    pub fn transfer(&mut self, id: &str, target_event_name: &str) -> Result<(), CoreError> {
        let Some(participant) = self.participants.iter_mut().find(|p| p.id == id) else {
            return Err(CoreError::NotFound {
                entity: "participant",
                id: id.to_string(),
            });
        };

        if let Err(err) = validate_transfer(participant, target_event_name) {
            self.notifier
                .notify(NotificationKind::Error, &err.to_string(), None);
            return Err(err);
        }

        participant.event_name = target_event_name.to_string();
        self.notifier.notify(
            NotificationKind::Success,
            "Participant transferred successfully.",
            None,
        );
        Ok(())
    }

    /// Record a completed (or reverted) check-in.
    pub fn set_checked_in(&mut self, id: &str, checked_in: bool) -> Result<(), CoreError> {
        let Some(participant) = self.participants.iter_mut().find(|p| p.id == id) else {
            return Err(CoreError::NotFound {
                entity: "participant",
                id: id.to_string(),
            });
        };
        participant.checked_in = checked_in;
        Ok(())
    }

    /// Filter by substring query over name and e-mail.
    pub fn search(&self, query: &str) -> Vec<&Participant> {
        filter_participants(&self.participants, query)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use eventdesk_core::event::{seed_events, EventStatus};
    use eventdesk_core::participant::seed_participants;

    use crate::id::SequentialIdSource;
    use crate::notify::RecordingNotifier;

    use super::*;

    fn event_store(notifier: &RecordingNotifier) -> EventStore {
        EventStore::new(
            seed_events(),
            Box::new(SequentialIdSource::new("ev")),
            Box::new(notifier.clone()),
        )
    }

    fn participant_store(notifier: &RecordingNotifier) -> ParticipantStore {
        ParticipantStore::new(
            seed_participants(),
            Box::new(SequentialIdSource::new("p")),
            Box::new(notifier.clone()),
        )
    }

    fn event_draft(name: &str) -> EventDraft {
        EventDraft {
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            venue: "Main Hall".to_string(),
            status: EventStatus::Active,
        }
    }

    fn participant_draft(name: &str, email: &str) -> ParticipantDraft {
        ParticipantDraft {
            name: name.to_string(),
            email: email.to_string(),
            event_name: "Workshop React FADE".to_string(),
        }
    }

    // -- events ---------------------------------------------------------------

    #[test]
    fn create_prepends_and_notifies() {
        let notifier = RecordingNotifier::new();
        let mut store = event_store(&notifier);

        let id = store.create(event_draft("Tech Meetup")).unwrap();

        assert_eq!(id, "ev-1");
        assert_eq!(store.events().len(), 4);
        assert_eq!(store.events()[0].name, "Tech Meetup");
        assert_eq!(notifier.messages(), vec!["Event created successfully."]);
    }

    #[test]
    fn create_rejects_invalid_draft_without_changes() {
        let notifier = RecordingNotifier::new();
        let mut store = event_store(&notifier);

        let result = store.create(event_draft(""));

        assert_matches!(result, Err(CoreError::Validation(_)));
        assert_eq!(store.events().len(), 3);
        assert!(notifier.visible().is_empty());
    }

    #[test]
    fn update_overwrites_fields_and_keeps_position() {
        let notifier = RecordingNotifier::new();
        let mut store = event_store(&notifier);

        let mut draft = event_draft("Renamed Workshop");
        draft.status = EventStatus::Closed;
        store.update("1", draft).unwrap();

        let event = store.get("1").unwrap();
        assert_eq!(event.name, "Renamed Workshop");
        assert_eq!(event.status, EventStatus::Closed);
        assert_eq!(store.events()[0].id, "1");
        assert_eq!(notifier.messages(), vec!["Event updated successfully."]);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let notifier = RecordingNotifier::new();
        let mut store = event_store(&notifier);

        let result = store.update("missing", event_draft("X"));

        assert_matches!(result, Err(CoreError::NotFound { entity: "event", .. }));
        assert!(notifier.visible().is_empty());
    }

    #[test]
    fn remove_deletes_and_notifies() {
        let notifier = RecordingNotifier::new();
        let mut store = event_store(&notifier);

        store.remove("2");

        assert_eq!(store.events().len(), 2);
        assert!(store.get("2").is_none());
        assert_eq!(notifier.messages(), vec!["Event removed."]);
    }

    #[test]
    fn search_composes_query_and_status() {
        let notifier = RecordingNotifier::new();
        let store = event_store(&notifier);

        let hits = store.search("a", EventStatusFilter::Closed);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Hackathon Universitário");
    }

    // -- participants ---------------------------------------------------------

    #[test]
    fn register_prepends_unchecked_participant() {
        let notifier = RecordingNotifier::new();
        let mut store = participant_store(&notifier);

        let id = store
            .register(participant_draft("Ana Souza", "ana@email.com"))
            .unwrap();

        assert_eq!(id, "p-1");
        assert_eq!(store.participants().len(), 3);
        let newest = &store.participants()[0];
        assert_eq!(newest.name, "Ana Souza");
        assert!(!newest.checked_in);
        assert_eq!(notifier.messages(), vec!["Participant registered."]);
    }

    #[test]
    fn register_rejects_malformed_email() {
        let notifier = RecordingNotifier::new();
        let mut store = participant_store(&notifier);

        let result = store.register(participant_draft("Ana", "nope"));

        assert_matches!(result, Err(CoreError::Validation(_)));
        assert_eq!(store.participants().len(), 2);
    }

    #[test]
    fn transfer_rebinds_and_notifies() {
        let notifier = RecordingNotifier::new();
        let mut store = participant_store(&notifier);

        store.transfer("1", "Simpósio de Tecnologia").unwrap();

        assert_eq!(store.get("1").unwrap().event_name, "Simpósio de Tecnologia");
        assert_eq!(
            notifier.messages(),
            vec!["Participant transferred successfully."]
        );
    }

    #[test]
    fn transfer_to_current_event_is_refused_and_surfaced() {
        let notifier = RecordingNotifier::new();
        let mut store = participant_store(&notifier);

        let result = store.transfer("1", "Workshop React FADE");

        assert_matches!(result, Err(CoreError::Conflict(_)));
        assert_eq!(store.get("1").unwrap().event_name, "Workshop React FADE");
        let visible = notifier.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].kind, NotificationKind::Error);
    }

    #[test]
    fn transfer_unknown_participant_is_not_found() {
        let notifier = RecordingNotifier::new();
        let mut store = participant_store(&notifier);

        let result = store.transfer("missing", "Simpósio de Tecnologia");

        assert_matches!(
            result,
            Err(CoreError::NotFound {
                entity: "participant",
                ..
            })
        );
    }

    #[test]
    fn set_checked_in_flips_the_flag() {
        let notifier = RecordingNotifier::new();
        let mut store = participant_store(&notifier);

        store.set_checked_in("2", true).unwrap();
        assert!(store.get("2").unwrap().checked_in);

        store.set_checked_in("2", false).unwrap();
        assert!(!store.get("2").unwrap().checked_in);
    }

    #[test]
    fn remove_participant_deletes_and_notifies() {
        let notifier = RecordingNotifier::new();
        let mut store = participant_store(&notifier);

        store.remove("1");

        assert_eq!(store.participants().len(), 1);
        assert_eq!(notifier.messages(), vec!["Participant removed."]);
    }
}
