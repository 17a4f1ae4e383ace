use eventdesk_app::config::AppConfig;
use eventdesk_app::id::SequentialIdSource;
use eventdesk_app::notify::RecordingNotifier;
use eventdesk_app::session::PanelSession;
use eventdesk_app::store::{EventStore, ParticipantStore};
use eventdesk_core::event::seed_events;
use eventdesk_core::participant::seed_participants;

/// Build a session over seed data with deterministic ids and a shared
/// recording notifier, mirroring the production wiring in
/// `PanelSession::open` so tests observe the same notification flow the
/// console delivery would.
pub fn seeded_session() -> (PanelSession, RecordingNotifier) {
    let notifier = RecordingNotifier::new();

    let events = EventStore::new(
        seed_events(),
        Box::new(SequentialIdSource::new("ev")),
        Box::new(notifier.clone()),
    );
    let participants = ParticipantStore::new(
        seed_participants(),
        Box::new(SequentialIdSource::new("p")),
        Box::new(notifier.clone()),
    );

    let session = PanelSession::new(AppConfig::default(), events, participants);
    (session, notifier)
}
