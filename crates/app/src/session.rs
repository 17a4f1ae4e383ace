//! The per-login composition root.
//!
//! A [`PanelSession`] owns the authentication state and both catalog stores
//! for one organizer, computes the dashboard from live contents, and hands
//! out per-event rule editors. Dropping the session discards every editor
//! and its rule set; only the catalogs can be persisted, and only when a
//! snapshot path is configured.

use eventdesk_core::checkin::RuleEditor;
use eventdesk_core::dashboard::{compute_stats, DashboardStats};
use eventdesk_core::error::CoreError;
use eventdesk_core::event::seed_events;
use eventdesk_core::id::IdSource;
use eventdesk_core::notify::Notifier;
use eventdesk_core::participant::seed_participants;

use crate::auth::{AuthService, LoginForm};
use crate::config::AppConfig;
use crate::id::UuidIdSource;
use crate::notify::TracingNotifier;
use crate::snapshot::{self, PanelSnapshot};
use crate::store::{EventStore, ParticipantStore};

pub struct PanelSession {
    config: AppConfig,
    auth: AuthService,
    pub events: EventStore,
    pub participants: ParticipantStore,
}

impl PanelSession {
    /// Assemble a session from prebuilt stores.
    pub fn new(config: AppConfig, events: EventStore, participants: ParticipantStore) -> Self {
        let auth = AuthService::new(&config);
        Self {
            config,
            auth,
            events,
            participants,
        }
    }

    /// Open a session with production wiring: UUID ids, tracing-backed
    /// notifications, catalogs from the configured snapshot or seed data.
    pub fn open(config: AppConfig) -> Result<Self, CoreError> {
        let (events, participants) = match &config.snapshot_path {
            Some(path) => snapshot::load_or_seed(path)?,
            None => (seed_events(), seed_participants()),
        };

        let events = EventStore::new(events, Box::new(UuidIdSource), Box::new(TracingNotifier));
        let participants = ParticipantStore::new(
            participants,
            Box::new(UuidIdSource),
            Box::new(TracingNotifier),
        );
        Ok(Self::new(config, events, participants))
    }

    // -- authentication -------------------------------------------------------

    pub fn login(&mut self, form: &LoginForm) -> Result<&'static str, CoreError> {
        self.auth.login(form)
    }

    pub fn logout(&mut self) {
        self.auth.logout();
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn token(&self) -> Option<&str> {
        self.auth.token()
    }

    // -- dashboard ------------------------------------------------------------

    /// Stat cards computed from the current catalog contents.
    pub fn dashboard(&self) -> DashboardStats {
        compute_stats(self.events.events(), self.participants.participants())
    }

    // -- rule editing ---------------------------------------------------------

    /// Open a rule editor for an event, with production collaborators.
    pub fn open_rule_editor(&self, event_id: &str) -> Result<RuleEditor, CoreError> {
        self.open_rule_editor_with(event_id, Box::new(UuidIdSource), Box::new(TracingNotifier))
    }

    /// Open a rule editor with injected collaborators.
    pub fn open_rule_editor_with(
        &self,
        event_id: &str,
        ids: Box<dyn IdSource>,
        notifier: Box<dyn Notifier>,
    ) -> Result<RuleEditor, CoreError> {
        if self.events.get(event_id).is_none() {
            return Err(CoreError::NotFound {
                entity: "event",
                id: event_id.to_string(),
            });
        }
        Ok(RuleEditor::new(ids, notifier))
    }

    // -- persistence ----------------------------------------------------------

    /// Write the catalogs to the configured snapshot path, if any.
    pub fn persist(&self) -> Result<(), CoreError> {
        let Some(path) = &self.config.snapshot_path else {
            tracing::debug!("no snapshot path configured; catalogs stay in memory");
            return Ok(());
        };
        let snapshot =
            PanelSnapshot::capture(self.events.events(), self.participants.participants());
        snapshot::save(path, &snapshot)?;
        tracing::info!(path = %path.display(), "catalog snapshot written");
        Ok(())
    }
}
