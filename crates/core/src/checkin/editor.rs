//! Per-event rule editor: owns one rule set for an editing session.
//!
//! Every mutation re-runs conflict detection and stores the result, so the
//! diagnostic can never drift out of sync with the rules it describes. The
//! editor is advisory -- it reports violations, it does not prevent them.

use crate::checkin::conflict::find_conflict;
use crate::checkin::rules::{CheckinRule, RuleSetDiagnostic};
use crate::error::CoreError;
use crate::id::IdSource;
use crate::notify::{NotificationKind, Notifier};
use crate::types::EntityId;

/// Dedupe key carried by conflict notifications so repeated identical
/// diagnostics coalesce into a single visible alert.
pub const CONFLICT_DEDUPE_KEY: &str = "rule-conflict";

/// A single typed edit to one rule field.
#[derive(Debug, Clone)]
pub enum RuleEdit {
    SetName(String),
    SetMinutesBefore(i32),
    SetMinutesAfter(i32),
    ToggleMandatory,
}

/// Mutable rule-set editor for one event.
///
/// Collaborators are injected: an [`IdSource`] for fresh rule ids and a
/// [`Notifier`] for user feedback. The session opens with the single seed
/// rule and discards the whole set when dropped; rule sets are not
/// persisted.
pub struct RuleEditor {
    rules: Vec<CheckinRule>,
    diagnostic: Option<RuleSetDiagnostic>,
    ids: Box<dyn IdSource>,
    notifier: Box<dyn Notifier>,
}

impl std::fmt::Debug for RuleEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEditor")
            .field("rules", &self.rules)
            .field("diagnostic", &self.diagnostic)
            .finish_non_exhaustive()
    }
}

impl RuleEditor {
    /// Open an editing session seeded with the default "QR Code" rule.
    pub fn new(mut ids: Box<dyn IdSource>, notifier: Box<dyn Notifier>) -> Self {
        let seed = CheckinRule::seed(ids.next_id());
        let rules = vec![seed];
        let diagnostic = find_conflict(&rules);
        Self {
            rules,
            diagnostic,
            ids,
            notifier,
        }
    }

    /// Current rules, in insertion order.
    pub fn rules(&self) -> &[CheckinRule] {
        &self.rules
    }

    /// The diagnostic computed after the most recent mutation, if any.
    pub fn diagnostic(&self) -> Option<&RuleSetDiagnostic> {
        self.diagnostic.as_ref()
    }

    /// Append a new defaulted rule with a fresh id. Always succeeds.
    pub fn add_rule(&mut self) -> EntityId {
        let rule = CheckinRule::defaulted(self.ids.next_id());
        let id = rule.id.clone();
        self.rules.push(rule);
        self.notifier
            .notify(NotificationKind::Success, "Rule added successfully.", None);
        self.revalidate();
        id
    }

    /// Apply one field edit to the rule matching `id`.
    ///
    /// Unknown ids are ignored. Edits are silent except for the diagnostic
    /// recomputed afterwards.
    pub fn apply_edit(&mut self, id: &str, edit: RuleEdit) {
        if let Some(rule) = self.rules.iter_mut().find(|r| r.id == id) {
            match edit {
                RuleEdit::SetName(name) => rule.name = name,
                RuleEdit::SetMinutesBefore(minutes) => rule.minutes_before = minutes,
                RuleEdit::SetMinutesAfter(minutes) => rule.minutes_after = minutes,
                RuleEdit::ToggleMandatory => rule.mandatory = !rule.mandatory,
            }
        }
        self.revalidate();
    }

    /// Flip the active flag on the rule matching `id`. Unknown ids are ignored.
    pub fn toggle_active(&mut self, id: &str) {
        if let Some(rule) = self.rules.iter_mut().find(|r| r.id == id) {
            rule.active = !rule.active;
        }
        self.revalidate();
    }

    /// Remove the rule matching `id`.
    ///
    /// Removal is refused while the set holds a single rule -- total count,
    /// not mandatory-active count, so the last enforced rule of a larger set
    /// CAN be removed, leaving only a diagnostic.
    pub fn remove_rule(&mut self, id: &str) -> Result<(), CoreError> {
        if self.rules.len() <= 1 {
            let message = "The system requires at least one configured rule.";
            self.notifier
                .notify(NotificationKind::Error, message, None);
            return Err(CoreError::Conflict(message.to_string()));
        }

        self.rules.retain(|r| r.id != id);
        self.notifier
            .notify(NotificationKind::Success, "Rule removed.", None);
        self.revalidate();
        Ok(())
    }

    /// Recompute the diagnostic and surface it when present.
    fn revalidate(&mut self) {
        self.diagnostic = find_conflict(&self.rules);
        if let Some(diag) = &self.diagnostic {
            self.notifier.notify(
                NotificationKind::Error,
                &diag.message(),
                Some(CONFLICT_DEDUPE_KEY),
            );
        }
    }
}
