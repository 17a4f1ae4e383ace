//! Check-in rule and diagnostic types.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// Display name given to a freshly added rule.
pub const DEFAULT_RULE_NAME: &str = "New Validation Rule";

/// Window opening for a freshly added rule, minutes before the event time.
pub const DEFAULT_MINUTES_BEFORE: i32 = 15;

/// Window closing for a freshly added rule, minutes after the event time.
pub const DEFAULT_MINUTES_AFTER: i32 = 15;

/// One named admission-window rule for event check-in.
///
/// Only `id` is unique within a rule set; names and time windows may repeat
/// (repeated windows on mandatory-active rules are what conflict detection
/// reports).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinRule {
    pub id: EntityId,
    pub name: String,
    /// Minutes before the nominal event time at which the window opens.
    pub minutes_before: i32,
    /// Minutes after the nominal event time until which the window stays open.
    pub minutes_after: i32,
    /// Mandatory rules must be satisfied for check-in to succeed.
    pub mandatory: bool,
    /// Inactive rules are excluded from conflict checking and enforcement.
    pub active: bool,
}

impl CheckinRule {
    /// The seed rule every editing session opens with.
    pub fn seed(id: EntityId) -> Self {
        Self {
            id,
            name: "QR Code".to_string(),
            minutes_before: 30,
            minutes_after: 60,
            mandatory: true,
            active: true,
        }
    }

    /// A defaulted rule as appended by the editor's add operation.
    pub fn defaulted(id: EntityId) -> Self {
        Self {
            id,
            name: DEFAULT_RULE_NAME.to_string(),
            minutes_before: DEFAULT_MINUTES_BEFORE,
            minutes_after: DEFAULT_MINUTES_AFTER,
            mandatory: false,
            active: true,
        }
    }

    /// Whether this rule belongs to the mandatory-active subset -- the only
    /// rules subject to conflict checking and run-time enforcement.
    pub fn is_enforced(&self) -> bool {
        self.mandatory && self.active
    }

    /// The admission window as a comparable pair.
    pub fn window(&self) -> (i32, i32) {
        (self.minutes_before, self.minutes_after)
    }
}

/// Why a rule set is currently invalid.
///
/// Diagnostics are advisory values, never errors: an invalid set remains
/// fully representable and editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleSetDiagnostic {
    /// The set has no rule that is both mandatory and active.
    NoMandatoryRule,
    /// Two mandatory-active rules share an identical admission window.
    /// Names are in detection order (earlier rule first).
    DuplicateWindow { first: String, second: String },
}

impl RuleSetDiagnostic {
    /// Human-readable message shown in the conflict banner and alerts.
    pub fn message(&self) -> String {
        match self {
            Self::NoMandatoryRule => {
                "There must be at least one active mandatory rule.".to_string()
            }
            Self::DuplicateWindow { first, second } => format!(
                "Conflict detected: rules \"{first}\" and \"{second}\" have the same time window."
            ),
        }
    }
}
