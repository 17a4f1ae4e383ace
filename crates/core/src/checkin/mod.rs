//! Check-in rule configuration: rule types, conflict detection, and the
//! per-event rule editor.
//!
//! A rule set is an ordered collection of [`CheckinRule`]s owned by one
//! editing session. Validity is advisory: [`find_conflict`] reports the
//! first violation as a [`RuleSetDiagnostic`] and the editor surfaces it,
//! but never blocks the user from keeping an invalid set.

pub mod conflict;
pub mod editor;
pub mod rules;

pub use conflict::find_conflict;
pub use editor::{RuleEdit, RuleEditor};
pub use rules::{CheckinRule, RuleSetDiagnostic};
