//! Domain core for the eventdesk organizer panel.
//!
//! Pure, synchronous, in-memory logic with zero internal dependencies:
//!
//! - [`checkin`] -- check-in rule types, conflict detection, and the
//!   per-event rule editor.
//! - [`event`] / [`participant`] -- catalog types, form drafts, and list
//!   filtering.
//! - [`dashboard`] -- stat aggregation for the landing screen.
//! - [`notify`] / [`id`] -- the collaborator contracts (notifications,
//!   identity generation) implemented by the application layer.
//!
//! Nothing in this crate performs IO or owns cross-session state; every
//! editing session holds its data exclusively and discards it on close.

pub mod checkin;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod id;
pub mod notify;
pub mod participant;
pub mod search;
pub mod types;

pub use checkin::{find_conflict, CheckinRule, RuleEdit, RuleEditor, RuleSetDiagnostic};
pub use error::CoreError;
