//! Dashboard stat aggregation for the organizer's landing screen.

use serde::Serialize;

use crate::event::{Event, EventStatus};
use crate::participant::Participant;

/// Headline numbers for the stat cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Registered participants across all events.
    pub total_registered: usize,
    /// Events currently in the active state.
    pub active_events: usize,
    /// Participants who have completed check-in.
    pub checkins_done: usize,
    /// Check-ins as a percentage of registrations; 0 with no registrations.
    pub attendance_rate_pct: f64,
}

/// Compute the stat cards from current catalog contents.
pub fn compute_stats(events: &[Event], participants: &[Participant]) -> DashboardStats {
    let total_registered = participants.len();
    let checkins_done = participants.iter().filter(|p| p.checked_in).count();
    let active_events = events
        .iter()
        .filter(|e| e.status == EventStatus::Active)
        .count();

    let attendance_rate_pct = if total_registered > 0 {
        (checkins_done as f64 / total_registered as f64) * 100.0
    } else {
        0.0
    };

    DashboardStats {
        total_registered,
        active_events,
        checkins_done,
        attendance_rate_pct,
    }
}

/// One point of the hourly check-in flow chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckinFlowPoint {
    pub hour: &'static str,
    pub total: i64,
}

/// Sample hourly series backing the flow widget until live check-in
/// timestamps exist.
pub const SAMPLE_CHECKIN_FLOW: &[CheckinFlowPoint] = &[
    CheckinFlowPoint {
        hour: "08:00",
        total: 45,
    },
    CheckinFlowPoint {
        hour: "09:00",
        total: 78,
    },
    CheckinFlowPoint {
        hour: "10:00",
        total: 120,
    },
    CheckinFlowPoint {
        hour: "11:00",
        total: 95,
    },
    CheckinFlowPoint {
        hour: "12:00",
        total: 30,
    },
    CheckinFlowPoint {
        hour: "13:00",
        total: 88,
    },
    CheckinFlowPoint {
        hour: "14:00",
        total: 110,
    },
];
