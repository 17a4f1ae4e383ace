//! Rule-set conflict detection -- pure logic, no side effects.

use super::rules::{CheckinRule, RuleSetDiagnostic};

/// Determine whether a rule set is acceptable.
///
/// Returns the first violation found, or `None` when the set is valid:
///
/// 1. The mandatory-active subset is extracted in original order.
/// 2. An empty subset is reported as [`RuleSetDiagnostic::NoMandatoryRule`]
///    before any pairwise checking.
/// 3. Otherwise every ordered pair of the subset is compared; the first pair
///    sharing an identical `(minutes_before, minutes_after)` window (lowest
///    first index, then lowest second index) is reported as
///    [`RuleSetDiagnostic::DuplicateWindow`] and the scan stops.
///
/// The reported pair therefore depends on list order, while whether ANY
/// diagnostic is returned does not. O(n²) over the mandatory-active subset;
/// rule sets are bounded by what a human edits in one screen.
pub fn find_conflict(rules: &[CheckinRule]) -> Option<RuleSetDiagnostic> {
    let enforced: Vec<&CheckinRule> = rules.iter().filter(|r| r.is_enforced()).collect();

    if enforced.is_empty() {
        return Some(RuleSetDiagnostic::NoMandatoryRule);
    }

    for i in 0..enforced.len() {
        for j in (i + 1)..enforced.len() {
            if enforced[i].window() == enforced[j].window() {
                return Some(RuleSetDiagnostic::DuplicateWindow {
                    first: enforced[i].name.clone(),
                    second: enforced[j].name.clone(),
                });
            }
        }
    }

    None
}
