//! List filtering helpers shared by the event and participant screens.
//!
//! This module lives in `core` (zero internal deps) so both the store layer
//! and any future host UI can reuse the same matching semantics.

/// Case-insensitive substring match over any of `fields`.
///
/// An empty or whitespace-only query matches everything, so an untouched
/// search box leaves a list unfiltered.
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}
