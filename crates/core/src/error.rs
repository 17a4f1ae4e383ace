use crate::types::EntityId;

/// Domain-level error type shared by every fallible operation in this crate
/// and the application layer.
///
/// Rule-set diagnostics are NOT errors -- they are returned as values by
/// [`crate::checkin::find_conflict`]. `CoreError` covers rejected inputs and
/// refused operations only.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Flatten `validator` field errors into a single [`CoreError::Validation`].
///
/// Messages are joined in field-name order so the output is deterministic.
pub fn validation_error(errors: &validator::ValidationErrors) -> CoreError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    let messages: Vec<String> = fields
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect();

    CoreError::Validation(messages.join("; "))
}
