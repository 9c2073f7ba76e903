use std::fmt;

use serde::Serialize;

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field name as it appears on the wire (camelCase).
    pub field: String,
    pub message: String,
}

/// Malformed input, rejected before it reaches the service.
///
/// Lists every offending field, sorted by field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed: {}", display_fields(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldViolation>,
}

impl ValidationError {
    /// Build an error for a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            fields: vec![FieldViolation {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    /// Names of the offending fields, in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.field.as_str()).collect()
    }
}

fn display_fields(fields: &[FieldViolation]) -> String {
    fields
        .iter()
        .map(|f| format!("{} ({})", f.field, f.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure reported by a record store backend.
///
/// The backend error is kept as-is so the HTTP layer can inspect it (for
/// example to spot unique-constraint violations).
pub struct StoreError {
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl StoreError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Borrow the backend error as a concrete type, if it is one.
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.downcast_ref::<E>()
    }
}

impl fmt::Debug for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StoreError").field(&self.source).finish()
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Store error: {}", self.source)
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}
