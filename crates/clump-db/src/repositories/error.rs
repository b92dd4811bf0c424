//! Error handling utilities for repositories

use clump_core::error::DomainError;
use clump_core::value_objects::{CommentId, EventId, UserId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create an "event not found" error
pub fn event_not_found(id: EventId) -> DomainError {
    DomainError::EventNotFound(id)
}

/// Create a "person not found" error
pub fn person_not_found(id: UserId) -> DomainError {
    DomainError::PersonNotFound(id)
}

/// Create a "comment not found" error
pub fn comment_not_found(id: CommentId) -> DomainError {
    DomainError::CommentNotFound(id)
}
