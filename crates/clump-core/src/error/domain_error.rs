//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CategoryId, CommentId, EventId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    #[error("Person not found: {0}")]
    PersonNotFound(UserId),

    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("No forum for event: {0}")]
    ForumNotFound(EventId),

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Cannot join past events")]
    EventClosed,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the event creator")]
    NotEventCreator,

    #[error("Not the comment author")]
    NotCommentAuthor,

    #[error("Event creators cannot leave their own events")]
    CreatorCannotLeave,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Already joined this event")]
    AlreadyJoined,

    #[error("Event is full")]
    EventFull,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::PersonNotFound(_) => "UNKNOWN_PERSON",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::ForumNotFound(_) => "UNKNOWN_FORUM",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EventClosed => "EVENT_CLOSED",

            // Authorization
            Self::NotEventCreator => "NOT_EVENT_CREATOR",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::CreatorCannotLeave => "CREATOR_CANNOT_LEAVE",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::AlreadyJoined => "ALREADY_JOINED",
            Self::EventFull => "EVENT_FULL",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::EventNotFound(_)
                | Self::PersonNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::ForumNotFound(_)
                | Self::CommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::EventClosed)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotEventCreator | Self::NotCommentAuthor | Self::CreatorCannotLeave
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists | Self::AlreadyJoined | Self::EventFull
        )
    }
}
