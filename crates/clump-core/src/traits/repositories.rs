//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. No trait method ever consults the clock:
//! "today" is always an argument, so time-dependent policy stays with the
//! caller.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{
    CapacitySnapshot, Category, Comment, CommentWithAuthor, Event, EventWithStats, Forum,
    JoinOutcome, NewComment, NewEvent, NewPerson, Person,
};
use crate::error::DomainError;
use crate::value_objects::{CategoryId, CommentId, EventId, ForumId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Person Repository
// ============================================================================

#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Find person by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<Person>>;

    /// Find person by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Person>>;

    /// Check if an email is already registered
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new person, returning the generated id.
    ///
    /// The password hash is opaque to this layer; hashing happens in the
    /// boundary layer. A duplicate email surfaces as `EmailAlreadyExists`
    /// via the unique constraint, never a check-then-insert.
    async fn create(&self, person: &NewPerson, password_hash: &str) -> RepoResult<UserId>;

    /// Update profile fields of an existing person
    async fn update(&self, person: &Person) -> RepoResult<()>;

    /// Delete a person; their events, participations and comments cascade
    async fn delete(&self, id: UserId) -> RepoResult<()>;

    /// Get password hash for credential verification by the boundary layer
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find event by ID
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>>;

    /// List events with a date in the inclusive range, ordered by date then
    /// start time
    async fn find_in_range(&self, start: NaiveDate, end: NaiveDate) -> RepoResult<Vec<Event>>;

    /// List events, optionally only those dated `since` or later
    async fn list(&self, since: Option<NaiveDate>) -> RepoResult<Vec<Event>>;

    /// List events with creator, category and count aggregates for the forum
    /// index, optionally only those dated `since` or later
    async fn list_with_stats(&self, since: Option<NaiveDate>) -> RepoResult<Vec<EventWithStats>>;

    /// List events created by a user
    async fn find_created_by(
        &self,
        user_id: UserId,
        since: Option<NaiveDate>,
    ) -> RepoResult<Vec<Event>>;

    /// List events a user has joined
    async fn find_joined_by(
        &self,
        user_id: UserId,
        since: Option<NaiveDate>,
    ) -> RepoResult<Vec<Event>>;

    /// Create a new event, returning the generated id
    async fn create(&self, event: &NewEvent) -> RepoResult<EventId>;

    /// Update an existing event (full-field replace)
    async fn update(&self, event: &Event) -> RepoResult<()>;

    /// Delete an event; participants, forum and comments cascade
    async fn delete(&self, id: EventId) -> RepoResult<()>;
}

// ============================================================================
// Participant Repository (the capacity-guarded membership register)
// ============================================================================

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Atomically join an event, enforcing its capacity.
    ///
    /// Opens a transaction, takes an exclusive lock on the event row,
    /// re-counts the current participants under the lock, and inserts only
    /// if there is still space. Concurrent joins against the same event
    /// serialize on the lock; joins against other events are unaffected.
    /// Either exactly one row is inserted and committed, or the transaction
    /// rolls back and no row exists.
    async fn join(&self, event_id: EventId, user_id: UserId) -> RepoResult<JoinOutcome>;

    /// Insert a participant without the capacity check.
    ///
    /// Used exactly once per event, to auto-add the creator at creation:
    /// the creator is always eligible, even at capacity zero.
    async fn add(&self, event_id: EventId, user_id: UserId) -> RepoResult<()>;

    /// Remove a participant if present; returns whether a row was removed.
    ///
    /// Takes no lock: a deletion can never push the count over capacity.
    async fn leave(&self, event_id: EventId, user_id: UserId) -> RepoResult<bool>;

    /// Check if a user is a participant
    async fn is_participant(&self, event_id: EventId, user_id: UserId) -> RepoResult<bool>;

    /// Advisory read of capacity and current count; `None` if the event
    /// does not exist. The authoritative check happens inside `join`.
    async fn capacity_snapshot(&self, event_id: EventId) -> RepoResult<Option<CapacitySnapshot>>;

    /// Current participant count
    async fn count(&self, event_id: EventId) -> RepoResult<i64>;

    /// Participants with their profile info, ordered by name
    async fn roster(&self, event_id: EventId) -> RepoResult<Vec<Person>>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List all categories, ordered by name
    async fn find_all(&self) -> RepoResult<Vec<Category>>;

    /// Find category by ID
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>>;
}

// ============================================================================
// Forum Repository
// ============================================================================

#[async_trait]
pub trait ForumRepository: Send + Sync {
    /// Find the forum attached to an event
    async fn find_by_event(&self, event_id: EventId) -> RepoResult<Option<Forum>>;

    /// Create the forum for an event, returning the generated id
    async fn create(&self, event_id: EventId) -> RepoResult<ForumId>;

    /// List a forum's comments with author names, oldest first
    async fn comments(&self, forum_id: ForumId) -> RepoResult<Vec<CommentWithAuthor>>;

    /// Number of comments in a forum
    async fn comment_count(&self, forum_id: ForumId) -> RepoResult<i64>;

    /// Find a comment by ID
    async fn find_comment(&self, id: CommentId) -> RepoResult<Option<Comment>>;

    /// Insert a comment, returning the generated id
    async fn add_comment(&self, comment: &NewComment) -> RepoResult<CommentId>;

    /// Delete a comment; replies to it cascade
    async fn delete_comment(&self, id: CommentId) -> RepoResult<()>;
}
