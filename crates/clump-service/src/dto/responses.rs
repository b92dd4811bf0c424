//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Times render
//! both raw and preformatted ("06:30 PM" / "TBD") so the boundary layer
//! never does time math.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use clump_core::value_objects::{CategoryId, CommentId, EventId, ForumId, UserId};

// ============================================================================
// Person Responses
// ============================================================================

/// Person response
#[derive(Debug, Clone, Serialize)]
pub struct PersonResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Participant as shown on an event roster (limited fields)
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantResponse {
    pub id: UserId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
}

/// The profile page: a person plus their created and joined events
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub person: PersonResponse,
    pub created_events: Vec<EventResponse>,
    pub joined_events: Vec<EventResponse>,
}

// ============================================================================
// Event Responses
// ============================================================================

/// Event response
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: EventId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub starts_at: Option<NaiveTime>,
    pub ends_at: Option<NaiveTime>,
    pub start_formatted: String,
    pub end_formatted: String,
    pub city: String,
    pub state: String,
    pub capacity: i32,
    pub flexible: bool,
    pub category_id: CategoryId,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

/// Event as listed on the forum index, with aggregates
#[derive(Debug, Clone, Serialize)]
pub struct EventSummaryResponse {
    #[serde(flatten)]
    pub event: EventResponse,
    pub creator_name: String,
    pub category: String,
    pub forum_id: ForumId,
    pub participant_count: i64,
    pub comment_count: i64,
}

/// Full event detail for the side panel
#[derive(Debug, Clone, Serialize)]
pub struct EventDetailResponse {
    #[serde(flatten)]
    pub event: EventResponse,
    pub creator_name: String,
    pub category: String,
    pub forum_id: ForumId,
    pub participants: Vec<ParticipantResponse>,
    pub participant_count: i64,
    pub remaining: i64,
    pub is_full: bool,
    pub event_has_passed: bool,
}

/// One calendar week of events
#[derive(Debug, Clone, Serialize)]
pub struct WeekResponse {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub events: Vec<EventResponse>,
}

/// Category response
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
}

// ============================================================================
// Participation Responses
// ============================================================================

/// Advisory capacity state of an event
#[derive(Debug, Clone, Serialize)]
pub struct CapacityResponse {
    pub capacity: i32,
    pub joined: i64,
    pub remaining: i64,
    pub is_full: bool,
}

/// Outcome of a join attempt, in the shape the boundary renders
#[derive(Debug, Clone, Serialize)]
pub struct JoinResponse {
    pub joined: bool,
    pub message: &'static str,
}

// ============================================================================
// Forum Responses
// ============================================================================

/// A single forum comment with its author's name
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: CommentId,
    pub forum_id: ForumId,
    pub author_id: UserId,
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CommentId>,
    pub content: String,
    pub posted_at: DateTime<Utc>,
}

/// An event's comment thread
#[derive(Debug, Clone, Serialize)]
pub struct ForumThreadResponse {
    pub forum_id: ForumId,
    pub comment_count: i64,
    pub comments: Vec<CommentResponse>,
}
