//! Domain entity to DTO mappers

use chrono::NaiveTime;

use clump_core::entities::{
    CapacitySnapshot, Category, Comment, CommentWithAuthor, Event, EventWithStats, JoinOutcome,
    Person,
};
use clump_core::value_objects::ForumId;

use super::responses::{
    CapacityResponse, CategoryResponse, CommentResponse, EventDetailResponse, EventResponse,
    EventSummaryResponse, JoinResponse, ParticipantResponse, PersonResponse,
};

/// Render a time as the UI shows it: 12-hour clock, or "TBD" when unset
pub fn format_time(time: Option<NaiveTime>) -> String {
    match time {
        Some(time) => time.format("%I:%M %p").to_string(),
        None => "TBD".to_string(),
    }
}

impl From<&Person> for PersonResponse {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id,
            name: person.name.clone(),
            email: person.email.clone(),
            bio: person.bio.clone(),
            class_year: person.class_year,
            pronouns: person.pronouns.clone(),
            photo: person.photo.clone(),
            created_at: person.created_at,
        }
    }
}

impl From<&Person> for ParticipantResponse {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id,
            name: person.name.clone(),
            class_year: person.class_year,
            pronouns: person.pronouns.clone(),
        }
    }
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date,
            starts_at: event.starts_at,
            ends_at: event.ends_at,
            start_formatted: format_time(event.starts_at),
            end_formatted: format_time(event.ends_at),
            city: event.city.clone(),
            state: event.state.clone(),
            capacity: event.capacity,
            flexible: event.flexible,
            category_id: event.category_id,
            created_by: event.created_by,
            created_at: event.created_at,
        }
    }
}

impl From<EventWithStats> for EventSummaryResponse {
    fn from(stats: EventWithStats) -> Self {
        Self {
            event: EventResponse::from(&stats.event),
            creator_name: stats.creator_name,
            category: stats.category,
            forum_id: stats.forum_id,
            participant_count: stats.participant_count,
            comment_count: stats.comment_count,
        }
    }
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

impl From<CapacitySnapshot> for CapacityResponse {
    fn from(snapshot: CapacitySnapshot) -> Self {
        Self {
            capacity: snapshot.capacity,
            joined: snapshot.joined,
            remaining: snapshot.remaining(),
            is_full: snapshot.is_full(),
        }
    }
}

impl From<JoinOutcome> for JoinResponse {
    fn from(outcome: JoinOutcome) -> Self {
        match outcome {
            JoinOutcome::Joined => Self {
                joined: true,
                message: "Successfully joined the event",
            },
            JoinOutcome::Full => Self {
                joined: false,
                message: "Event is full",
            },
            JoinOutcome::NotFound => Self {
                joined: false,
                message: "Event not found",
            },
        }
    }
}

impl CommentResponse {
    /// Build a response from a comment and its author's display name
    pub fn new(comment: Comment, author_name: String) -> Self {
        Self {
            id: comment.id,
            forum_id: comment.forum_id,
            author_id: comment.author_id,
            author_name,
            parent_id: comment.parent_id,
            content: comment.content,
            posted_at: comment.posted_at,
        }
    }
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(with_author: CommentWithAuthor) -> Self {
        Self::new(with_author.comment, with_author.author_name)
    }
}

/// The pieces the event detail view is assembled from
#[derive(Debug)]
pub struct EventDetail {
    pub event: Event,
    pub creator: Person,
    pub category: Category,
    pub forum_id: ForumId,
    pub roster: Vec<Person>,
    pub snapshot: CapacitySnapshot,
    pub has_passed: bool,
}

impl From<EventDetail> for EventDetailResponse {
    fn from(detail: EventDetail) -> Self {
        Self {
            event: EventResponse::from(&detail.event),
            creator_name: detail.creator.name,
            category: detail.category.name,
            forum_id: detail.forum_id,
            participants: detail.roster.iter().map(ParticipantResponse::from).collect(),
            participant_count: detail.snapshot.joined,
            remaining: detail.snapshot.remaining(),
            is_full: detail.snapshot.is_full(),
            event_has_passed: detail.has_passed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(
            format_time(NaiveTime::from_hms_opt(18, 30, 0)),
            "06:30 PM"
        );
        assert_eq!(
            format_time(NaiveTime::from_hms_opt(0, 5, 0)),
            "12:05 AM"
        );
        assert_eq!(
            format_time(NaiveTime::from_hms_opt(12, 0, 0)),
            "12:00 PM"
        );
        assert_eq!(format_time(None), "TBD");
    }

    #[test]
    fn test_join_response_from_outcome() {
        let response = JoinResponse::from(JoinOutcome::Joined);
        assert!(response.joined);

        let response = JoinResponse::from(JoinOutcome::Full);
        assert!(!response.joined);
        assert_eq!(response.message, "Event is full");
    }

    #[test]
    fn test_capacity_response_from_snapshot() {
        let response = CapacityResponse::from(CapacitySnapshot {
            capacity: 5,
            joined: 3,
        });
        assert_eq!(response.remaining, 2);
        assert!(!response.is_full);
    }
}
