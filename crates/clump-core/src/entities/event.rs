//! Event entity - a capacity-bounded gathering on the calendar

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::value_objects::{CategoryId, EventId, ForumId, UserId};

/// Event entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub starts_at: Option<NaiveTime>,
    pub ends_at: Option<NaiveTime>,
    pub city: String,
    pub state: String,
    pub capacity: i32,
    pub flexible: bool,
    pub category_id: CategoryId,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Check if a user is the event creator
    #[inline]
    pub fn is_creator(&self, user_id: UserId) -> bool {
        self.created_by == user_id
    }

    /// Check if the event date has passed; closed events reject new joins
    #[inline]
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.date < today
    }
}

/// Payload for creating an event; the id is assigned by the database
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub starts_at: Option<NaiveTime>,
    pub ends_at: Option<NaiveTime>,
    pub city: String,
    pub state: String,
    pub capacity: i32,
    pub flexible: bool,
    pub category_id: CategoryId,
    pub created_by: UserId,
}

/// Event with the aggregates the forum index displays
#[derive(Debug, Clone)]
pub struct EventWithStats {
    pub event: Event,
    pub creator_name: String,
    pub category: String,
    pub forum_id: ForumId,
    pub participant_count: i64,
    pub comment_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Event {
        let now = Utc::now();
        Event {
            id: EventId::new(1),
            title: "Study jam".to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
            starts_at: NaiveTime::from_hms_opt(18, 0, 0),
            ends_at: NaiveTime::from_hms_opt(20, 0, 0),
            city: "Wellesley".to_string(),
            state: "MA".to_string(),
            capacity: 10,
            flexible: false,
            category_id: CategoryId::new(1),
            created_by: UserId::new(7),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_is_creator() {
        let event = sample();
        assert!(event.is_creator(UserId::new(7)));
        assert!(!event.is_creator(UserId::new(8)));
    }

    #[test]
    fn test_is_past() {
        let event = sample();
        assert!(!event.is_past(NaiveDate::from_ymd_opt(2025, 5, 10).unwrap()));
        assert!(!event.is_past(NaiveDate::from_ymd_opt(2025, 5, 9).unwrap()));
        assert!(event.is_past(NaiveDate::from_ymd_opt(2025, 5, 11).unwrap()));
    }
}
