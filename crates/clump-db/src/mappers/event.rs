//! Event entity <-> model mapper

use clump_core::entities::{Event, EventWithStats};
use clump_core::value_objects::{CategoryId, EventId, ForumId, UserId};

use crate::models::{EventModel, EventWithStatsModel};

impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: EventId::new(model.id),
            title: model.title,
            description: model.description,
            date: model.date,
            starts_at: model.starts_at,
            ends_at: model.ends_at,
            city: model.city,
            state: model.state,
            capacity: model.capacity,
            flexible: model.flexible,
            category_id: CategoryId::new(model.category_id),
            created_by: UserId::new(model.created_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<EventWithStatsModel> for EventWithStats {
    fn from(model: EventWithStatsModel) -> Self {
        EventWithStats {
            event: Event {
                id: EventId::new(model.id),
                title: model.title,
                description: model.description,
                date: model.date,
                starts_at: model.starts_at,
                ends_at: model.ends_at,
                city: model.city,
                state: model.state,
                capacity: model.capacity,
                flexible: model.flexible,
                category_id: CategoryId::new(model.category_id),
                created_by: UserId::new(model.created_by),
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
            creator_name: model.creator_name,
            category: model.category,
            forum_id: ForumId::new(model.forum_id),
            participant_count: model.participant_count,
            comment_count: model.comment_count,
        }
    }
}
