//! Forum entity - the discussion thread attached to each event

use crate::value_objects::{EventId, ForumId};

/// Forum entity (one per event, created with the event)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forum {
    pub id: ForumId,
    pub event_id: EventId,
}
