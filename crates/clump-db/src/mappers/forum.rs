//! Forum entity <-> model mapper

use clump_core::entities::Forum;
use clump_core::value_objects::{EventId, ForumId};

use crate::models::ForumModel;

impl From<ForumModel> for Forum {
    fn from(model: ForumModel) -> Self {
        Forum {
            id: ForumId::new(model.id),
            event_id: EventId::new(model.event_id),
        }
    }
}
