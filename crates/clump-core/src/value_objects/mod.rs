//! Value objects - immutable types that represent domain concepts

mod ids;
mod week;

pub use ids::{CategoryId, CommentId, EventId, ForumId, IdParseError, UserId};
pub use week::Week;
