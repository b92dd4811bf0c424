//! Forum database model

use sqlx::FromRow;

/// Database model for the forums table
#[derive(Debug, Clone, FromRow)]
pub struct ForumModel {
    pub id: i64,
    pub event_id: i64,
}
