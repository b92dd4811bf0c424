//! Participant database models

use sqlx::FromRow;

/// Capacity and current participant count for one event
#[derive(Debug, Clone, FromRow)]
pub struct CapacityRow {
    pub capacity: i32,
    pub joined: i64,
}
