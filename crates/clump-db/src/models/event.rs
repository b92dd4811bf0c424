//! Event database models

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

/// Database model for the events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub starts_at: Option<NaiveTime>,
    pub ends_at: Option<NaiveTime>,
    pub city: String,
    pub state: String,
    pub capacity: i32,
    pub flexible: bool,
    pub category_id: i64,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Event row joined with creator, category and count aggregates
/// (from the forum index query)
#[derive(Debug, Clone, FromRow)]
pub struct EventWithStatsModel {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub starts_at: Option<NaiveTime>,
    pub ends_at: Option<NaiveTime>,
    pub city: String,
    pub state: String,
    pub capacity: i32,
    pub flexible: bool,
    pub category_id: i64,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub creator_name: String,
    pub category: String,
    pub forum_id: i64,
    pub participant_count: i64,
    pub comment_count: i64,
}
