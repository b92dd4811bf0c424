//! Person database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the people table.
///
/// The password_hash column is deliberately absent; credential lookups go
/// through a dedicated scalar query.
#[derive(Debug, Clone, FromRow)]
pub struct PersonModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub class_year: Option<i32>,
    pub pronouns: Option<String>,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
