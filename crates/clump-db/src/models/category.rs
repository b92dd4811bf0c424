//! Category database model

use sqlx::FromRow;

/// Database model for the categories table
#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: i64,
    pub name: String,
}
