//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use clump_core::entities::{Event, EventWithStats, NewEvent};
use clump_core::traits::{EventRepository, RepoResult};
use clump_core::value_objects::{EventId, UserId};

use crate::models::{EventModel, EventWithStatsModel};

use super::error::{event_not_found, map_db_error};

const EVENT_COLUMNS: &str = "id, title, description, date, starts_at, ends_at, city, state, \
     capacity, flexible, category_id, created_by, created_at, updated_at";

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Event::from))
    }

    #[instrument(skip(self))]
    async fn find_in_range(&self, start: NaiveDate, end: NaiveDate) -> RepoResult<Vec<Event>> {
        let results = sqlx::query_as::<_, EventModel>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events \
             WHERE date BETWEEN $1 AND $2 \
             ORDER BY date, starts_at"
        ))
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn list(&self, since: Option<NaiveDate>) -> RepoResult<Vec<Event>> {
        let results = match since {
            Some(since) => {
                sqlx::query_as::<_, EventModel>(&format!(
                    "SELECT {EVENT_COLUMNS} FROM events \
                     WHERE date >= $1 \
                     ORDER BY date, starts_at"
                ))
                .bind(since)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, EventModel>(&format!(
                    "SELECT {EVENT_COLUMNS} FROM events ORDER BY date, starts_at"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_with_stats(
        &self,
        since: Option<NaiveDate>,
    ) -> RepoResult<Vec<EventWithStats>> {
        let results = sqlx::query_as::<_, EventWithStatsModel>(
            r"
            SELECT e.id, e.title, e.description, e.date, e.starts_at, e.ends_at,
                   e.city, e.state, e.capacity, e.flexible, e.category_id, e.created_by,
                   e.created_at, e.updated_at,
                   p.name AS creator_name, c.name AS category, f.id AS forum_id,
                   COUNT(DISTINCT ep.user_id) AS participant_count,
                   COUNT(DISTINCT co.id) AS comment_count
            FROM events e
            JOIN people p ON p.id = e.created_by
            JOIN categories c ON c.id = e.category_id
            JOIN forums f ON f.event_id = e.id
            LEFT JOIN event_participants ep ON ep.event_id = e.id
            LEFT JOIN comments co ON co.forum_id = f.id
            WHERE ($1::date IS NULL OR e.date >= $1)
            GROUP BY e.id, p.name, c.name, f.id
            ORDER BY e.date, e.starts_at
            ",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(EventWithStats::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_created_by(
        &self,
        user_id: UserId,
        since: Option<NaiveDate>,
    ) -> RepoResult<Vec<Event>> {
        let results = sqlx::query_as::<_, EventModel>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events \
             WHERE created_by = $1 AND ($2::date IS NULL OR date >= $2) \
             ORDER BY date, starts_at"
        ))
        .bind(user_id.into_inner())
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_joined_by(
        &self,
        user_id: UserId,
        since: Option<NaiveDate>,
    ) -> RepoResult<Vec<Event>> {
        let results = sqlx::query_as::<_, EventModel>(
            r"
            SELECT e.id, e.title, e.description, e.date, e.starts_at, e.ends_at,
                   e.city, e.state, e.capacity, e.flexible, e.category_id, e.created_by,
                   e.created_at, e.updated_at
            FROM events e
            JOIN event_participants ep ON ep.event_id = e.id
            WHERE ep.user_id = $1 AND ($2::date IS NULL OR e.date >= $2)
            ORDER BY e.date, e.starts_at
            ",
        )
        .bind(user_id.into_inner())
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, event: &NewEvent) -> RepoResult<EventId> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO events (title, description, date, starts_at, ends_at,
                                city, state, capacity, flexible, category_id, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            ",
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date)
        .bind(event.starts_at)
        .bind(event.ends_at)
        .bind(&event.city)
        .bind(&event.state)
        .bind(event.capacity)
        .bind(event.flexible)
        .bind(event.category_id.into_inner())
        .bind(event.created_by.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(EventId::new(id))
    }

    #[instrument(skip(self))]
    async fn update(&self, event: &Event) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE events
            SET title = $2, description = $3, date = $4, starts_at = $5, ends_at = $6,
                city = $7, state = $8, capacity = $9, flexible = $10, category_id = $11,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(event.id.into_inner())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date)
        .bind(event.starts_at)
        .bind(event.ends_at)
        .bind(&event.city)
        .bind(&event.state)
        .bind(event.capacity)
        .bind(event.flexible)
        .bind(event.category_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(event.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EventId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM events WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgEventRepository>();
    }
}
