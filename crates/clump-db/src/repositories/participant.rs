//! PostgreSQL implementation of ParticipantRepository
//!
//! Home of the capacity-guarded join. A plain count-then-insert has a
//! time-of-check-to-time-of-use gap: two concurrent joiners can both see a
//! free spot before either writes. `join` closes the gap by locking the
//! event row (`SELECT ... FOR UPDATE`) inside a transaction and re-counting
//! under the lock, so joins for one event serialize while other events stay
//! fully concurrent.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use clump_core::entities::{CapacitySnapshot, JoinOutcome, Person};
use clump_core::error::DomainError;
use clump_core::traits::{ParticipantRepository, RepoResult};
use clump_core::value_objects::{EventId, UserId};

use crate::models::{CapacityRow, PersonModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ParticipantRepository
#[derive(Clone)]
pub struct PgParticipantRepository {
    pool: PgPool,
}

impl PgParticipantRepository {
    /// Create a new PgParticipantRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for PgParticipantRepository {
    #[instrument(skip(self))]
    async fn join(&self, event_id: EventId, user_id: UserId) -> RepoResult<JoinOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the event row. Held until commit/rollback; every other join
        // for this event blocks here.
        let capacity = sqlx::query_scalar::<_, i32>(
            r"
            SELECT capacity FROM events WHERE id = $1 FOR UPDATE
            ",
        )
        .bind(event_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(capacity) = capacity else {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(JoinOutcome::NotFound);
        };

        // Re-count under the lock; any count taken before it may be stale.
        let joined = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM event_participants WHERE event_id = $1
            ",
        )
        .bind(event_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if joined >= i64::from(capacity) {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(JoinOutcome::Full);
        }

        sqlx::query(
            r"
            INSERT INTO event_participants (event_id, user_id)
            VALUES ($1, $2)
            ",
        )
        .bind(event_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyJoined))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(JoinOutcome::Joined)
    }

    #[instrument(skip(self))]
    async fn add(&self, event_id: EventId, user_id: UserId) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO event_participants (event_id, user_id)
            VALUES ($1, $2)
            ",
        )
        .bind(event_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyJoined))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn leave(&self, event_id: EventId, user_id: UserId) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM event_participants WHERE event_id = $1 AND user_id = $2
            ",
        )
        .bind(event_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn is_participant(&self, event_id: EventId, user_id: UserId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM event_participants WHERE event_id = $1 AND user_id = $2
            )
            ",
        )
        .bind(event_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn capacity_snapshot(&self, event_id: EventId) -> RepoResult<Option<CapacitySnapshot>> {
        let result = sqlx::query_as::<_, CapacityRow>(
            r"
            SELECT e.capacity, COUNT(ep.user_id) AS joined
            FROM events e
            LEFT JOIN event_participants ep ON ep.event_id = e.id
            WHERE e.id = $1
            GROUP BY e.id, e.capacity
            ",
        )
        .bind(event_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(CapacitySnapshot::from))
    }

    #[instrument(skip(self))]
    async fn count(&self, event_id: EventId) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM event_participants WHERE event_id = $1
            ",
        )
        .bind(event_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn roster(&self, event_id: EventId) -> RepoResult<Vec<Person>> {
        let results = sqlx::query_as::<_, PersonModel>(
            r"
            SELECT p.id, p.name, p.email, p.bio, p.class_year, p.pronouns, p.photo,
                   p.created_at, p.updated_at
            FROM event_participants ep
            JOIN people p ON p.id = ep.user_id
            WHERE ep.event_id = $1
            ORDER BY p.name
            ",
        )
        .bind(event_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Person::from).collect())
    }
}
