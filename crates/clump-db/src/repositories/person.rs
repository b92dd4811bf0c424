//! PostgreSQL implementation of PersonRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use clump_core::entities::{NewPerson, Person};
use clump_core::error::DomainError;
use clump_core::traits::{PersonRepository, RepoResult};
use clump_core::value_objects::UserId;

use crate::models::PersonModel;

use super::error::{map_db_error, map_unique_violation, person_not_found};

/// PostgreSQL implementation of PersonRepository
#[derive(Clone)]
pub struct PgPersonRepository {
    pool: PgPool,
}

impl PgPersonRepository {
    /// Create a new PgPersonRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<Person>> {
        let result = sqlx::query_as::<_, PersonModel>(
            r"
            SELECT id, name, email, bio, class_year, pronouns, photo, created_at, updated_at
            FROM people
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Person::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Person>> {
        let result = sqlx::query_as::<_, PersonModel>(
            r"
            SELECT id, name, email, bio, class_year, pronouns, photo, created_at, updated_at
            FROM people
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Person::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM people WHERE email = $1)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, person: &NewPerson, password_hash: &str) -> RepoResult<UserId> {
        // The unique constraint is the duplicate check; probing first would
        // reopen the race it closes.
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO people (name, email, password_hash, bio, class_year, pronouns)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(&person.name)
        .bind(&person.email)
        .bind(password_hash)
        .bind(&person.bio)
        .bind(person.class_year)
        .bind(&person.pronouns)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(UserId::new(id))
    }

    #[instrument(skip(self))]
    async fn update(&self, person: &Person) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE people
            SET name = $2, bio = $3, class_year = $4, pronouns = $5, photo = $6,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(person.id.into_inner())
        .bind(&person.name)
        .bind(&person.bio)
        .bind(person.class_year)
        .bind(&person.pronouns)
        .bind(&person.photo)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(person_not_found(person.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: UserId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM people WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(person_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM people WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPersonRepository>();
    }
}
