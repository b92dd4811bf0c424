//! PostgreSQL implementation of ForumRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use clump_core::entities::{Comment, CommentWithAuthor, Forum, NewComment};
use clump_core::traits::{ForumRepository, RepoResult};
use clump_core::value_objects::{CommentId, EventId, ForumId};

use crate::models::{CommentModel, CommentWithAuthorModel, ForumModel};

use super::error::{comment_not_found, map_db_error};

/// PostgreSQL implementation of ForumRepository
#[derive(Clone)]
pub struct PgForumRepository {
    pool: PgPool,
}

impl PgForumRepository {
    /// Create a new PgForumRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ForumRepository for PgForumRepository {
    #[instrument(skip(self))]
    async fn find_by_event(&self, event_id: EventId) -> RepoResult<Option<Forum>> {
        let result = sqlx::query_as::<_, ForumModel>(
            r"
            SELECT id, event_id FROM forums WHERE event_id = $1
            ",
        )
        .bind(event_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Forum::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, event_id: EventId) -> RepoResult<ForumId> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO forums (event_id) VALUES ($1) RETURNING id
            ",
        )
        .bind(event_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ForumId::new(id))
    }

    #[instrument(skip(self))]
    async fn comments(&self, forum_id: ForumId) -> RepoResult<Vec<CommentWithAuthor>> {
        let results = sqlx::query_as::<_, CommentWithAuthorModel>(
            r"
            SELECT co.id, co.forum_id, co.author_id, co.parent_id, co.content, co.posted_at,
                   p.name AS author_name
            FROM comments co
            JOIN people p ON p.id = co.author_id
            WHERE co.forum_id = $1
            ORDER BY co.posted_at
            ",
        )
        .bind(forum_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CommentWithAuthor::from).collect())
    }

    #[instrument(skip(self))]
    async fn comment_count(&self, forum_id: ForumId) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM comments WHERE forum_id = $1
            ",
        )
        .bind(forum_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn find_comment(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, forum_id, author_id, parent_id, content, posted_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self, comment))]
    async fn add_comment(&self, comment: &NewComment) -> RepoResult<CommentId> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO comments (forum_id, author_id, parent_id, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(comment.forum_id.into_inner())
        .bind(comment.author_id.into_inner())
        .bind(comment.parent_id.map(CommentId::into_inner))
        .bind(&comment.content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(CommentId::new(id))
    }

    #[instrument(skip(self))]
    async fn delete_comment(&self, id: CommentId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM comments WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(id));
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
        assert_send_sync::<PgForumRepository>();
    }
}
