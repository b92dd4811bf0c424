//! Forum service
//!
//! Handles the forum index, per-event comment threads, and comment
//! posting/deletion.

use chrono::Utc;
use tracing::{info, instrument};
use validator::Validate;

use clump_core::entities::NewComment;
use clump_core::value_objects::{CommentId, EventId, UserId};
use clump_core::DomainError;

use crate::dto::{
    CommentResponse, CreateCommentRequest, EventSummaryResponse, ForumThreadResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Forum service
pub struct ForumService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ForumService<'a> {
    /// Create a new ForumService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The forum index: every event with creator, category, participant and
    /// comment counts
    #[instrument(skip(self))]
    pub async fn listing(&self, show_past: bool) -> ServiceResult<Vec<EventSummaryResponse>> {
        let since = (!show_past).then(|| Utc::now().date_naive());
        let events = self.ctx.event_repo().list_with_stats(since).await?;
        Ok(events.into_iter().map(EventSummaryResponse::from).collect())
    }

    /// An event's comment thread
    #[instrument(skip(self))]
    pub async fn event_forum(&self, event_id: EventId) -> ServiceResult<ForumThreadResponse> {
        let forum = self
            .ctx
            .forum_repo()
            .find_by_event(event_id)
            .await?
            .ok_or(DomainError::ForumNotFound(event_id))?;

        let comments = self.ctx.forum_repo().comments(forum.id).await?;

        Ok(ForumThreadResponse {
            forum_id: forum.id,
            comment_count: comments.len() as i64,
            comments: comments.into_iter().map(CommentResponse::from).collect(),
        })
    }

    /// Post a comment (or a reply) to an event's forum
    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        event_id: EventId,
        author_id: UserId,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request.validate()?;

        if request.content.trim().is_empty() {
            return Err(ServiceError::validation("Comment cannot be empty"));
        }

        let author = self
            .ctx
            .person_repo()
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Person", author_id.to_string()))?;

        let forum = self
            .ctx
            .forum_repo()
            .find_by_event(event_id)
            .await?
            .ok_or(DomainError::ForumNotFound(event_id))?;

        let parent_id = match request.parent_id.map(CommentId::new) {
            Some(parent_id) => {
                let parent = self
                    .ctx
                    .forum_repo()
                    .find_comment(parent_id)
                    .await?
                    .ok_or(DomainError::CommentNotFound(parent_id))?;

                if parent.forum_id != forum.id {
                    return Err(ServiceError::validation(
                        "Reply must target a comment in the same forum",
                    ));
                }

                Some(parent_id)
            }
            None => None,
        };

        let comment_id = self
            .ctx
            .forum_repo()
            .add_comment(&NewComment {
                forum_id: forum.id,
                author_id,
                parent_id,
                content: request.content,
            })
            .await?;

        info!(event_id = %event_id, comment_id = %comment_id, author_id = %author_id, "Comment added");

        let comment = self
            .ctx
            .forum_repo()
            .find_comment(comment_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Created comment not found"))?;

        Ok(CommentResponse::new(comment, author.name))
    }

    /// Delete a comment; only the author may delete. Replies cascade.
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        comment_id: CommentId,
        actor_id: UserId,
    ) -> ServiceResult<()> {
        let comment = self
            .ctx
            .forum_repo()
            .find_comment(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if !comment.is_author(actor_id) {
            return Err(DomainError::NotCommentAuthor.into());
        }

        self.ctx.forum_repo().delete_comment(comment_id).await?;

        info!(comment_id = %comment_id, actor_id = %actor_id, "Comment deleted");

        Ok(())
    }

    /// Number of comments in an event's forum
    #[instrument(skip(self))]
    pub async fn comment_count(&self, event_id: EventId) -> ServiceResult<i64> {
        let forum = self
            .ctx
            .forum_repo()
            .find_by_event(event_id)
            .await?
            .ok_or(DomainError::ForumNotFound(event_id))?;

        Ok(self.ctx.forum_repo().comment_count(forum.id).await?)
    }
}
