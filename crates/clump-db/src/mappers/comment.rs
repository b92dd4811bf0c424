//! Comment entity <-> model mapper

use clump_core::entities::{Comment, CommentWithAuthor};
use clump_core::value_objects::{CommentId, ForumId, UserId};

use crate::models::{CommentModel, CommentWithAuthorModel};

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: CommentId::new(model.id),
            forum_id: ForumId::new(model.forum_id),
            author_id: UserId::new(model.author_id),
            parent_id: model.parent_id.map(CommentId::new),
            content: model.content,
            posted_at: model.posted_at,
        }
    }
}

impl From<CommentWithAuthorModel> for CommentWithAuthor {
    fn from(model: CommentWithAuthorModel) -> Self {
        CommentWithAuthor {
            comment: Comment {
                id: CommentId::new(model.id),
                forum_id: ForumId::new(model.forum_id),
                author_id: UserId::new(model.author_id),
                parent_id: model.parent_id.map(CommentId::new),
                content: model.content,
                posted_at: model.posted_at,
            },
            author_name: model.author_name,
        }
    }
}
