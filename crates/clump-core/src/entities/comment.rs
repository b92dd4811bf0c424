//! Comment entity - a forum post, optionally a reply to another comment

use chrono::{DateTime, Utc};

use crate::value_objects::{CommentId, ForumId, UserId};

/// Forum comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub forum_id: ForumId,
    pub author_id: UserId,
    pub parent_id: Option<CommentId>,
    pub content: String,
    pub posted_at: DateTime<Utc>,
}

impl Comment {
    /// Check if a user authored this comment
    #[inline]
    pub fn is_author(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    /// Check if this comment is a reply to another comment
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// Payload for posting a comment; the id is assigned by the database
#[derive(Debug, Clone)]
pub struct NewComment {
    pub forum_id: ForumId,
    pub author_id: UserId,
    pub parent_id: Option<CommentId>,
    pub content: String,
}

/// Comment joined with its author's display name, as the forum renders it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Comment {
        Comment {
            id: CommentId::new(1),
            forum_id: ForumId::new(2),
            author_id: UserId::new(3),
            parent_id: None,
            content: "Who's bringing snacks?".to_string(),
            posted_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_author() {
        let comment = sample();
        assert!(comment.is_author(UserId::new(3)));
        assert!(!comment.is_author(UserId::new(4)));
    }

    #[test]
    fn test_is_reply() {
        let mut comment = sample();
        assert!(!comment.is_reply());

        comment.parent_id = Some(CommentId::new(9));
        assert!(comment.is_reply());
    }
}
