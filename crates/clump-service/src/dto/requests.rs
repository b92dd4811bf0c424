//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Account Requests
// ============================================================================

/// Account registration request.
///
/// The raw password never reaches this layer; the boundary hashes it and
/// passes the hash alongside this request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 30, message = "Name must be 1-30 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 100, message = "Bio must be at most 100 characters"))]
    pub bio: Option<String>,

    pub class_year: Option<i32>,

    #[validate(length(max = 30, message = "Pronouns must be at most 30 characters"))]
    pub pronouns: Option<String>,
}

/// Update profile request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 30, message = "Name must be 1-30 characters"))]
    pub name: String,

    #[validate(length(max = 100, message = "Bio must be at most 100 characters"))]
    pub bio: Option<String>,

    pub class_year: Option<i32>,

    #[validate(length(max = 30, message = "Pronouns must be at most 30 characters"))]
    pub pronouns: Option<String>,
}

// ============================================================================
// Event Requests
// ============================================================================

/// Create event request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub date: NaiveDate,

    pub starts_at: Option<NaiveTime>,

    pub ends_at: Option<NaiveTime>,

    #[validate(length(min = 1, max = 50, message = "City must be 1-50 characters"))]
    pub city: String,

    #[validate(length(min = 1, max = 20, message = "State must be 1-20 characters"))]
    pub state: String,

    /// Maximum number of participants; omitted means 10
    #[serde(default = "default_capacity")]
    #[validate(range(min = 0, message = "Capacity must be non-negative"))]
    pub capacity: i32,

    /// Whether the schedule is flexible
    #[serde(default)]
    pub flexible: bool,

    pub category_id: i64,
}

/// Update event request (full-field replace)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub date: NaiveDate,

    pub starts_at: Option<NaiveTime>,

    pub ends_at: Option<NaiveTime>,

    #[validate(length(min = 1, max = 50, message = "City must be 1-50 characters"))]
    pub city: String,

    #[validate(length(min = 1, max = 20, message = "State must be 1-20 characters"))]
    pub state: String,

    #[serde(default = "default_capacity")]
    #[validate(range(min = 0, message = "Capacity must be non-negative"))]
    pub capacity: i32,

    #[serde(default)]
    pub flexible: bool,

    pub category_id: i64,
}

fn default_capacity() -> i32 {
    10
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Post a comment to an event's forum; set parent_id to reply
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub content: String,

    pub parent_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_validation() {
        let request = SignupRequest {
            name: "Ada".to_string(),
            email: "ada@example.edu".to_string(),
            bio: None,
            class_year: Some(2027),
            pronouns: None,
        };
        assert!(request.validate().is_ok());

        let bad_email = SignupRequest {
            email: "not-an-email".to_string(),
            ..request.clone()
        };
        assert!(bad_email.validate().is_err());

        let empty_name = SignupRequest {
            name: String::new(),
            ..request
        };
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_create_event_request_validation() {
        let request = CreateEventRequest {
            title: "Picnic".to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            starts_at: None,
            ends_at: None,
            city: "Wellesley".to_string(),
            state: "MA".to_string(),
            capacity: 10,
            flexible: false,
            category_id: 1,
        };
        assert!(request.validate().is_ok());

        let negative_capacity = CreateEventRequest {
            capacity: -1,
            ..request.clone()
        };
        assert!(negative_capacity.validate().is_err());

        let zero_capacity = CreateEventRequest {
            capacity: 0,
            ..request
        };
        assert!(zero_capacity.validate().is_ok());
    }

    #[test]
    fn test_capacity_defaults_to_ten() {
        let json = r#"{
            "title": "Picnic",
            "date": "2025-06-01",
            "city": "Wellesley",
            "state": "MA",
            "category_id": 1
        }"#;

        let request: CreateEventRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.capacity, 10);
        assert!(!request.flexible);
    }

    #[test]
    fn test_comment_request_validation() {
        let request = CreateCommentRequest {
            content: "Sounds fun!".to_string(),
            parent_id: None,
        };
        assert!(request.validate().is_ok());

        let empty = CreateCommentRequest {
            content: String::new(),
            parent_id: None,
        };
        assert!(empty.validate().is_err());
    }
}
