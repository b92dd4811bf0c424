//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Every fixture gets a
//! unique suffix so parallel tests never collide on unique keys.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Days, NaiveDate, NaiveTime, Utc};

use clump_core::value_objects::{CategoryId, EventId, UserId};
use clump_service::dto::{
    CreateCommentRequest, CreateEventRequest, SignupRequest, UpdateEventRequest,
};
use clump_service::{EventService, PersonService, ServiceContext};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A date safely in the future
pub fn future_date() -> NaiveDate {
    Utc::now().date_naive() + Days::new(7)
}

/// A date safely in the past
pub fn past_date() -> NaiveDate {
    Utc::now().date_naive() - Days::new(7)
}

/// A unique signup request
pub fn signup_request() -> SignupRequest {
    let suffix = unique_suffix();
    SignupRequest {
        name: format!("Test Person {suffix}"),
        email: format!("test{suffix}.{}@example.edu", std::process::id()),
        bio: Some("integration test account".to_string()),
        class_year: Some(2027),
        pronouns: Some("they/them".to_string()),
    }
}

/// Register a person and return their id
pub async fn register_person(ctx: &ServiceContext) -> UserId {
    PersonService::new(ctx)
        .register(signup_request(), "hashed_password_123")
        .await
        .expect("fixture signup failed")
        .id
}

/// Insert a unique category directly and return its id
pub async fn seed_category(ctx: &ServiceContext) -> CategoryId {
    let suffix = unique_suffix();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO categories (name) VALUES ($1) RETURNING id",
    )
    .bind(format!("Category {suffix}-{}", std::process::id()))
    .fetch_one(ctx.pool())
    .await
    .expect("fixture category insert failed");

    CategoryId::new(id)
}

/// A create-event request for the given category, date, and capacity
pub fn event_request(
    category_id: CategoryId,
    date: NaiveDate,
    capacity: i32,
) -> CreateEventRequest {
    let suffix = unique_suffix();
    CreateEventRequest {
        title: format!("Test Event {suffix}"),
        description: Some("An integration test event".to_string()),
        date,
        starts_at: NaiveTime::from_hms_opt(18, 0, 0),
        ends_at: NaiveTime::from_hms_opt(20, 0, 0),
        city: "Wellesley".to_string(),
        state: "MA".to_string(),
        capacity,
        flexible: false,
        category_id: category_id.into_inner(),
    }
}

/// An update-event request mirroring `event_request`
pub fn update_request(
    category_id: CategoryId,
    date: NaiveDate,
    capacity: i32,
) -> UpdateEventRequest {
    let suffix = unique_suffix();
    UpdateEventRequest {
        title: format!("Updated Event {suffix}"),
        description: None,
        date,
        starts_at: NaiveTime::from_hms_opt(19, 0, 0),
        ends_at: None,
        city: "Boston".to_string(),
        state: "MA".to_string(),
        capacity,
        flexible: true,
        category_id: category_id.into_inner(),
    }
}

/// Register a creator and create an event with the given capacity.
/// Returns the event id and the creator's id.
pub async fn create_event(ctx: &ServiceContext, date: NaiveDate, capacity: i32) -> (EventId, UserId) {
    let creator = register_person(ctx).await;
    let category = seed_category(ctx).await;

    let event = EventService::new(ctx)
        .create_event(creator, event_request(category, date, capacity))
        .await
        .expect("fixture event creation failed");

    (event.id, creator)
}

/// A comment request
pub fn comment_request(content: &str, parent_id: Option<i64>) -> CreateCommentRequest {
    CreateCommentRequest {
        content: content.to_string(),
        parent_id,
    }
}
