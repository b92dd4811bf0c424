//! Service-level integration tests
//!
//! These tests require a running PostgreSQL instance reachable through the
//! DATABASE_URL environment variable; they skip quietly otherwise.
//!
//! Run with: cargo test -p integration-tests --test service_tests

use integration_tests::{
    comment_request, create_event, event_request, future_date, past_date, register_person,
    seed_category, signup_request, test_context, update_request,
};

use clump_core::entities::JoinOutcome;
use clump_core::DomainError;
use clump_service::dto::UpdateProfileRequest;
use clump_service::{
    EventService, ForumService, ParticipantService, PersonService, ServiceError,
};

// ============================================================================
// Account Tests
// ============================================================================

#[tokio::test]
async fn test_signup_and_profile() {
    let Some(ctx) = test_context().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };
    let people = PersonService::new(&ctx);

    let request = signup_request();
    let email = request.email.clone();
    let created = people.register(request, "hash_abc").await.unwrap();
    assert_eq!(created.email, email);

    let fetched = people.get_person(created.id).await.unwrap();
    assert_eq!(fetched.name, created.name);

    let updated = people
        .update_profile(
            created.id,
            UpdateProfileRequest {
                name: "Renamed".to_string(),
                bio: None,
                class_year: Some(2026),
                pronouns: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Renamed");
    assert!(updated.bio.is_none());

    people.delete_account(created.id).await.unwrap();
    let gone = people.get_person(created.id).await;
    assert_eq!(gone.unwrap_err().status_code(), 404);
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let Some(ctx) = test_context().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };
    let people = PersonService::new(&ctx);

    let request = signup_request();
    people.register(request.clone(), "hash_a").await.unwrap();

    let err = people.register(request, "hash_b").await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::EmailAlreadyExists)
    ));
    assert_eq!(err.status_code(), 409);
}

// ============================================================================
// Event Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_create_event_adds_creator_and_forum() {
    let Some(ctx) = test_context().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let (event_id, creator) = create_event(&ctx, future_date(), 10).await;

    let detail = EventService::new(&ctx).get_event_detail(event_id).await.unwrap();
    assert_eq!(detail.participant_count, 1);
    assert!(detail.participants.iter().any(|p| p.id == creator));
    assert_eq!(detail.remaining, 9);
    assert!(!detail.is_full);
    assert!(!detail.event_has_passed);

    // The forum is created with the event, empty
    let thread = ForumService::new(&ctx).event_forum(event_id).await.unwrap();
    assert_eq!(thread.forum_id, detail.forum_id);
    assert_eq!(thread.comment_count, 0);
}

#[tokio::test]
async fn test_only_creator_can_edit_and_delete() {
    let Some(ctx) = test_context().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };
    let events = EventService::new(&ctx);

    let (event_id, creator) = create_event(&ctx, future_date(), 10).await;
    let stranger = register_person(&ctx).await;
    let category = seed_category(&ctx).await;

    let update = update_request(category, future_date(), 12);

    let err = events
        .update_event(event_id, stranger, update.clone())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::NotEventCreator)
    ));
    assert_eq!(err.status_code(), 403);

    let expected_title = update.title.clone();
    let updated = events.update_event(event_id, creator, update).await.unwrap();
    assert_eq!(updated.title, expected_title);
    assert_eq!(updated.capacity, 12);
    assert!(updated.flexible);

    let err = events.delete_event(event_id, stranger).await.unwrap_err();
    assert_eq!(err.status_code(), 403);

    events.delete_event(event_id, creator).await.unwrap();
    let err = events.get_event(event_id).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_week_events() {
    let Some(ctx) = test_context().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };
    let events = EventService::new(&ctx);

    // 2031-03-12 is a Wednesday; its week runs Sunday 03-09 .. Saturday 03-15
    let wednesday = chrono::NaiveDate::from_ymd_opt(2031, 3, 12).unwrap();
    let saturday = chrono::NaiveDate::from_ymd_opt(2031, 3, 15).unwrap();
    let next_sunday = chrono::NaiveDate::from_ymd_opt(2031, 3, 16).unwrap();

    let (inside, _) = create_event(&ctx, saturday, 10).await;
    let (outside, _) = create_event(&ctx, next_sunday, 10).await;

    let week = events.week_events(wednesday).await.unwrap();
    assert_eq!(
        week.week_start,
        chrono::NaiveDate::from_ymd_opt(2031, 3, 9).unwrap()
    );
    assert_eq!(week.week_end, saturday);

    let ids: Vec<_> = week.events.iter().map(|e| e.id).collect();
    assert!(ids.contains(&inside));
    assert!(!ids.contains(&outside));
}

// ============================================================================
// Membership Register Tests
// ============================================================================

#[tokio::test]
async fn test_join_and_leave_flow() {
    let Some(ctx) = test_context().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };
    let participants = ParticipantService::new(&ctx);

    let (event_id, _creator) = create_event(&ctx, future_date(), 5).await;
    let joiner = register_person(&ctx).await;

    let outcome = participants.join_event(event_id, joiner).await.unwrap();
    assert_eq!(outcome, JoinOutcome::Joined);
    assert!(participants.is_participant(event_id, joiner).await.unwrap());

    let capacity = participants.capacity(event_id).await.unwrap();
    assert_eq!(capacity.joined, 2); // creator + joiner
    assert_eq!(capacity.remaining, 3);

    // A second join is caught by the advisory precheck
    let err = participants.join_event(event_id, joiner).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::AlreadyJoined)
    ));

    participants.leave_event(event_id, joiner).await.unwrap();
    assert!(!participants.is_participant(event_id, joiner).await.unwrap());

    // Leaving an event never joined is a silent no-op
    participants.leave_event(event_id, joiner).await.unwrap();
    let capacity = participants.capacity(event_id).await.unwrap();
    assert_eq!(capacity.joined, 1);
}

#[tokio::test]
async fn test_creator_cannot_leave() {
    let Some(ctx) = test_context().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };
    let participants = ParticipantService::new(&ctx);

    let (event_id, creator) = create_event(&ctx, future_date(), 5).await;

    let err = participants.leave_event(event_id, creator).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::CreatorCannotLeave)
    ));
    assert_eq!(err.status_code(), 403);

    // Still on the roster
    assert!(participants.is_participant(event_id, creator).await.unwrap());
}

#[tokio::test]
async fn test_join_full_event_reports_full() {
    let Some(ctx) = test_context().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };
    let participants = ParticipantService::new(&ctx);

    // Capacity 1 is taken by the auto-added creator
    let (event_id, _creator) = create_event(&ctx, future_date(), 1).await;
    let joiner = register_person(&ctx).await;

    let outcome = participants.join_event(event_id, joiner).await.unwrap();
    assert_eq!(outcome, JoinOutcome::Full);
    assert!(!participants.is_participant(event_id, joiner).await.unwrap());

    let capacity = participants.capacity(event_id).await.unwrap();
    assert!(capacity.is_full);
    assert_eq!(capacity.joined, 1);
}

#[tokio::test]
async fn test_cannot_join_closed_event() {
    let Some(ctx) = test_context().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };
    let participants = ParticipantService::new(&ctx);

    let (event_id, _creator) = create_event(&ctx, past_date(), 5).await;
    let joiner = register_person(&ctx).await;

    let err = participants.join_event(event_id, joiner).await.unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::EventClosed)));
    assert_eq!(err.status_code(), 400);

    let capacity = participants.capacity(event_id).await.unwrap();
    assert_eq!(capacity.joined, 1);
}

#[tokio::test]
async fn test_concurrent_joins_respect_capacity() {
    let Some(ctx) = test_context().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    // Capacity 3, one spot taken by the creator: two joins can succeed
    let (event_id, _creator) = create_event(&ctx, future_date(), 3).await;

    let mut joiners = Vec::new();
    for _ in 0..5 {
        joiners.push(register_person(&ctx).await);
    }

    let mut handles = Vec::new();
    for joiner in joiners {
        let ctx = ctx.clone();
        handles.push(tokio::spawn(async move {
            ParticipantService::new(&ctx).join_event(event_id, joiner).await
        }));
    }

    let mut joined = 0;
    let mut full = 0;
    for handle in handles {
        match handle.await.unwrap().unwrap() {
            JoinOutcome::Joined => joined += 1,
            JoinOutcome::Full => full += 1,
            JoinOutcome::NotFound => panic!("event disappeared mid-test"),
        }
    }

    assert_eq!(joined, 2, "exactly the free spots are filled");
    assert_eq!(full, 3);

    let capacity = ParticipantService::new(&ctx).capacity(event_id).await.unwrap();
    assert_eq!(capacity.joined, 3);
    assert!(capacity.is_full);
}

// ============================================================================
// Forum Tests
// ============================================================================

#[tokio::test]
async fn test_forum_comment_flow() {
    let Some(ctx) = test_context().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };
    let forums = ForumService::new(&ctx);

    let (event_id, creator) = create_event(&ctx, future_date(), 10).await;
    let commenter = register_person(&ctx).await;

    let comment = forums
        .add_comment(event_id, commenter, comment_request("Who's driving?", None))
        .await
        .unwrap();
    assert!(!comment.author_name.is_empty());

    let reply = forums
        .add_comment(
            event_id,
            creator,
            comment_request("I can take three people", Some(comment.id.into_inner())),
        )
        .await
        .unwrap();
    assert_eq!(reply.parent_id, Some(comment.id));

    let thread = forums.event_forum(event_id).await.unwrap();
    assert_eq!(thread.comment_count, 2);
    assert_eq!(thread.comments[0].id, comment.id);

    // Only the author may delete
    let err = forums.delete_comment(comment.id, creator).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::NotCommentAuthor)
    ));
    assert_eq!(err.status_code(), 403);

    // Author delete cascades to the reply
    forums.delete_comment(comment.id, commenter).await.unwrap();
    let thread = forums.event_forum(event_id).await.unwrap();
    assert_eq!(thread.comment_count, 0);
}

#[tokio::test]
async fn test_forum_listing_counts() {
    let Some(ctx) = test_context().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };
    let forums = ForumService::new(&ctx);

    let (event_id, creator) = create_event(&ctx, future_date(), 10).await;
    let joiner = register_person(&ctx).await;
    ParticipantService::new(&ctx)
        .join_event(event_id, joiner)
        .await
        .unwrap();
    forums
        .add_comment(event_id, creator, comment_request("See you there", None))
        .await
        .unwrap();

    let listing = forums.listing(false).await.unwrap();
    let entry = listing
        .iter()
        .find(|e| e.event.id == event_id)
        .expect("event missing from forum listing");

    assert_eq!(entry.participant_count, 2);
    assert_eq!(entry.comment_count, 1);
    assert!(!entry.creator_name.is_empty());

    // A past event only shows up when asked for
    let (past_event, _) = create_event(&ctx, past_date(), 10).await;
    let upcoming = forums.listing(false).await.unwrap();
    assert!(!upcoming.iter().any(|e| e.event.id == past_event));
    let all = forums.listing(true).await.unwrap();
    assert!(all.iter().any(|e| e.event.id == past_event));
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_profile_created_and_joined_events() {
    let Some(ctx) = test_context().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };
    let people = PersonService::new(&ctx);

    let (event_id, creator) = create_event(&ctx, future_date(), 10).await;

    // A second, past-dated event by the same creator
    let category = seed_category(&ctx).await;
    let past_event = EventService::new(&ctx)
        .create_event(creator, event_request(category, past_date(), 10))
        .await
        .unwrap()
        .id;

    let joiner = register_person(&ctx).await;
    ParticipantService::new(&ctx)
        .join_event(event_id, joiner)
        .await
        .unwrap();

    let joiner_profile = people.profile(joiner, false, false).await.unwrap();
    assert!(joiner_profile.joined_events.iter().any(|e| e.id == event_id));
    assert!(joiner_profile.created_events.is_empty());

    // Past events are hidden unless requested
    let profile = people.profile(creator, false, false).await.unwrap();
    assert!(profile.created_events.iter().any(|e| e.id == event_id));
    assert!(!profile.created_events.iter().any(|e| e.id == past_event));

    let with_past = people.profile(creator, true, false).await.unwrap();
    assert!(with_past.created_events.iter().any(|e| e.id == past_event));
}
