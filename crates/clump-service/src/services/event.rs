//! Event service
//!
//! Handles event creation, editing, deletion, and calendar queries.

use chrono::{NaiveDate, Utc};
use tracing::{info, instrument};
use validator::Validate;

use clump_core::entities::NewEvent;
use clump_core::value_objects::{CategoryId, EventId, UserId, Week};
use clump_core::DomainError;

use crate::dto::{
    CategoryResponse, CreateEventRequest, EventDetail, EventDetailResponse, EventResponse,
    UpdateEventRequest, WeekResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new event, its forum, and auto-add the creator as a
    /// participant
    #[instrument(skip(self, request))]
    pub async fn create_event(
        &self,
        creator_id: UserId,
        request: CreateEventRequest,
    ) -> ServiceResult<EventResponse> {
        request.validate()?;

        // The creator must exist; a dangling session id is a 404 here
        self.ctx
            .person_repo()
            .find_by_id(creator_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Person", creator_id.to_string()))?;

        let category_id = CategoryId::new(request.category_id);
        self.ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", category_id.to_string()))?;

        let new_event = NewEvent {
            title: request.title,
            description: request.description,
            date: request.date,
            starts_at: request.starts_at,
            ends_at: request.ends_at,
            city: request.city,
            state: request.state,
            capacity: request.capacity,
            flexible: request.flexible,
            category_id,
            created_by: creator_id,
        };

        let event_id = self.ctx.event_repo().create(&new_event).await?;
        self.ctx.forum_repo().create(event_id).await?;

        // The creator always holds a spot, even on a zero-capacity event,
        // so this bypasses the guarded join.
        self.ctx.participant_repo().add(event_id, creator_id).await?;

        info!(event_id = %event_id, creator_id = %creator_id, "Event created");

        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Created event not found"))?;

        Ok(EventResponse::from(&event))
    }

    /// Get event by ID
    #[instrument(skip(self))]
    pub async fn get_event(&self, event_id: EventId) -> ServiceResult<EventResponse> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", event_id.to_string()))?;

        Ok(EventResponse::from(&event))
    }

    /// Full event detail for the side panel: creator, category, roster,
    /// capacity state and whether the date has passed
    #[instrument(skip(self))]
    pub async fn get_event_detail(&self, event_id: EventId) -> ServiceResult<EventDetailResponse> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", event_id.to_string()))?;

        let creator = self
            .ctx
            .person_repo()
            .find_by_id(event.created_by)
            .await?
            .ok_or_else(|| ServiceError::internal("Event creator not found"))?;

        let category = self
            .ctx
            .category_repo()
            .find_by_id(event.category_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Event category not found"))?;

        let forum = self
            .ctx
            .forum_repo()
            .find_by_event(event_id)
            .await?
            .ok_or(DomainError::ForumNotFound(event_id))?;

        let roster = self.ctx.participant_repo().roster(event_id).await?;
        let snapshot = self
            .ctx
            .participant_repo()
            .capacity_snapshot(event_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", event_id.to_string()))?;

        let has_passed = event.is_past(Utc::now().date_naive());

        Ok(EventDetailResponse::from(EventDetail {
            event,
            creator,
            category,
            forum_id: forum.id,
            roster,
            snapshot,
            has_passed,
        }))
    }

    /// Events in the Sunday-based week containing the target date
    #[instrument(skip(self))]
    pub async fn week_events(&self, target: NaiveDate) -> ServiceResult<WeekResponse> {
        let week = Week::containing(target);
        let events = self
            .ctx
            .event_repo()
            .find_in_range(week.start(), week.end())
            .await?;

        Ok(WeekResponse {
            week_start: week.start(),
            week_end: week.end(),
            events: events.iter().map(EventResponse::from).collect(),
        })
    }

    /// All events, optionally including ones whose date has passed
    #[instrument(skip(self))]
    pub async fn list_events(&self, show_past: bool) -> ServiceResult<Vec<EventResponse>> {
        let since = (!show_past).then(|| Utc::now().date_naive());
        let events = self.ctx.event_repo().list(since).await?;
        Ok(events.iter().map(EventResponse::from).collect())
    }

    /// Update an event; only the creator may edit
    #[instrument(skip(self, request))]
    pub async fn update_event(
        &self,
        event_id: EventId,
        actor_id: UserId,
        request: UpdateEventRequest,
    ) -> ServiceResult<EventResponse> {
        request.validate()?;

        let mut event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", event_id.to_string()))?;

        if !event.is_creator(actor_id) {
            return Err(DomainError::NotEventCreator.into());
        }

        let category_id = CategoryId::new(request.category_id);
        self.ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", category_id.to_string()))?;

        event.title = request.title;
        event.description = request.description;
        event.date = request.date;
        event.starts_at = request.starts_at;
        event.ends_at = request.ends_at;
        event.city = request.city;
        event.state = request.state;
        event.capacity = request.capacity;
        event.flexible = request.flexible;
        event.category_id = category_id;
        event.updated_at = Utc::now();

        self.ctx.event_repo().update(&event).await?;

        info!(event_id = %event_id, actor_id = %actor_id, "Event updated");

        Ok(EventResponse::from(&event))
    }

    /// Delete an event; only the creator may delete. Participants, forum
    /// and comments cascade.
    #[instrument(skip(self))]
    pub async fn delete_event(&self, event_id: EventId, actor_id: UserId) -> ServiceResult<()> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", event_id.to_string()))?;

        if !event.is_creator(actor_id) {
            return Err(DomainError::NotEventCreator.into());
        }

        self.ctx.event_repo().delete(event_id).await?;

        info!(event_id = %event_id, actor_id = %actor_id, "Event deleted");

        Ok(())
    }

    /// Categories for the create/edit event form
    #[instrument(skip(self))]
    pub async fn categories(&self) -> ServiceResult<Vec<CategoryResponse>> {
        let categories = self.ctx.category_repo().find_all().await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    /// Events a user created, optionally including past ones
    #[instrument(skip(self))]
    pub async fn created_events(
        &self,
        user_id: UserId,
        show_past: bool,
    ) -> ServiceResult<Vec<EventResponse>> {
        let since = (!show_past).then(|| Utc::now().date_naive());
        let events = self.ctx.event_repo().find_created_by(user_id, since).await?;
        Ok(events.iter().map(EventResponse::from).collect())
    }

    /// Events a user joined, optionally including past ones
    #[instrument(skip(self))]
    pub async fn joined_events(
        &self,
        user_id: UserId,
        show_past: bool,
    ) -> ServiceResult<Vec<EventResponse>> {
        let since = (!show_past).then(|| Utc::now().date_naive());
        let events = self.ctx.event_repo().find_joined_by(user_id, since).await?;
        Ok(events.iter().map(EventResponse::from).collect())
    }
}
