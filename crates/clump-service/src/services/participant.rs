//! Participant service - the caller-facing side of the membership register
//!
//! Runs the advisory prechecks (event exists, not closed, not already a
//! member) that exist purely for friendlier errors, then delegates to the
//! repository's transactional join, which is the authoritative capacity
//! check.

use chrono::Utc;
use tracing::{info, instrument};

use clump_core::entities::JoinOutcome;
use clump_core::value_objects::{EventId, UserId};
use clump_core::DomainError;

use crate::dto::{CapacityResponse, ParticipantResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Participant service
pub struct ParticipantService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ParticipantService<'a> {
    /// Create a new ParticipantService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Join an event.
    ///
    /// Returns the outcome tag observed under the lock; `Full` and
    /// `NotFound` are outcomes, not errors. The prechecks here are advisory
    /// only: even without them the unique key and the locked re-count keep
    /// every invariant.
    #[instrument(skip(self))]
    pub async fn join_event(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> ServiceResult<JoinOutcome> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", event_id.to_string()))?;

        // Joins close once the event date has passed. The repository never
        // consults the clock; the policy lives here.
        if event.is_past(Utc::now().date_naive()) {
            return Err(DomainError::EventClosed.into());
        }

        if self
            .ctx
            .participant_repo()
            .is_participant(event_id, user_id)
            .await?
        {
            return Err(DomainError::AlreadyJoined.into());
        }

        let outcome = self.ctx.participant_repo().join(event_id, user_id).await?;

        match outcome {
            JoinOutcome::Joined => {
                info!(event_id = %event_id, user_id = %user_id, "Participant joined event");
            }
            JoinOutcome::Full => {
                info!(event_id = %event_id, user_id = %user_id, "Join rejected: event full");
            }
            JoinOutcome::NotFound => {
                info!(event_id = %event_id, "Join rejected: event no longer exists");
            }
        }

        Ok(outcome)
    }

    /// Leave an event.
    ///
    /// The creator can never leave their own event. Leaving an event the
    /// user never joined is a silent no-op.
    #[instrument(skip(self))]
    pub async fn leave_event(&self, event_id: EventId, user_id: UserId) -> ServiceResult<()> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", event_id.to_string()))?;

        if event.is_creator(user_id) {
            return Err(DomainError::CreatorCannotLeave.into());
        }

        let removed = self.ctx.participant_repo().leave(event_id, user_id).await?;

        if removed {
            info!(event_id = %event_id, user_id = %user_id, "Participant left event");
        }

        Ok(())
    }

    /// Check whether a user currently participates in an event
    #[instrument(skip(self))]
    pub async fn is_participant(&self, event_id: EventId, user_id: UserId) -> ServiceResult<bool> {
        Ok(self
            .ctx
            .participant_repo()
            .is_participant(event_id, user_id)
            .await?)
    }

    /// Advisory capacity read for pre-rendering UI state
    #[instrument(skip(self))]
    pub async fn capacity(&self, event_id: EventId) -> ServiceResult<CapacityResponse> {
        let snapshot = self
            .ctx
            .participant_repo()
            .capacity_snapshot(event_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", event_id.to_string()))?;

        Ok(CapacityResponse::from(snapshot))
    }

    /// Current participants of an event, ordered by name
    #[instrument(skip(self))]
    pub async fn roster(&self, event_id: EventId) -> ServiceResult<Vec<ParticipantResponse>> {
        if self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("Event", event_id.to_string()));
        }

        let roster = self.ctx.participant_repo().roster(event_id).await?;
        Ok(roster.iter().map(ParticipantResponse::from).collect())
    }
}
