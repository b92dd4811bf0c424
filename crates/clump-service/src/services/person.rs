//! Person service
//!
//! Handles registration, profiles, and account deletion. Password hashing
//! is the boundary layer's job; this layer only stores the opaque hash.

use chrono::Utc;
use tracing::{info, instrument};
use validator::Validate;

use clump_core::entities::NewPerson;
use clump_core::value_objects::UserId;

use crate::dto::{
    EventResponse, PersonResponse, ProfileResponse, SignupRequest, UpdateProfileRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Person service
pub struct PersonService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PersonService<'a> {
    /// Create a new PersonService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account. A duplicate email surfaces as
    /// `EmailAlreadyExists` from the unique constraint.
    #[instrument(skip(self, request, password_hash))]
    pub async fn register(
        &self,
        request: SignupRequest,
        password_hash: &str,
    ) -> ServiceResult<PersonResponse> {
        request.validate()?;

        let new_person = NewPerson {
            name: request.name,
            email: request.email,
            bio: request.bio,
            class_year: request.class_year,
            pronouns: request.pronouns,
        };

        let id = self.ctx.person_repo().create(&new_person, password_hash).await?;

        info!(user_id = %id, "Person registered");

        let person = self
            .ctx
            .person_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::internal("Created person not found"))?;

        Ok(PersonResponse::from(&person))
    }

    /// Get a person by ID
    #[instrument(skip(self))]
    pub async fn get_person(&self, user_id: UserId) -> ServiceResult<PersonResponse> {
        let person = self
            .ctx
            .person_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Person", user_id.to_string()))?;

        Ok(PersonResponse::from(&person))
    }

    /// The profile page: the person plus the events they created and joined
    #[instrument(skip(self))]
    pub async fn profile(
        &self,
        user_id: UserId,
        show_past_created: bool,
        show_past_joined: bool,
    ) -> ServiceResult<ProfileResponse> {
        let person = self
            .ctx
            .person_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Person", user_id.to_string()))?;

        let today = Utc::now().date_naive();

        let created = self
            .ctx
            .event_repo()
            .find_created_by(user_id, (!show_past_created).then_some(today))
            .await?;

        let joined = self
            .ctx
            .event_repo()
            .find_joined_by(user_id, (!show_past_joined).then_some(today))
            .await?;

        Ok(ProfileResponse {
            person: PersonResponse::from(&person),
            created_events: created.iter().map(EventResponse::from).collect(),
            joined_events: joined.iter().map(EventResponse::from).collect(),
        })
    }

    /// Update the editable profile fields
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: UserId,
        request: UpdateProfileRequest,
    ) -> ServiceResult<PersonResponse> {
        request.validate()?;

        let mut person = self
            .ctx
            .person_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Person", user_id.to_string()))?;

        person.update_profile(
            request.name,
            request.bio,
            request.class_year,
            request.pronouns,
        );

        self.ctx.person_repo().update(&person).await?;

        info!(user_id = %user_id, "Profile updated");

        Ok(PersonResponse::from(&person))
    }

    /// Set or clear the profile photo filename
    #[instrument(skip(self))]
    pub async fn set_photo(
        &self,
        user_id: UserId,
        photo: Option<String>,
    ) -> ServiceResult<PersonResponse> {
        let mut person = self
            .ctx
            .person_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Person", user_id.to_string()))?;

        person.set_photo(photo);
        self.ctx.person_repo().update(&person).await?;

        Ok(PersonResponse::from(&person))
    }

    /// Delete an account. Their events, participations and comments cascade.
    #[instrument(skip(self))]
    pub async fn delete_account(&self, user_id: UserId) -> ServiceResult<()> {
        self.ctx.person_repo().delete(user_id).await?;

        info!(user_id = %user_id, "Account deleted");

        Ok(())
    }
}
