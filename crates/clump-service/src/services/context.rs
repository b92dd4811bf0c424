//! Service context - dependency container for services
//!
//! Holds the connection pool and all repositories needed by services.

use std::sync::Arc;

use clump_core::traits::{
    CategoryRepository, EventRepository, ForumRepository, ParticipantRepository, PersonRepository,
};
use clump_db::{
    PgCategoryRepository, PgEventRepository, PgForumRepository, PgParticipantRepository,
    PgPersonRepository, PgPool,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to the database pool and the repositories.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    person_repo: Arc<dyn PersonRepository>,
    event_repo: Arc<dyn EventRepository>,
    participant_repo: Arc<dyn ParticipantRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    forum_repo: Arc<dyn ForumRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        person_repo: Arc<dyn PersonRepository>,
        event_repo: Arc<dyn EventRepository>,
        participant_repo: Arc<dyn ParticipantRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        forum_repo: Arc<dyn ForumRepository>,
    ) -> Self {
        Self {
            pool,
            person_repo,
            event_repo,
            participant_repo,
            category_repo,
            forum_repo,
        }
    }

    /// Create a service context wired to the PostgreSQL repositories
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(PgPersonRepository::new(pool.clone())),
            Arc::new(PgEventRepository::new(pool.clone())),
            Arc::new(PgParticipantRepository::new(pool.clone())),
            Arc::new(PgCategoryRepository::new(pool.clone())),
            Arc::new(PgForumRepository::new(pool)),
        )
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the person repository
    pub fn person_repo(&self) -> &dyn PersonRepository {
        self.person_repo.as_ref()
    }

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the participant repository
    pub fn participant_repo(&self) -> &dyn ParticipantRepository {
        self.participant_repo.as_ref()
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    /// Get the forum repository
    pub fn forum_repo(&self) -> &dyn ForumRepository {
        self.forum_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
/// (e.g. test doubles)
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    person_repo: Option<Arc<dyn PersonRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    participant_repo: Option<Arc<dyn ParticipantRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    forum_repo: Option<Arc<dyn ForumRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            person_repo: None,
            event_repo: None,
            participant_repo: None,
            category_repo: None,
            forum_repo: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn person_repo(mut self, repo: Arc<dyn PersonRepository>) -> Self {
        self.person_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn participant_repo(mut self, repo: Arc<dyn ParticipantRepository>) -> Self {
        self.participant_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn forum_repo(mut self, repo: Arc<dyn ForumRepository>) -> Self {
        self.forum_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.person_repo
                .ok_or_else(|| ServiceError::validation("person_repo is required"))?,
            self.event_repo
                .ok_or_else(|| ServiceError::validation("event_repo is required"))?,
            self.participant_repo
                .ok_or_else(|| ServiceError::validation("participant_repo is required"))?,
            self.category_repo
                .ok_or_else(|| ServiceError::validation("category_repo is required"))?,
            self.forum_repo
                .ok_or_else(|| ServiceError::validation("forum_repo is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
