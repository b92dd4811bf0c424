//! # clump-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the service entry points at crate root
pub use services::{
    EventService, ForumService, ParticipantService, PersonService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
