//! Repository traits (ports) for data access

mod repositories;

pub use repositories::{
    CategoryRepository, EventRepository, ForumRepository, ParticipantRepository,
    PersonRepository, RepoResult,
};
