//! Person entity <-> model mapper

use clump_core::entities::Person;
use clump_core::value_objects::UserId;

use crate::models::PersonModel;

impl From<PersonModel> for Person {
    fn from(model: PersonModel) -> Self {
        Person {
            id: UserId::new(model.id),
            name: model.name,
            email: model.email,
            bio: model.bio,
            class_year: model.class_year,
            pronouns: model.pronouns,
            photo: model.photo,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
