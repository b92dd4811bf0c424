//! Person entity - a registered student account

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// Person entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub class_year: Option<i32>,
    pub pronouns: Option<String>,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Person {
    /// Replace the editable profile fields
    pub fn update_profile(
        &mut self,
        name: String,
        bio: Option<String>,
        class_year: Option<i32>,
        pronouns: Option<String>,
    ) {
        self.name = name;
        self.bio = bio;
        self.class_year = class_year;
        self.pronouns = pronouns;
        self.updated_at = Utc::now();
    }

    /// Update the profile photo filename
    pub fn set_photo(&mut self, photo: Option<String>) {
        self.photo = photo;
        self.updated_at = Utc::now();
    }
}

/// Payload for creating a person; the id is assigned by the database
#[derive(Debug, Clone)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub class_year: Option<i32>,
    pub pronouns: Option<String>,
}
