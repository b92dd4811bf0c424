//! Category entity - a calendar category events are filed under

use crate::value_objects::CategoryId;

/// Calendar category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}
