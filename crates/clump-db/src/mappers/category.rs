//! Category entity <-> model mapper

use clump_core::entities::Category;
use clump_core::value_objects::CategoryId;

use crate::models::CategoryModel;

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: CategoryId::new(model.id),
            name: model.name,
        }
    }
}
