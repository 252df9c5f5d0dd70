use std::fmt;

use chrono::{DateTime, Utc};
use skillet_core::ids::CategoryId;

use crate::IntoExternalModel;


pub struct CategoryModel {
    pub id: CategoryId,

    pub name: String,

    pub created_at: DateTime<Utc>,

    pub last_modified_at: DateTime<Utc>,
}

impl fmt::Display for CategoryModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}


#[derive(sqlx::FromRow)]
pub(crate) struct InternalCategoryModel {
    pub(crate) id: i64,

    pub(crate) name: String,

    pub(crate) created_at: DateTime<Utc>,

    pub(crate) last_modified_at: DateTime<Utc>,
}

impl IntoExternalModel for InternalCategoryModel {
    type ExternalModel = CategoryModel;

    fn into_external_model(self) -> Self::ExternalModel {
        let category_id = CategoryId::new(self.id);

        Self::ExternalModel {
            id: category_id,
            name: self.name,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_displays_as_its_name() {
        let category = CategoryModel {
            id: CategoryId::new(1),
            name: "Sladice".to_string(),
            created_at: Utc::now(),
            last_modified_at: Utc::now(),
        };

        assert_eq!(category.to_string(), "Sladice");
    }
}
