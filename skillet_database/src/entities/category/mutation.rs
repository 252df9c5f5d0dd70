use chrono::Utc;
use skillet_core::{
    ids::CategoryId,
    validation::{
        validate_field_character_length,
        CATEGORY_NAME_MAXIMUM_LENGTH,
        ModelValidationError,
    },
};
use sqlx::SqliteConnection;

use super::CategoryModel;
use crate::{IntoExternalModel, QueryError, QueryResult};



#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    /// Checks the field invariants, producing a value
    /// that [`CategoryMutation::create`] accepts.
    pub fn validated(self) -> Result<ValidatedNewCategory, ModelValidationError> {
        if self.name.is_empty() {
            return Err(ModelValidationError::FieldEmpty { field_name: "name" });
        }

        validate_field_character_length("name", CATEGORY_NAME_MAXIMUM_LENGTH, &self.name)?;

        Ok(ValidatedNewCategory { inner: self })
    }
}


/// A [`NewCategory`] whose field invariants have been checked,
/// obtained through [`NewCategory::validated`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ValidatedNewCategory {
    inner: NewCategory,
}




pub struct CategoryMutation;

impl CategoryMutation {
    pub async fn create(
        database_connection: &mut SqliteConnection,
        new_category: ValidatedNewCategory,
    ) -> QueryResult<CategoryModel> {
        let new_category = new_category.inner;

        let new_category_created_at = Utc::now();
        let new_category_last_modified_at = new_category_created_at;

        let newly_created_category = sqlx::query_as::<_, super::InternalCategoryModel>(
            "INSERT INTO categories (name, created_at, last_modified_at) \
                VALUES (?, ?, ?) \
                RETURNING id, name, created_at, last_modified_at",
        )
        .bind(new_category.name)
        .bind(new_category_created_at)
        .bind(new_category_last_modified_at)
        .fetch_one(database_connection)
        .await?;

        Ok(newly_created_category.into_external_model())
    }

    pub async fn delete(
        database_connection: &mut SqliteConnection,
        category_id: CategoryId,
    ) -> QueryResult<bool> {
        let query_result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(category_id.into_i64())
            .execute(database_connection)
            .await?;


        if query_result.rows_affected() > 1 {
            return Err(QueryError::database_inconsistency(
                "attempted to delete a category by ID, but more than one row matched",
            ));
        }

        Ok(query_result.rows_affected() == 1)
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_name_at_maximum_length_is_accepted() {
        let new_category = NewCategory {
            name: "a".repeat(CATEGORY_NAME_MAXIMUM_LENGTH),
        };

        assert!(new_category.validated().is_ok());
    }

    #[test]
    fn category_name_of_61_characters_is_rejected() {
        let new_category = NewCategory {
            name: "a".repeat(61),
        };

        assert_eq!(
            new_category.validated().unwrap_err(),
            ModelValidationError::FieldTooLong {
                field_name: "name",
                maximum_length: CATEGORY_NAME_MAXIMUM_LENGTH,
                actual_length: 61,
            }
        );
    }

    #[test]
    fn empty_category_name_is_rejected() {
        let new_category = NewCategory {
            name: String::new(),
        };

        assert_eq!(
            new_category.validated().unwrap_err(),
            ModelValidationError::FieldEmpty { field_name: "name" }
        );
    }
}
