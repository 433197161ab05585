//! Recipe-specific error types.

use crate::domain::foundation::{IngredientId, RecipeId, ValidationError};

/// Errors produced by recipe commands and queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecipeError {
    /// Recipe was not found.
    #[error("Recipe not found: {0}")]
    NotFound(RecipeId),

    /// Ingredient line was not found on the recipe.
    #[error("Ingredient {ingredient_id} not found on recipe {recipe_id}")]
    IngredientNotFound {
        recipe_id: RecipeId,
        ingredient_id: IngredientId,
    },

    /// Validation failed.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Storage or other infrastructure failure.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl RecipeError {
    pub fn not_found(id: RecipeId) -> Self {
        RecipeError::NotFound(id)
    }

    pub fn ingredient_not_found(recipe_id: RecipeId, ingredient_id: IngredientId) -> Self {
        RecipeError::IngredientNotFound {
            recipe_id,
            ingredient_id,
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        RecipeError::Infrastructure(message.into())
    }

    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            RecipeError::NotFound(_) => "RECIPE_NOT_FOUND",
            RecipeError::IngredientNotFound { .. } => "INGREDIENT_NOT_FOUND",
            RecipeError::ValidationFailed { .. } => "VALIDATION_FAILED",
            RecipeError::Infrastructure(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<ValidationError> for RecipeError {
    fn from(err: ValidationError) -> Self {
        RecipeError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts_with_field() {
        let err: RecipeError = ValidationError::empty_field("name").into();
        match err {
            RecipeError::ValidationFailed { field, .. } => assert_eq!(field, "name"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(RecipeError::not_found(RecipeId::new(1)).code(), "RECIPE_NOT_FOUND");
        assert_eq!(
            RecipeError::ingredient_not_found(RecipeId::new(1), IngredientId::new(2)).code(),
            "INGREDIENT_NOT_FOUND"
        );
        assert_eq!(RecipeError::infrastructure("boom").code(), "INTERNAL_ERROR");
    }

    #[test]
    fn not_found_displays_id() {
        assert_eq!(
            RecipeError::not_found(RecipeId::new(7)).to_string(),
            "Recipe not found: 7"
        );
    }
}
