//! Recipe repository port.
//!
//! Defines the contract for persisting and retrieving Recipe aggregates.
//! A successful return from any write method means the change is committed;
//! callers publish change notifications only after that point.
//!
//! Mutations of an existing recipe are applied by the repository itself
//! against its current stored state, so concurrent writers to the same
//! recipe never overwrite each other's changes. Each method returns the
//! value as committed.

use async_trait::async_trait;

use crate::domain::foundation::{IngredientId, RecipeId};
use crate::domain::recipe::{
    IngredientDetails, IngredientLine, Recipe, RecipeDetails, RecipeError,
};

/// Filter for listing recipes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    /// Case-insensitive substring that the recipe name must contain.
    pub name_contains: Option<String>,
}

impl RecipeFilter {
    pub fn by_name(fragment: impl Into<String>) -> Self {
        Self {
            name_contains: Some(fragment.into()),
        }
    }

    /// Returns true if `recipe` passes this filter.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        match &self.name_contains {
            Some(fragment) if !fragment.trim().is_empty() => recipe
                .name()
                .to_lowercase()
                .contains(&fragment.trim().to_lowercase()),
            _ => true,
        }
    }
}

/// Repository port for Recipe aggregate persistence.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Store a new recipe, assigning its ID.
    async fn insert(&self, details: RecipeDetails) -> Result<Recipe, RecipeError>;

    /// Replace the editable fields of a stored recipe.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the recipe doesn't exist
    async fn update_details(
        &self,
        id: RecipeId,
        details: RecipeDetails,
    ) -> Result<Recipe, RecipeError>;

    /// Append an ingredient line, allocating its ID.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the recipe doesn't exist
    async fn add_ingredient(
        &self,
        id: RecipeId,
        details: IngredientDetails,
    ) -> Result<IngredientLine, RecipeError>;

    /// Overwrite one ingredient line.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the recipe doesn't exist
    /// - `IngredientNotFound` if the recipe has no such line
    async fn update_ingredient(
        &self,
        id: RecipeId,
        ingredient_id: IngredientId,
        details: IngredientDetails,
    ) -> Result<IngredientLine, RecipeError>;

    /// Remove one ingredient line.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the recipe doesn't exist
    /// - `IngredientNotFound` if the recipe has no such line
    async fn remove_ingredient(
        &self,
        id: RecipeId,
        ingredient_id: IngredientId,
    ) -> Result<(), RecipeError>;

    /// Find a recipe by its ID.
    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, RecipeError>;

    /// List recipes matching `filter`, ordered by ID.
    async fn list(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, RecipeError>;

    /// Delete a recipe. Returns `false` if it did not exist.
    async fn delete(&self, id: RecipeId) -> Result<bool, RecipeError>;
}
