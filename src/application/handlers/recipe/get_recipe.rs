//! GetRecipeHandler - Query handler for a single recipe.

use std::sync::Arc;

use crate::domain::foundation::RecipeId;
use crate::domain::recipe::{Recipe, RecipeError};
use crate::ports::RecipeRepository;

/// Query for one recipe with its ingredient lines.
#[derive(Debug, Clone)]
pub struct GetRecipeQuery {
    pub recipe_id: RecipeId,
}

/// Handler for fetching a recipe.
pub struct GetRecipeHandler {
    repository: Arc<dyn RecipeRepository>,
}

impl GetRecipeHandler {
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetRecipeQuery) -> Result<Recipe, RecipeError> {
        self.repository
            .find_by_id(query.recipe_id)
            .await?
            .ok_or_else(|| RecipeError::not_found(query.recipe_id))
    }
}
