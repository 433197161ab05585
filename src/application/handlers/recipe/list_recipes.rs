//! ListRecipesHandler - Query handler for the recipe list.

use std::sync::Arc;

use crate::domain::recipe::{Recipe, RecipeError};
use crate::ports::{RecipeFilter, RecipeRepository};

/// Query for recipes, optionally filtered by name.
#[derive(Debug, Clone, Default)]
pub struct ListRecipesQuery {
    pub name_contains: Option<String>,
}

/// Handler for listing recipes.
pub struct ListRecipesHandler {
    repository: Arc<dyn RecipeRepository>,
}

impl ListRecipesHandler {
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListRecipesQuery) -> Result<Vec<Recipe>, RecipeError> {
        let filter = RecipeFilter {
            name_contains: query.name_contains,
        };
        self.repository.list(&filter).await
    }
}
