//! CreateRecipeHandler - Command handler for creating recipes.

use std::sync::Arc;

use crate::domain::live::ChangeEvent;
use crate::domain::recipe::{Recipe, RecipeDetails, RecipeError};
use crate::ports::{ChangeNotifier, RecipeRepository};

/// Command to create a new recipe.
#[derive(Debug, Clone)]
pub struct CreateRecipeCommand {
    pub name: String,
    pub description: Option<String>,
    pub servings: u32,
    pub instructions: String,
}

/// Handler for creating recipes.
pub struct CreateRecipeHandler {
    repository: Arc<dyn RecipeRepository>,
    notifier: Arc<dyn ChangeNotifier>,
}

impl CreateRecipeHandler {
    pub fn new(repository: Arc<dyn RecipeRepository>, notifier: Arc<dyn ChangeNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub async fn handle(&self, cmd: CreateRecipeCommand) -> Result<Recipe, RecipeError> {
        // 1. Validate input
        let details =
            RecipeDetails::new(cmd.name, cmd.description, cmd.servings, cmd.instructions)?;

        // 2. Persist
        let recipe = self.repository.insert(details).await?;

        // 3. Announce the committed change
        self.notifier
            .notify(ChangeEvent::entity_created(recipe.clone()))
            .await;

        Ok(recipe)
    }
}
