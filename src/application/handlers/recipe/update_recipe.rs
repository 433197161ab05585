//! UpdateRecipeHandler - Command handler for editing a recipe's fields.

use std::sync::Arc;

use crate::domain::foundation::RecipeId;
use crate::domain::live::ChangeEvent;
use crate::domain::recipe::{Recipe, RecipeDetails, RecipeError};
use crate::ports::{ChangeNotifier, RecipeRepository};

/// Command to replace a recipe's editable fields.
#[derive(Debug, Clone)]
pub struct UpdateRecipeCommand {
    pub recipe_id: RecipeId,
    pub name: String,
    pub description: Option<String>,
    pub servings: u32,
    pub instructions: String,
}

/// Handler for updating recipes.
pub struct UpdateRecipeHandler {
    repository: Arc<dyn RecipeRepository>,
    notifier: Arc<dyn ChangeNotifier>,
}

impl UpdateRecipeHandler {
    pub fn new(repository: Arc<dyn RecipeRepository>, notifier: Arc<dyn ChangeNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub async fn handle(&self, cmd: UpdateRecipeCommand) -> Result<Recipe, RecipeError> {
        let details =
            RecipeDetails::new(cmd.name, cmd.description, cmd.servings, cmd.instructions)?;

        let recipe = self
            .repository
            .update_details(cmd.recipe_id, details)
            .await?;

        self.notifier
            .notify(ChangeEvent::entity_content_updated(recipe.clone()))
            .await;

        Ok(recipe)
    }
}
