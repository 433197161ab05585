//! RemoveIngredientHandler - Command handler for removing an ingredient line.

use std::sync::Arc;

use crate::domain::foundation::{IngredientId, RecipeId};
use crate::domain::live::ChangeEvent;
use crate::domain::recipe::RecipeError;
use crate::ports::{ChangeNotifier, RecipeRepository};

/// Command to remove one ingredient line from a recipe.
#[derive(Debug, Clone)]
pub struct RemoveIngredientCommand {
    pub recipe_id: RecipeId,
    pub ingredient_id: IngredientId,
}

/// Handler for removing ingredient lines.
pub struct RemoveIngredientHandler {
    repository: Arc<dyn RecipeRepository>,
    notifier: Arc<dyn ChangeNotifier>,
}

impl RemoveIngredientHandler {
    pub fn new(repository: Arc<dyn RecipeRepository>, notifier: Arc<dyn ChangeNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub async fn handle(&self, cmd: RemoveIngredientCommand) -> Result<(), RecipeError> {
        self.repository
            .remove_ingredient(cmd.recipe_id, cmd.ingredient_id)
            .await?;

        self.notifier
            .notify(ChangeEvent::child_deleted(cmd.recipe_id, cmd.ingredient_id))
            .await;

        Ok(())
    }
}
