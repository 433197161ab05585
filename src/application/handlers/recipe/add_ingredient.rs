//! AddIngredientHandler - Command handler for adding an ingredient line.

use std::sync::Arc;

use crate::domain::foundation::RecipeId;
use crate::domain::live::ChangeEvent;
use crate::domain::recipe::{IngredientDetails, IngredientLine, RecipeError};
use crate::ports::{ChangeNotifier, RecipeRepository};

/// Command to append an ingredient line to a recipe.
#[derive(Debug, Clone)]
pub struct AddIngredientCommand {
    pub recipe_id: RecipeId,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub note: Option<String>,
}

/// Handler for adding ingredient lines.
pub struct AddIngredientHandler {
    repository: Arc<dyn RecipeRepository>,
    notifier: Arc<dyn ChangeNotifier>,
}

impl AddIngredientHandler {
    pub fn new(repository: Arc<dyn RecipeRepository>, notifier: Arc<dyn ChangeNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub async fn handle(&self, cmd: AddIngredientCommand) -> Result<IngredientLine, RecipeError> {
        let details = IngredientDetails::new(cmd.name, cmd.quantity, cmd.unit, cmd.note)?;

        let line = self
            .repository
            .add_ingredient(cmd.recipe_id, details)
            .await?;

        self.notifier
            .notify(ChangeEvent::child_created(line.clone()))
            .await;

        Ok(line)
    }
}
