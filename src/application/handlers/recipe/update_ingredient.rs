//! UpdateIngredientHandler - Command handler for editing an ingredient line.

use std::sync::Arc;

use crate::domain::foundation::{IngredientId, RecipeId};
use crate::domain::live::ChangeEvent;
use crate::domain::recipe::{IngredientDetails, IngredientLine, RecipeError};
use crate::ports::{ChangeNotifier, RecipeRepository};

/// Command to overwrite one ingredient line of a recipe.
#[derive(Debug, Clone)]
pub struct UpdateIngredientCommand {
    pub recipe_id: RecipeId,
    pub ingredient_id: IngredientId,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub note: Option<String>,
}

/// Handler for updating ingredient lines.
pub struct UpdateIngredientHandler {
    repository: Arc<dyn RecipeRepository>,
    notifier: Arc<dyn ChangeNotifier>,
}

impl UpdateIngredientHandler {
    pub fn new(repository: Arc<dyn RecipeRepository>, notifier: Arc<dyn ChangeNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateIngredientCommand,
    ) -> Result<IngredientLine, RecipeError> {
        let details = IngredientDetails::new(cmd.name, cmd.quantity, cmd.unit, cmd.note)?;

        let line = self
            .repository
            .update_ingredient(cmd.recipe_id, cmd.ingredient_id, details)
            .await?;

        self.notifier
            .notify(ChangeEvent::child_updated(line.clone()))
            .await;

        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRecipeRepository;
    use crate::application::handlers::recipe::test_support::{details, RecordingNotifier};

    fn command(recipe_id: RecipeId, ingredient_id: IngredientId) -> UpdateIngredientCommand {
        UpdateIngredientCommand {
            recipe_id,
            ingredient_id,
            name: "Butter".to_string(),
            quantity: 50.0,
            unit: "g".to_string(),
            note: Some("cold".to_string()),
        }
    }

    #[tokio::test]
    async fn updates_line_and_publishes_child_updated() {
        let repo = Arc::new(InMemoryRecipeRepository::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let recipe = repo.insert(details("Scones")).await.unwrap();
        let ingredient_id = repo
            .add_ingredient(
                recipe.id(),
                IngredientDetails::new("Butter", 25.0, "g", None).unwrap(),
            )
            .await
            .unwrap()
            .id();
        let handler = UpdateIngredientHandler::new(repo.clone(), notifier.clone());

        let line = handler
            .handle(command(recipe.id(), ingredient_id))
            .await
            .unwrap();

        assert_eq!(line.quantity(), 50.0);
        let stored = repo.find_by_id(recipe.id()).await.unwrap().unwrap();
        assert_eq!(stored.ingredient(ingredient_id), Some(&line));
        assert_eq!(notifier.events(), vec![ChangeEvent::child_updated(line)]);
    }

    #[tokio::test]
    async fn unknown_line_is_ingredient_not_found() {
        let repo = Arc::new(InMemoryRecipeRepository::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let recipe = repo.insert(details("Scones")).await.unwrap();
        let handler = UpdateIngredientHandler::new(repo, notifier.clone());

        let err = handler
            .handle(command(recipe.id(), IngredientId::new(77)))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RecipeError::ingredient_not_found(recipe.id(), IngredientId::new(77))
        );
        assert!(notifier.events().is_empty());
    }
}
