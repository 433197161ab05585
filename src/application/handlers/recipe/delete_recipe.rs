//! DeleteRecipeHandler - Command handler for deleting recipes.

use std::sync::Arc;

use crate::domain::foundation::RecipeId;
use crate::domain::live::ChangeEvent;
use crate::domain::recipe::RecipeError;
use crate::ports::{ChangeNotifier, RecipeRepository};

/// Command to delete a recipe and all of its ingredient lines.
#[derive(Debug, Clone)]
pub struct DeleteRecipeCommand {
    pub recipe_id: RecipeId,
}

/// Handler for deleting recipes.
pub struct DeleteRecipeHandler {
    repository: Arc<dyn RecipeRepository>,
    notifier: Arc<dyn ChangeNotifier>,
}

impl DeleteRecipeHandler {
    pub fn new(repository: Arc<dyn RecipeRepository>, notifier: Arc<dyn ChangeNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub async fn handle(&self, cmd: DeleteRecipeCommand) -> Result<(), RecipeError> {
        if !self.repository.delete(cmd.recipe_id).await? {
            return Err(RecipeError::not_found(cmd.recipe_id));
        }

        self.notifier
            .notify(ChangeEvent::entity_deleted(cmd.recipe_id))
            .await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRecipeRepository;
    use crate::ports::RecipeFilter;
    use crate::application::handlers::recipe::test_support::{
        details, FailingRepository, RecordingNotifier,
    };

    #[tokio::test]
    async fn deletes_recipe_and_publishes_entity_deleted() {
        let repo = Arc::new(InMemoryRecipeRepository::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let recipe = repo.insert(details("Stew")).await.unwrap();
        let handler = DeleteRecipeHandler::new(repo.clone(), notifier.clone());

        handler
            .handle(DeleteRecipeCommand {
                recipe_id: recipe.id(),
            })
            .await
            .unwrap();

        assert!(repo.list(&RecipeFilter::default()).await.unwrap().is_empty());
        assert_eq!(
            notifier.events(),
            vec![ChangeEvent::entity_deleted(recipe.id())]
        );
    }

    #[tokio::test]
    async fn deleting_missing_recipe_is_not_found() {
        let repo = Arc::new(InMemoryRecipeRepository::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let handler = DeleteRecipeHandler::new(repo, notifier.clone());

        let err = handler
            .handle(DeleteRecipeCommand {
                recipe_id: RecipeId::new(3),
            })
            .await
            .unwrap_err();

        assert_eq!(err, RecipeError::not_found(RecipeId::new(3)));
        assert!(notifier.events().is_empty());
    }

    #[tokio::test]
    async fn failed_delete_publishes_nothing() {
        let notifier = Arc::new(RecordingNotifier::default());
        let handler =
            DeleteRecipeHandler::new(Arc::new(FailingRepository { stored: None }), notifier.clone());

        assert!(handler
            .handle(DeleteRecipeCommand {
                recipe_id: RecipeId::new(1),
            })
            .await
            .is_err());
        assert!(notifier.events().is_empty());
    }
}
