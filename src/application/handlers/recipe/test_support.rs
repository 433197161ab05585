//! Shared fakes for recipe handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{IngredientId, RecipeId};
use crate::domain::live::ChangeEvent;
use crate::adapters::memory::InMemoryRecipeRepository;
use crate::domain::recipe::{
    IngredientDetails, IngredientLine, Recipe, RecipeDetails, RecipeError,
};
use crate::ports::{ChangeNotifier, RecipeFilter, RecipeRepository};

/// Notifier that records every event it is given.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<ChangeEvent>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<ChangeEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChangeNotifier for RecordingNotifier {
    async fn notify(&self, event: ChangeEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Repository whose writes always fail; reads return `stored`.
pub struct FailingRepository {
    pub stored: Option<Recipe>,
}

#[async_trait]
impl RecipeRepository for FailingRepository {
    async fn insert(&self, _details: RecipeDetails) -> Result<Recipe, RecipeError> {
        Err(RecipeError::infrastructure("Simulated insert failure"))
    }

    async fn update_details(
        &self,
        _id: RecipeId,
        _details: RecipeDetails,
    ) -> Result<Recipe, RecipeError> {
        Err(RecipeError::infrastructure("Simulated update failure"))
    }

    async fn add_ingredient(
        &self,
        _id: RecipeId,
        _details: IngredientDetails,
    ) -> Result<IngredientLine, RecipeError> {
        Err(RecipeError::infrastructure("Simulated update failure"))
    }

    async fn update_ingredient(
        &self,
        _id: RecipeId,
        _ingredient_id: IngredientId,
        _details: IngredientDetails,
    ) -> Result<IngredientLine, RecipeError> {
        Err(RecipeError::infrastructure("Simulated update failure"))
    }

    async fn remove_ingredient(
        &self,
        _id: RecipeId,
        _ingredient_id: IngredientId,
    ) -> Result<(), RecipeError> {
        Err(RecipeError::infrastructure("Simulated update failure"))
    }

    async fn find_by_id(&self, _id: RecipeId) -> Result<Option<Recipe>, RecipeError> {
        Ok(self.stored.clone())
    }

    async fn list(&self, _filter: &RecipeFilter) -> Result<Vec<Recipe>, RecipeError> {
        Ok(self.stored.iter().cloned().collect())
    }

    async fn delete(&self, _id: RecipeId) -> Result<bool, RecipeError> {
        Err(RecipeError::infrastructure("Simulated delete failure"))
    }
}

/// In-memory repository that yields to the scheduler before every call,
/// so concurrent handlers interleave between their repository calls.
#[derive(Default)]
pub struct YieldingRepository {
    pub inner: InMemoryRecipeRepository,
}

#[async_trait]
impl RecipeRepository for YieldingRepository {
    async fn insert(&self, details: RecipeDetails) -> Result<Recipe, RecipeError> {
        tokio::task::yield_now().await;
        self.inner.insert(details).await
    }

    async fn update_details(
        &self,
        id: RecipeId,
        details: RecipeDetails,
    ) -> Result<Recipe, RecipeError> {
        tokio::task::yield_now().await;
        self.inner.update_details(id, details).await
    }

    async fn add_ingredient(
        &self,
        id: RecipeId,
        details: IngredientDetails,
    ) -> Result<IngredientLine, RecipeError> {
        tokio::task::yield_now().await;
        self.inner.add_ingredient(id, details).await
    }

    async fn update_ingredient(
        &self,
        id: RecipeId,
        ingredient_id: IngredientId,
        details: IngredientDetails,
    ) -> Result<IngredientLine, RecipeError> {
        tokio::task::yield_now().await;
        self.inner
            .update_ingredient(id, ingredient_id, details)
            .await
    }

    async fn remove_ingredient(
        &self,
        id: RecipeId,
        ingredient_id: IngredientId,
    ) -> Result<(), RecipeError> {
        tokio::task::yield_now().await;
        self.inner.remove_ingredient(id, ingredient_id).await
    }

    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, RecipeError> {
        tokio::task::yield_now().await;
        self.inner.find_by_id(id).await
    }

    async fn list(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, RecipeError> {
        tokio::task::yield_now().await;
        self.inner.list(filter).await
    }

    async fn delete(&self, id: RecipeId) -> Result<bool, RecipeError> {
        tokio::task::yield_now().await;
        self.inner.delete(id).await
    }
}

pub fn details(name: &str) -> RecipeDetails {
    RecipeDetails::new(name, None, 4, "").unwrap()
}
