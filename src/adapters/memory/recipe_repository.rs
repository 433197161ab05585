//! In-memory recipe store.
//!
//! Keeps recipes in an ordered map behind an async `RwLock`. IDs are
//! allocated from monotonically increasing counters and never reused.
//! Every mutation of a stored recipe runs under the write lock against the
//! stored value.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{IngredientId, RecipeId};
use crate::domain::recipe::{
    IngredientDetails, IngredientLine, Recipe, RecipeDetails, RecipeError,
};
use crate::ports::{RecipeFilter, RecipeRepository};

/// Recipe repository backed by process memory.
pub struct InMemoryRecipeRepository {
    recipes: RwLock<BTreeMap<RecipeId, Recipe>>,
    next_recipe_id: AtomicI64,
    next_ingredient_id: AtomicI64,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self {
            recipes: RwLock::new(BTreeMap::new()),
            next_recipe_id: AtomicI64::new(1),
            next_ingredient_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryRecipeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn insert(&self, details: RecipeDetails) -> Result<Recipe, RecipeError> {
        let id = RecipeId::new(self.next_recipe_id.fetch_add(1, Ordering::Relaxed));
        let recipe = Recipe::new(id, details);
        self.recipes.write().await.insert(id, recipe.clone());
        Ok(recipe)
    }

    async fn update_details(
        &self,
        id: RecipeId,
        details: RecipeDetails,
    ) -> Result<Recipe, RecipeError> {
        let mut recipes = self.recipes.write().await;
        let recipe = recipes
            .get_mut(&id)
            .ok_or_else(|| RecipeError::not_found(id))?;
        recipe.update_details(details);
        Ok(recipe.clone())
    }

    async fn add_ingredient(
        &self,
        id: RecipeId,
        details: IngredientDetails,
    ) -> Result<IngredientLine, RecipeError> {
        let mut recipes = self.recipes.write().await;
        let recipe = recipes
            .get_mut(&id)
            .ok_or_else(|| RecipeError::not_found(id))?;
        let ingredient_id =
            IngredientId::new(self.next_ingredient_id.fetch_add(1, Ordering::Relaxed));
        Ok(recipe.add_ingredient(ingredient_id, details).clone())
    }

    async fn update_ingredient(
        &self,
        id: RecipeId,
        ingredient_id: IngredientId,
        details: IngredientDetails,
    ) -> Result<IngredientLine, RecipeError> {
        let mut recipes = self.recipes.write().await;
        let recipe = recipes
            .get_mut(&id)
            .ok_or_else(|| RecipeError::not_found(id))?;
        recipe
            .update_ingredient(ingredient_id, details)
            .cloned()
            .ok_or_else(|| RecipeError::ingredient_not_found(id, ingredient_id))
    }

    async fn remove_ingredient(
        &self,
        id: RecipeId,
        ingredient_id: IngredientId,
    ) -> Result<(), RecipeError> {
        let mut recipes = self.recipes.write().await;
        let recipe = recipes
            .get_mut(&id)
            .ok_or_else(|| RecipeError::not_found(id))?;
        recipe
            .remove_ingredient(ingredient_id)
            .map(|_| ())
            .ok_or_else(|| RecipeError::ingredient_not_found(id, ingredient_id))
    }

    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, RecipeError> {
        Ok(self.recipes.read().await.get(&id).cloned())
    }

    async fn list(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, RecipeError> {
        Ok(self
            .recipes
            .read()
            .await
            .values()
            .filter(|recipe| filter.matches(recipe))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: RecipeId) -> Result<bool, RecipeError> {
        Ok(self.recipes.write().await.remove(&id).is_some())
    }
}
