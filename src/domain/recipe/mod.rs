//! Recipe domain module.
//!
//! Recipes are the top-level entities clients list and open; ingredient
//! lines are owned children of exactly one recipe.

mod aggregate;
mod errors;

pub use aggregate::{
    IngredientDetails, IngredientLine, Recipe, RecipeDetails, MAX_NAME_LENGTH, MAX_SERVINGS,
};
pub use errors::RecipeError;
