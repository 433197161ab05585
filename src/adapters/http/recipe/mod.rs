//! HTTP adapter for recipe endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, IngredientRequest, ListRecipesParams, RecipeRequest};
pub use handlers::RecipeHandlers;
pub use routes::{health_routes, recipe_routes};
