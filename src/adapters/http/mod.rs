//! HTTP adapters - REST API implementations.

pub mod recipe;

pub use recipe::{health_routes, recipe_routes, RecipeHandlers};
