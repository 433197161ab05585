//! HTTP routes for recipe endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    add_ingredient, create_recipe, delete_recipe, get_recipe, health, list_recipes,
    remove_ingredient, update_ingredient, update_recipe, RecipeHandlers,
};

/// Creates the recipe router, mounted under `/api/recipes`.
pub fn recipe_routes(handlers: RecipeHandlers) -> Router {
    Router::new()
        .route("/", get(list_recipes).post(create_recipe))
        .route(
            "/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route("/:id/ingredients", post(add_ingredient))
        .route(
            "/:id/ingredients/:ingredient_id",
            put(update_ingredient).delete(remove_ingredient),
        )
        .with_state(handlers)
}

/// Liveness route, mounted at the root.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}
