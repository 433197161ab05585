//! HTTP handlers for recipe endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::recipe::{
    AddIngredientCommand, AddIngredientHandler, CreateRecipeCommand, CreateRecipeHandler,
    DeleteRecipeCommand, DeleteRecipeHandler, GetRecipeHandler, GetRecipeQuery,
    ListRecipesHandler, ListRecipesQuery, RemoveIngredientCommand, RemoveIngredientHandler,
    UpdateIngredientCommand, UpdateIngredientHandler, UpdateRecipeCommand, UpdateRecipeHandler,
};
use crate::domain::foundation::{IngredientId, RecipeId};
use crate::domain::recipe::RecipeError;
use crate::ports::{ChangeNotifier, RecipeRepository};

use super::dto::{ErrorResponse, IngredientRequest, ListRecipesParams, RecipeRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RecipeHandlers {
    create_handler: Arc<CreateRecipeHandler>,
    update_handler: Arc<UpdateRecipeHandler>,
    delete_handler: Arc<DeleteRecipeHandler>,
    add_ingredient_handler: Arc<AddIngredientHandler>,
    update_ingredient_handler: Arc<UpdateIngredientHandler>,
    remove_ingredient_handler: Arc<RemoveIngredientHandler>,
    get_handler: Arc<GetRecipeHandler>,
    list_handler: Arc<ListRecipesHandler>,
}

impl RecipeHandlers {
    /// Wires every recipe handler to one repository and one notifier.
    pub fn new(repository: Arc<dyn RecipeRepository>, notifier: Arc<dyn ChangeNotifier>) -> Self {
        Self {
            create_handler: Arc::new(CreateRecipeHandler::new(
                repository.clone(),
                notifier.clone(),
            )),
            update_handler: Arc::new(UpdateRecipeHandler::new(
                repository.clone(),
                notifier.clone(),
            )),
            delete_handler: Arc::new(DeleteRecipeHandler::new(
                repository.clone(),
                notifier.clone(),
            )),
            add_ingredient_handler: Arc::new(AddIngredientHandler::new(
                repository.clone(),
                notifier.clone(),
            )),
            update_ingredient_handler: Arc::new(UpdateIngredientHandler::new(
                repository.clone(),
                notifier.clone(),
            )),
            remove_ingredient_handler: Arc::new(RemoveIngredientHandler::new(
                repository.clone(),
                notifier,
            )),
            get_handler: Arc::new(GetRecipeHandler::new(repository.clone())),
            list_handler: Arc::new(ListRecipesHandler::new(repository)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/recipes - List recipes, optionally filtered by name
pub async fn list_recipes(
    State(handlers): State<RecipeHandlers>,
    Query(params): Query<ListRecipesParams>,
) -> Response {
    let query = ListRecipesQuery {
        name_contains: params.name,
    };

    match handlers.list_handler.handle(query).await {
        Ok(recipes) => (StatusCode::OK, Json(recipes)).into_response(),
        Err(e) => handle_recipe_error(e),
    }
}

/// POST /api/recipes - Create a recipe
pub async fn create_recipe(
    State(handlers): State<RecipeHandlers>,
    Json(req): Json<RecipeRequest>,
) -> Response {
    let cmd = CreateRecipeCommand {
        name: req.name,
        description: req.description,
        servings: req.servings,
        instructions: req.instructions,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(recipe) => (StatusCode::CREATED, Json(recipe)).into_response(),
        Err(e) => handle_recipe_error(e),
    }
}

/// GET /api/recipes/:id - Get one recipe with its ingredients
pub async fn get_recipe(
    State(handlers): State<RecipeHandlers>,
    Path(recipe_id): Path<String>,
) -> Response {
    let recipe_id = match parse_recipe_id(&recipe_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetRecipeQuery { recipe_id }).await {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(e) => handle_recipe_error(e),
    }
}

/// PUT /api/recipes/:id - Replace a recipe's fields
pub async fn update_recipe(
    State(handlers): State<RecipeHandlers>,
    Path(recipe_id): Path<String>,
    Json(req): Json<RecipeRequest>,
) -> Response {
    let recipe_id = match parse_recipe_id(&recipe_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateRecipeCommand {
        recipe_id,
        name: req.name,
        description: req.description,
        servings: req.servings,
        instructions: req.instructions,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(e) => handle_recipe_error(e),
    }
}

/// DELETE /api/recipes/:id - Delete a recipe
pub async fn delete_recipe(
    State(handlers): State<RecipeHandlers>,
    Path(recipe_id): Path<String>,
) -> Response {
    let recipe_id = match parse_recipe_id(&recipe_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteRecipeCommand { recipe_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_recipe_error(e),
    }
}

/// POST /api/recipes/:id/ingredients - Add an ingredient line
pub async fn add_ingredient(
    State(handlers): State<RecipeHandlers>,
    Path(recipe_id): Path<String>,
    Json(req): Json<IngredientRequest>,
) -> Response {
    let recipe_id = match parse_recipe_id(&recipe_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = AddIngredientCommand {
        recipe_id,
        name: req.name,
        quantity: req.quantity,
        unit: req.unit,
        note: req.note,
    };

    match handlers.add_ingredient_handler.handle(cmd).await {
        Ok(line) => (StatusCode::CREATED, Json(line)).into_response(),
        Err(e) => handle_recipe_error(e),
    }
}

/// PUT /api/recipes/:id/ingredients/:ingredient_id - Replace an ingredient line
pub async fn update_ingredient(
    State(handlers): State<RecipeHandlers>,
    Path((recipe_id, ingredient_id)): Path<(String, String)>,
    Json(req): Json<IngredientRequest>,
) -> Response {
    let (recipe_id, ingredient_id) = match parse_line_path(&recipe_id, &ingredient_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = UpdateIngredientCommand {
        recipe_id,
        ingredient_id,
        name: req.name,
        quantity: req.quantity,
        unit: req.unit,
        note: req.note,
    };

    match handlers.update_ingredient_handler.handle(cmd).await {
        Ok(line) => (StatusCode::OK, Json(line)).into_response(),
        Err(e) => handle_recipe_error(e),
    }
}

/// DELETE /api/recipes/:id/ingredients/:ingredient_id - Remove an ingredient line
pub async fn remove_ingredient(
    State(handlers): State<RecipeHandlers>,
    Path((recipe_id, ingredient_id)): Path<(String, String)>,
) -> Response {
    let (recipe_id, ingredient_id) = match parse_line_path(&recipe_id, &ingredient_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = RemoveIngredientCommand {
        recipe_id,
        ingredient_id,
    };

    match handlers.remove_ingredient_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_recipe_error(e),
    }
}

/// GET /health - Liveness probe
pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_recipe_id(raw: &str) -> Result<RecipeId, Response> {
    raw.parse::<RecipeId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid recipe ID")),
        )
            .into_response()
    })
}

fn parse_line_path(
    recipe_id: &str,
    ingredient_id: &str,
) -> Result<(RecipeId, IngredientId), Response> {
    let recipe_id = parse_recipe_id(recipe_id)?;
    let ingredient_id = ingredient_id.parse::<IngredientId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid ingredient ID")),
        )
            .into_response()
    })?;
    Ok((recipe_id, ingredient_id))
}

fn handle_recipe_error(error: RecipeError) -> Response {
    let status = match &error {
        RecipeError::NotFound(_) | RecipeError::IngredientNotFound { .. } => StatusCode::NOT_FOUND,
        RecipeError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        RecipeError::Infrastructure(message) => {
            tracing::error!(error = %message, "Recipe storage failure");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("An internal error occurred")),
            )
                .into_response();
        }
    };

    (status, Json(ErrorResponse::from(&error))).into_response()
}
