//! HTTP DTOs for recipe endpoints.
//!
//! Responses reuse the domain `Recipe` and `IngredientLine` serialization so
//! the REST bodies and the live-update payloads share one shape.

use serde::{Deserialize, Serialize};

use crate::domain::recipe::RecipeError;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request body for creating or replacing a recipe.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub servings: u32,
    #[serde(default)]
    pub instructions: String,
}

/// Request body for adding or replacing an ingredient line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRequest {
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Query parameters for listing recipes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRecipesParams {
    #[serde(default)]
    pub name: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

impl From<&RecipeError> for ErrorResponse {
    fn from(err: &RecipeError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}
