//! REST client for the recipe endpoints.

use std::time::Duration;

use crate::domain::foundation::RecipeId;
use crate::domain::recipe::Recipe;

use super::ClientError;

/// Thin `reqwest` wrapper used to reload views after a live update.
#[derive(Debug, Clone)]
pub struct RecipeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecipeApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// GET /api/recipes, optionally filtered by a name fragment.
    pub async fn list_recipes(&self, name: Option<&str>) -> Result<Vec<Recipe>, ClientError> {
        let mut request = self.http.get(format!("{}/api/recipes", self.base_url));
        if let Some(name) = name {
            request = request.query(&[("name", name)]);
        }
        let recipes = request.send().await?.error_for_status()?.json().await?;
        Ok(recipes)
    }

    /// GET /api/recipes/:id. Returns `None` on 404.
    pub async fn get_recipe(&self, id: RecipeId) -> Result<Option<Recipe>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/recipes/{}", self.base_url, id))
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(response.error_for_status()?.json().await?))
    }
}
