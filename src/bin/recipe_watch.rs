//! Recipe Watch - headless live updates client.
//!
//! Connects to the live updates endpoint and logs how each change event is
//! reconciled against a console view. Pass a recipe ID as the first argument
//! to watch it as the "open" recipe.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use recipe_book::app::init_tracing;
use recipe_book::client::{
    ui_channel, ClientConnection, LinkState, ReconciliationDispatcher, RecipeApiClient,
};
use recipe_book::config::AppConfig;
use recipe_book::domain::foundation::RecipeId;
use recipe_book::domain::recipe::Recipe;
use recipe_book::ports::{RecipeView, ViewState};
use tokio::runtime::Handle;

/// Most recent result of a reload that may be issued repeatedly.
///
/// Reloads run as independent tasks and can complete in any order. Each is
/// tagged with the generation it was issued at; a result older than the
/// one already applied is discarded.
#[derive(Debug)]
struct Latest<T> {
    generation: u64,
    value: Option<T>,
}

impl<T> Default for Latest<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            value: None,
        }
    }
}

impl<T> Latest<T> {
    /// Store `value` if `generation` is newer than the current one.
    fn offer(&mut self, generation: u64, value: T) -> bool {
        if generation <= self.generation {
            return false;
        }
        self.generation = generation;
        self.value = Some(value);
        true
    }
}

/// Latest-wins slot shared with reload tasks.
#[derive(Default)]
struct Reloads<T> {
    issued: AtomicU64,
    latest: Mutex<Latest<T>>,
}

impl<T> Reloads<T> {
    fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Apply a finished reload. `on_applied` runs under the slot's lock,
    /// so accepted results are reported in generation order.
    fn complete(&self, generation: u64, value: T, on_applied: impl FnOnce(&T)) -> bool {
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        if !latest.offer(generation, value) {
            return false;
        }
        if let Some(value) = &latest.value {
            on_applied(value);
        }
        true
    }
}

/// Console stand-in for the GUI, reloading state over REST.
struct ConsoleView {
    api: RecipeApiClient,
    runtime: Handle,
    open: Option<RecipeId>,
    list: Arc<Reloads<Vec<String>>>,
    detail: Arc<Reloads<Option<Recipe>>>,
}

impl ConsoleView {
    fn reload_list(&self) {
        let api = self.api.clone();
        let list = self.list.clone();
        let generation = list.begin();
        self.runtime.spawn(async move {
            match api.list_recipes(None).await {
                Ok(recipes) => {
                    let names = recipes.iter().map(|r| r.name().to_string()).collect();
                    let applied = list.complete(generation, names, |names: &Vec<String>| {
                        tracing::info!(count = names.len(), names = ?names, "Recipe list refreshed");
                    });
                    if !applied {
                        tracing::debug!(generation, "Discarded stale recipe list");
                    }
                }
                Err(e) => tracing::warn!(error = %e, "Recipe list refresh failed"),
            }
        });
    }
}

impl ViewState for ConsoleView {
    fn open_recipe_id(&self) -> Option<RecipeId> {
        self.open
    }
}

impl RecipeView for ConsoleView {
    fn refresh_recipe_list(&mut self) {
        self.reload_list();
    }

    fn show_recipe(&mut self, recipe: &Recipe) {
        tracing::info!(
            recipe_id = %recipe.id(),
            name = %recipe.name(),
            servings = recipe.servings(),
            ingredients = recipe.ingredients().len(),
            "Open recipe reloaded"
        );
    }

    fn close_recipe(&mut self, id: RecipeId) {
        if self.open == Some(id) {
            self.open = None;
        }
        tracing::info!(recipe_id = %id, "Open recipe was deleted, detail closed");
    }

    fn refresh_ingredients(&mut self, id: RecipeId) {
        let api = self.api.clone();
        let detail = self.detail.clone();
        let generation = detail.begin();
        self.runtime.spawn(async move {
            match api.get_recipe(id).await {
                Ok(recipe) => {
                    let applied = detail.complete(generation, recipe, |recipe| match recipe {
                        Some(recipe) => tracing::info!(
                            recipe_id = %id,
                            ingredients = recipe.ingredients().len(),
                            "Ingredients refreshed"
                        ),
                        None => tracing::info!(recipe_id = %id, "Recipe no longer exists"),
                    });
                    if !applied {
                        tracing::debug!(generation, "Discarded stale ingredient refresh");
                    }
                }
                Err(e) => tracing::warn!(error = %e, "Ingredient refresh failed"),
            }
        });
    }

    fn show_degraded(&mut self, reason: &str) {
        tracing::warn!(reason = %reason, "Live updates unavailable");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server)?;

    let open = std::env::args()
        .nth(1)
        .map(|raw| raw.parse::<RecipeId>())
        .transpose()?;

    let api = RecipeApiClient::new(&config.client.api_url, config.client.request_timeout())?;
    let mut view = ConsoleView {
        api,
        runtime: Handle::current(),
        open,
        list: Arc::default(),
        detail: Arc::default(),
    };
    view.reload_list();

    let (ui, inbox) = ui_channel();
    let mut connection =
        ClientConnection::connect(&config.client.live_url, ui, config.live.max_frame_bytes).await;

    if connection.link_state() == LinkState::Live {
        let dispatcher = ReconciliationDispatcher::new();
        tokio::select! {
            _ = inbox.run(&dispatcher, &mut view) => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
            }
        }
    } else {
        let mut inbox = inbox;
        inbox.drain(&ReconciliationDispatcher::new(), &mut view);
    }

    connection.close().await;
    Ok(())
}
