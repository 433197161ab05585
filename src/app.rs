//! Application assembly: wires storage, the broadcast hub and the routers.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::adapters::http::{health_routes, recipe_routes, RecipeHandlers};
use crate::adapters::memory::InMemoryRecipeRepository;
use crate::adapters::websocket::{live_updates_routes, BroadcastHub, LiveUpdatesState};
use crate::config::{AppConfig, LogFormat, ServerConfig};
use crate::ports::{ChangeNotifier, RecipeRepository};

/// A fully wired server: the router plus handles tests and ops need.
pub struct RecipeBookApp {
    pub repository: Arc<dyn RecipeRepository>,
    pub hub: Arc<BroadcastHub>,
    router: Router,
}

impl RecipeBookApp {
    /// Build the app with in-memory storage.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_repository(config, Arc::new(InMemoryRecipeRepository::new()))
    }

    pub fn with_repository(config: &AppConfig, repository: Arc<dyn RecipeRepository>) -> Self {
        let hub = BroadcastHub::new_shared(config.live.session_buffer);
        let notifier: Arc<dyn ChangeNotifier> = hub.clone();

        let handlers = RecipeHandlers::new(repository.clone(), notifier);
        let live_state = LiveUpdatesState::new(hub.clone(), config.live.ping_interval());

        let router = Router::new()
            .nest("/api/recipes", recipe_routes(handlers))
            .merge(health_routes())
            .merge(live_updates_routes(live_state, &config.live.path))
            .layer(TimeoutLayer::new(config.server.request_timeout()))
            .layer(cors_layer(&config.server))
            .layer(TraceLayer::new_for_http());

        Self {
            repository,
            hub,
            router,
        }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides `server.log_level`.
pub fn init_tracing(server: &ServerConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.log_format == LogFormat::Json {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    }
}
