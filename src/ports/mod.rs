//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RecipeRepository` - Recipe persistence
//! - `ChangeNotifier` - Announces committed changes to connected clients
//! - `ViewState` / `RecipeView` - Client GUI layer consulted by live updates

mod change_notifier;
mod recipe_repository;
mod recipe_view;

pub use change_notifier::ChangeNotifier;
pub use recipe_repository::{RecipeFilter, RecipeRepository};
pub use recipe_view::{RecipeView, ViewState};
