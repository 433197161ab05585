//! Client-side view ports.
//!
//! The GUI layer implements these. Live-update reconciliation reads
//! [`ViewState`] and calls into [`RecipeView`]; it never touches
//! persistence and never changes which recipe is open on its own.

use crate::domain::foundation::RecipeId;
use crate::domain::recipe::Recipe;

/// Read-only view of what the user is currently looking at.
pub trait ViewState {
    /// The recipe open in the detail view, if any.
    fn open_recipe_id(&self) -> Option<RecipeId>;
}

/// Refresh entry points of the GUI layer.
///
/// Every method is a full reload of the affected region, so calling one
/// twice leaves the view exactly as calling it once.
pub trait RecipeView: ViewState {
    /// Reload the list of recipes.
    fn refresh_recipe_list(&mut self);

    /// Repopulate the open detail view from `recipe`.
    fn show_recipe(&mut self, recipe: &Recipe);

    /// Close the detail view for a recipe that no longer exists.
    fn close_recipe(&mut self, id: RecipeId);

    /// Reload the ingredient list inside the open detail view.
    fn refresh_ingredients(&mut self, id: RecipeId);

    /// Show that live updates are unavailable.
    fn show_degraded(&mut self, reason: &str);
}
