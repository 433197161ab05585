//! Recipe command and query handlers.
//!
//! Every command handler persists first and only then hands exactly one
//! change event to the `ChangeNotifier`. Failed or rejected commands
//! publish nothing.

mod add_ingredient;
mod create_recipe;
mod delete_recipe;
mod get_recipe;
mod list_recipes;
mod remove_ingredient;
mod update_ingredient;
mod update_recipe;

#[cfg(test)]
pub(crate) mod test_support;

pub use add_ingredient::{AddIngredientCommand, AddIngredientHandler};
pub use create_recipe::{CreateRecipeCommand, CreateRecipeHandler};
pub use delete_recipe::{DeleteRecipeCommand, DeleteRecipeHandler};
pub use get_recipe::{GetRecipeHandler, GetRecipeQuery};
pub use list_recipes::{ListRecipesHandler, ListRecipesQuery};
pub use remove_ingredient::{RemoveIngredientCommand, RemoveIngredientHandler};
pub use update_ingredient::{UpdateIngredientCommand, UpdateIngredientHandler};
pub use update_recipe::{UpdateRecipeCommand, UpdateRecipeHandler};
