//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod recipe;

pub use recipe::{
    // Commands
    AddIngredientCommand, AddIngredientHandler,
    CreateRecipeCommand, CreateRecipeHandler,
    DeleteRecipeCommand, DeleteRecipeHandler,
    RemoveIngredientCommand, RemoveIngredientHandler,
    UpdateIngredientCommand, UpdateIngredientHandler,
    UpdateRecipeCommand, UpdateRecipeHandler,
    // Queries
    GetRecipeHandler, GetRecipeQuery,
    ListRecipesHandler, ListRecipesQuery,
};
