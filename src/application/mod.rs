//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    AddIngredientCommand, AddIngredientHandler, CreateRecipeCommand, CreateRecipeHandler,
    DeleteRecipeCommand, DeleteRecipeHandler, GetRecipeHandler, GetRecipeQuery,
    ListRecipesHandler, ListRecipesQuery, RemoveIngredientCommand, RemoveIngredientHandler,
    UpdateIngredientCommand, UpdateIngredientHandler, UpdateRecipeCommand, UpdateRecipeHandler,
};
