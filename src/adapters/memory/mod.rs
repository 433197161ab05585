//! In-memory adapters.

mod recipe_repository;

pub use recipe_repository::InMemoryRecipeRepository;
