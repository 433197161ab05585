//! Strongly-typed identifier value objects.
//!
//! Recipe and ingredient identifiers are integers assigned by the store and
//! travel on the wire as plain JSON numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(i64);

impl RecipeId {
    /// Creates a RecipeId from a raw integer.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner integer.
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecipeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i64> for RecipeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Unique identifier for an ingredient line within a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(i64);

impl IngredientId {
    /// Creates an IngredientId from a raw integer.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner integer.
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IngredientId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i64> for IngredientId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&RecipeId::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn recipe_id_parses_from_path_segment() {
        let id: RecipeId = "17".parse().unwrap();
        assert_eq!(id.value(), 17);
        assert!("seventeen".parse::<RecipeId>().is_err());
    }

    #[test]
    fn ingredient_id_deserializes_from_integer() {
        let id: IngredientId = serde_json::from_str("9").unwrap();
        assert_eq!(id, IngredientId::new(9));
    }

    #[test]
    fn ids_display_their_value() {
        assert_eq!(RecipeId::new(3).to_string(), "3");
        assert_eq!(IngredientId::new(12).to_string(), "12");
    }
}
