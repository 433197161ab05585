//! Recipe aggregate and its ingredient lines.
//!
//! Field names mirror the persisted shape and are what clients receive
//! inside change events, so the serde layout here is part of the wire
//! contract.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{IngredientId, RecipeId, Timestamp, ValidationError};

/// Maximum length for a recipe name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Upper bound for the servings count.
pub const MAX_SERVINGS: u32 = 1000;

/// Validated, user-editable recipe fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetails {
    name: String,
    description: Option<String>,
    servings: u32,
    instructions: String,
}

impl RecipeDetails {
    /// Validate and build recipe details.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `InvalidFormat` if the name is too long
    /// - `OutOfRange` if servings is outside `1..=MAX_SERVINGS`
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        servings: u32,
        instructions: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::invalid_format(
                "name",
                format!("must be at most {} characters", MAX_NAME_LENGTH),
            ));
        }
        if servings == 0 || servings > MAX_SERVINGS {
            return Err(ValidationError::out_of_range(
                "servings",
                1,
                i64::from(MAX_SERVINGS),
                i64::from(servings),
            ));
        }

        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            name,
            description,
            servings,
            instructions: instructions.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Validated, user-editable ingredient line fields.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientDetails {
    name: String,
    quantity: f64,
    unit: String,
    note: Option<String>,
}

impl IngredientDetails {
    /// Validate and build ingredient details.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `InvalidFormat` if the quantity is negative, NaN or infinite
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        note: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(ValidationError::invalid_format(
                "quantity",
                "must be a finite, non-negative number",
            ));
        }

        Ok(Self {
            name,
            quantity,
            unit: unit.into().trim().to_string(),
            note: note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
        })
    }
}

/// One line of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLine {
    id: IngredientId,
    recipe_id: RecipeId,
    name: String,
    quantity: f64,
    unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl IngredientLine {
    pub fn new(id: IngredientId, recipe_id: RecipeId, details: IngredientDetails) -> Self {
        Self {
            id,
            recipe_id,
            name: details.name,
            quantity: details.quantity,
            unit: details.unit,
            note: details.note,
        }
    }

    pub fn id(&self) -> IngredientId {
        self.id
    }

    /// Returns the owning recipe's ID.
    pub fn recipe_id(&self) -> RecipeId {
        self.recipe_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

/// Recipe aggregate - a named dish with its ordered ingredient lines.
///
/// # Invariants
///
/// - `name` is non-empty and at most `MAX_NAME_LENGTH` characters
/// - `servings` is within `1..=MAX_SERVINGS`
/// - every ingredient line's `recipe_id` equals `id`
/// - ingredient ids are unique within the recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    id: RecipeId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    servings: u32,
    #[serde(default)]
    instructions: String,
    #[serde(default)]
    ingredients: Vec<IngredientLine>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Recipe {
    /// Create a new recipe with no ingredients.
    pub fn new(id: RecipeId, details: RecipeDetails) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            name: details.name,
            description: details.description,
            servings: details.servings,
            instructions: details.instructions,
            ingredients: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn ingredients(&self) -> &[IngredientLine] {
        &self.ingredients
    }

    /// Looks up an ingredient line by ID.
    pub fn ingredient(&self, id: IngredientId) -> Option<&IngredientLine> {
        self.ingredients.iter().find(|line| line.id == id)
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the editable fields, keeping ingredients untouched.
    pub fn update_details(&mut self, details: RecipeDetails) {
        self.name = details.name;
        self.description = details.description;
        self.servings = details.servings;
        self.instructions = details.instructions;
        self.touch();
    }

    /// Append a new ingredient line built from `details`.
    pub fn add_ingredient(&mut self, id: IngredientId, details: IngredientDetails) -> &IngredientLine {
        let index = self.ingredients.len();
        self.ingredients.push(IngredientLine::new(id, self.id, details));
        self.touch();
        &self.ingredients[index]
    }

    /// Overwrite an existing ingredient line in place.
    ///
    /// Returns `None` if no line with `id` exists.
    pub fn update_ingredient(
        &mut self,
        id: IngredientId,
        details: IngredientDetails,
    ) -> Option<&IngredientLine> {
        let recipe_id = self.id;
        let index = self.ingredients.iter().position(|line| line.id == id)?;
        self.ingredients[index] = IngredientLine::new(id, recipe_id, details);
        self.touch();
        Some(&self.ingredients[index])
    }

    /// Remove an ingredient line, returning it if it existed.
    pub fn remove_ingredient(&mut self, id: IngredientId) -> Option<IngredientLine> {
        let index = self.ingredients.iter().position(|line| line.id == id)?;
        let removed = self.ingredients.remove(index);
        self.touch();
        Some(removed)
    }

    fn touch(&mut self) {
        let now = Timestamp::now();
        if self.updated_at.is_before(&now) {
            self.updated_at = now;
        }
    }
}
