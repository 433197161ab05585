//! Change events pushed to connected clients after a recipe mutation.
//!
//! The set of variants is closed. Every dispatch site matches exhaustively,
//! so a new variant does not compile until each receiver decides what to do
//! with it.
//!
//! # Wire shape
//!
//! ```text
//! { "type": "ChildUpdated", "targetId": 3, "child": { "id": 12, "recipeId": 3, ... } }
//! ```
//!
//! `targetId` is always the owning recipe's ID, including for child-level
//! events, so receivers can decide relevance without a follow-up query.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{IngredientId, RecipeId};
use crate::domain::recipe::{IngredientLine, Recipe};

/// A notification that a recipe or one of its ingredient lines changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChangeEvent {
    /// A new recipe now exists.
    EntityCreated(EntityCreated),
    /// A recipe no longer exists.
    EntityDeleted(EntityDeleted),
    /// A recipe's fields changed.
    EntityContentUpdated(EntityContentUpdated),
    /// An ingredient line was added to a recipe.
    ChildCreated(ChildCreated),
    /// An ingredient line was removed from a recipe.
    ChildDeleted(ChildDeleted),
    /// An ingredient line's fields changed.
    ChildUpdated(ChildUpdated),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityCreated {
    pub target_id: RecipeId,
    pub entity: Recipe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDeleted {
    pub target_id: RecipeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityContentUpdated {
    pub target_id: RecipeId,
    pub entity: Recipe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildCreated {
    pub target_id: RecipeId,
    pub child: IngredientLine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildDeleted {
    pub target_id: RecipeId,
    pub child_id: IngredientId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildUpdated {
    pub target_id: RecipeId,
    pub child: IngredientLine,
}

impl ChangeEvent {
    pub fn entity_created(recipe: Recipe) -> Self {
        ChangeEvent::EntityCreated(EntityCreated {
            target_id: recipe.id(),
            entity: recipe,
        })
    }

    pub fn entity_deleted(id: RecipeId) -> Self {
        ChangeEvent::EntityDeleted(EntityDeleted { target_id: id })
    }

    pub fn entity_content_updated(recipe: Recipe) -> Self {
        ChangeEvent::EntityContentUpdated(EntityContentUpdated {
            target_id: recipe.id(),
            entity: recipe,
        })
    }

    pub fn child_created(line: IngredientLine) -> Self {
        ChangeEvent::ChildCreated(ChildCreated {
            target_id: line.recipe_id(),
            child: line,
        })
    }

    pub fn child_deleted(recipe_id: RecipeId, child_id: IngredientId) -> Self {
        ChangeEvent::ChildDeleted(ChildDeleted {
            target_id: recipe_id,
            child_id,
        })
    }

    pub fn child_updated(line: IngredientLine) -> Self {
        ChangeEvent::ChildUpdated(ChildUpdated {
            target_id: line.recipe_id(),
            child: line,
        })
    }

    /// The owning recipe's ID.
    pub fn target_id(&self) -> RecipeId {
        match self {
            ChangeEvent::EntityCreated(e) => e.target_id,
            ChangeEvent::EntityDeleted(e) => e.target_id,
            ChangeEvent::EntityContentUpdated(e) => e.target_id,
            ChangeEvent::ChildCreated(e) => e.target_id,
            ChangeEvent::ChildDeleted(e) => e.target_id,
            ChangeEvent::ChildUpdated(e) => e.target_id,
        }
    }

    pub fn kind(&self) -> ChangeKind {
        match self {
            ChangeEvent::EntityCreated(_) => ChangeKind::EntityCreated,
            ChangeEvent::EntityDeleted(_) => ChangeKind::EntityDeleted,
            ChangeEvent::EntityContentUpdated(_) => ChangeKind::EntityContentUpdated,
            ChangeEvent::ChildCreated(_) => ChangeKind::ChildCreated,
            ChangeEvent::ChildDeleted(_) => ChangeKind::ChildDeleted,
            ChangeEvent::ChildUpdated(_) => ChangeKind::ChildUpdated,
        }
    }
}

/// Discriminator values carried in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    EntityCreated,
    EntityDeleted,
    EntityContentUpdated,
    ChildCreated,
    ChildDeleted,
    ChildUpdated,
}

impl ChangeKind {
    pub const ALL: [ChangeKind; 6] = [
        ChangeKind::EntityCreated,
        ChangeKind::EntityDeleted,
        ChangeKind::EntityContentUpdated,
        ChangeKind::ChildCreated,
        ChangeKind::ChildDeleted,
        ChangeKind::ChildUpdated,
    ];

    /// The wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::EntityCreated => "EntityCreated",
            ChangeKind::EntityDeleted => "EntityDeleted",
            ChangeKind::EntityContentUpdated => "EntityContentUpdated",
            ChangeKind::ChildCreated => "ChildCreated",
            ChangeKind::ChildDeleted => "ChildDeleted",
            ChangeKind::ChildUpdated => "ChildUpdated",
        }
    }

    /// Looks up a kind by wire name; `None` for names this build doesn't know.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Whether this kind concerns a recipe itself rather than an ingredient line.
    pub fn is_entity_level(&self) -> bool {
        matches!(
            self,
            ChangeKind::EntityCreated | ChangeKind::EntityDeleted | ChangeKind::EntityContentUpdated
        )
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
