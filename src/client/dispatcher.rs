//! Client-side reconciliation of change events against the open view.
//!
//! For each event the dispatcher compares the event's owning recipe with the
//! recipe currently open and picks the smallest refresh that brings the view
//! back in line:
//!
//! | Event | Nothing open / other recipe open | Target recipe open |
//! |---|---|---|
//! | EntityCreated | refresh list | refresh list |
//! | EntityDeleted | refresh list | refresh list, close detail |
//! | EntityContentUpdated | refresh list | refresh list, reload detail from payload |
//! | Child* | nothing | refresh ingredients |
//!
//! Every action is a full reload of its region, so applying the same event
//! twice leaves the view as applying it once.

use crate::domain::foundation::RecipeId;
use crate::domain::live::ChangeEvent;
use crate::domain::recipe::Recipe;
use crate::ports::RecipeView;

use super::handoff::LiveUpdate;

/// One refresh the view must perform.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshAction {
    RefreshList,
    /// Repopulate the open detail view from the event payload.
    ReloadDetail(Recipe),
    CloseDetail(RecipeId),
    RefreshIngredients(RecipeId),
}

/// Decides and applies refresh actions for incoming live updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconciliationDispatcher;

impl ReconciliationDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Decide which refreshes `event` requires given the open recipe.
    pub fn plan(&self, event: &ChangeEvent, open_recipe_id: Option<RecipeId>) -> Vec<RefreshAction> {
        let is_open = open_recipe_id == Some(event.target_id());

        match event {
            ChangeEvent::EntityCreated(_) => vec![RefreshAction::RefreshList],
            ChangeEvent::EntityDeleted(e) => {
                let mut actions = vec![RefreshAction::RefreshList];
                if is_open {
                    actions.push(RefreshAction::CloseDetail(e.target_id));
                }
                actions
            }
            ChangeEvent::EntityContentUpdated(e) => {
                let mut actions = vec![RefreshAction::RefreshList];
                if is_open {
                    actions.push(RefreshAction::ReloadDetail(e.entity.clone()));
                }
                actions
            }
            ChangeEvent::ChildCreated(_)
            | ChangeEvent::ChildDeleted(_)
            | ChangeEvent::ChildUpdated(_) => {
                if is_open {
                    vec![RefreshAction::RefreshIngredients(event.target_id())]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Plan for `event` against the view's open recipe and apply the result.
    pub fn dispatch<V: RecipeView + ?Sized>(&self, event: &ChangeEvent, view: &mut V) {
        let actions = self.plan(event, view.open_recipe_id());

        tracing::debug!(
            kind = %event.kind(),
            target_id = %event.target_id(),
            actions = actions.len(),
            "Reconciling live update"
        );

        for action in actions {
            match action {
                RefreshAction::RefreshList => view.refresh_recipe_list(),
                RefreshAction::ReloadDetail(recipe) => view.show_recipe(&recipe),
                RefreshAction::CloseDetail(id) => view.close_recipe(id),
                RefreshAction::RefreshIngredients(id) => view.refresh_ingredients(id),
            }
        }
    }

    /// Route one handoff item to the view.
    pub fn apply<V: RecipeView + ?Sized>(&self, update: LiveUpdate, view: &mut V) {
        match update {
            LiveUpdate::Event(event) => self.dispatch(&event, view),
            LiveUpdate::Degraded(reason) => view.show_degraded(&reason),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::RecordingView;
    use super::*;
    use crate::domain::foundation::IngredientId;
    use crate::domain::recipe::{IngredientDetails, IngredientLine, RecipeDetails};

    fn recipe(id: i64, name: &str) -> Recipe {
        Recipe::new(
            RecipeId::new(id),
            RecipeDetails::new(name, None, 2, "Mix.").unwrap(),
        )
    }

    fn line(recipe_id: i64, id: i64) -> IngredientLine {
        IngredientLine::new(
            IngredientId::new(id),
            RecipeId::new(recipe_id),
            IngredientDetails::new("Salt", 1.0, "tsp", None).unwrap(),
        )
    }

    fn every_event_for(id: i64) -> Vec<ChangeEvent> {
        vec![
            ChangeEvent::entity_created(recipe(id, "Bread")),
            ChangeEvent::entity_deleted(RecipeId::new(id)),
            ChangeEvent::entity_content_updated(recipe(id, "Bread")),
            ChangeEvent::child_created(line(id, 1)),
            ChangeEvent::child_deleted(RecipeId::new(id), IngredientId::new(1)),
            ChangeEvent::child_updated(line(id, 1)),
        ]
    }

    // ════════════════════════════════════════════════════════════════════════
    // plan
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn created_elsewhere_refreshes_list_only() {
        let dispatcher = ReconciliationDispatcher::new();
        let event = ChangeEvent::entity_created(recipe(9, "Soup"));

        assert_eq!(
            dispatcher.plan(&event, Some(RecipeId::new(7))),
            vec![RefreshAction::RefreshList]
        );
    }

    #[test]
    fn deleting_the_open_recipe_closes_it() {
        let dispatcher = ReconciliationDispatcher::new();
        let event = ChangeEvent::entity_deleted(RecipeId::new(7));

        assert_eq!(
            dispatcher.plan(&event, Some(RecipeId::new(7))),
            vec![
                RefreshAction::RefreshList,
                RefreshAction::CloseDetail(RecipeId::new(7))
            ]
        );
    }

    #[test]
    fn deleting_another_recipe_only_refreshes_list() {
        let dispatcher = ReconciliationDispatcher::new();
        let event = ChangeEvent::entity_deleted(RecipeId::new(8));

        assert_eq!(
            dispatcher.plan(&event, Some(RecipeId::new(7))),
            vec![RefreshAction::RefreshList]
        );
    }

    #[test]
    fn updating_the_open_recipe_reloads_from_payload() {
        let dispatcher = ReconciliationDispatcher::new();
        let updated = recipe(7, "Better Soup");
        let event = ChangeEvent::entity_content_updated(updated.clone());

        assert_eq!(
            dispatcher.plan(&event, Some(RecipeId::new(7))),
            vec![
                RefreshAction::RefreshList,
                RefreshAction::ReloadDetail(updated)
            ]
        );
    }

    #[test]
    fn child_events_for_open_recipe_refresh_ingredients() {
        let dispatcher = ReconciliationDispatcher::new();
        let open = Some(RecipeId::new(7));

        for event in [
            ChangeEvent::child_created(line(7, 1)),
            ChangeEvent::child_deleted(RecipeId::new(7), IngredientId::new(1)),
            ChangeEvent::child_updated(line(7, 1)),
        ] {
            assert_eq!(
                dispatcher.plan(&event, open),
                vec![RefreshAction::RefreshIngredients(RecipeId::new(7))],
                "{}",
                event.kind()
            );
        }
    }

    #[test]
    fn child_events_for_other_recipes_do_nothing() {
        let dispatcher = ReconciliationDispatcher::new();
        let event = ChangeEvent::child_created(line(8, 1));

        assert!(dispatcher.plan(&event, Some(RecipeId::new(7))).is_empty());
        assert!(dispatcher.plan(&event, None).is_empty());
    }

    #[test]
    fn nothing_open_means_only_list_refreshes() {
        let dispatcher = ReconciliationDispatcher::new();

        for event in every_event_for(3) {
            let actions = dispatcher.plan(&event, None);
            assert!(
                actions.iter().all(|a| *a == RefreshAction::RefreshList),
                "{} produced {:?}",
                event.kind(),
                actions
            );
            assert_eq!(actions.is_empty(), !event.kind().is_entity_level());
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // dispatch
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn dispatch_applies_plan_to_view() {
        let dispatcher = ReconciliationDispatcher::new();
        let mut view = RecordingView::with_open(Some(RecipeId::new(7)));

        dispatcher.dispatch(&ChangeEvent::entity_deleted(RecipeId::new(7)), &mut view);

        assert_eq!(view.calls, vec!["refresh_list", "close_recipe 7"]);
        assert_eq!(view.open, None);
    }

    #[test]
    fn dispatching_twice_matches_dispatching_once() {
        let dispatcher = ReconciliationDispatcher::new();

        for event in every_event_for(7) {
            let mut once = RecordingView::with_open(Some(RecipeId::new(7)));
            dispatcher.dispatch(&event, &mut once);

            let mut twice = RecordingView::with_open(Some(RecipeId::new(7)));
            dispatcher.dispatch(&event, &mut twice);
            dispatcher.dispatch(&event, &mut twice);

            assert_eq!(once.open, twice.open, "{}", event.kind());
            assert_eq!(once.shown, twice.shown, "{}", event.kind());
        }
    }

    #[test]
    fn degraded_update_reaches_the_view() {
        let dispatcher = ReconciliationDispatcher::new();
        let mut view = RecordingView::with_open(None);

        dispatcher.apply(LiveUpdate::Degraded("connection refused".to_string()), &mut view);

        assert_eq!(view.calls, vec!["degraded: connection refused"]);
    }
}
