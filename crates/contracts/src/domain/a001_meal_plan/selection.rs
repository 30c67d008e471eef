use super::catalog::{self, MenuItem, MENU};
use super::error::MealPlanError;
use crate::enums::Category;
use serde::Serialize;
use std::collections::BTreeMap;

/// Checked flag for every menu item. Keys are fixed to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    selected: BTreeMap<&'static str, bool>,
}

impl SelectionState {
    /// Все пункты сняты
    pub fn new() -> Self {
        Self {
            selected: MENU.iter().map(|item| (item.id, false)).collect(),
        }
    }

    /// Set the flag of one item. Unknown ids are rejected.
    pub fn set(&mut self, item_id: &str, checked: bool) -> Result<(), MealPlanError> {
        let item = catalog::find(item_id)
            .ok_or_else(|| MealPlanError::UnknownItem(item_id.to_string()))?;
        self.selected.insert(item.id, checked);
        Ok(())
    }

    /// Builder form of [`SelectionState::set`] with `checked = true`
    pub fn with(mut self, item_id: &str) -> Result<Self, MealPlanError> {
        self.set(item_id, true)?;
        Ok(self)
    }

    pub fn is_selected(&self, item_id: &str) -> bool {
        self.selected.get(item_id).copied().unwrap_or(false)
    }

    pub fn has_selection(&self, category: Category) -> bool {
        catalog::items_in(category).any(|item| self.is_selected(item.id))
    }

    /// Checked items of a category in catalog order
    pub fn selected_in(&self, category: Category) -> Vec<&'static MenuItem> {
        catalog::items_in(category)
            .filter(|item| self.is_selected(item.id))
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.values().filter(|checked| **checked).count()
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_unchecked_by_default() {
        let state = SelectionState::new();
        assert!(MENU.iter().all(|item| !state.is_selected(item.id)));
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_set_marks_only_that_item() {
        let mut state = SelectionState::new();
        state.set("starter-soup", true).unwrap();
        assert!(state.is_selected("starter-soup"));
        assert_eq!(state.selected_count(), 1);

        state.set("starter-soup", false).unwrap();
        assert!(!state.is_selected("starter-soup"));
    }

    #[test]
    fn test_unknown_item_rejected() {
        let mut state = SelectionState::new();
        let err = state.set("main-sushi", true).unwrap_err();
        assert_eq!(err, MealPlanError::UnknownItem("main-sushi".into()));
        assert_eq!(state, SelectionState::new());
    }

    #[test]
    fn test_selected_in_uses_catalog_order() {
        let state = SelectionState::new()
            .with("starter-bread")
            .and_then(|s| s.with("starter-soup"))
            .unwrap();
        let labels: Vec<_> = state
            .selected_in(Category::Starters)
            .iter()
            .map(|i| i.label)
            .collect();
        assert_eq!(labels, vec!["Soup", "Garlic Bread"]);
        assert!(state.has_selection(Category::Starters));
        assert!(!state.has_selection(Category::Mains));
    }
}
