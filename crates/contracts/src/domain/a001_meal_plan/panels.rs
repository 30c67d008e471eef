use crate::enums::Category;
use serde::{Deserialize, Serialize};

/// Visible tab panel. Exactly one category is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelVisibility {
    active: Category,
}

impl PanelVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switching to the active category returns an equal value
    pub fn switch_to(self, category: Category) -> Self {
        Self { active: category }
    }

    pub fn active(&self) -> Category {
        self.active
    }

    pub fn is_visible(&self, category: Category) -> bool {
        self.active == category
    }

    pub fn visible_panels(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.is_visible(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starters_active_by_default() {
        let panels = PanelVisibility::new();
        assert_eq!(panels.active(), Category::Starters);
        assert_eq!(panels.visible_panels(), vec![Category::Starters]);
    }

    #[test]
    fn test_switch_shows_one_hides_rest() {
        for target in Category::all() {
            let panels = PanelVisibility::new().switch_to(target);
            assert!(panels.is_visible(target));
            assert_eq!(panels.visible_panels(), vec![target]);
        }
    }

    #[test]
    fn test_switch_is_idempotent() {
        let once = PanelVisibility::new().switch_to(Category::Mains);
        assert_eq!(once.switch_to(Category::Mains), once);
    }
}
