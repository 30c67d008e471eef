use crate::enums::Category;
use thiserror::Error;

/// Ошибки планировщика меню
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MealPlanError {
    /// One or more sections have nothing checked. `empty` is for logs only,
    /// the user always sees the same generic text.
    #[error("Please select at least one item from each section.")]
    IncompleteSelection { empty: Vec<Category> },

    #[error("Unknown menu item: {0}")]
    UnknownItem(String),
}
