use super::error::MealPlanError;
use super::selection::SelectionState;
use crate::enums::Category;

/// Итог проверки выбора
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    /// `empty` lists sections without a checked item, in tab order
    Invalid { empty: Vec<Category> },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn into_result(self) -> Result<(), MealPlanError> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid { empty } => {
                Err(MealPlanError::IncompleteSelection { empty })
            }
        }
    }
}

/// Every section needs at least one checked item. All sections are checked
/// the same way.
pub fn validate(selection: &SelectionState) -> ValidationResult {
    let empty: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|c| !selection.has_selection(*c))
        .collect();

    if empty.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid { empty }
    }
}
