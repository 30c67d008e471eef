use super::selection::SelectionState;
use super::validation::ValidationResult;
use crate::enums::Category;
use serde::{Deserialize, Serialize};

/// Text shown when a section is left empty
pub const INCOMPLETE_SELECTION_MESSAGE: &str =
    "Please select at least one item from each section.";

const SUCCESS_PREFIX: &str = "Your meal plan: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Error,
    Success,
}

impl MessageKind {
    /// BEM modifier for the message element
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Error => "message message--error",
            MessageKind::Success => "message message--success",
        }
    }
}

/// Сообщение для пользователя после нажатия "Generate"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl PlanMessage {
    pub fn from_result(result: &ValidationResult, selection: &SelectionState) -> Self {
        let kind = if result.is_valid() {
            MessageKind::Success
        } else {
            MessageKind::Error
        };
        Self {
            kind,
            text: compose(result, selection),
        }
    }
}

/// Build the message text.
///
/// Valid selections are listed section by section (Starters, Mains,
/// Desserts), items in catalog order, e.g.
/// `Your meal plan: Starters: Soup, Salad | Mains: Steak | Desserts: Ice Cream`.
pub fn compose(result: &ValidationResult, selection: &SelectionState) -> String {
    match result {
        ValidationResult::Invalid { .. } => INCOMPLETE_SELECTION_MESSAGE.to_string(),
        ValidationResult::Valid => {
            let sections: Vec<String> = Category::ALL
                .into_iter()
                .map(|category| {
                    let labels: Vec<&str> = selection
                        .selected_in(category)
                        .iter()
                        .map(|item| item.label)
                        .collect();
                    format!("{}: {}", category.display_name(), labels.join(", "))
                })
                .collect();
            format!("{}{}", SUCCESS_PREFIX, sections.join(" | "))
        }
    }
}
