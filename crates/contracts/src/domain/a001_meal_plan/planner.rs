//! Command dispatch for the meal planner form.
//!
//! The page keeps one [`PlannerState`] value; every click or checkbox change
//! becomes an [`Action`] and goes through [`dispatch`].

use super::error::MealPlanError;
use super::message::PlanMessage;
use super::panels::PanelVisibility;
use super::selection::SelectionState;
use super::validation::validate;
use crate::enums::Category;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    AwaitingInput,
    ResultDisplayed,
}

/// Действия пользователя на форме
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    SwitchTab { category: Category },
    Toggle { item_id: String, checked: bool },
    Generate,
}

impl Action {
    pub fn switch_tab(category: Category) -> Self {
        Action::SwitchTab { category }
    }

    pub fn check(item_id: impl Into<String>) -> Self {
        Action::Toggle {
            item_id: item_id.into(),
            checked: true,
        }
    }

    pub fn uncheck(item_id: impl Into<String>) -> Self {
        Action::Toggle {
            item_id: item_id.into(),
            checked: false,
        }
    }
}

/// Full form state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PlannerState {
    pub panels: PanelVisibility,
    pub selection: SelectionState,
    pub phase: Phase,
    /// Last generated message. Stays visible until the next Generate.
    pub message: Option<PlanMessage>,
}

impl PlannerState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Result of one dispatched action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: PlannerState,
    /// Only `Generate` produces a message
    pub message: Option<PlanMessage>,
    /// Set when `Generate` found an empty section
    pub validation_error: Option<MealPlanError>,
}

/// Apply an action to the state. On error the caller keeps the old state.
pub fn dispatch(state: PlannerState, action: Action) -> Result<Transition, MealPlanError> {
    let mut next = state;

    let mut validation_error = None;

    let message = match action {
        Action::SwitchTab { category } => {
            next.panels = next.panels.switch_to(category);
            next.phase = Phase::AwaitingInput;
            None
        }
        Action::Toggle { item_id, checked } => {
            next.selection.set(&item_id, checked)?;
            next.phase = Phase::AwaitingInput;
            None
        }
        Action::Generate => {
            let result = validate(&next.selection);
            let message = PlanMessage::from_result(&result, &next.selection);
            validation_error = result.into_result().err();
            next.phase = Phase::ResultDisplayed;
            next.message = Some(message.clone());
            Some(message)
        }
    };

    Ok(Transition {
        state: next,
        message,
        validation_error,
    })
}
