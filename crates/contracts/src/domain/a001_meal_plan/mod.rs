//! Meal plan: catalog, form state and the pure operations over it.
//!
//! - catalog.rs: static menu items
//! - selection.rs: per-item checked flags
//! - panels.rs: which tab panel is visible
//! - validation.rs / message.rs: generate-button logic
//! - planner.rs: command dispatch tying it together

pub mod catalog;
pub mod error;
pub mod message;
pub mod panels;
pub mod planner;
pub mod selection;
pub mod validation;

pub use catalog::{MenuItem, MENU};
pub use error::MealPlanError;
pub use message::{compose, MessageKind, PlanMessage, INCOMPLETE_SELECTION_MESSAGE};
pub use panels::PanelVisibility;
pub use planner::{dispatch, Action, Phase, PlannerState, Transition};
pub use selection::SelectionState;
pub use validation::{validate, ValidationResult};
