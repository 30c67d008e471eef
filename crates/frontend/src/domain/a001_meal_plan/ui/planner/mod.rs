//! Meal Planner UI Module
//!
//! Simplified MVVM pattern implementation:
//! - view_model.rs: ViewModel with commands over `contracts` dispatch
//! - view.rs: Leptos component (pure UI)
//! - tab_bar.rs: section tabs

mod tab_bar;
mod view;
mod view_model;

pub use view::MealPlanner;
pub use view_model::MealPlannerViewModel;
