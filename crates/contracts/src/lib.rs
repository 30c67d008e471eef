//! Shared domain contracts for the meal planner.
//!
//! Everything here is pure: the frontend owns the state value and feeds
//! it through [`domain::a001_meal_plan::dispatch`].

pub mod domain;
pub mod enums;
