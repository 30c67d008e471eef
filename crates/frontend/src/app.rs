use crate::domain::a001_meal_plan::ui::planner::{MealPlanner, MealPlannerViewModel};
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One planner state per page load, shared with the form via context.
    provide_context(MealPlannerViewModel::new());

    view! {
        <Shell>
            <MealPlanner />
        </Shell>
    }
}
