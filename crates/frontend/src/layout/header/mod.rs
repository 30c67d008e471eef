use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__icon">{icon("plate")}</span>
                <span class="header__title">"Meal Planner"</span>
            </div>
        </header>
    }
}
