use super::tab_bar::TabBar;
use super::view_model::{message_class, panel_class, MealPlannerViewModel};
use crate::shared::components::ui::MenuItemCheckbox;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::domain::a001_meal_plan::catalog;
use contracts::enums::Category;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn MealPlanner() -> impl IntoView {
    let vm = use_context::<MealPlannerViewModel>().unwrap_or_default();

    view! {
        <PageFrame page_id="a001_meal_plan--usecase" category=PAGE_CAT_USECASE class="meal-planner">
            <div class="page__header">
                <h2>"Plan your meal"</h2>
                <p class="page__hint">"Pick at least one dish from each section."</p>
            </div>

            <div class="page__content">
                <TabBar vm=vm />

                {Category::ALL
                    .into_iter()
                    .map(move |category| view! { <CategoryPanel vm=vm category=category /> })
                    .collect_view()}

                <div class="page__actions">
                    <Button
                        attr:id="generate-btn"
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.generate_command()
                    >
                        {icon("generate")}
                        "Generate"
                    </Button>
                </div>

                <div
                    id="message"
                    class=move || message_class(vm.message().as_ref())
                    aria-live="polite"
                >
                    {move || vm.message().map(|m| m.text).unwrap_or_default()}
                </div>
            </div>
        </PageFrame>
    }
}

/// One tab panel with the checkboxes of its category
#[component]
fn CategoryPanel(vm: MealPlannerViewModel, category: Category) -> impl IntoView {
    let is_active = vm.is_active(category);

    view! {
        <div
            id=category.panel_id()
            class=move || panel_class(is_active.get())
            role="tabpanel"
            aria-labelledby=category.tab_id()
        >
            {catalog::items_in(category)
                .map(move |item| {
                    let item = *item;
                    view! {
                        <MenuItemCheckbox
                            item=item
                            checked=vm.is_checked(item.id)
                            on_change=Callback::new(move |checked: bool| vm.toggle_command(item.id, checked))
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
