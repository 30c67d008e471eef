use super::view_model::MealPlannerViewModel;
use crate::shared::icons::icon;
use contracts::enums::Category;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize, Flex, FlexGap};

/// Section tabs using THAW buttons. Button ids are `tab-<code>`.
#[component]
pub fn TabBar(vm: MealPlannerViewModel) -> impl IntoView {
    view! {
        <div class="tab-bar" role="tablist">
            <Flex gap=FlexGap::Small>
                {Category::ALL
                    .into_iter()
                    .map(move |category| {
                        let is_active = vm.is_active(category);
                        view! {
                            <Button
                                attr:id=category.tab_id()
                                attr:role="tab"
                                attr:aria-selected=move || is_active.get().to_string()
                                appearance=Signal::derive(move || {
                                    if is_active.get() {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Subtle
                                    }
                                })
                                size=ButtonSize::Small
                                on_click=move |_| vm.switch_tab_command(category)
                            >
                                <span class="tab-icon">{icon(category.code())}</span>
                                {category.display_name()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </Flex>
        </div>
    }
}
