use contracts::domain::a001_meal_plan::MenuItem;
use leptos::prelude::*;

/// Checkbox bound to one menu item. The input id is the item id
/// (`main-pizza`), the label is the item label.
#[component]
pub fn MenuItemCheckbox(
    item: MenuItem,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Receives the new checked value
    on_change: Callback<bool>,
) -> impl IntoView {
    let wrapper_class = move || {
        if checked.get() {
            "form__checkbox-wrapper form__checkbox-wrapper--checked"
        } else {
            "form__checkbox-wrapper"
        }
    };

    view! {
        <div class=wrapper_class>
            <input
                id=item.id
                type="checkbox"
                class="form__checkbox"
                name=item.category.code()
                value=item.id
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for=item.id>
                {item.label}
            </label>
        </div>
    }
}
